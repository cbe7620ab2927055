//! Algorithm tuning
//!
//! Thresholds that pick between strategies, plus a cap on scratch memory.
//! The defaults reproduce the classic constants; the builder validates
//! overrides.

use thiserror::Error;

/// Errors raised while building a [`Tuning`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold that must be positive was zero.
    #[error("{name} must be at least 1")]
    ZeroThreshold {
        /// Name of the offending field.
        name: &'static str,
    },

    /// The insertion threshold exceeds what a final insertion pass can handle
    /// in bounded time.
    #[error("introsort threshold {value} exceeds maximum {max}")]
    ThresholdTooLarge {
        /// Requested threshold.
        value: usize,
        /// Largest accepted threshold.
        max: usize,
    },
}

/// Strategy thresholds and scratch limits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// Introsort leaves sub-ranges of at most this many elements to the
    /// final insertion sort.
    pub introsort_threshold: usize,
    /// The forward merge sort asks for a buffer only when `n / 2` reaches
    /// this.
    pub merge_buffer_threshold: usize,
    /// `inplace_merge` asks for a buffer only when the left run is longer
    /// than this.
    pub inplace_merge_buffer_threshold: usize,
    /// Upper bound on scratch elements per call; `None` is unlimited.
    pub scratch_limit: Option<usize>,
}

impl Tuning {
    /// Largest accepted `introsort_threshold`.
    pub const MAX_INTROSORT_THRESHOLD: usize = 1 << 10;

    /// Start a validated override of the defaults.
    pub fn builder() -> TuningBuilder {
        TuningBuilder {
            tuning: Tuning::default(),
        }
    }

    /// Defaults with scratch memory disabled, forcing buffer-less merges.
    pub fn without_scratch() -> Self {
        Tuning {
            scratch_limit: Some(0),
            ..Tuning::default()
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            introsort_threshold: 16,
            merge_buffer_threshold: 16,
            inplace_merge_buffer_threshold: 8,
            scratch_limit: None,
        }
    }
}

/// Builder for [`Tuning`].
#[derive(Debug, Clone)]
pub struct TuningBuilder {
    tuning: Tuning,
}

impl TuningBuilder {
    /// Set the introsort insertion threshold.
    pub fn with_introsort_threshold(mut self, threshold: usize) -> Self {
        self.tuning.introsort_threshold = threshold;
        self
    }

    /// Set the forward merge sort buffer threshold.
    pub fn with_merge_buffer_threshold(mut self, threshold: usize) -> Self {
        self.tuning.merge_buffer_threshold = threshold;
        self
    }

    /// Set the `inplace_merge` buffer threshold.
    pub fn with_inplace_merge_buffer_threshold(mut self, threshold: usize) -> Self {
        self.tuning.inplace_merge_buffer_threshold = threshold;
        self
    }

    /// Cap scratch memory, in elements.
    pub fn with_scratch_limit(mut self, limit: Option<usize>) -> Self {
        self.tuning.scratch_limit = limit;
        self
    }

    /// Validate and finish.
    pub fn build(self) -> Result<Tuning, ConfigError> {
        let t = self.tuning;
        if t.introsort_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "introsort_threshold",
            });
        }
        if t.introsort_threshold > Tuning::MAX_INTROSORT_THRESHOLD {
            return Err(ConfigError::ThresholdTooLarge {
                value: t.introsort_threshold,
                max: Tuning::MAX_INTROSORT_THRESHOLD,
            });
        }
        if t.merge_buffer_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "merge_buffer_threshold",
            });
        }
        if t.inplace_merge_buffer_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "inplace_merge_buffer_threshold",
            });
        }
        Ok(t)
    }
}
