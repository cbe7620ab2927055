//! Result tuples
//!
//! Algorithms report where they stopped instead of failing; these carry the
//! final positions.

/// Half-open range `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subrange<C> {
    /// First position.
    pub begin: C,
    /// One past the last position.
    pub end: C,
}

impl<C: PartialEq> Subrange<C> {
    /// Whether the range holds no position.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Final input cursor and output cursor of a one-input copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InOut<I, O> {
    /// Where reading stopped.
    pub input: I,
    /// Where writing stopped.
    pub out: O,
}

/// Final cursors of a two-input, one-output algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InInOut<I1, I2, O> {
    /// Where reading the first range stopped.
    pub in1: I1,
    /// Where reading the second range stopped.
    pub in2: I2,
    /// Where writing stopped.
    pub out: O,
}

/// Smallest and largest of something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinMax<T> {
    /// The minimum.
    pub min: T,
    /// The maximum.
    pub max: T,
}
