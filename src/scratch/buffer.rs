//! Scratch acquisition

use tracing::debug;

use super::StagingVec;

/// Temporary element storage owned by one algorithm invocation.
///
/// The capacity is obtained with a fallible reservation that halves the
/// request after each failure, so it may be smaller than asked for, down to
/// zero. Callers fall back to buffer-less strategies when it is too small.
#[derive(Debug)]
pub struct ScratchBuffer<T> {
    storage: Vec<T>,
    granted: usize,
    requested: usize,
}

impl<T> ScratchBuffer<T> {
    /// Buffer with no capacity.
    pub fn empty() -> Self {
        ScratchBuffer {
            storage: Vec::new(),
            granted: 0,
            requested: 0,
        }
    }

    /// Reserve room for up to `requested` elements.
    pub fn acquire(requested: usize) -> Self {
        Self::acquire_limited(requested, None)
    }

    /// Reserve room for up to `requested` elements, never more than `limit`.
    pub fn acquire_limited(requested: usize, limit: Option<usize>) -> Self {
        let mut want = limit.map_or(requested, |cap| requested.min(cap));
        let mut storage = Vec::new();
        while want > 0 {
            match storage.try_reserve_exact(want) {
                Ok(()) => break,
                Err(_) => want /= 2,
            }
        }
        if want < requested {
            debug!(requested, granted = want, "scratch buffer shortfall");
        }
        ScratchBuffer {
            storage,
            granted: want,
            requested,
        }
    }

    /// Elements this buffer can stage at once.
    pub fn capacity(&self) -> usize {
        self.granted
    }

    /// Size originally asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Whether no element can be staged.
    pub fn is_empty(&self) -> bool {
        self.granted == 0
    }

    /// Borrow the storage as an empty staging area.
    pub fn staging(&mut self) -> StagingVec<'_, T> {
        StagingVec::new(&mut self.storage, self.granted)
    }
}
