//! Typed staging over scratch storage

use std::vec::Drain;

/// Growable staging area borrowed from a [`super::ScratchBuffer`].
///
/// Elements pushed here are owned by the staging area until drained. Dropping
/// it, on normal return or while unwinding from a panicking relation,
/// destroys whatever is still staged and leaves the scratch storage empty.
#[derive(Debug)]
pub struct StagingVec<'b, T> {
    storage: &'b mut Vec<T>,
    capacity: usize,
}

impl<'b, T> StagingVec<'b, T> {
    pub(super) fn new(storage: &'b mut Vec<T>, capacity: usize) -> Self {
        storage.clear();
        StagingVec { storage, capacity }
    }

    /// Stage one element. The caller keeps the count within `capacity`.
    pub fn push(&mut self, value: T) {
        debug_assert!(
            self.storage.len() < self.capacity,
            "staging area overflow ({} elements)",
            self.capacity
        );
        self.storage.push(value);
    }

    /// Elements currently staged.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Maximum number of staged elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Staged elements in push order.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Move the staged elements out in push order. Elements left in the
    /// iterator when it is dropped are destroyed.
    pub fn drain(&mut self) -> Drain<'_, T> {
        self.storage.drain(..)
    }
}

impl<T> Drop for StagingVec<'_, T> {
    fn drop(&mut self) {
        self.storage.clear();
    }
}
