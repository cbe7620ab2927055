//! Output cursors

use super::Pos;

/// Write-then-advance destination for values of type `T` inside `D`.
pub trait OutputCursor<D: ?Sized, T> {
    /// Store `value` at the current position and move past it.
    fn put(&mut self, dst: &mut D, value: T);
}

/// Overwrites slice elements in order.
impl<T> OutputCursor<[T], T> for Pos {
    fn put(&mut self, dst: &mut [T], value: T) {
        dst[self.0] = value;
        self.0 += 1;
    }
}

/// Appends to a `Vec`, counting the values written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackInserter {
    /// Values pushed so far.
    pub written: usize,
}

impl<T> OutputCursor<Vec<T>, T> for BackInserter {
    fn put(&mut self, dst: &mut Vec<T>, value: T) {
        dst.push(value);
        self.written += 1;
    }
}
