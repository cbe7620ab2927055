//! Slice positions

use super::{
    BidirectionalCursor, Boundary, Distance, ForwardCursor, InputCursor, Permutable,
    RandomAccessCursor, RandomAccessTier,
};

/// Index into a slice. Random access and permutable; also serves as the
/// sized boundary of a slice range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos(pub usize);

impl Pos {
    /// Underlying index.
    pub fn index(self) -> usize {
        self.0
    }

    fn shifted(self, n: Distance) -> usize {
        let moved = self.0 as Distance + n;
        debug_assert!(moved >= 0, "cursor moved before the start of the slice");
        moved as usize
    }
}

/// `(begin, end)` cursors spanning the whole slice.
pub fn span<T>(seq: &[T]) -> (Pos, Pos) {
    (Pos(0), Pos(seq.len()))
}

impl<T> InputCursor<[T]> for Pos {
    type Item = T;
    type Tier = RandomAccessTier;

    fn read<'s>(&self, seq: &'s [T]) -> &'s T {
        &seq[self.0]
    }

    fn step(&mut self, _seq: &[T]) {
        self.0 += 1;
    }

    fn advance_by(&mut self, _seq: &[T], n: Distance) {
        self.0 = self.shifted(n);
    }
}

impl<T> ForwardCursor<[T]> for Pos {
    fn distance_to(&self, _seq: &[T], other: &Self) -> Distance {
        other.0 as Distance - self.0 as Distance
    }
}

impl<T> BidirectionalCursor<[T]> for Pos {
    fn step_back(&mut self, _seq: &[T]) {
        self.0 = self.shifted(-1);
    }

    fn retreat_by(&mut self, _seq: &[T], n: Distance) {
        self.0 = self.shifted(-n);
    }
}

impl<T> RandomAccessCursor<[T]> for Pos {
    fn jump(&mut self, _seq: &[T], n: Distance) {
        self.0 = self.shifted(n);
    }

    fn offset_from(&self, _seq: &[T], origin: &Self) -> Distance {
        self.0 as Distance - origin.0 as Distance
    }
}

impl<T> Permutable<[T]> for Pos {
    fn swap_with(&self, seq: &mut [T], other: &Self) {
        seq.swap(self.0, other.0);
    }

    fn replace(&self, seq: &mut [T], value: T) -> T {
        std::mem::replace(&mut seq[self.0], value)
    }
}

impl Boundary<Pos> for Pos {
    fn is_reached(&self, cursor: &Pos) -> bool {
        self == cursor
    }

    fn remaining(&self, cursor: &Pos) -> Option<Distance> {
        Some(self.0 as Distance - cursor.0 as Distance)
    }
}
