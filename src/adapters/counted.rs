//! Counted cursors
//!
//! `Counted<C>` pairs a cursor with the number of elements left in its range,
//! turning any `(cursor, n)` into a range bounded by [`CountedEnd`]. The
//! boundary is always sized, so bounded algorithms get O(1) `distance`.

use crate::cursor::{
    BidirectionalCursor, Boundary, Distance, ForwardCursor, InputCursor, Permutable,
    RandomAccessCursor,
};

/// Cursor plus remaining count.
#[derive(Debug, Clone)]
pub struct Counted<C> {
    inner: C,
    count: Distance,
}

/// Reached when a counted cursor's count drops to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountedEnd;

/// Range of `n` elements starting at `cursor`.
pub fn counted<C>(cursor: C, n: Distance) -> (Counted<C>, CountedEnd) {
    (Counted::new(cursor, n), CountedEnd)
}

impl<C> Counted<C> {
    /// Wrap `inner` with `count` elements remaining.
    pub fn new(inner: C, count: Distance) -> Self {
        Counted { inner, count }
    }

    /// Elements left before [`CountedEnd`].
    pub fn count(&self) -> Distance {
        self.count
    }

    /// Borrow the wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the cursor, dropping the count.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

/// Counted cursors over the same range compare by count alone.
impl<C> PartialEq for Counted<C> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<S: ?Sized, C: InputCursor<S>> InputCursor<S> for Counted<C> {
    type Item = C::Item;
    type Tier = C::Tier;

    fn read<'s>(&self, seq: &'s S) -> &'s C::Item {
        self.inner.read(seq)
    }

    fn step(&mut self, seq: &S) {
        self.inner.step(seq);
        self.count -= 1;
    }

    fn advance_by(&mut self, seq: &S, n: Distance) {
        self.inner.advance_by(seq, n);
        self.count -= n;
    }
}

impl<S: ?Sized, C: ForwardCursor<S>> ForwardCursor<S> for Counted<C> {
    fn distance_to(&self, _seq: &S, other: &Self) -> Distance {
        self.count - other.count
    }
}

impl<S: ?Sized, C: BidirectionalCursor<S>> BidirectionalCursor<S> for Counted<C> {
    fn step_back(&mut self, seq: &S) {
        self.inner.step_back(seq);
        self.count += 1;
    }

    fn retreat_by(&mut self, seq: &S, n: Distance) {
        self.inner.retreat_by(seq, n);
        self.count += n;
    }
}

impl<S: ?Sized, C: RandomAccessCursor<S>> RandomAccessCursor<S> for Counted<C> {
    fn jump(&mut self, seq: &S, n: Distance) {
        self.inner.jump(seq, n);
        self.count -= n;
    }

    fn offset_from(&self, _seq: &S, origin: &Self) -> Distance {
        origin.count - self.count
    }
}

impl<S: ?Sized, C: Permutable<S>> Permutable<S> for Counted<C> {
    fn swap_with(&self, seq: &mut S, other: &Self) {
        self.inner.swap_with(seq, &other.inner);
    }

    fn replace(&self, seq: &mut S, value: C::Item) -> C::Item {
        self.inner.replace(seq, value)
    }
}

impl<C> Boundary<Counted<C>> for CountedEnd {
    fn is_reached(&self, cursor: &Counted<C>) -> bool {
        cursor.count <= 0
    }

    fn remaining(&self, cursor: &Counted<C>) -> Option<Distance> {
        Some(cursor.count.max(0))
    }
}

/// A counted cursor bounds another one from the same range.
impl<C> Boundary<Counted<C>> for Counted<C> {
    fn is_reached(&self, cursor: &Counted<C>) -> bool {
        cursor.count == self.count
    }

    fn remaining(&self, cursor: &Counted<C>) -> Option<Distance> {
        Some(cursor.count - self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{distance, next_to, ForwardList, Pos};

    #[test]
    fn counted_range_is_sized() {
        let list: ForwardList<i32> = (0..10).collect();
        let (first, end) = counted(list.begin(), 4);
        assert_eq!(distance(&list, first.clone(), &end), 4);

        let last = next_to(&list, first, &end);
        assert_eq!(last.count(), 0);
        assert_eq!(*last.inner().read(&list), 4);
    }

    #[test]
    fn non_positive_count_is_already_at_the_end() {
        let (first, end) = counted(Pos(3), -2);
        assert!(end.is_reached(&first));
        assert_eq!(end.remaining(&first), Some(0));
    }

    #[test]
    fn jumps_adjust_the_count() {
        let data = [0; 8];
        let (mut c, _) = counted(Pos(0), 8);
        c.jump(&data[..], 5);
        assert_eq!(c.count(), 3);
        c.step_back(&data[..]);
        assert_eq!(c.count(), 4);
        let origin = Counted::new(Pos(0), 8);
        assert_eq!(c.offset_from(&data[..], &origin), 4);
        assert_eq!(c.clone().into_inner(), Pos(4));
    }
}
