//! Bounded navigation primitives shared by every algorithm.

use super::{BidirectionalCursor, Boundary, Distance, ForwardCursor, InputCursor};

/// Move `cursor` forward by `n`, stopping early at `bound`.
///
/// Returns the number of steps not taken (0 when all `n` were taken). With a
/// sized boundary the move is a single `advance_by`, so random-access cursors
/// pay O(1).
pub fn advance<S, C, B>(seq: &S, cursor: &mut C, n: Distance, bound: &B) -> Distance
where
    S: ?Sized,
    C: InputCursor<S>,
    B: Boundary<C>,
{
    debug_assert!(n >= 0, "negative advance needs advance_back");
    if let Some(room) = bound.remaining(cursor) {
        let room = room.max(0);
        if n >= room {
            cursor.advance_by(seq, room);
            return n - room;
        }
        cursor.advance_by(seq, n);
        return 0;
    }
    let mut left = n;
    while left != 0 && !bound.is_reached(cursor) {
        cursor.step(seq);
        left -= 1;
    }
    left
}

/// Move `cursor` back by `-n` (with `n <= 0`), stopping early at `bound`.
///
/// Returns the (non-positive) number of steps not taken.
pub fn advance_back<S, C>(seq: &S, cursor: &mut C, n: Distance, bound: &C) -> Distance
where
    S: ?Sized,
    C: BidirectionalCursor<S>,
{
    debug_assert!(n <= 0, "advance_back takes a non-positive count");
    let mut left = n;
    while left != 0 && cursor != bound {
        cursor.step_back(seq);
        left += 1;
    }
    left
}

/// Unbounded forward move by `n`.
pub fn advance_by<S, C>(seq: &S, cursor: &mut C, n: Distance)
where
    S: ?Sized,
    C: InputCursor<S>,
{
    cursor.advance_by(seq, n);
}

/// Number of elements in `[first, bound)`. O(1) for sized boundaries.
pub fn distance<S, C, B>(seq: &S, first: C, bound: &B) -> Distance
where
    S: ?Sized,
    C: InputCursor<S>,
    B: Boundary<C>,
{
    if let Some(n) = bound.remaining(&first) {
        return n;
    }
    let mut cursor = first;
    let mut n = 0;
    while !bound.is_reached(&cursor) {
        cursor.step(seq);
        n += 1;
    }
    n
}

/// `cursor` moved forward by `n`.
pub fn next<S, C>(seq: &S, mut cursor: C, n: Distance) -> C
where
    S: ?Sized,
    C: InputCursor<S>,
{
    cursor.advance_by(seq, n);
    cursor
}

/// `cursor` moved up to `bound`. Turns a sentinel-bounded range into a
/// cursor-bounded one.
pub fn next_to<S, C, B>(seq: &S, mut cursor: C, bound: &B) -> C
where
    S: ?Sized,
    C: InputCursor<S>,
    B: Boundary<C>,
{
    match bound.remaining(&cursor) {
        Some(n) => cursor.advance_by(seq, n),
        None => {
            while !bound.is_reached(&cursor) {
                cursor.step(seq);
            }
        }
    }
    cursor
}

/// `cursor` moved back by `n`.
pub fn prev<S, C>(seq: &S, mut cursor: C, n: Distance) -> C
where
    S: ?Sized,
    C: BidirectionalCursor<S>,
{
    cursor.retreat_by(seq, n);
    cursor
}

/// First cursor in `[first, bound)` whose element satisfies `pred`, or the
/// cursor at `bound`.
pub fn find_if<S, C, B, P>(seq: &S, mut first: C, bound: &B, mut pred: P) -> C
where
    S: ?Sized,
    C: InputCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
{
    while !bound.is_reached(&first) && !pred(first.read(seq)) {
        first.step(seq);
    }
    first
}

/// First cursor in `[first, bound)` whose element fails `pred`, or the
/// cursor at `bound`.
pub fn find_if_not<S, C, B, P>(seq: &S, first: C, bound: &B, mut pred: P) -> C
where
    S: ?Sized,
    C: InputCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
{
    find_if(seq, first, bound, |item| !pred(item))
}

/// Whether `[first, bound)` holds exactly `n` elements after `first`, used by
/// debug assertions.
pub(crate) fn reaches_within<S, C>(seq: &S, first: &C, n: Distance, last: &C) -> bool
where
    S: ?Sized,
    C: ForwardCursor<S>,
{
    first.distance_to(seq, last) == n
}
