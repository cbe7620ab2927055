//! Rotation engine
//!
//! `rotate(first, middle, last)` moves `[middle, last)` in front of
//! `[first, middle)` using swaps only, so elements never need to be cloned.
//! The strategy follows the cursor tier:
//!
//! | tier | strategy |
//! |---|---|
//! | forward | swap walk (`rotate_forward`) |
//! | bidirectional | `rotate_right` when the right half is one element, else swap walk |
//! | random access | `rotate_right` when the right half is one element, else gcd cycles |
//!
//! A left half of one element is always shifted with `rotate_left`.
//!
//! The gcd cycles and the single-element shifts carry each element along by
//! swapping rather than holding one temporary per cycle. That costs about
//! three moves per element instead of one, still O(n), and keeps `Clone` off
//! the bounds.

use tracing::trace;

use crate::cursor::{
    next_to, BidirectionalCursor, BidirectionalTier, Boundary, Capability, Distance,
    ForwardCursor, ForwardTier, OutputCursor, Permutable, RandomAccessCursor,
    RandomAccessTier,
};
use crate::results::{InOut, Subrange};

/// Per-tier rotation of a non-degenerate range (both halves non-empty).
pub trait RotateStrategy<S: ?Sized, C: ForwardCursor<S>>: Capability {
    /// Rotate `[first, last)` around `middle`; returns
    /// `[new position of first, last)`.
    fn rotate(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C>;
}

impl<S, C> RotateStrategy<S, C> for ForwardTier
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
{
    fn rotate(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C> {
        trace!("rotate: forward swap walk");
        rotate_forward(seq, first, middle, last)
    }
}

impl<S, C> RotateStrategy<S, C> for BidirectionalTier
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
{
    fn rotate(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C> {
        if is_last_element(seq, &middle, &last) {
            trace!("rotate: single-element right shift");
            return rotate_right(seq, first, last);
        }
        trace!("rotate: forward swap walk");
        rotate_forward(seq, first, middle, last)
    }
}

impl<S, C> RotateStrategy<S, C> for RandomAccessTier
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
{
    fn rotate(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C> {
        if last.offset_from(seq, &middle) == 1 {
            trace!("rotate: single-element right shift");
            return rotate_right(seq, first, last);
        }
        trace!("rotate: gcd cycles");
        rotate_gcd(seq, first, middle, last)
    }
}

fn is_last_element<S, C>(seq: &S, cursor: &C, last: &C) -> bool
where
    S: ?Sized,
    C: ForwardCursor<S>,
{
    let mut after = cursor.clone();
    after.step(seq);
    after == *last
}

/// Make `middle` the first element of `[first, last)`.
///
/// Returns `[new position of the old first element, last)`. With an empty
/// left half the result is `[last, last)`; with an empty right half it is
/// `[first, middle)`.
pub fn rotate<S, C, B>(seq: &mut S, first: C, middle: C, last: B) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    B: Boundary<C>,
    C::Tier: RotateStrategy<S, C>,
{
    let last = next_to(seq, middle.clone(), &last);
    rotate_range(seq, first, middle, last)
}

pub(crate) fn rotate_range<S, C>(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Tier: RotateStrategy<S, C>,
{
    if first == middle {
        return Subrange {
            begin: last.clone(),
            end: last,
        };
    }
    if middle == last {
        return Subrange {
            begin: first,
            end: middle,
        };
    }
    if is_last_element(seq, &first, &middle) {
        trace!("rotate: single-element left shift");
        return shift_first_to_end(seq, first, |c| *c == last);
    }
    <C::Tier as RotateStrategy<S, C>>::rotate(seq, first, middle, last)
}

/// Move the first element of the non-empty range to its end by adjacent
/// swaps. Returns `[position of the moved element, end)`.
pub fn rotate_left<S, C, B>(seq: &mut S, first: C, last: B) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    B: Boundary<C>,
{
    shift_first_to_end(seq, first, |c| last.is_reached(c))
}

fn shift_first_to_end<S, C, E>(seq: &mut S, first: C, mut at_end: E) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    E: FnMut(&C) -> bool,
{
    let mut current = first.clone();
    let mut ahead = first;
    ahead.step(seq);
    while !at_end(&ahead) {
        current.swap_with(seq, &ahead);
        current = ahead.clone();
        ahead.step(seq);
    }
    Subrange {
        begin: current,
        end: ahead,
    }
}

/// Move the last element of the non-empty range to its front by adjacent
/// swaps. Returns `[first + 1, last)`.
pub fn rotate_right<S, C>(seq: &mut S, first: C, last: C) -> Subrange<C>
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
{
    let mut current = last.clone();
    current.step_back(seq);
    while current != first {
        let mut before = current.clone();
        before.step_back(seq);
        before.swap_with(seq, &current);
        current = before;
    }
    let mut begin = first;
    begin.step(seq);
    Subrange { begin, end: last }
}

/// Rotation by repeated block swaps, for forward cursors.
pub fn rotate_forward<S, C>(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
{
    let mut first = first;
    let mut middle = middle;
    let mut i = middle.clone();
    loop {
        first.swap_with(seq, &i);
        first.step(seq);
        i.step(seq);
        if i == last {
            break;
        }
        if first == middle {
            middle = i.clone();
        }
    }
    let begin = first.clone();
    if first != middle {
        let mut j = middle.clone();
        loop {
            first.swap_with(seq, &j);
            first.step(seq);
            j.step(seq);
            if j == last {
                if first == middle {
                    break;
                }
                j = middle.clone();
            } else if first == middle {
                middle = j.clone();
            }
        }
    }
    Subrange { begin, end: i }
}

fn gcd(mut a: Distance, mut b: Distance) -> Distance {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exchange `n` elements starting at `a` with `n` elements starting at `b`.
/// Returns the cursors past both blocks.
pub fn swap_ranges<S, C>(seq: &mut S, mut a: C, mut b: C, n: Distance) -> (C, C)
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
{
    for _ in 0..n {
        a.swap_with(seq, &b);
        a.step(seq);
        b.step(seq);
    }
    (a, b)
}

/// Rotation by gcd cycles, for random-access cursors. Each element moves
/// once along its cycle through a chain of swaps.
pub fn rotate_gcd<S, C>(seq: &mut S, first: C, middle: C, last: C) -> Subrange<C>
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
{
    let left = middle.offset_from(seq, &first);
    let right = last.offset_from(seq, &middle);
    if left == right {
        swap_ranges(seq, first, middle.clone(), left);
        return Subrange {
            begin: middle,
            end: last,
        };
    }
    let cycles = gcd(left, right);
    let mut start = first.clone();
    start.jump(seq, cycles);
    while start != first {
        start.step_back(seq);
        let mut hole = start.clone();
        let mut source = hole.clone();
        source.jump(seq, left);
        loop {
            hole.swap_with(seq, &source);
            hole = source.clone();
            let to_end = last.offset_from(seq, &source);
            if left < to_end {
                source.jump(seq, left);
            } else {
                source = first.clone();
                source.jump(seq, left - to_end);
            }
            if source == start {
                break;
            }
        }
    }
    let mut begin = first;
    begin.jump(seq, right);
    Subrange { begin, end: last }
}

/// Per-tier reversal.
pub trait ReverseStrategy<S: ?Sized, C: BidirectionalCursor<S>>: Capability {
    /// Reverse `[first, last)`.
    fn reverse(seq: &mut S, first: C, last: C);
}

impl<S, C> ReverseStrategy<S, C> for BidirectionalTier
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
{
    fn reverse(seq: &mut S, mut first: C, mut last: C) {
        loop {
            if first == last {
                return;
            }
            last.step_back(seq);
            if first == last {
                return;
            }
            first.swap_with(seq, &last);
            first.step(seq);
        }
    }
}

impl<S, C> ReverseStrategy<S, C> for RandomAccessTier
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
{
    fn reverse(seq: &mut S, mut first: C, mut last: C) {
        let pairs = last.offset_from(seq, &first) / 2;
        for _ in 0..pairs {
            last.step_back(seq);
            first.swap_with(seq, &last);
            first.step(seq);
        }
    }
}

/// Reverse `[first, last)` in place. Returns the end cursor.
pub fn reverse<S, C, B>(seq: &mut S, first: C, last: B) -> C
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    B: Boundary<C>,
    C::Tier: ReverseStrategy<S, C>,
{
    let end = next_to(seq, first.clone(), &last);
    <C::Tier as ReverseStrategy<S, C>>::reverse(seq, first, end.clone());
    end
}

/// Write `[middle, last)` then `[first, middle)` to `out`.
pub fn rotate_copy<S, C, B, D, O>(
    seq: &S,
    first: C,
    middle: C,
    last: B,
    dst: &mut D,
    mut out: O,
) -> InOut<C, O>
where
    S: ?Sized,
    C: ForwardCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    D: ?Sized,
    O: OutputCursor<D, C::Item>,
{
    let mut cursor = middle.clone();
    while !last.is_reached(&cursor) {
        out.put(dst, cursor.read(seq).clone());
        cursor.step(seq);
    }
    let mut head = first;
    while head != middle {
        out.put(dst, head.read(seq).clone());
        head.step(seq);
    }
    InOut { input: cursor, out }
}
