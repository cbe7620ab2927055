//! Partition points, bounds and equal ranges
//!
//! Sized ranges are bisected by count. Unsized ones are probed with a
//! galloping step (1, 2, 4, ...) bounded by the boundary, then bisected
//! inside the last probed interval.

use crate::cursor::{advance, Boundary, Distance, ForwardCursor};
use crate::relation::{equivalent, Relation};
use crate::results::Subrange;

/// First cursor in the `n` elements at `first` whose element fails `pred`,
/// given the elements satisfying `pred` come first.
pub fn partition_point_n<S, C, P>(seq: &S, mut first: C, mut n: Distance, mut pred: P) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    P: FnMut(&C::Item) -> bool,
{
    debug_assert!(n >= 0, "negative length");
    while n != 0 {
        let half = n / 2;
        let mut middle = first.clone();
        middle.advance_by(seq, half);
        if pred(middle.read(seq)) {
            middle.step(seq);
            first = middle;
            n -= half + 1;
        } else {
            n = half;
        }
    }
    first
}

/// First cursor in `[first, last)` whose element fails `pred`, given the
/// range is partitioned by `pred`.
pub fn partition_point<S, C, B, P>(seq: &S, mut first: C, last: B, mut pred: P) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
{
    if let Some(n) = last.remaining(&first) {
        return partition_point_n(seq, first, n, pred);
    }
    let mut probe: Distance = 1;
    loop {
        let mut mid = first.clone();
        let short = advance(seq, &mut mid, probe, &last);
        if last.is_reached(&mid) || !pred(mid.read(seq)) {
            return partition_point_n(seq, first, probe - short, &mut pred);
        }
        first = mid;
        probe *= 2;
    }
}

pub(crate) fn lower_bound_n<S, C, R>(
    seq: &S,
    first: C,
    n: Distance,
    value: &C::Item,
    rel: &mut R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    R: Relation<C::Item>,
{
    partition_point_n(seq, first, n, |e| rel.less(e, value))
}

pub(crate) fn upper_bound_n<S, C, R>(
    seq: &S,
    first: C,
    n: Distance,
    value: &C::Item,
    rel: &mut R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    R: Relation<C::Item>,
{
    partition_point_n(seq, first, n, |e| !rel.less(value, e))
}

/// First position where `value` could be inserted keeping the range sorted.
pub fn lower_bound<S, C, B, R>(seq: &S, first: C, last: B, value: &C::Item, mut rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    partition_point(seq, first, last, |e| rel.less(e, value))
}

/// Last position where `value` could be inserted keeping the range sorted.
pub fn upper_bound<S, C, B, R>(seq: &S, first: C, last: B, value: &C::Item, mut rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    partition_point(seq, first, last, |e| !rel.less(value, e))
}

/// [`lower_bound`] comparing `key` against `proj(element)`.
pub fn lower_bound_by_key<S, C, B, K, P, R>(
    seq: &S,
    first: C,
    last: B,
    key: &K,
    mut proj: P,
    mut rel: R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> K,
    R: Relation<K>,
{
    partition_point(seq, first, last, |e| rel.less(&proj(e), key))
}

/// [`upper_bound`] comparing `key` against `proj(element)`.
pub fn upper_bound_by_key<S, C, B, K, P, R>(
    seq: &S,
    first: C,
    last: B,
    key: &K,
    mut proj: P,
    mut rel: R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> K,
    R: Relation<K>,
{
    partition_point(seq, first, last, |e| !rel.less(key, &proj(e)))
}

/// `[lower_bound, upper_bound)` of `value` in the `n` elements at `first`.
pub fn equal_range_n<S, C, R>(
    seq: &S,
    first: C,
    n: Distance,
    value: &C::Item,
    mut rel: R,
) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S>,
    R: Relation<C::Item>,
{
    equal_range_counted(seq, first, n, value, &mut rel)
}

fn equal_range_counted<S, C, R>(
    seq: &S,
    mut first: C,
    mut n: Distance,
    value: &C::Item,
    rel: &mut R,
) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S>,
    R: Relation<C::Item>,
{
    while n != 0 {
        let half = n / 2;
        let mut middle = first.clone();
        middle.advance_by(seq, half);
        let probe = middle.read(seq);
        if rel.less(probe, value) {
            middle.step(seq);
            first = middle;
            n -= half + 1;
        } else if rel.less(value, probe) {
            n = half;
        } else {
            // Equal midpoint: the bounds lie on either side of it.
            let begin = lower_bound_n(seq, first, half, value, rel);
            middle.step(seq);
            let end = upper_bound_n(seq, middle, n - half - 1, value, rel);
            return Subrange { begin, end };
        }
    }
    Subrange {
        begin: first.clone(),
        end: first,
    }
}

/// `[lower_bound, upper_bound)` of `value` in `[first, last)`.
pub fn equal_range<S, C, B, R>(
    seq: &S,
    mut first: C,
    last: B,
    value: &C::Item,
    mut rel: R,
) -> Subrange<C>
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    if let Some(n) = last.remaining(&first) {
        return equal_range_counted(seq, first, n, value, &mut rel);
    }
    let mut probe: Distance = 1;
    loop {
        let mut mid = first.clone();
        let short = advance(seq, &mut mid, probe, &last);
        if short != 0 || last.is_reached(&mid) {
            return equal_range_counted(seq, first, probe - short, value, &mut rel);
        }
        let found = mid.read(seq);
        if rel.less(value, found) {
            return equal_range_counted(seq, first, probe, value, &mut rel);
        }
        if !rel.less(found, value) {
            let begin = lower_bound_n(seq, first, probe, value, &mut rel);
            let end = partition_point(seq, mid, last, |e| !rel.less(value, e));
            return Subrange { begin, end };
        }
        mid.step(seq);
        first = mid;
        probe *= 2;
    }
}

/// Whether the sorted range holds an element equivalent to `value`.
pub fn binary_search<S, C, B, R>(seq: &S, first: C, last: B, value: &C::Item, mut rel: R) -> bool
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let found = partition_point(seq, first, &last, |e| rel.less(e, value));
    !last.is_reached(&found) && equivalent(&mut rel, found.read(seq), value)
}
