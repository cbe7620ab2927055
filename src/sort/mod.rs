//! Sorting engine
//!
//! [`sort`] picks its algorithm from the cursor tier: random-access ranges
//! get introsort, forward and bidirectional ranges get the adaptive merge
//! sort. [`stable_sort`] always uses the adaptive merge sort, and
//! [`nth_element`] selects one order statistic without sorting the rest.

mod insertion;
mod introsort;
mod merge_sort;
mod select;

pub use crate::heap::{partial_sort, partial_sort_copy};
pub use insertion::insertion_sort;
pub use select::{nth_element, nth_element_tuned};

pub(crate) use merge_sort::merge_n_adaptive;

use tracing::trace;

use crate::config::Tuning;
use crate::cursor::{
    distance, next_to, BidirectionalCursor, BidirectionalTier, Boundary, Capability,
    ForwardCursor, ForwardTier, Permutable, RandomAccessCursor, RandomAccessTier,
};
use crate::relation::Relation;
use crate::rotate::RotateStrategy;

/// Per-tier unstable sort.
pub trait SortStrategy<S: ?Sized, C: ForwardCursor<S>>: Capability {
    /// Sort `[first, last)`.
    fn sort<R: Relation<C::Item>>(seq: &mut S, first: C, last: C, rel: &mut R, tuning: &Tuning);
}

impl<S, C> SortStrategy<S, C> for ForwardTier
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    C::Tier: RotateStrategy<S, C>,
{
    fn sort<R: Relation<C::Item>>(seq: &mut S, first: C, last: C, rel: &mut R, tuning: &Tuning) {
        let n = first.distance_to(seq, &last);
        trace!(len = n, "sort: forward adaptive merge sort");
        merge_sort::merge_sort_n(seq, first, n, rel, tuning);
    }
}

impl<S, C> SortStrategy<S, C> for BidirectionalTier
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    C::Item: Clone,
    C::Tier: RotateStrategy<S, C>,
{
    fn sort<R: Relation<C::Item>>(seq: &mut S, first: C, last: C, rel: &mut R, tuning: &Tuning) {
        let n = first.distance_to(seq, &last);
        trace!(len = n, "sort: bidirectional adaptive merge sort");
        merge_sort::merge_sort_n(seq, first, n, rel, tuning);
    }
}

impl<S, C> SortStrategy<S, C> for RandomAccessTier
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
{
    fn sort<R: Relation<C::Item>>(seq: &mut S, first: C, last: C, rel: &mut R, tuning: &Tuning) {
        trace!(len = last.offset_from(seq, &first), "sort: introsort");
        introsort::introsort(seq, first, last, rel, tuning);
    }
}

/// Sort `[first, last)` by `rel`. Not stable. Returns the end cursor.
pub fn sort<S, C, B, R>(seq: &mut S, first: C, last: B, rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: SortStrategy<S, C>,
{
    sort_tuned(seq, first, last, rel, &Tuning::default())
}

/// [`sort`] with explicit thresholds.
pub fn sort_tuned<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R, tuning: &Tuning) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: SortStrategy<S, C>,
{
    let end = next_to(seq, first.clone(), &last);
    <C::Tier as SortStrategy<S, C>>::sort(seq, first, end.clone(), &mut rel, tuning);
    end
}

/// Sort `[first, last)` by `rel`, keeping equivalent elements in their
/// original order. Returns the end cursor.
pub fn stable_sort<S, C, B, R>(seq: &mut S, first: C, last: B, rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: RotateStrategy<S, C>,
{
    stable_sort_tuned(seq, first, last, rel, &Tuning::default())
}

/// [`stable_sort`] with explicit thresholds and scratch limit.
pub fn stable_sort_tuned<S, C, B, R>(
    seq: &mut S,
    first: C,
    last: B,
    mut rel: R,
    tuning: &Tuning,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: RotateStrategy<S, C>,
{
    let n = distance(seq, first.clone(), &last);
    merge_sort::merge_sort_n(seq, first, n, &mut rel, tuning)
}

/// First position where the range stops being sorted, or the end cursor.
pub fn is_sorted_until<S, C, B, R>(seq: &S, mut first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    if last.is_reached(&first) {
        return first;
    }
    let mut ahead = first.clone();
    ahead.step(seq);
    while !last.is_reached(&ahead) {
        if rel.less(ahead.read(seq), first.read(seq)) {
            return ahead;
        }
        first = ahead.clone();
        ahead.step(seq);
    }
    ahead
}

/// Whether no element is ordered before its predecessor.
pub fn is_sorted<S, C, B, R>(seq: &S, first: C, last: B, rel: R) -> bool
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let until = is_sorted_until(seq, first, &last, rel);
    last.is_reached(&until)
}
