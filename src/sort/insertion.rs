//! Insertion sort

use crate::cursor::{next_to, BidirectionalCursor, Boundary, Permutable};
use crate::relation::Relation;

/// Sink the element at `at` towards `first` until its predecessor is not
/// greater. Never moves past `first`.
pub(crate) fn linear_insert<S, C, R>(seq: &mut S, first: &C, at: &C, rel: &mut R)
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    let mut hole = at.clone();
    while hole != *first {
        let mut before = hole.clone();
        before.step_back(seq);
        if !rel.less(hole.read(seq), before.read(seq)) {
            break;
        }
        before.swap_with(seq, &hole);
        hole = before;
    }
}

pub(crate) fn insertion_sort_range<S, C, R>(seq: &mut S, first: &C, last: &C, rel: &mut R)
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    if first == last {
        return;
    }
    let mut next = first.clone();
    next.step(seq);
    while next != *last {
        linear_insert(seq, first, &next, rel);
        next.step(seq);
    }
}

/// Stable O(n²) sort, fast on short or nearly sorted ranges. Returns the end
/// cursor.
pub fn insertion_sort<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let end = next_to(seq, first.clone(), &last);
    insertion_sort_range(seq, &first, &end, &mut rel);
    end
}
