//! Binary max-heap over a random-access range
//!
//! The element at offset `i` has its children at `2i + 1` and `2i + 2`. No
//! parent is ordered before either of its children. Elements only move by
//! swapping, so no `Clone` bound is needed.

use crate::cursor::{
    distance, next_to, Boundary, Distance, InputCursor, Permutable, RandomAccessCursor,
};
use crate::relation::Relation;

fn at<S, C>(seq: &S, first: &C, offset: Distance) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S>,
{
    let mut cursor = first.clone();
    cursor.jump(seq, offset);
    cursor
}

/// Restore the heap on the `n` elements at `first` after the element at
/// offset `n - 1` was appended to a heap of `n - 1` elements.
pub fn sift_up<S, C, R>(seq: &mut S, first: &C, n: Distance, rel: &mut R)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    if n <= 1 {
        return;
    }
    let mut child = n - 1;
    let mut child_at = at(seq, first, child);
    while child > 0 {
        let parent = (child - 1) / 2;
        let parent_at = at(seq, first, parent);
        if !rel.less(parent_at.read(seq), child_at.read(seq)) {
            break;
        }
        parent_at.swap_with(seq, &child_at);
        child = parent;
        child_at = parent_at;
    }
}

/// Restore the heap on the `n` elements at `first` below `start`, assuming
/// both subtrees of `start` are already heaps.
pub fn sift_down<S, C, R>(seq: &mut S, first: &C, n: Distance, start: &C, rel: &mut R)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    let mut hole = start.offset_from(seq, first);
    if n < 2 || (n - 2) / 2 < hole {
        return;
    }
    let mut hole_at = start.clone();
    loop {
        let mut child = 2 * hole + 1;
        let mut child_at = at(seq, first, child);
        if child + 1 < n {
            let right_at = at(seq, first, child + 1);
            if rel.less(child_at.read(seq), right_at.read(seq)) {
                child += 1;
                child_at = right_at;
            }
        }
        if rel.less(child_at.read(seq), hole_at.read(seq)) {
            return;
        }
        hole_at.swap_with(seq, &child_at);
        hole = child;
        hole_at = child_at;
        if (n - 2) / 2 < hole {
            return;
        }
    }
}

fn make_heap_n<S, C, R>(seq: &mut S, first: &C, n: Distance, rel: &mut R)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    if n < 2 {
        return;
    }
    for start in (0..=(n - 2) / 2).rev() {
        let start_at = at(seq, first, start);
        sift_down(seq, first, n, &start_at, rel);
    }
}

fn pop_heap_n<S, C, R>(seq: &mut S, first: &C, n: Distance, rel: &mut R)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    if n > 1 {
        let last_at = at(seq, first, n - 1);
        first.swap_with(seq, &last_at);
        sift_down(seq, first, n - 1, first, rel);
    }
}

fn sort_heap_n<S, C, R>(seq: &mut S, first: &C, mut n: Distance, rel: &mut R)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    while n > 1 {
        pop_heap_n(seq, first, n, rel);
        n -= 1;
    }
}

pub(crate) fn heap_sort_n<S, C, R>(seq: &mut S, first: &C, n: Distance, rel: &mut R)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    make_heap_n(seq, first, n, rel);
    sort_heap_n(seq, first, n, rel);
}

/// Arrange `[first, last)` into a heap in O(n). Returns the end cursor.
pub fn make_heap<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let n = distance(seq, first.clone(), &last);
    make_heap_n(seq, &first, n, &mut rel);
    at(seq, &first, n)
}

/// Extend the heap `[first, last - 1)` with the element at `last - 1`.
pub fn push_heap<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let n = distance(seq, first.clone(), &last);
    sift_up(seq, &first, n, &mut rel);
    at(seq, &first, n)
}

/// Move the largest element of the heap to `last - 1` and restore the heap on
/// the remaining elements.
pub fn pop_heap<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let n = distance(seq, first.clone(), &last);
    pop_heap_n(seq, &first, n, &mut rel);
    at(seq, &first, n)
}

/// Turn a heap into an ascending sequence in O(n log n).
pub fn sort_heap<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let n = distance(seq, first.clone(), &last);
    sort_heap_n(seq, &first, n, &mut rel);
    at(seq, &first, n)
}

/// First element that breaks the heap property, or the end cursor.
pub fn is_heap_until<S, C, B, R>(seq: &S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let n = distance(seq, first.clone(), &last);
    for child in 1..n {
        let parent_at = at(seq, &first, (child - 1) / 2);
        let child_at = at(seq, &first, child);
        if rel.less(parent_at.read(seq), child_at.read(seq)) {
            return child_at;
        }
    }
    next_to(seq, first, &last)
}

/// Whether `[first, last)` is a heap.
pub fn is_heap<S, C, B, R>(seq: &S, first: C, last: B, rel: R) -> bool
where
    S: ?Sized,
    C: RandomAccessCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let until = is_heap_until(seq, first, &last, rel);
    last.is_reached(&until)
}

/// Heap-select the smallest `middle - first` elements into `[first, middle)`
/// in ascending order. The rest end up in `[middle, last)` in unspecified
/// order.
pub fn partial_sort<S, C, B, R>(seq: &mut S, first: C, middle: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    partial_sort_with(seq, &first, &middle, &last, &mut rel)
}

fn partial_sort_with<S, C, B, R>(
    seq: &mut S,
    first: &C,
    middle: &C,
    last: &B,
    rel: &mut R,
) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let len = middle.offset_from(seq, first);
    if len == 0 {
        return next_to(seq, middle.clone(), last);
    }
    make_heap_n(seq, first, len, rel);
    let mut scan = middle.clone();
    while !last.is_reached(&scan) {
        if rel.less(scan.read(seq), first.read(seq)) {
            scan.swap_with(seq, first);
            sift_down(seq, first, len, first, rel);
        }
        scan.step(seq);
    }
    sort_heap_n(seq, first, len, rel);
    scan
}

/// Copy the smallest elements of `[first, last)` into the destination range
/// `[result_first, result_last)` in ascending order, as many as fit. The
/// destination slots must already hold values. Returns the end of the
/// written part of the destination.
#[allow(clippy::too_many_arguments)]
pub fn partial_sort_copy<S1, C1, B1, S2, C2, B2, R>(
    seq: &S1,
    mut first: C1,
    last: B1,
    dst: &mut S2,
    result_first: C2,
    result_last: B2,
    mut rel: R,
) -> C2
where
    S1: ?Sized,
    C1: InputCursor<S1>,
    C1::Item: Clone,
    B1: Boundary<C1>,
    S2: ?Sized,
    C2: RandomAccessCursor<S2, Item = C1::Item> + Permutable<S2>,
    B2: Boundary<C2>,
    R: Relation<C1::Item>,
{
    let mut written = result_first.clone();
    while !last.is_reached(&first) && !result_last.is_reached(&written) {
        written.replace(dst, first.read(seq).clone());
        first.step(seq);
        written.step(dst);
    }
    let len = written.offset_from(dst, &result_first);
    if len == 0 {
        return written;
    }
    make_heap_n(dst, &result_first, len, &mut rel);
    while !last.is_reached(&first) {
        let item = first.read(seq);
        if rel.less(item, result_first.read(dst)) {
            result_first.replace(dst, item.clone());
            sift_down(dst, &result_first, len, &result_first, &mut rel);
        }
        first.step(seq);
    }
    sort_heap_n(dst, &result_first, len, &mut rel);
    written
}
