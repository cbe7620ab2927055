//! Introspective sort for random-access ranges
//!
//! Quicksort with a median-of-three pivot until sub-ranges shrink to the
//! insertion threshold, heap sort for sub-ranges that exhaust the depth
//! budget of `2 * floor(log2 n)`, and one insertion pass over the whole range
//! at the end. Partition scans stop at the sub-range ends, so a relation that
//! is not a strict weak order scrambles the order but never the memory
//! outside the range.

use tracing::debug;

use super::insertion::insertion_sort_range;
use crate::config::Tuning;
use crate::cursor::{Distance, Permutable, RandomAccessCursor};
use crate::heap::heap_sort_n;
use crate::relation::Relation;

pub(crate) fn introsort<S, C, R>(seq: &mut S, first: C, last: C, rel: &mut R, tuning: &Tuning)
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    let n = last.offset_from(seq, &first);
    if n < 2 {
        return;
    }
    let threshold = tuning.introsort_threshold.max(1) as Distance;
    introsort_loop(seq, first.clone(), last.clone(), 2 * floor_log2(n), rel, threshold);
    insertion_sort_range(seq, &first, &last, rel);
}

pub(super) fn floor_log2(n: Distance) -> Distance {
    debug_assert!(n > 0);
    (usize::BITS - 1 - (n as usize).leading_zeros()) as Distance
}

fn introsort_loop<S, C, R>(
    seq: &mut S,
    first: C,
    mut last: C,
    mut depth: Distance,
    rel: &mut R,
    threshold: Distance,
) where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    loop {
        let len = last.offset_from(seq, &first);
        if len <= threshold {
            return;
        }
        if depth == 0 {
            debug!(len, "introsort depth limit reached, heap sorting sub-range");
            heap_sort_n(seq, &first, len, rel);
            return;
        }
        depth -= 1;
        let cut = partition_around_pivot(seq, first.clone(), last.clone(), rel);
        introsort_loop(seq, cut.clone(), last, depth, rel, threshold);
        last = cut;
    }
}

pub(super) fn median_of_three<S, C, R>(seq: &S, a: C, b: C, c: C, rel: &mut R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S>,
    R: Relation<C::Item>,
{
    let (va, vb, vc) = (a.read(seq), b.read(seq), c.read(seq));
    if rel.less(va, vb) {
        if rel.less(vb, vc) {
            b
        } else if rel.less(va, vc) {
            c
        } else {
            a
        }
    } else if rel.less(va, vc) {
        a
    } else if rel.less(vb, vc) {
        c
    } else {
        b
    }
}

/// Hoare partition around a median-of-three pivot that stays tracked while
/// it is swapped. Returns the cut: `[first, cut)` holds no element greater
/// than the pivot and `[cut, last)` none smaller.
fn partition_around_pivot<S, C, R>(seq: &mut S, mut first: C, mut last: C, rel: &mut R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    let lo = first.clone();
    let hi = last.clone();
    let len = last.offset_from(seq, &first);
    let mut middle = first.clone();
    middle.jump(seq, len / 2);
    let mut back = last.clone();
    back.step_back(seq);
    let mut pivot = median_of_three(seq, first.clone(), middle, back, rel);
    loop {
        while first != hi && rel.less(first.read(seq), pivot.read(seq)) {
            first.step(seq);
        }
        loop {
            last.step_back(seq);
            if last == lo || !rel.less(pivot.read(seq), last.read(seq)) {
                break;
            }
        }
        if last.offset_from(seq, &first) <= 0 {
            return first;
        }
        first.swap_with(seq, &last);
        if pivot == first {
            pivot = last.clone();
        } else if pivot == last {
            pivot = first.clone();
        }
        first.step(seq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Pos;
    use crate::relation::Less;

    #[test]
    fn log2_floors() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(17), 4);
        assert_eq!(floor_log2(1024), 10);
    }

    #[test]
    fn median_picks_the_middle_value() {
        let v = [5, 1, 3];
        let m = median_of_three(&v[..], Pos(0), Pos(1), Pos(2), &mut Less);
        assert_eq!(m, Pos(2));
        let v = [2, 2, 2];
        let m = median_of_three(&v[..], Pos(0), Pos(1), Pos(2), &mut Less);
        assert_eq!(v[m.0], 2);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut v: Vec<i32> = vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0];
        let cut = partition_around_pivot(&mut v[..], Pos(0), Pos(10), &mut Less);
        let left_max = v[..cut.0].iter().max().copied();
        let right_min = v[cut.0..].iter().min().copied();
        assert!(left_max <= right_min, "{v:?} cut at {}", cut.0);
        assert!(cut.0 > 0 && cut.0 < 10);
    }

    #[test]
    fn depth_exhaustion_still_sorts() {
        // Threshold 1 and a shallow budget push most work into heap sort.
        let tuning = Tuning::builder().with_introsort_threshold(1).build().unwrap();
        let mut v: Vec<i32> = (0..200).map(|x| (x * 37) % 101).collect();
        let mut expected = v.clone();
        expected.sort();
        introsort(&mut v[..], Pos(0), Pos(200), &mut Less, &tuning);
        assert_eq!(v, expected);
    }

    #[test]
    fn inconsistent_relation_terminates_inside_the_range() {
        let mut v: Vec<u32> = (0..300).rev().collect();
        v.push(u32::MAX);
        let mut flip = 0u32;
        let mut chaos = |_: &u32, _: &u32| {
            flip = flip.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            flip & 0x100 != 0
        };
        introsort(&mut v[..], Pos(0), Pos(300), &mut chaos, &Tuning::default());
        assert_eq!(v[300], u32::MAX);
        let mut seen = v[..300].to_vec();
        seen.sort();
        assert_eq!(seen, (0..300).collect::<Vec<_>>());
    }
}
