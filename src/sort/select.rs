//! Selection of the n-th element
//!
//! Quickselect over random-access ranges. Each round places a median-of-three
//! pivot at its final position and keeps only the side holding `nth`, so the
//! range shrinks by at least one element per round. Rounds past the
//! `2 * floor(log2 n)` budget heap sort what is left.

use tracing::debug;

use super::insertion::insertion_sort_range;
use super::introsort::{floor_log2, median_of_three};
use crate::config::Tuning;
use crate::cursor::{next_to, Boundary, Distance, Permutable, RandomAccessCursor};
use crate::heap::heap_sort_n;
use crate::relation::Relation;

/// Reorder `[first, last)` so the element at `nth` is the one a full sort
/// would put there, nothing before it is greater and nothing after it is
/// smaller. Returns the end cursor.
pub fn nth_element<S, C, B, R>(seq: &mut S, first: C, nth: C, last: B, rel: R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    nth_element_tuned(seq, first, nth, last, rel, &Tuning::default())
}

/// [`nth_element`] with an explicit insertion threshold.
pub fn nth_element_tuned<S, C, B, R>(
    seq: &mut S,
    first: C,
    nth: C,
    last: B,
    mut rel: R,
    tuning: &Tuning,
) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let end = next_to(seq, first.clone(), &last);
    if nth == end {
        return end;
    }
    let threshold = tuning.introsort_threshold.max(1) as Distance;
    let mut lo = first;
    let mut hi = end.clone();
    let mut depth = 2 * floor_log2(hi.offset_from(seq, &lo).max(1));
    while hi.offset_from(seq, &lo) > threshold {
        if depth == 0 {
            let len = hi.offset_from(seq, &lo);
            debug!(len, "selection depth limit reached, heap sorting sub-range");
            heap_sort_n(seq, &lo, len, &mut rel);
            return end;
        }
        depth -= 1;
        let pivot = place_pivot(seq, lo.clone(), hi.clone(), &mut rel);
        let side = nth.offset_from(seq, &pivot);
        if side == 0 {
            return end;
        }
        if side < 0 {
            hi = pivot;
        } else {
            lo = pivot;
            lo.step(seq);
        }
    }
    insertion_sort_range(seq, &lo, &hi, &mut rel);
    end
}

/// Move a median-of-three pivot to its sorted position within
/// `[first, last)` and return that position. Needs at least two elements.
fn place_pivot<S, C, R>(seq: &mut S, first: C, last: C, rel: &mut R) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
{
    let len = last.offset_from(seq, &first);
    let mut middle = first.clone();
    middle.jump(seq, len / 2);
    let mut back = last.clone();
    back.step_back(seq);
    let pivot = median_of_three(seq, first.clone(), middle, back, rel);
    if pivot != first {
        first.swap_with(seq, &pivot);
    }

    let mut lo = first.clone();
    let mut hi = last;
    loop {
        lo.step(seq);
        while lo != hi && rel.less(lo.read(seq), first.read(seq)) {
            lo.step(seq);
        }
        loop {
            hi.step_back(seq);
            if hi == first || !rel.less(first.read(seq), hi.read(seq)) {
                break;
            }
        }
        if hi.offset_from(seq, &lo) <= 0 {
            break;
        }
        lo.swap_with(seq, &hi);
    }
    // (first, hi] holds no element above the pivot, (hi, last) none below.
    if hi != first {
        first.swap_with(seq, &hi);
    }
    hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{span, Pos};
    use crate::relation::{Greater, Less};

    fn check_selected(v: &[i32], nth: usize) {
        let mut sorted = v.to_vec();
        sorted.sort();
        assert_eq!(v[nth], sorted[nth], "{v:?} at {nth}");
        assert!(v[..nth].iter().all(|x| *x <= v[nth]));
        assert!(v[nth + 1..].iter().all(|x| *x >= v[nth]));
    }

    #[test]
    fn selects_every_position() {
        let base: Vec<i32> = (0..60).map(|x| (x * 29) % 61 - 30).collect();
        for nth in 0..base.len() {
            let mut v = base.clone();
            let (first, last) = span(&v[..]);
            assert_eq!(nth_element(&mut v[..], first, Pos(nth), last, Less), last);
            check_selected(&v, nth);
        }
    }

    #[test]
    fn pivot_lands_in_place() {
        let mut v = vec![7, 3, 9, 1, 5, 5, 8, 2];
        let p = place_pivot(&mut v[..], Pos(0), Pos(8), &mut Less);
        assert!(v[..p.0].iter().all(|x| *x <= v[p.0]));
        assert!(v[p.0 + 1..].iter().all(|x| *x >= v[p.0]));
    }

    #[test]
    fn nth_at_end_is_a_no_op() {
        let mut v = vec![3, 1, 2];
        assert_eq!(nth_element(&mut v[..], Pos(0), Pos(3), Pos(3), Less), Pos(3));
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn depth_fallback_and_duplicates() {
        let tuning = Tuning::builder().with_introsort_threshold(1).build().unwrap();
        let mut v = vec![4; 200];
        v[17] = 1;
        v[150] = 9;
        nth_element_tuned(&mut v[..], Pos(0), Pos(0), Pos(200), Less, &tuning);
        assert_eq!(v[0], 1);
        nth_element_tuned(&mut v[..], Pos(0), Pos(199), Pos(200), Less, &tuning);
        assert_eq!(v[199], 9);
    }

    #[test]
    fn descending_relation_selects_from_the_top() {
        let mut v: Vec<i32> = (0..40).collect();
        nth_element(&mut v[..], Pos(0), Pos(2), Pos(40), Greater);
        assert_eq!(v[2], 37);
    }
}
