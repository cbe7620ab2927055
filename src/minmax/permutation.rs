//! Lexicographic permutation stepping and permutation tests

use crate::cursor::{
    distance, next_to, BidirectionalCursor, Boundary, Distance, ForwardCursor, Permutable,
};
use crate::relation::{Flip, Relation};
use crate::rotate::ReverseStrategy;

/// Rearrange `[first, last)` into the next greater permutation under `rel`.
///
/// Returns `false` after wrapping around from the greatest permutation to
/// the ascending one.
pub fn next_permutation<S, C, B, R>(seq: &mut S, first: C, last: B, mut rel: R) -> bool
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: ReverseStrategy<S, C>,
{
    let last = next_to(seq, first.clone(), &last);
    step_permutation(seq, first, last, &mut rel)
}

/// Rearrange `[first, last)` into the next smaller permutation under `rel`.
///
/// Returns `false` after wrapping around from the smallest permutation to
/// the descending one.
pub fn prev_permutation<S, C, B, R>(seq: &mut S, first: C, last: B, rel: R) -> bool
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: ReverseStrategy<S, C>,
{
    let last = next_to(seq, first.clone(), &last);
    step_permutation(seq, first, last, &mut Flip(rel))
}

fn step_permutation<S, C, R>(seq: &mut S, first: C, last: C, rel: &mut R) -> bool
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    R: Relation<C::Item>,
    C::Tier: ReverseStrategy<S, C>,
{
    if first == last {
        return false;
    }
    let mut pivot = last.clone();
    pivot.step_back(seq);
    if pivot == first {
        return false;
    }
    loop {
        // [suffix, last) is non-increasing.
        let suffix = pivot.clone();
        pivot.step_back(seq);
        if rel.less(pivot.read(seq), suffix.read(seq)) {
            let mut swap = last.clone();
            loop {
                swap.step_back(seq);
                if rel.less(pivot.read(seq), swap.read(seq)) {
                    break;
                }
            }
            pivot.swap_with(seq, &swap);
            <C::Tier as ReverseStrategy<S, C>>::reverse(seq, suffix, last);
            return true;
        }
        if pivot == first {
            <C::Tier as ReverseStrategy<S, C>>::reverse(seq, first, last);
            return false;
        }
    }
}

/// Whether `[first2, last2)` holds the elements of `[first1, last1)` in some
/// order, with `eq` as the element equivalence. O(n^2) comparisons after the
/// common prefix is skipped.
#[allow(clippy::too_many_arguments)]
pub fn is_permutation<S1, C1, B1, S2, C2, B2, E>(
    seq1: &S1,
    mut first1: C1,
    last1: B1,
    seq2: &S2,
    mut first2: C2,
    last2: B2,
    mut eq: E,
) -> bool
where
    S1: ?Sized,
    C1: ForwardCursor<S1>,
    B1: Boundary<C1>,
    S2: ?Sized,
    C2: ForwardCursor<S2, Item = C1::Item>,
    B2: Boundary<C2>,
    E: FnMut(&C1::Item, &C1::Item) -> bool,
{
    while !last1.is_reached(&first1) && !last2.is_reached(&first2) {
        if !eq(first1.read(seq1), first2.read(seq2)) {
            break;
        }
        first1.step(seq1);
        first2.step(seq2);
    }
    let left = distance(seq1, first1.clone(), &last1);
    if left != distance(seq2, first2.clone(), &last2) {
        return false;
    }
    let last1 = next_to(seq1, first1.clone(), &last1);
    let last2 = next_to(seq2, first2.clone(), &last2);

    let mut probe = first1.clone();
    while probe != last1 {
        let value = probe.read(seq1);
        let mut earlier = first1.clone();
        while earlier != probe && !eq(earlier.read(seq1), value) {
            earlier.step(seq1);
        }
        if earlier == probe {
            let in_second = count_equal(seq2, first2.clone(), &last2, value, &mut eq);
            if in_second == 0 || in_second != count_equal(seq1, probe.clone(), &last1, value, &mut eq) {
                return false;
            }
        }
        probe.step(seq1);
    }
    true
}

fn count_equal<S, C, E>(seq: &S, mut first: C, last: &C, value: &C::Item, eq: &mut E) -> Distance
where
    S: ?Sized,
    C: ForwardCursor<S>,
    E: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut n = 0;
    while first != *last {
        if eq(value, first.read(seq)) {
            n += 1;
        }
        first.step(seq);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{BidirectionalOnly, ForwardList, ListCursor, Pos};
    use crate::relation::Less;

    #[test]
    fn steps_through_all_orders() {
        let mut v = vec![1, 2, 3];
        assert!(next_permutation(&mut v[..], Pos(0), Pos(3), Less));
        assert_eq!(v, vec![1, 3, 2]);
        assert!(next_permutation(&mut v[..], Pos(0), Pos(3), Less));
        assert_eq!(v, vec![2, 1, 3]);

        let mut count = 2;
        while next_permutation(&mut v[..], Pos(0), Pos(3), Less) {
            count += 1;
        }
        assert_eq!(count, 5);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn duplicates_yield_distinct_permutations() {
        let mut v = vec![1, 1, 2];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v[..], BidirectionalOnly(Pos(0)), BidirectionalOnly(Pos(3)), Less) {
            seen.push(v.clone());
        }
        assert_eq!(seen, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
    }

    #[test]
    fn prev_walks_backwards_and_wraps_to_descending() {
        let mut v = vec![2, 1, 3];
        assert!(prev_permutation(&mut v[..], Pos(0), Pos(3), Less));
        assert_eq!(v, vec![1, 3, 2]);
        assert!(prev_permutation(&mut v[..], Pos(0), Pos(3), Less));
        assert_eq!(v, vec![1, 2, 3]);
        assert!(!prev_permutation(&mut v[..], Pos(0), Pos(3), Less));
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn short_ranges_have_no_successor() {
        let mut v = vec![4];
        assert!(!next_permutation(&mut v[..], Pos(0), Pos(1), Less));
        assert!(!next_permutation(&mut v[..], Pos(0), Pos(0), Less));
        assert_eq!(v, vec![4]);
    }

    fn same(a: &i32, b: &i32) -> bool {
        a == b
    }

    #[test]
    fn permutation_test_counts_multiplicities() {
        let a = [1, 2, 2, 3];
        assert!(is_permutation(&a[..], Pos(0), Pos(4), &a[..], Pos(0), Pos(4), same));
        let b = [2, 3, 1, 2];
        assert!(is_permutation(&a[..], Pos(0), Pos(4), &b[..], Pos(0), Pos(4), same));
        let c = [2, 3, 1, 1];
        assert!(!is_permutation(&a[..], Pos(0), Pos(4), &c[..], Pos(0), Pos(4), same));
        assert!(!is_permutation(&a[..], Pos(0), Pos(4), &b[..], Pos(0), Pos(3), same));
    }

    #[test]
    fn permutation_test_across_sequence_kinds() {
        let v = [4, 9, 4, 1];
        let list: ForwardList<i32> = [1, 4, 4, 9].into_iter().collect();
        assert!(is_permutation(&v[..], Pos(0), Pos(4), &list, list.begin(), ListCursor::end(), same));
        let shorter: ForwardList<i32> = [1, 4, 9].into_iter().collect();
        assert!(!is_permutation(
            &v[..],
            Pos(0),
            Pos(4),
            &shorter,
            shorter.begin(),
            ListCursor::end(),
            same
        ));
        let empty: [i32; 0] = [];
        assert!(is_permutation(&empty[..], Pos(0), Pos(0), &empty[..], Pos(0), Pos(0), same));
    }

    #[test]
    fn every_next_permutation_is_a_permutation() {
        let start = vec![1, 1, 2, 2, 3];
        let mut v = start.clone();
        let mut count = 1;
        while next_permutation(&mut v[..], Pos(0), Pos(5), Less) {
            assert!(is_permutation(&start[..], Pos(0), Pos(5), &v[..], Pos(0), Pos(5), same));
            count += 1;
        }
        assert_eq!(count, 30);
    }
}
