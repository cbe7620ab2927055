mod common;

use std::collections::BTreeMap;

use common::sorted;
use cursorkit::cursor::{BackInserter, ForwardList, InputOnly, ListCursor, Pos};
use cursorkit::{
    includes, merge, set_difference, set_intersection, set_symmetric_difference, set_union, Less,
};
use proptest::prelude::*;

fn counts(v: &[u8]) -> BTreeMap<u8, usize> {
    let mut m = BTreeMap::new();
    for x in v {
        *m.entry(*x).or_insert(0) += 1;
    }
    m
}

fn expand(m: &BTreeMap<u8, usize>) -> Vec<u8> {
    m.iter()
        .flat_map(|(k, n)| std::iter::repeat(*k).take(*n))
        .collect()
}

fn combine(a: &[u8], b: &[u8], f: impl Fn(usize, usize) -> usize) -> Vec<u8> {
    let (ca, cb) = (counts(a), counts(b));
    let mut out = BTreeMap::new();
    for k in ca.keys().chain(cb.keys()) {
        let n = f(
            ca.get(k).copied().unwrap_or(0),
            cb.get(k).copied().unwrap_or(0),
        );
        out.insert(*k, n);
    }
    expand(&out)
}

fn sorted_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (
        proptest::collection::vec(0u8..12, 0..40),
        proptest::collection::vec(0u8..12, 0..40),
    )
        .prop_map(|(a, b)| (sorted(&a), sorted(&b)))
}

proptest! {
    #[test]
    fn merge_is_a_sorted_multiset_union((a, b) in sorted_pair()) {
        let mut out = Vec::new();
        let r = merge(&a[..], Pos(0), Pos(a.len()), &b[..], Pos(0), Pos(b.len()), &mut out, BackInserter::default(), Less);
        prop_assert_eq!((r.in1, r.in2), (Pos(a.len()), Pos(b.len())));
        let mut all = a.clone();
        all.extend(&b);
        prop_assert_eq!(out, sorted(&all));
    }

    #[test]
    fn set_operations_match_multiset_counts((a, b) in sorted_pair()) {
        let (la, lb) = (Pos(a.len()), Pos(b.len()));

        let mut out = Vec::new();
        set_union(&a[..], Pos(0), la, &b[..], Pos(0), lb, &mut out, BackInserter::default(), Less);
        prop_assert_eq!(out, combine(&a, &b, usize::max));

        let mut out = Vec::new();
        set_intersection(&a[..], Pos(0), la, &b[..], Pos(0), lb, &mut out, BackInserter::default(), Less);
        prop_assert_eq!(out, combine(&a, &b, usize::min));

        let mut out = Vec::new();
        set_difference(&a[..], Pos(0), la, &b[..], Pos(0), lb, &mut out, BackInserter::default(), Less);
        prop_assert_eq!(out, combine(&a, &b, |x, y| x.saturating_sub(y)));

        let mut out = Vec::new();
        set_symmetric_difference(&a[..], Pos(0), la, &b[..], Pos(0), lb, &mut out, BackInserter::default(), Less);
        prop_assert_eq!(out, combine(&a, &b, |x, y| x.abs_diff(y)));

        let contained = counts(&b).iter().all(|(k, n)| counts(&a).get(k).copied().unwrap_or(0) >= *n);
        prop_assert_eq!(includes(&a[..], Pos(0), la, &b[..], Pos(0), lb, Less), contained);
    }

    #[test]
    fn single_pass_inputs_from_a_list((a, b) in sorted_pair()) {
        let list: ForwardList<u8> = a.iter().copied().collect();
        let mut out = Vec::new();
        set_union(
            &list,
            InputOnly::new(list.begin()),
            InputOnly::new(ListCursor::end()),
            &b[..],
            Pos(0),
            Pos(b.len()),
            &mut out,
            BackInserter::default(),
            Less,
        );
        prop_assert_eq!(out, combine(&a, &b, usize::max));
    }
}

#[test]
fn merging_into_a_slice() {
    let a = [1, 4, 9];
    let b = [2, 3];
    let mut dst = [0; 5];
    let r = merge(&a[..], Pos(0), Pos(3), &b[..], Pos(0), Pos(2), &mut dst[..], Pos(0), Less);
    assert_eq!(dst, [1, 2, 3, 4, 9]);
    assert_eq!(r.out, Pos(5));
}
