#![allow(dead_code)]

use cursorkit::cursor::{distance, next, BidirectionalOnly, ForwardList, ForwardOnly, ListCursor, Pos};
use cursorkit::search::stable_partition_tuned;
use cursorkit::{rotate, sort, stable_sort, Relation, Tuning};

/// How a test reaches the elements: which cursor tier drives the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    RandomAccess,
    Bidirectional,
    Forward,
    List,
}

pub const ALL_ACCESS: [Access; 4] = [
    Access::RandomAccess,
    Access::Bidirectional,
    Access::Forward,
    Access::List,
];

/// Pair each key with its input position so stability is observable.
pub fn tagged(keys: &[u8]) -> Vec<(u8, usize)> {
    keys.iter().copied().zip(0..).collect()
}

/// Keys ascend, and equal keys keep their input order.
pub fn assert_stably_sorted(v: &[(u8, usize)]) {
    for w in v.windows(2) {
        assert!(w[0] < w[1], "not stably sorted at {w:?}");
    }
}

pub fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut v = v.to_vec();
    v.sort();
    v
}

pub fn sort_via<T, R>(access: Access, input: &[T], rel: R) -> Vec<T>
where
    T: Clone,
    R: Relation<T>,
{
    let mut v = input.to_vec();
    let n = v.len();
    match access {
        Access::RandomAccess => {
            sort(&mut v[..], Pos(0), Pos(n), rel);
        }
        Access::Bidirectional => {
            sort(&mut v[..], BidirectionalOnly(Pos(0)), BidirectionalOnly(Pos(n)), rel);
        }
        Access::Forward => {
            sort(&mut v[..], ForwardOnly(Pos(0)), ForwardOnly(Pos(n)), rel);
        }
        Access::List => {
            let mut list: ForwardList<T> = v.into_iter().collect();
            let begin = list.begin();
            sort(&mut list, begin, ListCursor::end(), rel);
            return list.to_vec();
        }
    }
    v
}

pub fn stable_sort_via<T, R>(access: Access, input: &[T], rel: R) -> Vec<T>
where
    T: Clone,
    R: Relation<T>,
{
    let mut v = input.to_vec();
    let n = v.len();
    match access {
        Access::RandomAccess => {
            stable_sort(&mut v[..], Pos(0), Pos(n), rel);
        }
        Access::Bidirectional => {
            stable_sort(&mut v[..], BidirectionalOnly(Pos(0)), BidirectionalOnly(Pos(n)), rel);
        }
        Access::Forward => {
            stable_sort(&mut v[..], ForwardOnly(Pos(0)), ForwardOnly(Pos(n)), rel);
        }
        Access::List => {
            let mut list: ForwardList<T> = v.into_iter().collect();
            let begin = list.begin();
            stable_sort(&mut list, begin, ListCursor::end(), rel);
            return list.to_vec();
        }
    }
    v
}

/// Rotate so that the element at `k` becomes the front.
pub fn rotate_via<T: Clone>(access: Access, input: &[T], k: usize) -> Vec<T> {
    let mut v = input.to_vec();
    let n = v.len();
    match access {
        Access::RandomAccess => {
            rotate(&mut v[..], Pos(0), Pos(k), Pos(n));
        }
        Access::Bidirectional => {
            rotate(
                &mut v[..],
                BidirectionalOnly(Pos(0)),
                BidirectionalOnly(Pos(k)),
                BidirectionalOnly(Pos(n)),
            );
        }
        Access::Forward => {
            rotate(&mut v[..], ForwardOnly(Pos(0)), ForwardOnly(Pos(k)), ForwardOnly(Pos(n)));
        }
        Access::List => {
            let mut list: ForwardList<T> = v.into_iter().collect();
            let begin = list.begin();
            let middle = next(&list, begin, k as isize);
            rotate(&mut list, begin, middle, ListCursor::end());
            return list.to_vec();
        }
    }
    v
}

/// Stable partition through the given tier. Returns the reordered values and
/// the size of the passing group.
pub fn stable_partition_via<T, P>(
    access: Access,
    input: &[T],
    pred: P,
    tuning: &Tuning,
) -> (Vec<T>, usize)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut v = input.to_vec();
    let n = v.len();
    let split = match access {
        Access::RandomAccess => stable_partition_tuned(&mut v[..], Pos(0), Pos(n), pred, tuning).0,
        Access::Bidirectional => {
            let (first, last) = (BidirectionalOnly(Pos(0)), BidirectionalOnly(Pos(n)));
            let BidirectionalOnly(Pos(split)) = stable_partition_tuned(&mut v[..], first, last, pred, tuning);
            split
        }
        Access::Forward => {
            let (first, last) = (ForwardOnly(Pos(0)), ForwardOnly(Pos(n)));
            let ForwardOnly(Pos(split)) = stable_partition_tuned(&mut v[..], first, last, pred, tuning);
            split
        }
        Access::List => {
            let mut list: ForwardList<T> = v.into_iter().collect();
            let begin = list.begin();
            let point = stable_partition_tuned(&mut list, begin, ListCursor::end(), pred, tuning);
            let failing = distance(&list, point, &ListCursor::end()) as usize;
            let values = list.to_vec();
            let split = values.len() - failing;
            return (values, split);
        }
    };
    (v, split)
}
