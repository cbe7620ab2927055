//! Set operations on sorted ranges
//!
//! Ranges are sorted multisets. Equivalent elements pair up one to one, and
//! the first range's element is the one emitted for a pair.

use super::copy;
use crate::cursor::{Boundary, InputCursor, OutputCursor};
use crate::relation::Relation;
use crate::results::{InInOut, InOut};

/// Elements of either range; a matched pair is emitted once.
#[allow(clippy::too_many_arguments)]
pub fn set_union<S1, C1, B1, S2, C2, B2, D, O, R>(
    seq1: &S1,
    mut first1: C1,
    last1: B1,
    seq2: &S2,
    mut first2: C2,
    last2: B2,
    dst: &mut D,
    mut out: O,
    mut rel: R,
) -> InInOut<C1, C2, O>
where
    S1: ?Sized,
    S2: ?Sized,
    C1: InputCursor<S1>,
    C1::Item: Clone,
    C2: InputCursor<S2, Item = C1::Item>,
    B1: Boundary<C1>,
    B2: Boundary<C2>,
    D: ?Sized,
    O: OutputCursor<D, C1::Item>,
    R: Relation<C1::Item>,
{
    loop {
        if last1.is_reached(&first1) {
            let tail = copy(seq2, first2, last2, dst, out);
            return InInOut {
                in1: first1,
                in2: tail.input,
                out: tail.out,
            };
        }
        if last2.is_reached(&first2) {
            let tail = copy(seq1, first1, last1, dst, out);
            return InInOut {
                in1: tail.input,
                in2: first2,
                out: tail.out,
            };
        }
        let (a, b) = (first1.read(seq1), first2.read(seq2));
        if rel.less(a, b) {
            out.put(dst, a.clone());
            first1.step(seq1);
        } else if rel.less(b, a) {
            out.put(dst, b.clone());
            first2.step(seq2);
        } else {
            out.put(dst, a.clone());
            first1.step(seq1);
            first2.step(seq2);
        }
    }
}

/// Elements present in both ranges, taken from the first.
#[allow(clippy::too_many_arguments)]
pub fn set_intersection<S1, C1, B1, S2, C2, B2, D, O, R>(
    seq1: &S1,
    mut first1: C1,
    last1: B1,
    seq2: &S2,
    mut first2: C2,
    last2: B2,
    dst: &mut D,
    mut out: O,
    mut rel: R,
) -> InInOut<C1, C2, O>
where
    S1: ?Sized,
    S2: ?Sized,
    C1: InputCursor<S1>,
    C1::Item: Clone,
    C2: InputCursor<S2, Item = C1::Item>,
    B1: Boundary<C1>,
    B2: Boundary<C2>,
    D: ?Sized,
    O: OutputCursor<D, C1::Item>,
    R: Relation<C1::Item>,
{
    while !last1.is_reached(&first1) && !last2.is_reached(&first2) {
        let (a, b) = (first1.read(seq1), first2.read(seq2));
        if rel.less(a, b) {
            first1.step(seq1);
        } else if rel.less(b, a) {
            first2.step(seq2);
        } else {
            out.put(dst, a.clone());
            first1.step(seq1);
            first2.step(seq2);
        }
    }
    InInOut {
        in1: first1,
        in2: first2,
        out,
    }
}

/// Elements of the first range without a partner in the second. Stops
/// reading the second range wherever the first one runs out.
#[allow(clippy::too_many_arguments)]
pub fn set_difference<S1, C1, B1, S2, C2, B2, D, O, R>(
    seq1: &S1,
    mut first1: C1,
    last1: B1,
    seq2: &S2,
    mut first2: C2,
    last2: B2,
    dst: &mut D,
    mut out: O,
    mut rel: R,
) -> InOut<C1, O>
where
    S1: ?Sized,
    S2: ?Sized,
    C1: InputCursor<S1>,
    C1::Item: Clone,
    C2: InputCursor<S2, Item = C1::Item>,
    B1: Boundary<C1>,
    B2: Boundary<C2>,
    D: ?Sized,
    O: OutputCursor<D, C1::Item>,
    R: Relation<C1::Item>,
{
    while !last1.is_reached(&first1) {
        if last2.is_reached(&first2) {
            return copy(seq1, first1, last1, dst, out);
        }
        let (a, b) = (first1.read(seq1), first2.read(seq2));
        if rel.less(a, b) {
            out.put(dst, a.clone());
            first1.step(seq1);
        } else if rel.less(b, a) {
            first2.step(seq2);
        } else {
            first1.step(seq1);
            first2.step(seq2);
        }
    }
    InOut { input: first1, out }
}

/// Elements of either range without a partner in the other.
#[allow(clippy::too_many_arguments)]
pub fn set_symmetric_difference<S1, C1, B1, S2, C2, B2, D, O, R>(
    seq1: &S1,
    mut first1: C1,
    last1: B1,
    seq2: &S2,
    mut first2: C2,
    last2: B2,
    dst: &mut D,
    mut out: O,
    mut rel: R,
) -> InInOut<C1, C2, O>
where
    S1: ?Sized,
    S2: ?Sized,
    C1: InputCursor<S1>,
    C1::Item: Clone,
    C2: InputCursor<S2, Item = C1::Item>,
    B1: Boundary<C1>,
    B2: Boundary<C2>,
    D: ?Sized,
    O: OutputCursor<D, C1::Item>,
    R: Relation<C1::Item>,
{
    loop {
        if last1.is_reached(&first1) {
            let tail = copy(seq2, first2, last2, dst, out);
            return InInOut {
                in1: first1,
                in2: tail.input,
                out: tail.out,
            };
        }
        if last2.is_reached(&first2) {
            let tail = copy(seq1, first1, last1, dst, out);
            return InInOut {
                in1: tail.input,
                in2: first2,
                out: tail.out,
            };
        }
        let (a, b) = (first1.read(seq1), first2.read(seq2));
        if rel.less(a, b) {
            out.put(dst, a.clone());
            first1.step(seq1);
        } else if rel.less(b, a) {
            out.put(dst, b.clone());
            first2.step(seq2);
        } else {
            first1.step(seq1);
            first2.step(seq2);
        }
    }
}

/// Whether every element of the second range has a partner in the first.
pub fn includes<S1, C1, B1, S2, C2, B2, R>(
    seq1: &S1,
    mut first1: C1,
    last1: B1,
    seq2: &S2,
    mut first2: C2,
    last2: B2,
    mut rel: R,
) -> bool
where
    S1: ?Sized,
    S2: ?Sized,
    C1: InputCursor<S1>,
    C2: InputCursor<S2, Item = C1::Item>,
    B1: Boundary<C1>,
    B2: Boundary<C2>,
    R: Relation<C1::Item>,
{
    while !last2.is_reached(&first2) {
        if last1.is_reached(&first1) {
            return false;
        }
        let (a, b) = (first1.read(seq1), first2.read(seq2));
        if rel.less(b, a) {
            return false;
        }
        if !rel.less(a, b) {
            first2.step(seq2);
        }
        first1.step(seq1);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{BackInserter, Pos};
    use crate::relation::{by_key, Less};

    fn run<F>(a: &[i32], b: &[i32], op: F) -> Vec<i32>
    where
        F: FnOnce(&[i32], &[i32], &mut Vec<i32>),
    {
        let mut out = Vec::new();
        op(a, b, &mut out);
        out
    }

    const A: [i32; 6] = [1, 2, 2, 2, 5, 7];
    const B: [i32; 5] = [2, 2, 3, 5, 9];

    #[test]
    fn union_keeps_the_larger_multiplicity() {
        let out = run(&A, &B, |a, b, out| {
            set_union(a, Pos(0), Pos(a.len()), b, Pos(0), Pos(b.len()), out, BackInserter::default(), Less);
        });
        assert_eq!(out, vec![1, 2, 2, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn intersection_keeps_the_smaller_multiplicity() {
        let out = run(&A, &B, |a, b, out| {
            set_intersection(a, Pos(0), Pos(a.len()), b, Pos(0), Pos(b.len()), out, BackInserter::default(), Less);
        });
        assert_eq!(out, vec![2, 2, 5]);
    }

    #[test]
    fn difference_and_its_end_positions() {
        let mut out = Vec::new();
        let r = set_difference(&A[..], Pos(0), Pos(6), &B[..], Pos(0), Pos(5), &mut out, BackInserter::default(), Less);
        assert_eq!(out, vec![1, 2, 7]);
        assert_eq!(r.input, Pos(6));
        assert_eq!(r.out.written, 3);
    }

    #[test]
    fn symmetric_difference_takes_both_sides() {
        let out = run(&A, &B, |a, b, out| {
            set_symmetric_difference(a, Pos(0), Pos(a.len()), b, Pos(0), Pos(b.len()), out, BackInserter::default(), Less);
        });
        assert_eq!(out, vec![1, 2, 3, 7, 9]);
    }

    #[test]
    fn empty_inputs() {
        let out = run(&[], &B, |a, b, out| {
            set_union(a, Pos(0), Pos(a.len()), b, Pos(0), Pos(b.len()), out, BackInserter::default(), Less);
        });
        assert_eq!(out, B.to_vec());
        let out = run(&A, &[], |a, b, out| {
            set_intersection(a, Pos(0), Pos(a.len()), b, Pos(0), Pos(b.len()), out, BackInserter::default(), Less);
        });
        assert!(out.is_empty());
    }

    #[test]
    fn union_emits_the_first_ranges_partner() {
        let a = [(1, 'a'), (3, 'a')];
        let b = [(1, 'b'), (2, 'b')];
        let mut out = Vec::new();
        set_union(&a[..], Pos(0), Pos(2), &b[..], Pos(0), Pos(2), &mut out, BackInserter::default(), by_key(|p: &(i32, char)| p.0));
        assert_eq!(out, vec![(1, 'a'), (2, 'b'), (3, 'a')]);
    }

    #[test]
    fn includes_respects_multiplicity() {
        assert!(includes(&A[..], Pos(0), Pos(6), &[2, 2, 5][..], Pos(0), Pos(3), Less));
        assert!(!includes(&A[..], Pos(0), Pos(6), &[5, 5][..], Pos(0), Pos(2), Less));
        assert!(!includes(&A[..], Pos(0), Pos(6), &[3][..], Pos(0), Pos(1), Less));
        assert!(includes(&A[..], Pos(0), Pos(6), &[0i32; 0][..], Pos(0), Pos(0), Less));
    }
}
