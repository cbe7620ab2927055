//! Merge & set algorithms
//!
//! Two-range algorithms read from two (possibly identical) read-only
//! sequences and write clones through an [`OutputCursor`]. Both inputs must be
//! sorted by the same relation; otherwise the output is unspecified but the
//! call still terminates. [`inplace_merge`] is the odd one out: it merges two
//! adjacent runs inside one mutable sequence.

mod inplace;
mod set_ops;

pub use inplace::{inplace_merge, inplace_merge_tuned};
pub use set_ops::{
    includes, set_difference, set_intersection, set_symmetric_difference, set_union,
};

use crate::cursor::{Boundary, InputCursor, OutputCursor};
use crate::relation::Relation;
use crate::results::{InInOut, InOut};

/// Clone every element of `[first, last)` into `out`.
pub fn copy<S, C, B, D, O>(seq: &S, mut first: C, last: B, dst: &mut D, mut out: O) -> InOut<C, O>
where
    S: ?Sized,
    C: InputCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    D: ?Sized,
    O: OutputCursor<D, C::Item>,
{
    while !last.is_reached(&first) {
        out.put(dst, first.read(seq).clone());
        first.step(seq);
    }
    InOut { input: first, out }
}

/// Merge two sorted ranges into `out`. On ties the element from the first
/// range goes first, so merging is stable.
#[allow(clippy::too_many_arguments)]
pub fn merge<S1, C1, B1, S2, C2, B2, D, O, R>(
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
        if rel.less(b, a) {
            out.put(dst, b.clone());
            first2.step(seq2);
        } else {
            out.put(dst, a.clone());
            first1.step(seq1);
        }
    }
}
