//! Merging adjacent runs in place

use tracing::trace;

use crate::config::Tuning;
use crate::cursor::{distance, Boundary, ForwardCursor, Permutable};
use crate::relation::Relation;
use crate::rotate::RotateStrategy;
use crate::scratch::ScratchBuffer;
use crate::sort::merge_n_adaptive;

/// Merge the sorted runs `[first, middle)` and `[middle, last)` into one
/// sorted run, stably. Returns the end cursor.
///
/// Stages the left run in scratch memory when it is long enough to be worth
/// it and the memory is available; otherwise merges by rotation in
/// O(n log n) swaps.
pub fn inplace_merge<S, C, B, R>(seq: &mut S, first: C, middle: C, last: B, rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    B: Boundary<C>,
    R: Relation<C::Item>,
    C::Tier: RotateStrategy<S, C>,
{
    inplace_merge_tuned(seq, first, middle, last, rel, &Tuning::default())
}

/// [`inplace_merge`] with explicit thresholds and scratch limit.
pub fn inplace_merge_tuned<S, C, B, R>(
    seq: &mut S,
    first: C,
    middle: C,
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
    let n0 = first.distance_to(seq, &middle);
    let n1 = distance(seq, middle.clone(), &last);
    let mut buf = if n0 as usize > tuning.inplace_merge_buffer_threshold {
        ScratchBuffer::acquire_limited(n0 as usize, tuning.scratch_limit)
    } else {
        ScratchBuffer::empty()
    };
    trace!(n0, n1, scratch = buf.capacity(), "inplace merge");
    merge_n_adaptive(seq, first, n0, middle, n1, &mut buf, &mut rel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ForwardList, ForwardOnly, Pos};
    use crate::relation::{by_key, Less};

    #[test]
    fn merges_short_runs_by_rotation() {
        let mut v = vec![2, 5, 9, 1, 3, 9, 10];
        let end = inplace_merge(&mut v[..], Pos(0), Pos(3), Pos(7), Less);
        assert_eq!(end, Pos(7));
        assert_eq!(v, vec![1, 2, 3, 5, 9, 9, 10]);
    }

    #[test]
    fn long_runs_use_scratch_and_stay_stable() {
        let mut v: Vec<(u8, u16)> = (0..40u16).map(|i| ((i % 10) as u8, i)).collect();
        v[..20].sort();
        v[20..].sort();
        let expected = {
            let mut e = v.clone();
            e.sort_by_key(|p| p.0);
            e
        };
        for tuning in [Tuning::default(), Tuning::without_scratch()] {
            let mut w = v.clone();
            inplace_merge_tuned(&mut w[..], ForwardOnly(Pos(0)), ForwardOnly(Pos(20)), ForwardOnly(Pos(40)), by_key(|p: &(u8, u16)| p.0), &tuning);
            assert_eq!(w, expected);
        }
    }

    #[test]
    fn empty_halves_are_untouched() {
        let mut v = vec![3, 1, 2];
        inplace_merge(&mut v[..], Pos(0), Pos(0), Pos(3), Less);
        assert_eq!(v, vec![3, 1, 2]);
        inplace_merge(&mut v[..], Pos(0), Pos(3), Pos(3), Less);
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn merges_inside_a_forward_list() {
        let mut list: ForwardList<i32> = [1, 4, 6, 2, 3, 7].into_iter().collect();
        let first = list.begin();
        let middle = crate::cursor::next(&list, first, 3);
        inplace_merge(&mut list, first, middle, crate::cursor::ListCursor::end(), Less);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 6, 7]);
    }
}
