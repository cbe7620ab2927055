//! Adaptive merge sort for forward ranges
//!
//! Halves by count, so it needs nothing beyond forward steps. Each merge
//! stages the left run in the scratch buffer when it fits; otherwise it
//! splits both runs around a pivot found by binary search, rotates the middle
//! blocks into place and recurses. Stable either way.

use tracing::trace;

use crate::config::Tuning;
use crate::cursor::{next, reaches_within, Distance, ForwardCursor, Permutable};
use crate::relation::Relation;
use crate::rotate::{rotate_range, RotateStrategy};
use crate::scratch::ScratchBuffer;
use crate::search::{lower_bound_n, upper_bound_n};

/// Sort the `n` elements at `first`. Returns the cursor past them.
pub(crate) fn merge_sort_n<S, C, R>(
    seq: &mut S,
    first: C,
    n: Distance,
    rel: &mut R,
    tuning: &Tuning,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    R: Relation<C::Item>,
    C::Tier: RotateStrategy<S, C>,
{
    let half = (n / 2) as usize;
    let mut buf = if half >= tuning.merge_buffer_threshold {
        ScratchBuffer::acquire_limited(half, tuning.scratch_limit)
    } else {
        ScratchBuffer::empty()
    };
    sort_n_adaptive(seq, first, n, &mut buf, rel)
}

fn sort_n_adaptive<S, C, R>(
    seq: &mut S,
    first: C,
    n: Distance,
    buf: &mut ScratchBuffer<C::Item>,
    rel: &mut R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    R: Relation<C::Item>,
    C::Tier: RotateStrategy<S, C>,
{
    let half = n / 2;
    if half == 0 {
        return next(seq, first, n);
    }
    let middle = sort_n_adaptive(seq, first.clone(), half, buf, rel);
    sort_n_adaptive(seq, middle.clone(), n - half, buf, rel);
    merge_n_adaptive(seq, first, half, middle, n - half, buf, rel)
}

/// Merge the sorted run of `n0` elements at `f0` with the adjacent sorted run
/// of `n1` elements at `f1`. Returns the cursor past both.
pub(crate) fn merge_n_adaptive<S, C, R>(
    seq: &mut S,
    f0: C,
    n0: Distance,
    f1: C,
    n1: Distance,
    buf: &mut ScratchBuffer<C::Item>,
    rel: &mut R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    R: Relation<C::Item>,
    C::Tier: RotateStrategy<S, C>,
{
    debug_assert!(reaches_within(seq, &f0, n0, &f1), "runs are not adjacent");
    if n0 == 0 || n1 == 0 {
        return next(seq, f0, n0 + n1);
    }
    if n0 as usize <= buf.capacity() {
        return merge_n_with_buffer(seq, f0, n0, f1, n1, buf, rel);
    }
    trace!(n0, n1, "merge by rotation");
    let (f0_1, n0_0, n0_1, f1_0, n1_0, f1_1, n1_1);
    if n0 < n1 {
        // Pivot from the left run; right elements strictly below it move
        // in front of it.
        n0_0 = n0 / 2;
        f0_1 = next(seq, f0.clone(), n0_0);
        f1_1 = lower_bound_n(seq, f1.clone(), n1, f0_1.read(seq), rel);
        n0_1 = f1.distance_to(seq, &f1_1);
        let mut pivot = rotate_range(seq, f0_1.clone(), f1, f1_1.clone()).begin;
        pivot.step(seq);
        f1_0 = pivot;
        n1_0 = n0 - n0_0 - 1;
        n1_1 = n1 - n0_1;
    } else {
        // Pivot from the right run; left elements not above it stay in
        // front of it.
        n0_1 = n1 / 2;
        let mut pivot = next(seq, f1.clone(), n0_1);
        f0_1 = upper_bound_n(seq, f0.clone(), n0, pivot.read(seq), rel);
        pivot.step(seq);
        f1_1 = pivot;
        n0_0 = f0.distance_to(seq, &f0_1);
        f1_0 = rotate_range(seq, f0_1.clone(), f1, f1_1.clone()).begin;
        n1_0 = n0 - n0_0;
        n1_1 = n1 - n0_1 - 1;
    }
    merge_n_adaptive(seq, f0, n0_0, f0_1, n0_1, buf, rel);
    merge_n_adaptive(seq, f1_0, n1_0, f1_1, n1_1, buf, rel)
}

/// Stage the left run, then fill `[f0, f1 + n1)` from the staged copies and
/// the right run. Right elements move by swapping; the stale slot they leave
/// behind is always overwritten later.
fn merge_n_with_buffer<S, C, R>(
    seq: &mut S,
    f0: C,
    n0: Distance,
    f1: C,
    n1: Distance,
    buf: &mut ScratchBuffer<C::Item>,
    rel: &mut R,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    R: Relation<C::Item>,
{
    let mut staging = buf.staging();
    let mut cursor = f0.clone();
    for _ in 0..n0 {
        staging.push(cursor.read(seq).clone());
        cursor.step(seq);
    }

    let mut out = f0;
    let mut right = f1;
    let mut right_left = n1;
    let mut staged = staging.drain().peekable();
    loop {
        let Some(left) = staged.peek() else {
            return next(seq, right, right_left);
        };
        if right_left == 0 {
            break;
        }
        if rel.less(right.read(seq), left) {
            out.swap_with(seq, &right);
            right.step(seq);
            right_left -= 1;
        } else if let Some(value) = staged.next() {
            out.replace(seq, value);
        }
        out.step(seq);
    }
    for value in staged {
        out.replace(seq, value);
        out.step(seq);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ForwardList, ForwardOnly, Pos};
    use crate::relation::by_key;

    fn pairs(keys: &[u8]) -> Vec<(u8, usize)> {
        keys.iter().copied().zip(0..).collect()
    }

    fn check_stable(sorted: &[(u8, usize)]) {
        for w in sorted.windows(2) {
            assert!(w[0] <= w[1], "out of order or unstable: {w:?}");
        }
    }

    #[test]
    fn buffered_merge_interleaves_runs() {
        let mut v = vec![1, 4, 7, 2, 3, 9];
        let mut buf = ScratchBuffer::acquire(3);
        let end = merge_n_adaptive(&mut v[..], Pos(0), 3, Pos(3), 3, &mut buf, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(end, Pos(6));
        assert_eq!(v, vec![1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn rotation_merge_without_buffer() {
        let mut v = vec![1, 4, 7, 8, 8, 2, 3, 8, 9];
        let mut buf = ScratchBuffer::empty();
        let end = merge_n_adaptive(&mut v[..], ForwardOnly(Pos(0)), 5, ForwardOnly(Pos(5)), 4, &mut buf, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(end, ForwardOnly(Pos(9)));
        assert_eq!(v, vec![1, 2, 3, 4, 7, 8, 8, 8, 9]);
    }

    #[test]
    fn stable_with_and_without_scratch() {
        let keys: Vec<u8> = (0..200u32).map(|i| ((i * 7919) % 13) as u8).collect();
        for tuning in [Tuning::default(), Tuning::without_scratch()] {
            let mut v = pairs(&keys);
            let mut rel = by_key(|p: &(u8, usize)| p.0);
            merge_sort_n(&mut v[..], ForwardOnly(Pos(0)), 200, &mut rel, &tuning);
            check_stable(&v);
        }
    }

    #[test]
    fn partial_scratch_grant_still_sorts() {
        let keys: Vec<u8> = (0..100u32).map(|i| ((i * 31) % 17) as u8).collect();
        let tuning = Tuning::builder().with_scratch_limit(Some(5)).build().unwrap();
        let mut v = pairs(&keys);
        let mut rel = by_key(|p: &(u8, usize)| p.0);
        merge_sort_n(&mut v[..], Pos(0), 100, &mut rel, &tuning);
        check_stable(&v);
    }

    #[test]
    fn sorts_a_forward_list() {
        let mut list: ForwardList<i32> = [5, 3, 3, 1, 4].into_iter().collect();
        let begin = list.begin();
        merge_sort_n(&mut list, begin, 5, &mut |a: &i32, b: &i32| a < b, &Tuning::default());
        assert_eq!(list.to_vec(), vec![1, 3, 3, 4, 5]);
    }
}
