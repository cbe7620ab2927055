//! Partitioning
//!
//! [`partition`] swaps in place and is not stable. [`stable_partition`]
//! stages the failing elements in scratch memory when it can get enough,
//! and otherwise partitions both halves and rotates them together.

use tracing::trace;

use crate::config::Tuning;
use crate::cursor::{
    distance, find_if_not, next_to, BidirectionalCursor, BidirectionalTier, Boundary, Capability,
    Distance, ForwardCursor, ForwardTier, InputCursor, OutputCursor, Permutable, RandomAccessTier,
};
use crate::results::InOut;
use crate::rotate::{rotate_range, RotateStrategy};
use crate::scratch::ScratchBuffer;

/// Per-tier partition algorithm.
pub trait PartitionStrategy<S: ?Sized, C: ForwardCursor<S>>: Capability {
    /// Move elements satisfying `pred` before those that fail it and return
    /// the first failing position.
    fn partition<B, P>(seq: &mut S, first: C, last: B, pred: &mut P) -> C
    where
        B: Boundary<C>,
        P: FnMut(&C::Item) -> bool;
}

impl<S, C> PartitionStrategy<S, C> for ForwardTier
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
{
    fn partition<B, P>(seq: &mut S, first: C, last: B, pred: &mut P) -> C
    where
        B: Boundary<C>,
        P: FnMut(&C::Item) -> bool,
    {
        trace!("partition: trailing-pointer scan");
        partition_forward(seq, first, last, pred)
    }
}

impl<S, C> PartitionStrategy<S, C> for BidirectionalTier
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
{
    fn partition<B, P>(seq: &mut S, first: C, last: B, pred: &mut P) -> C
    where
        B: Boundary<C>,
        P: FnMut(&C::Item) -> bool,
    {
        trace!("partition: two-ended scan");
        partition_bidirectional(seq, first, last, pred)
    }
}

impl<S, C> PartitionStrategy<S, C> for RandomAccessTier
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
{
    fn partition<B, P>(seq: &mut S, first: C, last: B, pred: &mut P) -> C
    where
        B: Boundary<C>,
        P: FnMut(&C::Item) -> bool,
    {
        trace!("partition: two-ended scan");
        partition_bidirectional(seq, first, last, pred)
    }
}

fn partition_forward<S, C, B, P>(seq: &mut S, first: C, last: B, pred: &mut P) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
{
    let mut first = find_if_not(seq, first, &last, &mut *pred);
    if last.is_reached(&first) {
        return first;
    }
    let mut scan = first.clone();
    scan.step(seq);
    while !last.is_reached(&scan) {
        if pred(scan.read(seq)) {
            first.swap_with(seq, &scan);
            first.step(seq);
        }
        scan.step(seq);
    }
    first
}

fn partition_bidirectional<S, C, B, P>(seq: &mut S, mut first: C, last: B, pred: &mut P) -> C
where
    S: ?Sized,
    C: BidirectionalCursor<S> + Permutable<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
{
    let mut last = next_to(seq, first.clone(), &last);
    while first != last {
        if !pred(first.read(seq)) {
            loop {
                last.step_back(seq);
                if first == last {
                    return first;
                }
                if pred(last.read(seq)) {
                    first.swap_with(seq, &last);
                    break;
                }
            }
        }
        first.step(seq);
    }
    first
}

/// Reorder `[first, last)` so elements satisfying `pred` come first. Not
/// stable. Returns the first element failing `pred`.
pub fn partition<S, C, B, P>(seq: &mut S, first: C, last: B, mut pred: P) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
    C::Tier: PartitionStrategy<S, C>,
{
    <C::Tier as PartitionStrategy<S, C>>::partition(seq, first, last, &mut pred)
}

/// Reorder `[first, last)` so elements satisfying `pred` come first, keeping
/// the relative order inside both groups. Returns the first failing element.
pub fn stable_partition<S, C, B, P>(seq: &mut S, first: C, last: B, pred: P) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
    C::Tier: RotateStrategy<S, C>,
{
    stable_partition_tuned(seq, first, last, pred, &Tuning::default())
}

/// [`stable_partition`] with an explicit scratch limit.
pub fn stable_partition_tuned<S, C, B, P>(
    seq: &mut S,
    first: C,
    last: B,
    mut pred: P,
    tuning: &Tuning,
) -> C
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
    C::Tier: RotateStrategy<S, C>,
{
    let first = find_if_not(seq, first, &last, &mut pred);
    if last.is_reached(&first) {
        return first;
    }
    let n = distance(seq, first.clone(), &last);
    let mut buf = ScratchBuffer::acquire_limited(n as usize, tuning.scratch_limit);
    stable_partition_n(seq, first, n, &mut pred, &mut buf).0
}

/// Partition the `n` elements at `first`. Returns the partition point and
/// the cursor past the range.
fn stable_partition_n<S, C, P>(
    seq: &mut S,
    first: C,
    n: Distance,
    pred: &mut P,
    buf: &mut ScratchBuffer<C::Item>,
) -> (C, C)
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
    C::Tier: RotateStrategy<S, C>,
{
    if n == 0 {
        return (first.clone(), first);
    }
    if n == 1 {
        let mut end = first.clone();
        end.step(seq);
        return if pred(first.read(seq)) {
            (end.clone(), end)
        } else {
            (first, end)
        };
    }
    if n as usize <= buf.capacity() {
        return stable_partition_with_buffer(seq, first, n, pred, buf);
    }
    trace!(n, "stable partition by rotation");
    let half = n / 2;
    let (left_point, middle) = stable_partition_n(seq, first, half, pred, buf);
    let (right_point, end) = stable_partition_n(seq, middle.clone(), n - half, pred, buf);
    let point = rotate_range(seq, left_point, middle, right_point).begin;
    (point, end)
}

/// Swap passing elements forward and stage clones of the failing ones, then
/// write the staged run behind the passing block.
fn stable_partition_with_buffer<S, C, P>(
    seq: &mut S,
    first: C,
    n: Distance,
    pred: &mut P,
    buf: &mut ScratchBuffer<C::Item>,
) -> (C, C)
where
    S: ?Sized,
    C: ForwardCursor<S> + Permutable<S>,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut staging = buf.staging();
    let mut out = first.clone();
    let mut scan = first;
    for _ in 0..n {
        if pred(scan.read(seq)) {
            if out != scan {
                out.swap_with(seq, &scan);
            }
            out.step(seq);
        } else {
            staging.push(scan.read(seq).clone());
        }
        scan.step(seq);
    }
    let point = out.clone();
    for value in staging.drain() {
        out.replace(seq, value);
        out.step(seq);
    }
    (point, scan)
}

/// Whether every element satisfying `pred` precedes every element failing it.
pub fn is_partitioned<S, C, B, P>(seq: &S, first: C, last: B, mut pred: P) -> bool
where
    S: ?Sized,
    C: InputCursor<S>,
    B: Boundary<C>,
    P: FnMut(&C::Item) -> bool,
{
    let mut rest = find_if_not(seq, first, &last, &mut pred);
    while !last.is_reached(&rest) {
        if pred(rest.read(seq)) {
            return false;
        }
        rest.step(seq);
    }
    true
}

/// Copy elements satisfying `pred` to `out_true` and the rest to `out_false`,
/// keeping their order. Returns the input end and both output cursors.
#[allow(clippy::too_many_arguments)]
pub fn partition_copy<S, C, B, D1, O1, D2, O2, P>(
    seq: &S,
    mut first: C,
    last: B,
    dst_true: &mut D1,
    mut out_true: O1,
    dst_false: &mut D2,
    mut out_false: O2,
    mut pred: P,
) -> InOut<C, (O1, O2)>
where
    S: ?Sized,
    C: InputCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    D1: ?Sized,
    D2: ?Sized,
    O1: OutputCursor<D1, C::Item>,
    O2: OutputCursor<D2, C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    while !last.is_reached(&first) {
        let item = first.read(seq);
        if pred(item) {
            out_true.put(dst_true, item.clone());
        } else {
            out_false.put(dst_false, item.clone());
        }
        first.step(seq);
    }
    InOut {
        input: first,
        out: (out_true, out_false),
    }
}
