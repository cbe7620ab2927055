//! Tier-capping wrappers
//!
//! Each wrapper forwards to an inner cursor but reports a lower tier and
//! hides O(1) navigation, so algorithms pick the strategy of the capped tier
//! while running over ordinary slice storage.

use super::{
    BidirectionalCursor, BidirectionalTier, Boundary, ForwardCursor, ForwardTier, InputCursor,
    InputTier, Permutable,
};

/// Single-pass view of a cursor. Not `Clone`, so nothing can re-read.
#[derive(Debug)]
pub struct InputOnly<C>(C);

impl<C> InputOnly<C> {
    /// Wrap `cursor`.
    pub fn new(cursor: C) -> Self {
        InputOnly(cursor)
    }

    /// Recover the inner cursor.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<S: ?Sized, C: InputCursor<S>> InputCursor<S> for InputOnly<C> {
    type Item = C::Item;
    type Tier = InputTier;

    fn read<'s>(&self, seq: &'s S) -> &'s C::Item {
        self.0.read(seq)
    }

    fn step(&mut self, seq: &S) {
        self.0.step(seq);
    }
}

impl<C: Boundary<C>> Boundary<InputOnly<C>> for InputOnly<C> {
    fn is_reached(&self, cursor: &InputOnly<C>) -> bool {
        self.0.is_reached(&cursor.0)
    }
}

/// Forward-only view of a cursor: linear stepping, no sized boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardOnly<C>(pub C);

impl<S: ?Sized, C: ForwardCursor<S>> InputCursor<S> for ForwardOnly<C> {
    type Item = C::Item;
    type Tier = ForwardTier;

    fn read<'s>(&self, seq: &'s S) -> &'s C::Item {
        self.0.read(seq)
    }

    fn step(&mut self, seq: &S) {
        self.0.step(seq);
    }
}

impl<S: ?Sized, C: ForwardCursor<S>> ForwardCursor<S> for ForwardOnly<C> {}

impl<S: ?Sized, C: ForwardCursor<S> + Permutable<S>> Permutable<S> for ForwardOnly<C> {
    fn swap_with(&self, seq: &mut S, other: &Self) {
        self.0.swap_with(seq, &other.0);
    }

    fn replace(&self, seq: &mut S, value: C::Item) -> C::Item {
        self.0.replace(seq, value)
    }
}

impl<C: Boundary<C>> Boundary<ForwardOnly<C>> for ForwardOnly<C> {
    fn is_reached(&self, cursor: &ForwardOnly<C>) -> bool {
        self.0.is_reached(&cursor.0)
    }
}

/// Bidirectional view of a cursor: no jumps, no sized boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidirectionalOnly<C>(pub C);

impl<S: ?Sized, C: BidirectionalCursor<S>> InputCursor<S> for BidirectionalOnly<C> {
    type Item = C::Item;
    type Tier = BidirectionalTier;

    fn read<'s>(&self, seq: &'s S) -> &'s C::Item {
        self.0.read(seq)
    }

    fn step(&mut self, seq: &S) {
        self.0.step(seq);
    }
}

impl<S: ?Sized, C: BidirectionalCursor<S>> ForwardCursor<S> for BidirectionalOnly<C> {}

impl<S: ?Sized, C: BidirectionalCursor<S>> BidirectionalCursor<S> for BidirectionalOnly<C> {
    fn step_back(&mut self, seq: &S) {
        self.0.step_back(seq);
    }
}

impl<S: ?Sized, C: BidirectionalCursor<S> + Permutable<S>> Permutable<S>
    for BidirectionalOnly<C>
{
    fn swap_with(&self, seq: &mut S, other: &Self) {
        self.0.swap_with(seq, &other.0);
    }

    fn replace(&self, seq: &mut S, value: C::Item) -> C::Item {
        self.0.replace(seq, value)
    }
}

impl<C: Boundary<C>> Boundary<BidirectionalOnly<C>> for BidirectionalOnly<C> {
    fn is_reached(&self, cursor: &BidirectionalOnly<C>) -> bool {
        self.0.is_reached(&cursor.0)
    }
}
