//! Cursor and boundary model
//!
//! A cursor is a position into a sequence. Element access always goes through
//! the sequence (`cursor.read(seq)`, `cursor.swap_with(seq, &other)`), so
//! cursors are plain values that can be copied around freely while the
//! algorithm holds the only mutable borrow of the storage.
//!
//! Capability tiers, strictly increasing:
//!
//! 1. [`InputCursor`]: read the current element, step forward (single pass)
//! 2. [`ForwardCursor`]: multi-pass, `Clone + PartialEq`
//! 3. [`BidirectionalCursor`]: adds `step_back`
//! 4. [`RandomAccessCursor`]: adds O(1) `jump` and signed `offset_from`
//!
//! Every cursor names its tier marker through [`InputCursor::Tier`]. Strategy
//! traits (`SortStrategy`, `RotateStrategy`, `PartitionStrategy`,
//! `ReverseStrategy`) are implemented once per marker, which selects an
//! algorithm body at compile time. Plain navigation does not need a strategy:
//! the provided `advance_by`, `distance_to` and `retreat_by` methods are
//! overridden by random-access cursors.

mod list;
mod ops;
mod output;
mod slice;
mod tiers;

pub use list::{ForwardList, Iter as ListIter, ListCursor};
pub use ops::{
    advance, advance_back, advance_by, distance, find_if, find_if_not, next, next_to, prev,
};
pub(crate) use ops::reaches_within;
pub use output::{BackInserter, OutputCursor};
pub use slice::{span, Pos};
pub use tiers::{BidirectionalOnly, ForwardOnly, InputOnly};

use std::fmt;

/// Signed element count between two cursors.
pub type Distance = isize;

/// Capability tier of a cursor, ordered by strict inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Single pass, read once.
    Input,
    /// Multi-pass, equality comparable.
    Forward,
    /// Forward plus step back.
    Bidirectional,
    /// Bidirectional plus O(1) jumps and subtraction.
    RandomAccess,
}

/// Tier marker implemented by the zero-sized tag types.
pub trait Capability: Copy + Default + fmt::Debug + 'static {
    /// Runtime view of the tier.
    const TIER: Tier;

    /// Tier of a cursor that may also hold a boundary value
    /// (see [`crate::adapters::Common`]). Such a cursor cannot step back.
    type Common: Capability;

    /// Whether this tier includes `required`.
    fn supports(required: Tier) -> bool {
        Self::TIER >= required
    }
}

/// Tag for single-pass cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTier;

/// Tag for multi-pass forward cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardTier;

/// Tag for bidirectional cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidirectionalTier;

/// Tag for random-access cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomAccessTier;

impl Capability for InputTier {
    const TIER: Tier = Tier::Input;
    type Common = InputTier;
}

impl Capability for ForwardTier {
    const TIER: Tier = Tier::Forward;
    type Common = ForwardTier;
}

impl Capability for BidirectionalTier {
    const TIER: Tier = Tier::Bidirectional;
    type Common = ForwardTier;
}

impl Capability for RandomAccessTier {
    const TIER: Tier = Tier::RandomAccess;
    type Common = ForwardTier;
}

/// Tier of cursor type `C` over sequence `S`.
pub fn tier_of<S: ?Sized, C: InputCursor<S>>() -> Tier {
    <C::Tier as Capability>::TIER
}

/// Single-pass cursor: read the current element and step forward.
pub trait InputCursor<S: ?Sized> {
    /// Element type stored in the sequence.
    type Item;
    /// Capability tier marker.
    type Tier: Capability;

    /// Borrow the element under the cursor.
    fn read<'s>(&self, seq: &'s S) -> &'s Self::Item;

    /// Move to the next position.
    fn step(&mut self, seq: &S);

    /// Move `n >= 0` positions forward. Random-access cursors override this
    /// with an O(1) jump.
    fn advance_by(&mut self, seq: &S, n: Distance) {
        debug_assert!(n >= 0, "advance_by needs a non-negative count");
        for _ in 0..n {
            self.step(seq);
        }
    }
}

/// Multi-pass cursor.
pub trait ForwardCursor<S: ?Sized>: InputCursor<S> + Clone + PartialEq {
    /// Number of steps from `self` to `other`, which must be reachable.
    /// Linear by default, O(1) for random-access cursors.
    fn distance_to(&self, seq: &S, other: &Self) -> Distance {
        let mut cursor = self.clone();
        let mut n = 0;
        while cursor != *other {
            cursor.step(seq);
            n += 1;
        }
        n
    }
}

/// Cursor that can also step back.
pub trait BidirectionalCursor<S: ?Sized>: ForwardCursor<S> {
    /// Move to the previous position.
    fn step_back(&mut self, seq: &S);

    /// Move `n >= 0` positions back.
    fn retreat_by(&mut self, seq: &S, n: Distance) {
        debug_assert!(n >= 0, "retreat_by needs a non-negative count");
        for _ in 0..n {
            self.step_back(seq);
        }
    }
}

/// Cursor with O(1) jumps and subtraction.
pub trait RandomAccessCursor<S: ?Sized>: BidirectionalCursor<S> {
    /// Move by `n` positions, in either direction.
    fn jump(&mut self, seq: &S, n: Distance);

    /// Signed distance `self - origin` within `seq`.
    fn offset_from(&self, seq: &S, origin: &Self) -> Distance;
}

/// Write access: the element under a cursor can be exchanged or replaced.
pub trait Permutable<S: ?Sized>: InputCursor<S> {
    /// Exchange the elements under `self` and `other`.
    fn swap_with(&self, seq: &mut S, other: &Self);

    /// Store `value` under the cursor and return the previous element.
    fn replace(&self, seq: &mut S, value: Self::Item) -> Self::Item;
}

/// End-of-sequence marker for cursors of type `C`.
pub trait Boundary<C> {
    /// Whether `cursor` has reached this boundary.
    fn is_reached(&self, cursor: &C) -> bool;

    /// Number of elements between `cursor` and this boundary, when it can be
    /// computed in O(1).
    fn remaining(&self, _cursor: &C) -> Option<Distance> {
        None
    }
}

/// A reference to a boundary is a boundary.
impl<C, B: Boundary<C> + ?Sized> Boundary<C> for &B {
    fn is_reached(&self, cursor: &C) -> bool {
        (**self).is_reached(cursor)
    }

    fn remaining(&self, cursor: &C) -> Option<Distance> {
        (**self).remaining(cursor)
    }
}

/// Boundary that is never reached. Scans bounded by it must be guaranteed to
/// stop on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unreachable;

impl<C> Boundary<C> for Unreachable {
    fn is_reached(&self, _cursor: &C) -> bool {
        false
    }
}
