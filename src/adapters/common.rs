//! Cursor-or-boundary values
//!
//! `Common<C, B>` gives a `(cursor, sentinel)` range a single type for both
//! ends, for code that needs `first` and `last` to match.

use crate::cursor::{Boundary, Capability, Distance, ForwardCursor, InputCursor, Permutable};

/// Either a cursor or the boundary value of its range.
#[derive(Debug, Clone)]
pub enum Common<C, B> {
    /// A real position.
    Cursor(C),
    /// The end of the range.
    Boundary(B),
}

/// `(first, last)` of one uniform type.
pub fn common_range<C, B>(first: C, bound: B) -> (Common<C, B>, Common<C, B>) {
    (Common::Cursor(first), Common::Boundary(bound))
}

impl<C, B> Common<C, B> {
    /// The cursor, unless this is the boundary value.
    pub fn cursor(&self) -> Option<&C> {
        match self {
            Common::Cursor(c) => Some(c),
            Common::Boundary(_) => None,
        }
    }

    /// Whether this holds the boundary value.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Common::Boundary(_))
    }
}

impl<C: Boundary<C>, B: Boundary<C>> Common<C, B> {
    /// `self - origin` when both sides can measure it in O(1).
    pub fn offset_between(&self, origin: &Self) -> Option<Distance> {
        match (self, origin) {
            (Common::Cursor(end), Common::Cursor(start)) => end.remaining(start),
            (Common::Boundary(end), Common::Cursor(start)) => end.remaining(start),
            (Common::Cursor(start), Common::Boundary(end)) => end.remaining(start).map(|n| -n),
            (Common::Boundary(_), Common::Boundary(_)) => Some(0),
        }
    }

    fn meets(&self, other: &Self) -> bool {
        match (self, other) {
            (Common::Cursor(a), Common::Cursor(b)) => a.is_reached(b),
            (Common::Cursor(c), Common::Boundary(b)) | (Common::Boundary(b), Common::Cursor(c)) => {
                b.is_reached(c)
            }
            (Common::Boundary(_), Common::Boundary(_)) => true,
        }
    }
}

impl<C: Boundary<C>, B: Boundary<C>> PartialEq for Common<C, B> {
    fn eq(&self, other: &Self) -> bool {
        self.meets(other)
    }
}

impl<S, C, B> InputCursor<S> for Common<C, B>
where
    S: ?Sized,
    C: InputCursor<S>,
{
    type Item = C::Item;
    type Tier = <C::Tier as Capability>::Common;

    fn read<'s>(&self, seq: &'s S) -> &'s C::Item {
        match self {
            Common::Cursor(c) => c.read(seq),
            Common::Boundary(_) => panic!("read through a boundary value"),
        }
    }

    fn step(&mut self, seq: &S) {
        match self {
            Common::Cursor(c) => c.step(seq),
            Common::Boundary(_) => panic!("stepped past a boundary value"),
        }
    }

    fn advance_by(&mut self, seq: &S, n: Distance) {
        match self {
            Common::Cursor(c) => c.advance_by(seq, n),
            Common::Boundary(_) => debug_assert!(n == 0, "advanced past a boundary value"),
        }
    }
}

impl<S, C, B> ForwardCursor<S> for Common<C, B>
where
    S: ?Sized,
    C: ForwardCursor<S> + Boundary<C>,
    B: Boundary<C> + Clone,
{
}

impl<S, C, B> Permutable<S> for Common<C, B>
where
    S: ?Sized,
    C: Permutable<S>,
{
    fn swap_with(&self, seq: &mut S, other: &Self) {
        match (self, other) {
            (Common::Cursor(a), Common::Cursor(b)) => a.swap_with(seq, b),
            _ => panic!("swap through a boundary value"),
        }
    }

    fn replace(&self, seq: &mut S, value: C::Item) -> C::Item {
        match self {
            Common::Cursor(c) => c.replace(seq, value),
            Common::Boundary(_) => panic!("write through a boundary value"),
        }
    }
}

impl<C: Boundary<C>, B: Boundary<C>> Boundary<Common<C, B>> for Common<C, B> {
    fn is_reached(&self, cursor: &Common<C, B>) -> bool {
        self.meets(cursor)
    }

    fn remaining(&self, cursor: &Common<C, B>) -> Option<Distance> {
        self.offset_between(cursor)
    }
}
