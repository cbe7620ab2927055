//! Ordering relations
//!
//! A [`Relation`] is a strict weak order over `T`, with any projection
//! already folded in. Every `FnMut(&T, &T) -> bool` closure is a relation, and
//! [`Less`], [`Greater`], [`by_key`], [`projected`] and [`Flip`] cover the
//! common compositions.

use std::fmt;

/// Strict weak order: `less(a, b)` means `a` goes before `b`.
pub trait Relation<T: ?Sized> {
    /// Whether `a` is ordered strictly before `b`.
    fn less(&mut self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Relation<T> for F
where
    F: FnMut(&T, &T) -> bool,
{
    fn less(&mut self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Ascending order by `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Relation<T> for Less {
    fn less(&mut self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order by `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Relation<T> for Greater {
    fn less(&mut self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Relation with its arguments swapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flip<R>(pub R);

impl<T: ?Sized, R: Relation<T>> Relation<T> for Flip<R> {
    fn less(&mut self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

/// Compares projected keys with an inner relation.
#[derive(Clone, Copy)]
pub struct ByKey<P, R = Less> {
    proj: P,
    rel: R,
}

impl<P, R: fmt::Debug> fmt::Debug for ByKey<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").field("rel", &self.rel).finish_non_exhaustive()
    }
}

impl<T, K, P, R> Relation<T> for ByKey<P, R>
where
    T: ?Sized,
    P: FnMut(&T) -> K,
    R: Relation<K>,
{
    fn less(&mut self, a: &T, b: &T) -> bool {
        let ka = (self.proj)(a);
        let kb = (self.proj)(b);
        self.rel.less(&ka, &kb)
    }
}

/// Ascending order of `proj(element)`.
pub fn by_key<T: ?Sized, K: PartialOrd, P: FnMut(&T) -> K>(proj: P) -> ByKey<P, Less> {
    ByKey { proj, rel: Less }
}

/// `rel` applied to `proj(element)`.
pub fn projected<T: ?Sized, K, P, R>(rel: R, proj: P) -> ByKey<P, R>
where
    P: FnMut(&T) -> K,
    R: Relation<K>,
{
    ByKey { proj, rel }
}

/// `a == b` under `rel`: neither is ordered before the other.
pub(crate) fn equivalent<T: ?Sized, R: Relation<T>>(rel: &mut R, a: &T, b: &T) -> bool {
    !rel.less(a, b) && !rel.less(b, a)
}
