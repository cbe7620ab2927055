//! Min/max and permutations
//!
//! Tie rules: a minimum is always the first minimal element. A maximum is the
//! first maximal element, except in the combined `minmax` variants, which
//! report the last one so that `minmax` of a stably sorted range returns its
//! two ends.

mod permutation;

pub use permutation::{is_permutation, next_permutation, prev_permutation};

use crate::cursor::{Boundary, ForwardCursor, InputCursor};
use crate::relation::Relation;
use crate::results::MinMax;

/// The smaller of `a` and `b`; `a` on ties.
pub fn min<'a, T: ?Sized, R: Relation<T>>(a: &'a T, b: &'a T, mut rel: R) -> &'a T {
    if rel.less(b, a) {
        b
    } else {
        a
    }
}

/// The larger of `a` and `b`; `a` on ties.
pub fn max<'a, T: ?Sized, R: Relation<T>>(a: &'a T, b: &'a T, mut rel: R) -> &'a T {
    if rel.less(a, b) {
        b
    } else {
        a
    }
}

/// `(b, a)` when `b < a`, otherwise `(a, b)`.
pub fn minmax<'a, T: ?Sized, R: Relation<T>>(a: &'a T, b: &'a T, mut rel: R) -> MinMax<&'a T> {
    if rel.less(b, a) {
        MinMax { min: b, max: a }
    } else {
        MinMax { min: a, max: b }
    }
}

/// Clone of the first minimal element, or `None` for an empty range.
pub fn min_of<S, C, B, R>(seq: &S, mut first: C, last: B, mut rel: R) -> Option<C::Item>
where
    S: ?Sized,
    C: InputCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    if last.is_reached(&first) {
        return None;
    }
    let mut best = first.read(seq);
    first.step(seq);
    while !last.is_reached(&first) {
        let candidate = first.read(seq);
        if rel.less(candidate, best) {
            best = candidate;
        }
        first.step(seq);
    }
    Some(best.clone())
}

/// Clone of the first maximal element, or `None` for an empty range.
pub fn max_of<S, C, B, R>(seq: &S, mut first: C, last: B, mut rel: R) -> Option<C::Item>
where
    S: ?Sized,
    C: InputCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    if last.is_reached(&first) {
        return None;
    }
    let mut best = first.read(seq);
    first.step(seq);
    while !last.is_reached(&first) {
        let candidate = first.read(seq);
        if rel.less(best, candidate) {
            best = candidate;
        }
        first.step(seq);
    }
    Some(best.clone())
}

/// Clones of the first minimal and the last maximal element, in about
/// `3n / 2` comparisons.
pub fn minmax_of<S, C, B, R>(seq: &S, mut first: C, last: B, mut rel: R) -> Option<MinMax<C::Item>>
where
    S: ?Sized,
    C: InputCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    if last.is_reached(&first) {
        return None;
    }
    let head = first.read(seq);
    first.step(seq);
    let (mut lo, mut hi) = (head, head);
    while !last.is_reached(&first) {
        let a = first.read(seq);
        first.step(seq);
        if last.is_reached(&first) {
            if rel.less(a, lo) {
                lo = a;
            } else if !rel.less(a, hi) {
                hi = a;
            }
            break;
        }
        let b = first.read(seq);
        first.step(seq);
        let (small, large) = if rel.less(b, a) { (b, a) } else { (a, b) };
        if rel.less(small, lo) {
            lo = small;
        }
        if !rel.less(large, hi) {
            hi = large;
        }
    }
    Some(MinMax {
        min: lo.clone(),
        max: hi.clone(),
    })
}

/// Cursor to the first minimal element; the end cursor for an empty range.
pub fn min_element<S, C, B, R>(seq: &S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let mut best = first.clone();
    if last.is_reached(&first) {
        return best;
    }
    let mut cursor = first;
    cursor.step(seq);
    while !last.is_reached(&cursor) {
        if rel.less(cursor.read(seq), best.read(seq)) {
            best = cursor.clone();
        }
        cursor.step(seq);
    }
    best
}

/// Cursor to the first maximal element; the end cursor for an empty range.
pub fn max_element<S, C, B, R>(seq: &S, first: C, last: B, mut rel: R) -> C
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let mut best = first.clone();
    if last.is_reached(&first) {
        return best;
    }
    let mut cursor = first;
    cursor.step(seq);
    while !last.is_reached(&cursor) {
        if rel.less(best.read(seq), cursor.read(seq)) {
            best = cursor.clone();
        }
        cursor.step(seq);
    }
    best
}

/// Cursors to the first minimal and the last maximal element. Both are the
/// end cursor for an empty range.
pub fn minmax_element<S, C, B, R>(seq: &S, first: C, last: B, mut rel: R) -> MinMax<C>
where
    S: ?Sized,
    C: ForwardCursor<S>,
    B: Boundary<C>,
    R: Relation<C::Item>,
{
    let mut lo = first.clone();
    let mut hi = first.clone();
    if last.is_reached(&first) {
        return MinMax { min: lo, max: hi };
    }
    let mut cursor = first;
    cursor.step(seq);
    while !last.is_reached(&cursor) {
        let a = cursor.clone();
        cursor.step(seq);
        if last.is_reached(&cursor) {
            if rel.less(a.read(seq), lo.read(seq)) {
                lo = a;
            } else if !rel.less(a.read(seq), hi.read(seq)) {
                hi = a;
            }
            break;
        }
        let b = cursor.clone();
        cursor.step(seq);
        let (small, large) = if rel.less(b.read(seq), a.read(seq)) {
            (b, a)
        } else {
            (a, b)
        };
        if rel.less(small.read(seq), lo.read(seq)) {
            lo = small;
        }
        if !rel.less(large.read(seq), hi.read(seq)) {
            hi = large;
        }
    }
    MinMax { min: lo, max: hi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ForwardList, InputOnly, ListCursor, Pos};
    use crate::relation::{by_key, Less};

    #[test]
    fn pairwise_tie_rules() {
        let key = |p: &(i32, char)| p.0;
        let (a, b) = ((1, 'a'), (1, 'b'));
        assert_eq!(min(&a, &b, by_key(key)).1, 'a');
        assert_eq!(max(&a, &b, by_key(key)).1, 'a');
        let mm = minmax(&a, &b, by_key(key));
        assert_eq!((mm.min.1, mm.max.1), ('a', 'b'));
        let mm = minmax(&3, &2, Less);
        assert_eq!((*mm.min, *mm.max), (2, 3));
    }

    #[test]
    fn range_values() {
        let v = [(3, 'a'), (1, 'b'), (4, 'c'), (1, 'd'), (4, 'e')];
        let rel = || by_key(|p: &(i32, char)| p.0);
        assert_eq!(min_of(&v[..], Pos(0), Pos(5), rel()), Some((1, 'b')));
        assert_eq!(max_of(&v[..], Pos(0), Pos(5), rel()), Some((4, 'c')));
        let mm = minmax_of(&v[..], Pos(0), Pos(5), rel()).unwrap();
        assert_eq!((mm.min, mm.max), ((1, 'b'), (4, 'e')));
        assert_eq!(min_of(&v[..], Pos(2), Pos(2), rel()), None);
        assert_eq!(minmax_of(&v[..], Pos(5), Pos(5), rel()), None);
    }

    #[test]
    fn minmax_of_single_and_odd_lengths() {
        let v = [7];
        let mm = minmax_of(&v[..], Pos(0), Pos(1), Less).unwrap();
        assert_eq!((mm.min, mm.max), (7, 7));
        let v = [2, 9, 9, 0, 9];
        let mm = minmax_of(&v[..], Pos(0), Pos(5), Less).unwrap();
        assert_eq!((mm.min, mm.max), (0, 9));
    }

    #[test]
    fn values_from_single_pass_cursors() {
        let list: ForwardList<i32> = [5, -2, 8, -2].into_iter().collect();
        let lo = min_of(&list, InputOnly::new(list.begin()), InputOnly::new(ListCursor::end()), Less);
        assert_eq!(lo, Some(-2));
    }

    #[test]
    fn element_cursors() {
        let v = [3, 1, 4, 1, 5, 9, 2, 6, 5, 9];
        assert_eq!(min_element(&v[..], Pos(0), Pos(10), Less), Pos(1));
        assert_eq!(max_element(&v[..], Pos(0), Pos(10), Less), Pos(5));
        let mm = minmax_element(&v[..], Pos(0), Pos(10), Less);
        assert_eq!((mm.min, mm.max), (Pos(1), Pos(9)));
        let mm = minmax_element(&v[..], Pos(4), Pos(4), Less);
        assert_eq!((mm.min, mm.max), (Pos(4), Pos(4)));
    }

    #[test]
    fn element_cursors_on_a_forward_list() {
        let list: ForwardList<i32> = [4, 4, 1, 7, 7].into_iter().collect();
        let mm = minmax_element(&list, list.begin(), ListCursor::end(), Less);
        assert_eq!(*mm.min.read(&list), 1);
        assert_eq!(crate::cursor::distance(&list, mm.max, &ListCursor::end()), 1);
    }
}
