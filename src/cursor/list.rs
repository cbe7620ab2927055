//! Singly linked arena sequence
//!
//! Nodes live in a `Vec` and link to each other by index, so a cursor is a
//! node index and stepping follows the link. There is no way back and no way
//! to jump, which makes the list the reference forward-only sequence.

use super::{Boundary, ForwardCursor, ForwardTier, InputCursor, Permutable};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Forward-only sequence of `T`.
#[derive(Debug, Clone)]
pub struct ForwardList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

/// Position in a [`ForwardList`]. `ListCursor::end()` is one past the last
/// node and doubles as the list's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListCursor(Option<usize>);

impl ListCursor {
    /// The past-the-end cursor of every list.
    pub fn end() -> Self {
        ListCursor(None)
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        ForwardList {
            nodes: Vec::new(),
            head: None,
        }
    }
}

impl<T> ForwardList<T> {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cursor to the first element.
    pub fn begin(&self) -> ListCursor {
        ListCursor(self.head)
    }

    /// Insert at the front.
    pub fn push_front(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            value,
            next: self.head,
        });
        self.head = Some(index);
    }

    /// Elements in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            at: self.head,
        }
    }
}

impl<T: Clone> ForwardList<T> {
    /// Elements in list order, cloned into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Nodes are stored back to front so that list order differs from
        // storage order.
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = ForwardList {
            nodes: Vec::with_capacity(values.len()),
            head: None,
        };
        while let Some(value) = values.pop() {
            list.push_front(value);
        }
        list
    }
}

/// Borrowing iterator over a [`ForwardList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a ForwardList<T>,
    at: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.list.nodes[self.at?];
        self.at = node.next;
        Some(&node.value)
    }
}

impl<T> InputCursor<ForwardList<T>> for ListCursor {
    type Item = T;
    type Tier = ForwardTier;

    fn read<'s>(&self, seq: &'s ForwardList<T>) -> &'s T {
        match self.0 {
            Some(index) => &seq.nodes[index].value,
            None => panic!("read through the end cursor of a ForwardList"),
        }
    }

    fn step(&mut self, seq: &ForwardList<T>) {
        debug_assert!(self.0.is_some(), "stepped past the end of a ForwardList");
        self.0 = self.0.and_then(|index| seq.nodes[index].next);
    }
}

impl<T> ForwardCursor<ForwardList<T>> for ListCursor {}

impl<T> Permutable<ForwardList<T>> for ListCursor {
    fn swap_with(&self, seq: &mut ForwardList<T>, other: &Self) {
        let (Some(a), Some(b)) = (self.0, other.0) else {
            panic!("swap through the end cursor of a ForwardList");
        };
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = seq.nodes.split_at_mut(high);
        std::mem::swap(&mut head[low].value, &mut tail[0].value);
    }

    fn replace(&self, seq: &mut ForwardList<T>, value: T) -> T {
        match self.0 {
            Some(index) => std::mem::replace(&mut seq.nodes[index].value, value),
            None => panic!("write through the end cursor of a ForwardList"),
        }
    }
}

impl Boundary<ListCursor> for ListCursor {
    fn is_reached(&self, cursor: &ListCursor) -> bool {
        self == cursor
    }
}
