//! Singly linked sequence with head/tail tracking and positional moves.
//!
//! Nodes are stored in a [`SlotArena`] and linked forward by [`NodeId`].
//! There are no back-links, so any operation that needs the node *before*
//! a given node has to scan from the head.
//!
//! ## Architecture
//!
//! ```text
//!   nodes (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────┐
//!   │ NodeId │ Node { value, next }         │
//!   ├────────┼──────────────────────────────┤
//!   │ id_0   │ { value: A, next: id_2 }     │
//!   │ id_1   │ { value: C, next: None }     │
//!   │ id_2   │ { value: B, next: id_1 }     │
//!   └────────┴──────────────────────────────┘
//!
//!   head ─► [id_0] ──► [id_2] ──► [id_1] ◄── tail
//! ```
//!
//! ## Invariants
//! - `head.is_none()` iff `len() == 0` iff `tail.is_none()`
//! - following `next` from `head` visits exactly `len()` nodes and stops at `tail`
//! - the tail node's `next` is always `None`
//!
//! ## Performance
//! - `insert_front` / `insert_back` / `remove_front`: O(1)
//! - `remove_back`: O(n) (needs the new tail)
//! - search, `remove_value` and all four moves: O(n)

use std::fmt;
use std::iter::FusedIterator;

use crate::collections::arena::{NodeId, SlotArena};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

/// An order-preserving, singly linked sequence.
///
/// # Example
/// ```
/// use cachesim::collections::Sequence;
///
/// let mut seq: Sequence<&str> = ["a", "b", "c"].into_iter().collect();
/// assert!(seq.move_to_front(&"c"));
/// assert_eq!(seq.to_string(), "c a b");
/// assert!(seq.move_backward(&"c"));
/// assert_eq!(seq.to_string(), "a c b");
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    nodes: SlotArena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            nodes: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First element, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.head.and_then(|id| self.value(id))
    }

    /// Last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.tail.and_then(|id| self.value(id))
    }

    /// Borrow the element stored in node `id`.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.value(id)
    }

    /// Mutably borrow the element stored in node `id`.
    ///
    /// The node keeps its position; only the value changes.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Insert `value` at position 0.
    pub fn insert_front(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        id
    }

    /// Append `value` after the current last element.
    pub fn insert_back(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(Node { value, next: None });
        self.attach_back(id);
        id
    }

    /// Remove and return the first element.
    pub fn remove_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(None, head)
    }

    /// Remove and return the last element.
    ///
    /// O(n): the node before the tail has to be found by scanning.
    pub fn remove_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let prev = self.predecessor(tail);
        self.unlink(prev, tail)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterate from head to tail.
    ///
    /// Each call starts a fresh pass over the sequence.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Node id of the first element matching `pred`.
    pub fn find_by<F>(&self, pred: F) -> Option<NodeId>
    where
        F: FnMut(&T) -> bool,
    {
        self.locate_by(pred).map(|(_, id)| id)
    }

    /// Zero-based position of the first element matching `pred`.
    pub fn position_by<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(|value| pred(value))
    }

    /// Remove and return the first element matching `pred`.
    pub fn remove_by<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let (prev, id) = self.locate_by(pred)?;
        self.unlink(prev, id)
    }

    // ========================================================================
    // Link helpers
    // ========================================================================

    #[inline]
    fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    #[inline]
    fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.next)
    }

    #[inline]
    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.next = next;
        }
    }

    /// Node immediately before `target`, scanning from the head.
    ///
    /// `None` when `target` is the head or is not linked.
    fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        let mut current = self.head?;
        loop {
            let next = self.next_of(current)?;
            if next == target {
                return Some(current);
            }
            current = next;
        }
    }

    /// First node matching `pred`, together with the node before it.
    fn locate_by<F>(&self, mut pred: F) -> Option<(Option<NodeId>, NodeId)>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.nodes.get(id)?;
            if pred(&node.value) {
                return Some((prev, id));
            }
            prev = Some(id);
            current = node.next;
        }
        None
    }

    /// Take `id` out of the chain without freeing its slot.
    ///
    /// `prev` must be the node linked before `id` (`None` for the head).
    fn detach(&mut self, prev: Option<NodeId>, id: NodeId) {
        let next = self.next_of(id);
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        if self.tail == Some(id) {
            self.tail = prev;
        }
        self.set_next(id, None);
    }

    /// Link a detached node after the current tail.
    fn attach_back(&mut self, id: NodeId) {
        match self.tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Link a detached node before the current head.
    fn attach_front(&mut self, id: NodeId) {
        self.set_next(id, self.head);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    /// Link a detached node directly after `prev`.
    pub(crate) fn attach_after(&mut self, prev: NodeId, id: NodeId) {
        let next = self.next_of(prev);
        self.set_next(id, next);
        self.set_next(prev, Some(id));
        if self.tail == Some(prev) {
            self.tail = Some(id);
        }
    }

    /// Allocate a node for `value` that is not yet linked.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        self.nodes.insert(Node { value, next: None })
    }

    /// Detach `id` and free its slot, returning the value.
    fn unlink(&mut self, prev: Option<NodeId>, id: NodeId) -> Option<T> {
        self.detach(prev, id);
        self.nodes.remove(id).map(|node| node.value)
    }

    /// Id of the head node.
    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Id of the node following `id`.
    pub(crate) fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.next_of(id)
    }

    /// Link a freshly allocated node at the front.
    pub(crate) fn link_front(&mut self, id: NodeId) {
        self.attach_front(id);
    }

    /// Walk the chain and assert every structural invariant.
    ///
    /// Panics on the first violation.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none(), "head set on empty sequence");
            assert!(self.tail.is_none(), "tail set on empty sequence");
            assert_eq!(self.len(), 0);
            return;
        }

        let mut count = 0usize;
        let mut last = None;
        let mut current = self.head;
        while let Some(id) = current {
            count += 1;
            assert!(count <= self.len(), "cycle or stray node in chain");
            last = Some(id);
            current = self.next_of(id);
        }

        assert_eq!(count, self.len());
        assert_eq!(last, self.tail, "tail is not the last linked node");
        if let Some(tail) = self.tail {
            assert_eq!(self.next_of(tail), None, "tail has a successor");
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Node id of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.find_by(|v| v == value)
    }

    /// Zero-based position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.position_by(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Remove and return the first element equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        self.remove_by(|v| v == value)
    }

    /// Relocate the first element equal to `value` to position 0.
    ///
    /// Returns `true` if it is already there, `false` if it is absent.
    pub fn move_to_front(&mut self, value: &T) -> bool {
        let Some((prev, id)) = self.locate_by(|v| v == value) else {
            return false;
        };
        if prev.is_none() {
            return true;
        }
        self.detach(prev, id);
        self.attach_front(id);
        true
    }

    /// Swap the first element equal to `value` with its predecessor.
    ///
    /// Returns `true` if it is already at the front, `false` if it is absent.
    pub fn move_forward(&mut self, value: &T) -> bool {
        let Some((prev, id)) = self.locate_by(|v| v == value) else {
            return false;
        };
        let Some(prev) = prev else {
            return true;
        };

        // before -> prev -> id -> after  ==>  before -> id -> prev -> after
        let before = self.predecessor(prev);
        let after = self.next_of(id);
        self.set_next(prev, after);
        self.set_next(id, Some(prev));
        match before {
            Some(b) => self.set_next(b, Some(id)),
            None => self.head = Some(id),
        }
        if self.tail == Some(id) {
            self.tail = Some(prev);
        }
        true
    }

    /// Relocate the first element equal to `value` to the last position.
    ///
    /// Returns `false` if it is absent or already last: there is no
    /// successor to move past.
    pub fn move_to_back(&mut self, value: &T) -> bool {
        let Some((prev, id)) = self.locate_by(|v| v == value) else {
            return false;
        };
        if self.next_of(id).is_none() {
            return false;
        }
        self.detach(prev, id);
        self.attach_back(id);
        true
    }

    /// Swap the first element equal to `value` with its successor.
    ///
    /// Returns `true` if the last element already equals `value`. Returns
    /// `false` if the sequence holds a single non-matching element or the
    /// value is absent.
    pub fn move_backward(&mut self, value: &T) -> bool {
        if self.last() == Some(value) {
            return true;
        }
        if self.head == self.tail {
            return false;
        }
        let Some((prev, id)) = self.locate_by(|v| v == value) else {
            return false;
        };
        let Some(next) = self.next_of(id) else {
            return true;
        };

        // prev -> id -> next -> after  ==>  prev -> next -> id -> after
        let after = self.next_of(next);
        self.set_next(id, after);
        self.set_next(next, Some(id));
        match prev {
            Some(p) => self.set_next(p, Some(next)),
            None => self.head = Some(next),
        }
        if self.tail == Some(next) {
            self.tail = Some(id);
        }
        true
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Space-separated elements, head to tail. Empty sequences render as "".
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

/// Borrowing iterator from head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.seq.nodes.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator; drains from the front.
#[derive(Debug)]
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.seq.remove_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
