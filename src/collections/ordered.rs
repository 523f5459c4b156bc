//! Stable, ascending [`Sequence`].
//!
//! An [`OrderedSequence`] keeps its elements sorted by a comparator. An
//! element that compares equal to existing ones lands after all of them,
//! so equal elements stay in arrival order.
//!
//! Elements must not change their sort key while they are linked. To
//! re-rank an element, remove it, update it and [`add`](OrderedSequence::add)
//! it again.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::collections::arena::NodeId;
use crate::collections::Sequence;

/// Comparator used to rank elements.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A [`Sequence`] kept in non-decreasing order with stable insertion.
///
/// Read-only sequence operations (`first`, `last`, `len`, `iter`, `find`,
/// `index_of`, ...) are available through `Deref`. Removals are exposed
/// directly; positional moves and in-place mutation are not, since either
/// could break the ordering.
///
/// # Example
/// ```
/// use cachesim::collections::OrderedSequence;
///
/// let mut seq = OrderedSequence::new();
/// for n in [5, 2, 8, 5] {
///     seq.add(n);
/// }
/// assert_eq!(seq.to_string(), "2 5 5 8");
/// assert_eq!(seq.first(), Some(&2));
/// assert_eq!(seq.index_of(&10), None);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedSequence<T> {
    inner: Sequence<T>,
    cmp: Comparator<T>,
}

impl<T: Ord> OrderedSequence<T> {
    /// Create an empty sequence ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T> OrderedSequence<T> {
    /// Create an empty sequence ordered by `cmp`.
    ///
    /// `cmp` only has to rank elements; it need not agree with `PartialEq`.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            inner: Sequence::new(),
            cmp,
        }
    }

    /// Insert `value` before the first element that ranks strictly greater.
    ///
    /// O(n). Equal-ranked elements already present stay ahead of `value`.
    pub fn add(&mut self, value: T) -> NodeId {
        let mut prev = None;
        let mut current = self.inner.head_id();
        while let Some(id) = current {
            match self.inner.get(id) {
                Some(existing) if (self.cmp)(existing, &value) != Ordering::Greater => {
                    prev = Some(id);
                    current = self.inner.next_id(id);
                }
                _ => break,
            }
        }

        let id = self.inner.alloc(value);
        match prev {
            Some(p) => self.inner.attach_after(p, id),
            None => self.inner.link_front(id),
        }
        id
    }

    /// Remove and return the lowest-ranked element.
    pub fn remove_front(&mut self) -> Option<T> {
        self.inner.remove_front()
    }

    /// Remove and return the highest-ranked element.
    pub fn remove_back(&mut self) -> Option<T> {
        self.inner.remove_back()
    }

    /// Remove and return the first element matching `pred`.
    pub fn remove_by<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.remove_by(pred)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Assert the chain invariants plus non-decreasing order.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_order(&self) {
        self.inner.debug_validate_invariants();
        let mut iter = self.inner.iter();
        if let Some(mut prev) = iter.next() {
            for value in iter {
                assert_ne!(
                    (self.cmp)(prev, value),
                    Ordering::Greater,
                    "ordered sequence out of order"
                );
                prev = value;
            }
        }
    }
}

impl<T: PartialEq> OrderedSequence<T> {
    /// Remove and return the first element equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        self.inner.remove_value(value)
    }
}

impl<T> Deref for OrderedSequence<T> {
    type Target = Sequence<T>;

    fn deref(&self) -> &Sequence<T> {
        &self.inner
    }
}

impl<T: Ord> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: Ord> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = OrderedSequence::new();
        for value in iter {
            seq.add(value);
        }
        seq
    }
}
