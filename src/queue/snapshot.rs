//! Point-in-time copies of queue contents
//!
//! A [`Snapshot`] is taken under the queue's read access and never observes
//! later mutations. Iteration is lazy and can be restarted any number of times.

use std::borrow::Borrow;
use std::sync::Arc;

/// Immutable front-to-back copy of a queue's elements
#[derive(Debug)]
pub struct Snapshot<T> {
    items: Arc<[T]>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Snapshot<T> {
    pub(crate) fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Number of elements captured
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element that was at the front when the snapshot was taken
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Start a fresh pass over the captured elements
    pub fn iter(&self) -> SnapshotIter<T> {
        SnapshotIter {
            items: Arc::clone(&self.items),
            front: 0,
        }
    }

    /// Captured elements as a slice, in FIFO order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Linear membership test against the captured elements
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().any(|entry| entry.borrow() == item)
    }
}

impl<T: Clone> Snapshot<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

/// Owning iterator over a [`Snapshot`]; yields clones of the captured elements
#[derive(Debug)]
pub struct SnapshotIter<T> {
    items: Arc<[T]>,
    front: usize,
}

impl<T: Clone> Iterator for SnapshotIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.front)?.clone();
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SnapshotIter<T> {}

impl<T: Clone> IntoIterator for Snapshot<T> {
    type Item = T;
    type IntoIter = SnapshotIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SnapshotIter {
            items: self.items,
            front: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
