//! Single-owner unique queue
//!
//! [`UniqueQueue`] keeps FIFO order in a `VecDeque` and mirrors its contents in
//! a `HashSet` so duplicate detection is O(1). The two structures always hold
//! exactly the same elements.

use crate::queue::error::{QueueError, QueueResult};
use crate::queue::snapshot::Snapshot;
use crate::queue::stats::QueueStats;
use std::borrow::Borrow;
use std::collections::{vec_deque, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::mem;

/// FIFO queue that admits each element at most once.
///
/// Mutation requires `&mut self`; share it across threads through
/// [`ConcurrentUniqueQueue`](crate::queue::ConcurrentUniqueQueue) instead.
#[derive(Clone)]
pub struct UniqueQueue<T> {
    /// Admission order
    order: VecDeque<T>,

    /// Mirror of `order` for duplicate detection
    membership: HashSet<T>,

    admitted: u64,
    rejected: u64,
    dequeued: u64,
}

impl<T> UniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` elements before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            membership: HashSet::with_capacity(capacity),
            admitted: 0,
            rejected: 0,
            dequeued: 0,
        }
    }

    /// Append `item` unless an equal element is already queued.
    ///
    /// Returns `true` if the item was admitted, `false` if it was a duplicate
    /// (in which case the queue is left untouched).
    pub fn enqueue(&mut self, item: T) -> bool {
        // Insert into the set first: hashing runs caller code and must finish
        // before `order` changes.
        if !self.membership.insert(item.clone()) {
            self.rejected += 1;
            return false;
        }
        self.order.push_back(item);
        self.admitted += 1;
        true
    }

    /// Enqueue every item in order, returning how many were admitted
    pub fn enqueue_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .map(|item| self.enqueue(item))
            .filter(|admitted| *admitted)
            .count()
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> QueueResult<T> {
        self.try_dequeue().ok_or(QueueError::Empty)
    }

    /// Remove and return the front element, or `None` if the queue is empty
    pub fn try_dequeue(&mut self) -> Option<T> {
        // Hashing runs before either structure changes; the set's copy is
        // dropped only once both agree again.
        let front = self.order.front()?;
        let member = self.membership.take(front);
        let item = self.order.pop_front()?;
        self.dequeued += 1;
        drop(member);
        Some(item)
    }

    /// Front element without removing it
    pub fn peek(&self) -> QueueResult<&T> {
        self.try_peek().ok_or(QueueError::Empty)
    }

    pub fn try_peek(&self) -> Option<&T> {
        self.order.front()
    }

    /// O(1) membership test
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.contains(item)
    }

    /// Remove every element. Counters are kept.
    pub fn clear(&mut self) {
        // Elements are dropped after the queue is already empty
        let order = mem::take(&mut self.order);
        let membership = mem::take(&mut self.membership);
        drop(order);
        drop(membership);
    }

    /// Remove every element front-to-back, handing ownership to the caller
    pub fn drain(&mut self) -> Drain<'_, T> {
        let membership = mem::take(&mut self.membership);
        self.dequeued += self.order.len() as u64;
        let inner = self.order.drain(..);
        drop(membership);
        Drain { inner }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Borrowing front-to-back iterator
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.order.iter()
    }

    /// Copy the current contents into a restartable, immutable [`Snapshot`]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::from_items(self.order.iter().cloned())
    }

    pub fn stats(&self) -> QueueStats {
        QueueStats {
            len: self.order.len(),
            admitted: self.admitted,
            rejected: self.rejected,
            dequeued: self.dequeued,
        }
    }
}

impl<T> Default for UniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}

impl<T> Extend<T> for UniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T> FromIterator<T> for UniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.enqueue_all(iter);
        queue
    }
}

impl<T> IntoIterator for UniqueQueue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueQueue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Draining iterator returned by [`UniqueQueue::drain`]
pub struct Drain<'a, T> {
    inner: vec_deque::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
