//! Shared unique queue for multiple producers and consumers
//!
//! [`ConcurrentUniqueQueue`] wraps a [`UniqueQueue`] in one `RwLock`. Order and
//! membership always move together under the write lock, so no caller can
//! observe them diverging, and two racing enqueues of the same element are
//! serialized: exactly one is admitted.
//!
//! Write lock: `enqueue`, `enqueue_all`, `dequeue`, `try_dequeue`, `clear`,
//! `drain_all`. Read lock: everything else.

use crate::core::sync::{into_inner_recovering, read_recovering, write_recovering};
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::snapshot::Snapshot;
use crate::queue::stats::QueueStats;
use crate::queue::unique::UniqueQueue;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::RwLock;

const LOCK_CONTEXT: &str = "ConcurrentUniqueQueue";

/// Thread-safe FIFO queue that admits each element at most once
///
/// Share it with `Arc<ConcurrentUniqueQueue<T>>` or borrow it into scoped
/// threads; every operation takes `&self`.
pub struct ConcurrentUniqueQueue<T> {
    inner: RwLock<UniqueQueue<T>>,
}

impl<T> ConcurrentUniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::from(UniqueQueue::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(UniqueQueue::with_capacity(capacity))
    }

    /// Append `item` unless an equal element is already queued.
    ///
    /// Returns `true` for the single caller whose item was admitted.
    pub fn enqueue(&self, item: T) -> bool {
        let admitted = write_recovering(&self.inner, LOCK_CONTEXT).enqueue(item);
        if !admitted {
            log::trace!("{}: rejected duplicate element", LOCK_CONTEXT);
        }
        admitted
    }

    /// Enqueue every item under a single write-lock acquisition.
    ///
    /// Returns the number admitted. Items from one call are contiguous in
    /// admission order.
    pub fn enqueue_all<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        write_recovering(&self.inner, LOCK_CONTEXT).enqueue_all(items)
    }

    /// Remove and return the front element
    pub fn dequeue(&self) -> QueueResult<T> {
        self.try_dequeue().ok_or(QueueError::Empty)
    }

    pub fn try_dequeue(&self) -> Option<T> {
        write_recovering(&self.inner, LOCK_CONTEXT).try_dequeue()
    }

    /// Clone of the front element
    pub fn peek(&self) -> QueueResult<T> {
        self.try_peek().ok_or(QueueError::Empty)
    }

    pub fn try_peek(&self) -> Option<T> {
        read_recovering(&self.inner, LOCK_CONTEXT).try_peek().cloned()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        read_recovering(&self.inner, LOCK_CONTEXT).contains(item)
    }

    pub fn clear(&self) {
        let mut queue = write_recovering(&self.inner, LOCK_CONTEXT);
        let removed = queue.len();
        queue.clear();
        log::debug!("{}: cleared {} element(s)", LOCK_CONTEXT, removed);
    }

    /// Atomically take every element in FIFO order
    pub fn drain_all(&self) -> Vec<T> {
        let items: Vec<T> = write_recovering(&self.inner, LOCK_CONTEXT).drain().collect();
        log::debug!("{}: drained {} element(s)", LOCK_CONTEXT, items.len());
        items
    }

    /// Number of elements at the moment of the call
    pub fn len(&self) -> usize {
        read_recovering(&self.inner, LOCK_CONTEXT).len()
    }

    pub fn is_empty(&self) -> bool {
        read_recovering(&self.inner, LOCK_CONTEXT).is_empty()
    }

    /// Consistent copy of the contents, unaffected by later mutations
    pub fn snapshot(&self) -> Snapshot<T> {
        read_recovering(&self.inner, LOCK_CONTEXT).snapshot()
    }

    pub fn stats(&self) -> QueueStats {
        read_recovering(&self.inner, LOCK_CONTEXT).stats()
    }

    /// Give up shared access and recover the single-owner queue
    pub fn into_inner(self) -> UniqueQueue<T> {
        into_inner_recovering(self.inner, LOCK_CONTEXT)
    }
}

impl<T> Default for ConcurrentUniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<UniqueQueue<T>> for ConcurrentUniqueQueue<T> {
    fn from(queue: UniqueQueue<T>) -> Self {
        Self {
            inner: RwLock::new(queue),
        }
    }
}

impl<T> FromIterator<T> for ConcurrentUniqueQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<UniqueQueue<T>>())
    }
}

impl<T> fmt::Debug for ConcurrentUniqueQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Ok(queue) => f
                .debug_struct("ConcurrentUniqueQueue")
                .field("items", &*queue)
                .finish(),
            Err(_) => f
                .debug_struct("ConcurrentUniqueQueue")
                .field("items", &format_args!("<locked>"))
                .finish(),
        }
    }
}
