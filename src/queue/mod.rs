//! Deduplicating FIFO Queues
//!
//! A FIFO queue that refuses an element already present, in two flavours:
//!
//! - [`UniqueQueue`]: single owner, mutated through `&mut self`
//! - [`ConcurrentUniqueQueue`]: shared between threads, every operation atomic
//!
//! # Overview
//!
//! Each queue keeps an ordered sequence (dequeue order) and a membership set
//! (O(1) duplicate detection) in lockstep. Key properties:
//!
//! - **Uniqueness**: `enqueue` returns `false` and leaves the queue untouched
//!   when an equal element is already queued
//! - **FIFO**: elements leave in admission order
//! - **Snapshots**: [`Snapshot`] captures contents at one instant and can be
//!   iterated any number of times
//! - **Typed emptiness**: `dequeue`/`peek` return [`QueueError::Empty`];
//!   the `try_*` forms return `None`
//!
//! # Architecture
//!
//! ```text
//!   Producer A     Producer B     Producer C
//!       │ enqueue      │ enqueue      │ enqueue
//!       ▼              ▼              ▼
//! ┌──────────────────────────────────────────┐
//! │   ConcurrentUniqueQueue  (RwLock)        │
//! │  ┌────────────────────────────────────┐  │
//! │  │ UniqueQueue                        │  │
//! │  │  order:      ┌───┬───┬───┬───┐     │  │
//! │  │              │ a │ b │ c │...│     │  │
//! │  │              └───┴───┴───┴───┘     │  │
//! │  │  membership: { a, b, c, ... }      │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//!       │ dequeue / drain_all
//!       ▼
//!   Consumers
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use uniqueq::queue::{ConcurrentUniqueQueue, QueueError};
//!
//! let queue = ConcurrentUniqueQueue::new();
//! assert!(queue.enqueue("a"));
//! assert!(queue.enqueue("b"));
//! assert!(!queue.enqueue("a"));
//! assert!(queue.enqueue("c"));
//! assert_eq!(queue.len(), 3);
//!
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert_eq!(queue.dequeue(), Ok("c"));
//! assert_eq!(queue.dequeue(), Err(QueueError::Empty));
//! ```

pub mod api;
mod concurrent;
mod error;
mod snapshot;
mod stats;
mod unique;

pub use concurrent::ConcurrentUniqueQueue;
pub use error::{QueueError, QueueResult};
pub use snapshot::{Snapshot, SnapshotIter};
pub use stats::QueueStats;
pub use unique::{Drain, UniqueQueue};

#[cfg(test)]
mod tests;
