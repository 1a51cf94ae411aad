//! Public API for the queue system
//!
//! External modules should import from here rather than directly from the
//! internal modules. See the module documentation for usage examples.

// Queue variants
pub use crate::queue::concurrent::ConcurrentUniqueQueue;
pub use crate::queue::unique::{Drain, UniqueQueue};

// Snapshot iteration
pub use crate::queue::snapshot::{Snapshot, SnapshotIter};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Statistics
pub use crate::queue::stats::QueueStats;
