//! Admission statistics shared by both queue variants

/// Point-in-time counters for a unique queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of elements currently queued
    pub len: usize,
    /// Successful enqueues since construction
    pub admitted: u64,
    /// Enqueues rejected because the element was already present
    pub rejected: u64,
    /// Elements handed back to callers by dequeue, try_dequeue or drain
    pub dequeued: u64,
}

impl QueueStats {
    /// Total number of enqueue attempts
    pub fn offered(&self) -> u64 {
        self.admitted + self.rejected
    }

    /// Fraction of enqueue attempts that were coalesced into an existing element.
    ///
    /// Returns `0.0` when nothing has been offered yet.
    pub fn coalesce_ratio(&self) -> f64 {
        let offered = self.offered();
        if offered == 0 {
            0.0
        } else {
            self.rejected as f64 / offered as f64
        }
    }
}
