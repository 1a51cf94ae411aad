//! Queue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// `dequeue` or `peek` was called on a queue holding no elements.
    ///
    /// This is a precondition violation on the caller's side; use the
    /// `try_*` forms when emptiness is an expected outcome.
    #[error("Queue is empty")]
    Empty,
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
