//! Deduplicating FIFO queues and the `uniqueq` line-coalescing tool built on them

pub mod app;
pub mod core;
pub mod queue;
