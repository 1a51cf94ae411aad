//! Test modules for the unique queues
//!
//! Tests are organized by functional area.

mod edge_cases;
