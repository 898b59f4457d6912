//! Application layer containing the fan-out/aggregation logic.
//!
//! The dispatcher eagerly spawns one `tokio` task per (service, message)
//! pair; the aggregator waits for every task to resolve and combines the
//! outcomes according to the selected failure-handling policy.

pub mod aggregator;
pub mod dispatcher;
