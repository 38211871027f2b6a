//! Per-draw reachability recording and per-bucket aggregation

mod aggregate;
mod errors;
mod reachability;

pub use aggregate::{AggregateCounters, BUCKET_COUNT, BucketTotals};
pub use errors::StatsError;
pub use reachability::{CountingMode, ReachabilitySet};
