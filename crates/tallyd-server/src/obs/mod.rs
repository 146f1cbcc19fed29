//! Lightweight in-process metrics about the server itself.
//!
//! Counters and histograms are atomics keyed by sorted label sets and rendered
//! by the `/metrics` handler in Prometheus text format. The `track_requests`
//! middleware feeds them.

pub mod metrics;
pub mod middleware;

pub use metrics::{CounterVec, HistogramVec, ServerMetrics};
