//! HTTP handlers for the `/metric` API.

pub mod metric;

pub use metric::{ingest, not_found, sum, IngestRequest};
