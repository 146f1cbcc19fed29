//! Per-request accounting: route/status counters, latency histogram, and an
//! info log line per request.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Route label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    tracing::info!(method = %req.method(), path = %req.uri().path(), "got a request");

    let resp = next.run(req).await;

    let metrics = state.metrics();
    metrics
        .http_requests
        .inc(&[("route", route.as_str()), ("status", resp.status().as_str())]);
    metrics
        .request_duration
        .observe(&[("route", route.as_str())], started.elapsed());
    resp
}
