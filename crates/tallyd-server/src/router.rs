//! Axum router wiring.
//!
//! `/metric/:name` accepts POST, `/metric/:name/sum` accepts GET; any other
//! method on those paths, and any other path, answers 404.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/metric/:name",
            post(handlers::ingest).fallback(handlers::not_found),
        )
        .route(
            "/metric/:name/sum",
            get(handlers::sum).fallback(handlers::not_found),
        )
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .with_state(state)
}
