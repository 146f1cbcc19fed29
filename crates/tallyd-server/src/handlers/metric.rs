use axum::{
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};

use tallyd_core::error::{MetricsError, Result};

use crate::app_state::AppState;
use crate::error::ApiError;

/// `POST /metric/{name}` body.
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub value: i64,
}

/// A missing header is accepted; anything else must be `application/json`
/// (parameters such as `charset` are ignored).
fn check_content_type(headers: &HeaderMap) -> Result<()> {
    let Some(raw) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };
    let ct = raw
        .to_str()
        .map_err(|_| MetricsError::UnsupportedContentType("<non-ascii>".into()))?;
    let essence = ct.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case("application/json") {
        Ok(())
    } else {
        Err(MetricsError::UnsupportedContentType(ct.to_owned()))
    }
}

fn parse_body(body: &[u8]) -> Result<IngestRequest> {
    serde_json::from_slice(body).map_err(|e| MetricsError::MalformedInput(e.to_string()))
}

pub async fn ingest(
    State(state): State<AppState>,
    name: std::result::Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Json<Value>, ApiError> {
    let Path(name) = name.map_err(|e| MetricsError::MalformedInput(e.body_text()))?;
    check_content_type(&headers)?;
    let body = body.map_err(|e| MetricsError::MalformedInput(e.body_text()))?;
    let req = parse_body(&body)?;

    state.gate().append(&name, req.value);
    state.metrics().samples_ingested.inc(&[]);
    tracing::debug!(metric = %name, value = req.value, "sample appended");

    Ok(Json(json!({})))
}

pub async fn sum(
    State(state): State<AppState>,
    name: std::result::Result<Path<String>, PathRejection>,
) -> std::result::Result<Response, ApiError> {
    // A name that fails to decode can never have been appended.
    let Path(name) = name.map_err(|e| MetricsError::UnknownMetric(e.body_text()))?;
    let summary = state.gate().summarize_known(&name, state.timeout_minutes())?;
    if summary.evicted > 0 {
        state
            .metrics()
            .samples_evicted
            .add(&[], summary.evicted as u64);
    }

    // Encoded after the gate is released.
    let body = serde_json::to_vec(&summary)
        .map_err(|e| MetricsError::Serialization(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn not_found() -> ApiError {
    ApiError(MetricsError::NotFound)
}
