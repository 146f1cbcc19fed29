//! Shared error type across tallyd crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Body is not valid JSON or does not match the expected shape.
    MalformedInput,
    /// Content-Type present but not `application/json`.
    UnsupportedMedia,
    /// Summarize requested for a name that was never appended.
    UnknownMetric,
    /// No route for this method/path.
    NotFound,
    /// Startup configuration rejected.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MalformedInput => "MALFORMED_INPUT",
            ClientCode::UnsupportedMedia => "UNSUPPORTED_MEDIA",
            ClientCode::UnknownMetric => "UNKNOWN_METRIC",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("not found")]
    NotFound,
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl MetricsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricsError::MalformedInput(_) => ClientCode::MalformedInput,
            MetricsError::UnsupportedContentType(_) => ClientCode::UnsupportedMedia,
            MetricsError::UnknownMetric(_) => ClientCode::UnknownMetric,
            MetricsError::NotFound => ClientCode::NotFound,
            MetricsError::Config(_) => ClientCode::BadConfig,
            MetricsError::Serialization(_) => ClientCode::Internal,
        }
    }

    /// True when the caller sent something wrong (4xx territory).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MetricsError::MalformedInput(_)
                | MetricsError::UnsupportedContentType(_)
                | MetricsError::UnknownMetric(_)
                | MetricsError::NotFound
        )
    }
}
