//! Shared application state for the tallyd server.
//!
//! The access gate is built here and handed to handlers through axum `State`;
//! there is no process-wide store.

use std::sync::Arc;

use tallyd_core::AccessGate;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    gate: AccessGate,
    metrics: ServerMetrics,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_gate(cfg, AccessGate::default())
    }

    /// Use a pre-built gate, e.g. one running on a manual clock.
    pub fn with_gate(cfg: ServerConfig, gate: AccessGate) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                gate,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn gate(&self) -> &AccessGate {
        &self.inner.gate
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    pub fn timeout_minutes(&self) -> u64 {
        self.inner.cfg.store.data_timeout_minutes
    }
}
