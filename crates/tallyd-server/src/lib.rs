//! tallyd server library entry.
//!
//! Wires config, the shared access gate, the `/metric` handlers and the ops
//! endpoints into an axum app. Used by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod serve;
