//! Server config loader.
//!
//! An optional YAML file (strict parsing, unknown keys rejected) is read first,
//! then `HOST`, `PORT` and `DATA_TIMEOUT_MINUTES` from the environment are
//! layered on top. Empty or unparsable environment values are ignored.

pub mod schema;

use std::fs;

use tallyd_core::error::{MetricsError, Result};

pub use schema::{ListenSection, ServerConfig, StoreSection};

/// Path of the optional YAML file.
pub const ENV_CONFIG_PATH: &str = "TALLYD_CONFIG";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DATA_TIMEOUT_MINUTES: &str = "DATA_TIMEOUT_MINUTES";

/// Load from the process environment.
pub fn load() -> Result<ServerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load using `env` as the variable lookup.
pub fn load_with<F>(env: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match env(ENV_CONFIG_PATH).filter(|p| !p.is_empty()) {
        Some(path) => load_from_file(&path)?,
        None => ServerConfig::default(),
    };
    apply_env(&mut cfg, &env);
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricsError::Config(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Overlay environment values onto `cfg`.
pub fn apply_env<F>(cfg: &mut ServerConfig, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = non_empty(env, ENV_HOST) {
        cfg.server.host = host;
    }

    if let Some(raw) = non_empty(env, ENV_PORT) {
        match raw.trim().parse::<u16>() {
            Ok(port) => cfg.server.port = port,
            Err(e) => {
                tracing::warn!(
                    var = ENV_PORT,
                    value = %raw,
                    error = %e,
                    "ignoring unparsable env var"
                )
            }
        }
    }

    if let Some(raw) = non_empty(env, ENV_DATA_TIMEOUT_MINUTES) {
        match raw.trim().parse::<u64>() {
            Ok(minutes) => cfg.store.data_timeout_minutes = minutes,
            Err(e) => {
                tracing::warn!(
                    var = ENV_DATA_TIMEOUT_MINUTES,
                    value = %raw,
                    error = %e,
                    "ignoring unparsable env var"
                )
            }
        }
    }
}

fn non_empty<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).filter(|v| !v.is_empty())
}
