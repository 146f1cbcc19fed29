//! tallyd server binary.
//!
//! - `POST /metric/{name}` appends a sample
//! - `GET /metric/{name}/sum` sums the samples younger than the timeout

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tallyd_server::{config, error::StartupError, serve};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tallyd-server exiting");
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), StartupError> {
    let cfg = config::load()?;
    serve::run(cfg).await
}
