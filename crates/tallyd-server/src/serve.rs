//! Bind, serve, and shut down.

use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::error::StartupError;
use crate::router;

/// Serve until Ctrl-C / SIGTERM. Store contents are dropped on return.
pub async fn run(cfg: ServerConfig) -> Result<(), StartupError> {
    let addr = cfg.server.bind_addr();
    let timeout_minutes = cfg.store.data_timeout_minutes;

    let state = AppState::new(cfg);
    let app = router::build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(listen = %addr, timeout_minutes, "tallyd-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("tallyd-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received, draining");
}
