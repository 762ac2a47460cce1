//! Serve command - Starts the HTTP server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::infra::Database;
use common::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    args.apply(&mut config.server);
    tracing::info!("Starting server...");

    // Connection and migration failures stop the process
    let db = Arc::new(Database::connect(&config).await?);

    let app_state = AppState::from_database(db);
    let app = create_router(app_state, config.server.request_timeout());

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let stop = stop.clone();
            async move { stop.notified().await }
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
        }
        _ = shutdown_signal() => {
            let grace = config.server.shutdown_grace();
            tracing::info!("Shutdown signal received, draining for up to {:?}", grace);
            stop.notify_one();
            drain(server, grace).await?;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for in-flight requests, giving up after `grace`.
async fn drain<F>(server: F, grace: Duration) -> AppResult<()>
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match tokio::time::timeout(grace, server).await {
        Ok(result) => result.map_err(|e| AppError::internal(format!("Server error: {}", e))),
        Err(_) => {
            tracing::warn!("Grace period elapsed with requests still in flight");
            Ok(())
        }
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
}
