//! HTTP server initialization and runtime setup.
//!
//! Handles store construction, tally worker spawning, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::ShortenService;
use crate::config::Config;
use crate::domain::tally_worker::run_tally_worker;
use crate::infrastructure::memory::{DomainCounter, InMemoryLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long shutdown waits for the tally worker to drain its queue.
const TALLY_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory mapping store and domain counter
/// - Background tally worker
/// - Axum HTTP server
///
/// On Ctrl-C or SIGTERM the server stops accepting connections and finishes
/// in-flight requests. Dropping the router drops the last tally sender, so the
/// worker drains what is queued and exits; shutdown waits for that.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let counter = Arc::new(DomainCounter::new());

    let (tally_tx, tally_rx) = mpsc::channel(config.tally_queue_capacity);
    let worker = tokio::spawn(run_tally_worker(tally_rx, counter.clone()));
    tracing::info!("Tally worker started");

    let service = ShortenService::new(repository, counter, tally_tx, config.base_url.clone());
    let state = AppState::new(Arc::new(service));

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, draining tally queue");
    match tokio::time::timeout(TALLY_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => tracing::info!("Tally worker finished"),
        Ok(Err(e)) => tracing::error!("Tally worker failed: {}", e),
        Err(_) => tracing::warn!(
            "Tally worker did not finish within {:?}, remaining tallies dropped",
            TALLY_DRAIN_TIMEOUT
        ),
    }

    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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

    tracing::info!("Shutdown signal received");
}
