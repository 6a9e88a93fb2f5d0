//! HTTP server initialization and runtime setup.
//!
//! Handles state construction, worker spawning, and Axum server lifecycle.

use crate::application::services::{AuthService, ClickService, LinkService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    MemoryClickRepository, MemoryLinkRepository, MemoryUserRepository,
};
use crate::realtime::{run_notify_worker, RealtimePublisher};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the application state from configuration.
///
/// Wires the in-memory repositories into the services, creates the
/// notification channel, and spawns the fan-out worker.
///
/// # Errors
///
/// Returns an error if the bcrypt cost is rejected by the hasher.
pub fn build_state(config: &Config) -> Result<AppState> {
    let user_repository = Arc::new(MemoryUserRepository::new());
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let click_repository = Arc::new(MemoryClickRepository::new());

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        &config.token_secret,
        config.token_ttl_seconds,
        config.bcrypt_cost,
    )?);
    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.base_url.clone(),
    ));
    let click_service = Arc::new(ClickService::new(link_repository, click_repository));

    let publisher = Arc::new(RealtimePublisher::new());
    let (notify_tx, notify_rx) = mpsc::channel(config.notify_queue_capacity);

    tokio::spawn(run_notify_worker(notify_rx, publisher.clone()));

    Ok(AppState {
        auth_service,
        link_service,
        click_service,
        publisher,
        notify_tx,
    })
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory repositories and services
/// - Background notification worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Notify worker started");

    let app = app_router(state, config.frontend_origin.as_deref());
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
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
