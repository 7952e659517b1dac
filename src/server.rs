//! HTTP server initialization and runtime setup.
//!
//! Handles storage connection, router construction and the Axum server
//! lifecycle including graceful shutdown.

use crate::api::routes::RateLimits;
use crate::config::Config;
use crate::infrastructure::persistence::connect;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (SQLite or PostgreSQL) with migrations
/// - Application state and router
/// - Axum HTTP server with peer address info for rate limiting
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect(&config).await?;

    let state = AppState::new(
        repository,
        config.code_policy(),
        config.base_url.clone(),
        config.behind_proxy,
    );

    let limits = RateLimits {
        shorten: config.rate_limit_shorten,
        stats: config.rate_limit_stats,
        redirect: config.rate_limit_redirect,
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state, limits));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
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

    tracing::info!("Shutdown signal received");
}
