//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Welcome message
//! - `GET  /health`                  - Health check
//! - `GET  /favicon.ico`             - 204 No Content
//! - `POST /shorten?url=...`         - Create short URL (10/minute)
//! - `GET  /api/stats/{short_code}`  - Click statistics (30/minute)
//! - `GET  /{short_code}`            - Redirect (100/minute)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive (any origin, method, header)
//! - **Rate limiting** - Per-IP, per-endpoint quotas
//!
//! Trailing slashes are trimmed by [`crate::server`] before routing.

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::middleware::tracing;
use crate::api::routes::{
    RateLimits, public_routes, redirect_routes, shorten_routes, stats_routes,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limits` - per-endpoint quotas in requests per minute
///
/// Rate limiting reads the client IP from forwarding headers when
/// `state.behind_proxy` is set.
pub fn app_router(state: AppState, limits: RateLimits) -> Router {
    let behind_proxy = state.behind_proxy;

    Router::new()
        .merge(public_routes())
        .merge(shorten_routes(limits.shorten, behind_proxy))
        .merge(stats_routes(limits.stats, behind_proxy))
        .merge(redirect_routes(limits.redirect, behind_proxy))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
