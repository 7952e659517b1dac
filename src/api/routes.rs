//! API route configuration.
//!
//! Routes are grouped by rate-limit quota; each group gets its own limiter
//! so quotas are tracked per endpoint.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::handlers::{
    favicon_handler, health_handler, redirect_handler, root_handler, shorten_handler,
    stats_handler,
};
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::state::AppState;

/// Requests per minute per client for each limited endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    pub shorten: u32,
    pub stats: u32,
    pub redirect: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            shorten: 10,
            stats: 30,
            redirect: 100,
        }
    }
}

fn limited(router: Router<AppState>, per_minute: u32, behind_proxy: bool) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(
        RateLimit::per_minute(per_minute, behind_proxy),
        rate_limit::layer,
    ))
}

/// Unlimited informational routes.
///
/// - `GET /`             - Welcome message
/// - `GET /health`       - Health check
/// - `GET /favicon.ico`  - 204 No Content
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/favicon.ico", get(favicon_handler))
}

/// `POST /shorten` - create or reuse a short URL.
pub fn shorten_routes(per_minute: u32, behind_proxy: bool) -> Router<AppState> {
    limited(
        Router::new().route("/shorten", post(shorten_handler)),
        per_minute,
        behind_proxy,
    )
}

/// `GET /api/stats/{short_code}` - click statistics.
pub fn stats_routes(per_minute: u32, behind_proxy: bool) -> Router<AppState> {
    limited(
        Router::new().route("/api/stats/{short_code}", get(stats_handler)),
        per_minute,
        behind_proxy,
    )
}

/// `GET /{short_code}` - redirect (or JSON descriptor).
pub fn redirect_routes(per_minute: u32, behind_proxy: bool) -> Router<AppState> {
    limited(
        Router::new().route("/{short_code}", get(redirect_handler)),
        per_minute,
        behind_proxy,
    )
}
