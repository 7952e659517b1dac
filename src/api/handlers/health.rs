//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::{debug, warn};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: `{"status": "healthy", "service": "URL Shortener"}`
/// - **503 Service Unavailable**: storage did not answer a ping
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    debug!("Health check requested");

    match state.url_service.repository().ping().await {
        Ok(()) => Ok(Json(HealthResponse::healthy())),
        Err(e) => {
            warn!("Health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy()),
            ))
        }
    }
}
