//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click statistics of a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{short_code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com",
///   "clicks": 3,
///   "created_at": "2025-01-01T12:00:00.123456Z"
/// }
/// ```
///
/// Reading statistics never changes the click counter.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    info!("Stats request for short code: {}", short_code);

    let stats = state.url_service.get_stats(&short_code).await?;

    Ok(Json(stats.into()))
}
