//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use tracing::info;

use crate::api::dto::shorten::{ShortenParams, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Creates (or reuses) a short URL for the given long URL.
///
/// # Endpoint
///
/// `POST /shorten?url=<url>`
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8000/aB3xY9" }
/// ```
///
/// Submitting a URL that is already stored returns its existing short URL.
///
/// # Errors
///
/// Returns 400 Bad Request with `{"detail": "Invalid URL"}` if validation fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ShortenParams>,
) -> Result<Json<ShortenResponse>, AppError> {
    info!("Shortening URL: {}", params.url);

    let record = state.url_service.shorten(&params.url).await?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers, state.behind_proxy);

    Ok(Json(ShortenResponse {
        short_url: record.short_url(&base_url),
    }))
}
