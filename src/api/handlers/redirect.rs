//! Handler for short URL redirect.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;
use url::Url;

use crate::api::dto::redirect::RedirectDescriptor;
use crate::application::redirect_policy::RedirectKind;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Look up the code and increment its click counter (single statement)
/// 2. Inspect `User-Agent` / `Accept`
///    (see [`crate::application::redirect_policy`])
/// 3. Return `307 Temporary Redirect`, or `200` with a JSON descriptor for
///    API documentation clients
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    info!("Redirect request for short code: {}", short_code);

    let resolved = state
        .url_service
        .redirect(
            &short_code,
            header_str(&headers, header::USER_AGENT),
            header_str(&headers, header::ACCEPT),
        )
        .await?;

    let target_url = resolved.record.original_url;

    let response = match resolved.kind {
        RedirectKind::Redirect => (
            StatusCode::TEMPORARY_REDIRECT,
            [(header::LOCATION, location_header(&target_url)?)],
        )
            .into_response(),
        RedirectKind::Describe => Json(RedirectDescriptor::new(target_url)).into_response(),
    };

    Ok(response)
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Builds the `Location` header for a stored URL.
///
/// The stored string is used verbatim when it is a valid header value;
/// otherwise (e.g. non-ASCII characters) the percent-encoded serialization
/// from the `url` crate is used instead.
fn location_header(target_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(target_url) {
        return Ok(value);
    }

    Url::parse(target_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::StorageUnavailable(format!(
                "Stored URL cannot be used as a Location header: {}",
                target_url
            ))
        })
}
