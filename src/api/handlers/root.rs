//! Handlers for the service root and browser favicon probes.

use axum::{Json, http::StatusCode};

use crate::api::dto::message::MessageResponse;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the URL Shortener API. Visit /docs for Swagger UI or use /shorten to shorten URLs.";

/// `GET /` - short description of the API.
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE,
    })
}

/// `GET /favicon.ico` - answered with `204 No Content` so browsers do not
/// hit the redirect route with `favicon.ico` as a short code.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
