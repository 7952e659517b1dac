//! Application error type and its HTTP rendering.
//!
//! Every error is rendered as `{"detail": "<message>"}` with a matching status
//! code. Storage failures are logged with their cause but clients only see a
//! generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted string failed syntactic URL validation.
    #[error("Invalid URL")]
    InvalidUrl,

    /// No record exists for the requested short code.
    #[error("URL not found")]
    NotFound,

    /// A uniqueness constraint was violated on insert.
    #[error("Unique constraint violation: {0}")]
    Conflict(String),

    /// The client exceeded its per-minute quota for an endpoint.
    #[error("Rate limit exceeded: {per_minute} per 1 minute")]
    RateLimited { per_minute: u32 },

    /// The storage backend failed or could not allocate a code.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable detail string exposed to clients.
    pub fn detail(&self) -> String {
        match self {
            AppError::StorageUnavailable(_) => "Internal server error".to_string(),
            AppError::Conflict(_) => "Conflict".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::StorageUnavailable(cause) = &self {
            tracing::error!("Storage error: {}", cause);
        }

        let body = ErrorBody {
            detail: self.detail(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::Conflict(db.message().to_string());
        }

        AppError::StorageUnavailable(e.to_string())
    }
}
