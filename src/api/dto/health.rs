//! DTOs for the health check endpoint.

use serde::Serialize;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "URL Shortener";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy",
            service: SERVICE_NAME,
        }
    }
}
