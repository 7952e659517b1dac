//! DTOs for the redirect endpoint.

use serde::Serialize;

/// Message shown to API documentation clients instead of following the redirect.
pub const DESCRIPTOR_MESSAGE: &str = "Redirect would go to:";

/// JSON answer to a redirect request from an API documentation client.
#[derive(Debug, Serialize)]
pub struct RedirectDescriptor {
    pub message: &'static str,
    pub target_url: String,
}

impl RedirectDescriptor {
    pub fn new(target_url: String) -> Self {
        Self {
            message: DESCRIPTOR_MESSAGE,
            target_url,
        }
    }
}
