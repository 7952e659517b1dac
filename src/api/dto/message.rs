//! Generic message DTO.

use serde::Serialize;

/// `{"message": "..."}` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
