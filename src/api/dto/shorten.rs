//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters of `POST /shorten?url=...`.
///
/// A missing `url` deserializes to an empty string so it fails validation
/// like any other malformed input.
#[derive(Debug, Deserialize)]
pub struct ShortenParams {
    #[serde(default)]
    pub url: String,
}

/// Response containing the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
