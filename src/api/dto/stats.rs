//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::UrlStats;

/// Click statistics for a short code.
///
/// `created_at` serializes as an RFC 3339 (ISO-8601) timestamp.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            url: stats.url,
            clicks: stats.clicks,
            created_at: stats.created_at,
        }
    }
}
