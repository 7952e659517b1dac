//! URL record entity: the mapping between an original URL and its short code.

use chrono::{DateTime, Utc};

/// A stored short link together with its click counter.
///
/// `original_url` is kept byte-for-byte as submitted so redirects land on
/// exactly what the client asked for.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
            created_at,
        }
    }

    /// Builds the public short URL by appending the code to `base_url`.
    ///
    /// `base_url` is expected to end with `/` (see [`crate::utils::base_url`]).
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.short_code)
    }
}

/// Input data for inserting a new record.
///
/// The click counter always starts at zero and `created_at` is assigned by the
/// repository at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "https://example.com".to_string(),
            "aB3xY9".to_string(),
            0,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_code, "aB3xY9");
        assert_eq!(record.click_count, 0);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_short_url_appends_code() {
        let record = UrlRecord::new(
            7,
            "https://rust-lang.org".to_string(),
            "Zz09aa".to_string(),
            3,
            Utc::now(),
        );

        assert_eq!(
            record.short_url("http://localhost:8000/"),
            "http://localhost:8000/Zz09aa"
        );
    }
}
