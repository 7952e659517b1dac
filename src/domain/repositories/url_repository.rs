//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for URL records.
///
/// All lookups are exact string matches. Implementations must enforce a
/// uniqueness constraint on `short_code`; `original_url` is indexed but not
/// unique.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - embedded file store
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record with `click_count = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::StorageUnavailable`] on other database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Atomically increments the click counter and returns the updated record.
    ///
    /// Returns `Ok(None)` if no record has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Performs a trivial round trip to check the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
