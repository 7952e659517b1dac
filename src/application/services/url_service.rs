//! Short URL creation, redirect resolution and click statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::application::redirect_policy::{RedirectKind, choose_response};
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeCandidates, DEFAULT_CODE_LENGTH};
use crate::utils::url_validator::is_valid_url;

/// Limits for the collision-retry loop used when allocating codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePolicy {
    /// Length of freshly generated codes.
    pub length: usize,
    /// Attempts at each length before growing the code by one character.
    pub max_attempts: usize,
    /// How many times the length may grow before giving up.
    pub escalations: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            max_attempts: 10,
            escalations: 2,
        }
    }
}

/// Outcome of resolving a short code for a redirect.
#[derive(Debug, Clone)]
pub struct ResolvedRedirect {
    /// Record after the click counter was incremented.
    pub record: UrlRecord,
    pub kind: RedirectKind,
}

/// Read-only analytics projection of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStats {
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlStats {
    fn from(record: UrlRecord) -> Self {
        Self {
            url: record.original_url,
            clicks: record.click_count,
            created_at: record.created_at,
        }
    }
}

/// Service for creating and resolving short links.
///
/// Holds an explicit storage handle; every operation is an independent
/// sequence of repository calls with no in-process locking.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    policy: CodePolicy,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new service with the default [`CodePolicy`].
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_policy(repository, CodePolicy::default())
    }

    /// Creates a new service with a custom code allocation policy.
    pub fn with_policy(repository: Arc<R>, policy: CodePolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns the underlying repository handle.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Shortens `url`, reusing the existing record if the URL was seen before.
    ///
    /// # Code Allocation
    ///
    /// Candidates come from [`CodeCandidates`]: `max_attempts` tries at the
    /// configured length, then one character longer, up to `escalations`
    /// times. A candidate already present in the registry is skipped. If the
    /// insert itself loses a race on the code, the registry is re-checked for
    /// the URL (another request may have just stored it) before moving on.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL fails validation.
    /// Returns [`AppError::StorageUnavailable`] on database errors or when
    /// every candidate collided.
    pub async fn shorten(&self, url: &str) -> Result<UrlRecord, AppError> {
        if !is_valid_url(url) {
            warn!("Invalid URL provided: {}", url);
            return Err(AppError::InvalidUrl);
        }

        if let Some(existing) = self.repository.find_by_url(url).await? {
            info!("Returning existing short code {} for {}", existing.short_code, url);
            metrics::counter!("shortener_urls_deduplicated_total").increment(1);
            return Ok(existing);
        }

        let candidates = CodeCandidates::new(
            self.policy.length,
            self.policy.max_attempts,
            self.policy.escalations,
        );

        for code in candidates {
            if self.repository.find_by_code(&code).await?.is_some() {
                debug!("Short code collision on {}, retrying", code);
                metrics::counter!("shortener_code_collisions_total").increment(1);
                continue;
            }

            let new_record = NewUrlRecord {
                original_url: url.to_string(),
                short_code: code,
            };

            match self.repository.insert(new_record).await {
                Ok(record) => {
                    info!("Created short code {} for {}", record.short_code, url);
                    metrics::counter!("shortener_urls_created_total").increment(1);
                    return Ok(record);
                }
                Err(AppError::Conflict(reason)) => {
                    debug!("Insert conflict ({}), re-checking URL", reason);
                    metrics::counter!("shortener_code_collisions_total").increment(1);

                    if let Some(existing) = self.repository.find_by_url(url).await? {
                        return Ok(existing);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::StorageUnavailable(
            "Failed to generate unique code: too many collisions".to_string(),
        ))
    }

    /// Resolves a short code, counting the click.
    ///
    /// The counter is incremented before the response shape is chosen, so
    /// JSON descriptor responses count as clicks too.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn redirect(
        &self,
        short_code: &str,
        user_agent: Option<&str>,
        accept: Option<&str>,
    ) -> Result<ResolvedRedirect, AppError> {
        let Some(record) = self.repository.increment_clicks(short_code).await? else {
            warn!("Short code not found: {}", short_code);
            return Err(AppError::NotFound);
        };

        info!(
            "Redirecting {} to {} (clicks: {})",
            short_code, record.original_url, record.click_count
        );
        metrics::counter!("shortener_redirects_total").increment(1);

        Ok(ResolvedRedirect {
            kind: choose_response(user_agent, accept),
            record,
        })
    }

    /// Returns the analytics for a short code without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn get_stats(&self, short_code: &str) -> Result<UrlStats, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .map(UrlStats::from)
            .ok_or_else(|| {
                warn!("Stats requested for non-existent short code: {}", short_code);
                AppError::NotFound
            })
    }
}
