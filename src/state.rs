//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CodePolicy, UrlService};
use crate::domain::repositories::UrlRepository;

/// Service backed by whichever storage backend was configured.
pub type DynUrlService = UrlService<dyn UrlRepository>;

/// Request-independent state: the storage-backed service and the settings
/// handlers need to build responses.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DynUrlService>,
    /// Configured public prefix; `None` means derive it from `Host`.
    pub base_url: Option<String>,
    pub behind_proxy: bool,
}

impl AppState {
    /// Creates application state around an existing repository handle.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        policy: CodePolicy,
        base_url: Option<String>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            url_service: Arc::new(UrlService::with_policy(repository, policy)),
            base_url,
            behind_proxy,
        }
    }
}
