//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::url_service::UrlService`] - Shortening, redirect resolution and stats
//! - [`redirect_policy`] - Redirect vs JSON descriptor decision

pub mod redirect_policy;
pub mod services;
