//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`], plus the [`NewUrlRecord`]
//! input struct used when inserting.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
