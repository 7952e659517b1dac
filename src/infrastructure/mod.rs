//! Infrastructure layer for external integrations.
//!
//! Implements the storage interfaces defined by the domain layer.
//!
//! - [`persistence`] - SQLite and PostgreSQL repository implementations

pub mod persistence;
