//! Repository implementations backed by SQLx.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - embedded SQLite file store
//! - [`PgUrlRepository`] - PostgreSQL
//!
//! [`storage::connect`] picks one from the configured `DATABASE_URL`.

pub mod pg_url_repository;
pub mod sqlite_url_repository;
pub mod storage;

pub use pg_url_repository::PgUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
pub use storage::{StorageBackend, connect};
