//! Storage backend selection, connection and migrations.
//!
//! The backend is picked from the `DATABASE_URL` scheme:
//!
//! - `sqlite:` - embedded file store (`sqlite::memory:` for throwaway stores)
//! - `postgres://` / `postgresql://` - networked PostgreSQL
//!
//! Each backend has its own migration set under `migrations/`.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use super::{PgUrlRepository, SqliteUrlRepository};
use crate::config::Config;
use crate::domain::repositories::UrlRepository;

/// Supported storage engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Postgres,
}

impl StorageBackend {
    /// Detects the backend from a connection string.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported schemes.
    pub fn from_url(database_url: &str) -> Result<Self> {
        if database_url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else if database_url.starts_with("postgres://")
            || database_url.starts_with("postgresql://")
        {
            Ok(Self::Postgres)
        } else {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', 'postgres://' or 'postgresql://', got '{}'",
                database_url
            )
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }
}

/// Returns true for SQLite URLs that point at a private in-memory database.
///
/// Each connection to such a URL opens a fresh database, so the pool must be
/// pinned to a single connection.
pub fn is_in_memory_sqlite(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Applies the SQLite migration set.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate_sqlite(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .context("Failed to apply SQLite migrations")
}

/// Applies the PostgreSQL migration set.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate_postgres(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .context("Failed to apply PostgreSQL migrations")
}

fn retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(200)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(retries)
}

/// Connects to the configured store, applies migrations and returns the
/// repository handle shared by all requests.
///
/// Connection attempts are retried with exponential backoff
/// (`DB_CONNECT_RETRIES`); failures after that are fatal for startup.
///
/// # Errors
///
/// Returns an error if the store is unreachable or migrations fail.
pub async fn connect(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    let backend = StorageBackend::from_url(&config.database_url)?;
    let acquire_timeout = Duration::from_secs(config.db_connect_timeout);

    match backend {
        StorageBackend::Sqlite => {
            let options = SqliteConnectOptions::from_str(&config.database_url)
                .context("Invalid SQLite connection string")?
                .create_if_missing(true);

            let pool_options = if is_in_memory_sqlite(&config.database_url) {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
            } else {
                SqlitePoolOptions::new().max_connections(config.db_max_connections)
            }
            .acquire_timeout(acquire_timeout);

            let pool = Retry::spawn(retry_strategy(config.db_connect_retries), || {
                pool_options.clone().connect_with(options.clone())
            })
            .await
            .context("Failed to open SQLite database")?;

            migrate_sqlite(&pool).await?;
            tracing::info!("Connected to database (sqlite)");

            Ok(Arc::new(SqliteUrlRepository::new(Arc::new(pool))))
        }
        StorageBackend::Postgres => {
            let pool = Retry::spawn(retry_strategy(config.db_connect_retries), || {
                tracing::debug!("Connecting to PostgreSQL");
                PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(acquire_timeout)
                    .connect(&config.database_url)
            })
            .await
            .context("Failed to connect to PostgreSQL")?;

            migrate_postgres(&pool).await?;
            tracing::info!("Connected to database (postgres)");

            Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
    }
}
