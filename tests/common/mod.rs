#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use url_shortener::application::services::CodePolicy;
use url_shortener::infrastructure::persistence::{SqliteUrlRepository, storage};
use url_shortener::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt/";

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never expires, so the database lives as long
/// as the pool.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    storage::migrate_sqlite(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(SqliteUrlRepository::new(Arc::new(pool))),
        CodePolicy::default(),
        Some(TEST_BASE_URL.to_string()),
        false,
    )
}

/// State without a configured base URL, so short URLs follow the `Host` header.
pub fn create_host_derived_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(SqliteUrlRepository::new(Arc::new(pool))),
        CodePolicy::default(),
        None,
        false,
    )
}

pub async fn create_test_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO urls (original_url, short_code, click_count, created_at) VALUES (?1, ?2, 0, ?3)",
    )
    .bind(url)
    .bind(code)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn get_click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
