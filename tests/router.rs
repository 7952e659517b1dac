mod common;

use axum_test::TestServer;
use url_shortener::api::routes::RateLimits;
use url_shortener::routes::app_router;

async fn server(limits: RateLimits) -> (TestServer, sqlx::SqlitePool) {
    let pool = common::create_test_pool().await;
    let state = common::create_test_state(pool.clone());

    (TestServer::new(app_router(state, limits)).unwrap(), pool)
}

fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(common::TEST_BASE_URL)
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_shorten_redirect_stats_flow() {
    let (server, _pool) = server(RateLimits::default()).await;

    let shortened = server
        .post("/shorten")
        .add_query_param("url", "https://www.rust-lang.org/learn")
        .await;
    shortened.assert_status_ok();
    let code = code_of(shortened.json::<serde_json::Value>()["short_url"].as_str().unwrap());

    let redirect = server.get(&format!("/{}", code)).await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://www.rust-lang.org/learn");

    let stats = server
        .get(&format!("/api/stats/{}", code))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["url"], "https://www.rust-lang.org/learn");
    assert_eq!(stats["clicks"], 1);
}

#[tokio::test]
async fn test_public_routes_not_shadowed_by_redirect() {
    let (server, _pool) = server(RateLimits::default()).await;

    server.get("/").await.assert_status_ok();
    assert_eq!(server.get("/favicon.ico").await.status_code(), 204);

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_code_is_404() {
    let (server, _pool) = server(RateLimits::default()).await;

    server.get("/zzzzzz").await.assert_status_not_found();
    server.get("/api/stats/zzzzzz").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_rate_limit() {
    let (server, pool) = server(RateLimits::default()).await;

    for i in 0..10 {
        server
            .post("/shorten")
            .add_query_param("url", format!("https://example.com/{}", i))
            .await
            .assert_status_ok();
    }

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com/over")
        .await;

    assert_eq!(response.status_code(), 429);
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Rate limit exceeded: 10 per 1 minute"
    );
    assert_eq!(common::count_urls(&pool).await, 10);
}

#[tokio::test]
async fn test_rate_limits_are_per_endpoint() {
    let limits = RateLimits {
        shorten: 1,
        stats: 2,
        redirect: 3,
    };
    let (server, pool) = server(limits).await;
    common::create_test_url(&pool, "limit1", "https://example.com").await;

    server
        .post("/shorten")
        .add_query_param("url", "https://example.com/a")
        .await
        .assert_status_ok();
    assert_eq!(
        server
            .post("/shorten")
            .add_query_param("url", "https://example.com/b")
            .await
            .status_code(),
        429
    );

    // The shorten quota is exhausted but other endpoints still answer.
    for _ in 0..3 {
        assert_eq!(server.get("/limit1").await.status_code(), 307);
    }
    assert_eq!(server.get("/limit1").await.status_code(), 429);

    for _ in 0..2 {
        server.get("/api/stats/limit1").await.assert_status_ok();
    }
    let limited = server.get("/api/stats/limit1").await;
    assert_eq!(limited.status_code(), 429);
    assert_eq!(
        limited.json::<serde_json::Value>()["detail"],
        "Rate limit exceeded: 2 per 1 minute"
    );

    // Rejected redirects are not counted as clicks.
    assert_eq!(common::get_click_count(&pool, "limit1").await, 3);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let (server, _pool) = server(RateLimits::default()).await;

    let response = server
        .get("/")
        .add_header("Origin", "https://app.example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
