mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::redirect_handler;

async fn server() -> (TestServer, sqlx::SqlitePool) {
    let pool = common::create_test_pool().await;
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{short_code}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), pool)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "redir1", "https://example.com/target").await;

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_increments_clicks() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "count1", "https://example.com").await;

    for _ in 0..3 {
        server.get("/count1").await;
    }

    assert_eq!(common::get_click_count(&pool, "count1").await, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _pool) = server().await;

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "URL not found"
    );
}

#[tokio::test]
async fn test_redirect_code_is_case_sensitive() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "CaseAb", "https://example.com").await;

    server.get("/caseab").await.assert_status_not_found();
    assert_eq!(server.get("/CaseAb").await.status_code(), 307);
}

#[tokio::test]
async fn test_redirect_json_accept_returns_descriptor() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "json01", "https://example.com/docs").await;

    let response = server
        .get("/json01")
        .add_header("Accept", "application/json")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Redirect would go to:");
    assert_eq!(json["target_url"], "https://example.com/docs");
    assert_eq!(common::get_click_count(&pool, "json01").await, 1);
}

#[tokio::test]
async fn test_redirect_swagger_user_agent_returns_descriptor() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "swag01", "https://example.com").await;

    let response = server
        .get("/swag01")
        .add_header("User-Agent", "Mozilla/5.0 Swagger-UI")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["target_url"],
        "https://example.com"
    );
}

#[tokio::test]
async fn test_redirect_browser_accept_redirects() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "brows1", "https://example.com").await;

    let response = server
        .get("/brows1")
        .add_header("Accept", "text/html,application/xhtml+xml,*/*;q=0.8")
        .add_header("User-Agent", "Mozilla/5.0 (X11; Linux x86_64) Firefox/130.0")
        .await;

    assert_eq!(response.status_code(), 307);
}

#[tokio::test]
async fn test_redirect_non_ascii_target_is_percent_encoded() {
    let (server, pool) = server().await;
    common::create_test_url(&pool, "utf8ok", "https://example.com/caf\u{e9}").await;

    let response = server.get("/utf8ok").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}
