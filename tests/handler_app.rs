mod common;

use axum::http::{HeaderValue, StatusCode, header};
use serde_json::json;
use sqlx::SqlitePool;

const ALLOWED_ORIGIN: &str = "http://allowed.test";

fn allowed_origins() -> Vec<String> {
    vec![ALLOWED_ORIGIN.to_string()]
}

#[sqlx::test]
async fn test_front_page_served(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_app_server(state, &allowed_origins());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[sqlx::test]
async fn test_static_assets_served(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_app_server(state, &allowed_origins());

    server.get("/static/main.html").await.assert_status_ok();
    server.get("/static/missing.css").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_cors_allows_configured_origin(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_app_server(state, &allowed_origins());

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[sqlx::test]
async fn test_cors_ignores_unlisted_origin(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_app_server(state, &allowed_origins());

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://elsewhere.test"),
        )
        .await;

    response.assert_status_ok();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[sqlx::test]
async fn test_cors_without_origins_allows_nothing(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_app_server(state, &[]);

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[sqlx::test]
async fn test_trailing_slash_is_trimmed(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = common::create_app_server(state, &allowed_origins());

    let response = server
        .post("/shorten/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    server.get("/health/").await.assert_status_ok();
    assert_eq!(common::count_links(&pool).await, 1);
}
