mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use dict_admin::api::handlers::health_handler;
use sqlx::PgPool;

fn health_app(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = TestServer::new(health_app(pool)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let server = TestServer::new(health_app(pool)).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("cache").is_some());
}

#[sqlx::test]
async fn test_health_degraded_when_database_closed(pool: PgPool) {
    let server = TestServer::new(health_app(pool.clone())).unwrap();
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
