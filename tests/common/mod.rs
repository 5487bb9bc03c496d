#![allow(dead_code)]

use axum::{Router, middleware};
use dict_admin::api;
use dict_admin::api::middleware::auth;
use dict_admin::application::services::auth_service::hash_token;
use dict_admin::infrastructure::cache::NullCache;
use dict_admin::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Rows inserted by the initial migration.
pub const SEEDED_DICT_TYPES: i64 = 3;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(NullCache::new()),
        TEST_SIGNING_SECRET.to_string(),
    )
}

/// `/api/v1` routes behind the auth middleware, without rate limiting.
pub fn create_test_app(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new().nest("/api/v1", api_router).with_state(state)
}

/// Stores a token acting as `user_id` and returns the raw value.
pub async fn create_test_token(pool: &PgPool, name: &str, user_id: i64) -> String {
    let raw = format!("raw-token-{name}");

    sqlx::query("INSERT INTO api_tokens (name, user_id, token_hash) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(user_id)
        .bind(hash_token(TEST_SIGNING_SECRET, &raw))
        .execute(pool)
        .await
        .unwrap();

    raw
}

/// `Authorization` header value for a raw token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn create_test_dict_type(
    pool: &PgPool,
    dict_type: &str,
    dict_name: &str,
    status: i16,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO sys_dict_type (dict_name, dict_type, status) VALUES ($1, $2, $3) RETURNING dict_id",
    )
    .bind(dict_name)
    .bind(dict_type)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_deleted_dict_type(pool: &PgPool, dict_type: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO sys_dict_type (dict_name, dict_type, deleted_at) VALUES ($1, $2, NOW()) RETURNING dict_id",
    )
    .bind(format!("Deleted {dict_type}"))
    .bind(dict_type)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seeded_dict_id(pool: &PgPool, dict_type: &str) -> i64 {
    sqlx::query_scalar(
        "SELECT dict_id FROM sys_dict_type WHERE dict_type = $1 AND deleted_at IS NULL",
    )
    .bind(dict_type)
    .fetch_one(pool)
    .await
    .unwrap()
}
