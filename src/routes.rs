//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check: DB and cache (public)
//! - `/api/v1/*`      - Dictionary API (Bearer token required)
//!
//! # Middleware
//!
//! - **Request ID** - `x-request-id` assigned when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer token on `/api/v1`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let health_router = Router::new()
        .route("/health", get(health_handler))
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(health_router)
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::set_request_id_layer())
                .layer(tracing::layer())
                .layer(tracing::propagate_request_id_layer()),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
