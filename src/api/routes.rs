//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    dict_type_batch_delete_handler, dict_type_create_handler, dict_type_delete_handler,
    dict_type_get_handler, dict_type_list_handler, dict_type_option_select_handler,
    dict_type_update_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /dict/type`                - Paged dictionary type list
/// - `POST   /dict/type`                - Create a dictionary type
/// - `DELETE /dict/type`                - Batch soft-delete (`{"ids": [...]}`)
/// - `GET    /dict/type/{dictId}`       - Dictionary type detail
/// - `PUT    /dict/type/{dictId}`       - Update a dictionary type
/// - `DELETE /dict/type/{dictId}`       - Soft-delete a dictionary type
/// - `GET    /dict/type-option-select`  - Every dictionary type, unpaged
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dict/type",
            get(dict_type_list_handler)
                .post(dict_type_create_handler)
                .delete(dict_type_batch_delete_handler),
        )
        .route(
            "/dict/type/{dict_id}",
            get(dict_type_get_handler)
                .put(dict_type_update_handler)
                .delete(dict_type_delete_handler),
        )
        .route(
            "/dict/type-option-select",
            get(dict_type_option_select_handler),
        )
}
