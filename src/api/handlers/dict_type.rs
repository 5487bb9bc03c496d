//! Handlers for dictionary type management endpoints.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::dict_type::{
    DictTypeIdsRequest, DictTypeItem, DictTypeRequest, DictTypeSearchParams,
};
use crate::api::response::{ApiResult, Envelope, PageResult};
use crate::application::services::Operator;
use crate::error::AppError;
use crate::state::AppState;

/// Lists dictionary types page by page.
///
/// # Endpoint
///
/// `GET /api/v1/dict/type?dictName=&dictType=&status=&pageIndex=1&pageSize=10`
///
/// # Response
///
/// ```json
/// {
///   "code": 200,
///   "msg": "Query succeeded",
///   "data": { "list": [ ... ], "count": 3, "pageIndex": 1, "pageSize": 10 }
/// }
/// ```
pub async fn dict_type_list_handler(
    State(state): State<AppState>,
    query: Result<Query<DictTypeSearchParams>, QueryRejection>,
) -> ApiResult<PageResult<DictTypeItem>> {
    let Query(params) = query?;

    let page = params
        .pagination
        .validate_and_get_page()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (items, count) = state
        .dict_type_service
        .get_page(params.filter(), page)
        .await?;

    Ok(Envelope::page_ok(
        items.into_iter().map(DictTypeItem::from).collect(),
        count,
        params.pagination.page_index(),
        params.pagination.page_size(),
        "Query succeeded",
    ))
}

/// Returns a single dictionary type.
///
/// # Endpoint
///
/// `GET /api/v1/dict/type/{dictId}`
///
/// # Errors
///
/// Returns 400 if `dictId` is not an integer.
/// Returns 404 if the dictionary type does not exist.
pub async fn dict_type_get_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<DictTypeItem> {
    let Path(dict_id) = path?;

    let dict_type = state.dict_type_service.get(dict_id).await?;

    Ok(Envelope::ok(
        DictTypeItem::from(dict_type),
        "Viewed successfully",
    ))
}

/// Creates a dictionary type and returns its ID.
///
/// # Endpoint
///
/// `POST /api/v1/dict/type`
///
/// # Request Body
///
/// ```json
/// { "dictName": "Order status", "dictType": "order_status", "status": 2, "remark": null }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if `dictType` is already in use.
pub async fn dict_type_create_handler(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    payload: Result<Json<DictTypeRequest>, JsonRejection>,
) -> ApiResult<i64> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state
        .dict_type_service
        .insert(payload.into(), operator.user_id)
        .await?;

    Ok(Envelope::ok(created.dict_id, "Created successfully"))
}

/// Replaces the editable fields of a dictionary type.
///
/// # Endpoint
///
/// `PUT /api/v1/dict/type/{dictId}`
///
/// The ID in the path is authoritative; a `dictId` in the body is ignored.
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 404 if the dictionary type does not exist.
/// Returns 409 if another dictionary type already uses `dictType`.
pub async fn dict_type_update_handler(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DictTypeRequest>, JsonRejection>,
) -> ApiResult<i64> {
    let Path(dict_id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;

    let updated = state
        .dict_type_service
        .update(dict_id, payload.into(), operator.user_id)
        .await?;

    Ok(Envelope::ok(updated.dict_id, "Updated successfully"))
}

/// Soft-deletes a single dictionary type.
///
/// # Endpoint
///
/// `DELETE /api/v1/dict/type/{dictId}`
///
/// # Errors
///
/// Returns 404 if the dictionary type does not exist or was already deleted.
pub async fn dict_type_delete_handler(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<i64>> {
    let Path(dict_id) = path?;

    state
        .dict_type_service
        .remove(vec![dict_id], operator.user_id)
        .await?;

    Ok(Envelope::ok(vec![dict_id], "Deleted successfully"))
}

/// Soft-deletes several dictionary types at once.
///
/// # Endpoint
///
/// `DELETE /api/v1/dict/type`
///
/// # Request Body
///
/// ```json
/// { "ids": [4, 5] }
/// ```
///
/// # Errors
///
/// Returns 400 if `ids` is missing or empty.
/// Returns 404 if none of the IDs matched a live dictionary type.
pub async fn dict_type_batch_delete_handler(
    State(state): State<AppState>,
    Extension(operator): Extension<Operator>,
    payload: Result<Json<DictTypeIdsRequest>, JsonRejection>,
) -> ApiResult<Vec<i64>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let ids = payload.ids;
    state
        .dict_type_service
        .remove(ids.clone(), operator.user_id)
        .await?;

    Ok(Envelope::ok(ids, "Deleted successfully"))
}

/// Lists every matching dictionary type without pagination.
///
/// # Endpoint
///
/// `GET /api/v1/dict/type-option-select`
///
/// Backs drop-down selectors; paging parameters are ignored.
pub async fn dict_type_option_select_handler(
    State(state): State<AppState>,
    query: Result<Query<DictTypeSearchParams>, QueryRejection>,
) -> ApiResult<Vec<DictTypeItem>> {
    let Query(params) = query?;

    let list = state.dict_type_service.get_all(params.filter()).await?;

    Ok(Envelope::ok(
        list.into_iter().map(DictTypeItem::from).collect(),
        "Query succeeded",
    ))
}
