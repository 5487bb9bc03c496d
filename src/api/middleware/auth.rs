//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Resolves the caller of an `/api/v1` request from its bearer token.
///
/// Expects `Authorization: Bearer <token>`. The token is checked by
/// [`AuthService`](crate::application::services::AuthService) and the
/// resulting [`Operator`](crate::application::services::Operator) is stored
/// in the request extensions; handlers read it with `Extension<Operator>` to
/// fill `create_by` / `update_by`.
///
/// # Errors
///
/// `401 Unauthorized` with `WWW-Authenticate: Bearer` when the header is
/// missing or malformed, or the token is unknown or revoked.
///
/// ```rust,ignore
/// let api = api::routes::protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let operator = state.auth_service.authenticate(&token).await?;
    tracing::debug!(
        user_id = operator.user_id,
        token_id = operator.token_id,
        token = %operator.token_name,
        "Request authenticated"
    );

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(operator);

    Ok(next.run(req).await)
}
