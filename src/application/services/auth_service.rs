//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Identity of the caller behind an authenticated request.
///
/// Inserted into request extensions by the auth middleware; `user_id` is
/// written to `create_by` / `update_by` audit columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub user_id: i64,
    pub token_id: i64,
    pub token_name: String,
}

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. Shared by the HTTP
/// authentication path and the admin CLI so that stored hashes always match.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// comparison. Read-only access to the database is not enough to verify or
/// forge tokens without the server-side secret.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token and resolves the operator behind it.
    ///
    /// On success, updates the token's `last_used_at` timestamp (best-effort).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Operator, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let api_token = self
            .repository
            .find_active(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked token"}),
                )
            })?;

        if let Err(e) = self.repository.update_last_used(api_token.id).await {
            tracing::warn!(error = %e, token_id = api_token.id, "Failed to record token usage");
        }

        Ok(Operator {
            user_id: api_token.user_id,
            token_id: api_token.id,
            token_name: api_token.name,
        })
    }
}
