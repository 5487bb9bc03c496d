//! Repository trait for API token authentication.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// API token entity with metadata.
///
/// Tokens are stored as HMAC-SHA256 hashes; `user_id` identifies the operator
/// recorded in audit columns for requests made with the token.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Storage for API tokens.
///
/// The HTTP path only needs [`find_active`](Self::find_active) and
/// [`update_last_used`](Self::update_last_used); the remaining methods back
/// the `admin token` CLI commands. Implemented by
/// [`crate::infrastructure::persistence::PgTokenRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Looks up a non-revoked token by its hash.
    async fn find_active(&self, token_hash: &str) -> Result<Option<ApiToken>, AppError>;

    /// Stamps `last_used_at` with the current time.
    async fn update_last_used(&self, token_id: i64) -> Result<(), AppError>;

    /// Stores a new token hash acting as `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a token with the same name or hash already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_token(
        &self,
        name: &str,
        user_id: i64,
        token_hash: &str,
    ) -> Result<ApiToken, AppError>;

    /// Lists every token, revoked ones included, newest first.
    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError>;

    /// Marks a token revoked; it stops authenticating immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token does not exist or is already revoked.
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
