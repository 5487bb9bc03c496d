//! Repository trait for dictionary type persistence.

use crate::domain::entities::{DictType, DictTypeFilter, DictTypePatch, NewDictType, Page};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for dictionary types.
///
/// All operations ignore soft-deleted rows: a deleted dictionary type can be
/// neither read, updated nor deleted again.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDictTypeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_dict_type.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DictTypeRepository: Send + Sync {
    /// Returns one page of dictionary types matching `filter`, ordered by id,
    /// together with the total number of matching rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        filter: DictTypeFilter,
        page: Page,
    ) -> Result<(Vec<DictType>, i64), AppError>;

    /// Returns every dictionary type matching `filter`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self, filter: DictTypeFilter) -> Result<Vec<DictType>, AppError>;

    /// Finds a dictionary type by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, dict_id: i64) -> Result<Option<DictType>, AppError>;

    /// Checks whether `dict_type` is already taken, optionally ignoring one row
    /// (the row being updated).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_type(
        &self,
        dict_type: &str,
        excluding_id: Option<i64>,
    ) -> Result<bool, AppError>;

    /// Inserts a new dictionary type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the unique index on `dict_type` is violated.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_dict_type: NewDictType) -> Result<DictType, AppError>;

    /// Overwrites the editable columns of a dictionary type.
    ///
    /// Returns `None` if the row does not exist or is soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the unique index on `dict_type` is violated.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        dict_id: i64,
        patch: DictTypePatch,
    ) -> Result<Option<DictType>, AppError>;

    /// Soft-deletes the given dictionary types, recording `update_by`.
    ///
    /// Returns the number of rows actually deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn soft_delete(&self, dict_ids: Vec<i64>, update_by: i64) -> Result<u64, AppError>;
}
