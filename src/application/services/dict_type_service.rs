//! Dictionary type management service.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{
    DictType, DictTypeFilter, DictTypePatch, DictTypeStatus, NewDictType, Page,
};
use crate::domain::repositories::DictTypeRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Prefix of the cache key holding the unfiltered option-select list. The
/// current generation is appended.
pub const ALL_DICT_TYPES_CACHE_KEY: &str = "dict_type:all";

/// Counter bumped by every write; lists cached under an older value are dead.
pub const DICT_TYPES_GENERATION_KEY: &str = "dict_type:gen";

fn list_cache_key(generation: i64) -> String {
    format!("{ALL_DICT_TYPES_CACHE_KEY}:{generation}")
}

/// Editable fields of a dictionary type as submitted by a client.
///
/// Field format (lengths, allowed characters) is validated at the API layer;
/// the service resolves defaults and enforces uniqueness.
#[derive(Debug, Clone)]
pub struct DictTypeInput {
    pub dict_name: String,
    pub dict_type: String,
    pub status: Option<i16>,
    pub remark: Option<String>,
}

/// Service for listing and maintaining dictionary types.
///
/// Ensures:
/// - `dict_type` keys stay unique among live rows
/// - Audit columns carry the acting operator
/// - The cached option-select list is dropped after every write
pub struct DictTypeService<R: DictTypeRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: DictTypeRepository> DictTypeService<R> {
    /// Creates a new dictionary type service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Returns one page of dictionary types and the total number of matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_page(
        &self,
        filter: DictTypeFilter,
        page: Page,
    ) -> Result<(Vec<DictType>, i64), AppError> {
        self.repository.list(filter.normalized(), page).await
    }

    /// Retrieves a dictionary type by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the dictionary type does not exist or was deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, dict_id: i64) -> Result<DictType, AppError> {
        self.repository.find_by_id(dict_id).await?.ok_or_else(|| {
            AppError::not_found("Dictionary type not found", json!({"dictId": dict_id}))
        })
    }

    /// Returns every dictionary type matching `filter` without pagination.
    ///
    /// The unfiltered list backs option selectors and code generation, so it is
    /// served from cache when possible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all(&self, filter: DictTypeFilter) -> Result<Vec<DictType>, AppError> {
        let filter = filter.normalized();
        if !filter.is_empty() {
            return self.repository.list_all(filter).await;
        }

        // Read before querying: a write that lands mid-query bumps the
        // generation, so the list stored below is never served afterwards.
        let key = list_cache_key(self.cache_generation().await);

        if let Ok(Some(cached)) = self.cache.get(&key).await {
            match serde_json::from_str::<Vec<DictType>>(&cached) {
                Ok(list) => return Ok(list),
                Err(e) => tracing::warn!(error = %e, "Discarding malformed cached dictionary types"),
            }
        }

        let list = self.repository.list_all(filter).await?;

        match serde_json::to_string(&list) {
            Ok(serialized) => {
                if let Err(e) = self.cache.set(&key, &serialized, None).await {
                    tracing::warn!(error = %e, "Failed to cache dictionary types");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize dictionary types"),
        }

        Ok(list)
    }

    /// Creates a dictionary type on behalf of `operator_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the status value is unknown or a
    /// required field is blank.
    /// Returns [`AppError::Conflict`] if the `dict_type` key is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn insert(
        &self,
        input: DictTypeInput,
        operator_id: i64,
    ) -> Result<DictType, AppError> {
        let status = resolve_status(input.status)?;
        let dict_name = required_text("dictName", &input.dict_name)?;
        let dict_type = required_text("dictType", &input.dict_type)?;

        if self.repository.exists_by_type(&dict_type, None).await? {
            return Err(duplicate_type(&dict_type));
        }

        let created = self
            .repository
            .create(NewDictType {
                dict_name,
                dict_type,
                status,
                remark: normalize_remark(input.remark),
                create_by: operator_id,
            })
            .await?;

        tracing::info!(
            dict_id = created.dict_id,
            dict_type = %created.dict_type,
            operator_id,
            "Dictionary type created"
        );

        self.invalidate_cached_list().await;
        Ok(created)
    }

    /// Replaces the editable fields of a dictionary type on behalf of `operator_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the dictionary type does not exist or was deleted.
    /// Returns [`AppError::Validation`] if the status value is unknown.
    /// Returns [`AppError::Conflict`] if another dictionary type already uses the key.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        dict_id: i64,
        input: DictTypeInput,
        operator_id: i64,
    ) -> Result<DictType, AppError> {
        let status = resolve_status(input.status)?;
        let dict_name = required_text("dictName", &input.dict_name)?;
        let dict_type = required_text("dictType", &input.dict_type)?;

        self.get(dict_id).await?;

        if self
            .repository
            .exists_by_type(&dict_type, Some(dict_id))
            .await?
        {
            return Err(duplicate_type(&dict_type));
        }

        let patch = DictTypePatch {
            dict_name,
            dict_type,
            status,
            remark: normalize_remark(input.remark),
            update_by: operator_id,
        };

        let updated = self
            .repository
            .update(dict_id, patch)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Dictionary type not found", json!({"dictId": dict_id}))
            })?;

        tracing::info!(dict_id, operator_id, "Dictionary type updated");

        self.invalidate_cached_list().await;
        Ok(updated)
    }

    /// Soft-deletes the given dictionary types on behalf of `operator_id`.
    ///
    /// Duplicate IDs are collapsed. Returns the number of rows removed, which may
    /// be lower than the number of IDs when some were already deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `dict_ids` is empty.
    /// Returns [`AppError::NotFound`] if none of the IDs matched a live row.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove(&self, dict_ids: Vec<i64>, operator_id: i64) -> Result<u64, AppError> {
        let ids: Vec<i64> = dict_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if ids.is_empty() {
            return Err(AppError::bad_request(
                "No dictionary type IDs provided",
                json!({"ids": []}),
            ));
        }

        let removed = self.repository.soft_delete(ids.clone(), operator_id).await?;

        if removed == 0 {
            return Err(AppError::not_found(
                "Dictionary type not found or already deleted",
                json!({"ids": ids}),
            ));
        }

        tracing::info!(?ids, removed, operator_id, "Dictionary types deleted");

        self.invalidate_cached_list().await;
        Ok(removed)
    }

    async fn cache_generation(&self) -> i64 {
        match self.cache.get(DICT_TYPES_GENERATION_KEY).await {
            Ok(Some(value)) => value.parse().unwrap_or_default(),
            _ => 0,
        }
    }

    async fn invalidate_cached_list(&self) {
        let generation = match self.cache.incr(DICT_TYPES_GENERATION_KEY).await {
            Ok(Some(generation)) => generation,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to bump dictionary type cache generation");
                return;
            }
        };

        if let Err(e) = self.cache.invalidate(&list_cache_key(generation - 1)).await {
            tracing::warn!(error = %e, "Failed to invalidate cached dictionary types");
        }
    }
}

fn resolve_status(status: Option<i16>) -> Result<DictTypeStatus, AppError> {
    match status {
        None => Ok(DictTypeStatus::default()),
        Some(value) => DictTypeStatus::try_from(value).map_err(|value| {
            AppError::bad_request(
                "Invalid dictionary type status",
                json!({"status": value, "allowed": [1, 2]}),
            )
        }),
    }
}

fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Validation failed",
            json!({ field: ["must not be blank"] }),
        ));
    }
    Ok(trimmed.to_string())
}

fn normalize_remark(remark: Option<String>) -> Option<String> {
    remark
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}

fn duplicate_type(dict_type: &str) -> AppError {
    AppError::conflict(
        "Dictionary type already exists",
        json!({"dictType": dict_type}),
    )
}
