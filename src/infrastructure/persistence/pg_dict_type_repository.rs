//! PostgreSQL implementation of dictionary type repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{DictType, DictTypeFilter, DictTypePatch, NewDictType, Page};
use crate::domain::repositories::DictTypeRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `sys_dict_type` table.
///
/// Uses soft delete: `deleted_at IS NOT NULL` means deleted, and such rows are
/// excluded from every query.
pub struct PgDictTypeRepository {
    pool: Arc<PgPool>,
}

impl PgDictTypeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DictTypeRow {
    dict_id: i64,
    dict_name: String,
    dict_type: String,
    status: i16,
    remark: Option<String>,
    create_by: i64,
    update_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<DictTypeRow> for DictType {
    fn from(r: DictTypeRow) -> Self {
        DictType {
            dict_id: r.dict_id,
            dict_name: r.dict_name,
            dict_type: r.dict_type,
            status: r.status,
            remark: r.remark,
            create_by: r.create_by,
            update_by: r.update_by,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
        }
    }
}

/// Builds an `ILIKE` pattern matching `value` as a literal substring.
fn contains_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Bind values shared by the filtered queries, in `$1..$4` order.
fn filter_binds(
    filter: &DictTypeFilter,
) -> (Option<i64>, Option<String>, Option<String>, Option<i16>) {
    (
        filter.dict_id,
        filter.dict_name.as_deref().map(contains_pattern),
        filter.dict_type.as_deref().map(contains_pattern),
        filter.status,
    )
}

#[async_trait]
impl DictTypeRepository for PgDictTypeRepository {
    async fn list(
        &self,
        filter: DictTypeFilter,
        page: Page,
    ) -> Result<(Vec<DictType>, i64), AppError> {
        let (dict_id, dict_name, dict_type, status) = filter_binds(&filter);

        let rows_query = sqlx::query_as::<_, DictTypeRow>(
            r#"
            SELECT dict_id, dict_name, dict_type, status, remark,
                   create_by, update_by, created_at, updated_at, deleted_at
            FROM sys_dict_type
            WHERE deleted_at IS NULL
              AND ($1::BIGINT IS NULL OR dict_id = $1)
              AND ($2::TEXT IS NULL OR dict_name ILIKE $2)
              AND ($3::TEXT IS NULL OR dict_type ILIKE $3)
              AND ($4::SMALLINT IS NULL OR status = $4)
            ORDER BY dict_id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(dict_id)
        .bind(dict_name.clone())
        .bind(dict_type.clone())
        .bind(status)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(self.pool.as_ref());

        let count_query = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM sys_dict_type
            WHERE deleted_at IS NULL
              AND ($1::BIGINT IS NULL OR dict_id = $1)
              AND ($2::TEXT IS NULL OR dict_name ILIKE $2)
              AND ($3::TEXT IS NULL OR dict_type ILIKE $3)
              AND ($4::SMALLINT IS NULL OR status = $4)
            "#,
        )
        .bind(dict_id)
        .bind(dict_name)
        .bind(dict_type)
        .bind(status)
        .fetch_one(self.pool.as_ref());

        let (rows, total) = tokio::try_join!(rows_query, count_query)?;

        Ok((rows.into_iter().map(DictType::from).collect(), total))
    }

    async fn list_all(&self, filter: DictTypeFilter) -> Result<Vec<DictType>, AppError> {
        let (dict_id, dict_name, dict_type, status) = filter_binds(&filter);

        let rows = sqlx::query_as::<_, DictTypeRow>(
            r#"
            SELECT dict_id, dict_name, dict_type, status, remark,
                   create_by, update_by, created_at, updated_at, deleted_at
            FROM sys_dict_type
            WHERE deleted_at IS NULL
              AND ($1::BIGINT IS NULL OR dict_id = $1)
              AND ($2::TEXT IS NULL OR dict_name ILIKE $2)
              AND ($3::TEXT IS NULL OR dict_type ILIKE $3)
              AND ($4::SMALLINT IS NULL OR status = $4)
            ORDER BY dict_id
            "#,
        )
        .bind(dict_id)
        .bind(dict_name)
        .bind(dict_type)
        .bind(status)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(DictType::from).collect())
    }

    async fn find_by_id(&self, dict_id: i64) -> Result<Option<DictType>, AppError> {
        let row = sqlx::query_as::<_, DictTypeRow>(
            r#"
            SELECT dict_id, dict_name, dict_type, status, remark,
                   create_by, update_by, created_at, updated_at, deleted_at
            FROM sys_dict_type
            WHERE dict_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(dict_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(DictType::from))
    }

    async fn exists_by_type(
        &self,
        dict_type: &str,
        excluding_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM sys_dict_type
                WHERE dict_type = $1
                  AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR dict_id <> $2)
            )
            "#,
        )
        .bind(dict_type)
        .bind(excluding_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn create(&self, new_dict_type: NewDictType) -> Result<DictType, AppError> {
        let row = sqlx::query_as::<_, DictTypeRow>(
            r#"
            INSERT INTO sys_dict_type (dict_name, dict_type, status, remark, create_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING dict_id, dict_name, dict_type, status, remark,
                      create_by, update_by, created_at, updated_at, deleted_at
            "#,
        )
        .bind(new_dict_type.dict_name)
        .bind(new_dict_type.dict_type)
        .bind(new_dict_type.status.as_i16())
        .bind(new_dict_type.remark)
        .bind(new_dict_type.create_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        dict_id: i64,
        patch: DictTypePatch,
    ) -> Result<Option<DictType>, AppError> {
        let row = sqlx::query_as::<_, DictTypeRow>(
            r#"
            UPDATE sys_dict_type SET
                dict_name  = $2,
                dict_type  = $3,
                status     = $4,
                remark     = $5,
                update_by  = $6,
                updated_at = NOW()
            WHERE dict_id = $1 AND deleted_at IS NULL
            RETURNING dict_id, dict_name, dict_type, status, remark,
                      create_by, update_by, created_at, updated_at, deleted_at
            "#,
        )
        .bind(dict_id)
        .bind(patch.dict_name)
        .bind(patch.dict_type)
        .bind(patch.status.as_i16())
        .bind(patch.remark)
        .bind(patch.update_by)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(DictType::from))
    }

    async fn soft_delete(&self, dict_ids: Vec<i64>, update_by: i64) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE sys_dict_type SET
                deleted_at = NOW(),
                update_by  = $2,
                updated_at = NOW()
            WHERE dict_id = ANY($1) AND deleted_at IS NULL
            "#,
        )
        .bind(dict_ids)
        .bind(update_by)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_value() {
        assert_eq!(contains_pattern("sex"), "%sex%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("sys_user"), "%sys\\_user%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
