//! Domain entity representing a dictionary type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a dictionary type.
///
/// Stored as a small integer: `1` = disabled, `2` = normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DictTypeStatus {
    Disabled = 1,
    #[default]
    Normal = 2,
}

impl DictTypeStatus {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for DictTypeStatus {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Disabled),
            2 => Ok(Self::Normal),
            other => Err(other),
        }
    }
}

/// A dictionary type: a named category grouping dictionary entries.
///
/// `dict_type` is the machine key referenced by dictionary data and by
/// front-end option lists; it is unique among non-deleted rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictType {
    pub dict_id: i64,
    pub dict_name: String,
    pub dict_type: String,
    pub status: i16,
    pub remark: Option<String>,
    pub create_by: i64,
    pub update_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DictType {
    /// Returns `true` if the status column holds the "normal" value.
    pub fn is_enabled(&self) -> bool {
        self.status == DictTypeStatus::Normal.as_i16()
    }
}

/// Input data for creating a dictionary type.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDictType {
    pub dict_name: String,
    pub dict_type: String,
    pub status: DictTypeStatus,
    pub remark: Option<String>,
    pub create_by: i64,
}

/// Replacement values for the editable columns of a dictionary type.
///
/// Updates overwrite every editable column; audit columns are maintained by
/// the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct DictTypePatch {
    pub dict_name: String,
    pub dict_type: String,
    pub status: DictTypeStatus,
    pub remark: Option<String>,
    pub update_by: i64,
}

/// Search criteria for dictionary type queries.
///
/// Text filters are case-insensitive substring matches; `None` or an empty
/// string disables the filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictTypeFilter {
    pub dict_id: Option<i64>,
    pub dict_name: Option<String>,
    pub dict_type: Option<String>,
    pub status: Option<i16>,
}

impl DictTypeFilter {
    /// Drops empty text filters so that `?dictName=` behaves like an absent parameter.
    pub fn normalized(mut self) -> Self {
        self.dict_name = self.dict_name.filter(|s| !s.trim().is_empty());
        self.dict_type = self.dict_type.filter(|s| !s.trim().is_empty());
        self
    }

    /// Returns `true` when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.dict_id.is_none()
            && self.dict_name.is_none()
            && self.dict_type.is_none()
            && self.status.is_none()
    }
}

/// Offset/limit window for paged queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }
}
