//! DTOs for dictionary type endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::application::services::DictTypeInput;
use crate::domain::entities::{DictType, DictTypeFilter};

/// Compiled regex for dictionary type keys (`sys_user_sex`, `orderStatus`, ...).
static DICT_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Dictionary type as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictTypeItem {
    pub dict_id: i64,
    pub dict_name: String,
    pub dict_type: String,
    pub status: i16,
    pub remark: Option<String>,
    pub create_by: i64,
    pub update_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DictType> for DictTypeItem {
    fn from(d: DictType) -> Self {
        Self {
            dict_id: d.dict_id,
            dict_name: d.dict_name,
            dict_type: d.dict_type,
            status: d.status,
            remark: d.remark,
            create_by: d.create_by,
            update_by: d.update_by,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Search query for the list and option-select endpoints.
///
/// `dictName` and `dictType` match case-insensitive substrings; `dictId` and
/// `status` match exactly. Empty values are ignored.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictTypeSearchParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub dict_id: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub dict_name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub dict_type: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub status: Option<i16>,
}

impl DictTypeSearchParams {
    /// Extracts the search criteria, leaving pagination aside.
    pub fn filter(&self) -> DictTypeFilter {
        DictTypeFilter {
            dict_id: self.dict_id,
            dict_name: self.dict_name.clone(),
            dict_type: self.dict_type.clone(),
            status: self.status,
        }
    }
}

/// Request body for creating or updating a dictionary type.
///
/// On update the dictionary type ID always comes from the path.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DictTypeRequest {
    #[validate(length(min = 1, max = 128, message = "dictName must be 1-128 characters"))]
    pub dict_name: String,

    #[validate(
        length(min = 1, max = 128, message = "dictType must be 1-128 characters"),
        regex(
            path = "*DICT_TYPE_REGEX",
            message = "dictType must start with a letter and contain only letters, digits and underscores"
        )
    )]
    pub dict_type: String,

    /// `2` = normal, `1` = disabled. Defaults to normal.
    pub status: Option<i16>,

    #[validate(length(max = 255, message = "remark must be at most 255 characters"))]
    pub remark: Option<String>,
}

impl From<DictTypeRequest> for DictTypeInput {
    fn from(r: DictTypeRequest) -> Self {
        Self {
            dict_name: r.dict_name,
            dict_type: r.dict_type,
            status: r.status,
            remark: r.remark,
        }
    }
}

/// Request body for batch deletion. At most 1000 ids, like `pageSize`.
#[derive(Debug, Deserialize, Validate)]
pub struct DictTypeIdsRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "ids must contain between 1 and 1000 entries"
    ))]
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(dict_type: &str) -> DictTypeRequest {
        DictTypeRequest {
            dict_name: "Order status".to_string(),
            dict_type: dict_type.to_string(),
            status: None,
            remark: None,
        }
    }

    #[test]
    fn test_valid_dict_type_keys() {
        assert!(request("sys_user_sex").validate().is_ok());
        assert!(request("orderStatus2").validate().is_ok());
    }

    #[test]
    fn test_invalid_dict_type_keys() {
        assert!(request("1_starts_with_digit").validate().is_err());
        assert!(request("has-dash").validate().is_err());
        assert!(request("has space").validate().is_err());
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_dict_name_too_long() {
        let mut r = request("order_status");
        r.dict_name = "x".repeat(129);
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_request_uses_camel_case() {
        let r: DictTypeRequest = serde_json::from_value(json!({
            "dictName": "Order status",
            "dictType": "order_status",
            "status": 1,
            "remark": "shown on the order page"
        }))
        .unwrap();

        assert_eq!(r.dict_type, "order_status");
        assert_eq!(r.status, Some(1));
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let now = Utc::now();
        let item = DictTypeItem::from(DictType {
            dict_id: 3,
            dict_name: "System yes/no".to_string(),
            dict_type: "sys_yes_no".to_string(),
            status: 2,
            remark: None,
            create_by: 1,
            update_by: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["dictId"], 3);
        assert_eq!(value["dictType"], "sys_yes_no");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("deletedAt").is_none());
    }

    #[test]
    fn test_search_params_ignore_empty_values() {
        let params: DictTypeSearchParams = serde_json::from_value(json!({
            "dictName": "",
            "dictType": "sex",
            "status": "2",
            "pageIndex": "3"
        }))
        .unwrap();

        let filter = params.filter();
        assert!(filter.dict_name.is_none());
        assert_eq!(filter.dict_type.as_deref(), Some("sex"));
        assert_eq!(filter.status, Some(2));
        assert_eq!(params.pagination.page_index(), 3);
    }

    #[test]
    fn test_ids_request_requires_ids() {
        let r = DictTypeIdsRequest { ids: vec![] };
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_ids_request_is_capped() {
        let at_cap = DictTypeIdsRequest {
            ids: (1..=1000).collect(),
        };
        assert!(at_cap.validate().is_ok());

        let over_cap = DictTypeIdsRequest {
            ids: (1..=1001).collect(),
        };
        assert!(over_cap.validate().is_err());
    }
}
