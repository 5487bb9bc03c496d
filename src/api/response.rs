//! Uniform JSON envelope for API responses.
//!
//! Successful and failed requests share one shape:
//!
//! ```json
//! { "code": 200, "msg": "Query succeeded", "data": { ... } }
//! ```
//!
//! `code` mirrors the HTTP status. Paged endpoints wrap their rows in
//! [`PageResult`].

use axum::Json;
use serde::Serialize;

/// Response body wrapper shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: u16,
    pub msg: String,
    pub data: T,
}

/// Handler return type for envelope responses.
pub type ApiResult<T> = Result<Json<Envelope<T>>, crate::error::AppError>;

impl<T: Serialize> Envelope<T> {
    /// Wraps `data` in a `200` envelope.
    pub fn ok(data: T, msg: impl Into<String>) -> Json<Self> {
        Json(Self {
            code: 200,
            msg: msg.into(),
            data,
        })
    }
}

/// One page of results with the total number of matching rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T: Serialize> {
    pub list: Vec<T>,
    pub count: i64,
    pub page_index: i64,
    pub page_size: i64,
}

impl<T: Serialize> Envelope<PageResult<T>> {
    /// Wraps a page of rows in a `200` envelope.
    pub fn page_ok(
        list: Vec<T>,
        count: i64,
        page_index: i64,
        page_size: i64,
        msg: impl Into<String>,
    ) -> Json<Self> {
        Self::ok(
            PageResult {
                list,
                count,
                page_index,
                page_size,
            },
            msg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let Json(body) = Envelope::ok(7, "Created successfully");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"code": 200, "msg": "Created successfully", "data": 7})
        );
    }

    #[test]
    fn test_page_envelope_uses_camel_case() {
        let Json(body) = Envelope::page_ok(vec!["a", "b"], 12, 2, 10, "Query succeeded");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["data"]["list"], json!(["a", "b"]));
        assert_eq!(value["data"]["count"], 12);
        assert_eq!(value["data"]["pageIndex"], 2);
        assert_eq!(value["data"]["pageSize"], 10);
    }
}
