//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::Page;

/// Page size used when `pageSize` is absent or not positive.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest accepted `pageSize`.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Pagination query parameters (`pageIndex`, `pageSize`).
///
/// Uses `serde_with` so that numbers parse from query strings even when the
/// struct is flattened, and so that empty values (`?pageIndex=`) count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page_index: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Effective page index; absent or non-positive values fall back to 1.
    pub fn page_index(&self) -> i64 {
        match self.page_index {
            Some(index) if index > 0 => index,
            _ => 1,
        }
    }

    /// Effective page size; absent or non-positive values fall back to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn page_size(&self) -> i64 {
        match self.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Validates pagination parameters and converts them to an offset/limit window.
    ///
    /// # Validation
    ///
    /// - Page size must not exceed [`MAX_PAGE_SIZE`]
    /// - The resulting offset must fit in an `i64`
    pub fn validate_and_get_page(&self) -> Result<Page, String> {
        let page_index = self.page_index();
        let page_size = self.page_size();

        if page_size > MAX_PAGE_SIZE {
            return Err(format!("Page size must be at most {MAX_PAGE_SIZE}"));
        }

        let offset = (page_index - 1)
            .checked_mul(page_size)
            .ok_or_else(|| "Page index is too large".to_string())?;

        Ok(Page::new(offset, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page_index: Option<i64>, page_size: Option<i64>) -> PaginationParams {
        PaginationParams {
            page_index,
            page_size,
        }
    }

    #[test]
    fn test_defaults() {
        let page = params(None, None).validate_and_get_page().unwrap();
        assert_eq!(page, Page::new(0, 10));
    }

    #[test]
    fn test_second_page() {
        let page = params(Some(2), Some(20)).validate_and_get_page().unwrap();
        assert_eq!(page, Page::new(20, 20));
    }

    #[test]
    fn test_non_positive_values_fall_back() {
        let p = params(Some(0), Some(-5));
        assert_eq!(p.page_index(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.validate_and_get_page().unwrap(), Page::new(0, 10));
    }

    #[test]
    fn test_page_size_at_maximum_is_ok() {
        assert!(params(None, Some(1000)).validate_and_get_page().is_ok());
    }

    #[test]
    fn test_page_size_above_maximum_is_error() {
        assert!(params(None, Some(1001)).validate_and_get_page().is_err());
    }

    #[test]
    fn test_huge_page_index_is_error() {
        assert!(params(Some(i64::MAX), Some(1000)).validate_and_get_page().is_err());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"pageIndex": "", "pageSize": "25"}"#).unwrap();
        assert!(p.page_index.is_none());
        assert_eq!(p.page_size, Some(25));
    }

    #[test]
    fn test_non_numeric_is_error() {
        assert!(serde_json::from_str::<PaginationParams>(r#"{"pageIndex": "abc"}"#).is_err());
    }
}
