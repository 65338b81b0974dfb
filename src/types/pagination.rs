//! Pagination types for list endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, PRODUCTS_PER_PAGE};

/// Pagination query parameters.
///
/// Page size is fixed server-side; only the page number is client controlled.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-indexed page number; missing or unparsable values mean page 1
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    #[param(example = 1)]
    pub page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

/// Query values arrive as strings; anything that is not a number falls back to page 1.
fn lenient_page<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(DEFAULT_PAGE_NUMBER))
}

impl PaginationParams {
    pub fn new(page: u64) -> Self {
        Self { page }
    }

    /// Requested page, clamped to at least 1
    pub fn page(&self) -> u64 {
        self.page.max(DEFAULT_PAGE_NUMBER)
    }

    /// Items per page
    pub fn per_page(&self) -> u64 {
        PRODUCTS_PER_PAGE
    }
}

/// One page of items plus its metadata
#[derive(Debug)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_treated_as_first_page() {
        let params = PaginationParams::new(0);

        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_page_size_is_fixed() {
        let params = PaginationParams::new(7);

        assert_eq!(params.per_page(), 25);
        assert_eq!(params.page(), 7);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Paginated<u32> = Paginated::new(vec![], 1, 25, 26);
        assert_eq!(page.meta.total_pages, 2);

        let page: Paginated<u32> = Paginated::new(vec![], 1, 25, 25);
        assert_eq!(page.meta.total_pages, 1);

        let page: Paginated<u32> = Paginated::new(vec![], 1, 25, 0);
        assert_eq!(page.meta.total_pages, 0);
    }

    #[test]
    fn test_query_page_parsing_is_lenient() {
        let params: PaginationParams = serde_json::from_str(r#"{"page": "3"}"#).unwrap();
        assert_eq!(params.page(), 3);

        let params: PaginationParams = serde_json::from_str(r#"{"page": "abc"}"#).unwrap();
        assert_eq!(params.page(), 1);

        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page(), 1);
    }
}
