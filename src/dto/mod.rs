//! DTO modules that bridge services with the JSON API.

pub mod catalog;
pub mod wallets;

use serde::Deserialize;
use validator::Validate;

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, PaginationRequest};

/// Highest page whose offset still fits an SQL `BIGINT` at the largest page size.
pub const MAX_PAGE: usize = i64::MAX as usize / MAX_ITEMS_PER_PAGE;

/// `page`/`limit` query parameters shared by list endpoints.
#[derive(Debug, Default, Clone, Copy, Deserialize, Validate)]
pub struct ListParams {
    #[validate(range(min = 1, max = MAX_PAGE))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = MAX_ITEMS_PER_PAGE))]
    pub limit: Option<usize>,
}

impl ListParams {
    /// A page without a size falls back to the default size; a size without a
    /// page, or neither, loads everything.
    pub fn pagination(&self) -> PaginationRequest {
        match (self.page, self.limit) {
            (Some(page), None) => PaginationRequest::new(page, DEFAULT_ITEMS_PER_PAGE),
            (page, limit) => PaginationRequest { page, limit },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_without_limit_uses_default_size() {
        let params = ListParams {
            page: Some(2),
            limit: None,
        };
        assert_eq!(
            params.pagination(),
            PaginationRequest::new(2, DEFAULT_ITEMS_PER_PAGE)
        );
    }

    #[test]
    fn limit_without_page_loads_everything() {
        let params = ListParams {
            page: None,
            limit: Some(10),
        };
        assert_eq!(params.pagination().page, None);
    }

    #[test]
    fn zero_and_oversized_values_are_invalid() {
        let zero = ListParams {
            page: Some(0),
            limit: Some(10),
        };
        assert!(zero.validate().is_err());

        let oversized = ListParams {
            page: Some(1),
            limit: Some(101),
        };
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn absurd_page_is_invalid() {
        let last = ListParams {
            page: Some(MAX_PAGE),
            limit: Some(MAX_ITEMS_PER_PAGE),
        };
        assert!(last.validate().is_ok());

        let absurd = ListParams {
            page: Some(usize::MAX / 50),
            limit: Some(MAX_ITEMS_PER_PAGE),
        };
        assert!(absurd.validate().is_err());

        let past_bigint = ListParams {
            page: Some(MAX_PAGE + 1),
            limit: Some(MAX_ITEMS_PER_PAGE),
        };
        assert!(past_bigint.validate().is_err());
    }
}
