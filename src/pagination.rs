//! Page/limit arithmetic shared by every list endpoint.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Client supplied page number (1-based) and page size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl PaginationRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// Offset and size to apply to a data-access query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationPlan {
    pub skip: Option<usize>,
    pub take: Option<usize>,
    pub should_paginate: bool,
}

impl PaginationPlan {
    /// Plan that loads the whole result set.
    pub const fn all() -> Self {
        Self {
            skip: None,
            take: None,
            should_paginate: false,
        }
    }
}

/// Page summary returned next to the items of a list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationEnvelope {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Turns `page`/`limit` into `skip`/`take`.
///
/// Pagination only happens when both values are present. Bounds are not
/// checked; request forms reject `page < 1` and `limit < 1` before this runs.
pub fn calculate_pagination(request: PaginationRequest) -> PaginationPlan {
    match (request.page, request.limit) {
        (Some(page), Some(limit)) => PaginationPlan {
            skip: Some(page.saturating_sub(1).saturating_mul(limit)),
            take: Some(limit),
            should_paginate: true,
        },
        _ => PaginationPlan::all(),
    }
}

pub fn create_pagination_response(total: usize, page: usize, limit: usize) -> PaginationEnvelope {
    let total_pages = if limit == 0 {
        log::warn!("Pagination requested with a zero page size (total = {total})");
        0
    } else {
        total.div_ceil(limit)
    };

    PaginationEnvelope {
        total,
        page,
        limit,
        total_pages,
    }
}

/// Envelope describing an unpaginated result as a single page.
pub fn create_all_data_pagination_response(total: usize) -> PaginationEnvelope {
    PaginationEnvelope {
        total,
        page: 1,
        limit: total,
        total_pages: 1,
    }
}

/// JSON body of a list endpoint.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationEnvelope,
}

impl<T> Paginated<T> {
    /// Builds the body for `items` loaded under `request`.
    pub fn new(items: Vec<T>, total: usize, request: PaginationRequest) -> Self {
        let pagination = match (request.page, request.limit) {
            (Some(page), Some(limit)) => create_pagination_response(total, page, limit),
            _ => create_all_data_pagination_response(total),
        };

        Self { items, pagination }
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
