//! Shared pagination types for API query parameters.
//!
//! Listings use 1-based page pagination with `page_number` and `page_size`. Both are clamped
//! before any query runs, so `offset()` never goes negative and `page_size()` never divides by
//! zero when computing `total_pages`.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

/// Default page number when none is requested.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Default number of items to return per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of items that can be requested per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page pagination parameters for listing endpoints.
///
/// - `page_number`: 1-based page index (default: 1, values below 1 are treated as 1)
/// - `page_size`: items per page (default: 10, clamped to 1..=100)
#[serde_as]
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams, ToSchema)]
pub struct Pagination {
    /// 1-based page index (default: 1)
    #[param(default = 1, minimum = 1)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page_number: Option<i64>,

    /// Items per page (default: 10, max: 100)
    #[param(default = 10, minimum = 1, maximum = 100)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page_size: Option<i64>,
}

impl Pagination {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    /// Get the page number, at least 1.
    #[inline]
    pub fn page_number(&self) -> i64 {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER).max(1)
    }

    /// Get the page size, clamped between 1 and MAX_PAGE_SIZE.
    #[inline]
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Number of rows to skip: `(page_number - 1) * page_size`.
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page_number() - 1).saturating_mul(self.page_size())
    }

    /// Row limit for the page query.
    #[inline]
    pub fn limit(&self) -> i64 {
        self.page_size()
    }
}

/// `ceil(total_count / page_size)`, zero when there is nothing to page through.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if total_count <= 0 {
        return 0;
    }
    let page_size = page_size.max(1);
    (total_count + page_size - 1) / page_size
}

/// One page of a listing with derived navigation metadata.
///
/// `page_number` and `page_size` echo the values actually used. A request for more than
/// [`MAX_PAGE_SIZE`] items is served with `page_size == MAX_PAGE_SIZE`, so clients should
/// read the echoed size rather than assume theirs was honored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Page<T: ToSchema> {
    /// The items for the current page
    pub items: Vec<T>,
    /// Total number of items matching the filters (before pagination)
    pub total_count: i64,
    /// Page index that was served (after clamping)
    pub page_number: i64,
    /// Page size that was applied, at most [`MAX_PAGE_SIZE`]
    pub page_size: i64,
    pub total_pages: i64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T: ToSchema> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64, pagination: &Pagination) -> Self {
        let page_number = pagination.page_number();
        let page_size = pagination.page_size();
        let total_pages = total_pages(total_count, page_size);

        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }

    /// Convert the items while keeping the page metadata.
    pub fn map<U: ToSchema>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let p = Pagination::default();
        assert_eq!(p.page_number(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_page_size_clamping() {
        // Zero is clamped to 1
        assert_eq!(Pagination::new(1, 0).page_size(), 1);

        // Negative is clamped to 1
        assert_eq!(Pagination::new(1, -5).page_size(), 1);

        // Over max is clamped to MAX_PAGE_SIZE
        assert_eq!(Pagination::new(1, 1000).page_size(), MAX_PAGE_SIZE);

        // Valid value passes through
        assert_eq!(Pagination::new(1, 50).page_size(), 50);
    }

    #[test]
    fn test_page_number_clamping() {
        assert_eq!(Pagination::new(0, 10).page_number(), 1);
        assert_eq!(Pagination::new(-3, 10).page_number(), 1);
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(5, 7).offset(), 28);
        assert_eq!(Pagination::new(3, 25).limit(), 25);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(100, 1), 100);

        for count in 0..=60 {
            for size in 1..=12 {
                let expected = (count as f64 / size as f64).ceil() as i64;
                assert_eq!(total_pages(count, size), expected, "count={count} size={size}");
            }
        }
    }

    #[test]
    fn test_page_navigation_flags() {
        let page: Page<i64> = Page::new(vec![11, 12, 13, 14, 15], 15, &Pagination::new(2, 10));
        assert_eq!(page.total_pages, 2);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);

        let page: Page<i64> = Page::new(vec![1, 2], 2, &Pagination::new(1, 10));
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);

        let page: Page<i64> = Page::new(vec![], 0, &Pagination::default());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_beyond_last_page_keeps_true_total() {
        let page: Page<i64> = Page::new(vec![], 15, &Pagination::new(7, 10));
        assert_eq!(page.total_count, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page_number, 7);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_page_echoes_clamped_values() {
        let page: Page<i64> = Page::new(vec![], 0, &Pagination::new(0, 500));
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page: Page<i64> = Page::new(vec![1, 2, 3], 13, &Pagination::new(1, 3));
        let mapped: Page<String> = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total_pages, 5);
        assert!(mapped.has_next_page);
    }
}
