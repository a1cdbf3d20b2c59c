//! Pagination window over sorted rows

use crate::types::PageSize;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current page and page size
///
/// The page index is never clamped. A stale index past the end of the data
/// produces an empty page filled entirely with filler rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageState {
    /// Zero-based page index
    pub index: usize,
    /// Rows per page
    pub size: PageSize,
}

impl PageState {
    /// Create a page state
    #[must_use]
    pub const fn new(index: usize, size: PageSize) -> Self {
        Self { index, size }
    }

    /// Offset of the first row on this page
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.index.saturating_mul(self.size.get())
    }
}

/// Visible slice of a page plus the number of blank rows after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    /// Rows shown on this page
    pub visible: &'a [T],
    /// Blank placeholder rows keeping the table height constant
    pub filler_count: usize,
}

/// Cut the page at `page_index` out of `rows`
///
/// `visible.len() + filler_count` always equals the page size.
#[must_use]
pub fn paginate<T>(rows: &[T], page_index: usize, page_size: PageSize) -> PageWindow<'_, T> {
    let size = page_size.get();
    let start = page_index.saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());
    let visible = rows.get(start..end).unwrap_or_default();
    let filler_count = size - visible.len();

    debug!(
        page_index,
        page_size = size,
        total_rows = rows.len(),
        visible = visible.len(),
        filler_count,
        "paginated rows"
    );

    PageWindow {
        visible,
        filler_count,
    }
}

/// Number of pages needed to show `total_rows`
#[must_use]
pub const fn page_count(total_rows: usize, page_size: PageSize) -> usize {
    total_rows.div_ceil(page_size.get())
}

/// Whether a page before `page_index` exists
#[must_use]
pub const fn has_previous(page_index: usize) -> bool {
    page_index > 0
}

/// Whether a page after `page_index` holds rows
#[must_use]
pub const fn has_next(page_index: usize, total_rows: usize, page_size: PageSize) -> bool {
    page_index.saturating_add(1) < page_count(total_rows, page_size)
}

/// One-based range of rows shown on a page, as in "6-7 of 7"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// First row shown, one-based; zero on an empty page
    pub from: usize,
    /// Last row shown, one-based; zero on an empty page
    pub to: usize,
    /// Total number of rows
    pub count: usize,
}

impl PageRange {
    /// Range for `page` over `total_rows`
    #[must_use]
    pub const fn new(page: PageState, total_rows: usize) -> Self {
        let offset = page.offset();
        if offset >= total_rows {
            return Self {
                from: 0,
                to: 0,
                count: total_rows,
            };
        }
        let end = offset.saturating_add(page.size.get());
        Self {
            from: offset + 1,
            to: if end < total_rows { end } else { total_rows },
            count: total_rows,
        }
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} of {}", self.from, self.to, self.count)
    }
}
