//! Table state, transitions, and the view model handed to a presentation layer
//!
//! State is owned by the caller. [`reduce`] is the only way it changes, and
//! [`TableView::build`] turns rows plus state into everything a renderer needs.

use crate::{
    config::TableConfig,
    pagination::{self, PageRange, PageState},
    sort,
    types::{ConversationRow, PageSize, RowKey, SortColumn, SortDirection, SortKey},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Tooltip shown on every sortable header
pub const SORT_TOOLTIP: &str = "Sort";

/// Per-session table state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableState {
    /// Active sort key
    pub sort: SortKey,
    /// Active page
    pub page: PageState,
}

impl TableState {
    /// Fresh state for a new session
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured default page size is invalid.
    pub fn from_config(config: &TableConfig) -> crate::Result<Self> {
        Ok(Self {
            sort: config.default_sort,
            page: PageState::new(0, config.initial_page_size()?),
        })
    }
}

/// User interaction that changes the table state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TableEvent {
    /// A column header was clicked
    SortRequested(SortColumn),
    /// The user navigated to a page
    PageChanged(usize),
    /// The user picked a different page size
    PageSizeChanged(PageSize),
}

/// Apply one event to the state
///
/// Sorting on the active column while it is descending switches to ascending;
/// any other sort request starts descending on the requested column. Neither
/// sort requests nor page size changes touch the page index.
#[must_use]
pub fn reduce(state: TableState, event: TableEvent) -> TableState {
    let next = match event {
        TableEvent::SortRequested(column) => {
            let direction = if state.sort.column == column
                && state.sort.direction == SortDirection::Descending
            {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };
            TableState {
                sort: SortKey::new(column, direction),
                ..state
            }
        }
        TableEvent::PageChanged(index) => TableState {
            page: PageState::new(index, state.page.size),
            ..state
        },
        TableEvent::PageSizeChanged(size) => TableState {
            page: PageState::new(state.page.index, size),
            ..state
        },
    };

    debug!(?event, ?next, "table state updated");
    next
}

/// Apply a sequence of events in order
#[must_use]
pub fn reduce_all<I>(state: TableState, events: I) -> TableState
where
    I: IntoIterator<Item = TableEvent>,
{
    events.into_iter().fold(state, reduce)
}

/// Assign every row a key that is unique even when dates repeat
#[must_use]
pub fn row_keys(rows: &[ConversationRow]) -> Vec<RowKey> {
    let mut seen: HashMap<chrono::NaiveDate, usize> = HashMap::new();
    rows.iter()
        .map(|row| {
            let occurrence = seen.entry(row.date).or_insert(0);
            let key = RowKey {
                date: row.date,
                occurrence: *occurrence,
            };
            *occurrence += 1;
            key
        })
        .collect()
}

/// Header cell of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// Column this header sorts by
    pub column: SortColumn,
    /// Display label
    pub label: String,
    /// Whether values are numeric
    pub numeric: bool,
    /// Whether this column is the active sort column
    pub active: bool,
    /// Direction indicator shown on the header
    pub direction: SortDirection,
    /// Tooltip text
    pub tooltip: String,
}

/// A row on the visible page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRow {
    /// Stable identity for list rendering
    pub key: RowKey,
    /// The row itself
    pub row: ConversationRow,
}

/// Pagination control state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationView {
    /// Zero-based page index, unclamped
    pub page: usize,
    /// Rows per page
    pub page_size: PageSize,
    /// Sizes offered to the user
    pub page_size_options: Vec<usize>,
    /// Total number of rows
    pub total_rows: usize,
    /// Number of pages holding rows
    pub page_count: usize,
    /// One-based range shown, as in "1-5 of 7"
    pub range: PageRange,
    /// Whether the "previous page" control is enabled
    pub has_previous: bool,
    /// Whether the "next page" control is enabled
    pub has_next: bool,
}

/// Snapshot of the table for a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Table title
    pub title: String,
    /// Header cells in display order
    pub columns: Vec<HeaderCell>,
    /// Rows on the current page
    pub rows: Vec<VisibleRow>,
    /// Blank rows to render after `rows`
    pub filler_count: usize,
    /// Total height of the filler block in pixels
    pub filler_height_px: u32,
    /// Pagination control state
    pub pagination: PaginationView,
}

impl TableView {
    /// Sort and paginate `rows` under `state`
    #[must_use]
    pub fn build(rows: &[ConversationRow], state: &TableState, config: &TableConfig) -> Self {
        let keys = row_keys(rows);
        let ordered: Vec<VisibleRow> = sort::sort_indices(rows, state.sort)
            .into_iter()
            .filter_map(|index| {
                Some(VisibleRow {
                    key: *keys.get(index)?,
                    row: rows.get(index)?.clone(),
                })
            })
            .collect();

        let window = pagination::paginate(&ordered, state.page.index, state.page.size);
        let filler_count = window.filler_count;
        let visible = window.visible.to_vec();

        let columns = SortColumn::ALL
            .into_iter()
            .map(|column| HeaderCell {
                column,
                label: column.label().to_string(),
                numeric: column.is_numeric(),
                active: state.sort.column == column,
                direction: state.sort.direction,
                tooltip: SORT_TOOLTIP.to_string(),
            })
            .collect();

        let total_rows = rows.len();
        let pagination = PaginationView {
            page: state.page.index,
            page_size: state.page.size,
            page_size_options: config.page_size_options.clone(),
            total_rows,
            page_count: pagination::page_count(total_rows, state.page.size),
            range: PageRange::new(state.page, total_rows),
            has_previous: pagination::has_previous(state.page.index),
            has_next: pagination::has_next(state.page.index, total_rows, state.page.size),
        };

        let filler_height_px =
            u32::try_from(filler_count).map_or(u32::MAX, |n| n.saturating_mul(config.row_height_px));

        Self {
            title: config.title.clone(),
            columns,
            rows: visible,
            filler_count,
            filler_height_px,
            pagination,
        }
    }

    /// Rows on the current page without their keys
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&ConversationRow> {
        self.rows.iter().map(|visible| &visible.row).collect()
    }
}
