//! Table session owning rows, configuration, and state

use crate::{
    config::TableConfig,
    pagination,
    table::{self, TableEvent, TableState, TableView},
    types::{ConversationRow, SortColumn},
};
use tracing::info;

/// One viewing session of a table
///
/// Rows are read-only for the life of the session. Every interaction goes
/// through [`table::reduce`].
#[derive(Debug, Clone)]
pub struct TableSession {
    config: TableConfig,
    rows: Vec<ConversationRow>,
    state: TableState,
}

impl TableSession {
    /// Start a session with the configured default sort and page size
    ///
    /// # Errors
    ///
    /// Returns an error if the table configuration is invalid.
    pub fn new(config: TableConfig, rows: Vec<ConversationRow>) -> crate::Result<Self> {
        config.validate()?;
        let state = TableState::from_config(&config)?;

        info!(
            rows = rows.len(),
            page_size = %state.page.size,
            sort_column = %state.sort.column,
            "table session started"
        );

        Ok(Self {
            config,
            rows,
            state,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// Rows in input order
    #[must_use]
    pub fn rows(&self) -> &[ConversationRow] {
        &self.rows
    }

    /// Table configuration
    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Apply an already validated event
    pub fn apply(&mut self, event: TableEvent) {
        self.state = table::reduce(self.state, event);
    }

    /// Handle a click on a column header
    pub fn request_sort(&mut self, column: SortColumn) {
        self.apply(TableEvent::SortRequested(column));
    }

    /// Navigate to a page; the index is not checked against the data
    pub fn change_page(&mut self, index: usize) {
        self.apply(TableEvent::PageChanged(index));
    }

    /// Switch to another configured page size, keeping the page index
    ///
    /// # Errors
    ///
    /// Returns a validation error if `size` is not one of the configured options.
    pub fn change_page_size(&mut self, size: usize) -> crate::Result<()> {
        let size = self.config.page_size(size)?;
        self.apply(TableEvent::PageSizeChanged(size));
        Ok(())
    }

    /// View of the current page
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::build(&self.rows, &self.state, &self.config)
    }

    /// Views of every page holding rows under the current sort
    ///
    /// An empty table yields a single empty page.
    #[must_use]
    pub fn pages(&self) -> Vec<TableView> {
        let count = pagination::page_count(self.rows.len(), self.state.page.size).max(1);
        (0..count)
            .map(|index| {
                let state = table::reduce(self.state, TableEvent::PageChanged(index));
                TableView::build(&self.rows, &state, &self.config)
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::{SortDirection, SortKey};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn rows(n: u32) -> Vec<ConversationRow> {
        (1..=n)
            .map(|d| ConversationRow::new(NaiveDate::from_ymd_opt(2024, 6, d).unwrap(), 10 - d, 0, d))
            .collect()
    }

    #[test]
    fn test_session_defaults() {
        let session = TableSession::new(TableConfig::default(), rows(3)).unwrap();

        assert_eq!(session.state().sort, SortKey::default());
        assert_eq!(session.state().page.index, 0);
        assert_eq!(session.rows().len(), 3);
    }

    #[test]
    fn test_session_rejects_invalid_config() {
        let config = TableConfig {
            page_size_options: Vec::new(),
            ..TableConfig::default()
        };
        assert!(TableSession::new(config, rows(3)).is_err());
    }

    #[test]
    fn test_session_sort_and_page() {
        let mut session = TableSession::new(TableConfig::default(), rows(7)).unwrap();
        session.request_sort(SortColumn::ConversationCount);
        session.request_sort(SortColumn::ConversationCount);
        session.change_page(1);

        assert_eq!(
            session.state().sort,
            SortKey::new(SortColumn::ConversationCount, SortDirection::Ascending)
        );
        let view = session.view();
        // Ascending count is descending date here
        let counts: Vec<u32> = view.rows.iter().map(|r| r.row.conversation_count).collect();
        assert_eq!(counts, vec![8, 9]);
        assert_eq!(view.filler_count, 3);
    }

    #[test]
    fn test_session_page_size_must_be_configured() {
        let mut session = TableSession::new(TableConfig::default(), rows(7)).unwrap();
        assert!(session.change_page_size(10).is_err());
        assert!(session.change_page_size(5).is_ok());

        let config = TableConfig {
            page_size_options: vec![5, 10],
            ..TableConfig::default()
        };
        let mut session = TableSession::new(config, rows(7)).unwrap();
        session.change_page(1);
        session.change_page_size(10).unwrap();

        // Page index is kept, so page 1 of size 10 is past the end
        let view = session.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.filler_count, 10);
    }

    #[test]
    fn test_pages_cover_all_rows() {
        let session = TableSession::new(TableConfig::default(), rows(7)).unwrap();
        let pages = session.pages();

        assert_eq!(pages.len(), 2);
        let total: usize = pages.iter().map(|page| page.rows.len()).sum();
        assert_eq!(total, 7);
        assert_eq!(pages[1].filler_count, 3);
    }

    #[test]
    fn test_pages_of_empty_table() {
        let session = TableSession::new(TableConfig::default(), Vec::new()).unwrap();
        let pages = session.pages();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].filler_count, 5);
    }
}
