//! Replaying command line requests against a table session

use convo_core::{ConversationRow, Result, SortColumn, TableConfig, TableSession};
use tracing::debug;

/// Interactions requested on the command line, applied in a fixed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRequest {
    /// Header clicks, in order
    pub sorts: Vec<SortColumn>,
    /// Page size to switch to
    pub page_size: Option<usize>,
    /// Page to navigate to
    pub page: Option<usize>,
}

/// Start a session and apply `request` to it
///
/// Sort clicks are applied first, then the page size, then the page, which is
/// the order a user would reach the same view in.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the page size is not
/// one of the configured options.
pub fn build_session(
    config: TableConfig,
    rows: Vec<ConversationRow>,
    request: &ViewRequest,
) -> Result<TableSession> {
    let mut session = TableSession::new(config, rows)?;

    for &column in &request.sorts {
        session.request_sort(column);
    }
    if let Some(size) = request.page_size {
        session.change_page_size(size)?;
    }
    if let Some(page) = request.page {
        session.change_page(page);
    }

    debug!(state = ?session.state(), "replayed view request");
    Ok(session)
}
