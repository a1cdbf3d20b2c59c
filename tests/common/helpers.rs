//! Test helper functions and utilities

use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Write `content` to a temporary file ending in `suffix`
pub fn write_data_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Day-of-month of every row in a slice, for compact assertions
pub fn days<'a, I>(rows: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a convo_core::ConversationRow>,
{
    use chrono::Datelike;
    rows.into_iter().map(|row| row.date.day()).collect()
}
