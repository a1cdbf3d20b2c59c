//! Sorting, pagination, and table state for daily conversation metrics
//!
//! Rows flow through a stable [`sort`](sort::sort), then a
//! [`paginate`](pagination::paginate) window, and end up in a
//! [`TableView`](table::TableView) for whatever presentation layer is in use.
//! State changes go through [`reduce`](table::reduce).

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod pagination;
pub mod session;
pub mod sort;
pub mod table;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, TableConfig};
pub use error::{Error, Result};
pub use pagination::{PageRange, PageState, PageWindow, paginate};
pub use session::TableSession;
pub use table::{TableEvent, TableState, TableView, reduce};
pub use types::{ConversationRow, PageSize, RowKey, SortColumn, SortDirection, SortKey};

/// Initialize the logging system
///
/// `RUST_LOG` overrides the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if config.format == "json" {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("failed to initialize logging: {e}")))
}
