//! Conversation metrics table viewer
//!
//! Loads daily conversation metrics from a JSON or CSV file and prints a
//! sorted, paginated table.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convo_cli::{OutputFormat, ViewRequest, build_session, render};
use convo_core::{Config, SortColumn, utils::load_rows};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command line interface for the conversation metrics table
#[derive(Parser)]
#[command(
    name = "convo-table",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sortable, paginated table of daily conversation metrics",
    long_about = "Loads daily conversation metrics from a JSON or CSV file and prints them as a sortable, paginated table."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Enable structured JSON logging
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Show a single page
    Show {
        /// Data file (.json or .csv)
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Click a column header; repeat to click again
        #[arg(short, long = "sort", value_name = "COLUMN")]
        sorts: Vec<SortColumn>,

        /// Zero-based page index
        #[arg(short, long)]
        page: Option<usize>,

        /// Rows per page, must be a configured option
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show every page
    Pages {
        /// Data file (.json or .csv)
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Click a column header; repeat to click again
        #[arg(short, long = "sort", value_name = "COLUMN")]
        sorts: Vec<SortColumn>,

        /// Rows per page, must be a configured option
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Inspect configuration
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,

        /// Validate configuration
        #[arg(short, long)]
        validate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.json {
        config.logging.format = "json".to_string();
    } else if let Some(format) = &cli.log_format {
        config.logging.format.clone_from(format);
    }
    config
        .validate()
        .context("invalid logging options on the command line")?;

    convo_core::init_logging(&config.logging).context("failed to initialize logging")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.logging.level,
        "convo-table starting"
    );

    match cli.command {
        Commands::Show {
            data,
            sorts,
            page,
            page_size,
            format,
        } => {
            let request = ViewRequest {
                sorts,
                page_size,
                page,
            };
            show_page(config, &data, &request, format)
        }
        Commands::Pages {
            data,
            sorts,
            page_size,
            format,
        } => {
            let request = ViewRequest {
                sorts,
                page_size,
                page: None,
            };
            show_pages(config, &data, &request, format)
        }
        Commands::Config { show, validate } => handle_config_command(&config, show, validate),
    }
}

/// Load configuration from a file, or from `convo.toml` and the environment
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Config::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    } else {
        Config::load().context("failed to load configuration")
    }
}

/// Print the requested page
fn show_page(config: Config, data: &Path, request: &ViewRequest, format: OutputFormat) -> Result<()> {
    let rows = load_rows(data).with_context(|| format!("failed to load {}", data.display()))?;
    let session = build_session(config.table, rows, request)?;

    let view = session.view();
    if view.rows.is_empty() && view.pagination.total_rows > 0 {
        warn!(
            page = view.pagination.page,
            page_count = view.pagination.page_count,
            "requested page is past the end of the data"
        );
    }

    print!("{}", render(&view, format)?);
    Ok(())
}

/// Print every page under the requested sort
fn show_pages(config: Config, data: &Path, request: &ViewRequest, format: OutputFormat) -> Result<()> {
    let rows = load_rows(data).with_context(|| format!("failed to load {}", data.display()))?;
    let session = build_session(config.table, rows, request)?;
    let pages = session.pages();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pages)?),
        OutputFormat::Text => {
            for (index, view) in pages.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                print!("{}", render(view, format)?);
            }
        }
    }
    Ok(())
}

/// Handle configuration commands
fn handle_config_command(config: &Config, show: bool, validate: bool) -> Result<()> {
    if validate {
        config.validate().context("configuration is invalid")?;
        info!("Configuration validation completed");
        println!("Configuration is valid");
    }

    if show {
        let config_toml =
            toml::to_string_pretty(config).context("failed to serialize configuration")?;
        println!("{config_toml}");
    }

    Ok(())
}
