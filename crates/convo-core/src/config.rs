//! Configuration management for the conversation metrics table

use crate::types::{PageSize, SortKey};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Table presentation configuration
    #[serde(default)]
    pub table: TableConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Title shown above the table
    #[serde(default = "default_title")]
    pub title: String,

    /// Page sizes the user may pick from
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    /// Page size a new session starts with
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Sort key a new session starts with
    #[serde(default)]
    pub default_sort: SortKey,

    /// Height of one body row in pixels, used to size filler rows
    #[serde(default = "default_row_height_px")]
    pub row_height_px: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_title() -> String {
    "Conversation data".to_string()
}

fn default_page_size_options() -> Vec<usize> {
    vec![5]
}

const fn default_page_size() -> usize {
    5
}

const fn default_row_height_px() -> u32 {
    49
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_size_options: default_page_size_options(),
            default_page_size: default_page_size(),
            default_sort: SortKey::default(),
            row_height_px: default_row_height_px(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TableConfig {
    /// Check that the page size options are usable
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are empty, contain zero,
    /// or do not include the default page size.
    pub fn validate(&self) -> crate::Result<()> {
        if self.page_size_options.is_empty() {
            return Err(crate::Error::configuration(
                "table.page_size_options must not be empty",
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(crate::Error::configuration(
                "table.page_size_options must not contain zero",
            ));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(crate::Error::configuration(format!(
                "table.default_page_size {} is not one of {:?}",
                self.default_page_size, self.page_size_options
            )));
        }
        Ok(())
    }

    /// Turn a requested page size into a [`PageSize`] allowed by this table
    ///
    /// # Errors
    ///
    /// Returns a validation error if `size` is zero or not among the options.
    pub fn page_size(&self, size: usize) -> crate::Result<PageSize> {
        let page_size = PageSize::new(size)?;
        if !self.page_size_options.contains(&size) {
            return Err(crate::Error::validation(
                "page_size",
                format!("must be one of {:?}", self.page_size_options),
            ));
        }
        Ok(page_size)
    }

    /// Page size a new session starts with
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured default is invalid.
    pub fn initial_page_size(&self) -> crate::Result<PageSize> {
        self.page_size(self.default_page_size)
    }
}

impl Config {
    /// Load configuration from `convo.toml` and `CONVO__*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed, or validated.
    pub fn load() -> crate::Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::with_name("convo").required(false))
            .add_source(
                config::Environment::with_prefix("CONVO")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("table.page_size_options")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first problem found.
    pub fn validate(&self) -> crate::Result<()> {
        self.table.validate()?;

        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(crate::Error::configuration(format!(
                "logging.format must be json or pretty, got {}",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::unwrap_used, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use crate::types::{SortColumn, SortDirection};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.table.title, "Conversation data");
        assert_eq!(config.table.page_size_options, vec![5]);
        assert_eq!(config.table.default_page_size, 5);
        assert_eq!(
            config.table.default_sort,
            SortKey::new(SortColumn::Date, SortDirection::Ascending)
        );
        assert_eq!(config.table.row_height_px, 49);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_value_functions() {
        assert_eq!(default_title(), "Conversation data");
        assert_eq!(default_page_size_options(), vec![5]);
        assert_eq!(default_page_size(), 5);
        assert_eq!(default_row_height_px(), 49);
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_format(), "pretty");
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{"table": {"page_size_options": [5, 10]}}"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.table.page_size_options, vec![5, 10]);
        assert_eq!(config.table.default_page_size, 5);
        assert_eq!(config.table.title, "Conversation data");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [table]
            title = "Chats"
            page_size_options = [5, 10, 25]
            default_page_size = 10

            [table.default_sort]
            column = "missed_chat_count"
            direction = "descending"

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config = Config::from_toml_str(toml).unwrap();

        assert_eq!(config.table.title, "Chats");
        assert_eq!(config.table.page_size_options, vec![5, 10, 25]);
        assert_eq!(config.table.initial_page_size().unwrap().get(), 10);
        assert_eq!(
            config.table.default_sort,
            SortKey::descending(SortColumn::MissedChatCount)
        );
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_validate_rejects_empty_options() {
        let mut config = Config::default();
        config.table.page_size_options.clear();
        assert!(matches!(
            config.validate(),
            Err(crate::Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_option() {
        let mut config = Config::default();
        config.table.page_size_options = vec![0, 5];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_default_outside_options() {
        let mut config = Config::default();
        config.table.default_page_size = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_page_size_must_be_an_option() {
        let table = TableConfig::default();

        assert_eq!(table.page_size(5).unwrap().get(), 5);
        assert!(matches!(
            table.page_size(10),
            Err(crate::Error::Validation { ref field, .. }) if field == "page_size"
        ));
        assert!(table.page_size(0).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.table.title, config.table.title);
        assert_eq!(
            deserialized.table.page_size_options,
            config.table.page_size_options
        );
        assert_eq!(deserialized.table.default_sort, config.table.default_sort);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }
}
