//! Error types for the conversation metrics table

use thiserror::Error;

/// Main error type for the conversation metrics table
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Data file with an extension we cannot read
    #[error("Unsupported data format: {extension}")]
    UnsupportedFormat {
        /// The unsupported extension
        extension: String,
    },

    /// Unknown sort column name
    #[error("Unknown sort column: {name}")]
    InvalidSortColumn {
        /// Name that was given
        name: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error
    #[must_use]
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::unwrap_used, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        assert!(matches!(app_error, Error::Io(_)));
        assert!(format!("{}", app_error).contains("I/O error"));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
        let app_error = Error::from(json_error);

        assert!(matches!(app_error, Error::Json(_)));
        assert!(format!("{}", app_error).contains("Serialization error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::configuration("page_size_options is empty");
        assert_eq!(
            format!("{}", error),
            "Configuration error: page_size_options is empty"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation("page_size", "must be one of [5]");
        assert_eq!(
            format!("{}", error),
            "Validation error: page_size - must be one of [5]"
        );
    }

    #[test]
    fn test_display_variants() {
        let test_cases = vec![
            (
                Error::UnsupportedFormat {
                    extension: "xlsx".to_string(),
                },
                "Unsupported data format: xlsx",
            ),
            (
                Error::InvalidSortColumn {
                    name: "visitors".to_string(),
                },
                "Unknown sort column: visitors",
            ),
        ];

        for (error, expected) in test_cases {
            assert_eq!(format!("{}", error), expected);
        }
    }
}
