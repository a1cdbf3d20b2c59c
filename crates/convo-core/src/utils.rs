//! Loading rows from data files

use crate::{Result, types::ConversationRow};
use chrono::NaiveDate;
use std::{collections::BTreeMap, io::Read, path::Path};
use tracing::{info, warn};

/// Data file formats rows can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// JSON array of row objects
    Json,
    /// CSV with a header row naming the fields
    Csv,
}

impl DataFormat {
    /// Detect the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if extension.eq_ignore_ascii_case("csv") {
            Ok(Self::Csv)
        } else {
            Err(crate::Error::UnsupportedFormat {
                extension: extension.to_string(),
            })
        }
    }
}

/// Parse rows from a JSON array
///
/// # Errors
///
/// Returns an error if the document is not an array of complete rows.
pub fn parse_rows_json(content: &str) -> Result<Vec<ConversationRow>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse rows from CSV with a header row
///
/// # Errors
///
/// Returns an error if a record is malformed or a field is missing.
pub fn parse_rows_csv<R: Read>(reader: R) -> Result<Vec<ConversationRow>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
        .map(|record| record.map_err(crate::Error::from))
        .collect()
}

/// Read rows from a JSON or CSV file, keeping file order
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported extension,
/// or contains malformed rows.
pub fn load_rows(path: &Path) -> Result<Vec<ConversationRow>> {
    let format = DataFormat::from_path(path)?;
    let rows = match format {
        DataFormat::Json => parse_rows_json(&std::fs::read_to_string(path)?)?,
        DataFormat::Csv => parse_rows_csv(std::fs::File::open(path)?)?,
    };

    info!(path = %path.display(), ?format, rows = rows.len(), "loaded rows");

    let duplicates = duplicate_dates(&rows);
    if !duplicates.is_empty() {
        warn!(
            path = %path.display(),
            dates = ?duplicates,
            "data contains repeated dates, rows are keyed by date and occurrence"
        );
    }

    Ok(rows)
}

/// Dates appearing on more than one row, in ascending order
#[must_use]
pub fn duplicate_dates(rows: &[ConversationRow]) -> Vec<NaiveDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.date).or_default() += 1;
    }
    counts
        .into_iter()
        .filter_map(|(date, count)| (count > 1).then_some(date))
        .collect()
}
