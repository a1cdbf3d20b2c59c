//! Core data types for the conversation metrics table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// One day of conversation metrics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationRow {
    /// Calendar day the metrics belong to
    pub date: NaiveDate,

    /// Number of conversations held that day
    pub conversation_count: u32,

    /// Number of chats nobody answered
    pub missed_chat_count: u32,

    /// Number of visitors who had at least one conversation
    pub visitors_with_conversation_count: u32,
}

impl ConversationRow {
    /// Create a new row
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        conversation_count: u32,
        missed_chat_count: u32,
        visitors_with_conversation_count: u32,
    ) -> Self {
        Self {
            date,
            conversation_count,
            missed_chat_count,
            visitors_with_conversation_count,
        }
    }

    /// Compare two rows on a single column using the column's natural order
    #[must_use]
    pub fn compare_by(&self, other: &Self, column: SortColumn) -> Ordering {
        match column {
            SortColumn::Date => self.date.cmp(&other.date),
            SortColumn::ConversationCount => self.conversation_count.cmp(&other.conversation_count),
            SortColumn::MissedChatCount => self.missed_chat_count.cmp(&other.missed_chat_count),
            SortColumn::VisitorsWithConversationCount => self
                .visitors_with_conversation_count
                .cmp(&other.visitors_with_conversation_count),
        }
    }

    /// Display value of a single cell
    #[must_use]
    pub fn cell(&self, column: SortColumn) -> String {
        match column {
            SortColumn::Date => self.date.format("%Y-%m-%d").to_string(),
            SortColumn::ConversationCount => self.conversation_count.to_string(),
            SortColumn::MissedChatCount => self.missed_chat_count.to_string(),
            SortColumn::VisitorsWithConversationCount => {
                self.visitors_with_conversation_count.to_string()
            }
        }
    }
}

/// Column a table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Calendar day
    #[default]
    Date,
    /// Conversation count
    ConversationCount,
    /// Missed chat count
    MissedChatCount,
    /// Visitors with conversation count
    VisitorsWithConversationCount,
}

impl SortColumn {
    /// All columns in display order
    pub const ALL: [Self; 4] = [
        Self::Date,
        Self::ConversationCount,
        Self::MissedChatCount,
        Self::VisitorsWithConversationCount,
    ];

    /// Field identifier as used in data files and on the command line
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::ConversationCount => "conversation_count",
            Self::MissedChatCount => "missed_chat_count",
            Self::VisitorsWithConversationCount => "visitors_with_conversation_count",
        }
    }

    /// Human readable header label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::ConversationCount => "Conversation count",
            Self::MissedChatCount => "Missed chat count",
            Self::VisitorsWithConversationCount => "Visitors with conversation count",
        }
    }

    /// Whether the column holds numbers
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Date)
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortColumn {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|column| column.id() == normalized)
            .ok_or_else(|| crate::Error::InvalidSortColumn {
                name: s.to_string(),
            })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply this direction to an ascending ordering
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Column and direction driving the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortKey {
    /// Column to compare
    pub column: SortColumn,
    /// Direction of the comparison
    pub direction: SortDirection,
}

impl SortKey {
    /// Create a new sort key
    #[must_use]
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Ascending key on a column
    #[must_use]
    pub const fn ascending(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    /// Descending key on a column
    #[must_use]
    pub const fn descending(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Descending)
    }

    /// Same column, opposite direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.column, self.direction.reversed())
    }

    /// Compare two rows under this key. Ties return `Equal`.
    #[must_use]
    pub fn compare(&self, a: &ConversationRow, b: &ConversationRow) -> Ordering {
        self.direction.apply(a.compare_by(b, self.column))
    }
}

/// Identity of a row for list rendering
///
/// `occurrence` counts earlier rows in the input sharing the same date, so keys
/// stay unique when dates repeat and do not change when the table is re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowKey {
    /// Date of the row
    pub date: NaiveDate,
    /// Index among rows with the same date, in input order
    pub occurrence: usize,
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.occurrence == 0 {
            write!(f, "{}", self.date.format("%Y-%m-%d"))
        } else {
            write!(f, "{}#{}", self.date.format("%Y-%m-%d"), self.occurrence)
        }
    }
}

/// Validated, non-zero number of rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Rows per page in the default deployment
    pub const DEFAULT: Self = Self(5);

    /// Create a page size
    ///
    /// # Errors
    ///
    /// Returns a validation error if `size` is zero.
    pub fn new(size: usize) -> crate::Result<Self> {
        if size == 0 {
            return Err(crate::Error::Validation {
                field: "page_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(Self(size))
    }

    /// Number of rows per page
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
