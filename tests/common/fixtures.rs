//! Test fixtures and sample data

use chrono::NaiveDate;
use convo_core::ConversationRow;

/// Sample conversation rows for testing
pub struct RowFixtures;

impl RowFixtures {
    /// Day `d` of March 2024
    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).expect("valid fixture date")
    }

    /// D1..D5 with conversation counts [3, 1, 3, 2, 5]
    pub fn tied_counts() -> Vec<ConversationRow> {
        [3, 1, 3, 2, 5]
            .into_iter()
            .zip(1..)
            .map(|(count, d)| ConversationRow::new(Self::day(d), count, d % 2, count + 1))
            .collect()
    }

    /// A week of rows in date order
    pub fn week() -> Vec<ConversationRow> {
        vec![
            ConversationRow::new(Self::day(1), 12, 1, 10),
            ConversationRow::new(Self::day(2), 8, 0, 8),
            ConversationRow::new(Self::day(3), 15, 3, 11),
            ConversationRow::new(Self::day(4), 4, 2, 4),
            ConversationRow::new(Self::day(5), 19, 0, 17),
            ConversationRow::new(Self::day(6), 2, 5, 2),
            ConversationRow::new(Self::day(7), 9, 1, 7),
        ]
    }

    /// Rows where two days appear twice
    pub fn duplicate_dates() -> Vec<ConversationRow> {
        vec![
            ConversationRow::new(Self::day(1), 5, 0, 5),
            ConversationRow::new(Self::day(2), 3, 1, 3),
            ConversationRow::new(Self::day(1), 7, 0, 6),
            ConversationRow::new(Self::day(2), 1, 0, 1),
        ]
    }
}

/// The week fixture as JSON
pub const WEEK_JSON: &str = r#"[
    {"date": "2024-03-01", "conversation_count": 12, "missed_chat_count": 1, "visitors_with_conversation_count": 10},
    {"date": "2024-03-02", "conversation_count": 8, "missed_chat_count": 0, "visitors_with_conversation_count": 8},
    {"date": "2024-03-03", "conversation_count": 15, "missed_chat_count": 3, "visitors_with_conversation_count": 11},
    {"date": "2024-03-04", "conversation_count": 4, "missed_chat_count": 2, "visitors_with_conversation_count": 4},
    {"date": "2024-03-05", "conversation_count": 19, "missed_chat_count": 0, "visitors_with_conversation_count": 17},
    {"date": "2024-03-06", "conversation_count": 2, "missed_chat_count": 5, "visitors_with_conversation_count": 2},
    {"date": "2024-03-07", "conversation_count": 9, "missed_chat_count": 1, "visitors_with_conversation_count": 7}
]"#;

/// The week fixture as CSV
pub const WEEK_CSV: &str = "date,conversation_count,missed_chat_count,visitors_with_conversation_count
2024-03-01,12,1,10
2024-03-02,8,0,8
2024-03-03,15,3,11
2024-03-04,4,2,4
2024-03-05,19,0,17
2024-03-06,2,5,2
2024-03-07,9,1,7
";
