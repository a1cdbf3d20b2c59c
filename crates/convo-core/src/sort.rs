//! Stable sorting of conversation rows
//!
//! Rows comparing equal under the active key keep their input order in both
//! directions, so tied rows never swap places between re-sorts.

use crate::types::{ConversationRow, SortKey};
use tracing::debug;

/// Sort rows by `key`, returning a new vector
///
/// The input slice is left untouched.
#[must_use]
pub fn sort(rows: &[ConversationRow], key: SortKey) -> Vec<ConversationRow> {
    let mut sorted = rows.to_vec();
    // `sort_by` is a stable merge sort
    sorted.sort_by(|a, b| key.compare(a, b));

    debug!(
        rows = sorted.len(),
        column = %key.column,
        direction = %key.direction,
        "sorted rows"
    );

    sorted
}

/// Permutation that sorts `rows` by `key`
///
/// Element `i` of the result is the input index of the row at sorted position `i`.
#[must_use]
pub fn sort_indices(rows: &[ConversationRow], key: SortKey) -> Vec<usize> {
    let mut indexed: Vec<(usize, &ConversationRow)> = rows.iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| key.compare(a, b));
    indexed.into_iter().map(|(index, _)| index).collect()
}
