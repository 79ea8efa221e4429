//! Search history, deduplicated and capped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum retained history entries; the oldest are evicted beyond this.
pub const HISTORY_CAP: usize = 20;

/// One recorded search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub result_count: usize,
}

/// Record a search at the front of the history.
///
/// Deduplicates by query text (the newest occurrence wins position) and caps
/// the list at [`HISTORY_CAP`], evicting the oldest entries.
pub fn record_search(history: &mut Vec<SearchHistoryEntry>, query: &str, result_count: usize) {
    history.retain(|entry| entry.query != query);
    history.insert(
        0,
        SearchHistoryEntry {
            query: query.to_string(),
            timestamp: Utc::now(),
            result_count,
        },
    );
    history.truncate(HISTORY_CAP);
}
