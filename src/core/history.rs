//! Bounded calculation history.
//!
//! Provides immutable tracking of completed calculations, most recent
//! first, following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use reckon::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "7 + 3 = 10".to_string(),
///     result: 10.0,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Full expression, e.g. `"7 + 3 = 10"`
    pub expression: String,
    /// Rounded numeric result
    pub result: f64,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, capped history of calculations.
///
/// Entries are stored most recent first. Recording past the capacity evicts
/// the oldest entry. History is immutable: `record` and `clear` return a new
/// history.
///
/// # Example
///
/// ```rust
/// use reckon::core::{CalcHistory, HistoryEntry};
/// use chrono::Utc;
///
/// let history = CalcHistory::with_capacity(2);
/// let history = ["1 + 1 = 2", "2 + 2 = 4", "3 + 3 = 6"]
///     .iter()
///     .fold(history, |h, expr| {
///         h.record(HistoryEntry {
///             expression: expr.to_string(),
///             result: 0.0,
///             timestamp: Utc::now(),
///         })
///     });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.entries()[0].expression, "3 + 3 = 6");
/// assert_eq!(history.entries()[1].expression, "2 + 2 = 4");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct CalcHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

// Persisted histories go through `from_entries` so the capacity floor and
// truncation hold for deserialized values too.
#[derive(Deserialize)]
struct StoredHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl From<StoredHistory> for CalcHistory {
    fn from(stored: StoredHistory) -> Self {
        Self::from_entries(stored.entries, stored.capacity)
    }
}

impl Default for CalcHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcHistory {
    /// Create an empty history with the default capacity of 50.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuild a history from persisted entries (most recent first),
    /// dropping anything past the capacity.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        history.entries = entries;
        history.entries.truncate(history.capacity);
        history
    }

    /// Record a calculation, returning a new history.
    ///
    /// This is a pure function - the existing history is left as is.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.push(entry);
        entries.extend(self.entries.iter().take(self.capacity.saturating_sub(1)).cloned());
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Return an empty history with the same capacity.
    pub fn clear(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Time between the oldest and the newest recorded calculation.
    ///
    /// Returns `None` for an empty history.
    pub fn span(&self) -> Option<Duration> {
        match (self.entries.last(), self.entries.first()) {
            (Some(oldest), Some(newest)) => newest
                .timestamp
                .signed_duration_since(oldest.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(expression: &str, result: f64) -> HistoryEntry {
        HistoryEntry {
            expression: expression.to_string(),
            result,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = CalcHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(history.latest().is_none());
        assert!(history.span().is_none());
    }

    #[test]
    fn record_puts_newest_first() {
        let history = CalcHistory::new()
            .record(entry("1 + 1 = 2", 2.0))
            .record(entry("2 + 2 = 4", 4.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().expression, "2 + 2 = 4");
        assert_eq!(history.get(1).unwrap().expression, "1 + 1 = 2");
        assert!(history.get(2).is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = CalcHistory::new();
        let new_history = history.record(entry("1 + 1 = 2", 2.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let mut history = CalcHistory::with_capacity(3);
        for i in 0..5 {
            history = history.record(entry(&format!("{i} + 0 = {i}"), f64::from(i)));
        }

        let results: Vec<f64> = history.entries().iter().map(|e| e.result).collect();
        assert_eq!(results, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let history = CalcHistory::with_capacity(0)
            .record(entry("1 + 1 = 2", 2.0))
            .record(entry("2 + 2 = 4", 4.0));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn from_entries_truncates_to_capacity() {
        let entries = (0..10).map(|i| entry("x", f64::from(i))).collect();
        let history = CalcHistory::from_entries(entries, 4);
        assert_eq!(history.len(), 4);
        assert_eq!(history.latest().unwrap().result, 0.0);
    }

    #[test]
    fn clear_keeps_capacity() {
        let history = CalcHistory::with_capacity(7).record(entry("1 + 1 = 2", 2.0));
        let cleared = history.clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.capacity(), 7);
    }

    #[test]
    fn span_measures_oldest_to_newest() {
        let start = Utc::now();
        let history = CalcHistory::new()
            .record(HistoryEntry {
                expression: "1 + 1 = 2".to_string(),
                result: 2.0,
                timestamp: start,
            })
            .record(HistoryEntry {
                expression: "2 + 2 = 4".to_string(),
                result: 4.0,
                timestamp: start + chrono::Duration::seconds(3),
            });

        assert_eq!(history.span(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn entry_timestamp_serializes_as_iso_8601() {
        let timestamp = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = HistoryEntry {
            expression: "7 + 3 = 10".to_string(),
            result: 10.0,
            timestamp,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["expression"], "7 + 3 = 10");
        assert_eq!(json["result"], 10.0);
        assert_eq!(json["timestamp"], "2024-05-01T12:30:00Z");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = CalcHistory::new().record(entry("1 + 1 = 2", 2.0));
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalcHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }

    #[test]
    fn deserialized_zero_capacity_is_raised_to_one() {
        let history: CalcHistory =
            serde_json::from_str(r#"{"entries":[],"capacity":0}"#).unwrap();
        assert_eq!(history.capacity(), 1);

        let history = history
            .record(entry("1 + 1 = 2", 2.0))
            .record(entry("2 + 2 = 4", 4.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].expression, "2 + 2 = 4");
    }

    #[test]
    fn deserialized_entries_past_capacity_are_dropped() {
        let stored = CalcHistory::new()
            .record(entry("1 + 1 = 2", 2.0))
            .record(entry("2 + 2 = 4", 4.0));
        let mut json = serde_json::to_value(&stored).unwrap();
        json["capacity"] = 1.into();

        let history: CalcHistory = serde_json::from_value(json).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].expression, "2 + 2 = 4");
    }
}
