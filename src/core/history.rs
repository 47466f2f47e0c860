//! Rolling history of completed calculations.
//!
//! Provides immutable tracking of finished equations, newest first, capped at a
//! fixed number of entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of records kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Snapshot of one completed calculation.
///
/// Records are immutable values created by the engine's equals handler.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::HistoryRecord;
///
/// let record = HistoryRecord::new("12 + 5", "17");
/// assert_eq!(record.expression, "12 + 5");
/// assert_eq!(record.result, "17");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The equation, e.g. `12 + 5`
    pub expression: String,
    /// The rendered result, e.g. `17`
    pub result: String,
    /// When the equation was evaluated
    pub recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered, capped history of calculations.
///
/// History is immutable - `record` and `clear` return a new history, leaving
/// the original untouched. Entries are kept newest first; once the capacity is
/// exceeded the oldest entry is dropped silently.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{HistoryRecord, HistoryStore};
///
/// let history = HistoryStore::new()
///     .record(HistoryRecord::new("1 + 1", "2"))
///     .record(HistoryRecord::new("2 × 3", "6"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.list()[0].expression, "2 × 3");
/// assert_eq!(history.list()[1].expression, "1 + 1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Same records under a different capacity, truncated if it shrank.
    pub(crate) fn with_records(records: &[HistoryRecord], capacity: usize) -> Self {
        let mut records = records.to_vec();
        records.truncate(capacity);
        Self { records, capacity }
    }

    /// Record a calculation, returning a new history.
    ///
    /// The entry goes to the front; anything past the capacity is evicted.
    /// No deduplication is performed.
    pub fn record(&self, record: HistoryRecord) -> Self {
        let mut records = Vec::with_capacity(self.capacity.min(self.records.len() + 1));
        records.push(record);
        records.extend(self.records.iter().cloned());
        records.truncate(self.capacity);
        Self {
            records,
            capacity: self.capacity,
        }
    }

    /// Return an empty history with the same capacity.
    pub fn clear(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// All records, newest first.
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> HistoryRecord {
        HistoryRecord::new(format!("{n} + 0"), n.to_string())
    }

    #[test]
    fn new_history_is_empty() {
        let history = HistoryStore::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn record_prepends() {
        let history = HistoryStore::new().record(numbered(1)).record(numbered(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.list()[0].result, "2");
        assert_eq!(history.list()[1].result, "1");
        assert_eq!(history.latest().map(|r| r.result.as_str()), Some("2"));
    }

    #[test]
    fn record_is_immutable() {
        let history = HistoryStore::new();
        let new_history = history.record(numbered(1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn eleventh_record_evicts_the_oldest() {
        let history = (1..=11).fold(HistoryStore::new(), |h, n| h.record(numbered(n)));

        assert_eq!(history.len(), 10);
        assert_eq!(history.list()[0].result, "11");
        assert_eq!(history.list()[9].result, "2");
        assert!(history.list().iter().all(|r| r.result != "1"));
    }

    #[test]
    fn duplicates_are_kept() {
        let history = HistoryStore::new()
            .record(HistoryRecord::new("1 + 1", "2"))
            .record(HistoryRecord::new("1 + 1", "2"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_keeps_capacity() {
        let history = HistoryStore::with_capacity(3)
            .record(numbered(1))
            .record(numbered(2));
        let cleared = history.clear();

        assert!(cleared.is_empty());
        assert_eq!(cleared.capacity(), 3);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn custom_capacity_is_honored() {
        let history = (1..=5).fold(HistoryStore::with_capacity(2), |h, n| h.record(numbered(n)));
        assert_eq!(history.len(), 2);
        assert_eq!(history.list()[0].result, "5");
        assert_eq!(history.list()[1].result, "4");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = HistoryStore::new().record(numbered(7));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: HistoryStore = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
