//! Query types for the storage layer.

use chrono::NaiveDate;

/// Filter for listing entries.
///
/// Date bounds are inclusive. By default results are in insertion order and
/// a `limit` keeps the most recently inserted matches. With `newest_first`
/// results are ordered by date descending (insertion order breaking ties)
/// and a `limit` keeps the latest dates.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub newest_first: bool,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Order by date, newest night first.
    pub fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }
}
