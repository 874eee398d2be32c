//! Storage trait definition.
//!
//! `SleepStore` is the persistence seam for entries, the goal, and the chat
//! history. The CLI only talks to this trait; [`SqliteStore`] is the one
//! backend.
//!
//! [`SqliteStore`]: super::SqliteStore

use uuid::Uuid;

use super::types::EntryFilter;
use crate::error::Result;
use crate::model::{ChatMessage, GoalPatch, NewSleepEntry, SleepEntry, SleepEntryPatch, SleepGoal};

/// Store holding one user's sleep history.
///
/// Implementations must ensure:
/// - Entries come back in the order they were inserted
/// - Every mutation is durable once the call returns
/// - A stored entry's duration always matches its bed and wake times
pub trait SleepStore: Send + Sync {
    // --- Entry operations ---

    /// List entries matching `filter`, oldest insertion first.
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<SleepEntry>>;

    /// Get an entry by ID, `None` if it does not exist.
    fn get_entry(&self, id: &Uuid) -> Result<Option<SleepEntry>>;

    /// Insert a new entry, assigning its ID and computing its duration.
    fn insert_entry(&mut self, entry: &NewSleepEntry) -> Result<SleepEntry>;

    /// Apply a partial update and return the stored result.
    ///
    /// # Errors
    ///
    /// Returns `SleepError::EntryNotFound` if no entry has this ID.
    fn update_entry(&mut self, id: &Uuid, patch: &SleepEntryPatch) -> Result<SleepEntry>;

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// Returns `SleepError::EntryNotFound` if no entry has this ID.
    fn delete_entry(&mut self, id: &Uuid) -> Result<()>;

    // --- Goal ---

    /// The current goal. A fresh store holds the default goal.
    fn goal(&self) -> Result<SleepGoal>;

    /// Merge `patch` into the stored goal and return the result.
    fn update_goal(&mut self, patch: &GoalPatch) -> Result<SleepGoal>;

    // --- Chat history ---

    /// All chat messages, oldest first.
    fn messages(&self) -> Result<Vec<ChatMessage>>;

    fn append_message(&mut self, message: &ChatMessage) -> Result<()>;

    /// Remove every chat message.
    fn clear_messages(&mut self) -> Result<()>;

    // --- Maintenance ---

    /// Verify the store is internally consistent.
    fn check_integrity(&self) -> Result<()>;
}
