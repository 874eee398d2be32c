//! SQLite storage backend.
//!
//! The database is a plain file written through on every mutation. A fresh
//! file gets its schema and the default goal on first open.

mod row;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{Result, SleepError};
use crate::model::{ChatMessage, GoalPatch, NewSleepEntry, SleepEntry, SleepEntryPatch, SleepGoal};
use crate::storage::traits::SleepStore;
use crate::storage::types::EntryFilter;

use row::{EntryRow, GoalRow, MessageRow, DATE_FORMAT};

const FORMAT_VERSION: &str = "1";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS entries (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    date TEXT NOT NULL,
    bed_time TEXT NOT NULL,
    wake_time TEXT NOT NULL,
    quality INTEGER NOT NULL CHECK (quality BETWEEN 1 AND 5),
    duration_minutes INTEGER NOT NULL CHECK (duration_minutes BETWEEN 0 AND 1439),
    notes TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS entries_date ON entries (date);

CREATE TABLE IF NOT EXISTS goal (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    target_bed_time TEXT NOT NULL,
    target_wake_time TEXT NOT NULL,
    target_duration_minutes INTEGER NOT NULL CHECK (target_duration_minutes >= 0)
);

CREATE TABLE IF NOT EXISTS messages (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    sender TEXT NOT NULL CHECK (sender IN ('user', 'assistant')),
    text TEXT NOT NULL,
    timestamp TEXT NOT NULL
);
"#;

/// SQLite-backed [`SleepStore`].
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the store at `path`, creating the file and its parent directory
    /// if they do not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let existed = path.exists();
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        tracing::debug!(path = %path.display(), created = !existed, "opened sleep store");

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open a throwaway store that lives only as long as the value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA)?;

        let version: Option<String> = conn
            .query_row("SELECT value FROM meta WHERE key = 'format_version'", [], |row| {
                row.get(0)
            })
            .optional()?;
        match version.as_deref() {
            None => {
                conn.execute(
                    "INSERT INTO meta (key, value) VALUES ('format_version', ?1), ('created_at', ?2)",
                    (FORMAT_VERSION, now_rfc3339()),
                )?;
            }
            Some(FORMAT_VERSION) => {}
            Some(other) => {
                return Err(SleepError::Storage(format!(
                    "Unsupported store format version {} (expected {})",
                    other, FORMAT_VERSION
                )));
            }
        }

        let goal = SleepGoal::default();
        conn.execute(
            "INSERT OR IGNORE INTO goal (id, target_bed_time, target_wake_time, target_duration_minutes)
             VALUES (1, ?1, ?2, ?3)",
            (
                goal.target_bed_time.to_string(),
                goal.target_wake_time.to_string(),
                goal.target_duration_minutes,
            ),
        )?;
        Ok(())
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SleepError::Storage("SQLite connection poisoned".to_string()))
    }

    fn write_entry(conn: &Connection, entry: &SleepEntry) -> Result<usize> {
        let changed = conn.execute(
            "UPDATE entries
             SET date = ?2, bed_time = ?3, wake_time = ?4, quality = ?5, duration_minutes = ?6, notes = ?7
             WHERE id = ?1",
            (
                entry.id.to_string(),
                entry.date.format(DATE_FORMAT).to_string(),
                entry.bed_time.to_string(),
                entry.wake_time.to_string(),
                entry.quality.value(),
                entry.duration_minutes,
                &entry.notes,
            ),
        )?;
        Ok(changed)
    }

    fn query_entry_rows(conn: &Connection, filter: &EntryFilter) -> Result<Vec<EntryRow>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(since) = filter.since {
            conditions.push("date >= ?");
            params.push(Box::new(since.format(DATE_FORMAT).to_string()));
        }
        if let Some(until) = filter.until {
            conditions.push("date <= ?");
            params.push(Box::new(until.format(DATE_FORMAT).to_string()));
        }

        let (select_order, result_order) = if filter.newest_first {
            ("date DESC, seq DESC", "date DESC, seq DESC")
        } else {
            ("seq DESC", "seq ASC")
        };

        let mut inner = format!("SELECT seq, {} FROM entries", EntryRow::COLUMNS);
        if !conditions.is_empty() {
            inner.push_str(" WHERE ");
            inner.push_str(&conditions.join(" AND "));
        }
        inner.push_str(" ORDER BY ");
        inner.push_str(select_order);
        if let Some(limit) = filter.limit {
            inner.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let query = format!(
            "SELECT {} FROM ({}) ORDER BY {}",
            EntryRow::COLUMNS,
            inner,
            result_order
        );

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter()),
            EntryRow::from_row,
        )?;
        let rows = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn read_entry(conn: &Connection, id: &Uuid) -> Result<Option<SleepEntry>> {
        let query = format!("SELECT {} FROM entries WHERE id = ?1", EntryRow::COLUMNS);
        let row = conn
            .query_row(&query, [id.to_string()], EntryRow::from_row)
            .optional()?;
        row.map(SleepEntry::try_from).transpose()
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl SleepStore for SqliteStore {
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<SleepEntry>> {
        let rows = {
            let conn = self.lock_conn()?;
            Self::query_entry_rows(&conn, filter)?
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            match SleepEntry::try_from(row) {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::warn!(error = %err, "skipping unreadable sleep entry"),
            }
        }
        Ok(entries)
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<SleepEntry>> {
        let conn = self.lock_conn()?;
        Self::read_entry(&conn, id)
    }

    fn insert_entry(&mut self, entry: &NewSleepEntry) -> Result<SleepEntry> {
        let conn = self.lock_conn()?;
        let entry = entry.clone().into_entry(Uuid::new_v4());

        conn.execute(
            "INSERT INTO entries (id, date, bed_time, wake_time, quality, duration_minutes, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                entry.id.to_string(),
                entry.date.format(DATE_FORMAT).to_string(),
                entry.bed_time.to_string(),
                entry.wake_time.to_string(),
                entry.quality.value(),
                entry.duration_minutes,
                &entry.notes,
            ),
        )?;

        tracing::info!(id = %entry.id, date = %entry.date, "inserted sleep entry");
        Ok(entry)
    }

    fn update_entry(&mut self, id: &Uuid, patch: &SleepEntryPatch) -> Result<SleepEntry> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let mut entry = Self::read_entry(&tx, id)?.ok_or(SleepError::EntryNotFound(*id))?;
        entry.apply(patch);
        Self::write_entry(&tx, &entry)?;
        tx.commit()?;

        tracing::info!(id = %entry.id, "updated sleep entry");
        Ok(entry)
    }

    fn delete_entry(&mut self, id: &Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        let deleted = conn.execute("DELETE FROM entries WHERE id = ?1", [id.to_string()])?;
        if deleted == 0 {
            return Err(SleepError::EntryNotFound(*id));
        }
        tracing::info!(id = %id, "deleted sleep entry");
        Ok(())
    }

    fn goal(&self) -> Result<SleepGoal> {
        let conn = self.lock_conn()?;
        let row = conn
            .query_row(
                "SELECT target_bed_time, target_wake_time, target_duration_minutes FROM goal WHERE id = 1",
                [],
                |row| {
                    Ok(GoalRow {
                        target_bed_time: row.get(0)?,
                        target_wake_time: row.get(1)?,
                        target_duration_minutes: row.get(2)?,
                    })
                },
            )
            .optional()?;
        match row {
            Some(row) => row.try_into(),
            None => Err(SleepError::Storage("Goal row is missing".to_string())),
        }
    }

    fn update_goal(&mut self, patch: &GoalPatch) -> Result<SleepGoal> {
        let goal = self.goal()?.merge(patch);
        let conn = self.lock_conn()?;
        conn.execute(
            "UPDATE goal SET target_bed_time = ?1, target_wake_time = ?2, target_duration_minutes = ?3
             WHERE id = 1",
            (
                goal.target_bed_time.to_string(),
                goal.target_wake_time.to_string(),
                goal.target_duration_minutes,
            ),
        )?;
        tracing::info!(
            bed = %goal.target_bed_time,
            wake = %goal.target_wake_time,
            minutes = goal.target_duration_minutes,
            "updated sleep goal"
        );
        Ok(goal)
    }

    fn messages(&self) -> Result<Vec<ChatMessage>> {
        let conn = self.lock_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, sender, text, timestamp FROM messages ORDER BY seq ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                sender: row.get(1)?,
                text: row.get(2)?,
                timestamp: row.get(3)?,
            })
        })?;

        let mut messages = Vec::new();
        for row in rows {
            messages.push(row?.try_into()?);
        }
        Ok(messages)
    }

    fn append_message(&mut self, message: &ChatMessage) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO messages (id, sender, text, timestamp) VALUES (?1, ?2, ?3, ?4)",
            (
                message.id.to_string(),
                message.sender.as_str(),
                &message.text,
                message
                    .timestamp
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        )?;
        Ok(())
    }

    fn clear_messages(&mut self) -> Result<()> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM messages", [])?;
        tracing::debug!(removed, "cleared chat history");
        Ok(())
    }

    fn check_integrity(&self) -> Result<()> {
        {
            let conn = self.lock_conn()?;

            let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if status != "ok" {
                return Err(SleepError::Storage(format!(
                    "SQLite integrity check failed: {}",
                    status
                )));
            }

            let metadata_count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM meta WHERE key IN ('format_version', 'created_at')",
                [],
                |row| row.get(0),
            )?;
            if metadata_count < 2 {
                return Err(SleepError::Storage(
                    "Metadata table missing required keys".to_string(),
                ));
            }
        }

        // Every row must convert, which also re-checks stored durations.
        let rows = {
            let conn = self.lock_conn()?;
            Self::query_entry_rows(&conn, &EntryFilter::default())?
        };
        let entries = rows
            .into_iter()
            .map(SleepEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        self.goal()?;
        let messages = self.messages()?;

        tracing::debug!(
            entries = entries.len(),
            messages = messages.len(),
            "integrity check passed"
        );
        Ok(())
    }
}
