//! Raw row types and their conversion into domain values.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{Result, SleepError};
use crate::model::{ChatMessage, Quality, Sender, SleepEntry, SleepGoal};
use crate::time::{sleep_duration, ClockTime};

pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub date: String,
    pub bed_time: String,
    pub wake_time: String,
    pub quality: i64,
    pub duration_minutes: i64,
    pub notes: String,
}

impl EntryRow {
    pub(super) const COLUMNS: &'static str =
        "id, date, bed_time, wake_time, quality, duration_minutes, notes";

    pub(super) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            bed_time: row.get(2)?,
            wake_time: row.get(3)?,
            quality: row.get(4)?,
            duration_minutes: row.get(5)?,
            notes: row.get(6)?,
        })
    }
}

fn parse_time(value: &str, column: &str) -> Result<ClockTime> {
    value
        .parse()
        .map_err(|_| SleepError::Storage(format!("Invalid {} in row: {:?}", column, value)))
}

impl TryFrom<EntryRow> for SleepEntry {
    type Error = SleepError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| SleepError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
            .map_err(|e| SleepError::Storage(format!("Invalid entry date: {}", e)))?;
        let bed_time = parse_time(&row.bed_time, "bed_time")?;
        let wake_time = parse_time(&row.wake_time, "wake_time")?;
        let quality = u8::try_from(row.quality)
            .ok()
            .and_then(|value| Quality::try_from(value).ok())
            .ok_or_else(|| {
                SleepError::Storage(format!("Invalid quality in row: {}", row.quality))
            })?;

        let expected = sleep_duration(bed_time, wake_time);
        if row.duration_minutes != i64::from(expected) {
            return Err(SleepError::Storage(format!(
                "Entry {} has duration {} but its times give {}",
                id, row.duration_minutes, expected
            )));
        }

        Ok(SleepEntry {
            id,
            date,
            bed_time,
            wake_time,
            quality,
            duration_minutes: expected,
            notes: row.notes,
        })
    }
}

/// The single row of the goal table.
#[derive(Debug)]
pub struct GoalRow {
    pub target_bed_time: String,
    pub target_wake_time: String,
    pub target_duration_minutes: i64,
}

impl TryFrom<GoalRow> for SleepGoal {
    type Error = SleepError;

    fn try_from(row: GoalRow) -> Result<Self> {
        let target_duration_minutes = u32::try_from(row.target_duration_minutes).map_err(|_| {
            SleepError::Storage(format!(
                "Invalid goal duration: {}",
                row.target_duration_minutes
            ))
        })?;
        Ok(SleepGoal {
            target_bed_time: parse_time(&row.target_bed_time, "target_bed_time")?,
            target_wake_time: parse_time(&row.target_wake_time, "target_wake_time")?,
            target_duration_minutes,
        })
    }
}

#[derive(Debug)]
pub struct MessageRow {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub timestamp: String,
}

impl TryFrom<MessageRow> for ChatMessage {
    type Error = SleepError;

    fn try_from(row: MessageRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| SleepError::Storage(format!("Invalid message UUID: {}", e)))?;
        let sender: Sender = row
            .sender
            .parse()
            .map_err(|_| SleepError::Storage(format!("Invalid sender: {}", row.sender)))?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| SleepError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);
        Ok(ChatMessage {
            id,
            sender,
            text: row.text,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> EntryRow {
        EntryRow {
            id: Uuid::new_v4().to_string(),
            date: "2024-03-01".to_string(),
            bed_time: "22:30".to_string(),
            wake_time: "06:30".to_string(),
            quality: 4,
            duration_minutes: 480,
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_row_converts() {
        let entry = SleepEntry::try_from(row()).unwrap();
        assert_eq!(entry.duration_minutes, 480);
        assert_eq!(entry.quality.value(), 4);
    }

    #[test]
    fn test_rejects_out_of_range_quality() {
        let mut bad = row();
        bad.quality = 9;
        assert!(SleepEntry::try_from(bad).is_err());
    }

    #[test]
    fn test_rejects_stale_duration() {
        let mut bad = row();
        bad.duration_minutes = 400;
        assert!(matches!(
            SleepEntry::try_from(bad),
            Err(SleepError::Storage(_))
        ));
    }
}
