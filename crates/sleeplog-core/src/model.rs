//! Domain types: sleep entries, the sleep goal, and chat messages.
//!
//! Entries carry a derived duration that always matches
//! [`sleep_duration`](crate::time::sleep_duration) for their bed and wake
//! times. Every constructor and patch path recomputes it.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SleepError;
use crate::time::{sleep_duration, ClockTime};

/// Subjective sleep quality on the closed 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Human description shown next to the rating.
    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "Poor - Very restless sleep",
            2 => "Fair - Somewhat restless sleep",
            3 => "Average - Typical sleep quality",
            4 => "Good - Restful sleep",
            _ => "Excellent - Deep, refreshing sleep",
        }
    }
}

impl TryFrom<u8> for Quality {
    type Error = SleepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SleepError::Validation(format!(
                "Sleep quality must be between {} and {} (got {})",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }
}

impl From<Quality> for u8 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

/// One logged night of sleep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SleepEntryRecord")]
pub struct SleepEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Calendar date the night is filed under
    pub date: NaiveDate,

    pub bed_time: ClockTime,

    pub wake_time: ClockTime,

    pub quality: Quality,

    /// Derived from bed and wake time, never edited directly
    pub duration_minutes: u32,

    /// Free-text notes (may be empty)
    pub notes: String,
}

/// Wire shape of [`SleepEntry`]; the stored duration must match the times.
#[derive(Deserialize)]
struct SleepEntryRecord {
    id: Uuid,
    date: NaiveDate,
    bed_time: ClockTime,
    wake_time: ClockTime,
    quality: Quality,
    duration_minutes: u32,
    #[serde(default)]
    notes: String,
}

impl TryFrom<SleepEntryRecord> for SleepEntry {
    type Error = SleepError;

    fn try_from(record: SleepEntryRecord) -> Result<Self, Self::Error> {
        let expected = sleep_duration(record.bed_time, record.wake_time);
        if record.duration_minutes != expected {
            return Err(SleepError::Validation(format!(
                "Entry {} has duration {} but its times give {}",
                record.id, record.duration_minutes, expected
            )));
        }
        Ok(Self {
            id: record.id,
            date: record.date,
            bed_time: record.bed_time,
            wake_time: record.wake_time,
            quality: record.quality,
            duration_minutes: expected,
            notes: record.notes,
        })
    }
}

impl SleepEntry {
    /// Score used to rank nights against each other.
    pub fn score(&self) -> u32 {
        self.duration_minutes * u32::from(self.quality.value())
    }

    /// Apply a partial update, recomputing the duration.
    pub fn apply(&mut self, patch: &SleepEntryPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(bed_time) = patch.bed_time {
            self.bed_time = bed_time;
        }
        if let Some(wake_time) = patch.wake_time {
            self.wake_time = wake_time;
        }
        if let Some(quality) = patch.quality {
            self.quality = quality;
        }
        if let Some(ref notes) = patch.notes {
            self.notes = notes.clone();
        }
        self.duration_minutes = sleep_duration(self.bed_time, self.wake_time);
    }
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewSleepEntry {
    pub date: NaiveDate,
    pub bed_time: ClockTime,
    pub wake_time: ClockTime,
    pub quality: Quality,
    pub notes: String,
}

impl NewSleepEntry {
    pub fn new(date: NaiveDate, bed_time: ClockTime, wake_time: ClockTime, quality: Quality) -> Self {
        Self {
            date,
            bed_time,
            wake_time,
            quality,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Assign an id and compute the duration.
    pub fn into_entry(self, id: Uuid) -> SleepEntry {
        SleepEntry {
            id,
            date: self.date,
            bed_time: self.bed_time,
            wake_time: self.wake_time,
            quality: self.quality,
            duration_minutes: sleep_duration(self.bed_time, self.wake_time),
            notes: self.notes,
        }
    }
}

/// Partial update for an existing entry. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct SleepEntryPatch {
    pub date: Option<NaiveDate>,
    pub bed_time: Option<ClockTime>,
    pub wake_time: Option<ClockTime>,
    pub quality: Option<Quality>,
    pub notes: Option<String>,
}

impl SleepEntryPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.bed_time.is_none()
            && self.wake_time.is_none()
            && self.quality.is_none()
            && self.notes.is_none()
    }
}

/// The user's target schedule.
///
/// The three fields are stored independently. [`SleepGoal::edit_times`]
/// keeps them consistent; a direct [`GoalPatch`] merge may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepGoal {
    pub target_bed_time: ClockTime,
    pub target_wake_time: ClockTime,
    /// Target sleep in minutes
    pub target_duration_minutes: u32,
}

impl Default for SleepGoal {
    fn default() -> Self {
        Self {
            target_bed_time: ClockTime::from_hm(22, 30),
            target_wake_time: ClockTime::from_hm(6, 30),
            target_duration_minutes: 480,
        }
    }
}

impl SleepGoal {
    /// Merge a partial update field by field.
    pub fn merge(&self, patch: &GoalPatch) -> Self {
        Self {
            target_bed_time: patch.target_bed_time.unwrap_or(self.target_bed_time),
            target_wake_time: patch.target_wake_time.unwrap_or(self.target_wake_time),
            target_duration_minutes: patch
                .target_duration_minutes
                .unwrap_or(self.target_duration_minutes),
        }
    }

    /// Change one or both target times and recompute the duration from the
    /// updated pair.
    pub fn edit_times(&self, bed: Option<ClockTime>, wake: Option<ClockTime>) -> Self {
        let target_bed_time = bed.unwrap_or(self.target_bed_time);
        let target_wake_time = wake.unwrap_or(self.target_wake_time);
        Self {
            target_bed_time,
            target_wake_time,
            target_duration_minutes: sleep_duration(target_bed_time, target_wake_time),
        }
    }
}

/// Partial update for the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalPatch {
    pub target_bed_time: Option<ClockTime>,
    pub target_wake_time: Option<ClockTime>,
    pub target_duration_minutes: Option<u32>,
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for Sender {
    type Err = SleepError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Sender::User),
            "assistant" => Ok(Sender::Assistant),
            other => Err(SleepError::Validation(format!("Unknown sender: {}", other))),
        }
    }
}

/// A single message in the assistant conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            // Stored with millisecond precision
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> ClockTime {
        value.parse().unwrap()
    }

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_entry_json_must_match_its_times() {
        let entry = NewSleepEntry::new(
            date("2024-03-01"),
            t("23:00"),
            t("07:00"),
            Quality::try_from(4).unwrap(),
        )
        .into_entry(Uuid::new_v4());
        let mut value = serde_json::to_value(&entry).unwrap();
        let parsed: SleepEntry = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(parsed, entry);

        value["duration_minutes"] = serde_json::json!(12);
        assert!(serde_json::from_value::<SleepEntry>(value).is_err());
    }

    #[test]
    fn test_quality_range() {
        assert!(Quality::try_from(0).is_err());
        assert!(Quality::try_from(6).is_err());
        for value in 1..=5 {
            assert_eq!(Quality::try_from(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_quality_descriptions() {
        assert_eq!(
            Quality::try_from(1).unwrap().description(),
            "Poor - Very restless sleep"
        );
        assert_eq!(
            Quality::try_from(5).unwrap().description(),
            "Excellent - Deep, refreshing sleep"
        );
    }

    #[test]
    fn test_new_entry_computes_duration() {
        let entry = NewSleepEntry::new(
            date("2024-03-01"),
            t("23:00"),
            t("07:15"),
            Quality::try_from(4).unwrap(),
        )
        .with_notes("late coffee")
        .into_entry(Uuid::new_v4());

        assert_eq!(entry.duration_minutes, 495);
        assert_eq!(entry.notes, "late coffee");
        assert_eq!(entry.score(), 495 * 4);
    }

    #[test]
    fn test_patch_recomputes_duration() {
        let mut entry = NewSleepEntry::new(
            date("2024-03-01"),
            t("22:30"),
            t("06:30"),
            Quality::try_from(3).unwrap(),
        )
        .into_entry(Uuid::new_v4());

        entry.apply(&SleepEntryPatch {
            wake_time: Some(t("05:30")),
            ..Default::default()
        });
        assert_eq!(entry.duration_minutes, 420);
        assert_eq!(entry.bed_time, t("22:30"));

        entry.apply(&SleepEntryPatch {
            notes: Some("woke early".to_string()),
            ..Default::default()
        });
        assert_eq!(entry.duration_minutes, 420);
        assert_eq!(entry.notes, "woke early");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(SleepEntryPatch::default().is_empty());
        let patch = SleepEntryPatch {
            quality: Some(Quality::try_from(2).unwrap()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_default_goal() {
        let goal = SleepGoal::default();
        assert_eq!(goal.target_bed_time, t("22:30"));
        assert_eq!(goal.target_wake_time, t("06:30"));
        assert_eq!(goal.target_duration_minutes, 480);
    }

    #[test]
    fn test_goal_merge_allows_drift() {
        let goal = SleepGoal::default().merge(&GoalPatch {
            target_bed_time: Some(t("23:30")),
            ..Default::default()
        });
        assert_eq!(goal.target_bed_time, t("23:30"));
        assert_eq!(goal.target_duration_minutes, 480);
    }

    #[test]
    fn test_goal_edit_times_uses_updated_values() {
        let goal = SleepGoal::default().edit_times(Some(t("23:00")), Some(t("07:30")));
        assert_eq!(goal.target_duration_minutes, 510);

        let goal = goal.edit_times(None, Some(t("06:00")));
        assert_eq!(goal.target_bed_time, t("23:00"));
        assert_eq!(goal.target_duration_minutes, 420);
    }

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("hello");
        let bot = ChatMessage::assistant("hi there");
        assert_eq!(user.sender, Sender::User);
        assert_eq!(bot.sender, Sender::Assistant);
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = NewSleepEntry::new(
            date("2024-03-01"),
            t("22:30"),
            t("06:30"),
            Quality::try_from(4).unwrap(),
        )
        .into_entry(Uuid::nil());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["bed_time"], "22:30");
        assert_eq!(value["quality"], 4);
        assert_eq!(value["duration_minutes"], 480);
    }
}
