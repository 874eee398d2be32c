//! # Sleeplog Core
//!
//! Core library for sleeplog, a local-first sleep journal.
//!
//! ## Architecture
//!
//! - **time**: wall-clock times and the sleep duration calculation
//! - **model**: entries, the goal, chat messages
//! - **analysis**: statistics, recommendations, streaks and labels
//! - **assistant**: the scripted chat assistant
//! - **breathing**: the 4-7-8 breathing exercise state machine
//! - **tips**: static sleep hygiene advice
//! - **storage**: storage trait and the SQLite backend
//! - **export**: JSON and JSONL serialization of the entry history

pub mod analysis;
pub mod assistant;
pub mod breathing;
pub mod error;
pub mod export;
pub mod fs;
pub mod model;
pub mod storage;
pub mod time;
pub mod tips;

pub use error::{Result, SleepError};
pub use model::{
    ChatMessage, GoalPatch, NewSleepEntry, Quality, Sender, SleepEntry, SleepEntryPatch, SleepGoal,
};
pub use storage::{EntryFilter, SleepStore, SqliteStore};
pub use time::{sleep_duration, ClockTime};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
