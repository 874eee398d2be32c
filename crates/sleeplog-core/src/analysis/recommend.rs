//! Rule-ordered sleep recommendations.
//!
//! Rules fire in a fixed order (duration, quality, consistency) and are not
//! exclusive. The affirmation is added only when none of them fired.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::SleepStats;
use crate::model::SleepEntry;

/// Limits below which a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Entries needed before any rule is evaluated
    pub min_entries: usize,

    /// Minutes; 420 is seven hours
    pub min_average_duration: f64,

    pub min_average_quality: f64,

    pub min_consistency: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_entries: 3,
            min_average_duration: 420.0,
            min_average_quality: 3.0,
            min_consistency: 70,
        }
    }
}

/// One piece of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Not enough history to say anything yet
    NeedMoreData { required: usize },
    SleepMore,
    ImproveQuality,
    KeepRegularSchedule,
    /// Nothing to fix
    KeepItUp,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::NeedMoreData { required } => write!(
                f,
                "Log your sleep for at least {} days to receive personalized recommendations.",
                required
            ),
            Recommendation::SleepMore => f.write_str(
                "You're averaging less than 7 hours of sleep. Try to extend your sleep time by going to bed 30 minutes earlier.",
            ),
            Recommendation::ImproveQuality => f.write_str(
                "Your sleep quality is below average. Consider improving your sleep environment by reducing noise and light exposure.",
            ),
            Recommendation::KeepRegularSchedule => f.write_str(
                "Your sleep schedule is inconsistent. Try to go to bed and wake up at the same time every day, including weekends.",
            ),
            Recommendation::KeepItUp => f.write_str(
                "Your sleep patterns look good! To maintain healthy sleep, avoid caffeine in the afternoon and establish a calming bedtime routine.",
            ),
        }
    }
}

/// Recommendations using the default thresholds.
pub fn generate_recommendations(entries: &[SleepEntry], stats: &SleepStats) -> Vec<Recommendation> {
    generate_recommendations_with(entries, stats, &Thresholds::default())
}

/// Recommendations for `entries` and their `stats`. Never empty.
pub fn generate_recommendations_with(
    entries: &[SleepEntry],
    stats: &SleepStats,
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    if entries.len() < thresholds.min_entries {
        return vec![Recommendation::NeedMoreData {
            required: thresholds.min_entries,
        }];
    }

    let mut recommendations = Vec::new();
    if stats.average_sleep_duration < thresholds.min_average_duration {
        recommendations.push(Recommendation::SleepMore);
    }
    if stats.average_sleep_quality < thresholds.min_average_quality {
        recommendations.push(Recommendation::ImproveQuality);
    }
    if stats.consistency_score < thresholds.min_consistency {
        recommendations.push(Recommendation::KeepRegularSchedule);
    }
    if recommendations.is_empty() {
        recommendations.push(Recommendation::KeepItUp);
    }
    recommendations
}
