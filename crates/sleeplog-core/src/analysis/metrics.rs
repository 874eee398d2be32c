//! Display-level metrics derived from stats: streak, goal progress, labels.

use std::collections::BTreeSet;

use serde::Serialize;

use super::stats::{generate_stats, SleepStats};
use crate::model::{SleepEntry, SleepGoal};

/// Consecutive calendar days with an entry, counted back from the newest
/// logged date and stopping at the first gap.
///
/// Several entries on the same date count as one day.
pub fn streak(entries: &[SleepEntry]) -> u32 {
    let dates: BTreeSet<_> = entries.iter().map(|entry| entry.date).collect();
    let mut newest_first = dates.into_iter().rev();

    let Some(mut previous) = newest_first.next() else {
        return 0;
    };

    let mut count = 1;
    for date in newest_first {
        if previous.signed_duration_since(date).num_days() != 1 {
            break;
        }
        count += 1;
        previous = date;
    }
    count
}

/// Percentage of the target duration met on average, capped at 100.
///
/// A zero target yields 0.
pub fn goal_attainment(average_duration: f64, target_duration_minutes: u32) -> u8 {
    if target_duration_minutes == 0 {
        return 0;
    }
    let percent = (average_duration / f64::from(target_duration_minutes) * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

pub fn quality_label(average_quality: f64) -> &'static str {
    if average_quality < 3.0 {
        "Could be better"
    } else if average_quality < 4.0 {
        "Pretty good"
    } else {
        "Excellent"
    }
}

pub fn consistency_label(score: u8) -> &'static str {
    if score < 50 {
        "Needs improvement"
    } else if score < 75 {
        "Getting better"
    } else {
        "Very consistent"
    }
}

pub fn streak_label(days: u32) -> &'static str {
    if days < 3 {
        "Just getting started!"
    } else if days < 7 {
        "Great progress!"
    } else {
        "Outstanding commitment!"
    }
}

/// Everything the stats view renders, computed in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub entry_count: usize,
    pub stats: SleepStats,
    pub goal: SleepGoal,
    /// Percent of the goal duration, 0-100
    pub goal_attainment: u8,
    pub streak_days: u32,
    pub quality_label: &'static str,
    pub consistency_label: &'static str,
    pub streak_label: &'static str,
}

impl Dashboard {
    pub fn build(entries: &[SleepEntry], goal: SleepGoal) -> Self {
        let stats = generate_stats(entries);
        let streak_days = streak(entries);
        Self {
            entry_count: entries.len(),
            goal_attainment: goal_attainment(
                stats.average_sleep_duration,
                goal.target_duration_minutes,
            ),
            quality_label: quality_label(stats.average_sleep_quality),
            consistency_label: consistency_label(stats.consistency_score),
            streak_label: streak_label(streak_days),
            streak_days,
            stats,
            goal,
        }
    }
}
