//! Aggregate statistics over the full entry history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::SleepEntry;

/// Scales a standard deviation in minutes down to consistency points.
///
/// Recommendation thresholds are calibrated against this value.
pub const CONSISTENCY_DIVISOR: f64 = 5.0;

/// Snapshot derived from an entry collection. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepStats {
    /// Mean duration in minutes
    pub average_sleep_duration: f64,

    /// Mean quality on the 1-5 scale
    pub average_sleep_quality: f64,

    /// 0-100, higher is more regular
    pub consistency_score: u8,

    /// Date of the highest-scoring night, `None` when there are no entries
    pub best_sleep_day: Option<NaiveDate>,

    /// Date of the lowest-scoring night, `None` when there are no entries
    pub worst_sleep_day: Option<NaiveDate>,
}

/// Compute statistics for `entries`, taken in the order given.
///
/// An empty slice yields zeroed stats with no best or worst day.
pub fn generate_stats(entries: &[SleepEntry]) -> SleepStats {
    let Some((best, worst)) = best_and_worst(entries) else {
        return SleepStats::default();
    };

    let durations: Vec<f64> = entries
        .iter()
        .map(|entry| f64::from(entry.duration_minutes))
        .collect();
    let bed_minutes: Vec<f64> = entries
        .iter()
        .map(|entry| f64::from(entry.bed_time.minutes_since_midnight()))
        .collect();
    let qualities: Vec<f64> = entries
        .iter()
        .map(|entry| f64::from(entry.quality.value()))
        .collect();

    let duration_consistency = consistency_component(population_variance(&durations));
    let bed_time_consistency = consistency_component(population_variance(&bed_minutes));
    let consistency = ((duration_consistency + bed_time_consistency) / 2.0).round();

    SleepStats {
        average_sleep_duration: mean(&durations),
        average_sleep_quality: mean(&qualities),
        consistency_score: consistency.clamp(0.0, 100.0) as u8,
        best_sleep_day: Some(best.date),
        worst_sleep_day: Some(worst.date),
    }
}

/// Pick the best and worst nights by [`SleepEntry::score`].
///
/// Both start at the first entry and are replaced only on a strictly
/// better (or worse) score, so ties keep the earliest entry.
pub fn best_and_worst(entries: &[SleepEntry]) -> Option<(&SleepEntry, &SleepEntry)> {
    let first = entries.first()?;
    let mut best = first;
    let mut worst = first;

    for entry in entries {
        let score = entry.score();
        if score > best.score() {
            best = entry;
        }
        if score < worst.score() {
            worst = entry;
        }
    }

    Some((best, worst))
}

/// Sub-score for one variability measure: `max(0, 100 - sd / 5)`.
pub fn consistency_component(variance: f64) -> f64 {
    (100.0 - variance.sqrt() / CONSISTENCY_DIVISOR).max(0.0)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Variance dividing by `n`, not `n - 1`.
pub(crate) fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}
