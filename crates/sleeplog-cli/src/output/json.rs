//! JSON output.

use serde::Serialize;

use sleeplog_core::analysis::format_minutes;
use sleeplog_core::SleepEntry;

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// An entry plus display-ready derived fields.
pub fn entry_json(entry: &SleepEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "date": entry.date,
        "bed_time": entry.bed_time,
        "wake_time": entry.wake_time,
        "quality": entry.quality,
        "quality_description": entry.quality.description(),
        "duration_minutes": entry.duration_minutes,
        "duration": format_minutes(f64::from(entry.duration_minutes)),
        "notes": entry.notes,
    })
}

pub fn entries_json(entries: &[SleepEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}
