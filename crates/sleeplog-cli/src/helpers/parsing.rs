//! Parsing helpers for dates, clock times, windows and output format.

use chrono::{Days, NaiveDate};

use sleeplog_core::{ClockTime, Quality};

use crate::errors::CliError;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
    })
}

/// Parse an `HH:MM` clock time.
pub fn parse_time(value: &str) -> anyhow::Result<ClockTime> {
    value
        .trim()
        .parse::<ClockTime>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

/// Validate a 1-5 quality rating.
pub fn parse_quality(value: u8) -> anyhow::Result<Quality> {
    Quality::try_from(value).map_err(|e| CliError::invalid_input(e.to_string()).into())
}

/// Parse a window like `7d` or `4w` into a number of days.
pub fn parse_window(value: &str) -> anyhow::Result<i64> {
    let value = value.trim();
    let invalid = || {
        CliError::invalid_input(format!(
            "Invalid window: {} (expected <number>d or <number>w)",
            value
        ))
    };

    let (num_str, per_unit) = if let Some(num) = value.strip_suffix('d') {
        (num, 1)
    } else if let Some(num) = value.strip_suffix('w') {
        (num, 7)
    } else {
        return Err(invalid().into());
    };
    let amount: i64 = num_str.parse().map_err(|_| invalid())?;
    if amount <= 0 {
        return Err(CliError::invalid_input(format!("Window must be positive: {}", value)).into());
    }

    amount
        .checked_mul(per_unit)
        .ok_or_else(|| CliError::invalid_input(format!("Window is too large: {}", value)).into())
}

/// First date of a window of `days` ending on `today`, inclusive.
pub fn window_start(today: NaiveDate, days: i64) -> anyhow::Result<NaiveDate> {
    u64::try_from(days.saturating_sub(1))
        .ok()
        .and_then(|back| today.checked_sub_days(Days::new(back)))
        .ok_or_else(|| {
            CliError::invalid_input(format!("Window of {} days reaches past the calendar", days))
                .into()
        })
}

/// Output format for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: &str) -> anyhow::Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "plain" => Ok(OutputFormat::Plain),
        _ => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            value
        ))
        .into()),
    }
}
