//! String formatting helpers for display.

use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::Uuid;

/// Truncate to `max_len` characters, adding an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First eight hex digits of an id.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Date with weekday in pretty mode, ISO otherwise.
pub fn format_date(date: NaiveDate, pretty: bool) -> String {
    if pretty {
        date.format("%a %Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Message timestamp: local wall clock in pretty mode, RFC 3339 otherwise.
pub fn format_timestamp(ts: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    } else {
        ts.to_rfc3339()
    }
}

/// Replace newlines so a value fits on one line.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
