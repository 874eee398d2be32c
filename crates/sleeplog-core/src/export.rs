//! Portable serializations of the entry history.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SleepError};
use crate::model::SleepEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One pretty-printed JSON array
    #[default]
    Json,
    /// One compact JSON object per line
    Jsonl,
}

impl FromStr for ExportFormat {
    type Err = SleepError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "jsonl" => Ok(ExportFormat::Jsonl),
            other => Err(SleepError::InvalidInput(format!(
                "Unsupported export format: {} (use json or jsonl)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Jsonl => f.write_str("jsonl"),
        }
    }
}

/// Serialize `entries` in `format`. The output always ends with a newline.
pub fn render(entries: &[SleepEntry], format: ExportFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        ExportFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(entries)?);
            out.push('\n');
        }
        ExportFormat::Jsonl => {
            for entry in entries {
                out.push_str(&serde_json::to_string(entry)?);
                out.push('\n');
            }
        }
    }
    Ok(out)
}
