//! Wall-clock times and the sleep duration calculation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SleepError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, `00:00` through `23:59`.
///
/// There is no date component and no timezone; values are local wall-clock
/// readings as the user typed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a time from literal parts known to be in range.
    pub(crate) const fn from_hm(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }

    /// Build a time from its parts, rejecting out-of-range values.
    pub fn new(hour: u8, minute: u8) -> Result<Self, SleepError> {
        if hour > 23 {
            return Err(SleepError::Validation(format!(
                "Hour must be between 0 and 23 (got {})",
                hour
            )));
        }
        if minute > 59 {
            return Err(SleepError::Validation(format!(
                "Minute must be between 0 and 59 (got {})",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight (`hour * 60 + minute`).
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = SleepError;

    /// Parse strictly as `HH:MM` (two digits, colon, two digits).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            SleepError::Validation(format!("Invalid time (expected HH:MM): {:?}", value))
        };

        let bytes = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let (hours, minutes) = (&value[..2], &value[3..]);
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u8 = hours.parse().map_err(|_| invalid())?;
        let minute: u8 = minutes.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SleepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Elapsed sleep between going to bed and waking up, in minutes.
///
/// A wake time earlier than the bed time means the night crossed midnight.
/// Equal times yield zero. The result is always below [`MINUTES_PER_DAY`].
pub fn sleep_duration(bed: ClockTime, wake: ClockTime) -> u32 {
    let bed = bed.minutes_since_midnight();
    let wake = wake.minutes_since_midnight();
    if wake >= bed {
        wake - bed
    } else {
        wake + MINUTES_PER_DAY - bed
    }
}
