//! Wall-clock helpers -- convert between minutes-of-day and `HH:MM` strings.

use chrono::{NaiveTime, Timelike};

use crate::error::{RangeError, Result};
use crate::time_range::{Minutes, END_OF_DAY};

/// Parse an `HH:MM` wall-clock string into minutes since midnight.
///
/// `24:00` is accepted and maps to [`END_OF_DAY`], so a range can be written as
/// ending at midnight.
///
/// # Errors
/// Returns `RangeError::InvalidClock` for anything chrono cannot read as `%H:%M`.
pub fn parse_clock(s: &str) -> Result<Minutes> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| RangeError::InvalidClock(s.to_string()))?;
    Ok(Minutes::from(time.hour() * 60 + time.minute()))
}

/// Format minutes since midnight as `HH:MM`.
///
/// Values past the end of the day keep counting hours (`1500` is `25:00`).
pub fn format_clock(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
