//! Error types for building time values.
//!
//! The resolver itself never fails; these errors only surface when a caller
//! constructs a [`TimeRange`](crate::TimeRange) or parses a clock string.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("range start {0} is before the start of the day")]
    NegativeStart(i64),

    #[error("range end {end} is before its start {start}")]
    EndBeforeStart { start: i64, end: i64 },

    #[error("negative duration: {0} minutes")]
    NegativeDuration(i64),

    #[error("range end overflows starting from {start}")]
    Overflow { start: i64 },

    #[error("invalid clock time '{0}' (expected HH:MM)")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, RangeError>;
