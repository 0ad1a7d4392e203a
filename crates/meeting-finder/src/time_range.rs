//! Half-open ranges of minutes within a single day.
//!
//! A [`TimeRange`] covers `[start, end)`: the start minute is included, the end
//! minute is not. Ranges order by start first, then by end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{format_clock, parse_clock};
use crate::error::{RangeError, Result};

/// Minutes since midnight.
pub type Minutes = i64;

/// First minute of the day.
pub const START_OF_DAY: Minutes = 0;

/// Exclusive upper bound of the day, one past the last minute (`23:59`).
pub const END_OF_DAY: Minutes = 24 * 60;

/// An immutable half-open interval `[start, end)` of minutes.
///
/// `start` is never negative and `end` is never before `start`. `end` may run
/// past [`END_OF_DAY`]; the resolver clips such ranges to the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: Minutes,
    end: Minutes,
}

#[derive(Deserialize)]
struct RawRange {
    start: Minutes,
    end: Minutes,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// The whole day, `[00:00, 24:00)`.
    pub const WHOLE_DAY: TimeRange = TimeRange::span(START_OF_DAY, END_OF_DAY);

    /// Build a range from values the caller has already checked.
    pub(crate) const fn span(start: Minutes, end: Minutes) -> Self {
        Self { start, end }
    }

    /// A range starting at `start` lasting `duration` minutes.
    ///
    /// # Errors
    /// `NegativeStart` if `start < 0`, `NegativeDuration` if `duration < 0`,
    /// `Overflow` if the end does not fit in [`Minutes`].
    pub fn from_start_duration(start: Minutes, duration: Minutes) -> Result<Self> {
        if start < START_OF_DAY {
            return Err(RangeError::NegativeStart(start));
        }
        if duration < 0 {
            return Err(RangeError::NegativeDuration(duration));
        }
        let end = start
            .checked_add(duration)
            .ok_or(RangeError::Overflow { start })?;
        Ok(Self::span(start, end))
    }

    /// A range from `start` to `end`.
    ///
    /// When `inclusive` is true, `end` names the last minute inside the range
    /// and is stored as `end + 1`.
    ///
    /// # Errors
    /// `NegativeStart` if `start < 0`, `EndBeforeStart` if the exclusive end
    /// falls before `start`, `Overflow` if an inclusive `end` is `Minutes::MAX`.
    pub fn from_start_end(start: Minutes, end: Minutes, inclusive: bool) -> Result<Self> {
        let end = if inclusive {
            end.checked_add(1).ok_or(RangeError::Overflow { start })?
        } else {
            end
        };
        if start < START_OF_DAY {
            return Err(RangeError::NegativeStart(start));
        }
        if end < start {
            return Err(RangeError::EndBeforeStart { start, end });
        }
        Ok(Self::span(start, end))
    }

    /// A range between two `HH:MM` wall-clock times, end exclusive.
    ///
    /// ```
    /// use meeting_finder::TimeRange;
    ///
    /// let standup = TimeRange::from_clock("09:00", "09:15").unwrap();
    /// assert_eq!(standup.start(), 540);
    /// assert_eq!(standup.duration(), 15);
    /// ```
    pub fn from_clock(start: &str, end: &str) -> Result<Self> {
        Self::from_start_end(parse_clock(start)?, parse_clock(end)?, false)
    }

    pub fn start(&self) -> Minutes {
        self.start
    }

    pub fn end(&self) -> Minutes {
        self.end
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `point` lies in `[start, end)`. An empty range contains nothing.
    pub fn contains(&self, point: Minutes) -> bool {
        self.start <= point && point < self.end
    }

    /// True when every minute of `other` is also in `self`.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two ranges share at least one minute.
    ///
    /// Ranges that merely touch (`a.end == b.start`) do not overlap, and an
    /// empty range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.contains(other.start) || other.contains(self.start)
    }

    /// The part of this range that falls inside the day, or `None` if no
    /// minute of it does.
    pub fn clamp_to_day(&self) -> Option<TimeRange> {
        let start = self.start.max(START_OF_DAY);
        let end = self.end.min(END_OF_DAY);
        (start < end).then_some(Self::span(start, end))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}
