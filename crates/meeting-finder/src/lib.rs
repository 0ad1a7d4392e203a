//! # meeting-finder
//!
//! Find every window of a day in which all required attendees of a meeting
//! are free and which is long enough to hold the meeting.
//!
//! Times are whole minutes since midnight. Ranges are half-open `[start, end)`
//! and the day runs from `0` to `1440`.
//!
//! ## Modules
//!
//! - [`time_range`] — `TimeRange` and the day-boundary constants
//! - [`clock`] — `HH:MM` parsing and formatting
//! - [`event`] — `Event` and `MeetingRequest` input records
//! - [`resolver`] — Busy-block merging and free-window search
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod resolver;
pub mod time_range;

pub use error::RangeError;
pub use event::{Event, MeetingRequest};
pub use resolver::{busy_periods, first_available, query, resolve, Availability};
pub use time_range::{Minutes, TimeRange, END_OF_DAY, START_OF_DAY};
