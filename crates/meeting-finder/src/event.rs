//! Calendar entries and meeting requests -- the resolver's two inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::{Minutes, TimeRange};

/// An existing calendar entry for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub title: String,
    /// The time this event occupies.
    pub when: TimeRange,
    /// People attending. Order and duplicates carry no meaning.
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True when at least one of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}

/// A request for a meeting of `duration` minutes that every one of
/// `attendees` must be able to attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub attendees: BTreeSet<String>,
    /// Requested length in minutes. Not validated on construction; the
    /// resolver treats values outside `0..=1440` as unschedulable.
    pub duration: Minutes,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: Minutes) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            duration,
        }
    }
}
