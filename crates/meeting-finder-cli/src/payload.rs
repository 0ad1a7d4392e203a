//! JSON shapes read and written by the CLI.

use anyhow::{Context, Result};
use meeting_finder::clock::{format_clock, parse_clock};
use meeting_finder::{Availability, Event, MeetingRequest, Minutes, TimeRange};
use serde::{Deserialize, Serialize};

/// Top-level input document.
#[derive(Deserialize)]
pub struct Payload {
    pub request: RequestInput,
    #[serde(default)]
    pub events: Vec<EventInput>,
}

#[derive(Deserialize)]
pub struct RequestInput {
    #[serde(default)]
    pub attendees: Vec<String>,
    pub duration: Minutes,
}

#[derive(Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub start: TimePoint,
    pub end: TimePoint,
}

/// A time given either as minutes since midnight or as `"HH:MM"`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum TimePoint {
    Minutes(Minutes),
    Clock(String),
}

impl TimePoint {
    fn minutes(&self) -> Result<Minutes> {
        match self {
            TimePoint::Minutes(m) => Ok(*m),
            TimePoint::Clock(s) => Ok(parse_clock(s)?),
        }
    }
}

impl Payload {
    /// Parse a JSON document into a request and its events.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid input JSON")
    }

    pub fn meeting_request(&self) -> MeetingRequest {
        MeetingRequest::new(self.request.attendees.iter().cloned(), self.request.duration)
    }

    /// Convert every event, naming the first one that is malformed.
    pub fn events(&self) -> Result<Vec<Event>> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let when = input
                    .start
                    .minutes()
                    .and_then(|start| {
                        let end = input.end.minutes()?;
                        Ok(TimeRange::from_start_end(start, end, false)?)
                    })
                    .with_context(|| format!("Invalid time range for event #{}", i))?;
                Ok(Event::new(input.title.clone(), when, input.attendees.iter().cloned()))
            })
            .collect()
    }
}

#[derive(Serialize)]
pub struct RangeDto {
    start: String,
    end: String,
    start_minute: Minutes,
    end_minute: Minutes,
    duration_minutes: Minutes,
}

impl From<&TimeRange> for RangeDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: format_clock(r.start()),
            end: format_clock(r.end()),
            start_minute: r.start(),
            end_minute: r.end(),
            duration_minutes: r.duration(),
        }
    }
}

#[derive(Serialize)]
pub struct AvailabilityDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    busy: Option<Vec<RangeDto>>,
    free: Vec<RangeDto>,
}

impl AvailabilityDto {
    pub fn new(availability: &Availability, show_busy: bool) -> Self {
        Self {
            busy: show_busy.then(|| availability.busy.iter().map(RangeDto::from).collect()),
            free: availability.free.iter().map(RangeDto::from).collect(),
        }
    }
}
