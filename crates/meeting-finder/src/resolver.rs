//! Find the windows of a day in which every required attendee is free.
//!
//! Events that involve at least one required attendee are clipped to the day,
//! sorted by start and merged into disjoint busy blocks. The free windows are
//! the gaps between consecutive busy blocks, kept only when long enough for the
//! requested meeting.
//!
//! Two zero-length markers, one at the start of the day and one at its end,
//! are merged along with the events. They guarantee the busy list always begins
//! at `00:00` and ends at `24:00`, so the first and last gaps need no special
//! handling.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::event::{Event, MeetingRequest};
use crate::time_range::{Minutes, TimeRange, END_OF_DAY, START_OF_DAY};

/// Busy blocks and free windows for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    /// Merged busy blocks (sorted by start, non-overlapping, non-touching).
    pub busy: Vec<TimeRange>,
    /// Free windows at least as long as the requested duration.
    pub free: Vec<TimeRange>,
}

/// True when a meeting of `duration` minutes could fit in a day at all.
fn is_schedulable(duration: Minutes) -> bool {
    (0..=END_OF_DAY).contains(&duration)
}

/// Answer requests that need no interval work.
fn short_circuit(request: &MeetingRequest) -> Option<Vec<TimeRange>> {
    if request.attendees.is_empty() {
        debug!("no required attendees, whole day is available");
        return Some(vec![TimeRange::WHOLE_DAY]);
    }
    if !is_schedulable(request.duration) {
        debug!(
            duration = request.duration,
            "requested duration does not fit in a day"
        );
        return Some(Vec::new());
    }
    None
}

/// Collect the day-clipped ranges of events involving any of `required`,
/// together with the two day-boundary markers.
fn occupied_ranges<'a, I>(events: I, required: &BTreeSet<String>) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut occupied = vec![
        TimeRange::span(START_OF_DAY, START_OF_DAY),
        TimeRange::span(END_OF_DAY, END_OF_DAY),
    ];
    occupied.extend(
        events
            .into_iter()
            .filter(|event| event.involves_any(required))
            .filter_map(|event| event.when.clamp_to_day()),
    );
    occupied
}

/// Sort and merge overlapping or touching ranges in one forward sweep.
///
/// Returns a sorted list in which every range ends strictly before the next
/// one starts.
fn merge_occupied(mut occupied: Vec<TimeRange>) -> Vec<TimeRange> {
    occupied.sort();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(occupied.len());
    for range in occupied {
        if let Some(last) = merged.last_mut() {
            if last.contains_range(&range) {
                continue;
            }
            if range.start() <= last.end() {
                *last = TimeRange::span(last.start(), range.end());
                continue;
            }
        }
        merged.push(range);
    }

    for range in &merged {
        trace!(start = range.start(), end = range.end(), "merged busy block");
    }
    merged
}

/// The gaps between consecutive merged ranges that last at least `min_duration`.
fn free_windows(merged: &[TimeRange], min_duration: Minutes) -> Vec<TimeRange> {
    merged
        .windows(2)
        .map(|pair| TimeRange::span(pair[0].end(), pair[1].start()))
        .filter(|gap| gap.duration() >= min_duration)
        .collect()
}

/// Drop the unmerged boundary markers, leaving only real busy time.
fn busy_blocks(merged: Vec<TimeRange>) -> Vec<TimeRange> {
    merged.into_iter().filter(|r| !r.is_empty()).collect()
}

/// Find every free window of the day long enough for `request`.
///
/// - No required attendees: the whole day is returned.
/// - A duration below zero or above a full day: nothing is returned.
/// - Otherwise: the maximal windows in which none of the required attendees
///   has an event, each at least `request.duration` minutes long, in
///   ascending start order.
///
/// The caller's events are only read; any iterable of `&Event` works.
///
/// # Examples
///
/// ```
/// use meeting_finder::{query, Event, MeetingRequest, TimeRange};
///
/// let events = vec![Event::new(
///     "standup",
///     TimeRange::from_clock("01:00", "02:00").unwrap(),
///     ["A"],
/// )];
/// let request = MeetingRequest::new(["A"], 30);
///
/// let free = query(&events, &request);
/// assert_eq!(
///     free,
///     vec![
///         TimeRange::from_start_end(0, 60, false).unwrap(),
///         TimeRange::from_start_end(120, 1440, false).unwrap(),
///     ]
/// );
/// ```
pub fn query<'a, I>(events: I, request: &MeetingRequest) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    if let Some(answer) = short_circuit(request) {
        return answer;
    }

    let occupied = occupied_ranges(events, &request.attendees);
    let relevant = occupied.len() - 2;
    let merged = merge_occupied(occupied);
    let free = free_windows(&merged, request.duration);

    debug!(
        relevant_events = relevant,
        busy_blocks = merged.iter().filter(|r| !r.is_empty()).count(),
        free_windows = free.len(),
        "resolved meeting availability"
    );
    free
}

/// The merged busy blocks of the required attendees, clipped to the day.
///
/// Empty when the request has no required attendees. The requested duration
/// plays no part.
pub fn busy_periods<'a, I>(events: I, request: &MeetingRequest) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    if request.attendees.is_empty() {
        return Vec::new();
    }
    busy_blocks(merge_occupied(occupied_ranges(events, &request.attendees)))
}

/// Busy blocks and free windows in one pass.
///
/// `free` is always equal to [`query`] for the same inputs. `busy` is still
/// reported when the duration is out of range.
pub fn resolve<'a, I>(events: I, request: &MeetingRequest) -> Availability
where
    I: IntoIterator<Item = &'a Event>,
{
    if request.attendees.is_empty() {
        return Availability {
            busy: Vec::new(),
            free: vec![TimeRange::WHOLE_DAY],
        };
    }

    let merged = merge_occupied(occupied_ranges(events, &request.attendees));
    let free = if is_schedulable(request.duration) {
        free_windows(&merged, request.duration)
    } else {
        debug!(
            duration = request.duration,
            "requested duration does not fit in a day"
        );
        Vec::new()
    };
    let busy = busy_blocks(merged);

    debug!(
        busy_blocks = busy.len(),
        free_windows = free.len(),
        "resolved meeting availability"
    );
    Availability { busy, free }
}

/// The earliest free window for `request`, if there is one.
pub fn first_available<'a, I>(events: I, request: &MeetingRequest) -> Option<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    query(events, request).into_iter().next()
}
