//! Scenario tests for the meeting availability query.
//!
//! Times are minutes since midnight; ranges are `[start, end)`.

use meeting_finder::{
    busy_periods, first_available, query, resolve, Event, MeetingRequest, TimeRange,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn range(start: i64, end: i64) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

fn event(attendees: &[&str], start: i64, end: i64) -> Event {
    Event::new("Event", range(start, end), attendees.iter().copied())
}

fn request(attendees: &[&str], duration: i64) -> MeetingRequest {
    MeetingRequest::new(attendees.iter().copied(), duration)
}

fn no_events() -> Vec<Event> {
    Vec::new()
}

// ── Edge-case short-circuits ────────────────────────────────────────────────

#[test]
fn no_attendees_returns_whole_day() {
    let events = vec![event(&["A"], 0, 1440), event(&["B"], 60, 120)];

    let free = query(&events, &request(&[], 30));

    assert_eq!(free, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_attendees_and_no_events_returns_whole_day() {
    assert_eq!(query(&no_events(), &request(&[], 30)), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn duration_longer_than_a_day_returns_nothing() {
    let free = query(&no_events(), &request(&["A"], 2000));
    assert!(free.is_empty(), "a 2000-minute meeting cannot fit in a day");
}

#[test]
fn duration_just_over_a_day_returns_nothing() {
    assert!(query(&no_events(), &request(&["A"], 1441)).is_empty());
}

#[test]
fn negative_duration_returns_nothing() {
    assert!(query(&no_events(), &request(&["A"], -1)).is_empty());
}

#[test]
fn duration_of_exactly_a_day_fits_an_empty_day() {
    assert_eq!(
        query(&no_events(), &request(&["A"], 1440)),
        vec![TimeRange::WHOLE_DAY]
    );
}

// ── Basic scheduling ────────────────────────────────────────────────────────

#[test]
fn single_event_splits_the_day() {
    let events = vec![event(&["A"], 60, 120)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![range(0, 60), range(120, 1440)]);
}

#[test]
fn overlapping_events_merge_into_one_busy_block() {
    let events = vec![event(&["A"], 60, 120), event(&["A"], 90, 150)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![range(0, 60), range(150, 1440)]);
}

#[test]
fn event_for_someone_else_is_ignored() {
    let events = vec![event(&["B"], 0, 1440)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn fully_booked_day_has_no_window() {
    let events = vec![event(&["A"], 0, 1440)];

    let free = query(&events, &request(&["A"], 1));

    assert!(free.is_empty());
}

#[test]
fn no_events_gives_whole_day() {
    assert_eq!(
        query(&no_events(), &request(&["A"], 30)),
        vec![TimeRange::WHOLE_DAY]
    );
}

#[test]
fn every_attendee_conflict_counts() {
    // A busy 08:00-08:30, B busy 09:00-10:00.
    let events = vec![event(&["A"], 480, 510), event(&["B"], 540, 600)];

    let free = query(&events, &request(&["A", "B"], 30));

    assert_eq!(
        free,
        vec![range(0, 480), range(510, 540), range(600, 1440)]
    );
}

#[test]
fn event_shared_with_a_required_attendee_is_relevant() {
    let events = vec![event(&["B", "C"], 600, 660)];

    let free = query(&events, &request(&["A", "C"], 30));

    assert_eq!(free, vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn nested_event_is_absorbed() {
    // |-------A-------|
    //     |--A--|
    let events = vec![event(&["A"], 480, 600), event(&["A"], 510, 540)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![range(0, 480), range(600, 1440)]);
}

#[test]
fn events_with_equal_start_are_merged() {
    let events = vec![event(&["A"], 480, 540), event(&["A"], 480, 600)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![range(0, 480), range(600, 1440)]);
}

#[test]
fn back_to_back_events_leave_no_gap() {
    let events = vec![event(&["A"], 480, 540), event(&["A"], 540, 600)];

    let free = query(&events, &request(&["A"], 0));

    assert_eq!(free, vec![range(0, 480), range(600, 1440)]);
}

#[test]
fn gap_exactly_as_long_as_the_meeting_is_kept() {
    let events = vec![event(&["A"], 0, 510), event(&["A"], 540, 1440)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![range(510, 540)]);
}

#[test]
fn gap_one_minute_too_short_is_dropped() {
    let events = vec![event(&["A"], 0, 510), event(&["A"], 540, 1440)];

    let free = query(&events, &request(&["A"], 31));

    assert!(free.is_empty());
}

#[test]
fn event_at_start_of_day_removes_the_leading_gap() {
    let events = vec![event(&["A"], 0, 60)];

    let free = query(&events, &request(&["A"], 0));

    assert_eq!(free, vec![range(60, 1440)]);
}

#[test]
fn event_until_end_of_day_removes_the_trailing_gap() {
    let events = vec![event(&["A"], 1380, 1440)];

    let free = query(&events, &request(&["A"], 0));

    assert_eq!(free, vec![range(0, 1380)]);
}

#[test]
fn event_running_past_midnight_is_clipped() {
    let events = vec![event(&["A"], 1380, 1500)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![range(0, 1380)]);
}

#[test]
fn event_after_the_day_is_ignored() {
    let events = vec![event(&["A"], 1500, 1600)];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(free, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn zero_length_event_blocks_nothing() {
    let events = vec![event(&["A"], 600, 600)];

    let free = query(&events, &request(&["A"], 0));

    assert_eq!(free, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn unsorted_input_gives_sorted_output() {
    let events = vec![
        event(&["A"], 900, 960),
        event(&["A"], 300, 360),
        event(&["A"], 600, 660),
    ];

    let free = query(&events, &request(&["A"], 30));

    assert_eq!(
        free,
        vec![
            range(0, 300),
            range(360, 600),
            range(660, 900),
            range(960, 1440)
        ]
    );
}

#[test]
fn caller_events_are_left_untouched() {
    let events = vec![event(&["A"], 900, 960), event(&["A"], 300, 360)];
    let before = events.clone();

    let _ = query(&events, &request(&["A"], 30));

    assert_eq!(events, before);
}

#[test]
fn accepts_any_iterable_of_events() {
    let a = event(&["A"], 60, 120);
    let b = event(&["A"], 90, 150);
    let events = [&a, &b];

    let free = query(events.iter().copied(), &request(&["A"], 30));

    assert_eq!(free, vec![range(0, 60), range(150, 1440)]);
}

// ── Supplementary operations ────────────────────────────────────────────────

#[test]
fn busy_periods_are_merged_and_clipped() {
    let events = vec![
        event(&["A"], 60, 120),
        event(&["A"], 90, 150),
        event(&["B"], 200, 300),
        event(&["A"], 1400, 1500),
    ];

    let busy = busy_periods(&events, &request(&["A"], 30));

    assert_eq!(busy, vec![range(60, 150), range(1400, 1440)]);
}

#[test]
fn busy_periods_without_attendees_is_empty() {
    let events = vec![event(&["A"], 60, 120)];
    assert!(busy_periods(&events, &request(&[], 30)).is_empty());
}

#[test]
fn resolve_reports_busy_and_free() {
    let events = vec![event(&["A"], 60, 120), event(&["A"], 90, 150)];
    let req = request(&["A"], 30);

    let availability = resolve(&events, &req);

    assert_eq!(availability.busy, vec![range(60, 150)]);
    assert_eq!(availability.free, query(&events, &req));
}

#[test]
fn resolve_keeps_busy_blocks_for_impossible_duration() {
    let events = vec![event(&["A"], 60, 120)];

    let availability = resolve(&events, &request(&["A"], 2000));

    assert_eq!(availability.busy, vec![range(60, 120)]);
    assert!(availability.free.is_empty());
}

#[test]
fn resolve_without_attendees_is_whole_day() {
    let events = vec![event(&["A"], 60, 120)];

    let availability = resolve(&events, &request(&[], 30));

    assert!(availability.busy.is_empty());
    assert_eq!(availability.free, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn first_available_picks_the_earliest_window() {
    // Morning gaps are too short for an hour.
    let events = vec![event(&["A"], 0, 30), event(&["A"], 60, 600)];

    let slot = first_available(&events, &request(&["A"], 60));

    assert_eq!(slot, Some(range(600, 1440)));
}

#[test]
fn first_available_none_when_day_is_full() {
    let events = vec![event(&["A"], 0, 1440)];
    assert_eq!(first_available(&events, &request(&["A"], 15)), None);
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn request_and_events_deserialize_from_json() {
    let events: Vec<Event> = serde_json::from_str(
        r#"[{"title":"Sync","when":{"start":60,"end":120},"attendees":["A","A"]}]"#,
    )
    .unwrap();
    let req: MeetingRequest =
        serde_json::from_str(r#"{"attendees":["A"],"duration":30}"#).unwrap();

    assert_eq!(events[0].attendees.len(), 1, "duplicate attendees collapse");
    assert_eq!(query(&events, &req), vec![range(0, 60), range(120, 1440)]);
}

#[test]
fn invalid_range_is_rejected_on_deserialize() {
    let result: Result<TimeRange, _> = serde_json::from_str(r#"{"start":120,"end":60}"#);
    assert!(result.is_err(), "end before start must not deserialize");
}

#[test]
fn title_is_optional() {
    let event: Event =
        serde_json::from_str(r#"{"when":{"start":0,"end":30},"attendees":["A"]}"#).unwrap();
    assert!(event.title.is_empty());
}
