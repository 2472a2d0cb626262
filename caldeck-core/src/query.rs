//! Pure queries over an event snapshot.
//!
//! Every function borrows the events and returns references in the order
//! they were given, unless it says otherwise.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::date::shift_days;
use crate::event::Event;

/// Events on exactly `day`.
pub fn by_date(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.is_on(day)).collect()
}

/// Events with `start <= date <= end`. An inverted range matches nothing.
pub fn by_date_range(events: &[Event], start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect()
}

/// Events in the seven days starting at `week_start`.
pub fn by_week(events: &[Event], week_start: NaiveDate) -> Vec<&Event> {
    by_date_range(events, week_start, shift_days(week_start, 6))
}

/// Case-insensitive substring search over title and description.
///
/// An empty query is no filter at all and returns every event. Whitespace
/// is part of the needle.
pub fn search<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| matches_query(e, query)).collect()
}

/// Whether `event` passes the search `query`. The empty query matches everything.
pub fn matches_query(event: &Event, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    event.title.to_lowercase().contains(&needle)
        || event
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Sort by "HH:MM" text ascending, untimed events last.
///
/// The sort is stable: events with equal times, and all untimed events,
/// keep their relative order.
pub fn sort_by_time(events: &mut [&Event]) {
    events.sort_by(|a, b| compare_times(a.time.as_deref(), b.time.as_deref()));
}

fn compare_times(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Hour of a "HH:MM" time: the integer before the colon, if it is 0..=23.
pub fn hour_of(time: &str) -> Option<u32> {
    let hour = time.split(':').next()?.trim();
    hour.parse::<u32>().ok().filter(|h| *h < 24)
}
