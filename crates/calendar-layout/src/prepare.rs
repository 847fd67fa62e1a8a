//! Selecting and ordering events for the two layout passes.
//!
//! Both layouts are order-sensitive. These helpers establish the orders they
//! expect, using stable sorts so ties keep the source order.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::event::Event;
use crate::window::{self, WeekWindow};

/// Whether an event belongs in the week span layout rather than a day timeline.
///
/// All-day events always do; timed events do when they touch more than one
/// calendar day.
pub fn is_span_event(event: &Event) -> bool {
    event.all_day || window::span_days(event) > 1
}

/// Span events that intersect `week`, ordered by visible start ascending, then
/// by visible column count descending, then by duration descending.
///
/// Wider bars go first so shorter ones fill the gaps they leave. Elapsed
/// duration only separates events covering the same columns.
pub fn events_for_week(events: &[Event], week: WeekWindow) -> Vec<&Event> {
    let mut selected: Vec<_> = events
        .iter()
        .filter(|e| is_span_event(e))
        .filter_map(|e| window::clamp_to_window(e, week.start, week.end()).map(|span| (span, e)))
        .collect();

    selected.sort_by_key(|&(span, e)| {
        let columns = window::day_offset(span.visible_end, span.visible_start);
        (span.visible_start, Reverse(columns), Reverse(e.duration()))
    });
    selected.into_iter().map(|(_, e)| e).collect()
}

/// Timed single-day events on `day`, ordered by start time.
pub fn timed_events_for_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|e| !is_span_event(e) && window::first_day(e) == day)
        .collect();

    selected.sort_by_key(|e| e.start);
    selected
}
