//! Week span layout -- places all-day and multi-day events into lanes across a 7-day window.
//!
//! Events are assigned greedily: each event takes the lowest lane whose
//! existing column ranges do not intersect its own (inclusive bounds). The
//! result is not guaranteed to use the minimum number of lanes, but it is fully
//! determined by the input order, which callers establish with
//! [`crate::prepare::events_for_week`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::event::Event;
use crate::window::{self, WeekWindow, DAYS_PER_WEEK};

/// Where one event sits in the week grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanPlacement<'a> {
    pub event: &'a Event,
    pub lane: usize,
    pub start_column: usize,
    pub end_column: usize,
    /// The event starts before the window.
    pub continues_left: bool,
    /// The event ends after the window.
    pub continues_right: bool,
}

impl SpanPlacement<'_> {
    pub fn covers(&self, column: usize) -> bool {
        column >= self.start_column && column <= self.end_column
    }
}

/// An occupied grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSlot<'a> {
    pub lane: usize,
    pub column: usize,
    pub event: &'a Event,
    /// Only the first visible column of an event carries its title.
    pub show_title: bool,
    pub continues_left: bool,
    pub continues_right: bool,
}

/// One cell of the column x lane grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Slot<'a> {
    /// Keeps lane N of this column aligned with lane N of its neighbours.
    Empty { lane: usize, column: usize },
    Event(EventSlot<'a>),
}

impl<'a> Slot<'a> {
    pub fn lane(&self) -> usize {
        match self {
            Slot::Empty { lane, .. } => *lane,
            Slot::Event(slot) => slot.lane,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty { .. })
    }

    pub fn event(&self) -> Option<&'a Event> {
        match self {
            Slot::Empty { .. } => None,
            Slot::Event(slot) => Some(slot.event),
        }
    }
}

/// The laid-out week: per-event placements plus the per-column slot grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout<'a> {
    pub window: WeekWindow,
    /// In input order.
    pub placements: Vec<SpanPlacement<'a>>,
    pub columns: [Vec<Slot<'a>>; DAYS_PER_WEEK],
}

impl<'a> WeekLayout<'a> {
    /// Number of lanes in use anywhere in the week.
    pub fn lane_count(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.lane + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn placement(&self, id: &str) -> Option<&SpanPlacement<'a>> {
        self.placements.iter().find(|p| p.event.id.0 == id)
    }
}

/// Lay out span events across a week window.
///
/// `events` must be ordered by visible start ascending, then duration
/// descending. Events that do not intersect the window are skipped.
pub fn layout_week<'a, I>(events: I, window: WeekWindow) -> WeekLayout<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let window_start = window.start;
    let window_end = window.end();

    // Column ranges already taken, per lane.
    let mut lanes: Vec<Vec<(usize, usize)>> = Vec::new();
    let mut placements = Vec::new();

    for event in events {
        let Some(span) = window::clamp_to_window(event, window_start, window_end) else {
            trace!(id = %event.id, "event outside week window, skipped");
            continue;
        };

        let start_column = window::day_offset(span.visible_start, window_start) as usize;
        let end_column = window::day_offset(span.visible_end, window_start) as usize;

        let free_lane = lanes.iter().position(|taken| {
            taken
                .iter()
                .all(|&(s, e)| end_column < s || start_column > e)
        });
        let lane = match free_lane {
            Some(lane) => lane,
            None => {
                lanes.push(Vec::new());
                debug!(id = %event.id, lane = lanes.len() - 1, "opened new lane");
                lanes.len() - 1
            }
        };
        lanes[lane].push((start_column, end_column));

        placements.push(SpanPlacement {
            event,
            lane,
            start_column,
            end_column,
            continues_left: span.continues_left,
            continues_right: span.continues_right,
        });
    }

    let columns = build_grid(&placements);

    WeekLayout {
        window,
        placements,
        columns,
    }
}

/// Expand placements into per-column slot lists, padding unused lanes with
/// empty placeholders up to the highest lane occupied in that column.
fn build_grid<'a>(placements: &[SpanPlacement<'a>]) -> [Vec<Slot<'a>>; DAYS_PER_WEEK] {
    std::array::from_fn(|column| {
        let covering: Vec<&SpanPlacement<'a>> =
            placements.iter().filter(|p| p.covers(column)).collect();

        let Some(max_lane) = covering.iter().map(|p| p.lane).max() else {
            return Vec::new();
        };

        (0..=max_lane)
            .map(|lane| match covering.iter().find(|p| p.lane == lane) {
                Some(p) => Slot::Event(EventSlot {
                    lane,
                    column,
                    event: p.event,
                    show_title: column == p.start_column,
                    continues_left: column > p.start_column || p.continues_left,
                    continues_right: column < p.end_column || p.continues_right,
                }),
                None => Slot::Empty { lane, column },
            })
            .collect()
    })
}
