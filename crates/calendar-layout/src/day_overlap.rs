//! Day overlap layout -- side-by-side columns for overlapping timed events of one day.
//!
//! Events are split into clusters of transitively overlapping events (busy
//! periods). Within a cluster every event takes the first column whose latest
//! occupant has already ended; `total_columns` is the number of columns that
//! cluster ended up using.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::trace;

use crate::event::{Event, EventId};

/// Column assignment for one timed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapPlacement {
    /// Zero-based column within the event's cluster.
    pub column: usize,
    /// Columns used by the cluster. This is what the greedy pass achieved,
    /// which can exceed the peak number of simultaneous events.
    pub total_columns: usize,
}

/// A cluster being built: members with their column, and the end time of the
/// latest occupant of each column.
#[derive(Default)]
struct Cluster<'a> {
    members: Vec<(&'a Event, usize)>,
    column_ends: Vec<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl<'a> Cluster<'a> {
    fn accepts(&self, start: NaiveDateTime) -> bool {
        self.end.is_some_and(|end| start < end)
    }

    fn place(&mut self, event: &'a Event, start: NaiveDateTime, end: NaiveDateTime) {
        let column = match self.column_ends.iter().position(|&e| e <= start) {
            Some(column) => {
                self.column_ends[column] = end;
                column
            }
            None => {
                self.column_ends.push(end);
                self.column_ends.len() - 1
            }
        };
        self.members.push((event, column));
        self.end = Some(self.end.map_or(end, |e| e.max(end)));
    }

    fn close(self, out: &mut Vec<(&'a Event, OverlapPlacement)>) {
        let total_columns = self.column_ends.len();
        trace!(
            events = self.members.len(),
            total_columns,
            "closed overlap cluster"
        );
        out.extend(self.members.into_iter().map(|(event, column)| {
            (
                event,
                OverlapPlacement {
                    column,
                    total_columns,
                },
            )
        }));
    }
}

/// Lay out timed events of one day, keeping input order in the result.
///
/// `events` must be sorted by start ascending (stable). Events with
/// `end <= start` are placed as zero-width at their start.
pub fn layout_day_ordered<'a, I>(events: I) -> Vec<(&'a Event, OverlapPlacement)>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut placed = Vec::new();
    let mut cluster = Cluster::default();

    for event in events {
        let start = event.start;
        let end = event.end.max(start);

        if !cluster.members.is_empty() && !cluster.accepts(start) {
            std::mem::take(&mut cluster).close(&mut placed);
        }
        cluster.place(event, start, end);
    }

    if !cluster.members.is_empty() {
        cluster.close(&mut placed);
    }

    placed
}

/// Lay out timed events of one day, keyed by event id.
///
/// If two events share an id the later one wins.
pub fn layout_day<'a, I>(events: I) -> BTreeMap<EventId, OverlapPlacement>
where
    I: IntoIterator<Item = &'a Event>,
{
    layout_day_ordered(events)
        .into_iter()
        .map(|(event, placement)| (event.id.clone(), placement))
        .collect()
}
