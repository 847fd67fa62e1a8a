//! The event value consumed by the layout engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque event identifier, stable across the event's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId(s)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar event as supplied by the event source.
///
/// `start` and `end` are wall-clock datetimes in the calendar's display
/// timezone. For all-day events `end` is exclusive: an event covering only
/// March 2nd has `end` at March 3rd 00:00.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    /// Rendering hint, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Build a timed event.
    pub fn timed(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            all_day: false,
            color: None,
        }
    }

    /// Build an all-day event covering `first_day..=last_day`.
    ///
    /// The stored `end` follows the exclusive convention (midnight after
    /// `last_day`).
    pub fn all_day(
        id: impl Into<EventId>,
        title: impl Into<String>,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Self {
        let end_day = last_day.succ_opt().unwrap_or(last_day);
        Self {
            id: id.into(),
            title: title.into(),
            start: first_day.and_time(chrono::NaiveTime::MIN),
            end: end_day.and_time(chrono::NaiveTime::MIN),
            all_day: true,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Elapsed duration; zero for degenerate intervals (`end <= start`).
    pub fn duration(&self) -> chrono::Duration {
        (self.end - self.start).max(chrono::Duration::zero())
    }
}
