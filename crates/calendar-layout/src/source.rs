//! Event source adapter -- turns raw event records into engine [`Event`]s.
//!
//! Raw records come from the host calendar store as loosely typed JSON. Records
//! whose start or end is missing or unparseable are dropped with a warning;
//! they never reach the layout passes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LayoutError, Result};
use crate::event::Event;

/// An event record as delivered by the event source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub color: Option<String>,
}

/// Parse an IANA timezone name.
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if `name` is not a known IANA identifier.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| LayoutError::InvalidTimezone(name.to_string()))
}

/// Parse a datetime string into wall-clock time in `tz`.
///
/// Accepts RFC 3339 (converted into `tz`), a naive `YYYY-MM-DDTHH:MM[:SS]`
/// taken as already local, or a bare `YYYY-MM-DD` meaning midnight.
///
/// # Errors
/// Returns `LayoutError::InvalidDateTime` if none of the formats match.
pub fn parse_datetime(s: &str, tz: Tz) -> Result<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz).naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ndt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| LayoutError::InvalidDateTime(format!("'{}': {}", s, e)))
}

/// Convert one raw record into an [`Event`].
///
/// # Errors
/// Returns `LayoutError::InvalidDateTime` if the start or end is missing or
/// cannot be parsed.
pub fn parse_event(raw: &RawEvent, tz: Tz) -> Result<Event> {
    let field = |value: &Option<String>, name: &str| -> Result<NaiveDateTime> {
        let value = value.as_deref().ok_or_else(|| {
            LayoutError::InvalidDateTime(format!("event '{}' has no {}", raw.id, name))
        })?;
        parse_datetime(value, tz)
    };

    Ok(Event {
        id: raw.id.clone().into(),
        title: raw.title.clone(),
        start: field(&raw.start, "start")?,
        end: field(&raw.end, "end")?,
        all_day: raw.all_day,
        color: raw.color.clone(),
    })
}

/// Convert raw records, dropping (and logging) the malformed ones.
pub fn parse_events(raw: &[RawEvent], tz: Tz) -> Vec<Event> {
    raw.iter()
        .filter_map(|r| match parse_event(r, tz) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(id = %r.id, error = %e, "dropping malformed event");
                None
            }
        })
        .collect()
}

/// Parse a JSON array of raw records.
///
/// # Errors
/// Returns `LayoutError::InvalidInput` if `json` is not an array of event
/// records. Individual malformed datetimes are dropped, not reported.
pub fn parse_events_json(json: &str, tz: Tz) -> Result<Vec<Event>> {
    let raw: Vec<RawEvent> =
        serde_json::from_str(json).map_err(|e| LayoutError::InvalidInput(e.to_string()))?;
    Ok(parse_events(&raw, tz))
}
