//! Window math -- day offsets and clamping of event intervals to a visible window.
//!
//! All calculations happen on wall-clock calendar dates (`NaiveDate`). Day
//! offsets are the difference between two dates, never elapsed time divided by
//! 24 hours, so a window that crosses a DST transition still maps every event
//! to the right column.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::event::Event;

/// Number of columns in a week window.
pub const DAYS_PER_WEEK: usize = 7;

/// First day of the week, configured as an index `0..=6` where 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: WeekStart = WeekStart(0);
    pub const MONDAY: WeekStart = WeekStart(1);

    /// # Errors
    /// Returns `LayoutError::InvalidWeekStart` if `index` is not in `0..=6`.
    pub fn from_index(index: u8) -> Result<Self> {
        if index < 7 {
            Ok(WeekStart(index))
        } else {
            Err(LayoutError::InvalidWeekStart(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn weekday(self) -> Weekday {
        const FROM_SUNDAY: [Weekday; 7] = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];
        FROM_SUNDAY[self.0 as usize]
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = LayoutError;

    fn try_from(index: u8) -> Result<Self> {
        WeekStart::from_index(index)
    }
}

impl From<WeekStart> for u8 {
    fn from(ws: WeekStart) -> u8 {
        ws.0
    }
}

/// A 7-day window: `start` is column 0, `start + 6` is column 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
}

impl WeekWindow {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// The week window that contains `date`, given the configured first day.
    pub fn containing(date: NaiveDate, week_start: WeekStart) -> Self {
        let weekday = date.weekday().num_days_from_sunday() as i64;
        let back = (weekday - week_start.index() as i64).rem_euclid(DAYS_PER_WEEK as i64);
        Self {
            start: date
                .checked_sub_signed(Duration::days(back))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Last day of the window (inclusive). Saturates at `NaiveDate::MAX`.
    pub fn end(&self) -> NaiveDate {
        self.day(DAYS_PER_WEEK - 1)
    }

    /// Date of `column`, saturating at `NaiveDate::MAX`.
    pub fn day(&self, column: usize) -> NaiveDate {
        self.start
            .checked_add_signed(Duration::days(column as i64))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        std::array::from_fn(|i| self.day(i))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// The window immediately after this one, or `None` past `NaiveDate::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.start
            .checked_add_signed(Duration::days(DAYS_PER_WEEK as i64))
            .map(Self::new)
    }
}

/// An event's day range after intersecting it with a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedSpan {
    pub visible_start: NaiveDate,
    pub visible_end: NaiveDate,
    /// The event starts before the window.
    pub continues_left: bool,
    /// The event's last day falls after the window.
    pub continues_right: bool,
}

/// Whole calendar days from `window_start` to `date` (negative when `date` is earlier).
pub fn day_offset(date: NaiveDate, window_start: NaiveDate) -> i64 {
    (date - window_start).num_days()
}

/// First calendar day the event touches.
pub fn first_day(event: &Event) -> NaiveDate {
    event.start.date()
}

/// Last calendar day the event touches, treating `end` as exclusive.
///
/// One millisecond is taken off `end` before truncating to the date, so an
/// all-day event ending at the following midnight does not spill into that
/// day. The same holds for timed events ending exactly at midnight. A
/// degenerate interval (`end <= start`) collapses onto its start day.
pub fn last_day(event: &Event) -> NaiveDate {
    let inclusive_end = event
        .end
        .checked_sub_signed(Duration::milliseconds(1))
        .map_or(event.end.date(), |t| t.date());
    inclusive_end.max(first_day(event))
}

/// Number of calendar days the event touches (at least 1).
pub fn span_days(event: &Event) -> i64 {
    day_offset(last_day(event), first_day(event)) + 1
}

/// Intersect an event with the inclusive day range `[window_start, window_end]`.
///
/// Returns `None` when the event lies entirely outside the window.
pub fn clamp_to_window(
    event: &Event,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Option<ClampedSpan> {
    let first = first_day(event);
    let last = last_day(event);

    if last < window_start || first > window_end {
        return None;
    }

    Some(ClampedSpan {
        visible_start: first.max(window_start),
        visible_end: last.min(window_end),
        continues_left: first < window_start,
        continues_right: last > window_end,
    })
}
