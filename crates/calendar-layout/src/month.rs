//! Month and year grids built out of week rows.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::event::Event;
use crate::prepare;
use crate::week_span::{self, WeekLayout};
use crate::window::{WeekStart, WeekWindow, DAYS_PER_WEEK};

/// A month grid: one week layout per row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLayout<'a> {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekLayout<'a>>,
    /// Per row and column, whether the day belongs to this month. Leading and
    /// trailing days from the neighbouring months are `false`.
    pub in_month: Vec<[bool; DAYS_PER_WEEK]>,
}

fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let invalid = || LayoutError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;
    Ok((first, last))
}

/// The week rows of a month grid, from the week containing the 1st through
/// the week containing the last day.
///
/// # Errors
/// Returns `LayoutError::InvalidMonth` if `month` is not in `1..=12` or the
/// date is out of range.
pub fn month_weeks(year: i32, month: u32, week_start: WeekStart) -> Result<Vec<WeekWindow>> {
    let (first, last) = month_bounds(year, month)?;

    let mut weeks = Vec::new();
    let mut week = Some(WeekWindow::containing(first, week_start));
    while let Some(w) = week.filter(|w| w.start <= last) {
        weeks.push(w);
        week = w.next();
    }
    Ok(weeks)
}

/// Lay out the span events of every week row of a month.
///
/// # Errors
/// Returns `LayoutError::InvalidMonth` for an invalid `year`/`month`.
pub fn layout_month(
    events: &[Event],
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Result<MonthLayout<'_>> {
    let rows = month_weeks(year, month, week_start)?;

    let flags = rows
        .iter()
        .map(|week| week.days().map(|day| in_month(day, year, month)))
        .collect();
    let weeks = rows
        .into_iter()
        .map(|week| week_span::layout_week(prepare::events_for_week(events, week), week))
        .collect();

    Ok(MonthLayout {
        year,
        month,
        weeks,
        in_month: flags,
    })
}

/// Lay out all twelve months of `year`.
///
/// # Errors
/// Returns `LayoutError::InvalidMonth` if `year` is outside chrono's range.
pub fn layout_year(events: &[Event], year: i32, week_start: WeekStart) -> Result<Vec<MonthLayout<'_>>> {
    (1..=12)
        .map(|month| layout_month(events, year, month, week_start))
        .collect()
}

/// Whether `date` falls in the given month.
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
