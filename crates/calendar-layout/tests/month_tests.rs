//! Tests for month and year grids.

use calendar_layout::month::in_month;
use calendar_layout::{layout_month, layout_year, month_weeks, Event, LayoutError, WeekStart};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn march_2026_sunday_start_has_five_rows() {
    // March 1st 2026 is a Sunday, March 31st a Tuesday.
    let weeks = month_weeks(2026, 3, WeekStart::SUNDAY).unwrap();
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0].start, date(2026, 3, 1));
    assert_eq!(weeks[4].start, date(2026, 3, 29));
}

#[test]
fn march_2026_monday_start_has_six_rows() {
    let weeks = month_weeks(2026, 3, WeekStart::MONDAY).unwrap();
    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[0].start, date(2026, 2, 23));
    assert_eq!(weeks[5].start, date(2026, 3, 30));
}

#[test]
fn february_2026_fits_four_rows() {
    let weeks = month_weeks(2026, 2, WeekStart::SUNDAY).unwrap();
    assert_eq!(weeks.len(), 4);
    assert_eq!(weeks[3].end(), date(2026, 2, 28));
}

#[test]
fn december_rolls_into_next_year() {
    let weeks = month_weeks(2026, 12, WeekStart::MONDAY).unwrap();
    let last = weeks.last().unwrap();
    assert!(last.contains(date(2026, 12, 31)));
}

#[test]
fn invalid_month_is_rejected() {
    assert_eq!(
        month_weeks(2026, 13, WeekStart::SUNDAY),
        Err(LayoutError::InvalidMonth {
            year: 2026,
            month: 13
        })
    );
    assert!(month_weeks(2026, 0, WeekStart::SUNDAY).is_err());
}

#[test]
fn event_crossing_week_rows_appears_in_both() {
    // Friday 03-06 through Tuesday 03-10, Sunday-start rows.
    let events = vec![Event::all_day("trip", "Trip", date(2026, 3, 6), date(2026, 3, 10))];
    let month = layout_month(&events, 2026, 3, WeekStart::SUNDAY).unwrap();

    let first = month.weeks[0].placement("trip").unwrap();
    assert_eq!((first.start_column, first.end_column), (5, 6));
    assert!(!first.continues_left);
    assert!(first.continues_right);

    let second = month.weeks[1].placement("trip").unwrap();
    assert_eq!((second.start_column, second.end_column), (0, 2));
    assert!(second.continues_left);
    assert!(!second.continues_right);

    assert!(month.weeks[2].placements.is_empty());
}

#[test]
fn leading_days_belong_to_previous_month() {
    let weeks = month_weeks(2026, 3, WeekStart::MONDAY).unwrap();
    let days = weeks[0].days();
    assert!(!in_month(days[0], 2026, 3));
    assert!(in_month(days[6], 2026, 3));
}

#[test]
fn month_layout_flags_days_outside_the_month() {
    let month = layout_month(&[], 2026, 3, WeekStart::MONDAY).unwrap();
    assert_eq!(month.in_month.len(), month.weeks.len());

    // First row: Mon 02-23 .. Sun 03-01.
    assert_eq!(month.in_month[0], [false, false, false, false, false, false, true]);
    // Last row: Mon 03-30, Tue 03-31, then April.
    assert_eq!(month.in_month[5], [true, true, false, false, false, false, false]);
    assert!(month.in_month[2].iter().all(|&d| d));
}

#[test]
fn year_layout_has_twelve_months() {
    let events = vec![Event::all_day("ny", "New Year", date(2026, 1, 1), date(2026, 1, 1))];
    let year = layout_year(&events, 2026, WeekStart::SUNDAY).unwrap();

    assert_eq!(year.len(), 12);
    assert_eq!(year[0].month, 1);
    assert_eq!(year[11].month, 12);
    assert!(year[0].weeks[0].placement("ny").is_some());
    // February's rows do not reach back to January 1st.
    assert!(year[1].weeks.iter().all(|w| w.placement("ny").is_none()));
}
