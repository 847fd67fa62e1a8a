//! Tests for the event source adapter and layout configuration.

use calendar_layout::source::{parse_datetime, parse_events, parse_events_json, parse_timezone, RawEvent};
use calendar_layout::{LayoutConfig, LayoutError, WeekStart};
use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn raw(id: &str, start: Option<&str>, end: Option<&str>) -> RawEvent {
    RawEvent {
        id: id.to_string(),
        title: id.to_uppercase(),
        start: start.map(str::to_string),
        end: end.map(str::to_string),
        ..RawEvent::default()
    }
}

#[test]
fn naive_datetime_is_taken_as_local() {
    let dt = parse_datetime("2026-03-02T09:30:00", Tz::America__New_York).unwrap();
    assert_eq!(dt, at(2026, 3, 2, 9, 30));

    let dt = parse_datetime("2026-03-02T09:30", Tz::UTC).unwrap();
    assert_eq!(dt, at(2026, 3, 2, 9, 30));
}

#[test]
fn bare_date_means_midnight() {
    let dt = parse_datetime("2026-03-02", Tz::UTC).unwrap();
    assert_eq!(dt, at(2026, 3, 2, 0, 0));
}

#[test]
fn rfc3339_is_converted_to_display_timezone() {
    // Before DST: New York is UTC-5.
    let dt = parse_datetime("2026-03-07T14:00:00Z", Tz::America__New_York).unwrap();
    assert_eq!(dt, at(2026, 3, 7, 9, 0));

    // After DST starts on 03-08: New York is UTC-4.
    let dt = parse_datetime("2026-03-09T14:00:00Z", Tz::America__New_York).unwrap();
    assert_eq!(dt, at(2026, 3, 9, 10, 0));
}

#[test]
fn rfc3339_conversion_can_change_the_date() {
    let dt = parse_datetime("2026-03-02T02:00:00Z", Tz::America__Los_Angeles).unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
}

#[test]
fn garbage_datetime_is_an_error() {
    assert!(matches!(
        parse_datetime("next tuesday", Tz::UTC),
        Err(LayoutError::InvalidDateTime(_))
    ));
}

#[test]
fn unknown_timezone_is_an_error() {
    assert_eq!(
        parse_timezone("Mars/Olympus"),
        Err(LayoutError::InvalidTimezone("Mars/Olympus".to_string()))
    );
    assert_eq!(parse_timezone("Europe/London").unwrap(), Tz::Europe__London);
}

#[test]
fn malformed_events_are_dropped() {
    let records = vec![
        raw("ok", Some("2026-03-02T09:00:00"), Some("2026-03-02T10:00:00")),
        raw("no-end", Some("2026-03-02T09:00:00"), None),
        raw("no-start", None, Some("2026-03-02T10:00:00")),
        raw("bad", Some("soon"), Some("2026-03-02T10:00:00")),
    ];

    let events = parse_events(&records, Tz::UTC);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id.0, "ok");
    assert_eq!(events[0].title, "OK");
}

#[test]
fn json_input_with_all_day_and_color() {
    let json = r##"[
        {"id": "h", "title": "Holiday", "start": "2026-03-02", "end": "2026-03-03", "allDay": true, "color": "#00aa00"},
        {"id": "m", "title": "Meeting", "start": "2026-03-02T09:00:00", "end": "2026-03-02T10:00:00"}
    ]"##;

    let events = parse_events_json(json, Tz::UTC).unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].all_day);
    assert_eq!(events[0].color.as_deref(), Some("#00aa00"));
    assert!(!events[1].all_day);
    assert_eq!(events[1].color, None);
}

#[test]
fn json_input_that_is_not_an_array_is_an_error() {
    assert!(matches!(
        parse_events_json(r#"{"id": "x"}"#, Tz::UTC),
        Err(LayoutError::InvalidInput(_))
    ));
}

#[test]
fn config_defaults() {
    let config = LayoutConfig::from_toml_str("").unwrap();
    assert_eq!(config, LayoutConfig::default());
    assert_eq!(config.week_start(), WeekStart::SUNDAY);
    assert_eq!(config.tz().unwrap(), Tz::UTC);
}

#[test]
fn config_from_toml() {
    let config = LayoutConfig::from_toml_str(
        r#"
first_day_of_week = 1
timezone = "Europe/Berlin"
"#,
    )
    .unwrap();
    assert_eq!(config.week_start(), WeekStart::MONDAY);
    assert_eq!(config.tz().unwrap(), Tz::Europe__Berlin);
}

#[test]
fn config_rejects_bad_first_day() {
    assert!(matches!(
        LayoutConfig::from_toml_str("first_day_of_week = 9"),
        Err(LayoutError::Config(_))
    ));
}

#[test]
fn config_rejects_unknown_timezone() {
    assert!(matches!(
        LayoutConfig::from_toml_str(r#"timezone = "Nowhere/Special""#),
        Err(LayoutError::InvalidTimezone(_))
    ));
}
