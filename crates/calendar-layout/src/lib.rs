//! # calendar-layout
//!
//! Deterministic placement of calendar events into week, month and day grids.
//!
//! Given a window and the events active in it, the engine decides which
//! day-columns each event spans, which lane it occupies and whether it
//! continues beyond the visible window. Everything here is a pure function of
//! its inputs; painting the result is left to the caller.
//!
//! ## Modules
//!
//! - [`window`] — Week windows, day offsets, clamping events to a window
//! - [`week_span`] — Greedy lane assignment for all-day and multi-day events
//! - [`day_overlap`] — Overlap clusters and columns for timed events of one day
//! - [`month`] — Month and year grids built from week rows
//! - [`prepare`] — Select and order events for each layout pass
//! - [`source`] — Convert raw event records into [`Event`]s
//! - [`config`] — First day of week and display timezone
//! - [`error`] — Error types

pub mod config;
pub mod day_overlap;
pub mod error;
pub mod event;
pub mod month;
pub mod prepare;
pub mod source;
pub mod week_span;
pub mod window;

pub use config::LayoutConfig;
pub use day_overlap::{layout_day, layout_day_ordered, OverlapPlacement};
pub use error::LayoutError;
pub use event::{Event, EventId};
pub use month::{layout_month, layout_year, month_weeks, MonthLayout};
pub use week_span::{layout_week, EventSlot, Slot, SpanPlacement, WeekLayout};
pub use window::{clamp_to_window, day_offset, ClampedSpan, WeekStart, WeekWindow};
