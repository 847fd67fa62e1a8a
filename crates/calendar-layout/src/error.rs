//! Error types for calendar-layout boundary conversions.
//!
//! The layout functions themselves are total and never fail. Errors only come
//! from turning external input (config values, timezone names, date strings)
//! into engine types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid first day of week: {0} (expected 0-6)")]
    InvalidWeekStart(u8),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid event input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
