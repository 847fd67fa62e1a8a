//! Layout configuration: first day of week and display timezone.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::source;
use crate::window::WeekStart;

/// Settings that affect how dates map onto grid columns.
///
/// Neither setting changes the placement algorithms; they only decide which
/// date lands in which column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// 0 = Sunday ... 6 = Saturday.
    pub first_day_of_week: WeekStart,
    /// IANA timezone events are displayed in.
    pub timezone: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: WeekStart::SUNDAY,
            timezone: "UTC".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Parse a TOML document. Missing keys fall back to the defaults.
    ///
    /// # Errors
    /// Returns `LayoutError::Config` on malformed TOML or an out-of-range
    /// `first_day_of_week`, and `LayoutError::InvalidTimezone` on an unknown
    /// timezone.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: LayoutConfig =
            toml::from_str(s).map_err(|e| LayoutError::Config(e.to_string()))?;
        config.tz()?;
        Ok(config)
    }

    pub fn week_start(&self) -> WeekStart {
        self.first_day_of_week
    }

    /// # Errors
    /// Returns `LayoutError::InvalidTimezone` if `timezone` is not a known IANA name.
    pub fn tz(&self) -> Result<Tz> {
        source::parse_timezone(&self.timezone)
    }
}
