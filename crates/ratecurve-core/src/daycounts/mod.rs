//! Day count conventions for year fraction calculations.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: Actual/365 Fixed (the curve default)
//! - [`Act360`]: Actual/360
//! - [`Bd252`]: Business days / 252 under a calendar
//!
//! # Usage
//!
//! ```rust
//! use ratecurve_core::calendars::CalendarId;
//! use ratecurve_core::daycounts::DayCountConvention;
//! use ratecurve_core::types::Date;
//!
//! let dc = DayCountConvention::Act365Fixed.to_day_count(CalendarId::All);
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//! assert_eq!(dc.year_fraction(start, end), 1.0);
//! ```

mod act360;
mod act365;
mod bd252;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use bd252::Bd252;

use serde::{Deserialize, Serialize};

use crate::calendars::CalendarId;
use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/365 Fixed.
    #[default]
    #[serde(rename = "ACT/365")]
    Act365Fixed,

    /// Actual/360.
    #[serde(rename = "ACT/360")]
    Act360,

    /// Business days over 252, counted under the curve calendar.
    #[serde(rename = "BD/252")]
    Bd252,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    ///
    /// The calendar only matters for business-day conventions.
    #[must_use]
    pub fn to_day_count(&self, calendar: CalendarId) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Bd252 => Box::new(Bd252::new(calendar)),
        }
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Bd252 => "BD/252",
        }
    }

    /// Returns true if the convention counts business days rather than
    /// calendar days.
    #[must_use]
    pub fn is_business_day_basis(&self) -> bool {
        matches!(self, DayCountConvention::Bd252)
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a day count convention from a string.
    ///
    /// Any name starting with `BD` selects the business-day convention.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            other if other.starts_with("BD") => Ok(DayCountConvention::Bd252),
            _ => Err(CoreError::day_count(format!(
                "unknown day count convention: '{s}'"
            ))),
        }
    }
}
