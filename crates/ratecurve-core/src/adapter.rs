//! The date adapter used by curves.
//!
//! [`DateAdapter`] bundles a day count convention and a calendar and exposes
//! the handful of date operations a curve needs: resolving date-or-tenor
//! inputs, measuring year fractions, and encoding dates as numeric abscissas
//! for interpolation.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::calendars::CalendarId;
use crate::daycounts::DayCountConvention;
use crate::error::{CoreError, CoreResult};
use crate::types::{Date, DateInput};

/// Year, month and day of the fixed date numeric abscissas are measured from.
pub const INTERPOLATION_ROOT_YMD: (i32, u32, u32) = (2000, 1, 1);

/// Returns the fixed root date for numeric abscissas (2000-01-01).
///
/// The root is only an arithmetic anchor; curve times are always measured
/// from the curve base.
#[must_use]
pub fn interpolation_root() -> Date {
    let (y, m, d) = INTERPOLATION_ROOT_YMD;
    Date::from(chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

/// Date operations under a day count convention and calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateAdapter {
    day_count: DayCountConvention,
    calendar: CalendarId,
}

impl DateAdapter {
    /// Creates an adapter.
    #[must_use]
    pub fn new(day_count: DayCountConvention, calendar: CalendarId) -> Self {
        Self {
            day_count,
            calendar,
        }
    }

    /// Returns the day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Converts a date-or-tenor input to an absolute date, applying tenors
    /// to `base`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DateConversion` if the input is not date-like or
    /// is a tenor with no base.
    pub fn to_absolute_date(&self, value: &DateInput, base: Option<Date>) -> CoreResult<Date> {
        value.resolve(base)
    }

    /// Year fraction from `start` to `end`. Negative if `end` precedes `start`.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count
            .to_day_count(self.calendar)
            .year_fraction(start, end)
    }

    /// Encodes `date` as a signed offset from `root`: business days for
    /// business-day conventions, calendar days otherwise.
    #[must_use]
    pub fn date_as_numeric_offset(&self, date: Date, root: Date) -> f64 {
        let days = if self.day_count.is_business_day_basis() {
            self.calendar
                .to_calendar()
                .business_days_between(root, date)
        } else {
            root.days_between(&date)
        };
        days as f64
    }

    /// Inverse of [`date_as_numeric_offset`](Self::date_as_numeric_offset).
    /// Fractional offsets are truncated toward the root.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the offset is not finite or lands
    /// outside the representable date range.
    pub fn numeric_offset_to_date(&self, offset: f64, root: Date) -> CoreResult<Date> {
        if !offset.is_finite() {
            return Err(CoreError::invalid_date(format!(
                "numeric offset {offset} is not finite"
            )));
        }
        let lo = root.days_between(&Date::MIN) as f64;
        let hi = root.days_between(&Date::MAX) as f64;
        let truncated = offset.trunc();
        if truncated < lo || truncated > hi {
            return Err(CoreError::invalid_date(format!(
                "numeric offset {offset} is outside [{lo}, {hi}]"
            )));
        }

        let whole = truncated as i64;
        if offset.fract() != 0.0 {
            trace!("truncating numeric offset {offset} to {whole}");
        }
        if self.day_count.is_business_day_basis() {
            self.calendar.to_calendar().add_business_days(root, whole)
        } else {
            root.add_days(whole)
        }
    }
}
