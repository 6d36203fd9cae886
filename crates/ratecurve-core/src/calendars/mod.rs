//! Business day calendars.
//!
//! Only two calendars are provided: [`AllDaysCalendar`], under which every day
//! is a business day, and [`WeekendCalendar`], which treats Saturdays and
//! Sundays as holidays. Holiday-aware market calendars are out of scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Advances a date by a number of business days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    fn add_business_days(&self, date: Date, days: i64) -> CoreResult<Date> {
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction)?;
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        Ok(result)
    }

    /// Counts business days from `start` to `end` (exclusive of start,
    /// inclusive of end). Negative when `end` precedes `start`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let (lo, hi, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let mut count = 0i64;
        let mut current = lo;
        while current < hi {
            match current.add_days(1) {
                Ok(next) => current = next,
                Err(_) => break,
            }
            if self.is_business_day(current) {
                count += 1;
            }
        }

        count * sign
    }
}

/// Calendar in which every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDaysCalendar;

impl Calendar for AllDaysCalendar {
    fn name(&self) -> &'static str {
        "ALL"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn add_business_days(&self, date: Date, days: i64) -> CoreResult<Date> {
        date.add_days(days)
    }

    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "WE"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }

    // any seven consecutive days hold five weekdays
    fn add_business_days(&self, date: Date, days: i64) -> CoreResult<Date> {
        if days == 0 {
            return Ok(date);
        }
        let sign = days.signum();
        let n = days.unsigned_abs();
        let weeks = (n - 1) / 5;
        let jump = i64::try_from(weeks)
            .ok()
            .and_then(|w| w.checked_mul(7 * sign))
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{date} + {days} business days is out of range"))
            })?;
        let mut result = date.add_days(jump)?;
        let mut remaining = n - weeks * 5;
        while remaining > 0 {
            result = result.add_days(sign)?;
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }
        Ok(result)
    }

    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let (lo, hi, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let span = lo.days_between(&hi);
        let weeks = span / 7;
        let mut count = weeks * 5;
        let mut current = lo;
        for _ in 0..span % 7 {
            match current.add_days(1) {
                Ok(next) => current = next,
                Err(_) => break,
            }
            if self.is_business_day(current) {
                count += 1;
            }
        }

        count * sign
    }
}

/// Runtime selection of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarId {
    /// Every day is a business day.
    #[default]
    #[serde(rename = "ALL")]
    All,
    /// Weekends are holidays.
    #[serde(rename = "WE")]
    Weekends,
}

impl CalendarId {
    /// Creates a boxed calendar implementation.
    #[must_use]
    pub fn to_calendar(&self) -> Box<dyn Calendar> {
        match self {
            CalendarId::All => Box::new(AllDaysCalendar),
            CalendarId::Weekends => Box::new(WeekendCalendar),
        }
    }

    /// Returns the canonical name of the calendar.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CalendarId::All => "ALL",
            CalendarId::Weekends => "WE",
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CalendarId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" | "ALLDAYS" | "NONE" => Ok(CalendarId::All),
            "WE" | "WEEKEND" | "WEEKENDS" => Ok(CalendarId::Weekends),
            _ => Err(CoreError::calendar(format!("unknown calendar: '{s}'"))),
        }
    }
}
