//! Business/252 day count convention.

use super::DayCount;
use crate::calendars::{Calendar, CalendarId};
use crate::types::Date;

/// Business/252 day count convention.
///
/// Counts business days under a calendar and divides by 252. Under the
/// all-days calendar this reduces to calendar days over 252.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bd252 {
    calendar: CalendarId,
}

impl Bd252 {
    /// Creates the convention over the given calendar.
    #[must_use]
    pub fn new(calendar: CalendarId) -> Self {
        Self { calendar }
    }
}

impl DayCount for Bd252 {
    fn name(&self) -> &'static str {
        "BD/252"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 252.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        self.calendar.to_calendar().business_days_between(start, end)
    }
}
