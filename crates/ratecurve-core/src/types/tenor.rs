//! Tenor (signed duration) type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// A signed duration expressed in calendar units, relative to some base date.
///
/// Tenors are written as one or more `<count><unit>` groups with an optional
/// leading sign: `"5d"`, `"1w"`, `"3m"`, `"1q"`, `"30y"`, `"1y6m"`, `"-2d"`.
/// Units are case-insensitive.
///
/// # Example
///
/// ```rust
/// use ratecurve_core::types::{Date, Tenor};
///
/// let base = Date::from_ymd(2025, 1, 31).unwrap();
/// let tenor: Tenor = "1m".parse().unwrap();
/// assert_eq!(tenor.add_to(base).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tenor {
    years: i32,
    months: i32,
    weeks: i32,
    days: i32,
}

impl Tenor {
    /// The zero tenor.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a tenor from its components.
    #[must_use]
    pub const fn new(years: i32, months: i32, weeks: i32, days: i32) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Creates a tenor of `n` days.
    #[must_use]
    pub const fn days(n: i32) -> Self {
        Self::new(0, 0, 0, n)
    }

    /// Creates a tenor of `n` weeks.
    #[must_use]
    pub const fn weeks(n: i32) -> Self {
        Self::new(0, 0, n, 0)
    }

    /// Creates a tenor of `n` months.
    #[must_use]
    pub const fn months(n: i32) -> Self {
        Self::new(0, n, 0, 0)
    }

    /// Creates a tenor of `n` years.
    #[must_use]
    pub const fn years(n: i32) -> Self {
        Self::new(n, 0, 0, 0)
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the tenor with every component negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(
            self.years.saturating_neg(),
            self.months.saturating_neg(),
            self.weeks.saturating_neg(),
            self.days.saturating_neg(),
        )
    }

    /// Applies the tenor to `base`.
    ///
    /// Years and months are applied first (clamping to month end), then
    /// weeks and days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_to(&self, base: Date) -> CoreResult<Date> {
        let months = i32::try_from(i64::from(self.years) * 12 + i64::from(self.months))
            .map_err(|_| CoreError::invalid_date(format!("{base} + {self} is out of range")))?;
        base.add_months(months)?
            .add_days(i64::from(self.weeks) * 7 + i64::from(self.days))
    }

    /// Parses a tenor string.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DateConversion` if the string is not a tenor.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::date_conversion(format!("'{s}' is not a tenor"));

        let trimmed = s.trim();
        let (sign, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (-1, &trimmed[1..]),
            Some(b'+') => (1, &trimmed[1..]),
            _ => (1, trimmed),
        };
        if body.is_empty() {
            return Err(invalid());
        }

        let mut tenor = Tenor::ZERO;
        let mut digits = String::new();
        for ch in body.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            if digits.is_empty() {
                return Err(invalid());
            }
            let n: i32 = digits.parse().map_err(|_| invalid())?;
            digits.clear();
            let (field, n) = match ch.to_ascii_lowercase() {
                'd' => (&mut tenor.days, Some(n)),
                'w' => (&mut tenor.weeks, Some(n)),
                'm' => (&mut tenor.months, Some(n)),
                'q' => (&mut tenor.months, n.checked_mul(3)),
                'y' => (&mut tenor.years, Some(n)),
                _ => return Err(invalid()),
            };
            let sum = n.and_then(|n| field.checked_add(n)).ok_or_else(invalid)?;
            *field = sum;
        }
        // trailing count with no unit
        if !digits.is_empty() {
            return Err(invalid());
        }

        Ok(if sign < 0 { tenor.negated() } else { tenor })
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tenor::parse(s)
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0d");
        }
        let parts = [
            (self.years, 'y'),
            (self.months, 'm'),
            (self.weeks, 'w'),
            (self.days, 'd'),
        ];
        for (n, unit) in parts {
            if n != 0 {
                write!(f, "{n}{unit}")?;
            }
        }
        Ok(())
    }
}
