//! Date-or-tenor inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Tenor};

/// Something that can be resolved to an absolute date.
///
/// Curve keys and query arguments are accepted in any of these forms. Text is
/// interpreted lazily by [`DateInput::resolve`]:
///
/// - `"t"` or `"today"`: today's date
/// - `"t+6m"`, `"t-1d"`: today shifted by a tenor
/// - `"2025-06-15"`, `"6/15/2025"`, `"20250615"`: an absolute date
/// - `"3m"`, `"30y"`: a tenor relative to the supplied base
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// An absolute date.
    Date(Date),
    /// A tenor relative to a base date.
    Tenor(Tenor),
    /// Unparsed text.
    Text(String),
}

/// The interpreted form of a [`DateInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLike {
    /// An absolute date.
    Absolute(Date),
    /// A duration still requiring a base.
    Relative(Tenor),
}

impl DateInput {
    /// Interprets the input without resolving tenors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DateConversion` for text that is neither a date
    /// nor a tenor.
    pub fn interpret(&self) -> CoreResult<DateLike> {
        match self {
            DateInput::Date(d) => Ok(DateLike::Absolute(*d)),
            DateInput::Tenor(t) => Ok(DateLike::Relative(*t)),
            DateInput::Text(s) => interpret_text(s),
        }
    }

    /// Resolves the input to an absolute date, applying tenors to `base`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DateConversion` if the input is not date-like, or
    /// if it is a tenor and no base is given.
    pub fn resolve(&self, base: Option<Date>) -> CoreResult<Date> {
        match self.interpret()? {
            DateLike::Absolute(d) => Ok(d),
            DateLike::Relative(t) => {
                let base = base.ok_or_else(|| {
                    CoreError::date_conversion("Cannot convert tenor without a base date")
                })?;
                t.add_to(base)
            }
        }
    }

    /// Returns true if the input can be interpreted as a date or tenor.
    #[must_use]
    pub fn is_date_like(&self) -> bool {
        self.interpret().is_ok()
    }
}

/// Returns true if `s` is a date, a tenor or a today-relative expression.
#[must_use]
pub fn is_date_like(s: &str) -> bool {
    interpret_text(s).is_ok()
}

fn interpret_text(s: &str) -> CoreResult<DateLike> {
    let text = s.trim();
    let lower = text.to_ascii_lowercase();

    if lower == "t" || lower == "today" {
        return Ok(DateLike::Absolute(Date::today()));
    }
    if let Some(rest) = lower.strip_prefix('t') {
        if rest.starts_with('+') || rest.starts_with('-') {
            let tenor = Tenor::parse(rest)?;
            return tenor.add_to(Date::today()).map(DateLike::Absolute);
        }
    }
    if let Ok(date) = Date::parse(text) {
        return Ok(DateLike::Absolute(date));
    }
    Tenor::parse(text).map(DateLike::Relative).map_err(|_| {
        CoreError::date_conversion(format!(
            "'{s}' must be convertible to a date or a tenor"
        ))
    })
}

impl From<Date> for DateInput {
    fn from(date: Date) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date.into())
    }
}

impl From<Tenor> for DateInput {
    fn from(tenor: Tenor) -> Self {
        DateInput::Tenor(tenor)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<&DateInput> for DateInput {
    fn from(input: &DateInput) -> Self {
        input.clone()
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Date(d) => write!(f, "{d}"),
            DateInput::Tenor(t) => write!(f, "{t}"),
            DateInput::Text(s) => write!(f, "{s}"),
        }
    }
}
