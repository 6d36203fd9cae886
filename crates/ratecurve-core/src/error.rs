//! Error types for date and convention handling.
//!
//! This module defines the errors raised while resolving date-like inputs,
//! parsing tenors and selecting day count or calendar conventions.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for date, tenor and convention operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid calendar date (out of range or malformed components).
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Input could not be converted to a date or tenor.
    #[error("Date conversion error: {reason}")]
    DateConversion {
        /// Description of the conversion failure.
        reason: String,
    },

    /// Unknown or unsupported day count convention.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },

    /// Unknown or unsupported calendar.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a date conversion error.
    #[must_use]
    pub fn date_conversion(reason: impl Into<String>) -> Self {
        Self::DateConversion {
            reason: reason.into(),
        }
    }

    /// Creates a day count error.
    #[must_use]
    pub fn day_count(reason: impl Into<String>) -> Self {
        Self::DayCountError {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}
