//! Error types for curve operations.
//!
//! Construction errors abort construction entirely; query errors abort only
//! that query. Degenerate numeric cases (zero year fractions, unit cap
//! factors) are not errors and resolve to default rates instead.

use ratecurve_core::CoreError;
use ratecurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Unrecognized compounding method tag.
    #[error("Unknown compounding method: '{method}'")]
    UnknownMethod {
        /// The rejected tag.
        method: String,
    },

    /// Unrecognized transform mode.
    #[error("Unknown transform mode: '{mode}'")]
    UnknownTransformMode {
        /// The rejected mode.
        mode: String,
    },

    /// Invalid curve data: non-numeric rate, unconvertible key or a
    /// malformed table.
    #[error("Invalid data: {reason}")]
    DataValidation {
        /// Description of the invalid data.
        reason: String,
    },

    /// Interpolation could not be fitted or evaluated.
    #[error("Interpolation error: {reason}")]
    Interpolation {
        /// Description of the interpolation error.
        reason: String,
    },

    /// A value was not convertible to a date.
    #[error("Date conversion error: {reason}")]
    DateConversion {
        /// Description of the conversion failure.
        reason: String,
    },

    /// Malformed configuration.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an unknown compounding method error.
    #[must_use]
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }

    /// Creates an unknown transform mode error.
    #[must_use]
    pub fn unknown_transform_mode(mode: impl Into<String>) -> Self {
        Self::UnknownTransformMode { mode: mode.into() }
    }

    /// Creates a data validation error.
    #[must_use]
    pub fn data_validation(reason: impl Into<String>) -> Self {
        Self::DataValidation {
            reason: reason.into(),
        }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation(reason: impl Into<String>) -> Self {
        Self::Interpolation {
            reason: reason.into(),
        }
    }

    /// Creates a date conversion error.
    #[must_use]
    pub fn date_conversion(reason: impl Into<String>) -> Self {
        Self::DateConversion {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for CurveError {
    fn from(err: CoreError) -> Self {
        Self::date_conversion(err.to_string())
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::interpolation(err.to_string())
    }
}
