//! Transform engine.
//!
//! Rates are not interpolated directly. Each observation `(t, rate)` is first
//! mapped to a scalar `y` in one of three spaces, the interpolant runs on `y`,
//! and interpolated values are mapped back to cap factors:
//!
//! | Mode | `to_y` | `from_y` (cap factor) |
//! |------|--------|-----------------------|
//! | `r` | rate | cap(y, t) |
//! | `r*t` | rate·t | cap(y/t, t) |
//! | `ln(df)` | ln(df(rate, t)) | e^(−y) |
//!
//! `from_y` returns a unit cap factor for `t <= 0` in every mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::compounding::CompoundingMethod;
use crate::error::CurveError;

/// The space in which rates are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformMode {
    /// The raw rate.
    #[serde(rename = "r")]
    Rate,
    /// Rate times year fraction.
    #[serde(rename = "r*t", alias = "rt")]
    RateTime,
    /// Log of the discount factor.
    #[default]
    #[serde(rename = "ln(df)")]
    LogDiscount,
}

impl TransformMode {
    /// Returns the canonical tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TransformMode::Rate => "r",
            TransformMode::RateTime => "r*t",
            TransformMode::LogDiscount => "ln(df)",
        }
    }

    /// Returns true if the fit needs an extra knot at the base date.
    #[must_use]
    pub fn needs_base_anchor(&self) -> bool {
        matches!(self, TransformMode::LogDiscount)
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TransformMode {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" => Ok(TransformMode::Rate),
            "r*t" | "rt" => Ok(TransformMode::RateTime),
            "ln(df)" => Ok(TransformMode::LogDiscount),
            _ => Err(CurveError::unknown_transform_mode(s)),
        }
    }
}

/// A transform mode bound to a compounding method, optionally clamping time
/// into the observed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    mode: TransformMode,
    method: CompoundingMethod,
    window: Option<(f64, f64)>,
}

impl Transform {
    /// Creates an unclamped transform.
    #[must_use]
    pub fn new(mode: TransformMode, method: CompoundingMethod) -> Self {
        Self {
            mode,
            method,
            window: None,
        }
    }

    /// Clamps `t` into `[t_min, t_max]` before inverting, which makes the
    /// inverse flat outside the observed range.
    #[must_use]
    pub fn with_clamp(mut self, t_min: f64, t_max: f64) -> Self {
        self.window = Some((t_min, t_max));
        self
    }

    /// Returns the same transform without a clamp window.
    #[must_use]
    pub fn unclamped(&self) -> Self {
        Self::new(self.mode, self.method)
    }

    /// Returns the transform mode.
    #[must_use]
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Returns the compounding method.
    #[must_use]
    pub fn method(&self) -> CompoundingMethod {
        self.method
    }

    /// Maps `(t, rate)` to the interpolation space.
    #[must_use]
    pub fn to_y(&self, t: f64, rate: f64) -> f64 {
        match self.mode {
            TransformMode::Rate => rate,
            TransformMode::RateTime => rate * t,
            TransformMode::LogDiscount => {
                if t == 0.0 {
                    0.0
                } else {
                    self.method.disc_factor(rate, t).ln()
                }
            }
        }
    }

    /// Maps an interpolated `y` at time `t` back to a cap factor.
    #[must_use]
    pub fn from_y(&self, t: f64, y: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let t = match self.window {
            Some((lo, hi)) => t.max(lo).min(hi),
            None => t,
        };
        // clamp window lies before the base
        if t <= 0.0 {
            return 1.0;
        }

        match self.mode {
            TransformMode::Rate => self.method.cap_factor(y, t),
            TransformMode::RateTime => self.method.cap_factor(y / t, t),
            TransformMode::LogDiscount => (-y).exp(),
        }
    }
}
