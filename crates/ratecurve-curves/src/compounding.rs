//! Compounding equations.
//!
//! Converts between (rate, time) pairs, cap factors and discount factors under
//! three conventions:
//!
//! | Method | Cap factor | Rate from cap factor |
//! |--------|------------|----------------------|
//! | `EXP` (continuous) | e^(r·t) | ln(cf)/t |
//! | `YLD` (annual) | (1+r)^t | cf^(1/t) − 1 |
//! | `LIN` (simple) | 1 + r·t | (cf − 1)/t |
//!
//! # Example
//!
//! ```rust
//! use ratecurve_curves::CompoundingMethod;
//!
//! let rate = 0.05;
//! let t = 2.0;
//!
//! let cf = CompoundingMethod::Exp.cap_factor(rate, t);
//! let back = CompoundingMethod::Exp.rate_from_cap_factor(cf, t, None);
//! assert!((back - rate).abs() < 1e-12);
//!
//! // At t = 0 present and future value coincide
//! assert_eq!(CompoundingMethod::Yld.cap_factor(rate, 0.0), 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// Compounding convention for cap and discount factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompoundingMethod {
    /// Continuous compounding.
    #[default]
    #[serde(rename = "EXP")]
    Exp,
    /// Annual compounding (yield).
    #[serde(rename = "YLD")]
    Yld,
    /// Simple interest.
    #[serde(rename = "LIN")]
    Lin,
}

impl CompoundingMethod {
    /// Returns the canonical tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CompoundingMethod::Exp => "EXP",
            CompoundingMethod::Yld => "YLD",
            CompoundingMethod::Lin => "LIN",
        }
    }

    /// Multiplier turning a present value into its value after `t` years.
    ///
    /// Returns exactly 1 when `t == 0`.
    #[must_use]
    pub fn cap_factor(&self, rate: f64, t: f64) -> f64 {
        if t == 0.0 {
            return 1.0;
        }
        match self {
            CompoundingMethod::Exp => (rate * t).exp(),
            CompoundingMethod::Yld => (1.0 + rate).powf(t),
            CompoundingMethod::Lin => 1.0 + rate * t,
        }
    }

    /// Reciprocal of [`cap_factor`](Self::cap_factor).
    #[must_use]
    pub fn disc_factor(&self, rate: f64, t: f64) -> f64 {
        1.0 / self.cap_factor(rate, t)
    }

    /// Inverse of [`cap_factor`](Self::cap_factor).
    ///
    /// The conversion is undefined when `t == 0` or `cf == 1`; `default` is
    /// returned in that case, or NaN when no default is given.
    #[must_use]
    pub fn rate_from_cap_factor(&self, cf: f64, t: f64, default: Option<f64>) -> f64 {
        if t == 0.0 || cf == 1.0 {
            return default.unwrap_or(f64::NAN);
        }
        match self {
            CompoundingMethod::Exp => cf.ln() / t,
            CompoundingMethod::Yld => cf.powf(1.0 / t) - 1.0,
            CompoundingMethod::Lin => (cf - 1.0) / t,
        }
    }

    /// Inverse of [`disc_factor`](Self::disc_factor).
    #[must_use]
    pub fn rate_from_disc_factor(&self, df: f64, t: f64, default: Option<f64>) -> f64 {
        self.rate_from_cap_factor(1.0 / df, t, default)
    }
}

impl fmt::Display for CompoundingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CompoundingMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EXP" => Ok(CompoundingMethod::Exp),
            "YLD" => Ok(CompoundingMethod::Yld),
            "LIN" => Ok(CompoundingMethod::Lin),
            _ => Err(CurveError::unknown_method(s)),
        }
    }
}
