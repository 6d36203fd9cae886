//! Interpolation kinds and boundary policies for curves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ratecurve_math::interpolation::{
    CubicSpline, Interpolator, LinearInterpolator, StepInterpolator, StepMode,
};

use crate::error::{CurveError, CurveResult};

/// Interpolation kinds for the fitted curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationKind {
    /// Piecewise linear.
    #[default]
    #[serde(rename = "linear")]
    Linear,

    /// Natural cubic spline. Needs at least three knots.
    #[serde(rename = "cubic")]
    Cubic,

    /// Step function holding the previous knot value.
    #[serde(rename = "previous", alias = "zero")]
    Previous,

    /// Step function taking the next knot value.
    #[serde(rename = "next")]
    Next,

    /// Step function taking the nearest knot value.
    #[serde(rename = "nearest")]
    Nearest,
}

impl InterpolationKind {
    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Nearest => "nearest",
        }
    }

    /// Minimum number of knots this kind can be fitted on.
    #[must_use]
    pub fn min_points(&self) -> usize {
        match self {
            Self::Cubic => 3,
            _ => 2,
        }
    }

    /// Fits an interpolant of this kind over `(xs, ys)`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Interpolation` if the knots are insufficient or
    /// not strictly increasing.
    pub fn build(
        &self,
        xs: &[f64],
        ys: &[f64],
        extrapolate: bool,
    ) -> CurveResult<Arc<dyn Interpolator>> {
        let xs = xs.to_vec();
        let ys = ys.to_vec();

        let interpolator: Arc<dyn Interpolator> = match self {
            Self::Linear => {
                let i = LinearInterpolator::new(xs, ys)?;
                if extrapolate {
                    Arc::new(i.with_extrapolation())
                } else {
                    Arc::new(i)
                }
            }
            Self::Cubic => {
                let i = CubicSpline::new(xs, ys)?;
                if extrapolate {
                    Arc::new(i.with_extrapolation())
                } else {
                    Arc::new(i)
                }
            }
            Self::Previous | Self::Next | Self::Nearest => {
                let mode = match self {
                    Self::Previous => StepMode::Previous,
                    Self::Next => StepMode::Next,
                    _ => StepMode::Nearest,
                };
                let i = StepInterpolator::new(xs, ys, mode)?;
                if extrapolate {
                    Arc::new(i.with_extrapolation())
                } else {
                    Arc::new(i)
                }
            }
        };

        Ok(interpolator)
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InterpolationKind {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "cubic" | "cubic_spline" | "spline" => Ok(Self::Cubic),
            "previous" | "zero" => Ok(Self::Previous),
            "next" => Ok(Self::Next),
            "nearest" => Ok(Self::Nearest),
            _ => Err(CurveError::interpolation(format!(
                "unknown interpolation kind '{s}'"
            ))),
        }
    }
}

/// Behaviour of the curve outside its observed date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExtrapolationPolicy {
    /// Hold the boundary value constant.
    #[default]
    #[serde(rename = "flat")]
    Flat,
    /// Extend the interpolant's boundary trend.
    #[serde(rename = "extrapolate")]
    Extrapolate,
}

impl ExtrapolationPolicy {
    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Extrapolate => "extrapolate",
        }
    }
}

impl fmt::Display for ExtrapolationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExtrapolationPolicy {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "extrapolate" => Ok(Self::Extrapolate),
            _ => Err(CurveError::interpolation(
                "Extrapolation methods must be either 'extrapolate' or 'flat'",
            )),
        }
    }
}
