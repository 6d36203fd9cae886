//! Interpolation methods for curve construction.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Piecewise linear (the curve default)
//! - [`CubicSpline`]: Natural cubic spline, needs at least 3 knots
//! - [`StepInterpolator`]: Piecewise constant, taking the previous, next or
//!   nearest knot
//!
//! Every method rejects points outside the knot range unless built with
//! `with_extrapolation()`. Extrapolating linear and spline interpolants
//! continue their boundary segment; step interpolants hold the boundary value.
//!
//! | Method | Smoothness | Min knots |
//! |--------|------------|-----------|
//! | Linear | C0 | 2 |
//! | Cubic Spline | C2 | 3 |
//! | Step | none | 2 |

mod cubic_spline;
mod linear;
mod step;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use step::{StepInterpolator, StepMode};

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates knot vectors shared by every interpolator.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("knots must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to a valid segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|knot| knot.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
    {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_interpolators_through_points() {
        let xs = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let ys = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        let interps: Vec<Box<dyn Interpolator>> = vec![
            Box::new(LinearInterpolator::new(xs.clone(), ys.clone()).unwrap()),
            Box::new(CubicSpline::new(xs.clone(), ys.clone()).unwrap()),
            Box::new(StepInterpolator::new(xs.clone(), ys.clone(), StepMode::Previous).unwrap()),
            Box::new(StepInterpolator::new(xs.clone(), ys.clone(), StepMode::Next).unwrap()),
            Box::new(StepInterpolator::new(xs.clone(), ys.clone(), StepMode::Nearest).unwrap()),
        ];

        for interp in &interps {
            for (x, y) in xs.iter().zip(ys.iter()) {
                assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_validate_knots() {
        assert!(validate_knots(&[0.0, 1.0], &[1.0, 2.0], 2).is_ok());
        assert!(matches!(
            validate_knots(&[0.0], &[1.0], 2),
            Err(MathError::InsufficientData { .. })
        ));
        assert!(validate_knots(&[0.0, 1.0], &[1.0], 2).is_err());
        assert!(validate_knots(&[0.0, 0.0], &[1.0, 2.0], 2).is_err());
        assert!(validate_knots(&[0.0, 1.0], &[f64::NAN, 2.0], 2).is_err());
    }

    #[test]
    fn test_find_segment() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_segment(&xs, -1.0), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 1.5), 1);
        assert_eq!(find_segment(&xs, 3.0), 2);
        assert_eq!(find_segment(&xs, 10.0), 2);
    }
}
