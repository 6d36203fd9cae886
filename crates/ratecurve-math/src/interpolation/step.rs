//! Piecewise-constant interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{validate_knots, Interpolator};

/// Which knot a step interpolant takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// The last knot at or before x.
    Previous,
    /// The first knot at or after x.
    Next,
    /// The closest knot; ties go to the earlier knot.
    Nearest,
}

/// Piecewise-constant interpolation.
///
/// With extrapolation enabled, points before the first knot take the first
/// value and points after the last knot take the last value.
///
/// # Example
///
/// ```rust
/// use ratecurve_math::interpolation::{Interpolator, StepInterpolator, StepMode};
///
/// let interp = StepInterpolator::new(vec![0.0, 1.0, 2.0], vec![5.0, 6.0, 7.0], StepMode::Previous)
///     .unwrap();
/// assert_eq!(interp.interpolate(1.9).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct StepInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    mode: StepMode,
    allow_extrapolation: bool,
}

impl StepInterpolator {
    /// Creates a step interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, mode: StepMode) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;

        Ok(Self {
            xs,
            ys,
            mode,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns the step mode.
    #[must_use]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    fn knot_index(&self, x: f64) -> usize {
        let last = self.xs.len() - 1;
        // number of knots <= x
        let at_or_below = self.xs.partition_point(|&k| k <= x);

        match self.mode {
            StepMode::Previous => at_or_below.saturating_sub(1),
            StepMode::Next => {
                if at_or_below > 0 && self.xs[at_or_below - 1] == x {
                    at_or_below - 1
                } else {
                    at_or_below.min(last)
                }
            }
            StepMode::Nearest => {
                if at_or_below == 0 {
                    0
                } else if at_or_below > last {
                    last
                } else {
                    let lo = at_or_below - 1;
                    let hi = at_or_below;
                    if x - self.xs[lo] <= self.xs[hi] - x {
                        lo
                    } else {
                        hi
                    }
                }
            }
        }
    }
}

impl Interpolator for StepInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::extrapolation_not_allowed(
                x,
                self.min_x(),
                self.max_x(),
            ));
        }
        Ok(self.ys[self.knot_index(x)])
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
