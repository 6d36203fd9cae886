//! Fitter: piecewise evaluation over transformed values.
//!
//! A [`FittedCurve`] is three [`CurveSegment`]s over the numeric abscissa:
//! the interior interpolant between the first and last knot, and a front and
//! back segment beyond them. Under [`ExtrapolationPolicy::Flat`] the outer
//! segments hold the boundary knot value; under
//! [`ExtrapolationPolicy::Extrapolate`] both share one interpolant allowed to
//! run past its knots.

use std::fmt;
use std::sync::Arc;

use ratecurve_math::interpolation::Interpolator;

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationPolicy, InterpolationKind};

/// Something that can be evaluated at a numeric abscissa.
pub trait CurveSegment: Send + Sync {
    /// Evaluates the segment at `x`.
    fn value_at(&self, x: f64) -> CurveResult<f64>;
}

/// A constant segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatSegment {
    value: f64,
}

impl FlatSegment {
    /// Creates a segment returning `value` everywhere.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl CurveSegment for FlatSegment {
    fn value_at(&self, _x: f64) -> CurveResult<f64> {
        Ok(self.value)
    }
}

/// A segment backed by an interpolant.
#[derive(Clone)]
pub struct InterpolatedSegment {
    interpolator: Arc<dyn Interpolator>,
}

impl InterpolatedSegment {
    /// Wraps an interpolant.
    #[must_use]
    pub fn new(interpolator: Arc<dyn Interpolator>) -> Self {
        Self { interpolator }
    }
}

impl fmt::Debug for InterpolatedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatedSegment")
            .field("min_x", &self.interpolator.min_x())
            .field("max_x", &self.interpolator.max_x())
            .field("extrapolates", &self.interpolator.allows_extrapolation())
            .finish()
    }
}

impl CurveSegment for InterpolatedSegment {
    fn value_at(&self, x: f64) -> CurveResult<f64> {
        Ok(self.interpolator.interpolate(x)?)
    }
}

/// Which segment answers a given abscissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Before the first knot.
    Front,
    /// Between the first and last knot, inclusive.
    Interior,
    /// After the last knot.
    Back,
}

/// Interior interpolant plus front and back extrapolators.
#[derive(Clone)]
pub struct FittedCurve {
    min_x: f64,
    max_x: f64,
    interior: Arc<dyn CurveSegment>,
    front: Arc<dyn CurveSegment>,
    back: Arc<dyn CurveSegment>,
}

impl FittedCurve {
    /// Fits `(xs, ys)` with the given kind and boundary policy.
    ///
    /// Knots need not be sorted but must have distinct `x`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Interpolation` if fewer than two knots are given
    /// or the kind cannot be fitted on them.
    pub fn fit(
        xs: &[f64],
        ys: &[f64],
        kind: InterpolationKind,
        policy: ExtrapolationPolicy,
    ) -> CurveResult<Self> {
        if xs.len() != ys.len() {
            return Err(CurveError::interpolation(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(CurveError::interpolation(format!(
                "need at least 2 points to interpolate, got {}",
                xs.len()
            )));
        }

        let mut knots: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (xs, ys): (Vec<f64>, Vec<f64>) = knots.into_iter().unzip();

        let min_x = xs[0];
        let max_x = xs[xs.len() - 1];

        let interior: Arc<dyn CurveSegment> =
            Arc::new(InterpolatedSegment::new(kind.build(&xs, &ys, false)?));

        let (front, back): (Arc<dyn CurveSegment>, Arc<dyn CurveSegment>) = match policy {
            ExtrapolationPolicy::Flat => (
                Arc::new(FlatSegment::new(ys[0])),
                Arc::new(FlatSegment::new(ys[ys.len() - 1])),
            ),
            ExtrapolationPolicy::Extrapolate => {
                let shared: Arc<dyn CurveSegment> =
                    Arc::new(InterpolatedSegment::new(kind.build(&xs, &ys, true)?));
                (Arc::clone(&shared), shared)
            }
        };

        Ok(Self {
            min_x,
            max_x,
            interior,
            front,
            back,
        })
    }

    /// Classifies `x` against the knot range.
    #[must_use]
    pub fn classify(&self, x: f64) -> SegmentKind {
        if x < self.min_x {
            SegmentKind::Front
        } else if x > self.max_x {
            SegmentKind::Back
        } else {
            SegmentKind::Interior
        }
    }

    /// Evaluates the fitted curve at `x`.
    pub fn evaluate(&self, x: f64) -> CurveResult<f64> {
        let segment = match self.classify(x) {
            SegmentKind::Front => &self.front,
            SegmentKind::Interior => &self.interior,
            SegmentKind::Back => &self.back,
        };
        segment.value_at(x)
    }

    /// First knot abscissa.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Last knot abscissa.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }
}

impl fmt::Debug for FittedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FittedCurve")
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .finish_non_exhaustive()
    }
}
