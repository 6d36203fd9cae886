//! # Ratecurve Math
//!
//! Numerical interpolation for the Ratecurve interest rate curve library.
//!
//! This crate provides one-dimensional interpolants over strictly increasing
//! knots, each behind the [`Interpolator`](interpolation::Interpolator) trait
//! and each able to reject or extrapolate points outside its knot range.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, StepInterpolator, StepMode,
    };
}

pub use error::{MathError, MathResult};
