//! # Ratecurve Curves
//!
//! Interest rate curves fitted on sparse `(tenor, rate)` observations.
//!
//! This crate provides:
//!
//! - **Compounding**: exponential, yield and linear cap factors
//! - **Transforms**: interpolation in `r`, `r*t` or `ln(df)` space
//! - **Fitting**: interior interpolants with flat or extrapolated boundaries
//! - **Queries**: cap factors, discount factors, spot and forward rates
//! - **Inputs**: maps, one-dimensional tables, CSV, JSON and TOML configs
//!
//! ## Quick Start
//!
//! ```rust
//! use ratecurve_curves::prelude::*;
//!
//! let base = Date::from_ymd(2025, 1, 15).unwrap();
//! let settings = CurveSettings::with_base(base)
//!     .with_transform(TransformMode::RateTime)
//!     .with_extrapolation(ExtrapolationPolicy::Flat);
//!
//! let curve = RateCurve::new(
//!     [("5d", 0.053), ("1m", 0.0548), ("30y", 0.0465)],
//!     settings,
//! )
//! .unwrap();
//!
//! // Spot rate from the base date
//! let spot = curve.spot_rate("5y").unwrap();
//! assert!(spot > 0.04 && spot < 0.06);
//!
//! // Forward rate over one year, starting in two years
//! let fwd = curve.forward_rate("2y", "1y").unwrap();
//! assert!(fwd > 0.0);
//!
//! // Discount factor to ten years
//! let df = curve.discount("10y").unwrap();
//! assert!(df < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod compounding;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod fitter;
pub mod interpolation;
pub mod table;
pub mod transform;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding::CompoundingMethod;
    pub use crate::config::{CurveConfig, CurveSettings};
    pub use crate::curve::{CurveQuery, RateCurve};
    pub use crate::data::{Observation, Observations, RateInput, RawCurveData};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::{ExtrapolationPolicy, InterpolationKind};
    pub use crate::table::RateTable;
    pub use crate::transform::{Transform, TransformMode};
    pub use ratecurve_core::prelude::*;
}

pub use compounding::CompoundingMethod;
pub use config::{CurveConfig, CurveSettings};
pub use curve::{CurveQuery, RateCurve};
pub use data::{RateInput, RawCurveData};
pub use error::{CurveError, CurveResult};
pub use interpolation::{ExtrapolationPolicy, InterpolationKind};
pub use table::RateTable;
pub use transform::TransformMode;
