//! # Ratecurve Core
//!
//! Date primitives for the Ratecurve interest rate curve library.
//!
//! This crate provides the date handling every curve relies on:
//!
//! - **Types**: [`Date`](types::Date), [`Tenor`](types::Tenor) and the
//!   date-or-tenor input [`DateInput`](types::DateInput)
//! - **Day Count Conventions**: ACT/365, ACT/360 and BD/252
//! - **Business Day Calendars**: all-days and weekends-only
//! - **Date Adapter**: year fractions and numeric abscissas for interpolation
//!
//! ## Example
//!
//! ```rust
//! use ratecurve_core::prelude::*;
//!
//! let adapter = DateAdapter::default();
//! let base = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = adapter
//!     .to_absolute_date(&DateInput::from("1y"), Some(base))
//!     .unwrap();
//! assert_eq!(end, Date::from_ymd(2026, 1, 15).unwrap());
//! assert!((adapter.year_fraction(base, end) - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unused_self)]
#![allow(clippy::uninlined_format_args)]

pub mod adapter;
pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::{interpolation_root, DateAdapter};
    pub use crate::calendars::{Calendar, CalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, DateInput, DateLike, Tenor};
}

pub use adapter::DateAdapter;
pub use error::{CoreError, CoreResult};
