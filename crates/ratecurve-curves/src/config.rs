//! Curve construction settings.
//!
//! [`CurveSettings`] is the typed form used by [`RateCurve::new`]. A
//! [`CurveConfig`] holds the same options as plain strings, as they appear in
//! JSON or TOML documents, and is resolved into settings with
//! [`CurveConfig::resolve`].
//!
//! [`RateCurve::new`]: crate::RateCurve::new

use serde::{Deserialize, Serialize};

use ratecurve_core::calendars::CalendarId;
use ratecurve_core::daycounts::DayCountConvention;
use ratecurve_core::types::{Date, DateInput};

use crate::compounding::CompoundingMethod;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationPolicy, InterpolationKind};
use crate::transform::TransformMode;

/// Typed curve construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Date at the head of the curve.
    pub base: Date,
    /// Day count convention for year fractions.
    pub day_count: DayCountConvention,
    /// Business day calendar.
    pub calendar: CalendarId,
    /// Compounding method for cap and discount factors.
    pub compounding: CompoundingMethod,
    /// Space in which rates are interpolated.
    pub transform: TransformMode,
    /// Interpolation kind.
    pub interpolation: InterpolationKind,
    /// Behaviour outside the observed range.
    pub extrapolation: ExtrapolationPolicy,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self::with_base(Date::today())
    }
}

impl CurveSettings {
    /// Default settings anchored at `base`.
    #[must_use]
    pub fn with_base(base: Date) -> Self {
        Self {
            base,
            day_count: DayCountConvention::default(),
            calendar: CalendarId::default(),
            compounding: CompoundingMethod::default(),
            transform: TransformMode::default(),
            interpolation: InterpolationKind::default(),
            extrapolation: ExtrapolationPolicy::default(),
        }
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the compounding method.
    #[must_use]
    pub fn with_compounding(mut self, compounding: CompoundingMethod) -> Self {
        self.compounding = compounding;
        self
    }

    /// Sets the transform mode.
    #[must_use]
    pub fn with_transform(mut self, transform: TransformMode) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the interpolation kind.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: InterpolationKind) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: ExtrapolationPolicy) -> Self {
        self.extrapolation = extrapolation;
        self
    }
}

fn default_day_count() -> String {
    "ACT/365".to_string()
}

fn default_calendar() -> String {
    "ALL".to_string()
}

fn default_compounding() -> String {
    "EXP".to_string()
}

fn default_transform() -> String {
    "ln(df)".to_string()
}

fn default_interpolation() -> String {
    "linear".to_string()
}

fn default_extrapolation() -> String {
    "flat".to_string()
}

fn default_base() -> String {
    "t".to_string()
}

/// String-valued curve configuration.
///
/// Every field is optional in serialized form.
///
/// ```rust
/// use ratecurve_curves::config::CurveConfig;
/// use ratecurve_curves::TransformMode;
///
/// let config = CurveConfig::from_toml_str(r#"
///     transform = "r"
///     base = "2025-01-15"
/// "#).unwrap();
/// let settings = config.resolve().unwrap();
/// assert_eq!(settings.transform, TransformMode::Rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Day count convention, e.g. `"ACT/365"` or `"BD/252"`.
    #[serde(default = "default_day_count")]
    pub day_count: String,

    /// Calendar, `"ALL"` or `"WE"`.
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Compounding method: `"EXP"`, `"YLD"` or `"LIN"`.
    #[serde(default = "default_compounding")]
    pub compounding: String,

    /// Transform mode: `"r"`, `"r*t"` or `"ln(df)"`.
    #[serde(default = "default_transform")]
    pub transform: String,

    /// Interpolation kind, e.g. `"linear"` or `"cubic"`.
    #[serde(default = "default_interpolation")]
    pub interpolation: String,

    /// Extrapolation policy: `"flat"` or `"extrapolate"`.
    #[serde(default = "default_extrapolation")]
    pub extrapolation: String,

    /// Base date; any date-like text, `"t"` for today.
    #[serde(default = "default_base")]
    pub base: String,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            day_count: default_day_count(),
            calendar: default_calendar(),
            compounding: default_compounding(),
            transform: default_transform(),
            interpolation: default_interpolation(),
            extrapolation: default_extrapolation(),
            base: default_base(),
        }
    }
}

impl CurveConfig {
    /// Parses a JSON document.
    pub fn from_json_str(s: &str) -> CurveResult<Self> {
        serde_json::from_str(s).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> CurveResult<Self> {
        toml::from_str(s).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: impl Into<String>) -> Self {
        self.day_count = day_count.into();
        self
    }

    /// Sets the calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = calendar.into();
        self
    }

    /// Sets the compounding method.
    #[must_use]
    pub fn with_compounding(mut self, compounding: impl Into<String>) -> Self {
        self.compounding = compounding.into();
        self
    }

    /// Sets the transform mode.
    #[must_use]
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }

    /// Sets the interpolation kind.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: impl Into<String>) -> Self {
        self.interpolation = interpolation.into();
        self
    }

    /// Sets the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: impl Into<String>) -> Self {
        self.extrapolation = extrapolation.into();
        self
    }

    /// Sets the base date.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Parses every field into typed settings.
    ///
    /// # Errors
    ///
    /// - `UnknownMethod` for an unknown compounding method
    /// - `UnknownTransformMode` for an unknown transform mode
    /// - `Interpolation` for an unknown interpolation kind or policy
    /// - `Config` for an unknown day count or calendar
    /// - `DateConversion` for a base that is not a date
    pub fn resolve(&self) -> CurveResult<CurveSettings> {
        let day_count: DayCountConvention = self
            .day_count
            .parse()
            .map_err(|e: ratecurve_core::CoreError| CurveError::config(e.to_string()))?;
        let calendar: CalendarId = self
            .calendar
            .parse()
            .map_err(|e: ratecurve_core::CoreError| CurveError::config(e.to_string()))?;

        let base = DateInput::from(self.base.as_str()).resolve(None)?;

        Ok(CurveSettings {
            base,
            day_count,
            calendar,
            compounding: self.compounding.parse()?,
            transform: self.transform.parse()?,
            interpolation: self.interpolation.parse()?,
            extrapolation: self.extrapolation.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let settings = CurveConfig::default().resolve().unwrap();
        assert_eq!(settings.base, Date::today());
        assert_eq!(settings.day_count, DayCountConvention::Act365Fixed);
        assert_eq!(settings.calendar, CalendarId::All);
        assert_eq!(settings.compounding, CompoundingMethod::Exp);
        assert_eq!(settings.transform, TransformMode::LogDiscount);
        assert_eq!(settings.interpolation, InterpolationKind::Linear);
        assert_eq!(settings.extrapolation, ExtrapolationPolicy::Flat);
    }

    #[test]
    fn test_json_partial_document() {
        let config =
            CurveConfig::from_json_str(r#"{"compounding": "YLD", "base": "1/1/2000"}"#).unwrap();
        assert_eq!(config.transform, "ln(df)");
        let settings = config.resolve().unwrap();
        assert_eq!(settings.compounding, CompoundingMethod::Yld);
        assert_eq!(settings.base, Date::from_ymd(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_errors_per_field() {
        let bad = CurveConfig::default().with_transform("apple");
        assert!(matches!(bad.resolve(), Err(CurveError::UnknownTransformMode { .. })));

        let bad = CurveConfig::default().with_compounding("SEMI");
        assert!(matches!(bad.resolve(), Err(CurveError::UnknownMethod { .. })));

        let bad = CurveConfig::default().with_extrapolation("mirror");
        assert!(matches!(bad.resolve(), Err(CurveError::Interpolation { .. })));

        let bad = CurveConfig::default().with_day_count("30/360");
        assert!(matches!(bad.resolve(), Err(CurveError::Config { .. })));

        let bad = CurveConfig::default().with_calendar("NYSE");
        assert!(matches!(bad.resolve(), Err(CurveError::Config { .. })));

        let bad = CurveConfig::default().with_base("3m");
        assert!(matches!(bad.resolve(), Err(CurveError::DateConversion { .. })));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            CurveConfig::from_json_str("{not json"),
            Err(CurveError::Config { .. })
        ));
        assert!(matches!(
            CurveConfig::from_toml_str("transform = "),
            Err(CurveError::Config { .. })
        ));
    }

    #[test]
    fn test_settings_builder() {
        let base = Date::from_ymd(2025, 1, 15).unwrap();
        let settings = CurveSettings::with_base(base)
            .with_transform(TransformMode::Rate)
            .with_extrapolation(ExtrapolationPolicy::Extrapolate)
            .with_day_count(DayCountConvention::Bd252)
            .with_calendar(CalendarId::Weekends);
        assert_eq!(settings.base, base);
        assert_eq!(settings.transform, TransformMode::Rate);
        assert_eq!(settings.extrapolation, ExtrapolationPolicy::Extrapolate);
        assert_eq!(settings.compounding, CompoundingMethod::Exp);
    }
}
