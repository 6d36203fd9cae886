//! The rate curve and its query API.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use ratecurve_core::adapter::{interpolation_root, DateAdapter};
use ratecurve_core::types::{Date, DateInput};

use crate::config::{CurveConfig, CurveSettings};
use crate::data::{Observation, Observations, RawCurveData};
use crate::error::{CurveError, CurveResult};
use crate::fitter::FittedCurve;
use crate::interpolation::ExtrapolationPolicy;
use crate::table::RateTable;
use crate::transform::Transform;

/// A one- or two-date curve query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveQuery {
    /// Discount factor from the base to a date.
    Discount(DateInput),
    /// Forward rate between two dates; the second may be a tenor from the first.
    Forward(DateInput, DateInput),
}

impl CurveQuery {
    /// Discount factor query.
    pub fn discount(date: impl Into<DateInput>) -> Self {
        Self::Discount(date.into())
    }

    /// Forward rate query.
    pub fn forward(date1: impl Into<DateInput>, date2: impl Into<DateInput>) -> Self {
        Self::Forward(date1.into(), date2.into())
    }
}

/// An interest rate curve fitted on sparse `(tenor, rate)` observations.
///
/// Rates are mapped into the configured transform space, interpolated over
/// date abscissas, and mapped back to cap factors. Outside the observed date
/// range the curve either holds the boundary values or extends the
/// interpolant, per [`ExtrapolationPolicy`].
///
/// The curve is immutable once built; every query is read-only.
///
/// # Example
///
/// ```rust
/// use ratecurve_curves::prelude::*;
///
/// let base = Date::from_ymd(2025, 1, 15).unwrap();
/// let curve = RateCurve::new(
///     [("5d", 0.053), ("1m", 0.0548), ("30y", 0.0465)],
///     CurveSettings::with_base(base),
/// )
/// .unwrap();
///
/// let spot = curve.spot_rate("1m").unwrap();
/// assert!((spot - 0.0548).abs() < 1e-10);
///
/// let df = curve.discount("10y").unwrap();
/// assert!(df > 0.0 && df < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct RateCurve {
    settings: CurveSettings,
    adapter: DateAdapter,
    root: Date,
    raw_data: RawCurveData,
    observations: Observations,
    transform: Transform,
    fitted: FittedCurve,
    default_rate: f64,
}

impl RateCurve {
    /// Builds a curve.
    ///
    /// # Errors
    ///
    /// - `DataValidation` if a key is not date-like, a rate is not a finite
    ///   number or two keys land on the same date
    /// - `Interpolation` if there are fewer than two observations or the
    ///   interpolation kind cannot be fitted on them
    pub fn new(data: impl Into<RawCurveData>, settings: CurveSettings) -> CurveResult<Self> {
        let raw_data = data.into();
        let base = settings.base;
        let adapter = DateAdapter::new(settings.day_count, settings.calendar);
        let root = interpolation_root();

        let observations = Observations::from_raw(&raw_data, base, &adapter)?;
        if observations.len() < 2 {
            return Err(CurveError::interpolation(format!(
                "need at least 2 observations to fit a curve, got {}",
                observations.len()
            )));
        }
        let earliest = observations.earliest();
        let latest = observations.latest();

        let mut transform = Transform::new(settings.transform, settings.compounding);
        if settings.extrapolation == ExtrapolationPolicy::Flat {
            transform = transform.with_clamp(
                adapter.year_fraction(base, earliest.date),
                adapter.year_fraction(base, latest.date),
            );
        }

        let mut xs = Vec::with_capacity(observations.len() + 1);
        let mut ys = Vec::with_capacity(observations.len() + 1);
        for obs in observations.iter() {
            xs.push(adapter.date_as_numeric_offset(obs.date, root));
            ys.push(transform.to_y(adapter.year_fraction(base, obs.date), obs.rate));
        }
        // ln(df) needs a knot at t = 0
        if settings.transform.needs_base_anchor() && !observations.has_date(base) {
            xs.push(adapter.date_as_numeric_offset(base, root));
            ys.push(0.0);
        }

        let fitted =
            FittedCurve::fit(&xs, &ys, settings.interpolation, settings.extrapolation)?;

        let mut curve = Self {
            settings,
            adapter,
            root,
            raw_data,
            observations,
            transform,
            fitted,
            default_rate: earliest.rate,
        };
        if settings.extrapolation == ExtrapolationPolicy::Extrapolate {
            curve.default_rate = curve.anchor_rate();
        }

        debug!(
            "built curve: {} observations, transform={}, compounding={}, interpolation={}, extrapolation={}, range=[{}, {}]",
            curve.observations.len(),
            settings.transform,
            settings.compounding,
            settings.interpolation,
            settings.extrapolation,
            earliest.date,
            latest.date
        );

        Ok(curve)
    }

    /// Builds a curve from a string-valued configuration.
    ///
    /// # Errors
    ///
    /// Fails with the configuration error for the offending field (an
    /// unknown transform mode is `UnknownTransformMode`), or any error of
    /// [`RateCurve::new`].
    pub fn from_config(data: impl Into<RawCurveData>, config: &CurveConfig) -> CurveResult<Self> {
        let settings = config.resolve()?;
        Self::new(data, settings)
    }

    /// Builds a curve from a one-row or one-column table.
    pub fn from_table(table: &RateTable, settings: CurveSettings) -> CurveResult<Self> {
        Self::new(table.to_raw_data()?, settings)
    }

    /// Rate at the base date implied by the observations, used as the
    /// degenerate-conversion default under the extrapolate policy.
    fn anchor_rate(&self) -> f64 {
        let base = self.base();
        let method = self.settings.compounding;
        let transform = self.transform.unclamped();

        let mut xs = Vec::with_capacity(self.observations.len());
        let mut rates = Vec::with_capacity(self.observations.len());
        for obs in self.observations.iter() {
            let t = self.adapter.year_fraction(base, obs.date);
            if t <= 0.0 {
                continue;
            }
            let cf = transform.from_y(t, transform.to_y(t, obs.rate));
            xs.push(self.abscissa_of(obs.date));
            rates.push(method.rate_from_cap_factor(cf, t, Some(obs.rate)));
        }

        let fallback = rates
            .first()
            .copied()
            .unwrap_or(self.observations.earliest().rate);

        let x0 = self.abscissa_of(base);
        let fitted = self
            .settings
            .interpolation
            .build(&xs, &rates, true)
            .and_then(|interp| interp.interpolate(x0).map_err(CurveError::from));

        match fitted {
            Ok(rate) if rate.is_finite() => {
                debug!("anchor rate at {base}: {rate}");
                rate
            }
            Ok(rate) => {
                warn!("anchor rate at {base} is {rate}; using {fallback}");
                fallback
            }
            Err(e) => {
                warn!("cannot interpolate anchor rate at {base} ({e}); using {fallback}");
                fallback
            }
        }
    }

    // ---- date helpers ----

    fn resolve(&self, date: &DateInput) -> CurveResult<Date> {
        Ok(self.adapter.to_absolute_date(date, Some(self.base()))?)
    }

    fn resolve_pair(&self, date1: &DateInput, date2: &DateInput) -> CurveResult<(Date, Date)> {
        let d1 = self.resolve(date1)?;
        let d2 = self.adapter.to_absolute_date(date2, Some(d1))?;
        Ok((d1, d2))
    }

    fn abscissa_of(&self, date: Date) -> f64 {
        self.adapter.date_as_numeric_offset(date, self.root)
    }

    fn time_to(&self, date: Date) -> f64 {
        self.adapter.year_fraction(self.base(), date)
    }

    // ---- evaluation ----

    fn cap_factor_at(&self, date: Date) -> CurveResult<f64> {
        let y = self.fitted.evaluate(self.abscissa_of(date))?;
        Ok(self.transform.from_y(self.time_to(date), y))
    }

    fn cap_factor_between(&self, d1: Date, d2: Date) -> CurveResult<f64> {
        Ok(self.cap_factor_at(d2)? / self.cap_factor_at(d1)?)
    }

    fn forward_rate_between(&self, d1: Date, d2: Date) -> CurveResult<f64> {
        let cf = self.cap_factor_between(d1, d2)?;

        if !self.observations.contains(d1) || !self.observations.contains(d2) {
            return Ok(self.extrapolated_rate(cf, d1, d2));
        }

        let dt = self.adapter.year_fraction(d1, d2);
        Ok(self
            .settings
            .compounding
            .rate_from_cap_factor(cf, dt, Some(self.default_rate)))
    }

    /// Converts a cap factor to a rate when an endpoint lies outside the
    /// observed range.
    fn extrapolated_rate(&self, cf: f64, d1: Date, d2: Date) -> f64 {
        let method = self.settings.compounding;

        match self.settings.extrapolation {
            ExtrapolationPolicy::Flat => {
                let earliest = self.observations.earliest();
                let latest = self.observations.latest();

                if d2 < earliest.date {
                    return earliest.rate;
                }
                if d2 > latest.date && (d1 == self.base() || d1 >= latest.date) {
                    return latest.rate;
                }
                // the clamped cap factor stops accruing at the last observation
                let end = if d2 > latest.date { latest.date } else { d2 };
                let dt = self.adapter.year_fraction(d1, end);
                method.rate_from_cap_factor(cf, dt, Some(earliest.rate))
            }
            ExtrapolationPolicy::Extrapolate => {
                let dt = self.adapter.year_fraction(d1, d2);
                method.rate_from_cap_factor(cf, dt, Some(self.default_rate))
            }
        }
    }

    // ---- queries ----

    /// Forward cap factor from `date1` to `date2`.
    ///
    /// `date1` is resolved against the base; `date2` against `date1`.
    pub fn cap_factor(
        &self,
        date1: impl Into<DateInput>,
        date2: impl Into<DateInput>,
    ) -> CurveResult<f64> {
        let (d1, d2) = self.resolve_pair(&date1.into(), &date2.into())?;
        self.cap_factor_between(d1, d2)
    }

    /// Forward discount factor from `date1` to `date2`.
    pub fn discount_factor(
        &self,
        date1: impl Into<DateInput>,
        date2: impl Into<DateInput>,
    ) -> CurveResult<f64> {
        Ok(1.0 / self.cap_factor(date1, date2)?)
    }

    /// Forward rate from `date1` to `date2` under the curve's compounding.
    pub fn forward_rate(
        &self,
        date1: impl Into<DateInput>,
        date2: impl Into<DateInput>,
    ) -> CurveResult<f64> {
        let (d1, d2) = self.resolve_pair(&date1.into(), &date2.into())?;
        self.forward_rate_between(d1, d2)
    }

    /// Spot rate from the base to `date`.
    pub fn spot_rate(&self, date: impl Into<DateInput>) -> CurveResult<f64> {
        let d = self.resolve(&date.into())?;
        self.forward_rate_between(self.base(), d)
    }

    /// Discount factor from the base to `date`.
    pub fn discount(&self, date: impl Into<DateInput>) -> CurveResult<f64> {
        let d = self.resolve(&date.into())?;
        Ok(1.0 / self.cap_factor_between(self.base(), d)?)
    }

    /// Forward rate from `date1` to `date2`; alias of [`forward_rate`](Self::forward_rate).
    pub fn forward(
        &self,
        date1: impl Into<DateInput>,
        date2: impl Into<DateInput>,
    ) -> CurveResult<f64> {
        self.forward_rate(date1, date2)
    }

    /// Answers a [`CurveQuery`].
    pub fn query(&self, query: &CurveQuery) -> CurveResult<f64> {
        match query {
            CurveQuery::Discount(d) => self.discount(d),
            CurveQuery::Forward(d1, d2) => self.forward_rate(d1, d2),
        }
    }

    // ---- accessors ----

    /// Date at the head of the curve.
    #[must_use]
    pub fn base(&self) -> Date {
        self.settings.base
    }

    /// Construction settings.
    #[must_use]
    pub fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    /// The data the curve was built from, as supplied.
    #[must_use]
    pub fn raw_data(&self) -> &RawCurveData {
        &self.raw_data
    }

    /// Validated observations in date order.
    #[must_use]
    pub fn observations(&self) -> &Observations {
        &self.observations
    }

    /// Earliest observation.
    #[must_use]
    pub fn earliest(&self) -> Observation {
        self.observations.earliest()
    }

    /// Latest observation.
    #[must_use]
    pub fn latest(&self) -> Observation {
        self.observations.latest()
    }

    /// Rate returned when a conversion degenerates (zero year fraction or
    /// unit cap factor): the earliest observed rate under the flat policy,
    /// the interpolated rate at the base under the extrapolate policy.
    #[must_use]
    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    /// Numeric abscissa of `date`: days (or business days) since 2000-01-01.
    pub fn abscissa(&self, date: impl Into<DateInput>) -> CurveResult<f64> {
        let d = self.resolve(&date.into())?;
        Ok(self.abscissa_of(d))
    }

    /// Inverse of [`abscissa`](Self::abscissa).
    pub fn date_from_abscissa(&self, x: f64) -> CurveResult<Date> {
        Ok(self.adapter.numeric_offset_to_date(x, self.root)?)
    }
}
