//! Curve data model and validator.
//!
//! [`RawCurveData`] is what callers hand to a curve: unordered
//! `(key, rate)` entries whose keys are dates or tenors. [`Observations`] is
//! the validated, date-ordered form the fitter consumes.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use ratecurve_core::adapter::DateAdapter;
use ratecurve_core::types::{Date, DateInput};

use crate::error::{CurveError, CurveResult};

/// A raw rate value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateInput {
    /// A numeric rate.
    Number(f64),
    /// Anything else; always rejected by validation.
    Text(String),
}

impl RateInput {
    /// Returns the rate if it is a finite number.
    #[must_use]
    pub fn as_rate(&self) -> Option<f64> {
        match self {
            RateInput::Number(r) if r.is_finite() => Some(*r),
            _ => None,
        }
    }
}

impl From<f64> for RateInput {
    fn from(rate: f64) -> Self {
        RateInput::Number(rate)
    }
}

impl From<&str> for RateInput {
    fn from(s: &str) -> Self {
        RateInput::Text(s.to_string())
    }
}

impl From<String> for RateInput {
    fn from(s: String) -> Self {
        RateInput::Text(s)
    }
}

impl fmt::Display for RateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateInput::Number(r) => write!(f, "{r}"),
            RateInput::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// Unvalidated `{key: rate}` curve data.
///
/// # Example
///
/// ```rust
/// use ratecurve_curves::RawCurveData;
///
/// let data: RawCurveData = [("5d", 0.053), ("1m", 0.0548), ("30y", 0.0465)]
///     .into_iter()
///     .collect();
/// assert_eq!(data.len(), 3);
///
/// let same: RawCurveData =
///     serde_json::from_str(r#"{"5d": 0.053, "1m": 0.0548, "30y": 0.0465}"#).unwrap();
/// assert_eq!(same.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "BTreeMap<String, RateInput>")]
pub struct RawCurveData {
    entries: Vec<(DateInput, RateInput)>,
}

impl RawCurveData {
    /// Creates empty curve data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn insert(&mut self, key: impl Into<DateInput>, rate: impl Into<RateInput>) {
        self.entries.push((key.into(), rate.into()));
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(DateInput, RateInput)] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<DateInput>, V: Into<RateInput>> FromIterator<(K, V)> for RawCurveData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<DateInput>, V: Into<RateInput>, const N: usize> From<[(K, V); N]> for RawCurveData {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, RateInput>> for RawCurveData {
    fn from(map: BTreeMap<String, RateInput>) -> Self {
        map.into_iter().collect()
    }
}

impl Serialize for RawCurveData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

/// A validated observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Absolute observation date.
    pub date: Date,
    /// Observed rate.
    pub rate: f64,
}

/// Validated observations in ascending date order.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    points: Vec<Observation>,
}

impl Observations {
    /// Validates raw data, resolving keys through `adapter` with tenors
    /// taken from `base`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::DataValidation` if a key is not date-like, a rate
    /// is not a finite number, two keys resolve to the same date, or there
    /// is no data at all.
    pub fn from_raw(
        data: &RawCurveData,
        base: Date,
        adapter: &DateAdapter,
    ) -> CurveResult<Self> {
        if data.is_empty() {
            return Err(CurveError::data_validation("curve data is empty"));
        }

        let mut points = Vec::with_capacity(data.len());
        for (key, value) in data.entries() {
            let date = adapter.to_absolute_date(key, Some(base)).map_err(|e| {
                CurveError::data_validation(format!(
                    "Data must be of form {{[date-like]: float}}; key '{key}': {e}"
                ))
            })?;
            let rate = value.as_rate().ok_or_else(|| {
                CurveError::data_validation(format!(
                    "Data must be of form {{[date-like]: float}}; rate for '{key}' is {value}"
                ))
            })?;
            points.push(Observation { date, rate });
        }

        points.sort_by_key(|p| p.date);
        if let Some(w) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(CurveError::data_validation(format!(
                "more than one rate given for {}",
                w[0].date
            )));
        }

        Ok(Self { points })
    }

    /// Returns the observations in ascending date order.
    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.points
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: validation rejects empty data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The earliest observation.
    #[must_use]
    pub fn earliest(&self) -> Observation {
        self.points[0]
    }

    /// The latest observation.
    #[must_use]
    pub fn latest(&self) -> Observation {
        self.points[self.points.len() - 1]
    }

    /// Returns true if `date` lies within the observed range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.earliest().date && date <= self.latest().date
    }

    /// Returns true if some observation falls on `date`.
    #[must_use]
    pub fn has_date(&self, date: Date) -> bool {
        self.points.binary_search_by_key(&date, |p| p.date).is_ok()
    }

    /// Iterates over the observations.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.points.iter()
    }
}
