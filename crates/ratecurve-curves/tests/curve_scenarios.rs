//! Integration test: money-market style curve under every transform and
//! boundary policy.
//!
//! | Tenor | Rate    |
//! |-------|---------|
//! | 5D    | 5.300%  |
//! | 1M    | 5.480%  |
//! | 30Y   | 4.650%  |
//!
//! Base date: January 15, 2025. The 30Y point falls on 2055-01-15.

use approx::assert_relative_eq;

use ratecurve_curves::prelude::*;

const MODES: [TransformMode; 3] = [
    TransformMode::Rate,
    TransformMode::RateTime,
    TransformMode::LogDiscount,
];

fn base() -> Date {
    Date::from_ymd(2025, 1, 15).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn data() -> RawCurveData {
    RawCurveData::from([("5d", 0.053), ("1m", 0.0548), ("30y", 0.0465)])
}

fn build(mode: TransformMode, policy: ExtrapolationPolicy) -> RateCurve {
    let settings = CurveSettings::with_base(base())
        .with_transform(mode)
        .with_extrapolation(policy);
    RateCurve::new(data(), settings).unwrap()
}

// =============================================================================
// FLAT BOUNDARIES
// =============================================================================

#[test]
fn test_flat_front_and_back_hold_observed_rates() {
    for mode in MODES {
        let curve = build(mode, ExtrapolationPolicy::Flat);

        assert_relative_eq!(curve.spot_rate(ymd(2025, 1, 16)).unwrap(), 0.053, epsilon = 1e-12);
        assert_relative_eq!(curve.spot_rate(ymd(2056, 1, 15)).unwrap(), 0.0465, epsilon = 1e-12);

        let fwd_front = curve
            .forward_rate(ymd(2025, 1, 16), ymd(2025, 1, 17))
            .unwrap();
        assert_relative_eq!(fwd_front, 0.053, epsilon = 1e-12);

        let fwd_back = curve
            .forward_rate(ymd(2056, 1, 15), ymd(2060, 1, 15))
            .unwrap();
        assert_relative_eq!(fwd_back, 0.0465, epsilon = 1e-12);
    }
}

#[test]
fn test_flat_forward_straddling_last_observation() {
    // the clamped cap factor stops accruing at 2055-01-15, so a forward
    // running past it equals the forward up to it
    for mode in MODES {
        let curve = build(mode, ExtrapolationPolicy::Flat);
        let straddle = curve
            .forward_rate(ymd(2026, 1, 15), ymd(2056, 1, 15))
            .unwrap();
        let inside = curve
            .forward_rate(ymd(2026, 1, 15), ymd(2055, 1, 15))
            .unwrap();
        assert_relative_eq!(straddle, inside, epsilon = 1e-12);
    }
}

#[test]
fn test_flat_spot_at_base_observation() {
    // an observation on the base date makes the base spot rate exact
    let data = RawCurveData::from([("0m", 0.053), ("1m", 0.0548), ("30y", 0.0465)]);
    for mode in MODES {
        let settings = CurveSettings::with_base(base()).with_transform(mode);
        let curve = RateCurve::new(data.clone(), settings).unwrap();
        assert_eq!(curve.spot_rate(base()).unwrap(), 0.053);
        assert_eq!(curve.discount(base()).unwrap(), 1.0);
    }
}

#[test]
fn test_today_keyword_base() {
    let data = RawCurveData::from([("0m", 0.053), ("1m", 0.0548), ("30y", 0.0465)]);
    let curve = RateCurve::new(data, CurveSettings::default()).unwrap();
    assert_eq!(curve.base(), Date::today());
    assert_eq!(curve.spot_rate("t").unwrap(), 0.053);
    assert_relative_eq!(curve.spot_rate("t+31y").unwrap(), 0.0465, epsilon = 1e-12);
}

// =============================================================================
// EXTRAPOLATED BOUNDARIES
// =============================================================================

#[test]
fn test_extrapolated_front_follows_trend() {
    // rates rise from 5d to 1m, so extending backwards lowers them
    for mode in [TransformMode::Rate, TransformMode::RateTime] {
        let curve = build(mode, ExtrapolationPolicy::Extrapolate);
        let spot = curve.spot_rate(ymd(2025, 1, 16)).unwrap();
        assert!(spot < 0.053, "{mode}: spot(1d) = {spot}");
    }
}

#[test]
fn test_extrapolated_back_follows_trend() {
    // rates fall from 1m to 30y, so extending forwards lowers them
    for mode in MODES {
        let curve = build(mode, ExtrapolationPolicy::Extrapolate);
        let spot = curve.spot_rate(ymd(2056, 1, 15)).unwrap();
        assert!(spot < 0.0465, "{mode}: spot(31y) = {spot}");
    }
}

#[test]
fn test_extrapolated_forwards_in_rate_space() {
    let curve = build(TransformMode::Rate, ExtrapolationPolicy::Extrapolate);

    let front = curve
        .forward_rate(ymd(2025, 1, 16), ymd(2025, 1, 17))
        .unwrap();
    assert!(front < 0.053, "fwd(1d, 2d) = {front}");

    let back = curve
        .forward_rate(ymd(2056, 1, 15), ymd(2060, 1, 15))
        .unwrap();
    assert!(back < 0.0465, "fwd(31y, 35y) = {back}");
}

#[test]
fn test_log_discount_front_is_anchored() {
    // ln(df) gets an extra knot at the base, so the first observation is
    // interior and the front holds the first observed rate instead of
    // diverging like the r and r*t transforms do
    let curve = build(TransformMode::LogDiscount, ExtrapolationPolicy::Extrapolate);
    let spot = curve.spot_rate(ymd(2025, 1, 16)).unwrap();
    assert_relative_eq!(spot, 0.053, epsilon = 1e-9);
}

// =============================================================================
// CONSISTENCY
// =============================================================================

#[test]
fn test_observed_rates_round_trip() {
    for mode in MODES {
        for policy in [ExtrapolationPolicy::Flat, ExtrapolationPolicy::Extrapolate] {
            let curve = build(mode, policy);
            for obs in curve.observations().iter() {
                let spot = curve.spot_rate(obs.date).unwrap();
                assert_relative_eq!(spot, obs.rate, epsilon = 1e-10);
            }
        }
    }
}

#[test]
fn test_forward_matches_discount_ratio() {
    let curve = build(TransformMode::LogDiscount, ExtrapolationPolicy::Flat);
    let d1 = ymd(2026, 1, 15);
    let d2 = ymd(2027, 1, 15);

    let df1 = curve.discount(d1).unwrap();
    let df2 = curve.discount(d2).unwrap();
    let t = DateAdapter::default().year_fraction(d1, d2);

    let fwd = curve.forward_rate(d1, d2).unwrap();
    assert_relative_eq!(fwd, (df1 / df2).ln() / t, epsilon = 1e-12);
    assert_relative_eq!(curve.discount_factor(d1, d2).unwrap(), df2 / df1, epsilon = 1e-12);
}

#[test]
fn test_discount_decreases_with_maturity() {
    for mode in MODES {
        let curve = build(mode, ExtrapolationPolicy::Flat);
        let mut previous = 1.0;
        for tenor in ["1w", "1m", "3m", "1y", "5y", "10y", "30y"] {
            let df = curve.discount(tenor).unwrap();
            assert!(df < previous, "{mode}: df({tenor}) = {df}");
            assert!(df > 0.0);
            previous = df;
        }
    }
}

#[test]
fn test_second_date_relative_to_first() {
    let curve = build(TransformMode::RateTime, ExtrapolationPolicy::Flat);
    let a = curve.forward_rate("2y", "1y").unwrap();
    let b = curve.forward_rate(ymd(2027, 1, 15), ymd(2028, 1, 15)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_queries_are_deterministic() {
    let first = build(TransformMode::RateTime, ExtrapolationPolicy::Extrapolate);
    let second = build(TransformMode::RateTime, ExtrapolationPolicy::Extrapolate);
    for tenor in ["1d", "2w", "6m", "7y", "45y"] {
        assert_eq!(first.spot_rate(tenor).unwrap(), second.spot_rate(tenor).unwrap());
        assert_eq!(first.discount(tenor).unwrap(), second.discount(tenor).unwrap());
    }
    assert_eq!(first.default_rate(), second.default_rate());
}

#[test]
fn test_clone_answers_identically() {
    let curve = build(TransformMode::Rate, ExtrapolationPolicy::Extrapolate);
    let copy = curve.clone();
    assert_eq!(
        curve.forward_rate("3y", "2y").unwrap(),
        copy.forward_rate("3y", "2y").unwrap()
    );
}

// =============================================================================
// INTERPOLATION KINDS AND CONVENTIONS
// =============================================================================

#[test]
fn test_step_interpolation_holds_previous_rate() {
    let settings = CurveSettings::with_base(base())
        .with_transform(TransformMode::Rate)
        .with_interpolation(InterpolationKind::Previous);
    let curve = RateCurve::new(data(), settings).unwrap();
    assert_relative_eq!(curve.spot_rate("5y").unwrap(), 0.0548, epsilon = 1e-12);
    assert_relative_eq!(curve.spot_rate("20d").unwrap(), 0.053, epsilon = 1e-12);
}

#[test]
fn test_cubic_interpolation_hits_knots() {
    let data = RawCurveData::from([
        ("1m", 0.050),
        ("3m", 0.051),
        ("1y", 0.049),
        ("5y", 0.045),
        ("10y", 0.046),
    ]);
    for mode in MODES {
        let settings = CurveSettings::with_base(base())
            .with_transform(mode)
            .with_interpolation(InterpolationKind::Cubic);
        let curve = RateCurve::new(data.clone(), settings).unwrap();
        assert_relative_eq!(curve.spot_rate("1y").unwrap(), 0.049, epsilon = 1e-10);
        let mid = curve.spot_rate("2y").unwrap();
        assert!(mid > 0.04 && mid < 0.055, "{mode}: spot(2y) = {mid}");
    }
}

#[test]
fn test_business_day_convention() {
    let settings = CurveSettings::with_base(base())
        .with_day_count(DayCountConvention::Bd252)
        .with_calendar(CalendarId::Weekends);
    let curve = RateCurve::new(data(), settings).unwrap();

    for obs in curve.observations().iter() {
        assert_relative_eq!(curve.spot_rate(obs.date).unwrap(), obs.rate, epsilon = 1e-10);
    }
    // 2025-01-17 is a Friday, 2025-01-20 a Monday: one business day apart
    assert_eq!(
        curve.abscissa(ymd(2025, 1, 20)).unwrap() - curve.abscissa(ymd(2025, 1, 17)).unwrap(),
        1.0
    );
}

#[test]
fn test_compounding_methods() {
    for method in [CompoundingMethod::Exp, CompoundingMethod::Yld, CompoundingMethod::Lin] {
        for mode in MODES {
            let settings = CurveSettings::with_base(base())
                .with_transform(mode)
                .with_compounding(method);
            let curve = RateCurve::new(data(), settings).unwrap();
            assert_relative_eq!(curve.spot_rate("1m").unwrap(), 0.0548, epsilon = 1e-10);

            let df = curve.discount("1y").unwrap();
            let spot = curve.spot_rate("1y").unwrap();
            let settings = curve.settings();
            let t = DateAdapter::new(settings.day_count, settings.calendar)
                .year_fraction(base(), ymd(2026, 1, 15));
            assert_relative_eq!(df, method.disc_factor(spot, t), epsilon = 1e-12);
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_unknown_transform_mode_from_config() {
    let config = CurveConfig::default().with_transform("apple");
    let err = RateCurve::from_config(data(), &config).unwrap_err();
    assert!(matches!(err, CurveError::UnknownTransformMode { .. }));
}

#[test]
fn test_unknown_compounding_from_config() {
    let config = CurveConfig::default().with_compounding("CONT");
    let err = RateCurve::from_config(data(), &config).unwrap_err();
    assert!(matches!(err, CurveError::UnknownMethod { .. }));
}

#[test]
fn test_invalid_data() {
    let mut data = data();
    data.insert("1y", "five percent");
    let err = RateCurve::new(data, CurveSettings::with_base(base())).unwrap_err();
    assert!(matches!(err, CurveError::DataValidation { .. }));

    let data = RawCurveData::from([("soon", 0.05), ("1y", 0.05)]);
    let err = RateCurve::new(data, CurveSettings::with_base(base())).unwrap_err();
    assert!(matches!(err, CurveError::DataValidation { .. }));
}

#[test]
fn test_out_of_range_queries_are_errors() {
    for mode in MODES {
        let curve = build(mode, ExtrapolationPolicy::Extrapolate);
        for tenor in ["2000000000d", "200000000y", "-2000000000d"] {
            let err = curve.spot_rate(tenor).unwrap_err();
            assert!(matches!(err, CurveError::DateConversion { .. }), "{mode} {tenor}: {err}");
        }
        let err = curve.forward_rate("1y", "2000000000d").unwrap_err();
        assert!(matches!(err, CurveError::DateConversion { .. }));
        let err = curve.discount("2000000000d2000000000d").unwrap_err();
        assert!(matches!(err, CurveError::DateConversion { .. }));

        for x in [1e300, -1e300, f64::INFINITY, f64::NAN] {
            assert!(curve.date_from_abscissa(x).is_err(), "{mode} x = {x}");
        }
    }
}

#[test]
fn test_too_few_points_for_cubic() {
    let settings = CurveSettings::with_base(base())
        .with_transform(TransformMode::Rate)
        .with_interpolation(InterpolationKind::Cubic);
    let err = RateCurve::new([("1m", 0.05), ("1y", 0.06)], settings).unwrap_err();
    assert!(matches!(err, CurveError::Interpolation { .. }));
}
