//! Property tests for compounding, transforms and fitted curves.

use proptest::prelude::*;

use ratecurve_curves::prelude::*;

const METHODS: [CompoundingMethod; 3] = [
    CompoundingMethod::Exp,
    CompoundingMethod::Yld,
    CompoundingMethod::Lin,
];

const MODES: [TransformMode; 3] = [
    TransformMode::Rate,
    TransformMode::RateTime,
    TransformMode::LogDiscount,
];

proptest! {
    #[test]
    fn prop_rate_survives_cap_factor(rate in 0.001f64..0.25, t in 0.01f64..50.0) {
        for method in METHODS {
            let cf = method.cap_factor(rate, t);
            let back = method.rate_from_cap_factor(cf, t, None);
            prop_assert!((back - rate).abs() < 1e-9, "{method}: {rate} -> {back}");
            prop_assert!((method.disc_factor(rate, t) * cf - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_transform_inverts_at_observed_times(rate in 0.0f64..0.2, t in 0.01f64..40.0) {
        for method in METHODS {
            for mode in MODES {
                let transform = Transform::new(mode, method);
                let cf = transform.from_y(t, transform.to_y(t, rate));
                let expected = method.cap_factor(rate, t);
                prop_assert!((cf - expected).abs() < 1e-9 * expected, "{mode}/{method}");
            }
        }
    }

    #[test]
    fn prop_observed_rates_round_trip(
        r1 in 0.001f64..0.15,
        r2 in 0.001f64..0.15,
        r3 in 0.001f64..0.15,
        mode_idx in 0usize..3,
        extrapolate in any::<bool>(),
    ) {
        let base = Date::from_ymd(2025, 1, 15).unwrap();
        let policy = if extrapolate {
            ExtrapolationPolicy::Extrapolate
        } else {
            ExtrapolationPolicy::Flat
        };
        let settings = CurveSettings::with_base(base)
            .with_transform(MODES[mode_idx])
            .with_extrapolation(policy);
        let curve = RateCurve::new([("3m", r1), ("2y", r2), ("10y", r3)], settings).unwrap();

        for (tenor, rate) in [("3m", r1), ("2y", r2), ("10y", r3)] {
            let spot = curve.spot_rate(tenor).unwrap();
            prop_assert!((spot - rate).abs() < 1e-9, "{tenor}: {spot} vs {rate}");
        }
    }

    #[test]
    fn prop_flat_curve_is_flat(rate in 0.001f64..0.15, days in 1i64..20_000) {
        let base = Date::from_ymd(2025, 1, 15).unwrap();
        let curve = RateCurve::new(
            [("1m", rate), ("5y", rate), ("30y", rate)],
            CurveSettings::with_base(base),
        )
        .unwrap();
        let spot = curve.spot_rate(base.add_days(days).unwrap()).unwrap();
        prop_assert!((spot - rate).abs() < 1e-9, "day {days}: {spot} vs {rate}");
    }

    #[test]
    fn prop_discount_in_unit_interval(rate in 0.001f64..0.15, days in 1i64..20_000) {
        let base = Date::from_ymd(2025, 1, 15).unwrap();
        for mode in MODES {
            let settings = CurveSettings::with_base(base).with_transform(mode);
            let curve = RateCurve::new(
                [("1m", rate), ("1y", rate * 1.1), ("20y", rate * 0.9)],
                settings,
            )
            .unwrap();
            let df = curve.discount(base.add_days(days).unwrap()).unwrap();
            prop_assert!(df > 0.0 && df < 1.0, "{mode}: df = {df}");
        }
    }

    #[test]
    fn prop_unrepresentable_dates_never_panic(
        n in 100_000_000i64..=i64::from(i32::MAX),
        x in 1e8f64..1e300,
        mode_idx in 0usize..3,
        business in any::<bool>(),
    ) {
        let base = Date::from_ymd(2025, 1, 15).unwrap();
        let mut settings = CurveSettings::with_base(base).with_transform(MODES[mode_idx]);
        if business {
            settings = settings
                .with_day_count(DayCountConvention::Bd252)
                .with_calendar(CalendarId::Weekends);
        }
        let curve = RateCurve::new([("1m", 0.05), ("1y", 0.045), ("10y", 0.04)], settings).unwrap();

        let days = format!("{n}d");
        prop_assert!(curve.spot_rate(days.as_str()).is_err());
        prop_assert!(curve.forward_rate("1y", days.as_str()).is_err());
        let years = format!("{n}y");
        prop_assert!(curve.spot_rate(years.as_str()).is_err());
        prop_assert!(curve.date_from_abscissa(x).is_err());
        prop_assert!(curve.date_from_abscissa(-x).is_err());
    }
}
