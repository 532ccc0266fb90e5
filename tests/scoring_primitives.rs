use signal_score::scoring::{
    aggregate, bucket, linear_ramp, presence_bonus, round2, ComponentScore, Confidence,
    ConfidenceLevel, ConfidenceScale, LogScale, RangeCurve, RangeStatus,
};

const SCALE: ConfidenceScale = ConfidenceScale {
    steps: &[
        (10.0, Confidence::new(ConfidenceLevel::High, 90.0)),
        (3.0, Confidence::new(ConfidenceLevel::Medium, 60.0)),
    ],
    trace: Confidence::new(ConfidenceLevel::Low, 30.0),
    none: Confidence::new(ConfidenceLevel::Low, 0.0),
};

#[test]
fn log_scale_damps_and_caps() {
    let scale = LogScale::new(15.0, 60.0);

    assert!((scale.score(0.0) - 0.0).abs() < 1e-9);
    assert!((scale.score(9.0) - 15.0).abs() < 1e-9);
    assert!((scale.score(99.0) - 30.0).abs() < 1e-9);
    assert!((scale.score(1e12) - 60.0).abs() < 1e-9);
    assert!((scale.saturation_point() - 9_999.0).abs() < 1e-6);

    let gain_small = scale.score(20.0) - scale.score(10.0);
    let gain_large = scale.score(2_010.0) - scale.score(2_000.0);
    assert!(gain_small > gain_large);
}

#[test]
fn range_curve_without_peak_is_flat_inside() {
    let curve = RangeCurve::window(10.0, 20.0).with_decay(10.0, 0.5);

    assert_eq!(curve.status(5.0), RangeStatus::Below);
    assert_eq!(curve.status(15.0), RangeStatus::Optimal);
    assert_eq!(curve.status(21.0), RangeStatus::Above);
    assert!((curve.bonus(5.0, 4.0) - 2.0).abs() < 1e-9);
    assert!((curve.bonus(12.0, 4.0) - 4.0).abs() < 1e-9);
    assert!((curve.bonus(25.0, 4.0) - 2.0).abs() < 1e-9);
    assert!((curve.bonus(100.0, 4.0) - 2.0).abs() < 1e-9);
}

#[test]
fn range_curve_without_decay_keeps_full_credit_above() {
    let curve = RangeCurve::window(1.0, 2.0);
    assert!((curve.fraction(50.0) - 1.0).abs() < 1e-9);
}

#[test]
fn ramp_and_presence() {
    assert!((linear_ramp(1.0, 4.0, 8.0) - 2.0).abs() < 1e-9);
    assert!((linear_ramp(40.0, 4.0, 8.0) - 8.0).abs() < 1e-9);
    assert!((presence_bonus(true, 7.0) - 7.0).abs() < 1e-9);
    assert!((presence_bonus(false, 7.0) - 0.0).abs() < 1e-9);
}

#[test]
fn aggregation_reports_uncapped_and_capped() {
    let components = [
        ComponentScore::capped(1.0, 30.0, 25.0),
        ComponentScore::capped(1.0, 12.0, 20.0),
        ComponentScore::capped(1.0, -4.0, 5.0),
    ];

    assert!((components[0].score - 25.0).abs() < 1e-9);
    assert!((components[2].score - 0.0).abs() < 1e-9);

    let (uncapped, capped) = aggregate(&components, 30.0);
    assert!((uncapped - 37.0).abs() < 1e-9);
    assert!((capped - 30.0).abs() < 1e-9);
}

#[test]
fn bucket_picks_first_threshold_met() {
    let table = [(80.0, 'A'), (50.0, 'B'), (20.0, 'C')];
    assert_eq!(bucket(80.0, &table, 'F'), 'A');
    assert_eq!(bucket(79.99, &table, 'F'), 'B');
    assert_eq!(bucket(20.0, &table, 'F'), 'C');
    assert_eq!(bucket(19.0, &table, 'F'), 'F');
}

#[test]
fn confidence_scale_distinguishes_trace_from_none() {
    assert_eq!(SCALE.calibrate(12.0).level, ConfidenceLevel::High);
    assert_eq!(SCALE.calibrate(3.0).level, ConfidenceLevel::Medium);
    assert!((SCALE.calibrate(1.0).score - 30.0).abs() < 1e-9);
    assert!((SCALE.calibrate(0.0).score - 0.0).abs() < 1e-9);
}

#[test]
fn rounding_to_two_places() {
    assert!((round2(35.621_22) - 35.62).abs() < 1e-9);
    assert!((round2(20.0) - 20.0).abs() < 1e-9);
}
