use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use slope_chart::core::{Bounds, DomainOverride, Point, Scale, ScaleKind, SlopePoint, extent};
use slope_chart::error::ChartError;

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = Scale::linear((0.0, 100.0), (350.0, 0.0)).expect("scale");
    assert_eq!(scale.kind(), ScaleKind::Linear);
    assert_relative_eq!(scale.map(25.0).expect("map"), 262.5);
    assert_relative_eq!(scale.invert(262.5).expect("invert"), 25.0);
    assert_eq!(scale.ticks(6), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn log_scale_maps_decades_evenly() {
    let scale = Scale::log((1.0, 100.0), (0.0, 200.0)).expect("scale");
    assert_relative_eq!(scale.map(10.0).expect("map"), 100.0, epsilon = 1e-9);
    assert_relative_eq!(scale.invert(100.0).expect("invert"), 10.0, epsilon = 1e-9);

    let ticks = scale.ticks(6);
    assert_eq!(ticks.first().copied(), Some(1.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
}

#[test]
fn log_scale_rejects_non_positive_minimum() {
    let err = Scale::log((-1.0, 10.0), (0.0, 100.0)).expect_err("negative min");
    assert!(matches!(err, ChartError::LogDomain { min } if min == -1.0));
}

#[test]
fn inverted_or_non_finite_domains_are_rejected() {
    assert!(matches!(
        Scale::linear((10.0, 1.0), (0.0, 100.0)),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        Scale::linear((f64::NAN, 1.0), (0.0, 100.0)),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = Scale::linear((5.0, 5.0), (300.0, 0.0)).expect("scale");
    assert_eq!(scale.map(5.0).expect("map"), 300.0);
    assert_eq!(scale.invert(120.0).expect("invert"), 5.0);
    assert_eq!(scale.ticks(6), vec![5.0]);
}

#[test]
fn domain_override_replaces_only_given_bounds() {
    let computed = extent([3.0, f64::NAN, -2.0, 7.5]).expect("extent");
    assert_eq!(computed, (-2.0, 7.5));
    assert_eq!(DomainOverride::none().resolve(computed), (-2.0, 7.5));
    assert_eq!(DomainOverride::none().with_min(0.0).resolve(computed), (0.0, 7.5));
    assert_eq!(
        DomainOverride::new(Some(-5.0), Some(10.0)).resolve(computed),
        (-5.0, 10.0)
    );
    assert!(extent([f64::INFINITY]).is_none());
}

#[test]
fn bounds_padding_is_immutable() {
    let bounds = Bounds::new(10.0, 20.0, 300.0, 200.0);
    let padded = bounds.pad_width(25.0).pad_bottom(50.0);

    assert_eq!(bounds, Bounds::new(10.0, 20.0, 300.0, 200.0));
    assert_eq!(padded.x_range(), (35.0, 285.0));
    assert_eq!(padded.y_range(), (170.0, 20.0));
    assert!(!bounds.is_portrait());
    assert_eq!(bounds.center(), Point::new(160.0, 120.0));
}

#[test]
fn bounds_containment_is_inclusive_and_overlap_is_strict() {
    let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
    assert!(bounds.contains_point(Point::new(10.0, 10.0)));
    assert!(!bounds.contains_point(Point::new(10.01, 5.0)));

    assert!(bounds.intersects(Bounds::new(9.0, 9.0, 5.0, 5.0)));
    assert!(!bounds.intersects(Bounds::new(10.0, 0.0, 5.0, 5.0)));
}

#[test]
fn points_build_from_decimal_and_datetime() {
    let point = SlopePoint::from_decimal(Decimal::new(2015, 0), Decimal::new(1234, 2))
        .expect("decimal point");
    assert_eq!(point.x, 2015.0);
    assert_relative_eq!(point.y, 12.34);

    let time = Utc
        .with_ymd_and_hms(1990, 6, 1, 0, 0, 0)
        .single()
        .expect("valid time");
    let point = SlopePoint::from_decimal_year(time, Decimal::new(567, 1)).expect("year point");
    assert_eq!(point.x, 1990.0);
    assert_relative_eq!(point.y, 56.7);
}

#[test]
fn subnormal_span_ticks_fall_back_to_domain_ends() {
    let scale = Scale::linear((0.0, 1e-310), (400.0, 0.0)).expect("scale");
    assert_eq!(scale.ticks(6), vec![0.0, 1e-310]);
}
