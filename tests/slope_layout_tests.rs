use approx::assert_abs_diff_eq;
use slope_chart::api::{
    LayoutContext, SlopeChartConfig, SlopeLayoutInput, SlopeLayoutOutcome, default_tick_formatter,
    layout_slopes,
};
use slope_chart::core::{
    Bounds, DomainOverride, HeuristicTextMeasurer, ScaleKind, SlopePoint, SlopeSeries,
};
use slope_chart::error::ChartError;

fn series(key: &str, label: &str, left: f64, right: f64) -> SlopeSeries {
    SlopeSeries::new(
        key,
        label,
        "#1f77b4",
        SlopePoint::new(2000.0, left),
        SlopePoint::new(2010.0, right),
    )
}

fn run(
    series: &[SlopeSeries],
    bounds: Bounds,
    y_domain: DomainOverride,
    focus_key: Option<&str>,
) -> Result<SlopeLayoutOutcome, ChartError> {
    let config = SlopeChartConfig::default();
    let formatter = default_tick_formatter();
    let measurer = HeuristicTextMeasurer::default();
    layout_slopes(
        LayoutContext {
            config: &config,
            formatter: &formatter,
            measurer: &measurer,
        },
        SlopeLayoutInput {
            series,
            bounds,
            y_domain,
            y_scale_kind: ScaleKind::Linear,
            focus_key,
        },
    )
}

#[test]
fn landscape_layout_builds_labels_and_gutter() {
    let data = vec![series("a", "A", 1.0, 10.0), series("b", "B", 1.01, 10.5)];
    let layout = run(&data, Bounds::new(0.0, 0.0, 800.0, 400.0), DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    assert!(!layout.is_portrait);
    assert_eq!(layout.x_domain, (2000.0, 2010.0));
    assert_eq!(layout.y_scale.domain(), (1.0, 10.5));
    assert_eq!(layout.y_scale.range(), (350.0, 0.0));

    let a = layout.slope("a").expect("slope a");
    assert_eq!(a.left_label_text, "A 1");
    assert_eq!(a.right_label_text, "10 A");
    assert_abs_diff_eq!(a.font_size_px, 9.6, epsilon = 1e-9);

    let b = layout.slope("b").expect("slope b");
    assert_eq!(b.left_label_text, "B 1.01");
    assert_eq!(b.right_label_text, "10.5 B");

    // "B 1.01" is the longest left label: 6 chars * 0.55em * 9.6px.
    assert_abs_diff_eq!(layout.max_label_width, 6.0 * 0.55 * 9.6, epsilon = 1e-9);

    assert_abs_diff_eq!(
        a.x1,
        2.0 * layout.axis_width + layout.max_label_width,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        a.x2,
        800.0 - 2.0 * layout.axis_width - layout.max_label_width,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(a.y1, 350.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.y2, 0.0, epsilon = 1e-9);
}

#[test]
fn label_boxes_hug_endpoints_and_center_vertically() {
    let data = vec![series("a", "Alpha", 10.0, 20.0)];
    let layout = run(&data, Bounds::new(0.0, 0.0, 600.0, 300.0), DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");
    let slope = &layout.slopes[0];

    assert_abs_diff_eq!(slope.left_label_bounds.right(), slope.x1 - 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slope.right_label_bounds.left(), slope.x2 + 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        slope.left_label_bounds.y + slope.left_label_bounds.height / 2.0,
        slope.y1,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        slope.right_label_bounds.y + slope.right_label_bounds.height / 2.0,
        slope.y2,
        epsilon = 1e-9
    );
}

#[test]
fn portrait_layout_skips_axis_padding_and_uses_smaller_font() {
    let data = vec![series("a", "A", 1.0, 2.0)];
    let layout = run(&data, Bounds::new(0.0, 0.0, 300.0, 600.0), DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    assert!(layout.is_portrait);
    assert_eq!(layout.x_scale.range(), (0.0, 300.0));
    let slope = &layout.slopes[0];
    assert_abs_diff_eq!(slope.font_size_px, 0.4 * 16.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slope.x1, layout.max_label_width, epsilon = 1e-9);
    assert_abs_diff_eq!(slope.x2, 300.0 - layout.max_label_width, epsilon = 1e-9);
}

#[test]
fn long_left_labels_shrink_font() {
    let data = vec![
        series("long", "A rather long country name here", 1.0, 2.0),
        series("short", "Short", 3.0, 4.0),
    ];
    let layout = run(&data, Bounds::new(0.0, 0.0, 800.0, 400.0), DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    let long = layout.slope("long").expect("long slope");
    let short = layout.slope("short").expect("short slope");
    assert_abs_diff_eq!(long.font_size_px, 0.6 * 0.7 * 16.0, epsilon = 1e-9);
    assert_abs_diff_eq!(short.font_size_px, 0.6 * 16.0, epsilon = 1e-9);
}

#[test]
fn series_outside_y_domain_are_dropped() {
    let data = vec![series("in", "In", 5.0, 6.0), series("out", "Out", 5.0, 50.0)];
    let layout = run(
        &data,
        Bounds::new(0.0, 0.0, 800.0, 400.0),
        DomainOverride::none().with_max(10.0),
        None,
    )
    .expect("layout")
    .into_layout()
    .expect("layout ready");

    assert_eq!(layout.y_scale.domain(), (5.0, 10.0));
    assert_eq!(layout.slopes.len(), 1);
    assert!(layout.slope("out").is_none());
}

#[test]
fn every_series_outside_domain_yields_no_data() {
    let data = vec![series("a", "A", 5.0, 50.0)];
    let outcome = run(
        &data,
        Bounds::new(0.0, 0.0, 800.0, 400.0),
        DomainOverride::new(Some(0.0), Some(10.0)),
        None,
    )
    .expect("layout");
    assert!(outcome.is_no_data());
}

#[test]
fn empty_and_malformed_input_yield_no_data() {
    let bounds = Bounds::new(0.0, 0.0, 800.0, 400.0);
    assert!(
        run(&[], bounds, DomainOverride::none(), None)
            .expect("layout")
            .is_no_data()
    );

    let mut one_value = series("a", "A", 1.0, 2.0);
    one_value.values.truncate(1);
    let non_finite = series("b", "B", f64::NAN, 2.0);
    let negative_size = series("c", "C", 1.0, 2.0).with_size(-1.0);
    assert!(
        run(
            &[one_value, non_finite, negative_size],
            bounds,
            DomainOverride::none(),
            None
        )
        .expect("layout")
        .is_no_data()
    );
}

#[test]
fn duplicate_keys_keep_first_occurrence() {
    let data = vec![series("a", "First", 1.0, 2.0), series("a", "Second", 3.0, 4.0)];
    let layout = run(&data, Bounds::new(0.0, 0.0, 800.0, 400.0), DomainOverride::none(), Some("a"))
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    assert_eq!(layout.slopes.len(), 1);
    assert_eq!(layout.slopes[0].label, "First");
    assert_eq!(layout.slopes.iter().filter(|slope| slope.is_focused).count(), 1);
}

#[test]
fn stroke_sizes_follow_series_sizes() {
    let data = vec![
        series("thin", "Thin", 1.0, 2.0).with_size(0.0),
        series("mid", "Mid", 3.0, 4.0).with_size(5.0),
        series("thick", "Thick", 5.0, 6.0).with_size(10.0),
    ];
    let layout = run(&data, Bounds::new(0.0, 0.0, 800.0, 400.0), DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    assert_abs_diff_eq!(layout.slope("thin").expect("thin").stroke_size, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.slope("mid").expect("mid").stroke_size, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.slope("thick").expect("thick").stroke_size, 3.0, epsilon = 1e-9);

    let keys: Vec<&str> = layout.slopes.iter().map(|slope| slope.key.as_str()).collect();
    assert_eq!(keys, ["thin", "mid", "thick"]);
}

#[test]
fn focused_slope_is_drawn_last() {
    let data = vec![
        series("a", "A", 1.0, 2.0).with_size(3.0),
        series("b", "B", 3.0, 4.0).with_size(1.0),
        series("c", "C", 5.0, 6.0).with_size(2.0),
    ];
    let layout = run(&data, Bounds::new(0.0, 0.0, 800.0, 400.0), DomainOverride::none(), Some("b"))
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    let keys: Vec<&str> = layout.slopes.iter().map(|slope| slope.key.as_str()).collect();
    assert_eq!(keys, ["c", "a", "b"]);
    assert_eq!(layout.focused().map(|slope| slope.key.as_str()), Some("b"));
}

#[test]
fn focus_does_not_move_the_gutter() {
    let data = vec![series("a", "Alpha", 1.0, 10.0), series("b", "Beta", 2.0, 8.0)];
    let bounds = Bounds::new(0.0, 0.0, 800.0, 400.0);
    let unfocused = run(&data, bounds, DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");
    let focused = run(&data, bounds, DomainOverride::none(), Some("b"))
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    assert_eq!(unfocused.max_label_width, focused.max_label_width);
    assert_eq!(
        unfocused.slope("a").expect("a").x1,
        focused.slope("a").expect("a").x1
    );
}

#[test]
fn log_scale_rejects_non_positive_domain() {
    let config = SlopeChartConfig::default();
    let formatter = default_tick_formatter();
    let measurer = HeuristicTextMeasurer::default();
    let data = vec![series("a", "A", 0.0, 10.0)];

    let err = layout_slopes(
        LayoutContext {
            config: &config,
            formatter: &formatter,
            measurer: &measurer,
        },
        SlopeLayoutInput {
            series: &data,
            bounds: Bounds::new(0.0, 0.0, 800.0, 400.0),
            y_domain: DomainOverride::none(),
            y_scale_kind: ScaleKind::Log,
            focus_key: None,
        },
    )
    .expect_err("log domain must be positive");
    assert!(matches!(err, ChartError::LogDomain { min } if min == 0.0));
}

#[test]
fn invalid_bounds_are_rejected() {
    let data = vec![series("a", "A", 1.0, 2.0)];
    let err = run(&data, Bounds::new(0.0, 0.0, -1.0, 400.0), DomainOverride::none(), None)
        .expect_err("negative width");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));
}

#[test]
fn subnormal_value_span_still_lays_out() {
    let data = vec![series("a", "A", 0.0, 1e-310)];
    let layout = run(&data, Bounds::new(0.0, 0.0, 800.0, 400.0), DomainOverride::none(), None)
        .expect("layout")
        .into_layout()
        .expect("layout ready");

    assert_eq!(layout.y_scale.domain(), (0.0, 1e-310));
    assert_eq!(layout.slopes.len(), 1);
    assert!(layout.axis_width.is_finite());
}
