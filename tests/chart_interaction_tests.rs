use slope_chart::api::{SlopeChart, SlopeChartConfig, SlopeGeometry, nearest_slope};
use slope_chart::core::{Bounds, Point, ScaleKind, SlopePoint, SlopeSeries};
use slope_chart::error::ChartError;
use slope_chart::render::NullRenderer;

fn flat(key: &str, value: f64) -> SlopeSeries {
    SlopeSeries::new(
        key,
        key.to_uppercase(),
        "steelblue",
        SlopePoint::new(2000.0, value),
        SlopePoint::new(2010.0, value),
    )
}

fn chart_with_three_series() -> SlopeChart<NullRenderer> {
    let mut chart = SlopeChart::new(
        NullRenderer::default(),
        SlopeChartConfig::default(),
        Bounds::new(0.0, 0.0, 800.0, 400.0),
    )
    .expect("chart init");
    chart.set_data(vec![flat("low", 1.0), flat("mid", 5.0), flat("high", 9.0)]);
    chart
}

fn segment(key: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> SlopeGeometry {
    let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
    SlopeGeometry {
        key: key.to_owned(),
        label: key.to_owned(),
        color: "#000".to_owned(),
        x1,
        y1,
        x2,
        y2,
        size: 1.0,
        stroke_size: 1.0,
        left_label_text: key.to_owned(),
        right_label_text: key.to_owned(),
        left_label_bounds: bounds,
        right_label_bounds: bounds,
        has_left_label: true,
        has_right_label: true,
        is_focused: false,
        font_size_px: 9.6,
    }
}

#[test]
fn pointer_focuses_nearest_line() {
    let mut chart = chart_with_three_series();

    // "mid" sits at y = 175 px on a 350 px plot.
    let changed = chart.pointer_move(400.0, 180.0).expect("pointer move");
    assert!(changed);
    assert_eq!(chart.focus_key(), Some("mid"));

    let unchanged = chart.pointer_move(420.0, 170.0).expect("pointer move");
    assert!(!unchanged);

    chart.pointer_move(400.0, 340.0).expect("pointer move");
    assert_eq!(chart.focus_key(), Some("low"));

    let layout = chart
        .layout()
        .expect("layout")
        .into_layout()
        .expect("layout ready");
    assert_eq!(layout.focused().map(|slope| slope.key.as_str()), Some("low"));
    assert_eq!(layout.slopes.last().map(|slope| slope.key.as_str()), Some("low"));
}

#[test]
fn pointer_outside_bounds_clears_focus() {
    let mut chart = chart_with_three_series();
    chart.pointer_move(400.0, 180.0).expect("pointer move");
    assert_eq!(chart.focus_key(), Some("mid"));

    let changed = chart.pointer_move(900.0, 10.0).expect("pointer move");
    assert!(changed);
    assert_eq!(chart.focus_key(), None);
}

#[test]
fn bounds_edges_count_as_inside() {
    let mut chart = chart_with_three_series();
    chart.pointer_move(800.0, 400.0).expect("pointer move");
    assert_eq!(chart.focus_key(), Some("low"));
}

#[test]
fn pointer_leave_clears_focus() {
    let mut chart = chart_with_three_series();
    chart.pointer_move(400.0, 10.0).expect("pointer move");
    assert_eq!(chart.focus_key(), Some("high"));

    assert!(chart.pointer_leave());
    assert_eq!(chart.focus_key(), None);
    assert!(chart.interaction().cursor().is_none());
    assert!(!chart.pointer_leave());
}

#[test]
fn pointer_move_without_data_keeps_focus_empty() {
    let mut chart = SlopeChart::new(
        NullRenderer::default(),
        SlopeChartConfig::default(),
        Bounds::new(0.0, 0.0, 800.0, 400.0),
    )
    .expect("chart init");

    assert!(!chart.pointer_move(10.0, 10.0).expect("pointer move"));
    assert_eq!(chart.focus_key(), None);
}

#[test]
fn log_domain_error_propagates_from_pointer_move() {
    let mut chart = chart_with_three_series();
    chart.set_data(vec![flat("zero", 0.0), flat("one", 1.0)]);
    chart.set_y_scale_kind(ScaleKind::Log);

    let err = chart.pointer_move(10.0, 10.0).expect_err("log domain");
    assert!(matches!(err, ChartError::LogDomain { .. }));
    let err = chart.render().expect_err("log domain");
    assert!(matches!(err, ChartError::LogDomain { .. }));
}

#[test]
fn nearest_slope_uses_infinite_line_distance() {
    let slopes = vec![
        segment("short", 0.0, 0.0, 10.0, 0.0),
        segment("far", 0.0, 50.0, 1000.0, 50.0),
    ];
    // Far beyond the end of "short", but still on its extended line.
    let nearest = nearest_slope(&slopes, Point::new(900.0, 1.0)).expect("nearest");
    assert_eq!(nearest.key, "short");
}

#[test]
fn nearest_slope_tie_keeps_first_and_skips_degenerate_lines() {
    let slopes = vec![
        segment("point", 5.0, 5.0, 5.0, 5.0),
        segment("upper", 0.0, 0.0, 10.0, 0.0),
        segment("lower", 0.0, 10.0, 10.0, 10.0),
    ];
    let nearest = nearest_slope(&slopes, Point::new(5.0, 5.0)).expect("nearest");
    assert_eq!(nearest.key, "upper");

    assert!(nearest_slope(&slopes[..1], Point::new(5.0, 5.0)).is_none());
}

#[test]
fn render_hands_validated_frame_to_renderer() {
    let mut chart = chart_with_three_series();
    chart.pointer_move(400.0, 180.0).expect("pointer move");
    chart.render().expect("render");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_circle_count, 6);
    let frame = renderer.last_frame.expect("frame");
    let last_slope = frame
        .groups
        .iter()
        .filter(|group| group.name == "slope")
        .last()
        .expect("slope group");
    assert_eq!(last_slope.key.as_deref(), Some("mid"));
}

#[test]
fn render_without_data_emits_empty_frame() {
    let mut chart = SlopeChart::new(
        NullRenderer::default(),
        SlopeChartConfig::default(),
        Bounds::new(0.0, 0.0, 800.0, 400.0),
    )
    .expect("chart init");
    chart.render().expect("render");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_frame.expect("frame").is_empty());
}

#[test]
fn chart_rejects_invalid_bounds_and_config() {
    let err = SlopeChart::new(
        NullRenderer::default(),
        SlopeChartConfig::default(),
        Bounds::new(0.0, 0.0, f64::NAN, 400.0),
    )
    .err()
    .expect("invalid bounds");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));

    let mut chart = chart_with_three_series();
    let config = SlopeChartConfig {
        unfocused_opacity: 2.0,
        ..SlopeChartConfig::default()
    };
    assert!(matches!(
        chart.set_config(config),
        Err(ChartError::InvalidData(_))
    ));
    assert!(chart.set_bounds(Bounds::new(0.0, 0.0, 10.0, -1.0)).is_err());
    assert_eq!(chart.bounds(), Bounds::new(0.0, 0.0, 800.0, 400.0));
}
