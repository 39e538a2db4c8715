//! Public slope chart API: layout pipeline, interaction and frame building.

mod axis;
mod chart;
mod config;
mod json_contract;
mod label_collision;
mod legend;
mod render_frame_builder;
mod slope_layout;

pub use axis::{
    AxisOrient, AxisTickLabel, TickFormatterFn, axis_tick_labels, axis_width,
    default_tick_formatter, format_value,
};
pub use chart::SlopeChart;
pub use config::{MAX_AXIS_TICK_COUNT, SlopeChartConfig};
pub use hit_test::{distance_to_line, nearest_slope, resolve_focus_key};
pub use json_contract::{
    SLOPE_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, SlopeLayoutSnapshot, SlopeLayoutSnapshotJsonContractV1,
};
pub use label_collision::{
    LabelVisibility, apply_label_visibility, resolve_label_visibility, sort_draw_order,
};
pub use legend::{
    ColorLegend, ColorLegendItem, ColorLegendMark, ColorLegendStyle, ColorLegendView, LegendEvent,
};
pub use render_frame_builder::build_slope_frame;
pub use slope_layout::{
    LayoutContext, SlopeGeometry, SlopeLayout, SlopeLayoutInput, SlopeLayoutOutcome,
    layout_slopes, max_label_width,
};
