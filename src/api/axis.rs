use std::sync::Arc;

use crate::core::{Bounds, Scale, TextMeasurer};
use crate::error::ChartResult;
use crate::render::TextHAlign;

/// Externally supplied value formatter, used verbatim for axis ticks and
/// endpoint labels.
pub type TickFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Shortest round-trip decimal rendering (`1`, `10.5`, `0.25`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_owned();
    }
    format!("{value}")
}

#[must_use]
pub fn default_tick_formatter() -> TickFormatterFn {
    Arc::new(format_value)
}

/// Side of the plot a value axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Left,
    Right,
}

/// One positioned tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTickLabel {
    pub value: f64,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
}

/// Width of the widest tick label, measured on the longest formatted tick.
///
/// Ties on character count keep the first tick.
#[must_use]
pub fn axis_width(
    scale: Scale,
    tick_count: usize,
    formatter: &TickFormatterFn,
    measurer: &dyn TextMeasurer,
    font_size_px: f64,
) -> f64 {
    let mut longest: Option<String> = None;
    for tick in scale.ticks(tick_count) {
        let text = formatter(tick);
        let is_longer = longest
            .as_ref()
            .is_none_or(|current| text.chars().count() > current.chars().count());
        if is_longer {
            longest = Some(text);
        }
    }

    longest
        .map(|text| measurer.measure(&text, font_size_px, None).width)
        .unwrap_or(0.0)
}

/// Tick labels for a vertical value axis hugging the left or right edge of
/// `bounds`.
pub fn axis_tick_labels(
    scale: Scale,
    orient: AxisOrient,
    bounds: Bounds,
    tick_count: usize,
    formatter: &TickFormatterFn,
) -> ChartResult<Vec<AxisTickLabel>> {
    let (x, h_align) = match orient {
        AxisOrient::Left => (bounds.left(), TextHAlign::Left),
        AxisOrient::Right => (bounds.right(), TextHAlign::Right),
    };

    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| {
            Ok(AxisTickLabel {
                value,
                text: formatter(value),
                x,
                y: scale.map(value)?,
                h_align,
            })
        })
        .collect()
}
