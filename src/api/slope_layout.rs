use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    Bounds, DomainOverride, Scale, ScaleKind, SlopePoint, SlopeSeries, TextMeasurer, extent,
};
use crate::error::ChartResult;

use super::axis::{TickFormatterFn, axis_width};
use super::label_collision::{apply_label_visibility, resolve_label_visibility, sort_draw_order};
use super::SlopeChartConfig;

/// Collaborators shared by every layout pass.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub config: &'a SlopeChartConfig,
    pub formatter: &'a TickFormatterFn,
    pub measurer: &'a dyn TextMeasurer,
}

/// Inputs of one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct SlopeLayoutInput<'a> {
    pub series: &'a [SlopeSeries],
    pub bounds: Bounds,
    pub y_domain: DomainOverride,
    pub y_scale_kind: ScaleKind,
    pub focus_key: Option<&'a str>,
}

/// Drawable geometry of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeGeometry {
    pub key: String,
    pub label: String,
    pub color: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Raw series size, used for collision priority and draw order.
    pub size: f64,
    pub stroke_size: f64,
    pub left_label_text: String,
    pub right_label_text: String,
    pub left_label_bounds: Bounds,
    pub right_label_bounds: Bounds,
    pub has_left_label: bool,
    pub has_right_label: bool,
    pub is_focused: bool,
    pub font_size_px: f64,
}

/// Result of a successful layout pass. Slopes are in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeLayout {
    pub bounds: Bounds,
    pub is_portrait: bool,
    pub x_domain: (f64, f64),
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub axis_width: f64,
    pub max_label_width: f64,
    pub slopes: Vec<SlopeGeometry>,
}

impl SlopeLayout {
    #[must_use]
    pub fn slope(&self, key: &str) -> Option<&SlopeGeometry> {
        self.slopes.iter().find(|slope| slope.key == key)
    }

    #[must_use]
    pub fn focused(&self) -> Option<&SlopeGeometry> {
        self.slopes.iter().find(|slope| slope.is_focused)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlopeLayoutOutcome {
    /// No series survived validation and domain filtering.
    NoData,
    Ready(SlopeLayout),
}

impl SlopeLayoutOutcome {
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    #[must_use]
    pub fn layout(&self) -> Option<&SlopeLayout> {
        match self {
            Self::NoData => None,
            Self::Ready(layout) => Some(layout),
        }
    }

    #[must_use]
    pub fn into_layout(self) -> Option<SlopeLayout> {
        match self {
            Self::NoData => None,
            Self::Ready(layout) => Some(layout),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    series: &'a SlopeSeries,
    left: SlopePoint,
    right: SlopePoint,
}

/// Runs the full layout pipeline: scales, label measurement, gutter shift,
/// collision elimination and draw ordering.
///
/// The pass is a pure function of its inputs; identical inputs give identical
/// output.
pub fn layout_slopes(
    ctx: LayoutContext<'_>,
    input: SlopeLayoutInput<'_>,
) -> ChartResult<SlopeLayoutOutcome> {
    let bounds = input.bounds.validate()?;
    let config = ctx.config;

    let candidates = well_formed_candidates(input.series);
    let x_extent = extent(
        candidates
            .iter()
            .flat_map(|candidate| [candidate.left.x, candidate.right.x]),
    );
    let y_extent = extent(
        candidates
            .iter()
            .flat_map(|candidate| [candidate.left.y, candidate.right.y]),
    );
    let (Some(x_domain), Some(y_extent)) = (x_extent, y_extent) else {
        debug!(series_count = input.series.len(), "no well-formed slope series");
        return Ok(SlopeLayoutOutcome::NoData);
    };

    let is_portrait = bounds.is_portrait();
    let y_domain = input.y_domain.resolve(y_extent);
    let y_scale = Scale::new(
        input.y_scale_kind,
        y_domain,
        bounds.pad_bottom(config.bottom_margin_px).y_range(),
    )?;

    let axis_width = axis_width(
        y_scale,
        config.axis_tick_count,
        ctx.formatter,
        ctx.measurer,
        config.axis_font_size_px(),
    );
    let horizontal_padding = if is_portrait { 0.0 } else { axis_width * 2.0 };
    let x_scale = Scale::linear(x_domain, bounds.pad_width(horizontal_padding).x_range())?;

    let size_extent = extent(candidates.iter().map(|candidate| candidate.series.size));
    let initial = initial_slopes(ctx, &candidates, x_scale, y_scale, size_extent, is_portrait)?;
    if initial.is_empty() {
        debug!(
            candidate_count = candidates.len(),
            y_min = y_domain.0,
            y_max = y_domain.1,
            "no slope series inside y domain"
        );
        return Ok(SlopeLayoutOutcome::NoData);
    }

    // Measured before shifting or collision handling so focus changes never
    // move the gutter.
    let max_label_width = max_label_width(&initial);
    let positioned = position_slopes(initial, max_label_width, config.label_gap_px, input.focus_key);
    let visibility = resolve_label_visibility(&positioned);
    let slopes = sort_draw_order(apply_label_visibility(positioned, &visibility));

    trace!(
        slope_count = slopes.len(),
        max_label_width,
        is_portrait,
        "slope layout pass"
    );

    Ok(SlopeLayoutOutcome::Ready(SlopeLayout {
        bounds,
        is_portrait,
        x_domain,
        x_scale,
        y_scale,
        axis_width,
        max_label_width,
        slopes,
    }))
}

/// Maximum left-label width across `slopes`, `0.0` when empty.
#[must_use]
pub fn max_label_width(slopes: &[SlopeGeometry]) -> f64 {
    slopes
        .iter()
        .map(|slope| OrderedFloat(slope.left_label_bounds.width))
        .max()
        .map_or(0.0, |width| width.0)
}

fn well_formed_candidates(series: &[SlopeSeries]) -> Vec<Candidate<'_>> {
    let mut by_key: IndexMap<&str, Candidate<'_>> = IndexMap::with_capacity(series.len());
    for item in series {
        let Some((left, right)) = item.endpoints() else {
            trace!(key = %item.key, value_count = item.values.len(), "skipping malformed series");
            continue;
        };
        if by_key.contains_key(item.key.as_str()) {
            warn!(key = %item.key, "skipping series with duplicate key");
            continue;
        }
        by_key.insert(
            item.key.as_str(),
            Candidate {
                series: item,
                left,
                right,
            },
        );
    }
    by_key.into_values().collect()
}

fn initial_slopes(
    ctx: LayoutContext<'_>,
    candidates: &[Candidate<'_>],
    x_scale: Scale,
    y_scale: Scale,
    size_extent: Option<(f64, f64)>,
    is_portrait: bool,
) -> ChartResult<Vec<SlopeGeometry>> {
    let config = ctx.config;
    let size_scale = match size_extent {
        Some(domain) => Some(Scale::linear(domain, config.stroke_size_range)?),
        None => None,
    };

    let mut slopes = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let Candidate {
            series,
            left,
            right,
        } = *candidate;
        if !y_scale.contains(left.y) || !y_scale.contains(right.y) {
            trace!(key = %series.key, "skipping series outside y domain");
            continue;
        }

        let left_label_text = format!("{} {}", series.label, (ctx.formatter)(left.y));
        let right_label_text = format!("{} {}", (ctx.formatter)(right.y), series.label);
        let font_size_px = config.label_font_size_px(is_portrait, &left_label_text);
        let left_metrics = ctx.measurer.measure(&left_label_text, font_size_px, None);
        let right_metrics = ctx.measurer.measure(&right_label_text, font_size_px, None);

        let stroke_size = size_scale
            .and_then(|scale| scale.map(series.size).ok())
            .filter(|size| size.is_finite())
            .unwrap_or(1.0);

        slopes.push(SlopeGeometry {
            key: series.key.clone(),
            label: series.label.clone(),
            color: series.color.clone(),
            x1: x_scale.map(left.x)?,
            y1: y_scale.map(left.y)?,
            x2: x_scale.map(right.x)?,
            y2: y_scale.map(right.y)?,
            size: series.size,
            stroke_size,
            left_label_text,
            right_label_text,
            left_label_bounds: Bounds::new(0.0, 0.0, left_metrics.width, left_metrics.height),
            right_label_bounds: Bounds::new(0.0, 0.0, right_metrics.width, right_metrics.height),
            has_left_label: true,
            has_right_label: true,
            is_focused: false,
            font_size_px,
        });
    }
    Ok(slopes)
}

/// Moves endpoints inward by the shared gutter and anchors each label box
/// next to its endpoint, vertically centered on it.
fn position_slopes(
    slopes: Vec<SlopeGeometry>,
    max_label_width: f64,
    label_gap_px: f64,
    focus_key: Option<&str>,
) -> Vec<SlopeGeometry> {
    slopes
        .into_iter()
        .map(|mut slope| {
            slope.is_focused = focus_key == Some(slope.key.as_str());
            slope.x1 += max_label_width;
            slope.x2 -= max_label_width;

            let left = slope.left_label_bounds;
            slope.left_label_bounds = left.with_position(
                slope.x1 - label_gap_px - left.width,
                slope.y1 - left.height / 2.0,
            );
            let right = slope.right_label_bounds;
            slope.right_label_bounds =
                right.with_position(slope.x2 + label_gap_px, slope.y2 - right.height / 2.0);
            slope
        })
        .collect()
}
