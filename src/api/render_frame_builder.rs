use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, Primitive, PrimitiveGroup, RenderFrame, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::axis::{AxisOrient, axis_tick_labels, format_value};
use super::{LayoutContext, SlopeGeometry, SlopeLayout};

const AXIS_TEXT_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
const LABEL_TEXT_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);

/// Materializes a computed layout into drawable primitives.
///
/// Group order: value axes (landscape only), one group per slope in draw
/// order, then the x-domain captions.
pub fn build_slope_frame(layout: &SlopeLayout, ctx: LayoutContext<'_>) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(layout.bounds);

    if !layout.is_portrait {
        for (name, orient) in [("axis-left", AxisOrient::Left), ("axis-right", AxisOrient::Right)] {
            frame.groups.push(axis_group(layout, ctx, name, orient)?);
        }
    }

    for slope in &layout.slopes {
        frame.groups.push(slope_group(slope, ctx)?);
    }

    if let Some(group) = x_caption_group(layout, ctx) {
        frame.groups.push(group);
    }

    Ok(frame)
}

fn axis_group(
    layout: &SlopeLayout,
    ctx: LayoutContext<'_>,
    name: &str,
    orient: AxisOrient,
) -> ChartResult<PrimitiveGroup> {
    let font_size_px = ctx.config.axis_font_size_px();
    let mut group = PrimitiveGroup::new(name);
    for label in axis_tick_labels(
        layout.y_scale,
        orient,
        layout.bounds,
        ctx.config.axis_tick_count,
        ctx.formatter,
    )? {
        if label.text.is_empty() {
            continue;
        }
        group.push(Primitive::Text(
            TextPrimitive::new(
                label.text,
                label.x,
                label.y,
                font_size_px,
                AXIS_TEXT_COLOR,
                label.h_align,
            )
            .with_v_align(TextVAlign::Middle),
        ));
    }
    Ok(group)
}

fn slope_group(slope: &SlopeGeometry, ctx: LayoutContext<'_>) -> ChartResult<PrimitiveGroup> {
    let config = ctx.config;
    let base_color = Color::parse_css(&slope.color)?;
    let opacity = if slope.is_focused {
        1.0
    } else {
        config.unfocused_opacity
    };
    let color = base_color.with_alpha(base_color.alpha * opacity);
    let radius = if slope.is_focused {
        config.focused_endpoint_radius_px
    } else {
        config.endpoint_radius_px
    };
    let stroke_width = if slope.is_focused {
        2.0 * slope.stroke_size
    } else {
        slope.stroke_size
    };

    let mut group = PrimitiveGroup::new("slope").with_key(slope.key.clone());
    if slope.has_left_label {
        group.push(Primitive::Text(
            TextPrimitive::new(
                slope.left_label_text.clone(),
                slope.left_label_bounds.right(),
                slope.y1,
                slope.font_size_px,
                LABEL_TEXT_COLOR,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle)
            .with_bold(slope.is_focused),
        ));
    }
    group.push(Primitive::Circle(CirclePrimitive::new(
        slope.x1, slope.y1, radius, color,
    )));
    group.push(Primitive::Line(LinePrimitive::new(
        slope.x1,
        slope.y1,
        slope.x2,
        slope.y2,
        stroke_width,
        color,
    )));
    group.push(Primitive::Circle(CirclePrimitive::new(
        slope.x2, slope.y2, radius, color,
    )));
    if slope.has_right_label {
        group.push(Primitive::Text(
            TextPrimitive::new(
                slope.right_label_text.clone(),
                slope.right_label_bounds.left(),
                slope.y2,
                slope.font_size_px,
                LABEL_TEXT_COLOR,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Middle)
            .with_bold(slope.is_focused),
        ));
    }
    Ok(group)
}

fn x_caption_group(layout: &SlopeLayout, ctx: LayoutContext<'_>) -> Option<PrimitiveGroup> {
    let first = layout.slopes.first()?;
    let y = layout.y_scale.range().0 + ctx.config.x_caption_offset_px;
    let font_size_px = ctx.config.base_font_size_px;

    let mut group = PrimitiveGroup::new("x-domain");
    for (x, value) in [(first.x1, layout.x_domain.0), (first.x2, layout.x_domain.1)] {
        group.push(Primitive::Text(
            TextPrimitive::new(
                format_value(value),
                x,
                y,
                font_size_px,
                AXIS_TEXT_COLOR,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Hanging),
        ));
    }
    Some(group)
}
