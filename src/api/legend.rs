//! Color legend: vertically stacked swatch + wrapped label entries.
//!
//! [`ColorLegend`] computes the stacking layout once per item list;
//! [`ColorLegendView`] positions it, applies focus highlighting and resolves
//! pointer events. Hover and click events carry the entry color, not its key,
//! because hosts map colors back to the series they group.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point, TextMeasurer, WrappedText};
use crate::error::ChartResult;
use crate::render::{
    Color, Primitive, PrimitiveGroup, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    TextVAlign,
};

const FOCUSED_TEXT_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const MUTED_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);
const HIT_AREA_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorLegendItem {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl ColorLegendItem {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorLegendStyle {
    pub font_size_em: f64,
    pub base_font_size_px: f64,
    /// Side of the color swatch slot.
    pub rect_size: f64,
    /// Gap between swatch and label text.
    pub rect_padding: f64,
    /// Vertical gap added after every entry.
    pub line_height: f64,
}

impl Default for ColorLegendStyle {
    fn default() -> Self {
        Self {
            font_size_em: 0.6,
            base_font_size_px: 16.0,
            rect_size: 10.0,
            rect_padding: 5.0,
            line_height: 5.0,
        }
    }
}

impl ColorLegendStyle {
    #[must_use]
    pub fn font_size_px(&self) -> f64 {
        self.font_size_em * self.base_font_size_px
    }
}

/// Laid-out legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLegendMark {
    pub key: String,
    pub color: String,
    pub text: WrappedText,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorLegend {
    style: ColorLegendStyle,
    max_width: f64,
    marks: Vec<ColorLegendMark>,
}

impl ColorLegend {
    /// Lays out `items`; `max_width` bounds each entry (unbounded when `None`).
    #[must_use]
    pub fn new(
        items: &[ColorLegendItem],
        max_width: Option<f64>,
        style: ColorLegendStyle,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let max_width = max_width.unwrap_or(f64::INFINITY);
        let max_text_width = max_width - style.rect_size - style.rect_padding;
        let wrap_width = max_text_width.is_finite().then_some(max_text_width);
        let font_size_px = style.font_size_px();

        let marks = items
            .iter()
            .map(|item| {
                let text = measurer.wrap(&item.label, font_size_px, wrap_width);
                ColorLegendMark {
                    key: item.key.clone(),
                    color: item.color.clone(),
                    width: style.rect_size + style.rect_padding + text.width,
                    height: text.height.max(style.rect_size),
                    text,
                }
            })
            .collect();

        Self {
            style,
            max_width,
            marks,
        }
    }

    #[must_use]
    pub fn style(&self) -> ColorLegendStyle {
        self.style
    }

    #[must_use]
    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    #[must_use]
    pub fn marks(&self) -> &[ColorLegendMark] {
        &self.marks
    }

    /// Widest entry, `0.0` for an empty legend.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.marks.iter().map(|mark| mark.width).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.marks.iter().map(|mark| mark.height).sum::<f64>()
            + self.style.line_height * self.marks.len() as f64
    }

    /// Marks paired with their vertical offset from the legend top.
    pub fn stacked_marks(&self) -> impl Iterator<Item = (f64, &ColorLegendMark)> {
        let line_height = self.style.line_height;
        self.marks.iter().scan(0.0, move |offset, mark| {
            let current = *offset;
            *offset += mark.height + line_height;
            Some((current, mark))
        })
    }
}

/// Pointer interaction emitted by a legend view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegendEvent {
    Hover(String),
    Click(String),
    Leave,
}

/// Positioned legend with focus highlighting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorLegendView {
    pub x: f64,
    pub y: f64,
    pub focus_keys: IndexSet<String>,
}

impl ColorLegendView {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            focus_keys: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn with_focus_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.focus_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Focus mode is on whenever any focus key is supplied.
    #[must_use]
    pub fn is_focus_mode(&self) -> bool {
        !self.focus_keys.is_empty()
    }

    #[must_use]
    pub fn is_emphasized(&self, mark: &ColorLegendMark) -> bool {
        !self.is_focus_mode() || self.focus_keys.contains(&mark.key)
    }

    /// Transparent hit area of a mark at `offset`.
    #[must_use]
    pub fn hit_bounds(&self, legend: &ColorLegend, offset: f64, mark: &ColorLegendMark) -> Bounds {
        let line_height = legend.style().line_height;
        Bounds::new(
            self.x,
            self.y + offset - line_height / 2.0,
            mark.width,
            mark.height + line_height,
        )
    }

    #[must_use]
    pub fn mark_at<'a>(&self, legend: &'a ColorLegend, point: Point) -> Option<&'a ColorLegendMark> {
        legend
            .stacked_marks()
            .find(|(offset, mark)| self.hit_bounds(legend, *offset, mark).contains_point(point))
            .map(|(_, mark)| mark)
    }

    #[must_use]
    pub fn pointer_move(&self, legend: &ColorLegend, point: Point) -> Option<LegendEvent> {
        self.mark_at(legend, point)
            .map(|mark| LegendEvent::Hover(mark.color.clone()))
    }

    #[must_use]
    pub fn click(&self, legend: &ColorLegend, point: Point) -> Option<LegendEvent> {
        self.mark_at(legend, point)
            .map(|mark| LegendEvent::Click(mark.color.clone()))
    }

    #[must_use]
    pub fn pointer_leave(&self) -> LegendEvent {
        LegendEvent::Leave
    }

    pub fn build_group(&self, legend: &ColorLegend) -> ChartResult<PrimitiveGroup> {
        let style = legend.style();
        let font_size_px = style.font_size_px();
        let mut group = PrimitiveGroup::new("color-legend");

        for (offset, mark) in legend.stacked_marks() {
            let emphasized = self.is_emphasized(mark);
            let swatch_color = if emphasized {
                Color::parse_css(&mark.color)?
            } else {
                MUTED_COLOR
            };
            let text_color = if emphasized {
                FOCUSED_TEXT_COLOR
            } else {
                MUTED_COLOR
            };

            let hit = self.hit_bounds(legend, offset, mark);
            group.push(Primitive::Rect(RectPrimitive::new(
                hit.x,
                hit.y,
                hit.width,
                hit.height,
                HIT_AREA_COLOR,
            )));
            group.push(Primitive::Rect(RectPrimitive::new(
                self.x,
                self.y + offset + style.rect_size / 2.0,
                style.rect_size,
                style.rect_size / 4.0,
                swatch_color,
            )));

            let text_x = self.x + style.rect_size + style.rect_padding;
            for (index, line) in mark.text.lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                group.push(Primitive::Text(
                    TextPrimitive::new(
                        line.clone(),
                        text_x,
                        self.y + offset + index as f64 * mark.text.line_height,
                        font_size_px,
                        text_color,
                        TextHAlign::Left,
                    )
                    .with_v_align(TextVAlign::Hanging),
                ));
            }
        }
        Ok(group)
    }

    pub fn build_frame(&self, legend: &ColorLegend) -> ChartResult<RenderFrame> {
        let bounds = Bounds::new(self.x, self.y, legend.width(), legend.height());
        Ok(RenderFrame::new(bounds).with_group(self.build_group(legend)?))
    }
}
