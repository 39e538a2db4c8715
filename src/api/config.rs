use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upper bound accepted for [`SlopeChartConfig::axis_tick_count`].
pub const MAX_AXIS_TICK_COUNT: usize = 50;

/// Tunable layout and styling constants for a slope chart.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Missing fields take their
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeChartConfig {
    /// Space reserved under the plot for the x-domain captions.
    pub bottom_margin_px: f64,
    /// Horizontal gap between an endpoint and its label box.
    pub label_gap_px: f64,
    /// Pixel size of `1em`.
    pub base_font_size_px: f64,
    pub landscape_label_font_em: f64,
    pub portrait_label_font_em: f64,
    /// Left labels longer than this many characters are drawn smaller.
    pub long_label_chars: usize,
    pub long_label_shrink: f64,
    pub axis_font_em: f64,
    pub axis_tick_count: usize,
    /// Stroke widths the series sizes are mapped onto, smallest first.
    pub stroke_size_range: (f64, f64),
    pub endpoint_radius_px: f64,
    pub focused_endpoint_radius_px: f64,
    pub unfocused_opacity: f64,
    pub x_caption_offset_px: f64,
}

impl Default for SlopeChartConfig {
    fn default() -> Self {
        Self {
            bottom_margin_px: 50.0,
            label_gap_px: 8.0,
            base_font_size_px: 16.0,
            landscape_label_font_em: 0.6,
            portrait_label_font_em: 0.4,
            long_label_chars: 25,
            long_label_shrink: 0.7,
            axis_font_em: 0.8,
            axis_tick_count: 6,
            stroke_size_range: (1.0, 3.0),
            endpoint_radius_px: 3.0,
            focused_endpoint_radius_px: 6.0,
            unfocused_opacity: 0.7,
            x_caption_offset_px: 10.0,
        }
    }
}

impl SlopeChartConfig {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.bottom_margin_px, "bottom_margin_px"),
            (self.label_gap_px, "label_gap_px"),
            (self.x_caption_offset_px, "x_caption_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "slope chart config `{name}` must be finite and >= 0"
                )));
            }
        }

        for (value, name) in [
            (self.base_font_size_px, "base_font_size_px"),
            (self.landscape_label_font_em, "landscape_label_font_em"),
            (self.portrait_label_font_em, "portrait_label_font_em"),
            (self.long_label_shrink, "long_label_shrink"),
            (self.axis_font_em, "axis_font_em"),
            (self.endpoint_radius_px, "endpoint_radius_px"),
            (self.focused_endpoint_radius_px, "focused_endpoint_radius_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "slope chart config `{name}` must be finite and > 0"
                )));
            }
        }

        if !(1..=MAX_AXIS_TICK_COUNT).contains(&self.axis_tick_count) {
            return Err(ChartError::InvalidData(format!(
                "slope chart config `axis_tick_count` must be in [1, {MAX_AXIS_TICK_COUNT}]"
            )));
        }

        let (stroke_min, stroke_max) = self.stroke_size_range;
        if !stroke_min.is_finite() || !stroke_max.is_finite() || stroke_min <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke size range must be finite and > 0".to_owned(),
            ));
        }
        if stroke_min > stroke_max {
            return Err(ChartError::InvalidData(
                "stroke size range must be ordered".to_owned(),
            ));
        }

        if !self.unfocused_opacity.is_finite() || !(0.0..=1.0).contains(&self.unfocused_opacity) {
            return Err(ChartError::InvalidData(
                "unfocused opacity must be in [0, 1]".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Label font size for one series; long left labels and portrait charts
    /// get smaller text.
    #[must_use]
    pub fn label_font_size_px(&self, is_portrait: bool, left_label: &str) -> f64 {
        let em = if is_portrait {
            self.portrait_label_font_em
        } else {
            self.landscape_label_font_em
        };
        let shrink = if left_label.chars().count() > self.long_label_chars {
            self.long_label_shrink
        } else {
            1.0
        };
        em * shrink * self.base_font_size_px
    }

    #[must_use]
    pub fn axis_font_size_px(&self) -> f64 {
        self.axis_font_em * self.base_font_size_px
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse slope chart config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize slope chart config: {e}"))
        })
    }
}
