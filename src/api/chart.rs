use tracing::{debug, trace};

use crate::core::{
    Bounds, DomainOverride, HeuristicTextMeasurer, Point, ScaleKind, SlopeSeries, TextMeasurer,
};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::{RenderFrame, Renderer};

use super::axis::{TickFormatterFn, default_tick_formatter};
use super::hit_test::resolve_focus_key;
use super::json_contract::SlopeLayoutSnapshot;
use super::render_frame_builder::build_slope_frame;
use super::slope_layout::{LayoutContext, SlopeLayoutInput, SlopeLayoutOutcome, layout_slopes};
use super::SlopeChartConfig;

/// Slope chart facade consumed by host applications.
///
/// Holds the chart inputs and the focus key. Every query recomputes the
/// layout from scratch, so the facade never caches geometry.
pub struct SlopeChart<R: Renderer> {
    renderer: R,
    config: SlopeChartConfig,
    measurer: Box<dyn TextMeasurer + Send + Sync>,
    formatter: TickFormatterFn,
    series: Vec<SlopeSeries>,
    bounds: Bounds,
    y_domain: DomainOverride,
    y_scale_kind: ScaleKind,
    interaction: InteractionState,
}

impl<R: Renderer> SlopeChart<R> {
    pub fn new(renderer: R, config: SlopeChartConfig, bounds: Bounds) -> ChartResult<Self> {
        let config = config.validate()?;
        let bounds = bounds.validate()?;
        debug!(
            width = bounds.width,
            height = bounds.height,
            "create slope chart"
        );
        Ok(Self {
            renderer,
            config,
            measurer: Box::new(HeuristicTextMeasurer::default()),
            formatter: default_tick_formatter(),
            series: Vec::new(),
            bounds,
            y_domain: DomainOverride::none(),
            y_scale_kind: ScaleKind::Linear,
            interaction: InteractionState::default(),
        })
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + Send + Sync + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + Send + Sync + 'static) {
        self.measurer = Box::new(measurer);
    }

    /// Formatter used for y-axis ticks and endpoint labels.
    pub fn set_tick_formatter(&mut self, formatter: TickFormatterFn) {
        self.formatter = formatter;
    }

    #[must_use]
    pub fn tick_formatter(&self) -> &TickFormatterFn {
        &self.formatter
    }

    pub fn set_data(&mut self, series: Vec<SlopeSeries>) {
        debug!(series_count = series.len(), "set slope series");
        self.series = series;
    }

    #[must_use]
    pub fn series(&self) -> &[SlopeSeries] {
        &self.series
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> ChartResult<()> {
        let bounds = bounds.validate()?;
        debug!(
            width = bounds.width,
            height = bounds.height,
            "set slope chart bounds"
        );
        self.bounds = bounds;
        Ok(())
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_y_domain(&mut self, y_domain: DomainOverride) {
        debug!(min = ?y_domain.min, max = ?y_domain.max, "set y domain override");
        self.y_domain = y_domain;
    }

    #[must_use]
    pub fn y_domain(&self) -> DomainOverride {
        self.y_domain
    }

    pub fn set_y_scale_kind(&mut self, kind: ScaleKind) {
        debug!(?kind, "set y scale kind");
        self.y_scale_kind = kind;
    }

    #[must_use]
    pub fn y_scale_kind(&self) -> ScaleKind {
        self.y_scale_kind
    }

    pub fn set_config(&mut self, config: SlopeChartConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        debug!("set slope chart config");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> SlopeChartConfig {
        self.config
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn focus_key(&self) -> Option<&str> {
        self.interaction.focus_key()
    }

    /// Sets the focus key directly, e.g. from a linked legend.
    pub fn set_focus_key(&mut self, key: Option<String>) -> bool {
        let changed = self.interaction.set_focus_key(key);
        if changed {
            trace!(focus_key = ?self.interaction.focus_key(), "focus key changed");
        }
        changed
    }

    fn context(&self) -> LayoutContext<'_> {
        LayoutContext {
            config: &self.config,
            formatter: &self.formatter,
            measurer: self.measurer.as_ref(),
        }
    }

    /// Runs the layout pipeline on the current inputs and focus key.
    pub fn layout(&self) -> ChartResult<SlopeLayoutOutcome> {
        layout_slopes(
            self.context(),
            SlopeLayoutInput {
                series: &self.series,
                bounds: self.bounds,
                y_domain: self.y_domain,
                y_scale_kind: self.y_scale_kind,
                focus_key: self.interaction.focus_key(),
            },
        )
    }

    /// Updates the focus key from a pointer position and reports whether it
    /// changed. Points outside the chart bounds clear the focus.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        self.interaction.on_pointer_move(x, y);
        let focus_key = match self.layout()? {
            SlopeLayoutOutcome::NoData => None,
            SlopeLayoutOutcome::Ready(layout) => resolve_focus_key(&layout, Point::new(x, y)),
        };
        Ok(self.set_focus_key(focus_key))
    }

    /// Clears the focus key and reports whether it changed.
    pub fn pointer_leave(&mut self) -> bool {
        let had_focus = self.interaction.focus_key().is_some();
        self.interaction.on_pointer_leave();
        if had_focus {
            trace!("focus cleared on pointer leave");
        }
        had_focus
    }

    /// Builds the drawable frame; empty when no series survive.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        match self.layout()? {
            SlopeLayoutOutcome::NoData => Ok(RenderFrame::new(self.bounds)),
            SlopeLayoutOutcome::Ready(layout) => build_slope_frame(&layout, self.context()),
        }
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        frame.validate()?;
        self.renderer.render(&frame)
    }

    pub fn snapshot(&self) -> ChartResult<Option<SlopeLayoutSnapshot>> {
        Ok(self
            .layout()?
            .layout()
            .map(SlopeLayoutSnapshot::from_layout))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
