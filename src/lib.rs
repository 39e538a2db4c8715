//! slope-chart: headless slope chart layout and interaction engine.
//!
//! Series are drawn as segments between a left and a right value with labels
//! at both ends. The crate computes a collision-free label layout, resolves
//! the focused series under a pointer and emits backend-agnostic render
//! frames; drawing itself is left to a [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SlopeChart, SlopeChartConfig};
pub use error::{ChartError, ChartResult};
