pub mod bounds;
pub mod domain;
pub mod primitives;
pub mod scale;
pub mod text;
pub mod types;

pub use bounds::{Bounds, Point};
pub use domain::{DomainOverride, extent};
pub use scale::{Scale, ScaleKind};
pub use text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, WrappedText};
pub use types::{SlopePoint, SlopeSeries};
