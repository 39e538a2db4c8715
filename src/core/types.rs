use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_year, decimal_to_f64};
use crate::error::ChartResult;

/// One endpoint value of a slope series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopePoint {
    pub x: f64,
    pub y: f64,
}

impl SlopePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal(x: Decimal, y: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: decimal_to_f64(x, "x")?,
            y: decimal_to_f64(y, "y")?,
        })
    }

    /// Builds a point whose x value is the calendar year of `time`.
    pub fn from_decimal_year(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_year(time),
            y: decimal_to_f64(value, "y")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Input series: a label plus exactly two values (left and right).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeSeries {
    pub key: String,
    pub label: String,
    pub color: String,
    pub size: f64,
    pub values: Vec<SlopePoint>,
}

impl SlopeSeries {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        left: SlopePoint,
        right: SlopePoint,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
            size: 1.0,
            values: vec![left, right],
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Left and right endpoints when the series is usable for layout.
    ///
    /// Returns `None` for anything other than exactly two finite values or a
    /// size that is negative or non-finite.
    #[must_use]
    pub fn endpoints(&self) -> Option<(SlopePoint, SlopePoint)> {
        if !self.size.is_finite() || self.size < 0.0 {
            return None;
        }
        match self.values.as_slice() {
            [left, right] if left.is_finite() && right.is_finite() => Some((*left, *right)),
            _ => None,
        }
    }
}
