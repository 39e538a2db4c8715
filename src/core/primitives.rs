use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Calendar year of `time`, the usual x value of a slope endpoint.
#[must_use]
pub fn datetime_to_year(time: DateTime<Utc>) -> f64 {
    f64::from(time.year())
}
