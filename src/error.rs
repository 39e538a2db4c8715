use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("log scale domain must be > 0, got min={min}")]
    LogDomain { min: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
