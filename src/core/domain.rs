use serde::{Deserialize, Serialize};

/// Caller-supplied domain bounds; each side overrides the computed default
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainOverride {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl DomainOverride {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Applies the override on top of a computed `(min, max)` extent.
    #[must_use]
    pub fn resolve(self, computed: (f64, f64)) -> (f64, f64) {
        (
            self.min.unwrap_or(computed.0),
            self.max.unwrap_or(computed.1),
        )
    }
}

/// Minimum and maximum over the finite values of `values`.
///
/// Returns `None` when there is no finite value.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}
