use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Mapping mode used by a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw domain units.
    #[default]
    Linear,
    /// Uniform spacing in log units (domain minimum must be > 0).
    Log,
}

/// Monotonic domain-to-pixel mapping with its inverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    kind: ScaleKind,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl Scale {
    /// Creates a scale over `domain` (`lo <= hi`) mapped onto `range`.
    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if domain_start > domain_end {
            return Err(ChartError::InvalidData(format!(
                "scale domain must be ordered, got [{domain_start}, {domain_end}]"
            )));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        if kind == ScaleKind::Log && domain_start <= 0.0 {
            return Err(ChartError::LogDomain { min: domain_start });
        }

        Ok(Self {
            kind,
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Linear, domain, range)
    }

    pub fn log(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Log, domain, range)
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns `true` when `value` lies inside the inclusive domain.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.domain_start && value <= self.domain_end
    }

    /// Maps a domain value to a pixel coordinate.
    pub fn map(self, value: f64) -> ChartResult<f64> {
        let transformed = self.transform(value)?;
        let (start, end) = self.transformed_domain();
        let span = end - start;
        if span == 0.0 {
            return Ok(self.range_start);
        }
        let normalized = (transformed - start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a pixel coordinate back to a domain value.
    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let (start, end) = self.transformed_domain();
        let range_span = self.range_end - self.range_start;
        if end == start || range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        let transformed = start + normalized * (end - start);
        Ok(match self.kind {
            ScaleKind::Linear => transformed,
            ScaleKind::Log => transformed.exp(),
        })
    }

    /// Representative domain values for axis labelling, ascending.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        match self.kind {
            ScaleKind::Linear => linear_ticks(self.domain_start, self.domain_end, tick_count),
            ScaleKind::Log => log_ladder_ticks(self.domain_start, self.domain_end, tick_count),
        }
    }

    fn transform(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        match self.kind {
            ScaleKind::Linear => Ok(value),
            ScaleKind::Log => {
                if value <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "log scale requires values > 0".to_owned(),
                    ));
                }
                Ok(value.ln())
            }
        }
    }

    fn transformed_domain(self) -> (f64, f64) {
        match self.kind {
            ScaleKind::Linear => (self.domain_start, self.domain_end),
            ScaleKind::Log => (self.domain_start.ln(), self.domain_end.ln()),
        }
    }
}

const MAX_TICKS_PER_REQUESTED: usize = 10;

/// Step on the 1/2/5 x 10^k ladder closest to `span / count`.
fn nice_tick_step(span: f64, tick_count: usize) -> f64 {
    let raw = span / tick_count.max(1) as f64;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let error = raw / magnitude;
    let multiplier = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    magnitude * multiplier
}

fn linear_ticks(start: f64, end: f64, tick_count: usize) -> Vec<f64> {
    if start == end {
        return vec![start];
    }

    let step = nice_tick_step(end - start, tick_count);
    if !step.is_finite() || step <= 0.0 {
        return vec![start, end];
    }

    // Fractional steps are applied as divisions to keep ticks like 0.6 exact.
    let inverse = (1.0 / step).round();
    let (first, last) = if step < 1.0 {
        ((start * inverse).ceil(), (end * inverse).floor())
    } else {
        ((start / step).ceil(), (end / step).floor())
    };

    // Subnormal spans overflow the step ladder; fall back to the domain ends.
    let max_ticks = tick_count.saturating_mul(MAX_TICKS_PER_REQUESTED) as f64;
    if !first.is_finite() || !last.is_finite() || last < first || last - first >= max_ticks {
        return vec![start, end];
    }

    let (first, last) = (first as i64, last as i64);
    if step < 1.0 {
        (first..=last).map(|index| index as f64 / inverse).collect()
    } else {
        (first..=last).map(|index| index as f64 * step).collect()
    }
}

fn log_ladder_ticks(start: f64, end: f64, tick_count: usize) -> Vec<f64> {
    let min_exp = start.log10().floor() as i32;
    let max_exp = end.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10_f64.powi(exp);
        for multiplier in [1.0, 2.0, 5.0] {
            let candidate = decade * multiplier;
            if candidate >= start && candidate <= end {
                ticks.push(candidate);
            }
        }
    }

    if !ticks.iter().any(|value| approx_equal(*value, start)) {
        ticks.push(start);
    }
    if !ticks.iter().any(|value| approx_equal(*value, end)) {
        ticks.push(end);
    }

    ticks.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
    ticks.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));
    evenly_sample_ticks(ticks, tick_count)
}

fn evenly_sample_ticks(ticks: Vec<f64>, target: usize) -> Vec<f64> {
    if ticks.len() <= target || target == 0 {
        return ticks;
    }
    if target == 1 {
        return vec![ticks[0]];
    }

    let last_index = ticks.len() - 1;
    let mut sampled: Vec<f64> = Vec::with_capacity(target);
    for step in 0..target {
        let ratio = (step as f64) / ((target - 1) as f64);
        let index = (ratio * (last_index as f64)).round() as usize;
        let value = ticks[index.min(last_index)];
        if sampled
            .last()
            .is_some_and(|prev| approx_equal(*prev, value))
        {
            continue;
        }
        sampled.push(value);
    }
    sampled
}

fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_use_round_steps() {
        assert_eq!(linear_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn log_ticks_keep_endpoints_and_respect_count() {
        let ticks = log_ladder_ticks(1.0, 10_000.0, 6);
        assert!(ticks.len() <= 6);
        assert_eq!(ticks.first().copied(), Some(1.0));
        assert_eq!(ticks.last().copied(), Some(10_000.0));
    }
}
