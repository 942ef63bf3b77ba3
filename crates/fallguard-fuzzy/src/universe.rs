use serde::Serialize;

use crate::error::{FuzzyError, FuzzyResult};

/// A discretized, evenly spaced domain for one fuzzy variable.
///
/// Both ends are included: sample `i` sits at `start + i * step`, for
/// `i` in `0..=round((end - start) / step)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Universe {
    start: f64,
    end: f64,
    step: f64,
    #[serde(skip)]
    points: Vec<f64>,
}

impl Universe {
    /// Build a universe covering `start..=end` in increments of `step`.
    pub fn new(start: f64, end: f64, step: f64) -> FuzzyResult<Self> {
        let valid = start.is_finite()
            && end.is_finite()
            && step.is_finite()
            && step > 0.0
            && end > start;
        if !valid {
            return Err(FuzzyError::InvalidUniverse { start, end, step });
        }

        let intervals = ((end - start) / step).round() as usize;
        let points = (0..=intervals)
            .map(|i| start + i as f64 * step)
            .collect();

        Ok(Self {
            start,
            end,
            step,
            points,
        })
    }

    /// Lower bound of the domain
    pub fn min(&self) -> f64 {
        self.start
    }

    /// Upper bound of the domain
    pub fn max(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample points in ascending order
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Is `value` within the closed domain?
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Fail with [`FuzzyError::OutsideUniverse`] if `value` is not in the domain.
    pub fn ensure_contains(&self, value: f64) -> FuzzyResult<()> {
        if !value.is_finite() {
            return Err(FuzzyError::NonFinite(value));
        }
        if !self.contains(value) {
            return Err(FuzzyError::OutsideUniverse {
                value,
                min: self.start,
                max: self.end,
            });
        }
        Ok(())
    }

    /// Linear interpolation of `samples` (one per point) at `value`.
    ///
    /// Values beyond either end take the boundary sample; there is no
    /// extrapolation.
    pub fn interpolate(&self, samples: &[f64], value: f64) -> f64 {
        debug_assert_eq!(samples.len(), self.points.len());
        let last = self.points.len() - 1;

        if value <= self.points[0] {
            return samples[0];
        }
        if value >= self.points[last] {
            return samples[last];
        }

        // points[lo] <= value < points[lo + 1]
        let lo = self.points.partition_point(|&p| p <= value) - 1;
        let (x0, x1) = (self.points[lo], self.points[lo + 1]);
        let (y0, y1) = (samples[lo], samples[lo + 1]);
        y0 + (value - x0) * (y1 - y0) / (x1 - x0)
    }
}
