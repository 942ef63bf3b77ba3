use crate::error::{FuzzyError, FuzzyResult};
use crate::universe::Universe;

/// Map `value` from `[min, max]` onto `[0, 1]`.
///
/// A zero-width or non-finite range is a configuration error.
pub fn normalize(value: f64, min: f64, max: f64) -> FuzzyResult<f64> {
    if !min.is_finite() || !max.is_finite() || max == min {
        return Err(FuzzyError::InvalidRange { min, max });
    }
    Ok((value - min) / (max - min))
}

impl Universe {
    /// Position of `value` within this universe's bounds, 0 at the start and
    /// 1 at the end.
    pub fn normalize(&self, value: f64) -> FuzzyResult<f64> {
        normalize(value, self.min(), self.max())
    }
}
