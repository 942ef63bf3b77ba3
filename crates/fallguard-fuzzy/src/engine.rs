//! Fuzzification and peak-weighted defuzzification.
//!
//! Defuzzification here is a weighted mean of maxima: each category
//! contributes its peak location, weighted by the input's degree of
//! membership in that category. It is not a centroid; on plateaus the
//! peak is the first maximal sample, so results depend on that tie-break.

use tracing::trace;

use crate::category::{Category, CategorySet};
use crate::error::{FuzzyError, FuzzyResult};

/// Degrees of membership of one crisp value, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Fuzzified<C: Category> {
    degrees: Vec<(C, f64)>,
}

impl<C: Category> Fuzzified<C> {
    pub fn degree(&self, category: C) -> f64 {
        self.degrees
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, d)| *d)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        self.degrees.iter().copied()
    }

    /// Sum of all degrees
    pub fn total(&self) -> f64 {
        self.degrees.iter().map(|(_, d)| d).sum()
    }

    /// True when the value belongs to no category at all.
    pub fn is_degenerate(&self) -> bool {
        self.total() == 0.0
    }

    /// Category with the highest degree; the earliest declared wins ties.
    /// `None` when every degree is zero.
    pub fn dominant(&self) -> Option<C> {
        let mut best: Option<(C, f64)> = None;
        for &(category, degree) in &self.degrees {
            match best {
                Some((_, top)) if degree <= top => {}
                _ if degree > 0.0 => best = Some((category, degree)),
                _ => {}
            }
        }
        best.map(|(c, _)| c)
    }

    /// Category with the highest degree, falling back to the first declared
    /// category when nothing has membership.
    pub fn dominant_or_first(&self) -> C {
        self.dominant().unwrap_or(C::ALL[0])
    }
}

impl<C: Category> CategorySet<C> {
    /// Degree of membership of `value` in every category.
    ///
    /// Values outside the universe take the boundary degree.
    pub fn fuzzify(&self, value: f64) -> FuzzyResult<Fuzzified<C>> {
        if !value.is_finite() {
            return Err(FuzzyError::NonFinite(value));
        }
        let degrees = self
            .iter()
            .map(|entry| {
                let degree = self.universe().interpolate(&entry.samples, value);
                trace!(category = entry.category.id(), degree, "membership");
                (entry.category, degree)
            })
            .collect();
        Ok(Fuzzified { degrees })
    }

    /// Reduce degrees to a crisp value: `Σ degree·peak / Σ degree`, or 0
    /// when no category has membership.
    pub fn defuzzify(&self, fuzzified: &Fuzzified<C>) -> f64 {
        let mut num = 0.0;
        let mut den = 0.0;
        for entry in self.iter() {
            let degree = fuzzified.degree(entry.category);
            num += degree * entry.peak;
            den += degree;
        }
        if den == 0.0 {
            0.0
        } else {
            num / den
        }
    }

    /// Fuzzify `value` and immediately defuzzify it.
    pub fn fuzzify_and_defuzzify(&self, value: f64) -> FuzzyResult<f64> {
        let fuzzified = self.fuzzify(value)?;
        Ok(self.defuzzify(&fuzzified))
    }
}
