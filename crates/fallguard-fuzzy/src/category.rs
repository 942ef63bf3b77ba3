use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::MembershipShape;
use crate::universe::Universe;

/// A closed set of linguistic categories for one variable.
///
/// `ALL` is the declaration order. It drives iteration everywhere and
/// breaks ties: when two categories are equally strong, the one declared
/// first wins.
pub trait Category: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every category, in declaration order
    const ALL: &'static [Self];

    /// Stable, locale-independent identifier (snake_case)
    fn id(&self) -> &'static str;

    /// Membership function of this category
    fn shape(&self) -> MembershipShape;
}

/// One category sampled over its universe.
#[derive(Clone, Debug)]
pub struct SampledCategory<C: Category> {
    pub category: C,
    pub shape: MembershipShape,
    pub samples: Vec<f64>,
    /// Universe point of the first maximal sample
    pub peak: f64,
}

impl<C: Category> SampledCategory<C> {
    fn new(category: C, universe: &Universe) -> Self {
        let shape = category.shape();
        let samples = shape.sample(universe);
        let peak = universe.points()[first_argmax(&samples)];
        Self {
            category,
            shape,
            samples,
            peak,
        }
    }

    /// Highest sampled degree
    pub fn height(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }
}

/// Index of the first maximum; 0 for an all-zero (or empty) slice.
fn first_argmax(samples: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in samples.iter().enumerate() {
        if v > samples[best] {
            best = i;
        }
    }
    best
}

/// All categories of a variable, sampled over one shared universe.
#[derive(Clone, Debug)]
pub struct CategorySet<C: Category> {
    universe: Universe,
    entries: Vec<SampledCategory<C>>,
}

impl<C: Category> CategorySet<C> {
    /// Sample every category in `C::ALL` over `universe`.
    pub fn new(universe: Universe) -> FuzzyResult<Self> {
        if C::ALL.is_empty() {
            return Err(FuzzyError::EmptyCategorySet);
        }
        let entries = C::ALL
            .iter()
            .map(|&category| SampledCategory::new(category, &universe))
            .collect();
        Ok(Self { universe, entries })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Sampled categories in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &SampledCategory<C>> {
        self.entries.iter()
    }

    pub fn get(&self, category: C) -> Option<&SampledCategory<C>> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Peak location of `category`
    pub fn peak(&self, category: C) -> Option<f64> {
        self.get(category).map(|e| e.peak)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
