//! Output side of the model: risk levels over the `[0, 1]` risk universe.

use std::fmt;

use fallguard_fuzzy::{Category, CategorySet, FuzzyResult, Fuzzified, MembershipShape, Universe};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::labels::{LabelledCategory, Locale};
use crate::variables::{describe, CategoryInfo};

/// Linguistic risk level.
///
/// Ordered from lowest to highest; `VeryLow` is also the fallback when a
/// score belongs to no level at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Category for RiskLevel {
    const ALL: &'static [Self] = &[
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    fn id(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very_low",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            RiskLevel::VeryLow => MembershipShape::triangular(0.0, 0.1, 0.25),
            RiskLevel::Low => MembershipShape::triangular(0.15, 0.3, 0.45),
            RiskLevel::Medium => MembershipShape::triangular(0.35, 0.5, 0.65),
            RiskLevel::High => MembershipShape::triangular(0.55, 0.7, 0.85),
            // Held at full membership on the universe ceiling, where the
            // harness penalty caps saturated scores.
            RiskLevel::VeryHigh => MembershipShape::trapezoidal(0.75, 0.9, 1.0, 1.0),
        }
    }
}

impl LabelledCategory for RiskLevel {
    const SCOPE: &'static str = "risk";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        RISK.as_ref().map_err(|e| e.clone().into())
    }
}

impl RiskLevel {
    /// Describe every risk level.
    pub fn categories(locale: Locale) -> Result<Vec<CategoryInfo>> {
        describe::<RiskLevel>(locale)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}

/// Bounds and resolution of the risk universe
pub const RISK_UNIVERSE: (f64, f64, f64) = (0.0, 1.0, 0.01);

fn build_risk_set() -> FuzzyResult<CategorySet<RiskLevel>> {
    let (min, max, step) = RISK_UNIVERSE;
    CategorySet::new(Universe::new(min, max, step)?)
}

lazy_static! {
    static ref RISK: FuzzyResult<CategorySet<RiskLevel>> = build_risk_set();
}

/// A risk score mapped onto the risk levels.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    /// Peak-weighted score over the risk levels, unrounded
    pub score: f64,
    /// Strongest level, first-declared on ties, `VeryLow` when degenerate
    pub level: RiskLevel,
    pub memberships: Fuzzified<RiskLevel>,
}

/// Classify an aggregated (and possibly penalised) risk score.
pub fn classify(risk_score: f64) -> Result<Classification> {
    let set = RiskLevel::category_set()?;
    let memberships = set.fuzzify(risk_score)?;
    let score = set.defuzzify(&memberships);

    if memberships.is_degenerate() {
        debug!(
            risk_score,
            "score has no membership in any risk level, defaulting to {}",
            RiskLevel::ALL[0].id()
        );
    }
    let level = memberships.dominant_or_first();

    Ok(Classification {
        score,
        level,
        memberships,
    })
}
