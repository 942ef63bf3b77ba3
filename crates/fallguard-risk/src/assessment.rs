//! End-to-end risk assessment.
//!
//! ```text
//! six measurements ──► per-variable fuzzify/defuzzify ──► normalize
//!        ──► Euclidean aggregate ──► harness penalty ──► classify
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::aggregate::euclidean_aggregate;
use crate::classifier::{classify, RiskLevel};
use crate::config::{AssessorConfig, OutOfDomainPolicy};
use crate::error::{Result, RiskError};
use crate::labels::LabelledCategory;
use crate::penalty::apply_harness_penalty;
use crate::variables::InputVariable;

/// Decimal places kept in reported scores and degrees
pub const REPORT_DECIMALS: i32 = 3;

/// Measurements for one worker at one moment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    /// Wind speed (km/h), expected 0–80
    pub wind: f64,
    /// Air temperature (°C), expected -40–60
    pub temperature: f64,
    /// Worker age (years), expected 13–100
    pub age: f64,
    /// Relative humidity (%), expected 0–100
    pub humidity: f64,
    /// Rainfall (mm), expected 0–150
    pub rainfall: f64,
    /// Health condition, 0 (healthy) to 5 (critical)
    pub health: f64,
    /// Whether fall protection is worn
    pub harness_equipped: bool,
}

impl RiskInputs {
    pub fn new(
        wind: f64,
        temperature: f64,
        age: f64,
        humidity: f64,
        rainfall: f64,
        health: f64,
        harness_equipped: bool,
    ) -> Self {
        Self {
            wind,
            temperature,
            age,
            humidity,
            rainfall,
            health,
            harness_equipped,
        }
    }

    /// Measurement for `variable`
    pub fn value(&self, variable: InputVariable) -> f64 {
        match variable {
            InputVariable::Wind => self.wind,
            InputVariable::Temperature => self.temperature,
            InputVariable::Age => self.age,
            InputVariable::Humidity => self.humidity,
            InputVariable::Rainfall => self.rainfall,
            InputVariable::Health => self.health,
        }
    }

    pub fn set_value(&mut self, variable: InputVariable, value: f64) {
        match variable {
            InputVariable::Wind => self.wind = value,
            InputVariable::Temperature => self.temperature = value,
            InputVariable::Age => self.age = value,
            InputVariable::Humidity => self.humidity = value,
            InputVariable::Rainfall => self.rainfall = value,
            InputVariable::Health => self.health = value,
        }
    }
}

impl Default for RiskInputs {
    /// Starting values for a custom assessment.
    fn default() -> Self {
        Self::new(10.0, 20.0, 30.0, 60.0, 25.0, 3.0, false)
    }
}

/// Membership degree per risk label, in risk-level order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Memberships(Vec<(String, f64)>);

impl Memberships {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, d)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(l, d)| (l.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for Memberships {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Memberships {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, degree) in &self.0 {
            map.serialize_entry(label, degree)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Memberships {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MembershipsVisitor;

        impl<'de> Visitor<'de> for MembershipsVisitor {
            type Value = Memberships;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of risk labels to membership degrees")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, degree)) = access.next_entry::<String, f64>()? {
                    entries.push((label, degree));
                }
                Ok(Memberships(entries))
            }
        }

        deserializer.deserialize_map(MembershipsVisitor)
    }
}

/// Outcome of one risk computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Defuzzified risk score in `[0, 1]`, rounded to 3 decimals
    pub score: f64,
    /// Label of the strongest risk level
    pub label: String,
    /// Degree of the score in every risk level, rounded to 3 decimals
    pub memberships: Memberships,
}

/// How one measurement moved through the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableContribution {
    pub variable: InputVariable,
    /// Raw measurement
    pub value: f64,
    /// Peak-weighted crisp value on the variable's own scale
    pub defuzzified: f64,
    /// `defuzzified` mapped onto `[0, 1]` over the variable's universe
    pub normalized: f64,
    /// Label of the strongest category, if any
    pub dominant_category: Option<String>,
}

/// A [`RiskResult`] together with the intermediate values behind it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub result: RiskResult,
    pub level: RiskLevel,
    pub contributions: Vec<VariableContribution>,
    /// Euclidean aggregate before the harness penalty
    pub aggregate_score: f64,
    /// Aggregate after the harness penalty
    pub adjusted_score: f64,
    pub harness_penalty_applied: bool,
}

/// Runs the risk pipeline under a fixed configuration.
///
/// Holds no mutable state; one assessor can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct RiskAssessor {
    config: AssessorConfig,
}

impl RiskAssessor {
    pub fn new(config: AssessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }

    /// Score and label one set of measurements.
    pub fn assess(&self, inputs: &RiskInputs) -> Result<RiskResult> {
        Ok(self.assess_detailed(inputs)?.result)
    }

    /// Score and label one set of measurements, keeping intermediate values.
    pub fn assess_detailed(&self, inputs: &RiskInputs) -> Result<RiskAssessment> {
        let locale = self.config.locale;
        let mut contributions = Vec::with_capacity(InputVariable::ALL.len());

        for variable in InputVariable::ALL {
            let value = inputs.value(variable);
            self.check_domain(variable, value)?;

            let reading = variable.evaluate(value, locale)?;
            let normalized = variable.universe()?.normalize(reading.defuzzified)?;
            debug!(
                variable = variable.id(),
                value,
                defuzzified = reading.defuzzified,
                normalized,
                "input evaluated"
            );

            contributions.push(VariableContribution {
                variable,
                value,
                defuzzified: reading.defuzzified,
                normalized,
                dominant_category: reading.dominant.map(str::to_string),
            });
        }

        let normalized: Vec<f64> = contributions.iter().map(|c| c.normalized).collect();
        let aggregate_score = euclidean_aggregate(&normalized);
        let adjusted_score = apply_harness_penalty(aggregate_score, inputs.harness_equipped);
        debug!(
            aggregate_score,
            adjusted_score,
            harness_equipped = inputs.harness_equipped,
            "risk aggregated"
        );

        let classification = classify(adjusted_score)?;
        let memberships = classification
            .memberships
            .iter()
            .map(|(level, degree)| (level.label(locale).to_string(), round_report(degree)))
            .collect();

        let result = RiskResult {
            score: round_report(classification.score),
            label: classification.level.label(locale).to_string(),
            memberships,
        };
        debug!(score = result.score, label = %result.label, "risk classified");

        Ok(RiskAssessment {
            result,
            level: classification.level,
            contributions,
            aggregate_score,
            adjusted_score,
            harness_penalty_applied: !inputs.harness_equipped,
        })
    }

    fn check_domain(&self, variable: InputVariable, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(RiskError::NonFinite { variable, value });
        }
        if self.config.out_of_domain == OutOfDomainPolicy::Reject && !variable.contains(value) {
            let (min, max) = variable.bounds();
            return Err(RiskError::OutOfDomain {
                variable,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

fn round_report(value: f64) -> f64 {
    let factor = 10f64.powi(REPORT_DECIMALS);
    (value * factor).round() / factor
}

/// Compute the risk for one worker with the default configuration
/// (out-of-domain values clamped, English labels).
pub fn compute_risk_score(
    wind: f64,
    temperature: f64,
    age: f64,
    humidity: f64,
    rainfall: f64,
    health: f64,
    harness_equipped: bool,
) -> Result<RiskResult> {
    let inputs = RiskInputs::new(
        wind,
        temperature,
        age,
        humidity,
        rainfall,
        health,
        harness_equipped,
    );
    RiskAssessor::default().assess(&inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn worst_case_without_harness() {
        let result = compute_risk_score(80.0, 60.0, 100.0, 100.0, 150.0, 5.0, false).unwrap();
        assert_eq!(result.label, "Very High");
        assert_eq!(result.score, 0.9);
        assert_eq!(result.memberships.get("Very High"), Some(1.0));
        for label in ["Very Low", "Low", "Medium", "High"] {
            assert_eq!(result.memberships.get(label), Some(0.0));
        }
    }

    #[test]
    fn worst_case_breakdown() {
        let inputs = RiskInputs::new(80.0, 60.0, 100.0, 100.0, 150.0, 5.0, false);
        let detail = RiskAssessor::default().assess_detailed(&inputs).unwrap();
        let normalized: Vec<f64> = detail.contributions.iter().map(|c| c.normalized).collect();
        let expected = [79.0 / 80.0, 0.9, 72.0 / 87.0, 0.0, 100.0 / 150.0, 0.9];
        for (got, want) in normalized.iter().zip(expected) {
            assert!(close(*got, want, 1e-9), "{} != {}", got, want);
        }
        assert!(close(detail.aggregate_score, 0.787877, 1e-6));
        assert_eq!(detail.adjusted_score, 1.0);
        assert!(detail.harness_penalty_applied);
        assert_eq!(detail.level, RiskLevel::VeryHigh);
    }

    #[test]
    fn mild_conditions_with_harness() {
        let inputs = RiskInputs::new(0.0, 17.5, 13.0, 55.0, 0.0, 0.0, true);
        let detail = RiskAssessor::default().assess_detailed(&inputs).unwrap();
        // Mild temperature and comfortable humidity still sit mid-scale
        // after normalization, so the aggregate lands in Low, not Very Low.
        assert!(close(detail.aggregate_score, 0.323504, 1e-6));
        assert_eq!(detail.result.label, "Low");
        assert_eq!(detail.result.score, 0.3);
        assert_eq!(detail.result.memberships.get("Low"), Some(0.843));
        assert!(!detail.harness_penalty_applied);
    }

    #[test]
    fn storm_preset_is_high() {
        let result = compute_risk_score(70.0, 12.0, 40.0, 70.0, 50.0, 1.0, false).unwrap();
        assert_eq!(result.label, "High");
        assert_eq!(result.score, 0.712);
        assert_eq!(result.memberships.get("High"), Some(0.627));
        assert_eq!(result.memberships.get("Very High"), Some(0.04));
    }

    #[test]
    fn harness_never_lowers_risk() {
        let with = compute_risk_score(10.0, 20.0, 30.0, 60.0, 25.0, 3.0, true).unwrap();
        let without = compute_risk_score(10.0, 20.0, 30.0, 60.0, 25.0, 3.0, false).unwrap();
        assert_eq!(with.score, 0.412);
        assert_eq!(without.score, 0.578);
        assert!(without.score >= with.score);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let inputs = RiskInputs::default();
        let assessor = RiskAssessor::default();
        assert_eq!(
            assessor.assess(&inputs).unwrap(),
            assessor.assess(&inputs).unwrap()
        );
    }

    #[test]
    fn turkish_labels() {
        let assessor = RiskAssessor::new(AssessorConfig::default().with_locale(Locale::Turkish));
        let inputs = RiskInputs::new(80.0, 60.0, 100.0, 100.0, 150.0, 5.0, false);
        let result = assessor.assess(&inputs).unwrap();
        assert_eq!(result.label, "Çok Yüksek");
        assert_eq!(result.memberships.get("Çok Yüksek"), Some(1.0));
    }

    #[test]
    fn clamp_policy_accepts_out_of_domain() {
        let clamped = compute_risk_score(120.0, 60.0, 100.0, 100.0, 150.0, 5.0, false).unwrap();
        let boundary = compute_risk_score(80.0, 60.0, 100.0, 100.0, 150.0, 5.0, false).unwrap();
        assert_eq!(clamped, boundary);
    }

    #[test]
    fn reject_policy_refuses_out_of_domain() {
        let assessor = RiskAssessor::new(AssessorConfig::strict());
        let mut inputs = RiskInputs::default();
        inputs.age = 10.0;
        let err = assessor.assess(&inputs).unwrap_err();
        assert_eq!(
            err,
            RiskError::OutOfDomain {
                variable: InputVariable::Age,
                value: 10.0,
                min: 13.0,
                max: 100.0,
            }
        );
    }

    #[test]
    fn non_finite_is_always_rejected() {
        let err = compute_risk_score(f64::NAN, 20.0, 30.0, 60.0, 25.0, 3.0, true).unwrap_err();
        assert!(matches!(
            err,
            RiskError::NonFinite {
                variable: InputVariable::Wind,
                ..
            }
        ));
    }

    #[test]
    fn memberships_serialize_in_level_order() {
        let result = compute_risk_score(80.0, 60.0, 100.0, 100.0, 150.0, 5.0, false).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let very_low = json.find("Very Low").unwrap();
        let very_high = json.find("\"Very High\":").unwrap();
        assert!(very_low < very_high);

        let restored: RiskResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn inputs_accessors() {
        let mut inputs = RiskInputs::default();
        assert_eq!(inputs.value(InputVariable::Rainfall), 25.0);
        inputs.set_value(InputVariable::Rainfall, 40.0);
        assert_eq!(inputs.rainfall, 40.0);
    }

    #[test]
    fn rounding_keeps_three_decimals() {
        assert_eq!(round_report(0.12345), 0.123);
        assert_eq!(round_report(0.9999), 1.0);
    }
}
