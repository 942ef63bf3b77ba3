//! Property tests for the end-to-end risk pipeline.

use fallguard_fuzzy::Category;
use fallguard_risk::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Generate measurements inside every variable's domain.
fn arb_inputs() -> impl Strategy<Value = RiskInputs> {
    (
        0.0f64..=80.0,
        -40.0f64..=60.0,
        13.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=150.0,
        0.0f64..=5.0,
        any::<bool>(),
    )
        .prop_map(|(wind, temperature, age, humidity, rainfall, health, harness)| {
            RiskInputs::new(wind, temperature, age, humidity, rainfall, health, harness)
        })
}

/// Pick one input variable.
fn arb_variable() -> impl Strategy<Value = InputVariable> {
    prop::sample::select(InputVariable::ALL.to_vec())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Score and every membership degree stay in [0, 1].
    #[test]
    fn result_is_bounded(inputs in arb_inputs()) {
        let result = RiskAssessor::default().assess(&inputs).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert_eq!(result.memberships.len(), 5);
        for (_, degree) in result.memberships.iter() {
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }

    /// The label is always one of the five risk levels.
    #[test]
    fn label_is_a_risk_level(inputs in arb_inputs()) {
        let result = RiskAssessor::default().assess(&inputs).unwrap();
        let labels: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.label(Locale::English)).collect();
        prop_assert!(labels.contains(&result.label.as_str()));
        prop_assert!(result.memberships.get(&result.label).is_some());
    }

    /// Identical inputs give identical results.
    #[test]
    fn assessment_is_deterministic(inputs in arb_inputs()) {
        let assessor = RiskAssessor::default();
        prop_assert_eq!(assessor.assess(&inputs).unwrap(), assessor.assess(&inputs).unwrap());
    }

    /// Normalized contributions stay in [0, 1] for in-domain inputs.
    #[test]
    fn contributions_are_normalized(inputs in arb_inputs()) {
        let detail = RiskAssessor::default().assess_detailed(&inputs).unwrap();
        prop_assert_eq!(detail.contributions.len(), 6);
        for c in &detail.contributions {
            prop_assert!((0.0..=1.0).contains(&c.normalized), "{:?}", c);
        }
        prop_assert!((0.0..=1.0).contains(&detail.aggregate_score));
    }

    /// Removing the harness never lowers the risk.
    #[test]
    fn harness_removal_never_lowers_risk(inputs in arb_inputs()) {
        let assessor = RiskAssessor::default();
        let mut with = inputs.clone();
        with.harness_equipped = true;
        let mut without = inputs;
        without.harness_equipped = false;

        let with = assessor.assess_detailed(&with).unwrap();
        let without = assessor.assess_detailed(&without).unwrap();
        prop_assert!(without.adjusted_score >= with.adjusted_score);
        prop_assert!(without.result.score >= with.result.score);
        prop_assert!(without.level >= with.level);
    }

    /// Without a harness the adjusted score is the capped 1.45x aggregate.
    #[test]
    fn penalty_matches_formula(score in 0.0f64..=1.0) {
        prop_assert_eq!(apply_harness_penalty(score, true), score);
        prop_assert_eq!(apply_harness_penalty(score, false), (score * 1.45).min(1.0));
    }

    /// Raising any component never lowers the aggregate.
    #[test]
    fn aggregate_is_monotone(
        values in prop::collection::vec(0.0f64..=1.0, 6),
        index in 0usize..6,
        bump in 0.0f64..=1.0,
    ) {
        let base = euclidean_aggregate(&values);
        let mut raised = values.clone();
        raised[index] = (raised[index] + bump).min(1.0);
        prop_assert!(euclidean_aggregate(&raised) >= base);
        prop_assert!(base <= 1.0 + 1e-12);
    }

    /// Under the clamp policy, values past a bound behave like the bound.
    #[test]
    fn clamp_matches_boundary(
        inputs in arb_inputs(),
        variable in arb_variable(),
        overshoot in 0.5f64..500.0,
        above in any::<bool>(),
    ) {
        let (min, max) = variable.bounds();
        let mut outside = inputs.clone();
        let mut boundary = inputs;
        if above {
            outside.set_value(variable, max + overshoot);
            boundary.set_value(variable, max);
        } else {
            outside.set_value(variable, min - overshoot);
            boundary.set_value(variable, min);
        }

        let assessor = RiskAssessor::default();
        prop_assert_eq!(assessor.assess(&outside).unwrap(), assessor.assess(&boundary).unwrap());
    }

    /// Under the reject policy, values past a bound are refused.
    #[test]
    fn reject_refuses_out_of_domain(
        inputs in arb_inputs(),
        variable in arb_variable(),
        overshoot in 0.5f64..500.0,
    ) {
        let (_, max) = variable.bounds();
        let mut outside = inputs;
        outside.set_value(variable, max + overshoot);

        let err = RiskAssessor::new(AssessorConfig::strict()).assess(&outside).unwrap_err();
        let is_out_of_domain = matches!(err, RiskError::OutOfDomain { variable: v, .. } if v == variable);
        prop_assert!(is_out_of_domain);
    }
}
