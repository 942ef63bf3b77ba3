//! Named example situations.

use serde::Serialize;

use crate::assessment::RiskInputs;
use crate::error::{Result, RiskError};

/// A named, ready-made set of measurements.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    pub id: u8,
    pub name: &'static str,
    pub inputs: RiskInputs,
}

impl Scenario {
    /// Every preset, ordered by id.
    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario {
                id: 1,
                name: "Young worker, mild outdoor conditions",
                inputs: RiskInputs::new(10.0, 15.0, 25.0, 60.0, 0.0, 0.5, true),
            },
            Scenario {
                id: 2,
                name: "Experienced worker, hot day",
                inputs: RiskInputs::new(76.0, 25.0, 45.0, 25.0, 0.0, 1.0, true),
            },
            Scenario {
                id: 3,
                name: "Elderly worker, humid weather",
                inputs: RiskInputs::new(30.0, 20.0, 60.0, 85.0, 10.0, 1.5, true),
            },
            Scenario {
                id: 4,
                name: "Storm & heavy rain, no harness",
                inputs: RiskInputs::new(70.0, 12.0, 40.0, 70.0, 50.0, 1.0, false),
            },
            Scenario {
                id: 5,
                name: "Elderly unhealthy worker, extreme heat",
                inputs: RiskInputs::new(5.0, 42.0, 68.0, 50.0, 0.0, 4.0, true),
            },
        ]
    }

    pub fn by_id(id: u8) -> Result<Scenario> {
        Self::all()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(RiskError::UnknownScenario(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskAssessor;

    #[test]
    fn ids_are_sequential() {
        let ids: Vec<u8> = Scenario::all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn lookup() {
        assert_eq!(Scenario::by_id(4).unwrap().name, "Storm & heavy rain, no harness");
        assert_eq!(Scenario::by_id(9), Err(RiskError::UnknownScenario(9)));
    }

    #[test]
    fn preset_results() {
        let assessor = RiskAssessor::default();
        let expected = [
            (1, "Low", 0.3),
            (2, "Medium", 0.5),
            (3, "Medium", 0.415),
            (4, "High", 0.712),
            (5, "Medium", 0.5),
        ];
        for (id, label, score) in expected {
            let result = assessor.assess(&Scenario::by_id(id).unwrap().inputs).unwrap();
            assert_eq!(result.label, label, "scenario {}", id);
            assert!((result.score - score).abs() < 1e-9, "scenario {}", id);
        }
    }

    #[test]
    fn presets_stay_in_domain() {
        let assessor = RiskAssessor::new(crate::config::AssessorConfig::strict());
        for scenario in Scenario::all() {
            assert!(assessor.assess(&scenario.inputs).is_ok());
        }
    }
}
