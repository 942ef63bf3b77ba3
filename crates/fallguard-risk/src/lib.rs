//! # fallguard-risk
//!
//! Fuzzy-logic risk model for a person working at height.
//!
//! Six environmental and personal measurements are each fuzzified over
//! their own linguistic categories, reduced to a crisp value, normalized,
//! combined by a scaled Euclidean norm, penalised when no harness is worn,
//! and finally mapped onto five risk levels.
//!
//! ## Components
//!
//! - **InputVariable**: wind, temperature, age, humidity, rainfall, health,
//!   with their universes and categories
//! - **RiskLevel / classify**: the output sets over `[0, 1]`
//! - **euclidean_aggregate / apply_harness_penalty**: combination steps
//! - **RiskAssessor**: the end-to-end pipeline under an [`AssessorConfig`]
//! - **Locale**: English and Turkish labels for every category
//! - **Scenario**: named example situations
//!
//! ```
//! let result = fallguard_risk::compute_risk_score(70.0, 12.0, 40.0, 70.0, 50.0, 1.0, false)?;
//! assert_eq!(result.label, "High");
//! # Ok::<(), fallguard_risk::RiskError>(())
//! ```

#![deny(unsafe_code)]

pub mod aggregate;
pub mod assessment;
pub mod classifier;
pub mod config;
pub mod error;
pub mod labels;
pub mod penalty;
pub mod scenario;
pub mod variables;

pub use aggregate::euclidean_aggregate;
pub use assessment::{
    compute_risk_score, Memberships, RiskAssessment, RiskAssessor, RiskInputs, RiskResult,
    VariableContribution,
};
pub use classifier::{classify, Classification, RiskLevel};
pub use config::{AssessorConfig, OutOfDomainPolicy};
pub use error::{Result, RiskError};
pub use labels::{LabelledCategory, Locale};
pub use penalty::{apply_harness_penalty, HARNESS_PENALTY_MULTIPLIER, PENALTY_CAP};
pub use scenario::Scenario;
pub use variables::{CategoryInfo, InputVariable, Reading};
