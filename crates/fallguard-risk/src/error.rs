use fallguard_fuzzy::FuzzyError;
use thiserror::Error;

use crate::variables::InputVariable;

/// Errors from the risk model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("fuzzy model error: {0}")]
    Fuzzy(#[from] FuzzyError),

    #[error("{variable} value {value} is outside its domain [{min}, {max}]")]
    OutOfDomain {
        variable: InputVariable,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{variable} value is not a finite number: {value}")]
    NonFinite { variable: InputVariable, value: f64 },

    #[error("unknown scenario: {0}")]
    UnknownScenario(u8),

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for risk model operations
pub type Result<T> = std::result::Result<T, RiskError>;
