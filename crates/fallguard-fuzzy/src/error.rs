use thiserror::Error;

/// Errors from the fuzzy primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    #[error("invalid universe: start {start}, end {end}, step {step}")]
    InvalidUniverse { start: f64, end: f64, step: f64 },

    #[error("invalid normalization range: min {min}, max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("value {value} lies outside the universe [{min}, {max}]")]
    OutsideUniverse { value: f64, min: f64, max: f64 },

    #[error("value is not finite: {0}")]
    NonFinite(f64),

    #[error("category set has no categories")]
    EmptyCategorySet,
}

/// Result type for fuzzy operations
pub type FuzzyResult<T> = Result<T, FuzzyError>;
