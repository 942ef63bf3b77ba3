use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiskError;
use crate::labels::Locale;

/// What to do with a measurement outside its variable's universe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfDomainPolicy {
    /// Use the membership degrees at the nearest universe boundary
    #[default]
    Clamp,
    /// Fail with [`RiskError::OutOfDomain`]
    Reject,
}

impl fmt::Display for OutOfDomainPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfDomainPolicy::Clamp => f.write_str("clamp"),
            OutOfDomainPolicy::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for OutOfDomainPolicy {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(OutOfDomainPolicy::Clamp),
            "reject" => Ok(OutOfDomainPolicy::Reject),
            other => Err(RiskError::InvalidConfig(format!(
                "unknown out-of-domain policy '{}'",
                other
            ))),
        }
    }
}

/// Configuration for a [`RiskAssessor`](crate::RiskAssessor).
///
/// Only presentation and input-handling choices are configurable; the
/// universes, breakpoints and harness penalty are calibration constants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessorConfig {
    /// Handling of measurements outside a variable's universe
    pub out_of_domain: OutOfDomainPolicy,
    /// Language of category labels in results
    pub locale: Locale,
}

impl AssessorConfig {
    /// Reject out-of-domain measurements instead of clamping them.
    pub fn strict() -> Self {
        Self {
            out_of_domain: OutOfDomainPolicy::Reject,
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
