//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use fallguard_risk::{AssessorConfig, Locale, OutOfDomainPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Label language
    pub locale: Option<Locale>,

    /// Handling of measurements outside their domain
    pub out_of_domain: Option<OutOfDomainPolicy>,

    /// Default output format
    pub output: Option<OutputFormat>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            tracing::debug!(path = %config_path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("fallguard").join("config.toml"))
    }

    /// Build the assessor configuration, letting command-line flags win
    /// over the file.
    pub fn assessor_config(&self, locale: Option<Locale>, strict: bool) -> AssessorConfig {
        let out_of_domain = if strict {
            OutOfDomainPolicy::Reject
        } else {
            self.out_of_domain.unwrap_or_default()
        };
        AssessorConfig {
            out_of_domain,
            locale: locale.or(self.locale).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.locale.is_none());
        assert!(config.out_of_domain.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        // Should return default config when file doesn't exist
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            locale = "tr"
            out_of_domain = "reject"
            output = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.locale, Some(Locale::Turkish));
        assert_eq!(config.out_of_domain, Some(OutOfDomainPolicy::Reject));
        assert_eq!(config.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_flags_override_file() {
        let config = CliConfig {
            locale: Some(Locale::Turkish),
            out_of_domain: Some(OutOfDomainPolicy::Clamp),
            output: None,
        };
        let assessor = config.assessor_config(Some(Locale::English), true);
        assert_eq!(assessor.locale, Locale::English);
        assert_eq!(assessor.out_of_domain, OutOfDomainPolicy::Reject);

        let assessor = config.assessor_config(None, false);
        assert_eq!(assessor.locale, Locale::Turkish);
        assert_eq!(assessor.out_of_domain, OutOfDomainPolicy::Clamp);
    }
}
