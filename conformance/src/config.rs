//! Validator and harness configuration
//!
//! Configuration documents are plain YAML (or JSON, which YAML accepts):
//!
//! ```yaml
//! validator:
//!   min_timestamp: 1230940800000
//! listing_checks: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConformanceError, ConformanceResult};
use crate::order::Timestamp;

/// 03 Jan 2009, first block time of the reference chain
pub const FIRST_BLOCK_TIMESTAMP: Timestamp = 1_230_940_800_000;

/// Order validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Order timestamps must be strictly greater than this
    #[serde(default = "default_min_timestamp")]
    pub min_timestamp: Timestamp,
}

impl ValidatorConfig {
    /// Parse from a YAML document
    pub fn from_yaml(yaml: &str) -> ConformanceResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConformanceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> ConformanceResult<()> {
        if self.min_timestamp < 0 {
            return Err(ConformanceError::ConfigError(format!(
                "min_timestamp must not be negative, got {}",
                self.min_timestamp
            )));
        }
        Ok(())
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_timestamp: default_min_timestamp(),
        }
    }
}

/// Conformance harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceConfig {
    /// Settings for the order validator
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Require open/closed listings to only contain orders of the matching status
    #[serde(default = "default_listing_checks")]
    pub listing_checks: bool,
}

impl ConformanceConfig {
    /// Parse from a YAML document
    pub fn from_yaml(yaml: &str) -> ConformanceResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validator.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConformanceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            validator: ValidatorConfig::default(),
            listing_checks: default_listing_checks(),
        }
    }
}

fn default_min_timestamp() -> Timestamp {
    FIRST_BLOCK_TIMESTAMP
}

fn default_listing_checks() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConformanceConfig::default();
        assert_eq!(config.validator.min_timestamp, 1_230_940_800_000);
        assert!(config.listing_checks);
    }

    #[test]
    fn test_yaml_deserialization() {
        let yaml = r#"
validator:
  min_timestamp: 1500000000000
listing_checks: false
"#;

        let config = ConformanceConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.validator.min_timestamp, 1_500_000_000_000);
        assert!(!config.listing_checks);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ConformanceConfig::from_yaml("listing_checks: false\n").unwrap();
        assert_eq!(config.validator, ValidatorConfig::default());

        let validator = ValidatorConfig::from_yaml("{}").unwrap();
        assert_eq!(validator.min_timestamp, FIRST_BLOCK_TIMESTAMP);
    }

    #[test]
    fn test_negative_floor_rejected() {
        let result = ValidatorConfig::from_yaml("min_timestamp: -5\n");
        assert!(matches!(result, Err(ConformanceError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = ConformanceConfig::from_yaml("validator: [1, 2");
        assert!(matches!(result, Err(ConformanceError::YamlError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ValidatorConfig::from_file("/nonexistent/conformance.yaml");
        assert!(matches!(result, Err(ConformanceError::IoError(_))));
    }
}
