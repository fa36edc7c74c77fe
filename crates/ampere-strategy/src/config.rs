//! Strategy configuration loading.
//!
//! Hosts tune the strategy through a small YAML document; every field
//! has a stock default, so an empty document (or no
//! document at all) yields the stock strategy. Validation happens at
//! load time: a config that would divide by zero in the spawn formulas
//! is rejected before a single turn is played.

use std::path::Path;

use serde::Deserialize;

use crate::error::StrategyError;
use crate::policy::SpawnPolicy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The parsed values fail strategy validation.
    #[error(transparent)]
    Invalid(#[from] StrategyError),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Tunable parameters of the turn strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StrategyConfig {
    /// Pacing knob for the spawn threshold and endowment formulas.
    /// Must be at least 1.
    #[serde(default = "default_expansion_factor")]
    pub expansion_factor: u32,
}

impl StrategyConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if the values fail validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on malformed YAML or
    /// [`ConfigError::Invalid`] on values that fail validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parsed values against the strategy's requirements.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::ZeroExpansionFactor`] if
    /// `expansion_factor` is zero.
    pub fn validate(&self) -> Result<(), StrategyError> {
        SpawnPolicy::new(self.expansion_factor)?;
        Ok(())
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            expansion_factor: default_expansion_factor(),
        }
    }
}

const fn default_expansion_factor() -> u32 {
    SpawnPolicy::DEFAULT_EXPANSION_FACTOR
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = StrategyConfig::parse("{}").unwrap();
        assert_eq!(config, StrategyConfig::default());
        assert_eq!(config.expansion_factor, 5);
    }

    #[test]
    fn explicit_factor_parses() {
        let config = StrategyConfig::parse("expansion_factor: 7\n").unwrap();
        assert_eq!(config.expansion_factor, 7);
    }

    #[test]
    fn zero_factor_rejected_at_load() {
        let err = StrategyConfig::parse("expansion_factor: 0\n");
        assert!(matches!(
            err,
            Err(ConfigError::Invalid(StrategyError::ZeroExpansionFactor))
        ));
    }

    #[test]
    fn malformed_yaml_rejected() {
        assert!(matches!(
            StrategyConfig::parse("expansion_factor: [not a number"),
            Err(ConfigError::Yaml { .. })
        ));
    }
}
