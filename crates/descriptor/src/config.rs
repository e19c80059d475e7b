use crate::description::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which ignore decision a deployment uses. The two are never combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnorePolicy {
    /// Decide from the accessibility node the host computes for each view.
    #[default]
    NodeInfo,
    /// Decide from view flags alone, for hosts without node information.
    ViewFlags,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorConfig {
    pub ignore_policy: IgnorePolicy,
    /// Joins child descriptions of containers.
    pub description_separator: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            ignore_policy: IgnorePolicy::default(),
            description_separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl DescriptorConfig {
    pub fn with_policy(mut self, policy: IgnorePolicy) -> Self {
        self.ignore_policy = policy;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.description_separator = separator.into();
        self
    }

    /// Loads a configuration object; named fields only, missing fields take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Fails when the document is not a JSON object, carries unknown fields or
    /// values, or sets an empty separator.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let config: DescriptorConfig = serde_json::from_value(value)?;
        config.validate()?;
        tracing::debug!(policy = ?config.ignore_policy, "loaded descriptor configuration");
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySeparator`] for an empty description separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.description_separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid descriptor configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("descriptor configuration must be a JSON object")]
    NotAnObject,
    #[error("description separator must not be empty")]
    EmptySeparator,
}
