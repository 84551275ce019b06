//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing so that an obviously broken
//! file fails loudly instead of silently falling back to defaults.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// remote = "upstream"
/// open = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Preferred remote name; overridden by `--remote`
    pub remote: Option<String>,

    /// Whether to open the browser by default (true when unset);
    /// `--print` always wins
    pub open: Option<bool>,
}

impl Config {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
