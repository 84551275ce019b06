//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$REPOLINK_CONFIG` if set
//! 2. `<user config dir>/repolink/config.toml`
//!    (`~/.config/repolink/config.toml` on Linux)
//!
//! A missing file yields the default configuration. CLI flags override
//! config values; that precedence is applied in the CLI layer, not here.
//!
//! # Example
//!
//! ```no_run
//! use repolink::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! if let Some(remote) = &config.remote {
//!     println!("preferred remote: {remote}");
//! }
//! ```

pub mod schema;

pub use schema::Config;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// A missing file is not an error; unreadable or invalid TOML is.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("REPOLINK_CONFIG") {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join("repolink").join("config.toml"))
}
