//! # Quill Configuration
//!
//! Type-safe configuration for the Quill notes service.
//!
//! Values are layered, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (explicit path, else `<config_dir>/quill/config.toml` if present)
//! 3. `QUILL_*` environment variables
//! 4. Command-line overrides applied by the binary
//!
//! ```rust,no_run
//! use quill_config::QuillConfig;
//!
//! let config = QuillConfig::load(None).unwrap();
//! println!("listening on {}", config.server.socket_addr().unwrap());
//! ```

#![warn(clippy::all)]

mod components;
mod loader;

pub use components::*;
pub use loader::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl QuillConfig {
    /// Display the current configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
