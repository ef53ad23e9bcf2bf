//! Layered configuration loading

use std::path::{Path, PathBuf};

use crate::{ConfigError, QuillConfig};

pub const ENV_HOST: &str = "QUILL_HOST";
pub const ENV_PORT: &str = "QUILL_PORT";
pub const ENV_DB_PATH: &str = "QUILL_DB_PATH";
pub const ENV_DB_NAMESPACE: &str = "QUILL_DB_NAMESPACE";
pub const ENV_DB_DATABASE: &str = "QUILL_DB_DATABASE";
pub const ENV_LOG_LEVEL: &str = "QUILL_LOG_LEVEL";

/// Set to skip reading the user's config file
pub const ENV_TEST_MODE: &str = "QUILL_TEST_MODE";

impl QuillConfig {
    /// Load configuration from file (if any) and environment
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file_or_default(config_file)?;
        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Get default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quill").join("config.toml"))
    }

    /// The config file `load` would read, if any
    ///
    /// An explicit path is always returned; otherwise the default location is
    /// used when it exists and test mode is off.
    pub fn resolve_path(config_file: Option<PathBuf>) -> Option<PathBuf> {
        if config_file.is_some() {
            return config_file;
        }
        if std::env::var(ENV_TEST_MODE).is_ok() {
            return None;
        }
        Self::default_config_path().filter(|p| p.exists())
    }

    fn from_file_or_default(config_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        match Self::resolve_path(config_file) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `QUILL_*` overrides using the given variable lookup
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{ENV_PORT} is not a port: {port}")))?;
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.path = path;
        }
        if let Some(namespace) = lookup(ENV_DB_NAMESPACE) {
            self.storage.namespace = namespace;
        }
        if let Some(database) = lookup(ENV_DB_DATABASE) {
            self.storage.database = database;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        Ok(())
    }
}
