//! Type definitions for the SurrealDB backend.

use quill_config::{StorageConfig, MEMORY_PATH};
use quill_core::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`SurrealClient`](crate::SurrealClient)
#[derive(Error, Debug, Clone)]
pub enum DbError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeout: {0}")]
    Timeout(String),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for StorageError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Connection(msg) | DbError::Timeout(msg) => StorageError::Unavailable(msg),
            DbError::Query(msg) => StorageError::Query(msg),
            DbError::Serialization(msg) => StorageError::Serialization(msg),
        }
    }
}

/// Configuration for the SurrealDB backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrealDbConfig {
    pub namespace: String,
    pub database: String,
    pub path: String,
    pub timeout_seconds: Option<u64>,
}

impl SurrealDbConfig {
    pub fn is_memory(&self) -> bool {
        self.path.is_empty() || self.path == MEMORY_PATH
    }
}

impl Default for SurrealDbConfig {
    fn default() -> Self {
        Self {
            namespace: "quill".to_string(),
            database: "notes".to_string(),
            path: MEMORY_PATH.to_string(),
            timeout_seconds: Some(30),
        }
    }
}

impl From<&StorageConfig> for SurrealDbConfig {
    fn from(config: &StorageConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            database: config.database.clone(),
            path: config.path.clone(),
            ..Self::default()
        }
    }
}
