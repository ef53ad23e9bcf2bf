//! Storage component configuration
//!
//! Where notes live. `":memory:"` (or an empty path) selects SurrealDB's
//! in-memory engine; anything else is treated as an on-disk database directory.

use serde::{Deserialize, Serialize};

pub const MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub namespace: String,
    pub database: String,
}

impl StorageConfig {
    pub fn is_memory(&self) -> bool {
        self.path.is_empty() || self.path == MEMORY_PATH
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: MEMORY_PATH.to_string(),
            namespace: "quill".to_string(),
            database: "notes".to_string(),
        }
    }
}
