//! SurrealDB Client
//!
//! A thin wrapper around the SurrealDB Rust SDK that owns the process-wide
//! connection and turns SDK errors into [`DbError`].
//!
//! ## Supported Backends
//!
//! - **Memory (Mem)**: In-memory storage for development and testing
//! - **File (RocksDB)**: Persistent storage, behind the `rocksdb` feature
//!
//! ## Usage
//!
//! ```no_run
//! use quill_surrealdb::SurrealClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SurrealClient::new_memory().await?;
//!
//!     let rows: Vec<serde_json::Value> = client
//!         .query("SELECT * FROM note WHERE important = $flag", &[("flag", json!(true))])
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::types::{DbError, DbResult, SurrealDbConfig};

/// SurrealDB client wrapping the official Rust SDK
///
/// Uses Arc internally so cloning is cheap and never opens a second
/// connection, which RocksDB would refuse with a lock error.
#[derive(Clone)]
pub struct SurrealClient {
    inner: std::sync::Arc<SurrealClientInner>,
}

struct SurrealClientInner {
    db: Surreal<Db>,
    config: SurrealDbConfig,
}

impl std::fmt::Debug for SurrealClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurrealClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

impl SurrealClient {
    /// Connect using the given configuration
    ///
    /// Opens an in-memory or file-based database depending on `config.path`,
    /// then selects the configured namespace and database. The whole sequence
    /// is bounded by `config.timeout_seconds` when set.
    pub async fn new(config: SurrealDbConfig) -> DbResult<Self> {
        match config.timeout_seconds {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), Self::connect(config))
                .await
                .map_err(|_| {
                    DbError::Timeout(format!("Database connection timed out after {secs}s"))
                })?,
            None => Self::connect(config).await,
        }
    }

    async fn connect(config: SurrealDbConfig) -> DbResult<Self> {
        use surrealdb::engine::local::Mem;

        let db = if config.is_memory() {
            Surreal::new::<Mem>(()).await.map_err(|e| {
                DbError::Connection(format!("Failed to create in-memory database: {}", e))
            })?
        } else {
            open_file(&config.path).await?
        };

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| {
                DbError::Connection(format!(
                    "Failed to use namespace '{}' and database '{}': {}",
                    config.namespace, config.database, e
                ))
            })?;

        tracing::info!(
            path = %config.path,
            namespace = %config.namespace,
            database = %config.database,
            "Connected to SurrealDB"
        );

        Ok(Self {
            inner: std::sync::Arc::new(SurrealClientInner { db, config }),
        })
    }

    /// Create an in-memory client with the default namespace and database
    pub async fn new_memory() -> DbResult<Self> {
        Self::new(SurrealDbConfig::default()).await
    }

    /// Create an isolated in-memory client
    ///
    /// Each call gets a unique namespace and database, so tests running in
    /// parallel never observe each other's records.
    pub async fn new_isolated_memory() -> DbResult<Self> {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let config = SurrealDbConfig {
            namespace: format!("test_{suffix}"),
            database: format!("db_{suffix}"),
            ..SurrealDbConfig::default()
        };
        Self::new(config).await
    }

    /// Create a file-based client using RocksDB
    ///
    /// Requires the `rocksdb` feature.
    pub async fn new_file(path: &str) -> DbResult<Self> {
        let config = SurrealDbConfig {
            path: path.to_string(),
            ..SurrealDbConfig::default()
        };
        Self::new(config).await
    }

    /// Execute a SurrealQL statement and deserialize its first result set
    ///
    /// Parameters are bound by name, e.g. `("id", json!("abc"))` for `$id`.
    pub async fn query<T>(&self, sql: &str, params: &[(&str, Value)]) -> DbResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut response = self.run(sql, params).await?;

        response
            .take(0)
            .map_err(|e| DbError::Serialization(format!("Failed to extract query results: {}", e)))
    }

    /// Execute a SurrealQL statement, discarding any results
    pub async fn execute(&self, sql: &str, params: &[(&str, Value)]) -> DbResult<()> {
        self.run(sql, params).await.map(|_| ())
    }

    async fn run(&self, sql: &str, params: &[(&str, Value)]) -> DbResult<surrealdb::Response> {
        let mut query = self.inner.db.query(sql);
        for (key, value) in params {
            query = query.bind((key.to_string(), value.clone()));
        }

        let response = query
            .await
            .map_err(|e| DbError::Query(format!("Query execution failed: {}", e)))?;

        response
            .check()
            .map_err(|e| DbError::Query(format!("Query returned error: {}", e)))
    }

    /// Get the client configuration
    pub fn config(&self) -> &SurrealDbConfig {
        &self.inner.config
    }
}

#[cfg(feature = "rocksdb")]
async fn open_file(path: &str) -> DbResult<Surreal<Db>> {
    use surrealdb::engine::local::RocksDb;

    Surreal::new::<RocksDb>(path).await.map_err(|e| {
        DbError::Connection(format!(
            "Failed to create file database at {}: {}",
            path, e
        ))
    })
}

#[cfg(not(feature = "rocksdb"))]
async fn open_file(path: &str) -> DbResult<Surreal<Db>> {
    Err(DbError::Connection(format!(
        "Cannot open {path}: file-backed storage requires the `rocksdb` feature"
    )))
}
