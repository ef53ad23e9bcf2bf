//! # Quill SurrealDB Backend
//!
//! Persists notes in SurrealDB. The rest of the service only sees the
//! [`NoteStore`](quill_core::NoteStore) trait; this crate supplies the
//! implementation and the connection it runs over.
//!
//! ```rust,no_run
//! use quill_core::{NewNote, NoteStore};
//! use quill_surrealdb::{SurrealClient, SurrealNoteStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SurrealNoteStore::new(SurrealClient::new_memory().await?);
//!     store.create(NewNote::new("HTML is easy")).await?;
//!     Ok(())
//! }
//! ```

pub mod note_store;
pub mod surreal_client;
pub mod types;

pub use note_store::SurrealNoteStore;
pub use surreal_client::SurrealClient;
pub use types::{DbError, DbResult, SurrealDbConfig};

use quill_config::StorageConfig;
use quill_core::StorageResult;

/// Open the note store described by the storage configuration
pub async fn open_note_store(config: &StorageConfig) -> StorageResult<SurrealNoteStore> {
    let client = SurrealClient::new(SurrealDbConfig::from(config)).await?;
    Ok(SurrealNoteStore::new(client))
}
