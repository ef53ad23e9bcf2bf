//! NoteStore Storage Abstraction
//!
//! The persistence seam between the HTTP layer and whatever database backs it.
//! The API layer only ever talks to `dyn NoteStore`, so the backend is injected
//! at startup and swapped for an in-memory store in tests.
//!
//! # Example
//!
//! ```ignore
//! use quill_core::{NewNote, NoteStore};
//!
//! async fn example(store: &dyn NoteStore) -> StorageResult<()> {
//!     let note = store.create(NewNote::new("HTML is easy")).await?;
//!     assert_eq!(store.find_by_id(&note.id).await?, Some(note.clone()));
//!
//!     store.delete_by_id(&note.id).await?;
//!     store.delete_by_id(&note.id).await?; // still fine
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use crate::note::{NewNote, Note, NoteId};
use crate::storage::StorageResult;

/// Persisted collection of notes
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// in-flight request. Implementations do no client-side locking beyond what
/// their backend requires, so concurrent operations on the same id carry no
/// check-and-act guarantee.
///
/// # Error Handling
///
/// Absence is never an error: lookups return `None` and deletes of unknown ids
/// succeed. Errors are reserved for invalid input
/// ([`StorageError::Validation`](crate::StorageError::Validation)) and backend
/// failures.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// List every stored note in storage order
    async fn list(&self) -> StorageResult<Vec<Note>>;

    /// Validate and persist a new note under a freshly assigned id
    ///
    /// Nothing is written when validation fails.
    async fn create(&self, note: NewNote) -> StorageResult<Note>;

    /// Get a note by id
    ///
    /// Returns `None` if the note doesn't exist.
    async fn find_by_id(&self, id: &NoteId) -> StorageResult<Option<Note>>;

    /// Delete a note by id
    ///
    /// This is idempotent: deleting a non-existent note succeeds.
    async fn delete_by_id(&self, id: &NoteId) -> StorageResult<()>;

    /// Remove every note
    ///
    /// Test support only; the HTTP surface never calls this.
    async fn clear(&self) -> StorageResult<()>;
}
