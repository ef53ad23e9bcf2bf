//! In-memory [`NoteStore`] implementation.
//!
//! Keeps notes in a `Vec` so `list()` returns insertion order. Useful for
//! tests and for running the service without a database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::note::{NewNote, Note, NoteId};
use crate::storage::{NoteStore, StorageResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    notes: Arc<RwLock<Vec<Note>>>,
}

impl InMemoryNoteStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list(&self) -> StorageResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn create(&self, note: NewNote) -> StorageResult<Note> {
        note.validate()?;

        let note = Note::from_new(NoteId::generate(), note);
        self.notes.write().await.push(note.clone());
        tracing::debug!(id = %note.id, "Created note in memory");
        Ok(note)
    }

    async fn find_by_id(&self, id: &NoteId) -> StorageResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|note| &note.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &NoteId) -> StorageResult<()> {
        self.notes.write().await.retain(|note| &note.id != id);
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        self.notes.write().await.clear();
        Ok(())
    }
}
