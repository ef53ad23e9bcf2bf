//! SurrealDB implementation of [`NoteStore`]
//!
//! Notes live in the `note` table keyed by their [`NoteId`]. Each record also
//! carries a `created_at` timestamp that is never exposed; `list()` orders by
//! it so storage order is insertion order.

use async_trait::async_trait;
use quill_core::{NewNote, Note, NoteId, NoteStore, StorageResult};
use serde::Deserialize;
use serde_json::json;

use crate::surreal_client::SurrealClient;

const NOTE_TABLE: &str = "note";

/// Row shape returned by the note queries
#[derive(Debug, Deserialize)]
struct NoteRow {
    id: String,
    content: String,
    #[serde(default)]
    important: bool,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: NoteId::new(row.id),
            content: row.content,
            important: row.important,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SurrealNoteStore {
    client: SurrealClient,
}

impl SurrealNoteStore {
    pub fn new(client: SurrealClient) -> Self {
        Self { client }
    }

    /// Store over a fresh, isolated in-memory database
    pub async fn isolated_memory() -> StorageResult<Self> {
        Ok(Self::new(SurrealClient::new_isolated_memory().await?))
    }

    pub fn client(&self) -> &SurrealClient {
        &self.client
    }
}

#[async_trait]
impl NoteStore for SurrealNoteStore {
    async fn list(&self) -> StorageResult<Vec<Note>> {
        let sql = format!(
            "SELECT record::id(id) AS id, content, important, created_at \
             FROM {NOTE_TABLE} ORDER BY created_at ASC"
        );
        let rows: Vec<NoteRow> = self.client.query(&sql, &[]).await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn create(&self, note: NewNote) -> StorageResult<Note> {
        note.validate()?;

        let id = NoteId::generate();
        let sql = format!(
            "CREATE type::thing('{NOTE_TABLE}', $id) CONTENT {{ \
                content: $content, important: $important, created_at: time::now() \
             }}"
        );
        self.client
            .execute(
                &sql,
                &[
                    ("id", json!(id.as_str())),
                    ("content", json!(note.content)),
                    ("important", json!(note.important)),
                ],
            )
            .await?;

        tracing::debug!(%id, "Created note");
        Ok(Note::from_new(id, note))
    }

    async fn find_by_id(&self, id: &NoteId) -> StorageResult<Option<Note>> {
        let sql = format!(
            "SELECT record::id(id) AS id, content, important \
             FROM type::thing('{NOTE_TABLE}', $id)"
        );
        let rows: Vec<NoteRow> = self
            .client
            .query(&sql, &[("id", json!(id.as_str()))])
            .await?;
        Ok(rows.into_iter().next().map(Note::from))
    }

    async fn delete_by_id(&self, id: &NoteId) -> StorageResult<()> {
        let sql = format!("DELETE type::thing('{NOTE_TABLE}', $id)");
        self.client
            .execute(&sql, &[("id", json!(id.as_str()))])
            .await?;
        tracing::debug!(%id, "Deleted note");
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        self.client
            .execute(&format!("DELETE {NOTE_TABLE}"), &[])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::StorageError;

    #[tokio::test]
    async fn test_create_then_find() {
        let store = SurrealNoteStore::isolated_memory().await.unwrap();

        let created = store
            .create(NewNote::new("HTML is easy").with_important(true))
            .await
            .unwrap();
        let found = store.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = SurrealNoteStore::isolated_memory().await.unwrap();
        let found = store.find_by_id(&NoteId::new("nope")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_empty_content_is_not_written() {
        let store = SurrealNoteStore::isolated_memory().await.unwrap();

        let err = store.create(NewNote::new("")).await.unwrap_err();

        assert!(matches!(err, StorageError::Validation(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_insertion_ordered() {
        let store = SurrealNoteStore::isolated_memory().await.unwrap();
        for content in ["one", "two", "three", "four"] {
            store.create(NewNote::new(content)).await.unwrap();
        }

        let contents: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.content)
            .collect();
        assert_eq!(contents, vec!["one", "two", "three", "four"]);
    }

    #[tokio::test]
    async fn test_ids_with_odd_characters_are_bound_not_interpolated() {
        let store = SurrealNoteStore::isolated_memory().await.unwrap();
        store.create(NewNote::new("survivor")).await.unwrap();

        let hostile = NoteId::new("x'); DELETE note; --");
        assert!(store.find_by_id(&hostile).await.unwrap().is_none());
        store.delete_by_id(&hostile).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = SurrealNoteStore::isolated_memory().await.unwrap();
        store.create(NewNote::new("a")).await.unwrap();
        store.create(NewNote::new("b")).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }
}
