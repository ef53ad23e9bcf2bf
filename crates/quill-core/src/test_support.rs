//! Fixtures for tests that need a known database state
//!
//! Every test that touches a store should call [`reset_and_seed`] first so it
//! starts from exactly [`initial_notes`], regardless of what earlier tests did.

use crate::note::{NewNote, Note, NoteId};
use crate::storage::{NoteStore, StorageResult};

/// Content of the second seeded note
pub const BROWSER_NOTE: &str = "Browser can only execute JavaScript";

/// The fixed seed set
pub fn initial_notes() -> Vec<NewNote> {
    vec![
        NewNote::new("HTML is easy"),
        NewNote::new(BROWSER_NOTE).with_important(true),
    ]
}

/// Clear the store and insert [`initial_notes`]
///
/// Seeds are inserted one at a time so storage order matches seed order.
pub async fn reset_and_seed(store: &dyn NoteStore) -> StorageResult<Vec<Note>> {
    store.clear().await?;

    let mut seeded = Vec::new();
    for note in initial_notes() {
        seeded.push(store.create(note).await?);
    }
    Ok(seeded)
}

/// Snapshot of everything currently stored
pub async fn notes_in_db(store: &dyn NoteStore) -> StorageResult<Vec<Note>> {
    store.list().await
}

/// An id that is well-formed but refers to nothing
pub async fn non_existing_id(store: &dyn NoteStore) -> StorageResult<NoteId> {
    let note = store.create(NewNote::new("willremovethissoon")).await?;
    store.delete_by_id(&note.id).await?;
    Ok(note.id)
}
