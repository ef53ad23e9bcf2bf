//! # Quill Core
//!
//! Domain types and the storage seam for the Quill notes service.
//!
//! - [`Note`], [`NewNote`], [`NoteId`]: the note resource
//! - [`NoteStore`]: async persistence trait implemented by storage backends
//! - [`InMemoryNoteStore`]: a backend with no external dependencies
//!
//! Enable the `test-utils` feature for [`test_support`], the seed data and
//! reset helpers used by integration tests.

pub mod note;
pub mod storage;

#[cfg(feature = "test-utils")]
pub mod test_support;

pub use note::{NewNote, Note, NoteId};
pub use storage::{
    InMemoryNoteStore, NoteStore, StorageError, StorageResult, ValidationError,
};
