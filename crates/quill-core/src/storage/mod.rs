//! Note Storage Module
//!
//! Trait abstraction and error types for note persistence, plus an in-memory
//! implementation. Database-backed implementations live in their own crates
//! and depend on this one, never the other way around.

pub mod error;
pub mod memory;
pub mod note_store;

pub use error::{StorageError, StorageResult, ValidationError};
pub use memory::InMemoryNoteStore;
pub use note_store::NoteStore;
