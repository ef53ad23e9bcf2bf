use std::sync::Arc;

use quill_core::NoteStore;

/// Shared handler state
///
/// Holds the injected store; cloning is cheap and every request sees the same
/// backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}
