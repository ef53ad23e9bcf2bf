//! HTTP layer for Quill
//!
//! Maps `/api/notes` requests onto an injected [`NoteStore`](quill_core::NoteStore)
//! and store outcomes back onto status codes and JSON bodies.

pub mod routes;
pub mod server;
pub mod state;

mod error;

pub use error::{Result, WebError};
pub use server::{build_router, serve, start_server};
pub use state::AppState;
