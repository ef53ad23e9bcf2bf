mod health;
mod notes;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub use health::health_routes;
pub use notes::{note_routes, CreateNoteRequest};

/// Fallback for any route nothing else matched
pub async fn unknown_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
