//! Note endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/notes` | 200, all notes |
//! | GET | `/api/notes/{id}` | 200, or 404 with empty body |
//! | POST | `/api/notes` | 201, created note; 400 on bad input |
//! | DELETE | `/api/notes/{id}` | 204, whether or not the note existed |

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use quill_core::{NewNote, Note, NoteId, ValidationError};
use serde::Deserialize;

use crate::state::AppState;
use crate::WebError;

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", get(get_note).delete(delete_note))
}

/// Body of `POST /api/notes`
///
/// Both fields are optional at the parsing stage so that a missing or null
/// `content` becomes a validation error instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl TryFrom<CreateNoteRequest> for NewNote {
    type Error = ValidationError;

    fn try_from(req: CreateNoteRequest) -> Result<Self, Self::Error> {
        NewNote::from_parts(req.content, req.important)
    }
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, WebError> {
    let notes = state.store.list().await?;
    Ok(Json(notes))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, WebError> {
    match state.store.find_by_id(&NoteId::new(id)).await? {
        Some(note) => Ok(Json(note)),
        None => Err(WebError::NotFound),
    }
}

async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), WebError> {
    let Json(req) = payload?;
    let new = NewNote::try_from(req)?;

    let note = state.store.create(new).await?;
    tracing::info!(id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, WebError> {
    state.store.delete_by_id(&NoteId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<NewNote, ValidationError> {
        let req: CreateNoteRequest = serde_json::from_str(body).unwrap();
        NewNote::try_from(req)
    }

    #[test]
    fn test_request_validation() {
        assert_eq!(parse("{}"), Err(ValidationError::MissingContent));
        assert_eq!(
            parse(r#"{"content": null}"#),
            Err(ValidationError::MissingContent)
        );
        assert_eq!(
            parse(r#"{"content": ""}"#),
            Err(ValidationError::EmptyContent)
        );
        assert_eq!(
            parse(r#"{"content": "x", "important": true}"#),
            Ok(NewNote::new("x").with_important(true))
        );
        assert_eq!(parse(r#"{"content": "x"}"#), Ok(NewNote::new("x")));
    }
}
