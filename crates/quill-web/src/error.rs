use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quill_core::{StorageError, ValidationError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for WebError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(inner) => WebError::Validation(inner),
            other => WebError::Storage(other),
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        WebError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, &msg),
            WebError::Validation(err) => error_body(StatusCode::BAD_REQUEST, &err.to_string()),
            WebError::NotFound => StatusCode::NOT_FOUND.into_response(),
            WebError::Storage(err) => {
                tracing::error!(error = %err, "Store operation failed");
                let status = if err.is_unavailable() {
                    StatusCode::SERVICE_UNAVAILABLE
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                error_body(status, "internal server error")
            }
            WebError::Config(_) | WebError::Io(_) => {
                tracing::error!(error = %self, "Unexpected server error");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
