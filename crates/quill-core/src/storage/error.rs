//! Storage Error Types
//!
//! Errors produced by [`NoteStore`](super::NoteStore) implementations.

use thiserror::Error;

/// A note failed the well-formedness rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("content missing")]
    MissingContent,

    #[error("content must not be empty")]
    EmptyContent,
}

/// Error type for note storage operations
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Create an unavailable-backend error
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a query error
    pub fn query<S: Into<String>>(msg: S) -> Self {
        Self::Query(msg.into())
    }

    /// Check if the error was caused by bad input rather than the backend
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the backend could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
