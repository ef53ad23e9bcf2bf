//! Note Model
//!
//! The single resource Quill persists. A [`Note`] is what the store hands back;
//! a [`NewNote`] is what callers hand to the store to create one.
//!
//! Identifiers are assigned by the store, never by the caller, and are
//! represented externally as plain strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::ValidationError;

/// Opaque note identifier
///
/// Serializes as a bare string so the wire shape stays `{"id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier
    pub id: NoteId,

    /// Note text, never empty
    pub content: String,

    /// Importance flag
    #[serde(default)]
    pub important: bool,
}

impl Note {
    /// Materialize a note from a validated creation request and its new id
    pub fn from_new(id: NoteId, new: NewNote) -> Self {
        Self {
            id,
            content: new.content,
            important: new.important,
        }
    }
}

/// Fields supplied when creating a note
///
/// Construction does not validate; stores call [`NewNote::validate`] before
/// persisting anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub content: String,

    #[serde(default)]
    pub important: bool,
}

impl NewNote {
    /// Create a new, unimportant note
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            important: false,
        }
    }

    /// Builder-style: set the importance flag
    #[must_use]
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Build from optional request fields, rejecting missing content
    ///
    /// `important` defaults to `false` when absent.
    pub fn from_parts(
        content: Option<String>,
        important: Option<bool>,
    ) -> Result<Self, ValidationError> {
        let content = content.ok_or(ValidationError::MissingContent)?;
        let new = Self {
            content,
            important: important.unwrap_or(false),
        };
        new.validate()?;
        Ok(new)
    }

    /// Check the invariants every persisted note must satisfy
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }
}
