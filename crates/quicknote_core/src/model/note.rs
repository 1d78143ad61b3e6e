//! Note domain model.
//!
//! # Responsibility
//! - Define the note record shared by store, filter and session layers.
//! - Provide the non-empty field check used by add/save workflows.
//!
//! # Invariants
//! - `id` is unique within one store lifetime and never reassigned.
//! - `title` and `content` are stored verbatim; trimming happens only
//!   inside [`validate_fields`], never on accepted data.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a note within one store lifetime.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// A single short text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique within the owning store; allocated at creation time.
    pub id: NoteId,
    /// Short heading, stored as entered.
    pub title: String,
    /// Body text, stored as entered.
    pub content: String,
}

impl Note {
    /// Creates a note with a caller-provided id.
    ///
    /// The id is expected to come from the owning store's allocator so
    /// that uniqueness holds; this constructor does not check it.
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Rejection reason for add/save submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Content is empty or whitespace-only.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be blank"),
            Self::EmptyContent => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// Checks the non-empty-after-trim contract for workflow input.
///
/// Title is checked before content, so a submission blank in both
/// fields reports [`NoteValidationError::EmptyTitle`].
pub fn validate_fields(title: &str, content: &str) -> Result<(), NoteValidationError> {
    if title.trim().is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(NoteValidationError::EmptyContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_fields, Note, NoteValidationError};

    #[test]
    fn validate_fields_accepts_non_blank_input() {
        assert_eq!(validate_fields("Groceries", "Buy milk"), Ok(()));
    }

    #[test]
    fn validate_fields_rejects_whitespace_only_title() {
        assert_eq!(
            validate_fields("   ", "Buy milk"),
            Err(NoteValidationError::EmptyTitle)
        );
    }

    #[test]
    fn validate_fields_rejects_whitespace_only_content() {
        assert_eq!(
            validate_fields("Groceries", "\t\n"),
            Err(NoteValidationError::EmptyContent)
        );
    }

    #[test]
    fn note_stores_fields_verbatim() {
        let note = Note::new(1, "  padded  ", "body\n");
        assert_eq!(note.title, "  padded  ");
        assert_eq!(note.content, "body\n");
    }
}
