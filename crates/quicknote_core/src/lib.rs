//! Core domain logic for QuickNote, an in-memory notes manager.
//! This crate is the single source of truth for business invariants;
//! presentation layers call in and render what comes back.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{validate_fields, Note, NoteId, NoteValidationError};
pub use search::filter::{filter_notes, note_matches};
pub use service::session::{EditState, NoteSession};
pub use store::note_store::{MemoryNoteStore, NoteRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
