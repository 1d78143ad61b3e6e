//! Case-insensitive substring filter over note collections.
//!
//! # Responsibility
//! - Compute the visible subset of notes for a free-text query.
//!
//! # Invariants
//! - Matching is pure: no store access, no caching, no mutation.
//! - Output preserves the input ordering.
//! - An empty query matches every note.

use crate::model::note::Note;

/// Returns the notes whose title or content contains `query`,
/// compared case-insensitively. Order follows `notes`.
///
/// The full collection is re-scanned on every call; the collection is
/// small by contract and no incremental index is kept.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let folded = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note_matches(note, &folded))
        .collect()
}

/// Whether one note matches an already case-folded query.
///
/// `folded_query` must be the output of `str::to_lowercase`; callers
/// filtering many notes fold the query once up front.
pub fn note_matches(note: &Note, folded_query: &str) -> bool {
    note.title.to_lowercase().contains(folded_query)
        || note.content.to_lowercase().contains(folded_query)
}
