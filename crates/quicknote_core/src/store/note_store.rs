//! Note store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the only mutation surface over the ordered note collection.
//! - Allocate unique note ids for the add workflow.
//!
//! # Invariants
//! - Insertion order is preserved; edit rewrites in place, delete
//!   removes matching entries and nothing else.
//! - `allocate_id` never repeats an id within one store lifetime and
//!   stays ahead of any id that entered through `add_note`.
//! - No operation signals an error; absent ids are defined no-ops.

use crate::model::note::{Note, NoteId};
use log::{debug, warn};

/// Mutation and read contract for a note collection.
///
/// The session layer is generic over this trait so tests can substitute
/// instrumented stores.
pub trait NoteRepository {
    /// Returns a fresh id, unique for this store's lifetime.
    fn allocate_id(&mut self) -> NoteId;
    /// Appends `note` to the end of the collection. No dedup is
    /// performed; callers are expected to use [`Self::allocate_id`].
    fn add_note(&mut self, note: Note);
    /// Replaces every note whose id equals `id` with `updated`,
    /// keeping positions. Absent id leaves the collection unchanged.
    fn edit_note(&mut self, id: NoteId, updated: Note);
    /// Removes every note whose id equals `id`. Absent id is a no-op.
    fn delete_note(&mut self, id: NoteId);
    /// Current ordered collection, reflecting all prior mutations.
    fn notes(&self) -> &[Note];
}

/// Vec-backed store; the single production implementation.
#[derive(Debug)]
pub struct MemoryNoteStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNoteStore {
    /// Creates an empty store with the allocator starting at 1.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteRepository for MemoryNoteStore {
    fn allocate_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn add_note(&mut self, note: Note) {
        // Keep the allocator ahead of caller-supplied ids so later
        // allocations cannot collide with this note.
        if note.id >= self.next_id {
            self.next_id = note.id + 1;
        }
        debug!("event=note_added module=store id={}", note.id);
        self.notes.push(note);
    }

    fn edit_note(&mut self, id: NoteId, updated: Note) {
        let mut touched = 0usize;
        for note in self.notes.iter_mut().filter(|note| note.id == id) {
            *note = updated.clone();
            touched += 1;
        }
        if touched == 0 {
            warn!("event=note_edit_missing module=store id={id}");
        } else {
            debug!("event=note_edited module=store id={id} touched={touched}");
        }
    }

    fn delete_note(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = before - self.notes.len();
        if removed == 0 {
            warn!("event=note_delete_missing module=store id={id}");
        } else {
            debug!("event=note_deleted module=store id={id} removed={removed}");
        }
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }
}
