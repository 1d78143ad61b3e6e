//! Note session: the workflow facade driven by the presentation layer.
//!
//! # Responsibility
//! - Own the store plus all transient view-facing state: search term,
//!   add-form draft, and the single optional edit in progress.
//! - Enforce the non-empty field contract at the workflow boundary.
//!
//! # Invariants
//! - At most one note is in editing state at a time; selecting another
//!   target silently discards in-progress working copies.
//! - Rejected submissions retain their field values unchanged.
//! - The visible subset is re-derived from the store on every read,
//!   never cached.

use crate::model::note::{validate_fields, Note, NoteId, NoteValidationError};
use crate::search::filter::filter_notes;
use crate::store::note_store::NoteRepository;
use log::{debug, info};

/// The single optional edit in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// No note selected for editing.
    #[default]
    Idle,
    /// One note selected, with uncommitted working copies of its fields.
    Editing {
        /// Id of the note being edited; carried into the commit.
        id: NoteId,
        /// Working copy of the title.
        title: String,
        /// Working copy of the content.
        content: String,
    },
}

impl EditState {
    /// Id of the note currently being edited, if any.
    pub fn editing_id(&self) -> Option<NoteId> {
        match self {
            Self::Idle => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }
}

/// Workflow facade over a note store.
///
/// Generic over [`NoteRepository`] so tests can substitute stores; the
/// production store is `MemoryNoteStore`.
#[derive(Debug, Default)]
pub struct NoteSession<R: NoteRepository> {
    store: R,
    search_term: String,
    draft_title: String,
    draft_content: String,
    edit: EditState,
}

impl<R: NoteRepository> NoteSession<R> {
    /// Creates a session over the provided store.
    pub fn new(store: R) -> Self {
        Self {
            store,
            search_term: String::new(),
            draft_title: String::new(),
            draft_content: String::new(),
            edit: EditState::Idle,
        }
    }

    /// Current ordered collection of committed notes.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Visible subset for the current search term, recomputed per call.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        filter_notes(self.store.notes(), &self.search_term)
    }

    /// Current free-text search query.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the free-text search query.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Working title of the add form.
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Working content of the add form.
    pub fn draft_content(&self) -> &str {
        &self.draft_content
    }

    /// Replaces the add-form title field.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    /// Replaces the add-form content field.
    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft_content = content.into();
    }

    /// Current edit state with its working field values.
    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Commits the add form as a new note.
    ///
    /// On success the note is appended with a freshly allocated id, the
    /// draft fields are cleared, and the new id is returned. A blank
    /// title or content rejects the submission and leaves the draft
    /// fields untouched.
    pub fn submit_draft(&mut self) -> Result<NoteId, NoteValidationError> {
        validate_fields(&self.draft_title, &self.draft_content)?;

        let id = self.store.allocate_id();
        let note = Note::new(
            id,
            std::mem::take(&mut self.draft_title),
            std::mem::take(&mut self.draft_content),
        );
        self.store.add_note(note);
        info!("event=draft_committed module=session id={id}");
        Ok(id)
    }

    /// Selects the note with `id` for editing.
    ///
    /// Working copies are initialized from the stored note. Any edit
    /// already in progress is discarded without confirmation. An absent
    /// id leaves the session unchanged.
    pub fn begin_edit(&mut self, id: NoteId) {
        let Some(note) = self.store.notes().iter().find(|note| note.id == id) else {
            debug!("event=edit_target_missing module=session id={id}");
            return;
        };
        if let EditState::Editing { id: previous, .. } = &self.edit {
            debug!("event=edit_replaced module=session previous={previous} next={id}");
        }
        self.edit = EditState::Editing {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        };
    }

    /// Replaces the working title of the edit in progress. No-op when idle.
    pub fn set_edit_title(&mut self, value: impl Into<String>) {
        if let EditState::Editing { title, .. } = &mut self.edit {
            *title = value.into();
        }
    }

    /// Replaces the working content of the edit in progress. No-op when idle.
    pub fn set_edit_content(&mut self, value: impl Into<String>) {
        if let EditState::Editing { content, .. } = &mut self.edit {
            *content = value.into();
        }
    }

    /// Commits the edit in progress.
    ///
    /// Returns `Ok(None)` when no edit is active. A blank working title
    /// or content rejects the save and the session stays in editing
    /// state with its fields intact. On success the stored note is
    /// rewritten in place under its original id and the session returns
    /// to idle.
    pub fn save_edit(&mut self) -> Result<Option<NoteId>, NoteValidationError> {
        let EditState::Editing { id, title, content } = &self.edit else {
            return Ok(None);
        };
        validate_fields(title, content)?;

        let id = *id;
        let updated = Note::new(id, title.clone(), content.clone());
        self.store.edit_note(id, updated);
        self.edit = EditState::Idle;
        info!("event=edit_saved module=session id={id}");
        Ok(Some(id))
    }

    /// Discards the edit in progress unconditionally.
    pub fn cancel_edit(&mut self) {
        if let EditState::Editing { id, .. } = &self.edit {
            debug!("event=edit_cancelled module=session id={id}");
        }
        self.edit = EditState::Idle;
    }

    /// Deletes the note with `id`. Absent id is a no-op; an edit in
    /// progress is left untouched either way.
    pub fn delete(&mut self, id: NoteId) {
        self.store.delete_note(id);
    }
}
