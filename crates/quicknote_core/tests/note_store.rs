use quicknote_core::{MemoryNoteStore, Note, NoteRepository};

#[test]
fn adds_preserve_count_and_call_order() {
    let mut store = MemoryNoteStore::new();
    for i in 1..=5 {
        store.add_note(Note::new(i, format!("title {i}"), format!("body {i}")));
    }

    let notes = store.notes();
    assert_eq!(notes.len(), 5);
    let ids: Vec<_> = notes.iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn edit_rewrites_only_the_matching_position() {
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(1, "first", "one"));
    store.add_note(Note::new(2, "second", "two"));
    store.add_note(Note::new(3, "third", "three"));

    store.edit_note(2, Note::new(2, "second (edited)", "two!"));

    let notes = store.notes();
    assert_eq!(notes[0], Note::new(1, "first", "one"));
    assert_eq!(notes[1], Note::new(2, "second (edited)", "two!"));
    assert_eq!(notes[2], Note::new(3, "third", "three"));
}

#[test]
fn edit_with_absent_id_is_identity() {
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(1, "only", "note"));
    let before = store.notes().to_vec();

    store.edit_note(99, Note::new(99, "ghost", "ghost"));

    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn delete_removes_exactly_the_matching_note() {
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(1, "keep", "a"));
    store.add_note(Note::new(2, "drop", "b"));
    store.add_note(Note::new(3, "keep too", "c"));

    store.delete_note(2);

    let ids: Vec<_> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn delete_with_absent_id_is_identity() {
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(1, "only", "note"));

    store.delete_note(99);

    assert_eq!(store.len(), 1);
}

#[test]
fn edit_and_delete_apply_to_all_duplicate_ids() {
    // Duplicates only arise when a caller bypasses the allocator; the
    // documented policy is that id-addressed mutations touch them all.
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(7, "a", "x"));
    store.add_note(Note::new(7, "b", "y"));

    store.edit_note(7, Note::new(7, "both", "z"));
    assert!(store.notes().iter().all(|note| note.title == "both"));

    store.delete_note(7);
    assert!(store.is_empty());
}

#[test]
fn allocated_ids_never_collide_with_existing_notes() {
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(50, "imported", "body"));

    let id = store.allocate_id();
    assert!(store.notes().iter().all(|note| note.id != id));

    let next = store.allocate_id();
    assert_ne!(id, next);
}

#[test]
fn note_json_shape_is_stable() {
    let note = Note::new(1, "Todo", "Buy milk");
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 1, "title": "Todo", "content": "Buy milk"})
    );

    let parsed: Note = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, note);
}
