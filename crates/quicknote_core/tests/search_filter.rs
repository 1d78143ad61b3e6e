use quicknote_core::{filter_notes, MemoryNoteStore, Note, NoteRepository};

fn sample_notes() -> Vec<Note> {
    vec![
        Note::new(1, "Groceries", "Buy milk and eggs"),
        Note::new(2, "Ideas", "Write a novel"),
        Note::new(3, "Workout", "Leg day"),
    ]
}

#[test]
fn empty_query_returns_all_notes_in_order() {
    let notes = sample_notes();
    let visible = filter_notes(&notes, "");

    assert_eq!(visible.len(), notes.len());
    let ids: Vec<_> = visible.iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn query_matches_case_insensitively() {
    let notes = sample_notes();

    for query in ["gro", "GRO", "Groceries"] {
        let visible = filter_notes(&notes, query);
        assert_eq!(visible.len(), 1, "query `{query}` should match once");
        assert_eq!(visible[0].id, 1);
    }
}

#[test]
fn query_matches_content_as_well_as_title() {
    let notes = sample_notes();
    let visible = filter_notes(&notes, "novel");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[test]
fn query_excludes_notes_matching_neither_field() {
    let notes = sample_notes();
    let visible = filter_notes(&notes, "bread");
    assert!(visible.is_empty());
}

#[test]
fn filter_preserves_store_ordering() {
    let notes = vec![
        Note::new(3, "alpha one", "x"),
        Note::new(1, "alpha two", "y"),
        Note::new(2, "alpha three", "z"),
    ];
    let ids: Vec<_> = filter_notes(&notes, "alpha")
        .iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

// End-to-end scenario over store mutations and re-filtering.
#[test]
fn filter_tracks_store_mutations() {
    let mut store = MemoryNoteStore::new();
    store.add_note(Note::new(1, "Todo", "Buy milk"));
    store.add_note(Note::new(2, "Ideas", "Write a novel"));

    let milk = filter_notes(store.notes(), "milk");
    assert_eq!(milk.len(), 1);
    assert_eq!(milk[0].id, 1);

    // "a" hits "Ideas" by title and "Buy milk" / "Write a novel" by content.
    let broad = filter_notes(store.notes(), "a");
    assert_eq!(broad.len(), 2);

    store.edit_note(1, Note::new(1, "Todo", "Buy bread"));
    assert!(filter_notes(store.notes(), "milk").is_empty());

    store.delete_note(2);
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].id, 1);
}
