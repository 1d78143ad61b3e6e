//! Interactive CLI front end for the QuickNote core.
//!
//! # Responsibility
//! - Parse line commands, drive a `NoteSession`, print its outputs.
//! - Keep all business rules inside the core crate; this binary only
//!   translates text to session calls and session state to text.

use quicknote_core::{
    core_version, default_log_level, init_logging, EditState, MemoryNoteStore, NoteId, NoteSession,
};
use std::io::{self, BufRead, Write};

const LOG_DIR_ENV: &str = "QUICKNOTE_LOG_DIR";

fn main() {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    log::info!("event=cli_start module=cli version={}", core_version());
    println!("quicknote {} (type `help` for commands)", core_version());

    let mut session = NoteSession::new(MemoryNoteStore::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("quicknote> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match dispatch(&mut session, line.trim()) {
            Outcome::Continue => {}
            Outcome::Quit => break,
        }
    }
}

enum Outcome {
    Continue,
    Quit,
}

fn dispatch(session: &mut NoteSession<MemoryNoteStore>, line: &str) -> Outcome {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "add" => add(session, rest),
        "list" => render_list(session),
        "search" => {
            session.set_search_term(rest);
            render_list(session);
        }
        "edit" => begin_edit(session, rest),
        "title" => set_edit_field(session, rest, true),
        "content" => set_edit_field(session, rest, false),
        "save" => save(session),
        "cancel" => {
            session.cancel_edit();
            println!("edit cancelled");
        }
        "delete" => delete(session, rest),
        "export" => export(session),
        "quit" | "exit" => return Outcome::Quit,
        other => println!("unknown command `{other}`; type `help`"),
    }

    Outcome::Continue
}

fn print_help() {
    println!("commands:");
    println!("  add <title> :: <content>   create a note");
    println!("  list                       show notes matching the search term");
    println!("  search [query]             set the search term (empty to clear)");
    println!("  edit <id>                  start editing a note");
    println!("  title <text>               set the working title of the edit");
    println!("  content <text>             set the working content of the edit");
    println!("  save                       commit the edit in progress");
    println!("  cancel                     discard the edit in progress");
    println!("  delete <id>                remove a note");
    println!("  export                     dump all notes as JSON");
    println!("  quit                       leave");
}

fn add(session: &mut NoteSession<MemoryNoteStore>, rest: &str) {
    let Some((title, content)) = rest.split_once("::") else {
        println!("usage: add <title> :: <content>");
        return;
    };

    session.set_draft_title(title.trim());
    session.set_draft_content(content.trim());
    match session.submit_draft() {
        Ok(id) => println!("added note #{id}"),
        Err(reason) => println!("not added: {reason}"),
    }
}

fn begin_edit(session: &mut NoteSession<MemoryNoteStore>, rest: &str) {
    let Some(id) = parse_id(rest) else {
        println!("usage: edit <id>");
        return;
    };

    session.begin_edit(id);
    match session.edit_state() {
        EditState::Editing { title, content, .. } => {
            println!("editing #{id}");
            println!("  title:   {title}");
            println!("  content: {content}");
        }
        EditState::Idle => println!("no note with id {id}"),
    }
}

fn set_edit_field(session: &mut NoteSession<MemoryNoteStore>, value: &str, is_title: bool) {
    if session.edit_state().editing_id().is_none() {
        println!("no edit in progress; use `edit <id>` first");
        return;
    }
    if is_title {
        session.set_edit_title(value);
    } else {
        session.set_edit_content(value);
    }
}

fn save(session: &mut NoteSession<MemoryNoteStore>) {
    match session.save_edit() {
        Ok(Some(id)) => println!("saved note #{id}"),
        Ok(None) => println!("no edit in progress"),
        Err(reason) => println!("not saved: {reason}"),
    }
}

fn delete(session: &mut NoteSession<MemoryNoteStore>, rest: &str) {
    let Some(id) = parse_id(rest) else {
        println!("usage: delete <id>");
        return;
    };
    session.delete(id);
    println!("deleted #{id} (if present)");
}

fn export(session: &NoteSession<MemoryNoteStore>) {
    match serde_json::to_string_pretty(session.notes()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("export failed: {err}"),
    }
}

fn render_list(session: &NoteSession<MemoryNoteStore>) {
    let visible = session.filtered_notes();

    if visible.is_empty() {
        if session.search_term().is_empty() {
            println!("no notes yet");
        } else {
            println!("no results found");
        }
        return;
    }

    let editing = session.edit_state().editing_id();
    for note in visible {
        let marker = if editing == Some(note.id) { "*" } else { " " };
        println!("{marker}#{} {} :: {}", note.id, note.title, note.content);
    }
}

fn parse_id(value: &str) -> Option<NoteId> {
    value.trim().parse().ok()
}
