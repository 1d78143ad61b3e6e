//! Domain model for notes.
//!
//! # Responsibility
//! - Define the canonical note record used by store, filter and session.
//! - Own the non-empty field contract shared by both input workflows.
//!
//! # Invariants
//! - A `Note` never changes identity after creation; `id` is assigned once.
//! - Validation applies to workflow input, never to the store itself.

pub mod note;
