//! Store layer: the authoritative owner of the note collection.
//!
//! # Responsibility
//! - Define the mutation contract for the note collection.
//! - Keep ordering and id-allocation rules inside one module.
//!
//! # Invariants
//! - The store is the only mutation surface for committed notes.
//! - All store operations are total; absent ids are no-ops, not errors.

pub mod note_store;
