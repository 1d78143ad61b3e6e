//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into the add/edit/search workflows.
//! - Keep presentation layers decoupled from store internals.

pub mod session;
