//! Search entry points.
//!
//! # Responsibility
//! - Expose the pure filter used to derive the visible note subset.
//! - Keep matching rules in one place for store-agnostic reuse.

pub mod filter;
