//! Domain model for notes and tags.
//!
//! # Responsibility
//! - Define the canonical records persisted in the NOTES and TAGS slots.
//! - Define the derived read model joining notes to resolved tags.
//!
//! # Invariants
//! - Every note and tag is identified by a stable string id.
//! - Note tag references are ids only; tag objects are never embedded in the
//!   persisted note shape.

pub mod note;
pub mod tag;
