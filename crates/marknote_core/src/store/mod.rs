//! Note/tag store.
//!
//! # Responsibility
//! - Funnel all note/tag mutations through one store type.
//! - Keep persistence a synchronous side effect of each mutation.
//!
//! # Invariants
//! - Mutations never fail on missing identifiers; absent ids are silent
//!   no-ops.
//! - The only error source is the storage backend.

pub mod note_store;
