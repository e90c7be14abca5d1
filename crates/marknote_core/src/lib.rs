//! Core domain logic for Marknote.
//! This crate is the single source of truth for note/tag business invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteData, NoteId, NoteWithTags};
pub use model::tag::{Tag, TagId};
pub use storage::{
    FileSlotStorage, MemorySlotStorage, SlotStorage, StorageError, StorageResult, NOTES_SLOT,
    TAGS_SLOT,
};
pub use store::note_store::{NoteStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
