//! Slot-based persistence boundary.
//!
//! # Responsibility
//! - Define the key-value slot contract that backs the note/tag collections.
//! - Keep filesystem details inside the storage boundary.
//!
//! # Invariants
//! - Each slot holds one serialized collection; slots are independent.
//! - Writes replace the whole slot payload atomically from the caller's
//!   perspective.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod slots;

pub use slots::{FileSlotStorage, MemorySlotStorage, SlotStorage};

/// Slot holding the serialized note collection.
pub const NOTES_SLOT: &str = "NOTES";
/// Slot holding the serialized tag collection.
pub const TAGS_SLOT: &str = "TAGS";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for slot read/write operations.
#[derive(Debug)]
pub enum StorageError {
    Io {
        /// Slot name or data-directory path the operation targeted.
        target: String,
        source: std::io::Error,
    },
    Encode {
        slot: String,
        source: serde_json::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { target, source } => {
                write!(f, "storage io failure at `{target}`: {source}")
            }
            Self::Encode { slot, source } => {
                write!(f, "slot `{slot}` encode failure: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}
