//! Tag domain model.
//!
//! # Responsibility
//! - Define the tag record persisted in the TAGS slot.
//!
//! # Invariants
//! - `id` is stable and never reused for another tag.
//! - `label` is display text only; identity is carried by `id` alone.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values generated by this crate are UUIDv4 text; caller-supplied ids are
/// stored as-is.
pub type TagId = String;

/// A labeled category assignable to notes.
///
/// Identified independently of its label text, so relabeling never breaks
/// note references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable id referenced by notes.
    pub id: TagId,
    /// User-visible label.
    pub label: String,
}

impl Tag {
    /// Creates a tag with a generated stable id.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), label)
    }

    /// Creates a tag with a caller-provided stable id.
    ///
    /// Used by import paths and callers that mint ids up front.
    pub fn with_id(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use uuid::Uuid;

    #[test]
    fn new_generates_parseable_uuid_id() {
        let tag = Tag::new("work");
        assert!(Uuid::parse_str(&tag.id).is_ok());
        assert_eq!(tag.label, "work");
    }

    #[test]
    fn with_id_keeps_caller_supplied_id_verbatim() {
        let tag = Tag::with_id("t1", "work");
        assert_eq!(tag.id, "t1");
    }
}
