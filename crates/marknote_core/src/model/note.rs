//! Note domain model and derived read shapes.
//!
//! # Responsibility
//! - Define the raw note record persisted in the NOTES slot.
//! - Define the input payload and the tag-resolved read model.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `tag_ids` may reference tags that no longer exist; dangling ids are
//!   tolerated and resolve to nothing in derived views.
//! - Serde names are camelCase so persisted slots keep the original
//!   application's JSON field layout.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// Canonical note record as persisted in the NOTES slot.
///
/// Tags are stored by id only; resolving them against the tag collection is
/// the job of [`NoteWithTags`] derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global id used for lookup and update addressing.
    pub id: NoteId,
    /// Short display title.
    pub title: String,
    /// Raw markdown body.
    pub markdown: String,
    /// Referenced tag ids. Treated as a set: duplicates are not prevented
    /// and order carries no meaning.
    pub tag_ids: Vec<TagId>,
}

impl Note {
    /// Creates a note with a generated stable id from an input payload.
    pub fn from_data(data: NoteData) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            markdown: data.markdown,
            tag_ids: data.tags.into_iter().map(|tag| tag.id).collect(),
        }
    }

    /// Replaces all mutable fields from an input payload, keeping the id.
    pub fn apply_data(&mut self, data: NoteData) {
        self.title = data.title;
        self.markdown = data.markdown;
        self.tag_ids = data.tags.into_iter().map(|tag| tag.id).collect();
    }
}

/// Input payload for note create/update use-cases.
///
/// Carries full tag objects as produced by the editing surface; the store
/// converts them to ids on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteData {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

/// Derived read model: a note joined with its resolved tag objects.
///
/// Tag ids with no matching tag are silently omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteWithTags {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<TagId>,
    /// Tags resolved against the current tag collection at derivation time.
    pub tags: Vec<Tag>,
}

impl NoteWithTags {
    /// Resolves one raw note against a tag collection.
    ///
    /// Resolution preserves tag-collection order, matching the original
    /// application's filter-based join.
    pub fn resolve(note: &Note, all_tags: &[Tag]) -> Self {
        let tags = all_tags
            .iter()
            .filter(|tag| note.tag_ids.contains(&tag.id))
            .cloned()
            .collect();
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            markdown: note.markdown.clone(),
            tag_ids: note.tag_ids.clone(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteData, NoteWithTags};
    use crate::model::tag::Tag;

    fn data(title: &str, tags: Vec<Tag>) -> NoteData {
        NoteData {
            title: title.to_string(),
            markdown: "body".to_string(),
            tags,
        }
    }

    #[test]
    fn from_data_converts_tags_to_ids() {
        let note = Note::from_data(data("a", vec![Tag::with_id("t1", "work")]));
        assert_eq!(note.tag_ids, vec!["t1".to_string()]);
        assert!(!note.id.is_empty());
    }

    #[test]
    fn apply_data_keeps_id_stable() {
        let mut note = Note::from_data(data("a", vec![]));
        let id = note.id.clone();
        note.apply_data(data("b", vec![Tag::with_id("t2", "home")]));
        assert_eq!(note.id, id);
        assert_eq!(note.title, "b");
        assert_eq!(note.tag_ids, vec!["t2".to_string()]);
    }

    #[test]
    fn resolve_omits_dangling_tag_ids() {
        let mut note = Note::from_data(data("a", vec![]));
        note.tag_ids = vec!["t1".to_string(), "gone".to_string()];
        let tags = vec![Tag::with_id("t1", "work")];
        let resolved = NoteWithTags::resolve(&note, &tags);
        assert_eq!(resolved.tags, vec![Tag::with_id("t1", "work")]);
        // The raw reference list is preserved, dangling id included.
        assert_eq!(resolved.tag_ids.len(), 2);
    }

    #[test]
    fn note_serializes_with_camel_case_tag_ids() {
        let mut note = Note::from_data(data("a", vec![]));
        note.tag_ids = vec!["t1".to_string()];
        let json = serde_json::to_string(&note).expect("note should serialize");
        assert!(json.contains("\"tagIds\":[\"t1\"]"));
    }
}
