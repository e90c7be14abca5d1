//! Note/tag store over slot storage.
//!
//! # Responsibility
//! - Own the in-memory note and tag collections.
//! - Persist the whole collection to its slot after every mutation.
//! - Derive the tag-resolved read model on demand.
//!
//! # Invariants
//! - Note ids are generated by the store and unique within the collection.
//! - Tag ids are caller-supplied on `add_tag`; the store performs no
//!   uniqueness check.
//! - Deleting a tag never touches notes referencing it; dangling ids are
//!   tolerated end to end.
//! - An undecodable or missing slot loads as the empty collection.

use crate::model::note::{Note, NoteData, NoteId, NoteWithTags};
use crate::model::tag::{Tag, TagId};
use crate::storage::{SlotStorage, StorageError, NOTES_SLOT, TAGS_SLOT};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for store operations.
///
/// Store semantics are total over the in-memory collections; only the
/// persistence side effect can fail.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// The note/tag store: two persisted collections behind one mutation funnel.
///
/// Consumers hold the store by reference/context; there is no ambient
/// singleton.
pub struct NoteStore<S: SlotStorage> {
    storage: S,
    notes: Vec<Note>,
    tags: Vec<Tag>,
}

impl<S: SlotStorage> NoteStore<S> {
    /// Loads both collections from storage.
    ///
    /// Missing or undecodable slots fall back to empty collections; decode
    /// problems are logged and never surfaced as errors.
    pub fn load(storage: S) -> StoreResult<Self> {
        let notes: Vec<Note> = load_slot(&storage, NOTES_SLOT)?;
        let tags: Vec<Tag> = load_slot(&storage, TAGS_SLOT)?;
        info!(
            "event=store_load module=store status=ok notes={} tags={}",
            notes.len(),
            tags.len()
        );
        Ok(Self {
            storage,
            notes,
            tags,
        })
    }

    /// Creates one note from an input payload and returns the stored record.
    ///
    /// The store mints a fresh UUID id; payload tags are converted to ids.
    pub fn create_note(&mut self, data: NoteData) -> StoreResult<Note> {
        let note = Note::from_data(data);
        self.notes.push(note.clone());
        self.persist_notes()?;
        Ok(note)
    }

    /// Replaces the mutable fields of the matching note.
    ///
    /// Silent no-op when no note has the given id.
    pub fn update_note(&mut self, id: &str, data: NoteData) -> StoreResult<()> {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.apply_data(data);
                self.persist_notes()
            }
            None => Ok(()),
        }
    }

    /// Removes the matching note. No-op when absent.
    pub fn delete_note(&mut self, id: &str) -> StoreResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Ok(());
        }
        self.persist_notes()
    }

    /// Appends a pre-built tag.
    ///
    /// The caller supplies a fresh id; no uniqueness check is performed.
    pub fn add_tag(&mut self, tag: Tag) -> StoreResult<()> {
        self.tags.push(tag);
        self.persist_tags()
    }

    /// Replaces the label of the matching tag. No-op when absent.
    pub fn update_tag(&mut self, id: &str, label: impl Into<String>) -> StoreResult<()> {
        match self.tags.iter_mut().find(|tag| tag.id == id) {
            Some(tag) => {
                tag.label = label.into();
                self.persist_tags()
            }
            None => Ok(()),
        }
    }

    /// Removes the matching tag. No-op when absent.
    ///
    /// Notes referencing the tag keep their dangling ids; derived views
    /// simply stop resolving them.
    pub fn delete_tag(&mut self, id: &str) -> StoreResult<()> {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.id != id);
        if self.tags.len() == before {
            return Ok(());
        }
        self.persist_tags()
    }

    /// Gets one raw note by id.
    pub fn get_note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Gets one note joined with its resolved tags.
    pub fn get_note_with_tags(&self, id: &str) -> Option<NoteWithTags> {
        self.get_note(id)
            .map(|note| NoteWithTags::resolve(note, &self.tags))
    }

    /// Raw note collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Tag collection in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Derived read model: every note joined with its resolved tags.
    ///
    /// Pure derivation over the current collections; recomputed on each call.
    pub fn notes_with_tags(&self) -> Vec<NoteWithTags> {
        self.notes
            .iter()
            .map(|note| NoteWithTags::resolve(note, &self.tags))
            .collect()
    }

    /// Search over the derived read model.
    ///
    /// A note matches when its title contains `title` case-insensitively
    /// (always true for `None`) and every id in `tag_ids` resolves to one of
    /// the note's tags. Dangling references never match a tag filter.
    pub fn filter_notes(&self, title: Option<&str>, tag_ids: &[TagId]) -> Vec<NoteWithTags> {
        let needle = title.map(str::to_lowercase);
        self.notes_with_tags()
            .into_iter()
            .filter(|note| {
                let title_ok = needle
                    .as_deref()
                    .map_or(true, |needle| note.title.to_lowercase().contains(needle));
                let tags_ok = tag_ids
                    .iter()
                    .all(|wanted| note.tags.iter().any(|tag| &tag.id == wanted));
                title_ok && tags_ok
            })
            .collect()
    }

    fn persist_notes(&mut self) -> StoreResult<()> {
        persist_slot(&mut self.storage, NOTES_SLOT, &self.notes)
    }

    fn persist_tags(&mut self) -> StoreResult<()> {
        persist_slot(&mut self.storage, TAGS_SLOT, &self.tags)
    }
}

fn load_slot<S: SlotStorage, T: DeserializeOwned>(storage: &S, slot: &str) -> StoreResult<Vec<T>> {
    let Some(payload) = storage.read_slot(slot)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&payload) {
        Ok(records) => Ok(records),
        Err(err) => {
            warn!(
                "event=slot_decode module=store status=fallback slot={} error={}",
                slot, err
            );
            Ok(Vec::new())
        }
    }
}

fn persist_slot<S: SlotStorage, T: Serialize>(
    storage: &mut S,
    slot: &str,
    records: &[T],
) -> StoreResult<()> {
    let payload = serde_json::to_string(records).map_err(|err| StorageError::Encode {
        slot: slot.to_string(),
        source: err,
    })?;
    storage.write_slot(slot, &payload)?;
    Ok(())
}
