use marknote_core::{FileSlotStorage, NoteData, NoteStore, SlotStorage, Tag};
use std::fs;

fn note_data(title: &str, tags: Vec<Tag>) -> NoteData {
    NoteData {
        title: title.to_string(),
        markdown: "body".to_string(),
        tags,
    }
}

fn open_store(dir: &std::path::Path) -> NoteStore<FileSlotStorage> {
    let storage = FileSlotStorage::open(dir).unwrap();
    NoteStore::load(storage).unwrap()
}

#[test]
fn fresh_data_directory_loads_empty_collections() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    assert!(store.notes().is_empty());
    assert!(store.tags().is_empty());
}

#[test]
fn every_mutation_is_visible_to_a_reloaded_store() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let mut store = open_store(dir.path());
        store.add_tag(Tag::with_id("t1", "work")).unwrap();
        store
            .create_note(note_data("persisted", vec![Tag::with_id("t1", "work")]))
            .unwrap()
    };

    let reloaded = open_store(dir.path());
    assert_eq!(reloaded.tags(), &[Tag::with_id("t1", "work")]);
    let note = reloaded.get_note(&created.id).expect("note should persist");
    assert_eq!(note.title, "persisted");
    let derived = reloaded.get_note_with_tags(&created.id).unwrap();
    assert_eq!(derived.tags, vec![Tag::with_id("t1", "work")]);
}

#[test]
fn round_trip_preserves_collection_order_and_content() {
    let dir = tempfile::tempdir().unwrap();

    let (notes_before, tags_before) = {
        let mut store = open_store(dir.path());
        for idx in 0..5 {
            store.add_tag(Tag::with_id(format!("t{idx}"), format!("tag {idx}"))).unwrap();
            store.create_note(note_data(&format!("note {idx}"), vec![])).unwrap();
        }
        (store.notes().to_vec(), store.tags().to_vec())
    };

    let reloaded = open_store(dir.path());
    assert_eq!(reloaded.notes(), notes_before.as_slice());
    assert_eq!(reloaded.tags(), tags_before.as_slice());
}

#[test]
fn deletions_are_persisted_too() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        let doomed = store.create_note(note_data("doomed", vec![])).unwrap();
        store.add_tag(Tag::with_id("t1", "work")).unwrap();
        store.delete_note(&doomed.id).unwrap();
        store.delete_tag("t1").unwrap();
    }

    let reloaded = open_store(dir.path());
    assert!(reloaded.notes().is_empty());
    assert!(reloaded.tags().is_empty());
}

#[test]
fn corrupted_slot_file_falls_back_to_empty_collection() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        store.create_note(note_data("lost", vec![])).unwrap();
        store.add_tag(Tag::with_id("t1", "kept")).unwrap();
    }

    fs::write(dir.path().join("NOTES.json"), "{ definitely not json").unwrap();

    // Only the corrupted slot resets; the healthy slot still loads.
    let reloaded = open_store(dir.path());
    assert!(reloaded.notes().is_empty());
    assert_eq!(reloaded.tags(), &[Tag::with_id("t1", "kept")]);
}

#[test]
fn slot_layout_matches_the_original_local_storage_shape() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        store.add_tag(Tag::with_id("t1", "work")).unwrap();
        store
            .create_note(note_data("A", vec![Tag::with_id("t1", "work")]))
            .unwrap();
    }

    let storage = FileSlotStorage::open(dir.path()).unwrap();
    let notes_payload = storage.read_slot("NOTES").unwrap().expect("slot exists");
    let tags_payload = storage.read_slot("TAGS").unwrap().expect("slot exists");
    assert!(notes_payload.contains("\"tagIds\":[\"t1\"]"));
    assert!(tags_payload.contains("\"label\":\"work\""));
}
