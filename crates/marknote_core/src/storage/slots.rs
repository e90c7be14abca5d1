//! Slot storage backends.
//!
//! # Responsibility
//! - Provide file-backed and in-memory implementations of the slot contract.
//! - Emit `slot_read` / `slot_write` logging events with duration and status.
//!
//! # Invariants
//! - A missing slot reads as `None`, never as an error.
//! - File writes go through a temp file + rename so a crashed write never
//!   leaves a half-written slot behind.

use super::{StorageError, StorageResult};
use log::{error, info};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Key-value slot contract backing the persisted collections.
///
/// The slot name is the storage key; the payload is an opaque serialized
/// text document owned by the caller.
pub trait SlotStorage {
    /// Reads the full payload of one slot. `None` when the slot was never
    /// written.
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>>;
    /// Replaces the full payload of one slot.
    fn write_slot(&mut self, slot: &str, payload: &str) -> StorageResult<()>;
}

/// File-backed slot storage: one `<SLOT>.json` file per slot in a data
/// directory.
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    /// Opens slot storage rooted at `dir`, creating the directory when
    /// needed.
    ///
    /// # Side effects
    /// - Creates the data directory.
    /// - Emits `storage_open` logging events.
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        if let Err(err) = fs::create_dir_all(&dir) {
            error!(
                "event=storage_open module=storage status=error dir={} error={}",
                dir.display(),
                err
            );
            return Err(StorageError::Io {
                target: dir.display().to_string(),
                source: err,
            });
        }
        info!(
            "event=storage_open module=storage status=ok dir={}",
            dir.display()
        );
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>> {
        let started_at = Instant::now();
        let path = self.slot_path(slot);
        match fs::read_to_string(&path) {
            Ok(payload) => {
                info!(
                    "event=slot_read module=storage status=ok slot={} bytes={} duration_ms={}",
                    slot,
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(payload))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "event=slot_read module=storage status=ok slot={} bytes=0 missing=1",
                    slot
                );
                Ok(None)
            }
            Err(err) => {
                error!(
                    "event=slot_read module=storage status=error slot={} duration_ms={} error={}",
                    slot,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StorageError::Io {
                    target: slot.to_string(),
                    source: err,
                })
            }
        }
    }

    fn write_slot(&mut self, slot: &str, payload: &str) -> StorageResult<()> {
        let started_at = Instant::now();
        let path = self.slot_path(slot);
        let tmp_path = self.dir.join(format!("{slot}.json.tmp"));

        let result = fs::write(&tmp_path, payload).and_then(|()| fs::rename(&tmp_path, &path));
        match result {
            Ok(()) => {
                info!(
                    "event=slot_write module=storage status=ok slot={} bytes={} duration_ms={}",
                    slot,
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=slot_write module=storage status=error slot={} duration_ms={} error={}",
                    slot,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StorageError::Io {
                    target: slot.to_string(),
                    source: err,
                })
            }
        }
    }
}

/// In-memory slot storage for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one slot payload, bypassing the write path. Test helper for
    /// corrupt-slot scenarios.
    pub fn seed(&mut self, slot: &str, payload: &str) {
        self.slots.insert(slot.to_string(), payload.to_string());
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write_slot(&mut self, slot: &str, payload: &str) -> StorageResult<()> {
        self.slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSlotStorage, MemorySlotStorage, SlotStorage};

    #[test]
    fn memory_storage_reads_back_written_payload() {
        let mut storage = MemorySlotStorage::new();
        assert_eq!(storage.read_slot("NOTES").unwrap(), None);
        storage.write_slot("NOTES", "[]").unwrap();
        assert_eq!(storage.read_slot("NOTES").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_round_trips_and_reports_missing_slot_as_none() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let mut storage = FileSlotStorage::open(dir.path()).unwrap();

        assert_eq!(storage.read_slot("TAGS").unwrap(), None);
        storage.write_slot("TAGS", "[{\"id\":\"t1\",\"label\":\"work\"}]")
            .unwrap();
        let payload = storage.read_slot("TAGS").unwrap();
        assert_eq!(
            payload.as_deref(),
            Some("[{\"id\":\"t1\",\"label\":\"work\"}]")
        );
        assert!(dir.path().join("TAGS.json").exists());
        assert!(!dir.path().join("TAGS.json.tmp").exists());
    }
}
