//! Persistence adapters for the entry collection
//!
//! The whole collection is stored as one structured (JSON) blob under a
//! fixed key. [`FileStorage`] maps the key to a file; [`MemoryStorage`]
//! keeps the blob in memory.

use crate::codec::{from_structured, to_structured};
use crate::entries::Entry;
use crate::error::{OrganizerError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Default storage key (file stem of the persisted blob)
pub const DEFAULT_STORAGE_KEY: &str = "task-notes-entries-v3";

/// Load/save contract between the entry store and its backing storage
pub trait Storage {
    /// Load every entry; nothing stored yet yields an empty collection
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the stored collection with `entries`
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// JSON file storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Storage at `<dir>/<key>.json`
    pub fn in_dir(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", key)))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path).map_err(|e| {
            OrganizerError::storage(format!("failed to read {}", self.file_path.display()), e)
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        from_structured(&content)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                OrganizerError::storage(format!("failed to create {}", parent.display()), e)
            })?;
        }

        let content = to_structured(entries)?;
        fs::write(&self.file_path, content).map_err(|e| {
            OrganizerError::storage(format!("failed to write {}", self.file_path.display()), e)
        })
    }
}

/// In-memory storage holding the raw blob
///
/// Clones share the same blob, so a test can keep a handle after giving one
/// to the entry store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `blob` already stored, valid or not
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let storage = Self::default();
        if let Ok(mut slot) = storage.blob.lock() {
            *slot = Some(blob.into());
        }
        storage
    }

    /// Raw stored blob, if anything was saved
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|slot| slot.clone())
    }

    /// Make subsequent saves fail (simulates a full or read-only disk)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Entry>> {
        match self.blob() {
            Some(blob) if !blob.trim().is_empty() => from_structured(&blob),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(OrganizerError::Storage("storage is unavailable".to_string()));
        }
        let content = to_structured(entries)?;
        let mut slot = self
            .blob
            .lock()
            .map_err(|e| OrganizerError::storage("memory storage lock poisoned", e))?;
        *slot = Some(content);
        Ok(())
    }
}
