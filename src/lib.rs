//! Task & Notes Organizer Library
//!
//! This library keeps a single ordered collection of entries (tasks and
//! notes), persists it after every change and derives the lists a
//! presentation layer shows: active tasks, active notes, completed tasks
//! grouped by ISO week, and archived notes. The collection can be exported
//! to and imported from JSON and CSV.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Store Layer**: [`EntryStore`] - applies operations, then persists the collection
//! - **Domain Layer**: `entries` module - Entry model, ordered list, derived views
//! - **Persistence Layer**: `storage` and `codec` modules - blob storage and exchange formats
//!
//! # Example
//!
//! ```
//! use task_notes::{EntryDraft, EntryStore, MemoryStorage};
//!
//! # fn main() -> task_notes::Result<()> {
//! let mut store = EntryStore::open(MemoryStorage::new());
//! let rent = store.add(EntryDraft::task("Pay rent"))?;
//! store.toggle_complete(&rent.id, Some("Paid via bank"))?;
//! assert!(store.active_tasks().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod entries;
pub mod error;
pub mod formatting;
mod handlers;
pub mod storage;
pub mod validation;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

// Re-export commonly used types
pub use codec::ExportFormat;
pub use config::Config;
pub use entries::{
    Entry, EntryDraft, EntryEdit, EntryKind, EntryList, EntryType, ListCounts, WeekGroup, WeekKey,
};
pub use error::{OrganizerError, Result};
pub use storage::{FileStorage, MemoryStorage, Storage};

/// The authoritative entry collection and its persistence
///
/// Every mutating operation runs to completion, then saves the whole
/// collection in one call. Operations take `&mut self`, so there is exactly
/// one writer at a time.
///
/// Error policy:
/// - validation and parse failures are returned to the caller;
/// - unknown ids and inapplicable transitions change nothing and report `Ok(false)`;
/// - a failed save is returned, but the in-memory change is kept.
pub struct EntryStore {
    pub(crate) entries: EntryList,
    storage: Box<dyn Storage>,
    clock: Box<dyn Fn() -> DateTime<Utc>>,
    load_warning: Option<OrganizerError>,
}

impl EntryStore {
    /// Open a store over `storage`
    ///
    /// Unreadable or corrupt stored data never fails the open: the store
    /// starts empty and keeps the error in [`EntryStore::load_warning`].
    ///
    /// # Example
    /// ```no_run
    /// # use task_notes::{EntryStore, FileStorage};
    /// let store = EntryStore::open(FileStorage::new("entries.json"));
    /// if let Some(warning) = store.load_warning() {
    ///     eprintln!("Warning: {}", warning);
    /// }
    /// ```
    pub fn open(storage: impl Storage + 'static) -> Self {
        let (entries, load_warning) = match storage.load().and_then(EntryList::from_entries) {
            Ok(list) => {
                info!("Loaded {} entries", list.len());
                (list, None)
            }
            Err(e) => {
                warn!("Could not load stored entries, starting empty: {}", e);
                (EntryList::new(), Some(e))
            }
        };

        Self {
            entries,
            storage: Box::new(storage),
            clock: Box::new(entries::now_millis),
            load_warning,
        }
    }

    /// Open the file-backed store described by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::open(config.storage())
    }

    /// Replace the time source used for created/completed/archived stamps
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Error hit while loading stored data, if the store started empty because of it
    pub fn load_warning(&self) -> Option<&OrganizerError> {
        self.load_warning.as_ref()
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Save the whole collection
    pub(crate) fn persist(&self) -> Result<()> {
        self.storage.save(self.entries.as_slice()).map_err(|e| {
            warn!("Failed to save entries (in-memory state kept): {}", e);
            e
        })
    }

    /// Persist after a list operation, absorbing no-op outcomes
    ///
    /// Returns whether the collection changed.
    pub(crate) fn settle(&self, operation: &str, outcome: Result<()>) -> Result<bool> {
        match outcome {
            Ok(()) => {
                self.persist()?;
                Ok(true)
            }
            Err(e) if e.is_absorbed() => {
                debug!("{} ignored: {}", operation, e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_open_empty_storage() {
        let store = EntryStore::open(MemoryStorage::new());
        assert!(store.entries().is_empty());
        assert!(store.load_warning().is_none());
    }

    #[test]
    fn test_open_corrupt_storage_starts_empty_with_warning() {
        let store = EntryStore::open(MemoryStorage::with_blob("[{\"broken\": true"));
        assert!(store.entries().is_empty());
        assert!(matches!(
            store.load_warning(),
            Some(OrganizerError::Parse(_))
        ));
    }

    #[test]
    fn test_with_clock() {
        let fixed = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut store = EntryStore::open(MemoryStorage::new()).with_clock(move || fixed);
        let entry = store.add(EntryDraft::note("Clocked")).unwrap();
        assert_eq!(entry.created_at, fixed);
    }

    #[test]
    fn test_settle_absorbs_not_found() {
        let storage = MemoryStorage::new();
        let store = EntryStore::open(storage.clone());
        let changed = store
            .settle("delete", Err(OrganizerError::NotFound("x".into())))
            .unwrap();
        assert!(!changed);
        // nothing was saved for a no-op
        assert!(storage.blob().is_none());
    }

    #[test]
    fn test_settle_surfaces_validation() {
        let store = EntryStore::open(MemoryStorage::new());
        let err = store
            .settle("edit", Err(OrganizerError::Validation("bad".into())))
            .unwrap_err();
        assert!(matches!(err, OrganizerError::Validation(_)));
    }
}
