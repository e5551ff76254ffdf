//! Add handler for the entry store

use crate::entries::{Entry, EntryDraft};
use crate::error::Result;
use crate::validation;
use crate::EntryStore;
use log::info;
use uuid::Uuid;

impl EntryStore {
    /// **Capture**: create a task or note and put it at the top of its list.
    ///
    /// The title is trimmed and must not be empty; blank optional fields are
    /// stored as absent. Returns the new entry.
    pub fn add(&mut self, draft: EntryDraft) -> Result<Entry> {
        let draft = validation::normalize_draft(draft)?;
        let entry = Entry::new(self.fresh_id(), draft, self.now());

        self.entries.prepend(entry.clone())?;
        info!("Added {} '{}'", entry.entry_type(), entry.id);

        self.persist()?;
        Ok(entry)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.entries.contains_id(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::entries::EntryType;
    use crate::{EntryDraft, EntryStore, MemoryStorage, OrganizerError};
    use chrono::NaiveDate;

    #[test]
    fn test_add_prepends_with_fresh_id() {
        let mut store = EntryStore::open(MemoryStorage::new());
        let first = store.add(EntryDraft::task("First")).unwrap();
        let second = store.add(EntryDraft::note("Second")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.entries()[0], second);
        assert_eq!(store.entries()[1], first);
    }

    #[test]
    fn test_add_normalizes_fields() {
        let mut store = EntryStore::open(MemoryStorage::new());
        let due = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let entry = store
            .add(
                EntryDraft::task("  Call plumber ")
                    .details("  ")
                    .due_date(due)
                    .contact(" 555-0100 "),
            )
            .unwrap();

        assert_eq!(entry.title, "Call plumber");
        assert_eq!(entry.entry_type(), EntryType::Task);
        assert!(entry.details.is_none());
        assert_eq!(entry.due_date, Some(due));
        assert_eq!(entry.contact.as_deref(), Some("555-0100"));
        assert!(!entry.is_completed());
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(storage.clone());
        let err = store.add(EntryDraft::note("   ")).unwrap_err();

        assert!(matches!(err, OrganizerError::Validation(_)));
        assert!(store.entries().is_empty());
        assert!(storage.blob().is_none());
    }

    #[test]
    fn test_add_persists() {
        let storage = MemoryStorage::new();
        let mut store = EntryStore::open(storage.clone());
        let entry = store.add(EntryDraft::task("Persist me")).unwrap();

        let reopened = EntryStore::open(storage);
        assert_eq!(reopened.entries(), &[entry]);
    }
}
