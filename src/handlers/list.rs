//! Read-only views of the entry store

use crate::entries::{Entry, ListCounts, WeekGroup};
use crate::validation;
use crate::EntryStore;
use chrono::{Local, TimeZone};

impl EntryStore {
    /// The whole collection in manual order
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(validation::normalize_id(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open tasks, in manual order
    pub fn active_tasks(&self) -> Vec<&Entry> {
        self.entries.active_tasks()
    }

    /// Unarchived notes, in manual order
    pub fn active_notes(&self) -> Vec<&Entry> {
        self.entries.active_notes()
    }

    /// Completed tasks grouped by the local-time ISO week of completion
    pub fn completed_tasks(&self) -> Vec<WeekGroup<'_>> {
        self.completed_tasks_in(&Local)
    }

    /// Completed tasks grouped by ISO week of completion as seen in `tz`
    pub fn completed_tasks_in<Tz: TimeZone>(&self, tz: &Tz) -> Vec<WeekGroup<'_>> {
        self.entries.completed_tasks(tz)
    }

    /// Archived notes, most recently archived first
    pub fn archived_notes(&self) -> Vec<&Entry> {
        self.entries.archived_notes()
    }

    pub fn counts(&self) -> ListCounts {
        self.entries.counts()
    }

    /// Entries whose id, title, details or completion notes contain `keyword`
    ///
    /// Matching is case-insensitive; collection order is kept.
    pub fn search(&self, keyword: &str) -> Vec<&Entry> {
        let keyword = keyword.trim().to_lowercase();
        let contains = |field: Option<&str>| {
            field.is_some_and(|text| text.to_lowercase().contains(&keyword))
        };

        self.entries
            .iter()
            .filter(|entry| {
                contains(Some(entry.id.as_str()))
                    || contains(Some(entry.title.as_str()))
                    || contains(entry.details.as_deref())
                    || contains(entry.completion_notes())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{EntryDraft, EntryStore, ListCounts, MemoryStorage};
    use chrono::Utc;

    #[test]
    fn test_views_follow_mutations() {
        let mut store = EntryStore::open(MemoryStorage::new());
        let task = store.add(EntryDraft::task("Pay rent")).unwrap();
        let note = store.add(EntryDraft::note("Idea A")).unwrap();
        assert_eq!(store.active_tasks(), vec![&task]);
        assert_eq!(store.active_notes(), vec![&note]);

        store.toggle_complete(&task.id, None).unwrap();
        store.toggle_archive(&note.id).unwrap();

        assert!(store.active_tasks().is_empty());
        assert!(store.active_notes().is_empty());
        let groups = store.completed_tasks_in(&Utc);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries[0].id, task.id);
        assert_eq!(store.archived_notes()[0].id, note.id);
        assert_eq!(
            store.counts(),
            ListCounts {
                active_tasks: 0,
                active_notes: 0,
                completed_tasks: 1,
                archived_notes: 1,
            }
        );
    }

    #[test]
    fn test_get_trims_id() {
        let mut store = EntryStore::open(MemoryStorage::new());
        let task = store.add(EntryDraft::task("Find me")).unwrap();
        assert_eq!(store.get(&format!(" {} ", task.id)), Some(&task));
        assert!(store.get("nope").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = EntryStore::open(MemoryStorage::new());
        store.add(EntryDraft::task("Call plumber").details("Kitchen sink")).unwrap();
        let note = store.add(EntryDraft::note("Garden ideas")).unwrap();
        let paid = store.add(EntryDraft::task("Rent")).unwrap();
        store.toggle_complete(&paid.id, Some("Paid via BANK")).unwrap();

        assert_eq!(store.search("SINK").len(), 1);
        assert_eq!(store.search("garden")[0].id, note.id);
        assert_eq!(store.search("bank")[0].id, paid.id);
        assert!(store.search("nothing").is_empty());
    }
}
