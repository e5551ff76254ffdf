//! Derived views over an EntryList
//!
//! Views are recomputed on every call and borrow from the list, so they
//! always reflect the latest mutation.

use super::entry::Entry;
use super::entry_list::EntryList;
use super::week::{WeekGroup, group_by_completion_week};
use chrono::TimeZone;

/// Sizes of the two main lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCounts {
    pub active_tasks: usize,
    pub active_notes: usize,
    pub completed_tasks: usize,
    pub archived_notes: usize,
}

impl EntryList {
    /// Open tasks, in manual order
    pub fn active_tasks(&self) -> Vec<&Entry> {
        self.iter()
            .filter(|e| e.is_task() && !e.is_completed())
            .collect()
    }

    /// Unarchived notes, in manual order
    pub fn active_notes(&self) -> Vec<&Entry> {
        self.iter()
            .filter(|e| e.is_note() && !e.is_archived())
            .collect()
    }

    /// Completed tasks grouped by ISO week of completion in `tz`, newest week first
    pub fn completed_tasks<Tz: TimeZone>(&self, tz: &Tz) -> Vec<WeekGroup<'_>> {
        group_by_completion_week(self.iter().filter(|e| e.is_completed()), tz)
    }

    /// Archived notes, most recently archived first
    pub fn archived_notes(&self) -> Vec<&Entry> {
        let mut notes: Vec<&Entry> = self.iter().filter(|e| e.is_archived()).collect();
        notes.sort_by(|a, b| b.archived_at().cmp(&a.archived_at()));
        notes
    }

    pub fn counts(&self) -> ListCounts {
        self.iter().fold(ListCounts::default(), |mut counts, e| {
            match (e.is_task(), e.is_active()) {
                (true, true) => counts.active_tasks += 1,
                (true, false) => counts.completed_tasks += 1,
                (false, true) => counts.active_notes += 1,
                (false, false) => counts.archived_notes += 1,
            }
            counts
        })
    }
}
