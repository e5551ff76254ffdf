//! Completion and archive handlers for the entry store

use crate::error::Result;
use crate::validation;
use crate::EntryStore;
use log::info;

impl EntryStore {
    /// **Do/Reopen**: flip the completion state of a task.
    ///
    /// Completing stamps the current time and attaches `notes` (blank notes
    /// count as none). Reopening clears the timestamp and the notes.
    /// Notes and unknown ids are left unchanged.
    pub fn toggle_complete(&mut self, id: &str, notes: Option<&str>) -> Result<bool> {
        let id = validation::normalize_id(id);
        let notes = validation::normalize_optional(notes.map(str::to_string));
        let now = self.now();

        let outcome = self
            .entries
            .replace_with(id, |entry| entry.toggled_completion(notes, now))
            .map(|entry| {
                info!(
                    "Task '{}' {}",
                    entry.id,
                    if entry.is_completed() { "completed" } else { "reopened" }
                );
            });
        self.settle("toggle_complete", outcome)
    }

    /// **Do**: complete an open task with the given completion notes.
    ///
    /// Unlike [`EntryStore::toggle_complete`] this never reopens: an already
    /// completed task is left as it is.
    pub fn complete(&mut self, id: &str, notes: Option<&str>) -> Result<bool> {
        let id = validation::normalize_id(id);
        let notes = validation::normalize_optional(notes.map(str::to_string));
        let now = self.now();

        let outcome = self
            .entries
            .replace_with(id, |entry| entry.completed_with(notes, now))
            .map(|entry| info!("Task '{}' completed", entry.id));
        self.settle("complete", outcome)
    }

    /// **Archive/Restore**: flip the archive state of a note.
    ///
    /// Tasks and unknown ids are left unchanged.
    pub fn toggle_archive(&mut self, id: &str) -> Result<bool> {
        let id = validation::normalize_id(id);
        let now = self.now();

        let outcome = self
            .entries
            .replace_with(id, |entry| entry.toggled_archive(now))
            .map(|entry| {
                info!(
                    "Note '{}' {}",
                    entry.id,
                    if entry.is_archived() { "archived" } else { "restored" }
                );
            });
        self.settle("toggle_archive", outcome)
    }
}
