//! Edit handler for the entry store

use crate::entries::EntryEdit;
use crate::error::Result;
use crate::validation;
use crate::EntryStore;

impl EntryStore {
    /// **Clarify**: replace the title, details, due date, contact and URL of an entry.
    ///
    /// Type, completion/archive state and timestamps stay as they are.
    /// An empty title is rejected; an unknown id changes nothing.
    pub fn edit(&mut self, id: &str, edit: EntryEdit) -> Result<bool> {
        let edit = validation::normalize_edit(edit)?;
        let id = validation::normalize_id(id);

        let outcome = self
            .entries
            .replace_with(id, |entry| Ok(entry.edited(edit)))
            .map(|_| ());
        self.settle("edit", outcome)
    }
}
