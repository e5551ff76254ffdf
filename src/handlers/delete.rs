//! Delete handler for the entry store

use crate::error::Result;
use crate::validation;
use crate::EntryStore;
use log::info;

impl EntryStore {
    /// **Purge**: remove an entry permanently.
    ///
    /// Deleting an id that is not present is a no-op, so repeating a delete
    /// is harmless.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let id = validation::normalize_id(id);
        let outcome = self
            .entries
            .remove(id)
            .map(|entry| info!("Deleted {} '{}'", entry.entry_type(), entry.id));
        self.settle("delete", outcome)
    }
}
