//! Reorder handler for the entry store

use crate::error::Result;
use crate::validation;
use crate::EntryStore;
use log::info;

impl EntryStore {
    /// **Prioritize**: drop `dragged_id` immediately before `target_id`.
    ///
    /// Only entries of the same visible list can be reordered against each
    /// other (same type, same archive state, and for tasks the same
    /// completion state). Cross-list drops, self-drops and unknown ids leave
    /// the collection unchanged.
    pub fn reorder(&mut self, dragged_id: &str, target_id: &str) -> Result<bool> {
        let dragged_id = validation::normalize_id(dragged_id);
        let target_id = validation::normalize_id(target_id);

        let outcome = self.entries.move_before(dragged_id, target_id);
        if outcome.is_ok() {
            info!("Moved '{}' before '{}'", dragged_id, target_id);
        }
        self.settle("reorder", outcome)
    }
}
