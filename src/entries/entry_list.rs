use crate::entries::entry::Entry;
use crate::error::{OrganizerError, Result};
use std::collections::HashSet;

/// The ordered entry collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    /// All entries in manual sort order (index 0 is shown first)
    ///
    /// Order is only changed by prepending new entries and by `move_before`.
    pub(crate) entries: Vec<Entry>,

    /// Index of every id in `entries`, kept in sync on insert and removal
    ///
    /// Not serialized; rebuilt by `from_entries`.
    pub(crate) ids: HashSet<String>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already ordered entries, rejecting duplicate ids
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !ids.insert(entry.id.clone()) {
                return Err(OrganizerError::Parse(format!(
                    "duplicate entry id '{}'",
                    entry.id
                )));
            }
        }
        Ok(Self { entries, ids })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Entry> {
        self.entries
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Find an entry by its ID
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| OrganizerError::NotFound(id.to_string()))
    }

    /// Insert a new entry at the front of the list
    pub fn prepend(&mut self, entry: Entry) -> Result<()> {
        if self.ids.contains(&entry.id) {
            return Err(OrganizerError::Validation(format!(
                "an entry with id '{}' already exists",
                entry.id
            )));
        }
        self.ids.insert(entry.id.clone());
        self.entries.insert(0, entry);
        Ok(())
    }

    /// Replace the entry `id` with the value computed from it
    ///
    /// The slot keeps its position; the id must not change.
    pub fn replace_with<F>(&mut self, id: &str, update: F) -> Result<&Entry>
    where
        F: FnOnce(&Entry) -> Result<Entry>,
    {
        let pos = self.position(id)?;
        let replacement = update(&self.entries[pos])?;
        if replacement.id != id {
            return Err(OrganizerError::InvalidTransition(format!(
                "entry id '{}' cannot be changed to '{}'",
                id, replacement.id
            )));
        }
        self.entries[pos] = replacement;
        Ok(&self.entries[pos])
    }

    /// Remove an entry and return it
    pub fn remove(&mut self, id: &str) -> Result<Entry> {
        let pos = self.position(id)?;
        self.ids.remove(id);
        Ok(self.entries.remove(pos))
    }

    /// Move `dragged_id` so it sits immediately before `target_id`
    ///
    /// Both entries must belong to the same visible list (see
    /// [`Entry::shares_list_with`]). Every other entry keeps its relative order.
    pub fn move_before(&mut self, dragged_id: &str, target_id: &str) -> Result<()> {
        if dragged_id == target_id {
            return Err(OrganizerError::InvalidTransition(format!(
                "'{}' dropped onto itself",
                dragged_id
            )));
        }

        let dragged_pos = self.position(dragged_id)?;
        let target_pos = self.position(target_id)?;

        if !self.entries[dragged_pos].shares_list_with(&self.entries[target_pos]) {
            return Err(OrganizerError::InvalidTransition(format!(
                "'{}' and '{}' belong to different lists",
                dragged_id, target_id
            )));
        }

        let moved = self.entries.remove(dragged_pos);
        // the target shifts left by one when the dragged entry was above it
        let insert_at = if dragged_pos < target_pos {
            target_pos - 1
        } else {
            target_pos
        };
        self.entries.insert(insert_at, moved);
        Ok(())
    }

    /// Swap the whole collection for `entries` (used by import)
    pub fn replace_all(&mut self, entries: Vec<Entry>) -> Result<()> {
        *self = Self::from_entries(entries)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
