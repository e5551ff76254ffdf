use crate::entries::{Entry, EntryList};
use crate::error::{OrganizerError, Result};

/// Pretty-printed JSON array of every entry, in collection order
pub fn to_structured(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| OrganizerError::storage("failed to encode entries", e))
}

/// Decode a JSON array of entry records
///
/// Fails on malformed JSON, invalid records and duplicate ids.
pub fn from_structured(blob: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> =
        serde_json::from_str(blob).map_err(|e| OrganizerError::Parse(e.to_string()))?;
    Ok(EntryList::from_entries(entries)?.into_vec())
}
