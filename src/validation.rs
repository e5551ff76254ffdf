//! Input normalization and validation for entry store operations
//!
//! Titles are trimmed and must not end up empty; optional text fields are
//! trimmed and an empty result means "absent".

use crate::entries::{EntryDraft, EntryEdit};
use crate::error::{OrganizerError, Result};
use chrono::NaiveDate;

/// Trim a title, rejecting titles that are empty afterwards
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(OrganizerError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank values become `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a due date in YYYY-MM-DD format; an empty string means no due date
///
/// # Examples
/// ```
/// # use task_notes::validation::parse_due_date;
/// assert!(parse_due_date("2025-03-15").unwrap().is_some());
/// assert!(parse_due_date("").unwrap().is_none());
/// ```
pub fn parse_due_date(date_str: &str) -> Result<Option<NaiveDate>> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            OrganizerError::Validation(format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ))
        })
}

/// Trim ids coming from the presentation layer
pub fn normalize_id(id: &str) -> &str {
    id.trim()
}

/// Validate and normalize the input of an add operation
pub fn normalize_draft(draft: EntryDraft) -> Result<EntryDraft> {
    Ok(EntryDraft {
        title: validate_title(&draft.title)?,
        details: normalize_optional(draft.details),
        entry_type: draft.entry_type,
        due_date: draft.due_date,
        contact: normalize_optional(draft.contact),
        url: normalize_optional(draft.url),
    })
}

/// Validate and normalize the input of an edit operation
pub fn normalize_edit(edit: EntryEdit) -> Result<EntryEdit> {
    Ok(EntryEdit {
        title: validate_title(&edit.title)?,
        details: normalize_optional(edit.details),
        due_date: edit.due_date,
        contact: normalize_optional(edit.contact),
        url: normalize_optional(edit.url),
    })
}
