//! Comma-separated export of the entry collection
//!
//! Quoting follows the usual CSV rule: a field containing `"`, `,`, `\n` or
//! `\r` is wrapped in quotes with inner quotes doubled. Absent values are
//! empty fields.

use crate::entries::serde_impl::EntryRecord;
use crate::entries::{Entry, EntryList};
use crate::error::{OrganizerError, Result};
use std::borrow::Cow;
use std::collections::HashMap;

/// Column set of the tabular format, in output order
pub const COLUMNS: [&str; 13] = [
    "id",
    "title",
    "details",
    "type",
    "createdAt",
    "isCompleted",
    "completedAt",
    "completionNotes",
    "dueDate",
    "contact",
    "url",
    "isArchived",
    "archivedAt",
];

pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn record_fields(record: &EntryRecord) -> [String; 13] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        record.id.clone(),
        record.title.clone(),
        opt(&record.details),
        record.entry_type.clone(),
        record.created_at.clone(),
        record.is_completed.to_string(),
        opt(&record.completed_at),
        opt(&record.completion_notes),
        opt(&record.due_date),
        opt(&record.contact),
        opt(&record.url),
        record.is_archived.to_string(),
        opt(&record.archived_at),
    ]
}

/// Header row plus one row per entry, rows separated by `\n`
pub fn to_tabular(entries: &[Entry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(COLUMNS.join(","));
    for entry in entries {
        let fields = record_fields(&EntryRecord::from(entry));
        let row: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_field(f)).collect();
        rows.push(row.join(","));
    }
    rows.join("\n")
}

/// Split CSV text into rows of unescaped fields
fn parse_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        // a closed quoted field must end right at a separator
        let at_separator = c == ',' || c == '\n' || (c == '\r' && chars.peek() == Some(&'\n'));
        if quoted && !at_separator {
            return Err(OrganizerError::Parse(format!(
                "row {}: unexpected text after closing quote",
                rows.len() + 1
            )));
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
                quoted = false;
            }
            '"' => {
                return Err(OrganizerError::Parse(format!(
                    "row {}: unexpected quote inside field",
                    rows.len() + 1
                )));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(OrganizerError::Parse(format!(
            "row {}: unterminated quoted field",
            rows.len() + 1
        )));
    }
    if !field.is_empty() || !row.is_empty() || quoted {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}

fn parse_bool(value: &str, column: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        other => Err(format!("invalid {} '{}'", column, other)),
    }
}

/// Decode the tabular format back into entries
///
/// Columns are matched by header name, so their order does not matter.
/// Blank lines are skipped.
pub fn from_tabular(text: &str) -> Result<Vec<Entry>> {
    let mut rows = parse_rows(text)?
        .into_iter()
        .filter(|r| !(r.len() == 1 && r[0].trim().is_empty()));

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let index: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim(), i))
        .collect();
    if let Some(missing) = COLUMNS.iter().find(|c| !index.contains_key(**c)) {
        return Err(OrganizerError::Parse(format!(
            "missing column '{}' in header",
            missing
        )));
    }

    let mut entries = Vec::new();
    for (n, row) in rows.enumerate() {
        let row_number = n + 2;
        if row.len() != header.len() {
            return Err(OrganizerError::Parse(format!(
                "row {}: expected {} fields, found {}",
                row_number,
                header.len(),
                row.len()
            )));
        }

        let get = |column: &str| row[index[column]].clone();
        let opt = |column: &str| Some(get(column)).filter(|v| !v.is_empty());

        let record = (|| -> std::result::Result<EntryRecord, String> {
            Ok(EntryRecord {
                id: get("id"),
                title: get("title"),
                details: opt("details"),
                entry_type: get("type"),
                created_at: get("createdAt"),
                is_completed: parse_bool(&get("isCompleted"), "isCompleted")?,
                completed_at: opt("completedAt"),
                completion_notes: opt("completionNotes"),
                due_date: opt("dueDate"),
                contact: opt("contact"),
                url: opt("url"),
                is_archived: parse_bool(&get("isArchived"), "isArchived")?,
                archived_at: opt("archivedAt"),
            })
        })();

        let entry = record
            .and_then(Entry::try_from)
            .map_err(|e| OrganizerError::Parse(format!("row {}: {}", row_number, e)))?;
        entries.push(entry);
    }

    Ok(EntryList::from_entries(entries)?.into_vec())
}
