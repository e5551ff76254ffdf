//! Serialization and deserialization implementations for Entry
//!
//! Entries travel as a flat record with camelCase keys (`isCompleted`,
//! `completedAt`, ...) so that exported files stay readable by other tools.
//! The record is converted to and from the typed [`Entry`] here; the
//! conversion is where malformed input gets rejected.

use super::entry::{Completion, Entry, EntryKind, EntryType, NoteState, TaskState};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Flat wire shape shared by the structured and tabular codecs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntryRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub created_at: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
}

/// Render a timestamp as RFC 3339 in UTC (`2024-03-11T08:00:00.000Z`)
///
/// Millisecond precision is used whenever it is lossless; finer timestamps
/// keep all their digits so that decoding gives back the same instant.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    let format = if at.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    at.to_rfc3339_opts(format, true)
}

pub(crate) fn parse_timestamp(value: &str, field: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid {} '{}': {}", field, value, e))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_optional_timestamp(
    value: Option<String>,
    field: &str,
) -> Result<Option<DateTime<Utc>>, String> {
    non_empty(value)
        .map(|v| parse_timestamp(&v, field))
        .transpose()
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        let completion = entry.completion();
        EntryRecord {
            id: entry.id.clone(),
            title: entry.title.clone(),
            details: entry.details.clone(),
            entry_type: entry.entry_type().as_str().to_string(),
            created_at: format_timestamp(&entry.created_at),
            is_completed: completion.is_some(),
            completed_at: completion.map(|c| format_timestamp(&c.at)),
            completion_notes: completion.and_then(|c| c.notes.clone()),
            due_date: entry
                .due_date
                .map(|d| d.format(DUE_DATE_FORMAT).to_string()),
            contact: entry.contact.clone(),
            url: entry.url.clone(),
            is_archived: entry.is_archived(),
            archived_at: entry.archived_at().map(|at| format_timestamp(&at)),
        }
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = String;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err("entry id must not be empty".to_string());
        }
        if record.title.trim().is_empty() {
            return Err(format!("entry '{}' has an empty title", record.id));
        }

        let entry_type: EntryType = record.entry_type.parse()?;
        let created_at = parse_timestamp(&record.created_at, "createdAt")?;
        let completed_at = parse_optional_timestamp(record.completed_at, "completedAt")?;
        let archived_at = parse_optional_timestamp(record.archived_at, "archivedAt")?;

        let kind = match entry_type {
            EntryType::Task => {
                if record.is_archived || archived_at.is_some() {
                    return Err(format!("task '{}' cannot be archived", record.id));
                }
                let completion = match (record.is_completed, completed_at) {
                    (true, Some(at)) => Some(Completion {
                        at,
                        notes: non_empty(record.completion_notes),
                    }),
                    // notes left on an open task carry no meaning and are dropped
                    (false, None) => None,
                    (true, None) => {
                        return Err(format!(
                            "task '{}' is completed but has no completedAt",
                            record.id
                        ));
                    }
                    (false, Some(_)) => {
                        return Err(format!(
                            "task '{}' has completedAt but is not completed",
                            record.id
                        ));
                    }
                };
                EntryKind::Task(TaskState { completion })
            }
            EntryType::Note => {
                if record.is_completed || completed_at.is_some() {
                    return Err(format!("note '{}' cannot be completed", record.id));
                }
                if record.is_archived != archived_at.is_some() {
                    return Err(format!(
                        "note '{}' has inconsistent isArchived/archivedAt",
                        record.id
                    ));
                }
                EntryKind::Note(NoteState { archived_at })
            }
        };

        let due_date = non_empty(record.due_date)
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), DUE_DATE_FORMAT)
                    .map_err(|e| format!("invalid dueDate '{}': {}", d, e))
            })
            .transpose()?;

        Ok(Entry {
            id: record.id,
            title: record.title,
            details: non_empty(record.details),
            created_at,
            due_date,
            contact: non_empty(record.contact),
            url: non_empty(record.url),
            kind,
        })
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EntryRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = EntryRecord::deserialize(deserializer)?;
        Entry::try_from(record).map_err(D::Error::custom)
    }
}

impl Serialize for EntryType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
