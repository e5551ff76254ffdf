use crate::error::{OrganizerError, Result};
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use std::fmt;
use std::str::FromStr;

/// Current instant at the millisecond resolution timestamps are stored with
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Discriminator between the two entry variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Something to get done; can be completed
    Task,
    /// Reference text; can be archived
    Note,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Task => "task",
            EntryType::Note => "note",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "task" => Ok(EntryType::Task),
            "note" => Ok(EntryType::Note),
            _ => Err(format!(
                "Invalid entry type '{}'. Valid types are: task, note",
                s
            )),
        }
    }
}

/// Completion record of a finished task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Task-only state. `completion` is `Some` exactly while the task is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskState {
    pub completion: Option<Completion>,
}

/// Note-only state. `archived_at` is `Some` exactly while the note is archived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteState {
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Task(TaskState),
    Note(NoteState),
}

impl EntryKind {
    /// Fresh state for a newly created entry of the given type
    pub fn new(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Task => EntryKind::Task(TaskState::default()),
            EntryType::Note => EntryKind::Note(NoteState::default()),
        }
    }
}

/// A task or a note in the organizer
///
/// Entries are treated as values: every transition below returns a new
/// `Entry` and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Opaque unique identifier, fixed at creation
    pub id: String,
    /// Non-empty title
    pub title: String,
    /// Optional free-form details
    pub details: Option<String>,
    /// Creation instant, fixed at creation
    pub created_at: DateTime<Utc>,
    /// Optional due date (format: YYYY-MM-DD)
    pub due_date: Option<NaiveDate>,
    /// Optional contact person or address
    pub contact: Option<String>,
    /// Optional link
    pub url: Option<String>,
    /// Variant-specific state
    pub kind: EntryKind,
}

impl Entry {
    /// Build a brand new entry from already validated input
    pub fn new(id: String, draft: EntryDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            details: draft.details,
            created_at,
            due_date: draft.due_date,
            contact: draft.contact,
            url: draft.url,
            kind: EntryKind::new(draft.entry_type),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        match self.kind {
            EntryKind::Task(_) => EntryType::Task,
            EntryKind::Note(_) => EntryType::Note,
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self.kind, EntryKind::Task(_))
    }

    pub fn is_note(&self) -> bool {
        matches!(self.kind, EntryKind::Note(_))
    }

    /// Whether this is a completed task. Always false for notes.
    pub fn is_completed(&self) -> bool {
        self.completion().is_some()
    }

    /// Whether this is an archived note. Always false for tasks.
    pub fn is_archived(&self) -> bool {
        self.archived_at().is_some()
    }

    /// Active means "still on the main lists": an open task or an unarchived note
    pub fn is_active(&self) -> bool {
        !self.is_completed() && !self.is_archived()
    }

    pub fn completion(&self) -> Option<&Completion> {
        match &self.kind {
            EntryKind::Task(state) => state.completion.as_ref(),
            EntryKind::Note(_) => None,
        }
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion().map(|c| c.at)
    }

    pub fn completion_notes(&self) -> Option<&str> {
        self.completion().and_then(|c| c.notes.as_deref())
    }

    pub fn archived_at(&self) -> Option<DateTime<Utc>> {
        match &self.kind {
            EntryKind::Note(state) => state.archived_at,
            EntryKind::Task(_) => None,
        }
    }

    /// Whether `other` lives in the same visible list as `self`.
    ///
    /// Manual reordering is only allowed inside one list: same type, same
    /// archive state and, for tasks, same completion state.
    pub fn shares_list_with(&self, other: &Entry) -> bool {
        self.entry_type() == other.entry_type()
            && self.is_archived() == other.is_archived()
            && (!self.is_task() || self.is_completed() == other.is_completed())
    }

    /// Replace the user-editable fields, keeping identity, type and state
    pub fn edited(&self, edit: EntryEdit) -> Entry {
        Entry {
            title: edit.title,
            details: edit.details,
            due_date: edit.due_date,
            contact: edit.contact,
            url: edit.url,
            ..self.clone()
        }
    }

    /// Flip the completion state of a task.
    ///
    /// Completing stamps `now` and attaches `notes`. Reopening drops both
    /// timestamp and notes.
    pub fn toggled_completion(&self, notes: Option<String>, now: DateTime<Utc>) -> Result<Entry> {
        let EntryKind::Task(state) = &self.kind else {
            return Err(OrganizerError::InvalidTransition(format!(
                "'{}' is a note and cannot be completed",
                self.id
            )));
        };

        let completion = match &state.completion {
            Some(_) => None,
            // an open task never carries notes, so only the new ones can apply
            None => Some(Completion { at: now, notes }),
        };

        Ok(Entry {
            kind: EntryKind::Task(TaskState { completion }),
            ..self.clone()
        })
    }

    /// Mark an open task completed with the given, already normalized, notes
    pub fn completed_with(&self, notes: Option<String>, now: DateTime<Utc>) -> Result<Entry> {
        if self.is_completed() {
            return Err(OrganizerError::InvalidTransition(format!(
                "'{}' is already completed",
                self.id
            )));
        }
        self.toggled_completion(notes, now)
    }

    /// Flip the archive state of a note, stamping `now` when archiving
    pub fn toggled_archive(&self, now: DateTime<Utc>) -> Result<Entry> {
        let EntryKind::Note(state) = &self.kind else {
            return Err(OrganizerError::InvalidTransition(format!(
                "'{}' is a task and cannot be archived",
                self.id
            )));
        };

        let archived_at = match state.archived_at {
            Some(_) => None,
            None => Some(now),
        };

        Ok(Entry {
            kind: EntryKind::Note(NoteState { archived_at }),
            ..self.clone()
        })
    }
}

/// Input of the add operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub details: Option<String>,
    pub entry_type: EntryType,
    pub due_date: Option<NaiveDate>,
    pub contact: Option<String>,
    pub url: Option<String>,
}

impl EntryDraft {
    pub fn new(entry_type: EntryType, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: None,
            entry_type,
            due_date: None,
            contact: None,
            url: None,
        }
    }

    pub fn task(title: impl Into<String>) -> Self {
        Self::new(EntryType::Task, title)
    }

    pub fn note(title: impl Into<String>) -> Self {
        Self::new(EntryType::Note, title)
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Input of the edit operation. Absent fields are cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub title: String,
    pub details: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub contact: Option<String>,
    pub url: Option<String>,
}

impl EntryEdit {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Start from the current values of `entry`
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            details: entry.details.clone(),
            due_date: entry.due_date,
            contact: entry.contact.clone(),
            url: entry.url.clone(),
        }
    }
}
