//! Entry domain models and list logic
//!
//! This module contains the core organizer data structures:
//! - `entry`: the Entry record, its variants and state transitions
//! - `entry_list`: the ordered collection with all mutating operations
//! - `views`: derived views (active/completed/archived lists)
//! - `week`: ISO week grouping of completed tasks
//! - `serde_impl`: serialization to and from the flat wire record

mod entry;
mod entry_list;
pub(crate) mod serde_impl;
mod views;
mod week;

pub use entry::{
    Completion, Entry, EntryDraft, EntryEdit, EntryKind, EntryType, NoteState, TaskState,
    now_millis,
};
pub use entry_list::EntryList;
pub use views::ListCounts;
pub use week::{WeekGroup, WeekKey, group_by_completion_week, week_label};
