//! Plain-text rendering of entries and derived lists
//!
//! Used by the command-line front end. Timestamps are shown in the time zone
//! passed by the caller.

use crate::entries::{Entry, ListCounts, WeekGroup};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn local_time<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(TIME_FORMAT).to_string()
}

/// One-line summary: `- [id] title (due YYYY-MM-DD)`
pub fn format_entry_line(entry: &Entry) -> String {
    let mut line = format!("- [{}] {}", entry.id, entry.title);
    if let Some(due) = entry.due_date {
        line.push_str(&format!(" (due {})", due.format("%Y-%m-%d")));
    }
    line
}

/// Format a titled list of entries, one line each
///
/// # Arguments
/// * `heading` - List name shown above the entries
/// * `entries` - Entries in display order
pub fn format_entries(heading: &str, entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return format!("{}: none\n", heading);
    }

    let mut result = format!("{} ({}):\n", heading, entries.len());
    for entry in entries {
        result.push_str(&format_entry_line(entry));
        result.push('\n');
    }
    result
}

/// Format completed tasks under their week labels
pub fn format_week_groups<Tz>(groups: &[WeekGroup<'_>], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if groups.is_empty() {
        return "Completed tasks: none\n".to_string();
    }

    let mut result = String::from("Completed tasks:\n");
    for group in groups {
        result.push_str(&format!("{}\n", group.label));
        for entry in &group.entries {
            result.push_str(&format!("  {}", format_entry_line(entry)));
            if let Some(at) = entry.completed_at() {
                result.push_str(&format!(" [done {}]", local_time(at, tz)));
            }
            result.push('\n');
            if let Some(notes) = entry.completion_notes() {
                result.push_str(&format!("    Notes: {}\n", notes));
            }
        }
    }
    result
}

/// All fields of a single entry, one per line
pub fn format_entry_detail<Tz>(entry: &Entry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut result = format!("[{}] {}\n", entry.id, entry.title);
    result.push_str(&format!("  Type: {}\n", entry.entry_type()));

    let state = match (entry.is_task(), entry.is_active()) {
        (true, true) => "open",
        (true, false) => "completed",
        (false, true) => "active",
        (false, false) => "archived",
    };
    result.push_str(&format!("  State: {}\n", state));

    if let Some(ref details) = entry.details {
        result.push_str(&format!("  Details: {}\n", details));
    }
    if let Some(due) = entry.due_date {
        result.push_str(&format!("  Due: {}\n", due.format("%Y-%m-%d")));
    }
    if let Some(ref contact) = entry.contact {
        result.push_str(&format!("  Contact: {}\n", contact));
    }
    if let Some(ref url) = entry.url {
        result.push_str(&format!("  URL: {}\n", url));
    }

    result.push_str(&format!("  Created: {}\n", local_time(entry.created_at, tz)));
    if let Some(at) = entry.completed_at() {
        result.push_str(&format!("  Completed: {}\n", local_time(at, tz)));
    }
    if let Some(notes) = entry.completion_notes() {
        result.push_str(&format!("  Completion notes: {}\n", notes));
    }
    if let Some(at) = entry.archived_at() {
        result.push_str(&format!("  Archived: {}\n", local_time(at, tz)));
    }

    result
}

pub fn format_counts(counts: &ListCounts) -> String {
    format!(
        "Tasks: {} open, {} completed | Notes: {} active, {} archived",
        counts.active_tasks, counts.completed_tasks, counts.active_notes, counts.archived_notes
    )
}
