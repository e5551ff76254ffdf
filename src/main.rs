//! Task & Notes Organizer - command-line front end
//!
//! The organizer itself lives in the `task_notes` library; this binary only
//! parses arguments, calls the entry store and prints the results.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use task_notes::config::CONFIG_PATH_ENV;
use task_notes::{
    Config, EntryDraft, EntryEdit, EntryStore, EntryType, ExportFormat, formatting, validation,
};

/// Task & Notes Organizer - capture, complete, archive and reorder tasks and notes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, env = CONFIG_PATH_ENV, default_value = "task-notes.toml")]
    config: PathBuf,

    /// Directory holding the entry data (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a task or note at the top of its list
    Add {
        title: String,
        /// Create a note instead of a task
        #[arg(long)]
        note: bool,
        #[arg(long)]
        details: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Change the text fields of an entry; an empty value clears a field
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        details: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Complete an open task, or reopen a completed one
    Toggle {
        id: String,
        /// Completion notes, recorded when the task is completed
        #[arg(long)]
        notes: Option<String>,
    },
    /// Archive an active note, or restore an archived one
    Archive { id: String },
    /// Delete an entry permanently
    Delete { id: String },
    /// Move an entry immediately before another entry of the same list
    Move { id: String, before: String },
    /// Show the entry lists
    List {
        #[arg(long, value_enum, default_value_t = View::All)]
        view: View,
        /// Only show entries containing this keyword
        #[arg(long)]
        search: Option<String>,
    },
    /// Show every field of one entry
    Show { id: String },
    /// Write the whole collection to a timestamped file
    Export {
        #[arg(long, default_value = "json")]
        format: ExportFormat,
        /// Output directory (defaults to the configured export directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the whole collection with the contents of a .json or .csv file
    Import {
        file: PathBuf,
        /// Confirm that existing entries are discarded
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum View {
    Tasks,
    Notes,
    Completed,
    Archived,
    All,
}

fn print_lists(store: &EntryStore, view: View) {
    let tz = Local;
    if matches!(view, View::Tasks | View::All) {
        print!("{}", formatting::format_entries("Active tasks", &store.active_tasks()));
    }
    if matches!(view, View::Notes | View::All) {
        print!("{}", formatting::format_entries("Active notes", &store.active_notes()));
    }
    if matches!(view, View::Completed | View::All) {
        print!(
            "{}",
            formatting::format_week_groups(&store.completed_tasks(), &tz)
        );
    }
    if matches!(view, View::Archived | View::All) {
        print!(
            "{}",
            formatting::format_entries("Archived notes", &store.archived_notes())
        );
    }
    if view == View::All {
        println!("{}", formatting::format_counts(&store.counts()));
    }
}

fn run(store: &mut EntryStore, config: &Config, command: Command) -> Result<()> {
    match command {
        Command::Add {
            title,
            note,
            details,
            due,
            contact,
            url,
        } => {
            let entry_type = if note { EntryType::Note } else { EntryType::Task };
            let draft = EntryDraft {
                title,
                details,
                entry_type,
                due_date: due.as_deref().map(validation::parse_due_date).transpose()?.flatten(),
                contact,
                url,
            };
            let entry = store.add(draft)?;
            println!("Created {} with ID: {}", entry.entry_type(), entry.id);
        }
        Command::Edit {
            id,
            title,
            details,
            due,
            contact,
            url,
        } => {
            let Some(current) = store.get(&id) else {
                bail!("Entry '{}' not found", id.trim());
            };
            let current = EntryEdit::from_entry(current);
            let due_date = match due {
                Some(value) => validation::parse_due_date(&value)?,
                None => current.due_date,
            };
            let edit = EntryEdit {
                title: title.unwrap_or(current.title),
                // an empty value is normalized away, clearing the field
                details: details.or(current.details),
                due_date,
                contact: contact.or(current.contact),
                url: url.or(current.url),
            };
            store.edit(&id, edit)?;
            println!("Updated {}", id.trim());
        }
        Command::Toggle { id, notes } => {
            if !store.toggle_complete(&id, notes.as_deref())? {
                bail!("No task with ID '{}'", id.trim());
            }
            if let Some(entry) = store.get(&id) {
                let state = if entry.is_completed() { "Completed" } else { "Reopened" };
                println!("{} {}", state, entry.id);
            }
        }
        Command::Archive { id } => {
            if !store.toggle_archive(&id)? {
                bail!("No note with ID '{}'", id.trim());
            }
            if let Some(entry) = store.get(&id) {
                let state = if entry.is_archived() { "Archived" } else { "Restored" };
                println!("{} {}", state, entry.id);
            }
        }
        Command::Delete { id } => {
            if store.delete(&id)? {
                println!("Deleted {}", id.trim());
            } else {
                println!("Nothing to delete for '{}'", id.trim());
            }
        }
        Command::Move { id, before } => {
            if !store.reorder(&id, &before)? {
                bail!(
                    "Cannot move '{}' before '{}': both must exist and share a list",
                    id.trim(),
                    before.trim()
                );
            }
            println!("Moved {} before {}", id.trim(), before.trim());
        }
        Command::List { view, search } => match search {
            Some(keyword) => print!(
                "{}",
                formatting::format_entries("Matches", &store.search(&keyword))
            ),
            None => print_lists(store, view),
        },
        Command::Show { id } => {
            let Some(entry) = store.get(&id) else {
                bail!("Entry '{}' not found", id.trim());
            };
            print!("{}", formatting::format_entry_detail(entry, &Local));
        }
        Command::Export { format, out } => {
            let dir = out.unwrap_or_else(|| config.export_dir().to_path_buf());
            let path = store.export_to_dir(
                format,
                &dir,
                &config.export_basename,
                Local::now().naive_local(),
            )?;
            println!("Exported {} entries to {}", store.len(), path.display());
        }
        Command::Import { file, yes } => {
            if !yes && !store.is_empty() {
                bail!(
                    "Importing replaces all {} existing entries. Re-run with --yes to confirm",
                    store.len()
                );
            }
            let count = store
                .import_file(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            println!("Imported {} entries", count);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let mut store = EntryStore::from_config(&config);
    if let Some(warning) = store.load_warning() {
        eprintln!("Warning: stored entries could not be loaded ({}); starting empty", warning);
    }

    run(&mut store, &config, args.command)
}
