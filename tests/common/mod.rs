//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::Cell;
use std::rc::Rc;
use task_notes::{EntryStore, FileStorage};
use tempfile::TempDir;

/// Start of the simulated clock: Monday 2024-03-11 08:00 UTC
pub fn clock_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 11, 8, 0, 0).unwrap()
}

/// Clock advancing one minute per reading, so every stamp is distinct
pub fn ticking_clock() -> impl Fn() -> DateTime<Utc> + 'static {
    let ticks = Rc::new(Cell::new(0i64));
    move || {
        ticks.set(ticks.get() + 1);
        clock_start() + Duration::minutes(ticks.get())
    }
}

/// Create a file-backed store in a fresh temporary directory
pub fn get_test_store() -> (EntryStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = open_in(&dir);
    (store, dir)
}

/// Open (or reopen) the file-backed store kept in `dir`
pub fn open_in(dir: &TempDir) -> EntryStore {
    EntryStore::open(storage_in(dir)).with_clock(ticking_clock())
}

pub fn storage_in(dir: &TempDir) -> FileStorage {
    FileStorage::in_dir(dir.path(), task_notes::storage::DEFAULT_STORAGE_KEY)
}

pub fn titles(entries: &[&task_notes::Entry]) -> Vec<String> {
    entries.iter().map(|e| e.title.clone()).collect()
}
