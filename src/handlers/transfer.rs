//! Export and import handlers for the entry store

use crate::codec::{self, ExportFormat};
use crate::error::{OrganizerError, Result};
use crate::EntryStore;
use chrono::NaiveDateTime;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

impl EntryStore {
    /// Encode the whole collection in `format`
    ///
    /// An empty collection has nothing to export and is reported as a
    /// validation error.
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        if self.entries.is_empty() {
            return Err(OrganizerError::Validation("No data to export.".to_string()));
        }
        format.encode(self.entries.as_slice())
    }

    /// Write an export to `dir` as `<basename>-<YYYYMMDD_HHMMSS>.<ext>`
    ///
    /// Returns the path of the written file.
    pub fn export_to_dir(
        &self,
        format: ExportFormat,
        dir: &Path,
        basename: &str,
        at: NaiveDateTime,
    ) -> Result<PathBuf> {
        let contents = self.export(format)?;
        fs::create_dir_all(dir)
            .map_err(|e| OrganizerError::storage(format!("Failed to create {}", dir.display()), e))?;

        let path = dir.join(codec::timestamped_filename(basename, format, at));
        fs::write(&path, contents)
            .map_err(|e| OrganizerError::storage(format!("Failed to write {}", path.display()), e))?;

        info!("Exported {} entries to {}", self.entries.len(), path.display());
        Ok(path)
    }

    /// Replace the whole collection with the entries decoded from `text`
    ///
    /// Import is destructive: nothing of the current collection is kept.
    /// When decoding fails the collection is left untouched. Returns the
    /// number of imported entries.
    pub fn import_str(&mut self, format: ExportFormat, text: &str) -> Result<usize> {
        let imported = format.decode(text).inspect_err(|e| {
            warn!("Import rejected, collection unchanged: {}", e);
        })?;

        let count = imported.len();
        self.entries.replace_all(imported)?;
        info!("Imported {} entries ({})", count, format);

        self.persist()?;
        Ok(count)
    }

    /// Import a `.json` or `.csv` file, picking the format by extension
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let format = ExportFormat::from_path(path)?;
        let text = fs::read_to_string(path)
            .map_err(|e| OrganizerError::storage(format!("Failed to read {}", path.display()), e))?;
        self.import_str(format, &text)
    }
}

#[cfg(test)]
mod tests {
    use crate::{EntryDraft, EntryStore, ExportFormat, MemoryStorage, OrganizerError};

    #[test]
    fn test_export_empty_store_is_validation_error() {
        let store = EntryStore::open(MemoryStorage::new());
        for format in [ExportFormat::Structured, ExportFormat::Tabular] {
            assert!(matches!(
                store.export(format),
                Err(OrganizerError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_import_replaces_everything() {
        let mut source = EntryStore::open(MemoryStorage::new());
        source.add(EntryDraft::task("Imported task")).unwrap();
        let json = source.export(ExportFormat::Structured).unwrap();

        let storage = MemoryStorage::new();
        let mut target = EntryStore::open(storage.clone());
        target.add(EntryDraft::note("Replaced")).unwrap();

        assert_eq!(target.import_str(ExportFormat::Structured, &json).unwrap(), 1);
        assert_eq!(target.entries(), source.entries());
        assert_eq!(EntryStore::open(storage).entries(), source.entries());
    }

    #[test]
    fn test_failed_import_leaves_collection() {
        let mut store = EntryStore::open(MemoryStorage::new());
        let kept = store.add(EntryDraft::note("Kept")).unwrap();

        let err = store
            .import_str(ExportFormat::Tabular, "id,title\n\"broken")
            .unwrap_err();
        assert!(matches!(err, OrganizerError::Parse(_)));
        assert_eq!(store.entries(), &[kept]);
    }

    #[test]
    fn test_import_empty_array_clears() {
        let mut store = EntryStore::open(MemoryStorage::new());
        store.add(EntryDraft::task("Gone")).unwrap();
        assert_eq!(store.import_str(ExportFormat::Structured, "[]").unwrap(), 0);
        assert!(store.is_empty());
    }
}
