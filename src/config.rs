//! TOML configuration for the organizer
//!
//! Every key is optional; a missing file means all defaults.
//!
//! ```toml
//! data_dir = "/home/me/.local/share/task-notes"
//! storage_key = "task-notes-entries-v3"
//! export_basename = "task-notes-organizer-export"
//! export_dir = "/home/me/Downloads"
//! log_level = "info"
//! ```

use crate::storage::{DEFAULT_STORAGE_KEY, FileStorage};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default base name of exported files
pub const DEFAULT_EXPORT_BASENAME: &str = "task-notes-organizer-export";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "TASK_NOTES_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted entries
    pub data_dir: PathBuf,
    /// File stem of the persisted blob inside `data_dir`
    pub storage_key: String,
    /// Base name of exported files (`<base>-YYYYMMDD_HHMMSS.<ext>`)
    pub export_basename: String,
    /// Where exports are written; defaults to `data_dir`
    pub export_dir: Option<PathBuf>,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_basename: DEFAULT_EXPORT_BASENAME.to_string(),
            export_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.storage_key.trim().is_empty() {
            anyhow::bail!("storage_key must not be empty");
        }
        Ok(config)
    }

    /// Storage backing the entry store
    pub fn storage(&self) -> FileStorage {
        FileStorage::in_dir(&self.data_dir, &self.storage_key)
    }

    pub fn export_dir(&self) -> &Path {
        self.export_dir.as_deref().unwrap_or(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_key, "task-notes-entries-v3");
        assert_eq!(config.export_basename, "task-notes-organizer-export");
        assert_eq!(config.export_dir(), Path::new("."));
        assert_eq!(
            config.storage().path(),
            Path::new("./task-notes-entries-v3.json")
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            data_dir = "/tmp/notes"
            export_dir = "/tmp/out"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/notes"));
        assert_eq!(config.export_dir(), Path::new("/tmp/out"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = [").unwrap();
        assert!(Config::load(&path).is_err());

        fs::write(&path, "storage_key = \"  \"").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
