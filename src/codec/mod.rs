//! Export and import formats for the entry collection
//!
//! - `structured`: lossless, pretty-printed JSON (also the storage format)
//! - `tabular`: flat CSV with a fixed column set

mod structured;
mod tabular;

pub use structured::{from_structured, to_structured};
pub use tabular::{COLUMNS, escape_field, from_tabular, to_tabular};

use crate::entries::Entry;
use crate::error::{OrganizerError, Result};
use chrono::NaiveDateTime;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported exchange formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON array of entry records
    Structured,
    /// Comma-separated table
    Tabular,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Structured => "json",
            ExportFormat::Tabular => "csv",
        }
    }

    /// Pick the format from a file extension (`.json` or `.csv`)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse().map_err(OrganizerError::Validation)
    }

    pub fn encode(&self, entries: &[Entry]) -> Result<String> {
        match self {
            ExportFormat::Structured => to_structured(entries),
            ExportFormat::Tabular => Ok(to_tabular(entries)),
        }
    }

    pub fn decode(&self, text: &str) -> Result<Vec<Entry>> {
        match self {
            ExportFormat::Structured => from_structured(text),
            ExportFormat::Tabular => from_tabular(text),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "structured" => Ok(ExportFormat::Structured),
            "csv" | "tabular" => Ok(ExportFormat::Tabular),
            _ => Err(format!(
                "Unsupported format '{}'. Use json or csv",
                s
            )),
        }
    }
}

/// `base-YYYYMMDD_HHMMSS.ext`
pub fn timestamped_filename(base: &str, format: ExportFormat, at: NaiveDateTime) -> String {
    format!(
        "{}-{}.{}",
        base,
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
