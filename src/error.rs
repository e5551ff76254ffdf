//! Error types for the organizer core

use thiserror::Error;

/// Errors produced by entry store operations, the codecs and storage
#[derive(Debug, Error)]
pub enum OrganizerError {
    /// User input was rejected (for example an empty title)
    #[error("{0}")]
    Validation(String),

    /// An operation referenced an id that is not in the collection
    #[error("entry '{0}' not found")]
    NotFound(String),

    /// The requested change does not apply to the entry (or entries) involved
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Imported or stored data could not be decoded
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading or writing persisted data failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl OrganizerError {
    /// Errors the entry store swallows: they leave the collection unchanged
    /// and are never reported to the caller.
    pub fn is_absorbed(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidTransition(_))
    }

    pub(crate) fn storage(context: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::Storage(format!("{}: {}", context, err))
    }
}

pub type Result<T> = std::result::Result<T, OrganizerError>;
