//! Error types for arca-core

use thiserror::Error;

/// Result type alias for arca operations
pub type Result<T> = std::result::Result<T, ArcaError>;

/// Main error type for arca operations
#[derive(Error, Debug)]
pub enum ArcaError {
    /// A domain rule on user input failed. Surfaced to the user, never a
    /// system fault.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Folder access errors
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    /// Persistence errors. Callers log these and continue; they never break
    /// the calling flow.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Import errors. The repository is left untouched on rejection.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Operating on an id that no longer exists. Treated as a soft no-op
    /// or notice, never a crash.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// User input failed a domain rule.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    #[error("Too many tags: {count} (max {max})")]
    TooManyTags { count: usize, max: usize },

    #[error("Tag too long: '{0}'")]
    TagTooLong(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Name already in use: {0}")]
    DuplicateName(String),

    #[error("{0}")]
    Other(String),
}

/// Folder access control errors.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Password checksum mismatch. Does not alter persisted state; there is
    /// no attempt counting or lockout.
    #[error("Access denied for folder {0}")]
    Denied(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    /// The folder is not encrypted, so there is nothing to unlock.
    #[error("Folder {0} is not encrypted")]
    NotEncrypted(String),
}

/// Persistence-specific errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage write failure (quota exceeded, IO error).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Import rejection. All-or-nothing: any of these leaves the live
/// repository completely untouched.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import file too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("Import file is not valid JSON: {0}")]
    Malformed(String),

    #[error("Import file missing required collection: {0}")]
    MissingCollection(&'static str),
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        PersistenceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ArcaError {
    fn from(err: serde_json::Error) -> Self {
        ArcaError::Persistence(PersistenceError::Serialization(err.to_string()))
    }
}
