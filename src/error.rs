//! Error types for camera-menu
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::infrastructure::archive::ArchiveError;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// A menu row nests deeper than the supported limit
    #[error("menu row {row} is {depth} levels deep (limit is {limit})")]
    DepthExceeded {
        depth: usize,
        limit: usize,
        row: usize,
    },

    /// An edit would nest an entry below the supported depth
    #[error("entries cannot nest more than {limit} levels deep")]
    NestingLimit { limit: usize },

    /// An index path does not resolve to a node
    #[error("no menu entry at path {path:?}")]
    InvalidPath { path: Vec<usize> },

    /// The root node cannot be renamed or deleted
    #[error("the menu root cannot be {action}")]
    RootNotEditable { action: &'static str },

    /// A sibling with the same key already exists
    #[error("an entry named '{label}' already exists at this level")]
    DuplicateEntry { label: String },

    /// No document registered under this identifier
    #[error("unknown camera '{id}'")]
    UnknownCamera { id: String },

    /// Built-in documents ship with the data directory and cannot be removed
    #[error("camera '{id}' is built in and cannot be {action}")]
    BuiltinCamera { id: String, action: &'static str },

    /// A built-in camera's stylesheet is missing from the data directory
    #[error("stylesheet for camera '{id}' not found at {}", path.display())]
    MissingStylesheet { id: String, path: std::path::PathBuf },

    /// A configuration file could not be parsed
    #[error("invalid config file {}: {message}", file.display())]
    InvalidConfig {
        file: std::path::PathBuf,
        message: String,
    },

    /// Archive import/export failed
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Record store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
