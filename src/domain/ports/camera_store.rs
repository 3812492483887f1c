//! CameraStore port
//!
//! Persists user-added cameras, one record per id.

use std::path::PathBuf;

use crate::domain::entities::CameraRecord;

pub trait CameraStore: Send + Sync {
    /// Every stored record, oldest first
    fn load_all(&self) -> Result<Vec<CameraRecord>, StoreError>;
    fn get(&self, id: &str) -> Result<Option<CameraRecord>, StoreError>;
    /// Insert or replace the record with the same id
    fn put(&self, record: &CameraRecord) -> Result<(), StoreError>;
    /// Remove a record; returns false if there was none
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access camera store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize camera store: {message}")]
    SerializationError { message: String },

    #[error(
        "camera store corrupted: {path}\n  → Fix: Move the file aside and re-import your cameras\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
