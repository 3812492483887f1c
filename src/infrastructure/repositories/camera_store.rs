//! TOML Camera Store
//!
//! Persists user-added cameras at `~/.camera-menu/cameras.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::CameraRecord;
use crate::domain::ports::{CameraStore, StoreError};

/// Environment variable that overrides the store location
pub const STORE_PATH_ENV: &str = "CAMERA_MENU_STORE_PATH";

const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TomlCameraRecord {
    id: String,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    csv_content: String,
    css_content: String,
    css_file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_data: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlStore {
    version: u32,
    #[serde(default)]
    cameras: Vec<TomlCameraRecord>,
}

pub struct TomlCameraStore {
    path: PathBuf,
}

impl TomlCameraStore {
    pub fn new() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<Vec<CameraRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access_error)?;

        let store: TomlStore = toml::from_str(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(store.cameras.into_iter().map(from_toml).collect())
    }

    fn save_to_disk(&self, records: &[CameraRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(access_error)?;
        }

        let store = TomlStore {
            version: STORE_VERSION,
            cameras: records.iter().map(to_toml).collect(),
        };
        let content = toml::to_string_pretty(&store).map_err(|e| {
            StoreError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(access_error)?;
        fs::rename(&tmp, &self.path).map_err(access_error)?;
        debug!(path = %self.path.display(), cameras = records.len(), "saved camera store");
        Ok(())
    }

    /// Run a read-modify-write cycle under the store's exclusive lock
    fn locked<T>(
        &self,
        update: impl FnOnce(&mut Vec<CameraRecord>) -> (T, bool),
    ) -> Result<T, StoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(access_error)?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = self.load_from_disk().and_then(|mut records| {
            let (value, changed) = update(&mut records);
            if changed {
                self.save_to_disk(&records)?;
            }
            Ok(value)
        });

        let _ = lock_file.unlock();
        result
    }
}

impl Default for TomlCameraStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraStore for TomlCameraStore {
    fn load_all(&self) -> Result<Vec<CameraRecord>, StoreError> {
        self.load_from_disk()
    }

    fn get(&self, id: &str) -> Result<Option<CameraRecord>, StoreError> {
        Ok(self.load_from_disk()?.into_iter().find(|r| r.id == id))
    }

    fn put(&self, record: &CameraRecord) -> Result<(), StoreError> {
        self.locked(|records| {
            match records.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record.clone(),
                None => records.push(record.clone()),
            }
            ((), true)
        })
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.locked(|records| {
            let before = records.len();
            records.retain(|r| r.id != id);
            let removed = records.len() != before;
            (removed, removed)
        })
    }
}

fn access_error(e: std::io::Error) -> StoreError {
    StoreError::AccessError {
        message: e.to_string(),
    }
}

fn default_store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".camera-menu/cameras.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.camera-menu/cameras.toml"))
}

fn from_toml(record: TomlCameraRecord) -> CameraRecord {
    CameraRecord {
        id: record.id,
        display_name: record.display_name,
        brand: record.brand,
        model: record.model,
        csv_content: record.csv_content,
        css_content: record.css_content,
        css_file_name: record.css_file_name,
        icon_data: record.icon_data,
        created_at: record.created_at,
    }
}

fn to_toml(record: &CameraRecord) -> TomlCameraRecord {
    let record = record.clone();
    TomlCameraRecord {
        id: record.id,
        display_name: record.display_name,
        brand: record.brand,
        model: record.model,
        csv_content: record.csv_content,
        css_content: record.css_content,
        css_file_name: record.css_file_name,
        icon_data: record.icon_data,
        created_at: record.created_at,
    }
}
