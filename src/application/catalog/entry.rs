//! Catalog entries

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{CameraIdentity, CameraRecord, MenuDocument};

/// Where a camera's document came from
#[derive(Debug, Clone, PartialEq)]
pub enum CameraSource {
    /// Shipped in the data directory
    Builtin { csv_path: PathBuf, css_path: PathBuf },
    /// Imported by the user and kept in the record store
    Custom(CameraRecord),
}

/// A loaded camera: its document and where it lives
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub document: MenuDocument,
    pub source: CameraSource,
}

impl CatalogEntry {
    pub fn id(&self) -> &str {
        self.document.id()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.source, CameraSource::Custom(_))
    }

    pub fn identity(&self) -> CameraIdentity {
        self.document.identity()
    }

    pub fn summary(&self) -> CameraSummary {
        let identity = self.identity();
        CameraSummary {
            id: self.id().to_string(),
            label: identity.label(),
            brand: identity.brand,
            model: identity.model,
            display_name: identity.display_name,
            custom: self.is_custom(),
        }
    }
}

/// One line of the camera list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CameraSummary {
    pub id: String,
    pub label: String,
    pub brand: String,
    pub model: String,
    pub display_name: String,
    pub custom: bool,
}

/// Cameras sharing a brand, sorted by label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandGroup {
    pub brand: String,
    pub cameras: Vec<CameraSummary>,
}
