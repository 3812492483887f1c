//! Catalog use case

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{TimeDelta, Utc};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::domain::entities::{CameraRecord, MenuDocument};
use crate::domain::ports::CameraStore;
use crate::domain::services::{EditSession, Fidelity};
use crate::error::{MenuError, MenuResult};
use crate::infrastructure::library::{scan_library, stylesheet_path, write_document};
use crate::infrastructure::{read_bundle, write_bundle, BundleExport};

use super::entry::{BrandGroup, CameraSource, CatalogEntry};
use super::import::{prepare_record, record_id};

/// Loaded cameras plus the store that persists the user-added ones
pub struct Catalog<S>
where
    S: CameraStore,
{
    store: S,
    entries: IndexMap<String, CatalogEntry>,
    fidelity: Fidelity,
}

impl<S> Catalog<S>
where
    S: CameraStore,
{
    /// An empty catalog over a store
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: IndexMap::new(),
            fidelity: Fidelity::default(),
        }
    }

    /// How documents are written back on commit
    pub fn with_fidelity(mut self, fidelity: Fidelity) -> Self {
        self.fidelity = fidelity;
        self
    }

    /// Load built-in documents from `data_dir` (when given) and every
    /// stored record.
    ///
    /// A document that fails to parse is skipped with a warning; a store
    /// that cannot be read fails the load.
    pub fn load(store: S, data_dir: Option<&Path>) -> MenuResult<Self> {
        let mut catalog = Self::new(store);

        if let Some(dir) = data_dir {
            for file in scan_library(dir)? {
                let document = match MenuDocument::parse(&file.id, &file.csv_content) {
                    Ok(document) => document,
                    Err(e) => {
                        warn!(id = %file.id, error = %e, "skipping built-in camera");
                        continue;
                    }
                };
                let css_path = stylesheet_path(dir, &document.identity().css_file);
                catalog.register(CatalogEntry {
                    document,
                    source: CameraSource::Builtin {
                        csv_path: file.csv_path,
                        css_path,
                    },
                });
            }
        }

        for record in catalog.store.load_all()? {
            match MenuDocument::parse(&record.id, &record.csv_content) {
                Ok(document) => catalog.register(CatalogEntry {
                    document,
                    source: CameraSource::Custom(record),
                }),
                Err(e) => warn!(id = %record.id, error = %e, "skipping stored camera"),
            }
        }

        debug!(cameras = catalog.len(), "loaded camera catalog");
        Ok(catalog)
    }

    fn register(&mut self, entry: CatalogEntry) {
        let id = entry.id().to_string();
        if self.entries.insert(id.clone(), entry).is_some() {
            warn!(%id, "camera id registered twice; keeping the later one");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Entry for an id, or [`MenuError::UnknownCamera`]
    pub fn entry(&self, id: &str) -> MenuResult<&CatalogEntry> {
        self.get(id).ok_or_else(|| MenuError::UnknownCamera { id: id.to_string() })
    }

    /// The document for an id; an unknown id yields an empty document
    pub fn document_or_empty(&self, id: &str) -> MenuDocument {
        match self.get(id) {
            Some(entry) => entry.document.clone(),
            None => {
                debug!(%id, "no content for camera; using an empty document");
                MenuDocument::empty(id)
            }
        }
    }

    /// Cameras grouped by brand. Brands and the cameras within each brand
    /// are sorted by label.
    pub fn grouped_by_brand(&self) -> Vec<BrandGroup> {
        let mut groups: BTreeMap<String, Vec<_>> = BTreeMap::new();
        for entry in self.entries.values() {
            let summary = entry.summary();
            groups.entry(summary.brand.clone()).or_default().push(summary);
        }
        groups
            .into_iter()
            .map(|(brand, mut cameras)| {
                cameras.sort_by(|a, b| a.label.cmp(&b.label));
                BrandGroup { brand, cameras }
            })
            .collect()
    }

    /// Import a bundle archive as a new user-added camera.
    ///
    /// Nothing is stored unless the bundle is complete and its document
    /// parses.
    pub fn import_archive(
        &mut self,
        bytes: &[u8],
        custom_name: Option<&str>,
    ) -> MenuResult<&CatalogEntry> {
        let contents = read_bundle(bytes)?;
        let mut record = prepare_record(contents, custom_name, Utc::now())?;
        let mut stamp = record.created_at;
        while self.entries.contains_key(&record.id) {
            stamp += TimeDelta::milliseconds(1);
            record.id = record_id(&record.csv_content, stamp);
        }
        record.created_at = stamp;
        let document = MenuDocument::parse(&record.id, &record.csv_content)?;

        self.store.put(&record)?;
        info!(id = %record.id, name = %record.display_name, "imported camera");

        let id = record.id.clone();
        self.register(CatalogEntry {
            document,
            source: CameraSource::Custom(record),
        });
        self.entry(&id)
    }

    /// Remove a user-added camera and its stored record
    pub fn remove(&mut self, id: &str) -> MenuResult<CameraRecord> {
        let entry = self.entry(id)?;
        let CameraSource::Custom(_) = &entry.source else {
            return Err(MenuError::BuiltinCamera {
                id: id.to_string(),
                action: "removed",
            });
        };

        if !self.store.delete(id)? {
            warn!(%id, "camera was missing from the store");
        }
        match self.entries.shift_remove(id) {
            Some(CatalogEntry {
                source: CameraSource::Custom(record),
                ..
            }) => {
                info!(%id, "removed camera");
                Ok(record)
            }
            _ => Err(MenuError::UnknownCamera { id: id.to_string() }),
        }
    }

    /// Build a bundle archive for any camera
    pub fn export_archive(&self, id: &str) -> MenuResult<Vec<u8>> {
        let entry = self.entry(id)?;
        let identity = entry.identity();
        let icons: Vec<(String, String)> = entry
            .document
            .config()
            .icons
            .iter()
            .map(|(name, data)| (name.clone(), data.clone()))
            .collect();

        let (csv_content, css_content, icon_data) = match &entry.source {
            CameraSource::Custom(record) => (
                record.csv_content.clone(),
                record.css_content.clone(),
                record.icon_data.clone(),
            ),
            CameraSource::Builtin { csv_path, css_path } => {
                (fs::read_to_string(csv_path)?, read_stylesheet(id, css_path)?, None)
            }
        };

        let bytes = write_bundle(&BundleExport {
            css_file_name: &identity.css_file,
            csv_content: &csv_content,
            css_content: &css_content,
            icon_data: icon_data.as_deref(),
            icons: &icons,
        })?;
        info!(%id, bytes = bytes.len(), "exported camera");
        Ok(bytes)
    }

    /// Save an edit session's tree and help back to its document.
    ///
    /// User-added cameras are written to the store, built-in ones to their
    /// file in the data directory. On failure the loaded document is left
    /// as it was.
    pub fn commit(&mut self, session: &EditSession) -> MenuResult<&CatalogEntry> {
        let id = session.document_id().to_string();
        let fidelity = self.fidelity;
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| MenuError::UnknownCamera { id: id.clone() })?;

        let csv = entry.document.apply(session).to_csv(fidelity)?;
        let saved = MenuDocument::parse(&id, &csv)?;

        match &mut entry.source {
            CameraSource::Custom(record) => {
                let updated = CameraRecord {
                    csv_content: csv,
                    ..record.clone()
                };
                self.store.put(&updated)?;
                *record = updated;
            }
            CameraSource::Builtin { csv_path, .. } => write_document(csv_path, &csv)?,
        }
        entry.document = saved;
        info!(%id, ?fidelity, "committed menu edits");
        Ok(entry)
    }
}

fn read_stylesheet(id: &str, path: &Path) -> MenuResult<String> {
    if !path.is_file() {
        return Err(MenuError::MissingStylesheet {
            id: id.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}
