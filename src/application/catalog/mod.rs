//! Camera Catalog
//!
//! Every camera the tool knows about, keyed by document id.
//!
//! This module handles:
//! - Loading built-in documents from the data directory
//! - Loading user-added cameras from the record store
//! - Importing and exporting bundle archives
//! - Committing an edit session back to wherever the document lives

mod entry;
mod import;
mod use_case;

pub use entry::{BrandGroup, CameraSource, CameraSummary, CatalogEntry};
pub use use_case::Catalog;
