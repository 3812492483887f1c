//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive` - Zip bundle import/export
//! - `library` - Built-in documents in a data directory
//! - `repositories/` - Record store implementations

pub mod archive;
pub mod library;
pub mod repositories;

pub use archive::{read_bundle, write_bundle, ArchiveError, BundleContents, BundleExport};
pub use library::{scan_library, LibraryFile};
pub use repositories::TomlCameraStore;
