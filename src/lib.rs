//! camera-menu - spreadsheet-driven camera settings menus
//!
//! Camera menus are authored as tabular documents: one row per menu path,
//! an optional trailing help column, and a configuration block with the
//! camera's metadata and icons. This crate builds those documents into
//! ordered menu trees, lets you browse, search and edit them, and keeps a
//! catalog of built-in and imported cameras.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::{Catalog, CatalogEntry};
pub use config::Config;
pub use domain::entities::{
    CameraConfig, CameraIdentity, CameraRecord, HelpMap, MenuDocument, MenuNode, MenuTree,
    HELP_PATH_SEPARATOR, MAX_MENU_DEPTH,
};
pub use domain::services::{search, serialize, EditSession, Fidelity, SearchHit};
pub use domain::value_objects::SelectionPath;
pub use error::{MenuError, MenuResult};
pub use parser::{decode_rows, encode_rows};
