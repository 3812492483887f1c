//! Domain Entities
//!
//! - `MenuTree` / `MenuNode` - The ordered menu hierarchy
//! - `HelpMap` - Help text keyed by label path
//! - `CameraConfig` - Metadata from a document's configuration block
//! - `MenuDocument` - Tree, help and metadata loaded together
//! - `CameraRecord` - A stored user-added camera

mod camera;
mod document;
mod help;
mod menu;
mod record;

pub use camera::{split_brand_model, CameraConfig, CameraIdentity};
pub use document::MenuDocument;
pub use help::{join_help_path, HelpMap, HELP_PATH_SEPARATOR};
pub use menu::{MenuNode, MenuTree, MAX_MENU_DEPTH};
pub use record::CameraRecord;
