//! Configuration module for camera-menu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CAMERA_MENU_*)
//! 3. Project config (.camera-menu.toml)
//! 4. User config (~/.config/camera-menu/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{find_config_file, PROJECT_CONFIG_FILE};
pub use types::{Config, EditorConfig, LibraryConfig, SearchConfig, StoreConfig};
