//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{Fidelity, DEFAULT_PLACEHOLDER};
use crate::error::MenuResult;

use super::loader;
use super::ConfigWarning;

/// Where built-in camera documents live
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LibraryConfig {
    /// Directory of `<id>.csv` documents and their stylesheets
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Record store settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Store file; defaults to `~/.camera-menu/cameras.toml`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Editing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Label for newly added entries
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Keep icon tags and help text when saving an edited document
    #[serde(default = "default_true")]
    pub full_fidelity: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            full_fidelity: true,
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CAMERA_MENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// How edited documents are written back
    pub fn fidelity(&self) -> Fidelity {
        Fidelity::from_full(self.editor.full_fidelity)
    }
}
