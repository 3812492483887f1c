//! Command handlers

mod browse;
mod edit;
mod transfer;

pub use browse::{cmd_dump, cmd_help, cmd_list, cmd_search, cmd_show};
pub use edit::cmd_edit;
pub use transfer::{cmd_export, cmd_import, cmd_remove};

use anyhow::{Context, Result};
use camera_menu::config::Config;
use camera_menu::presentation::factory::{create_catalog, ConcreteCatalog};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// What every command handler needs
pub struct CommandContext {
    pub config: Config,
    pub json: bool,
    pub caps: TerminalCapabilities,
}

impl CommandContext {
    pub fn new(config: Config, json: bool) -> Self {
        Self {
            config,
            json,
            caps: detect_capabilities(),
        }
    }

    pub fn catalog(&self) -> Result<ConcreteCatalog> {
        create_catalog(&self.config).context("failed to load the camera catalog")
    }

    pub fn color(&self) -> bool {
        self.caps.supports_color
    }

    pub fn unicode(&self) -> bool {
        self.caps.supports_unicode
    }
}
