//! Menu document entity
//!
//! One loaded camera menu: the tree, its help text, the camera metadata and
//! the configuration rows they were read from. The parts are built together
//! and replaced together; nothing edits them in place.

use serde::Serialize;

use super::{CameraConfig, CameraIdentity, HelpMap, MenuTree};
use crate::parser::Row;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuDocument {
    id: String,
    tree: MenuTree,
    help: HelpMap,
    config: CameraConfig,
    /// Sentinel row onward, kept verbatim so a saved document loses nothing
    #[serde(skip)]
    config_rows: Vec<Row>,
}

impl MenuDocument {
    pub fn new(
        id: impl Into<String>,
        tree: MenuTree,
        help: HelpMap,
        config: CameraConfig,
        config_rows: Vec<Row>,
    ) -> Self {
        Self {
            id: id.into(),
            tree,
            help,
            config,
            config_rows,
        }
    }

    /// The document shown for an id with no content: no entries, no
    /// metadata beyond what the id implies.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn help(&self) -> &HelpMap {
        &self.help
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn config_rows(&self) -> &[Row] {
        &self.config_rows
    }

    /// Brand, model, display name and stylesheet with fallbacks applied
    pub fn identity(&self) -> CameraIdentity {
        self.config.identity(&self.id)
    }

    /// A new document with an edited tree and help map; metadata and
    /// configuration rows carry over unchanged.
    pub fn with_edits(&self, tree: MenuTree, help: HelpMap) -> Self {
        Self {
            id: self.id.clone(),
            tree,
            help,
            config: self.config.clone(),
            config_rows: self.config_rows.clone(),
        }
    }
}
