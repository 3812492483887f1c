//! Document loading and saving
//!
//! Runs the row decoder, menu builder and configuration resolver over one
//! text, and the serializer in reverse.

use tracing::debug;

use crate::domain::entities::MenuDocument;
use crate::domain::services::config_resolver::resolve_config;
use crate::domain::services::editor::EditSession;
use crate::domain::services::menu_builder::{build_menu, split_sections};
use crate::domain::services::serializer::{serialize_with, SerializeOptions};
use crate::error::MenuResult;
use crate::parser::{decode_rows, encode_rows, Row};

/// How much of a document survives re-serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fidelity {
    /// Labels only; icon tags and help text are dropped
    Lossy,
    /// Icon tags and help column are written back
    #[default]
    Full,
}

impl Fidelity {
    pub fn from_full(full: bool) -> Self {
        if full {
            Fidelity::Full
        } else {
            Fidelity::Lossy
        }
    }
}

impl MenuDocument {
    /// Parse document text. A document with no rows is an empty document.
    pub fn parse(id: &str, text: &str) -> MenuResult<Self> {
        Self::from_rows(id, &decode_rows(text))
    }

    /// Build a document from already decoded rows
    pub fn from_rows(id: &str, rows: &[Row]) -> MenuResult<Self> {
        let (menu_rows, config_rows) = split_sections(rows);
        let built = build_menu(menu_rows)?;
        let config = resolve_config(config_rows);
        debug!(
            id,
            entries = built.tree.len(),
            icons = config.icons.len(),
            "parsed menu document"
        );
        Ok(MenuDocument::new(
            id,
            built.tree,
            built.help,
            config,
            config_rows.to_vec(),
        ))
    }

    /// Rows of this document: serialized menu, then the configuration block
    pub fn to_rows(&self, fidelity: Fidelity) -> Vec<Row> {
        let options = match fidelity {
            Fidelity::Lossy => SerializeOptions::lossy(),
            Fidelity::Full => SerializeOptions::full(self.help()),
        };
        let mut rows = serialize_with(self.tree(), &options);
        rows.extend(self.config_rows().iter().cloned());
        rows
    }

    /// Document text, ready to be written or stored
    pub fn to_csv(&self, fidelity: Fidelity) -> MenuResult<String> {
        encode_rows(self.to_rows(fidelity))
    }

    /// Apply an edit session's working copy
    pub fn apply(&self, session: &EditSession) -> Self {
        self.with_edits(session.tree().clone(), session.help().clone())
    }
}
