//! Menu tree serializer
//!
//! Turns a tree back into document rows that the builder reads back into the
//! same tree. [`serialize`] writes labels only, so icon tags and help text
//! are lost. [`serialize_with`] can keep both.

use crate::domain::entities::{HelpMap, MenuNode, MenuTree};
use crate::parser::Row;

/// Header text of the trailing help column
pub const HELP_HEADER: &str = "help";

/// What [`serialize_with`] carries over besides labels
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeOptions<'a> {
    /// Write raw keys (icon tags included) instead of labels
    pub keep_icons: bool,
    /// Emit a trailing help column from this map
    pub help: Option<&'a HelpMap>,
}

impl<'a> SerializeOptions<'a> {
    /// Labels only
    pub fn lossy() -> Self {
        Self::default()
    }

    /// Icon tags and help text
    pub fn full(help: &'a HelpMap) -> Self {
        Self {
            keep_icons: true,
            help: Some(help),
        }
    }
}

fn header(width: usize, with_help: bool) -> Row {
    let mut header: Row = (1..=width).map(|level| format!("Level {level}")).collect();
    if with_help {
        header.push(String::new());
        header.push(HELP_HEADER.to_string());
    }
    header
}

/// Header row followed by one row per entry in pre-order, each row holding
/// the labels from the top level down to that entry.
pub fn serialize(tree: &MenuTree) -> Vec<Row> {
    serialize_with(tree, &SerializeOptions::lossy())
}

/// Serialize with optional icon tags and help column.
///
/// With a help map, rows are padded to the tree's depth and followed by an
/// always-empty spacer and the help text. The spacer is what lets the
/// builder's help column detection recognize the column again.
pub fn serialize_with(tree: &MenuTree, options: &SerializeOptions<'_>) -> Vec<Row> {
    let with_help = options.help.is_some_and(|help| !help.is_empty());
    let width = tree.depth().max(1);

    let mut rows = vec![header(width, with_help)];
    let mut writer = RowWriter {
        options,
        with_help,
        width,
        cells: Vec::new(),
        labels: Vec::new(),
        rows: &mut rows,
    };
    for child in tree.root().iter() {
        writer.visit(child);
    }
    rows
}

struct RowWriter<'o, 'r> {
    options: &'o SerializeOptions<'o>,
    with_help: bool,
    width: usize,
    cells: Vec<String>,
    labels: Vec<String>,
    rows: &'r mut Vec<Row>,
}

impl RowWriter<'_, '_> {
    fn visit(&mut self, node: &MenuNode) {
        let cell = if self.options.keep_icons {
            node.raw_key()
        } else {
            node.label()
        };
        self.cells.push(cell.to_string());
        self.labels.push(node.label().to_string());

        let mut row = self.cells.clone();
        if self.with_help {
            row.resize(self.width + 1, String::new());
            let text = self
                .options
                .help
                .and_then(|help| help.get_for(&self.labels))
                .unwrap_or_default();
            row.push(text.to_string());
        }
        self.rows.push(row);

        for child in node.iter() {
            self.visit(child);
        }

        self.cells.pop();
        self.labels.pop();
    }
}
