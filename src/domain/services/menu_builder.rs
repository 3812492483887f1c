//! Menu tree builder
//!
//! Folds the menu rows of a document into an ordered `MenuTree` plus its
//! `HelpMap`. Row order is display order.
//!
//! Two spreadsheet conventions are honored:
//! - carry-forward: a blank cell followed by content further right repeats
//!   the previous row's value in that column
//! - help column: a trailing column of free text, auto-detected per
//!   document by [`detect_help_column`]

use tracing::{debug, trace};

use crate::domain::entities::{HelpMap, MenuNode, MenuTree, MAX_MENU_DEPTH};
use crate::domain::value_objects::strip_icon_tags;
use crate::error::{MenuError, MenuResult};
use crate::parser::{is_blank_row, Row};

/// First-column marker that starts the configuration block
pub const CONFIG_SENTINEL: &str = "camera_menu_config";

/// Result of building a document's menu section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltMenu {
    pub tree: MenuTree,
    pub help: HelpMap,
}

fn is_sentinel(row: &[String]) -> bool {
    row.first().is_some_and(|cell| cell == CONFIG_SENTINEL)
}

fn is_filled(cell: &str) -> bool {
    !cell.trim().is_empty()
}

/// Index of the sentinel row, if the document has a configuration block
pub fn sentinel_index(rows: &[Row]) -> Option<usize> {
    rows.iter().position(|row| is_sentinel(row))
}

/// Split decoded rows into `(menu rows, configuration rows)`.
///
/// The first row is a header and belongs to neither. Configuration rows
/// start with the sentinel row itself.
pub fn split_sections(rows: &[Row]) -> (&[Row], &[Row]) {
    match sentinel_index(rows) {
        Some(index) => (rows.get(1..index).unwrap_or(&[]), &rows[index..]),
        None => (rows.get(1..).unwrap_or(&[]), &[]),
    }
}

/// Find the document's help column.
///
/// The first non-blank menu row whose last cell is filled and which has a
/// blank cell strictly between column 1 and that last cell fixes the help
/// column at its last index. Documents without such a row have none.
pub fn detect_help_column(menu_rows: &[Row]) -> Option<usize> {
    for row in menu_rows {
        if is_blank_row(row) {
            continue;
        }
        if is_sentinel(row) {
            break;
        }

        let last = row.len() - 1;
        if !is_filled(&row[last]) {
            continue;
        }
        if (1..last).any(|i| !is_filled(&row[i])) {
            return Some(last);
        }
    }
    None
}

/// Fill blank cells from the previous row where content follows them.
///
/// Only columns left of the help column take part (the whole row when the
/// document has none).
pub fn carry_forward(cells: &mut [String], previous: &[String], help_column: Option<usize>) {
    if previous.is_empty() {
        return;
    }
    let limit = help_column.unwrap_or(cells.len()).min(cells.len());

    for i in 0..limit {
        if is_filled(&cells[i]) {
            continue;
        }
        let has_later = cells[i + 1..limit].iter().any(|cell| is_filled(cell));
        if !has_later {
            continue;
        }
        if let Some(value) = previous.get(i).filter(|value| is_filled(value)) {
            cells[i] = value.clone();
        }
    }
}

/// Number of levels a plain row descends before its first blank segment
fn plain_depth(cells: &[String]) -> usize {
    cells.iter().take_while(|cell| is_filled(cell)).count()
}

/// Recursive descent insertion of one row's segments.
///
/// A blank segment ends the row without creating a node; an existing key
/// keeps its position and children.
fn insert_segments(node: &mut MenuNode, segments: &[String]) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    let key = first.trim();
    if key.is_empty() {
        return;
    }
    insert_segments(node.ensure_child(key), rest);
}

fn check_depth(depth: usize, row: usize) -> MenuResult<()> {
    if depth > MAX_MENU_DEPTH {
        return Err(MenuError::DepthExceeded {
            depth,
            limit: MAX_MENU_DEPTH,
            row,
        });
    }
    Ok(())
}

/// Build the tree and help map from a document's menu rows.
///
/// `menu_rows` excludes the header row (see [`split_sections`]).
pub fn build_menu(menu_rows: &[Row]) -> MenuResult<BuiltMenu> {
    let help_column = detect_help_column(menu_rows);
    if let Some(column) = help_column {
        debug!(column, "detected help column");
    }

    let mut built = BuiltMenu::default();
    let mut previous: Row = Vec::new();

    for (offset, row) in menu_rows.iter().enumerate() {
        if row.is_empty() || is_sentinel(row) {
            break;
        }
        // 1-based document line, counting the header
        let line = offset + 2;

        let mut cells = row.clone();
        carry_forward(&mut cells, &previous, help_column);

        let help_text = help_column
            .filter(|&column| column < cells.len())
            .map(|column| cells[column].trim())
            .filter(|text| !text.is_empty());

        match (help_column, help_text) {
            (Some(column), Some(text)) => {
                let path: Vec<&str> = cells[..column]
                    .iter()
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .collect();
                if path.is_empty() {
                    trace!(line, "help row without a path");
                } else {
                    check_depth(path.len(), line)?;
                    let mut node = built.tree.root_mut();
                    for key in &path {
                        node = node.ensure_child(key);
                    }
                    let labels: Vec<String> = path.iter().map(|key| strip_icon_tags(key)).collect();
                    built.help.insert(&labels, text);
                }
            }
            _ => {
                if is_blank_row(&cells) {
                    trace!(line, "skipping blank menu row");
                } else {
                    check_depth(plain_depth(&cells), line)?;
                    insert_segments(built.tree.root_mut(), &cells);
                }
            }
        }

        previous = cells;
    }

    debug!(
        entries = built.tree.len(),
        help_entries = built.help.len(),
        "built menu tree"
    );
    Ok(built)
}
