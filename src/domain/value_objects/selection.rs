//! Selection path value object
//!
//! The navigation state: one selected sibling index per depth level. The
//! path is plain UI state and is never owned by the tree, so it may go
//! stale when the tree changes; every read resolves it against the current
//! tree and quietly stops at the first index that no longer exists.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{MenuNode, MenuTree};

/// Error parsing a dotted path such as `0.1.2`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid menu path '{0}': expected dot-separated indices like 0.1.2")]
pub struct InvalidSelection(pub String);

/// Selected sibling index per depth, root first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SelectionPath(Vec<usize>);

/// One rendered column of the menu: the entries at a level and which of
/// them is highlighted.
#[derive(Debug, Clone, Copy)]
pub struct MenuLevel<'a> {
    pub depth: usize,
    pub parent: &'a MenuNode,
    pub selected: Option<usize>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index selected at a level, without checking it against a tree
    pub fn get(&self, level: usize) -> Option<usize> {
        self.0.get(level).copied()
    }

    /// Select `index` at `level`: keep the first `level` entries, drop the
    /// rest, then append `index`.
    ///
    /// Selecting past the end descends; selecting at an existing level jumps
    /// sideways and forgets everything deeper.
    pub fn select(&mut self, level: usize, index: usize) {
        self.0.truncate(level);
        self.0.push(index);
    }

    /// Go up one level. Returns the index that was dropped; at the root this
    /// is a no-op returning `None`.
    pub fn back(&mut self) -> Option<usize> {
        self.0.pop()
    }

    /// Keep only the first `len` levels
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Number of leading indices that resolve in `tree`
    pub fn valid_len(&self, tree: &MenuTree) -> usize {
        let mut node = tree.root();
        let mut valid = 0;
        for &index in &self.0 {
            match node.child(index) {
                Some(child) => {
                    node = child;
                    valid += 1;
                }
                None => break,
            }
        }
        valid
    }

    /// Drop every index past the first one that does not resolve
    pub fn clamp(&mut self, tree: &MenuTree) {
        let valid = self.valid_len(tree);
        self.0.truncate(valid);
    }

    /// Nodes selected along the path, stopping at the first invalid index
    pub fn resolve<'a>(&self, tree: &'a MenuTree) -> Vec<&'a MenuNode> {
        let mut nodes = Vec::with_capacity(self.0.len());
        let mut node = tree.root();
        for &index in &self.0 {
            let Some(child) = node.child(index) else {
                break;
            };
            nodes.push(child);
            node = child;
        }
        nodes
    }

    /// Deepest node the path resolves to (the root when nothing is selected)
    pub fn current<'a>(&self, tree: &'a MenuTree) -> &'a MenuNode {
        self.resolve(tree).pop().unwrap_or(tree.root())
    }

    /// Labels along the path, one per valid hop
    pub fn breadcrumbs(&self, tree: &MenuTree) -> Vec<String> {
        self.resolve(tree)
            .into_iter()
            .map(|node| node.label().to_string())
            .collect()
    }

    /// Node whose children are shown at `level`.
    ///
    /// Level 0 is always the root. Deeper levels need every selection above
    /// them to resolve; otherwise there is nothing to show.
    pub fn level_parent<'a>(&self, tree: &'a MenuTree, level: usize) -> Option<&'a MenuNode> {
        if level == 0 {
            return Some(tree.root());
        }
        self.resolve(tree).get(level - 1).copied()
    }

    /// Every level that currently has something to show.
    ///
    /// One level per valid selection plus the children of the deepest
    /// selected category; a selected leaf opens nothing.
    pub fn levels<'a>(&self, tree: &'a MenuTree) -> Vec<MenuLevel<'a>> {
        let mut levels = Vec::new();
        let mut parent = tree.root();
        let mut depth = 0;

        loop {
            if parent.is_leaf() {
                break;
            }
            let selected = self.get(depth).filter(|&i| i < parent.children().len());
            levels.push(MenuLevel {
                depth,
                parent,
                selected,
            });
            match selected.and_then(|i| parent.child(i)) {
                Some(child) => {
                    parent = child;
                    depth += 1;
                }
                None => break,
            }
        }
        levels
    }
}

impl From<Vec<usize>> for SelectionPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl AsRef<[usize]> for SelectionPath {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for SelectionPath {
    type Err = InvalidSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new());
        }
        s.split('.')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
            .map_err(|_| InvalidSelection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MenuTree {
        let mut tree = MenuTree::new();
        let photo = tree.root_mut().ensure_child("Photo");
        photo.ensure_child("Exposure").ensure_child("ISO");
        photo.ensure_child("Focus");
        tree.root_mut().ensure_child("Video").ensure_child("Frame Rate");
        tree
    }

    #[test]
    fn select_truncates_then_appends() {
        let mut path = SelectionPath::from(vec![2, 1, 0]);
        path.select(1, 3);
        assert_eq!(path.as_slice(), &[2, 3]);
        path.select(2, 0);
        assert_eq!(path.as_slice(), &[2, 3, 0]);
        path.select(0, 1);
        assert_eq!(path.as_slice(), &[1]);
    }

    #[test]
    fn back_pops_and_stops_at_root() {
        let mut path = SelectionPath::from(vec![2, 3]);
        assert_eq!(path.back(), Some(3));
        assert_eq!(path.as_slice(), &[2]);
        path.back();
        assert_eq!(path.back(), None);
        assert!(path.is_empty());
    }

    #[test]
    fn breadcrumbs_stop_at_first_invalid_index() {
        let tree = sample();
        let path = SelectionPath::from(vec![0, 0, 0]);
        assert_eq!(path.breadcrumbs(&tree), vec!["Photo", "Exposure", "ISO"]);

        let stale = SelectionPath::from(vec![0, 7, 0]);
        assert_eq!(stale.breadcrumbs(&tree), vec!["Photo"]);
        assert_eq!(stale.valid_len(&tree), 1);
    }

    #[test]
    fn clamp_drops_stale_tail() {
        let tree = sample();
        let mut path = SelectionPath::from(vec![1, 0, 4]);
        path.clamp(&tree);
        assert_eq!(path.as_slice(), &[1, 0]);
    }

    #[test]
    fn current_falls_back_to_root() {
        let tree = sample();
        assert_eq!(SelectionPath::new().current(&tree).raw_key(), "");
        let path = SelectionPath::from(vec![0, 1]);
        assert_eq!(path.current(&tree).label(), "Focus");
    }

    #[test]
    fn level_parent_requires_resolvable_prefix() {
        let tree = sample();
        let path = SelectionPath::from(vec![0, 9]);
        assert_eq!(path.level_parent(&tree, 0).unwrap().raw_key(), "");
        assert_eq!(path.level_parent(&tree, 1).unwrap().label(), "Photo");
        assert!(path.level_parent(&tree, 2).is_none());
    }

    #[test]
    fn levels_open_selected_categories_only() {
        let tree = sample();

        let levels = SelectionPath::new().levels(&tree);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].selected, None);

        let levels = SelectionPath::from(vec![0, 0]).levels(&tree);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[1].parent.label(), "Photo");
        assert_eq!(levels[1].selected, Some(0));
        assert_eq!(levels[2].parent.label(), "Exposure");
        assert_eq!(levels[2].selected, None);

        // a leaf selection opens no further column
        let levels = SelectionPath::from(vec![0, 1]).levels(&tree);
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn levels_ignore_out_of_range_selection() {
        let tree = sample();
        let levels = SelectionPath::from(vec![5, 0]).levels(&tree);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].selected, None);
    }

    #[test]
    fn parses_and_displays_dotted_form() {
        let path: SelectionPath = "0.1.2".parse().unwrap();
        assert_eq!(path.as_slice(), &[0, 1, 2]);
        assert_eq!(path.to_string(), "0.1.2");
        assert!("".parse::<SelectionPath>().unwrap().is_empty());
        assert!("0.x".parse::<SelectionPath>().is_err());
    }
}
