//! Menu tree entity
//!
//! A `MenuNode` owns its children in an insertion-ordered map keyed by raw
//! cell text. Order is the display order of the source document and is
//! never re-sorted. Nodes carry no parent links; every traversal starts at
//! the root and follows an explicit index path.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::value_objects::{icon_name, strip_icon_tags};

/// Deepest nesting a menu may have, counted in levels below the root
pub const MAX_MENU_DEPTH: usize = 32;

/// A named entry in the menu: a category when it has children, a settable
/// item (leaf) otherwise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuNode {
    raw_key: String,
    label: String,
    children: IndexMap<String, MenuNode>,
}

impl MenuNode {
    /// Create a childless node from raw cell text
    pub fn new(raw_key: impl Into<String>) -> Self {
        let raw_key = raw_key.into();
        let label = strip_icon_tags(&raw_key);
        Self {
            raw_key,
            label,
            children: IndexMap::new(),
        }
    }

    /// Key exactly as written in the cell, icon tag included
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    /// Display label (raw key without icon tags)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Name of the icon referenced by the raw key, if any
    pub fn icon(&self) -> Option<&str> {
        icon_name(&self.raw_key)
    }

    pub fn children(&self) -> &IndexMap<String, MenuNode> {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut IndexMap<String, MenuNode> {
        &mut self.children
    }

    /// True when this node is a settable item rather than a category
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child at a sibling index
    pub fn child(&self, index: usize) -> Option<&MenuNode> {
        self.children.get_index(index).map(|(_, node)| node)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut MenuNode> {
        self.children.get_index_mut(index).map(|(_, node)| node)
    }

    /// Child registered under an exact raw key
    pub fn child_by_key(&self, raw_key: &str) -> Option<&MenuNode> {
        self.children.get(raw_key)
    }

    /// Sibling index of the child with this raw key
    pub fn position_of(&self, raw_key: &str) -> Option<usize> {
        self.children.get_index_of(raw_key)
    }

    /// Return the child for `raw_key`, appending a new leaf if absent.
    ///
    /// An existing child keeps its position and its children.
    pub fn ensure_child(&mut self, raw_key: &str) -> &mut MenuNode {
        self.children
            .entry(raw_key.to_string())
            .or_insert_with(|| MenuNode::new(raw_key))
    }

    /// Iterate children in display order
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        self.children.values()
    }

    /// Levels below this node (0 for a leaf)
    pub fn height(&self) -> usize {
        self.children
            .values()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of descendants, not counting this node
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    pub(crate) fn set_raw_key(&mut self, raw_key: String) {
        self.label = strip_icon_tags(&raw_key);
        self.raw_key = raw_key;
    }
}

// Equality is order-sensitive: `IndexMap`'s own `PartialEq` ignores order,
// but menu position is part of a node's identity here.
impl PartialEq for MenuNode {
    fn eq(&self, other: &Self) -> bool {
        self.raw_key == other.raw_key
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl Eq for MenuNode {}

/// The whole menu: a root node with an empty key whose children are the
/// top-level categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuTree {
    root: MenuNode,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &MenuNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut MenuNode {
        &mut self.root
    }

    /// True when the menu has no entries at all
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Resolve an index path; the empty path is the root
    pub fn node_at(&self, path: &[usize]) -> Option<&MenuNode> {
        path.iter()
            .try_fold(&self.root, |node, &index| node.child(index))
    }

    pub(crate) fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut MenuNode> {
        let mut node = &mut self.root;
        for &index in path {
            node = node.child_mut(index)?;
        }
        Some(node)
    }

    /// Labels of every node along a path, or `None` if any hop is invalid
    pub fn labels_along(&self, path: &[usize]) -> Option<Vec<String>> {
        let mut node = &self.root;
        let mut labels = Vec::with_capacity(path.len());
        for &index in path {
            node = node.child(index)?;
            labels.push(node.label().to_string());
        }
        Some(labels)
    }

    /// Deepest level in use (0 for an empty menu)
    pub fn depth(&self) -> usize {
        self.root.height()
    }

    /// Number of entries, excluding the root
    pub fn len(&self) -> usize {
        self.root.descendant_count()
    }
}
