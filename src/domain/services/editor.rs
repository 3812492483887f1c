//! Tree editor
//!
//! An `EditSession` owns a deep copy of a document's tree and help map and
//! applies structural edits to that copy only. The document it came from is
//! untouched until the session is applied (see
//! `MenuDocument::with_edits`); dropping the session discards every edit.
//!
//! Help text is keyed by label path, so renames re-key it and deletes prune
//! it as they go.

use tracing::debug;

use crate::domain::entities::{HelpMap, MenuNode, MenuTree, MAX_MENU_DEPTH};
use crate::domain::value_objects::{icon_tag, SelectionPath};
use crate::error::{MenuError, MenuResult};

/// Label given to entries created by [`EditSession::add_child`]
pub const DEFAULT_PLACEHOLDER: &str = "New Item";

#[derive(Debug, Clone)]
pub struct EditSession {
    document_id: String,
    working: MenuTree,
    help: HelpMap,
    selection: SelectionPath,
    placeholder: String,
    dirty: bool,
}

impl EditSession {
    /// Start editing copies of `tree` and `help`
    pub fn new(document_id: impl Into<String>, tree: &MenuTree, help: &HelpMap) -> Self {
        Self {
            document_id: document_id.into(),
            working: tree.clone(),
            help: help.clone(),
            selection: SelectionPath::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            dirty: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        if !placeholder.trim().is_empty() {
            self.placeholder = placeholder.trim().to_string();
        }
        self
    }

    pub fn with_selection(mut self, selection: SelectionPath) -> Self {
        self.set_selection(selection);
        self
    }

    /// Replace the selection, dropping any part that does not resolve
    pub fn set_selection(&mut self, selection: SelectionPath) {
        self.selection = selection;
        self.selection.clamp(&self.working);
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn tree(&self) -> &MenuTree {
        &self.working
    }

    pub fn help(&self) -> &HelpMap {
        &self.help
    }

    pub fn selection(&self) -> &SelectionPath {
        &self.selection
    }

    /// True once any edit has changed the working copy
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn select(&mut self, level: usize, index: usize) {
        self.selection.select(level, index);
    }

    pub fn back(&mut self) {
        self.selection.back();
    }

    /// Consume the session, yielding the edited tree and help map
    pub fn into_parts(self) -> (MenuTree, HelpMap) {
        (self.working, self.help)
    }

    /// Rename the entry at `path`, keeping its icon tag, position and
    /// children. An empty label deletes the entry instead.
    pub fn rename_node(&mut self, path: &[usize], new_label: &str) -> MenuResult<()> {
        let Some((&index, parent_path)) = path.split_last() else {
            return Err(MenuError::RootNotEditable { action: "renamed" });
        };
        let new_label = new_label.trim();
        if new_label.is_empty() {
            return self.delete_node(path);
        }

        let old_labels = self.labels_at(path)?;
        let parent = self.parent_mut(parent_path, path)?;
        let Some((old_key, _)) = parent.children().get_index(index) else {
            return Err(invalid(path));
        };
        let old_key = old_key.clone();

        let new_key = match icon_tag(&old_key) {
            Some(tag) => format!("{tag}{new_label}"),
            None => new_label.to_string(),
        };
        if new_key == old_key {
            return Ok(());
        }
        if parent.children().contains_key(&new_key) {
            return Err(MenuError::DuplicateEntry {
                label: new_label.to_string(),
            });
        }

        let children = parent.children_mut();
        let Some((_, mut node)) = children.shift_remove_index(index) else {
            return Err(invalid(path));
        };
        node.set_raw_key(new_key.clone());
        children.shift_insert(index, new_key, node);

        let old_label = old_labels.last().cloned().unwrap_or_default();
        if !label_in_use(parent, &old_label) {
            let mut new_labels = old_labels.clone();
            if let Some(last) = new_labels.last_mut() {
                *last = new_label.to_string();
            }
            self.help.rename_prefix(&old_labels, &new_labels);
        }

        debug!(from = %old_key, to = %new_label, "renamed menu entry");
        self.dirty = true;
        Ok(())
    }

    /// Append a placeholder child to the entry at `path` (the root when
    /// `path` is empty) and select it. Returns the new entry's path.
    pub fn add_child(&mut self, path: &[usize]) -> MenuResult<Vec<usize>> {
        if path.len() + 1 > MAX_MENU_DEPTH {
            return Err(MenuError::NestingLimit {
                limit: MAX_MENU_DEPTH,
            });
        }
        let placeholder = self.placeholder.clone();
        let node = self
            .working
            .node_at_mut(path)
            .ok_or_else(|| invalid(path))?;

        let label = unique_label(&placeholder, |candidate| {
            node.children().contains_key(candidate)
        });
        node.ensure_child(&label);
        let index = node.children().len() - 1;

        let mut new_path = path.to_vec();
        new_path.push(index);
        self.selection = SelectionPath::from(new_path.clone());

        debug!(label = %label, path = ?new_path, "added menu entry");
        self.dirty = true;
        Ok(new_path)
    }

    /// Append a placeholder next to the deepest selected entry, under the
    /// same parent. With nothing selected the new entry goes to the top
    /// level.
    pub fn add_sibling(&mut self) -> MenuResult<Vec<usize>> {
        self.selection.clamp(&self.working);
        let selected = self.selection.as_slice();
        let parent_path = selected.split_last().map(|(_, rest)| rest.to_vec()).unwrap_or_default();
        self.add_child(&parent_path)
    }

    /// Remove the entry at `path` with everything below it, then repair the
    /// selection so it never points at removed content.
    pub fn delete_node(&mut self, path: &[usize]) -> MenuResult<()> {
        let Some((&index, parent_path)) = path.split_last() else {
            return Err(MenuError::RootNotEditable { action: "deleted" });
        };

        let labels = self.labels_at(path)?;
        let parent = self.parent_mut(parent_path, path)?;
        let Some((key, _)) = parent.children_mut().shift_remove_index(index) else {
            return Err(invalid(path));
        };
        let remaining = parent.children().len();

        let label = labels.last().cloned().unwrap_or_default();
        if !label_in_use(parent, &label) {
            self.help.remove_prefix(&labels);
        }

        self.repair_selection(parent_path, index, remaining);

        debug!(key = %key, path = ?path, "deleted menu entry");
        self.dirty = true;
        Ok(())
    }

    fn repair_selection(&mut self, parent_path: &[usize], removed: usize, remaining: usize) {
        let level = parent_path.len();
        let selected = self.selection.as_slice();
        let under_parent = selected.len() > level && selected[..level] == *parent_path;

        if under_parent {
            let mut indices = selected.to_vec();
            let current = indices[level];
            if remaining == 0 {
                indices.truncate(level);
            } else if current == removed {
                indices.truncate(level);
                indices.push(removed.min(remaining - 1));
            } else if current > removed {
                indices[level] = current - 1;
            }
            self.selection = SelectionPath::from(indices);
        }
        self.selection.clamp(&self.working);
    }

    fn labels_at(&self, path: &[usize]) -> MenuResult<Vec<String>> {
        self.working.labels_along(path).ok_or_else(|| invalid(path))
    }

    fn parent_mut(
        &mut self,
        parent_path: &[usize],
        path: &[usize],
    ) -> MenuResult<&mut MenuNode> {
        self.working
            .node_at_mut(parent_path)
            .ok_or_else(|| invalid(path))
    }
}

fn invalid(path: &[usize]) -> MenuError {
    MenuError::InvalidPath {
        path: path.to_vec(),
    }
}

fn label_in_use(parent: &MenuNode, label: &str) -> bool {
    parent.iter().any(|child| child.label() == label)
}

/// `base`, or `base 2`, `base 3`, ... until `taken` says no
fn unique_label(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base} {n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
