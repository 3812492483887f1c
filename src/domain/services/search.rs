//! Menu search
//!
//! Substring search over entry labels. The traversal is a pre-order walk
//! driven by an explicit stack, so results come out in document order and
//! deep menus cannot exhaust the call stack. Categories are candidates too,
//! and the walk always continues into their children.

use crate::domain::entities::{join_help_path, MenuNode, MenuTree};
use crate::domain::value_objects::SelectionPath;

/// A matching entry with the route to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub node: &'a MenuNode,
    /// Labels of the entries above the match, outermost first
    pub ancestors: Vec<String>,
    /// Index path that selects the match when replayed level by level
    pub path: Vec<usize>,
}

impl SearchHit<'_> {
    /// Ancestors and the match joined for display (`Photo > Exposure > ISO`)
    pub fn breadcrumb(&self) -> String {
        let mut labels: Vec<&str> = self.ancestors.iter().map(String::as_str).collect();
        labels.push(self.node.label());
        join_help_path(&labels)
    }

    /// Selection that jumps straight to the match
    pub fn selection(&self) -> SelectionPath {
        SelectionPath::from(self.path.clone())
    }
}

/// Lazy search over one tree. Build with [`search`].
#[derive(Debug, Clone)]
pub struct Search<'a> {
    needle: String,
    case_insensitive: bool,
    /// Node whose children are being walked, and the next child to visit
    stack: Vec<(&'a MenuNode, usize)>,
    path: Vec<usize>,
    labels: Vec<String>,
}

/// Search `tree` for entries whose label contains `query`.
///
/// An empty query matches nothing. The returned iterator can be cloned to
/// restart from the same point.
pub fn search<'a>(tree: &'a MenuTree, query: &str, case_insensitive: bool) -> Search<'a> {
    let needle = if case_insensitive {
        query.to_lowercase()
    } else {
        query.to_string()
    };
    let stack = if needle.is_empty() {
        Vec::new()
    } else {
        vec![(tree.root(), 0)]
    };
    Search {
        needle,
        case_insensitive,
        stack,
        path: Vec::new(),
        labels: Vec::new(),
    }
}

impl Search<'_> {
    fn matches(&self, label: &str) -> bool {
        if self.case_insensitive {
            label.to_lowercase().contains(&self.needle)
        } else {
            label.contains(&self.needle)
        }
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let (parent, index) = *frame;
            let Some(child) = parent.child(index) else {
                self.stack.pop();
                self.path.pop();
                self.labels.pop();
                continue;
            };
            frame.1 += 1;

            let hit = self.matches(child.label()).then(|| {
                let mut path = self.path.clone();
                path.push(index);
                SearchHit {
                    node: child,
                    ancestors: self.labels.clone(),
                    path,
                }
            });

            if !child.is_leaf() {
                self.stack.push((child, 0));
                self.path.push(index);
                self.labels.push(child.label().to_string());
            }

            if hit.is_some() {
                return hit;
            }
        }
    }
}
