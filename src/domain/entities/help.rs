//! Help map entity
//!
//! Free-text help keyed by the leaf's label path, e.g.
//! `"Photo > Exposure > ISO"`. Keys use labels (icon tags stripped), so the
//! map has to be re-keyed whenever an ancestor is renamed.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

/// Separator between labels in a help path key
pub const HELP_PATH_SEPARATOR: &str = " > ";

/// Join labels into a help path key
pub fn join_help_path<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| label.as_ref())
        .collect::<Vec<_>>()
        .join(HELP_PATH_SEPARATOR)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HelpMap(IndexMap<String, String>);

impl HelpMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record help text for the entry at a label path
    pub fn insert<S: AsRef<str>>(&mut self, labels: &[S], text: impl Into<String>) {
        self.0.insert(join_help_path(labels), text.into());
    }

    /// Help text by joined path key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Help text for a label path
    pub fn get_for<S: AsRef<str>>(&self, labels: &[S]) -> Option<&str> {
        self.get(&join_help_path(labels))
    }

    pub fn contains<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        self.get_for(labels).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Move every entry at or below `from` to the same place below `to`.
    ///
    /// An entry already present at a destination key is kept; the moved
    /// text for that key is dropped.
    pub fn rename_prefix<S: AsRef<str>, T: AsRef<str>>(&mut self, from: &[S], to: &[T]) {
        let from = join_help_path(from);
        let to = join_help_path(to);
        if from == to {
            return;
        }
        let nested = format!("{from}{HELP_PATH_SEPARATOR}");
        let destination = |key: &str| -> Option<String> {
            if key == from {
                Some(to.clone())
            } else {
                key.strip_prefix(&nested)
                    .map(|rest| format!("{to}{HELP_PATH_SEPARATOR}{rest}"))
            }
        };

        let staying: HashSet<String> = self
            .0
            .keys()
            .filter(|key| destination(key.as_str()).is_none())
            .cloned()
            .collect();

        self.0 = std::mem::take(&mut self.0)
            .into_iter()
            .filter_map(|(key, text)| match destination(key.as_str()) {
                Some(moved) if staying.contains(&moved) => None,
                Some(moved) => Some((moved, text)),
                None => Some((key, text)),
            })
            .collect();
    }

    /// Drop every entry at or below a label path
    pub fn remove_prefix<S: AsRef<str>>(&mut self, labels: &[S]) {
        let prefix = join_help_path(labels);
        let nested = format!("{prefix}{HELP_PATH_SEPARATOR}");
        self.0
            .retain(|key, _| key != &prefix && !key.starts_with(&nested));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_joins_labels() {
        let mut help = HelpMap::new();
        help.insert(&["Photo", "Exposure", "ISO"], "Sensor gain");
        assert_eq!(help.get("Photo > Exposure > ISO"), Some("Sensor gain"));
        assert!(help.contains(&["Photo", "Exposure", "ISO"]));
        assert!(!help.contains(&["Photo", "Exposure"]));
    }

    #[test]
    fn rename_prefix_never_overwrites_existing_entries() {
        let mut help = HelpMap::new();
        help.insert(&["Drive"], "drive");
        help.insert(&["Drive", "Burst"], "burst");
        help.insert(&["Mode"], "mode");

        help.rename_prefix(&["Drive"], &["Mode"]);

        assert_eq!(help.get("Mode"), Some("mode"));
        assert_eq!(help.get("Mode > Burst"), Some("burst"));
        assert_eq!(help.get("Drive"), None);
        assert_eq!(help.len(), 2);
    }

    #[test]
    fn rename_prefix_moves_self_and_descendants_only() {
        let mut help = HelpMap::new();
        help.insert(&["Photo"], "top");
        help.insert(&["Photo", "ISO"], "iso");
        help.insert(&["Photography", "X"], "unrelated");

        help.rename_prefix(&["Photo"], &["Still"]);

        assert_eq!(help.get("Still"), Some("top"));
        assert_eq!(help.get("Still > ISO"), Some("iso"));
        assert_eq!(help.get("Photography > X"), Some("unrelated"));
        assert_eq!(help.len(), 3);
    }

    #[test]
    fn remove_prefix_keeps_lookalike_paths() {
        let mut help = HelpMap::new();
        help.insert(&["Photo", "ISO"], "iso");
        help.insert(&["Photo", "ISO Auto"], "auto");
        help.remove_prefix(&["Photo", "ISO"]);
        assert_eq!(help.get("Photo > ISO"), None);
        assert_eq!(help.get("Photo > ISO Auto"), Some("auto"));
    }
}
