//! Property tests for building and serializing menu trees.

use proptest::prelude::*;

use camera_menu::domain::services::{build_menu, serialize};
use camera_menu::{encode_rows, Fidelity, MenuDocument, HELP_PATH_SEPARATOR, MAX_MENU_DEPTH};

fn label() -> impl Strategy<Value = String> {
    // Plain labels: no commas, quotes, tags or edge whitespace, and never
    // the configuration sentinel.
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,6}( [A-Za-z0-9]{1,4})?")
        .unwrap()
        .prop_filter("not the sentinel", |s| s != "camera_menu_config")
}

fn menu_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    let row = proptest::collection::vec(prop_oneof![label(), Just("A".to_string())], 1..=5);
    proptest::collection::vec(row, 0..=24)
}

fn help_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,6}( [a-z]{1,6})?"]
}

/// Spreadsheet-style rows: leading cells left blank for carry-forward, then
/// an empty spacer and a trailing help cell.
fn sparse_row(width: usize) -> impl Strategy<Value = Vec<String>> {
    let cell = prop_oneof![label(), Just("A".to_string()), Just("B".to_string())];
    (
        0..width,
        proptest::collection::vec(cell, width),
        help_text(),
    )
        .prop_map(|(blanks, mut cells, help)| {
            for cell in cells.iter_mut().take(blanks) {
                cell.clear();
            }
            cells.push(String::new());
            cells.push(help);
            cells
        })
}

fn sparse_document() -> impl Strategy<Value = (Vec<Vec<String>>, String)> {
    (2usize..=4)
        .prop_flat_map(|width| proptest::collection::vec(sparse_row(width), 1..=16))
        .prop_map(|rows| {
            let mut all = vec![vec!["Level 1".to_string()]];
            all.extend(rows.iter().cloned());
            let text = encode_rows(&all).unwrap();
            (rows, text)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: building the serialized form of a tree yields the same tree.
    #[test]
    fn property_build_serialize_round_trip(rows in menu_rows()) {
        let built = build_menu(&rows).unwrap();
        let again = build_menu(&serialize(&built.tree)[1..]).unwrap();
        prop_assert_eq!(again.tree, built.tree);
    }

    /// PROPERTY: every input row path exists in the built tree.
    #[test]
    fn property_every_row_is_reachable(rows in menu_rows()) {
        let built = build_menu(&rows).unwrap();
        for row in &rows {
            let mut node = built.tree.root();
            for key in row {
                node = node.child_by_key(key).expect("row path present");
            }
        }
    }

    /// PROPERTY: a saved document parses back to the same document.
    #[test]
    fn property_document_full_round_trip(rows in menu_rows()) {
        let mut all = vec![vec!["Level 1".to_string()]];
        all.extend(rows);
        let text = encode_rows(&all).unwrap();
        let doc = MenuDocument::parse("prop", &text).unwrap();

        let saved = doc.to_csv(Fidelity::Full).unwrap();
        let again = MenuDocument::parse("prop", &saved).unwrap();
        prop_assert_eq!(again, doc);
    }

    /// PROPERTY: depth is bounded; deeper rows are rejected, never truncated.
    #[test]
    fn property_depth_is_guarded(extra in 1usize..8) {
        let row = vec!["x".to_string(); MAX_MENU_DEPTH + extra];
        prop_assert!(build_menu(&[row]).is_err());
    }

    /// PROPERTY: any help text in a sparse document is picked up, and every
    /// help entry names an entry that exists in the tree.
    #[test]
    fn property_sparse_help_is_reachable((rows, text) in sparse_document()) {
        let doc = MenuDocument::parse("prop", &text).unwrap();

        let any_help = rows.iter().any(|row| row.last().is_some_and(|c| !c.trim().is_empty()));
        prop_assert_eq!(!doc.help().is_empty(), any_help);

        for (key, _) in doc.help().iter() {
            let mut node = doc.tree().root();
            for label in key.split(HELP_PATH_SEPARATOR) {
                let next = node.iter().find(|child| child.label() == label);
                prop_assert!(next.is_some(), "help path {} is not in the tree", key);
                node = next.unwrap();
            }
        }
    }

    /// PROPERTY: sparse documents survive a full-fidelity save unchanged.
    #[test]
    fn property_sparse_full_round_trip((_, text) in sparse_document()) {
        let doc = MenuDocument::parse("prop", &text).unwrap();
        let saved = doc.to_csv(Fidelity::Full).unwrap();
        let again = MenuDocument::parse("prop", &saved).unwrap();
        prop_assert_eq!(again.tree(), doc.tree());
        prop_assert_eq!(again.help(), doc.help());
    }
}
