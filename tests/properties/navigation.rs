//! Property tests for selection paths against changing trees.

use proptest::prelude::*;

use camera_menu::domain::services::search;
use camera_menu::{MenuDocument, SelectionPath};

const DOC: &str = "\
Level 1,Level 2,Level 3
Photo,Exposure,ISO
Photo,Exposure,Shutter
Photo,Focus,AF Mode
Video,Frame Rate
Setup,Language
";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any index path, however stale, renders without faulting
    /// and breadcrumbs stop at the first invalid hop.
    #[test]
    fn property_stale_paths_degrade(indices in proptest::collection::vec(0usize..6, 0..6)) {
        let doc = MenuDocument::parse("nav", DOC).unwrap();
        let path = SelectionPath::from(indices.clone());
        let crumbs = path.breadcrumbs(doc.tree());
        prop_assert!(crumbs.len() <= indices.len());

        let mut clamped = path.clone();
        clamped.clamp(doc.tree());
        prop_assert_eq!(clamped.len(), crumbs.len());
        prop_assert!(doc.tree().node_at(clamped.as_slice()).is_some());
        prop_assert!(path.levels(doc.tree()).len() <= indices.len() + 1);
    }

    /// PROPERTY: replaying a search hit's path selects that hit.
    #[test]
    fn property_search_paths_select_hits(query in "[a-zA-Z]{1,2}") {
        let doc = MenuDocument::parse("nav", DOC).unwrap();
        for hit in search(doc.tree(), &query, true) {
            let mut selection = SelectionPath::new();
            for (level, &index) in hit.path.iter().enumerate() {
                selection.select(level, index);
            }
            let node = doc.tree().node_at(selection.as_slice()).unwrap();
            prop_assert_eq!(node.label(), hit.node.label());
            prop_assert!(node.label().to_lowercase().contains(&query.to_lowercase()));
        }
    }
}
