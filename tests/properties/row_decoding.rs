//! Property tests for decoding arbitrary document text.

use proptest::prelude::*;

use camera_menu::{decode_rows, Fidelity, MenuDocument};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding and parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(text in "\\PC{0,400}") {
        let _ = decode_rows(&text);
        let _ = MenuDocument::parse("prop", &text);
    }

    /// PROPERTY: spreadsheet-shaped text never panics either.
    #[test]
    fn property_tabular_text_never_panics(
        text in "([A-Za-z\" ]{0,6}(,[A-Za-z\" ]{0,6}){0,6}\n){0,20}"
    ) {
        if let Ok(doc) = MenuDocument::parse("prop", &text) {
            let _ = doc.to_rows(Fidelity::Full);
        }
    }
}
