//! Icon tag value object
//!
//! Menu cells may embed an inline icon reference of the form
//! `<i name="wb"/>White Balance`. The tag is part of a node's raw key (so
//! two entries with the same label but different icons stay distinct) and
//! is stripped from everything user-facing.

use std::sync::LazyLock;

use regex::Regex;

static ICON_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<i name="([^"]+)"/>"#).expect("icon tag pattern is valid"));

/// Remove every icon tag from a raw cell value.
///
/// The result is trimmed so `<i name="wb"/> White Balance` and
/// `<i name="wb"/>White Balance` share a label.
pub fn strip_icon_tags(raw: &str) -> String {
    ICON_TAG.replace_all(raw, "").trim().to_string()
}

/// Name of the first icon referenced by a raw cell value
pub fn icon_name(raw: &str) -> Option<&str> {
    ICON_TAG
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The literal first icon tag, exactly as written in the cell
pub fn icon_tag(raw: &str) -> Option<&str> {
    ICON_TAG.find(raw).map(|m| m.as_str())
}
