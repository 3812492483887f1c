//! Configuration block resolver
//!
//! Reads the rows at and after the sentinel into a `CameraConfig`. The first
//! cell of each row names the setting; rows with an unknown name are
//! ignored so newer documents still load.

use tracing::trace;

use crate::domain::entities::CameraConfig;
use crate::domain::services::menu_builder::{sentinel_index, CONFIG_SENTINEL};
use crate::parser::Row;

/// Offset of the icon name in a legacy `icon<name>,<value>` cell
const LEGACY_ICON_PREFIX_LEN: usize = 5;

/// Build a `CameraConfig` from configuration rows.
///
/// Later rows win over earlier ones for the same field or icon name.
pub fn resolve_config(config_rows: &[Row]) -> CameraConfig {
    let mut config = CameraConfig::default();

    for row in config_rows {
        let Some(name) = row.first() else {
            continue;
        };
        let value = row.get(1).map(|cell| cell.trim().to_string());

        match (name.as_str(), value) {
            ("brand", Some(value)) => config.brand = Some(value),
            ("model", Some(value)) => config.model = Some(value),
            ("display_name", Some(value)) => config.display_name = Some(value),
            ("css_file", Some(value)) => config.css_file = Some(value),
            (name, _) if name.starts_with("icon") => match parse_icon_row(row) {
                Some((icon, data)) => {
                    config.icons.insert(icon, data);
                }
                None => trace!(cell = %name, "ignoring malformed icon row"),
            },
            _ => {}
        }
    }

    config
}

/// Extract `(name, value)` from an icon row.
///
/// Accepted forms, by first cell:
/// - `icon:<name>,<value>`: the value is the second cell if there is one,
///   else the text after the comma
/// - `icon:<name>` with the value in the second cell
/// - legacy `icon<name>,<value>`: the name starts after the fixed
///   five-character prefix
fn parse_icon_row(row: &[String]) -> Option<(String, String)> {
    let first = row.first()?;
    let second = row.get(1);

    let (name, value) = if let Some(rest) = first.strip_prefix("icon:") {
        match rest.split_once(',') {
            Some((name, inline)) => (name, second.map(String::as_str).unwrap_or(inline)),
            None => (rest, second?.as_str()),
        }
    } else {
        let comma = first.find(',')?;
        let second = second?;
        let name = first.get(LEGACY_ICON_PREFIX_LEN..comma)?;
        let value = if second.is_empty() {
            &first[comma + 1..]
        } else {
            second.as_str()
        };
        (name, value)
    };

    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}

/// Where [`set_config_value`] puts a row that does not exist yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement<'a> {
    /// Directly after the sentinel
    Start,
    /// After the row with this name, or at the start if there is none
    After(&'a str),
    /// After the last configuration row
    End,
}

/// Set a named configuration value in a whole document's rows.
///
/// An existing row keeps its place and gets the new value. Otherwise a row
/// is inserted per `placement`. A document without a configuration block
/// gets one appended first.
pub fn set_config_value(rows: &mut Vec<Row>, key: &str, value: &str, placement: Placement<'_>) {
    let sentinel = match sentinel_index(rows) {
        Some(index) => index,
        None => {
            rows.push(vec![CONFIG_SENTINEL.to_string(), String::new()]);
            rows.len() - 1
        }
    };
    let block = sentinel + 1;
    let find = |rows: &[Row], name: &str| {
        rows[block..]
            .iter()
            .position(|row| row.first().is_some_and(|cell| cell == name))
            .map(|offset| block + offset)
    };

    if let Some(index) = find(rows.as_slice(), key) {
        let row = &mut rows[index];
        if row.len() < 2 {
            row.resize(2, String::new());
        }
        row[1] = value.to_string();
        return;
    }

    let at = match placement {
        Placement::Start => block,
        Placement::After(name) => find(rows.as_slice(), name).map_or(block, |index| index + 1),
        Placement::End => rows.len(),
    };
    rows.insert(at, vec![key.to_string(), value.to_string()]);
}
