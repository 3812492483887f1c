//! Camera record entity
//!
//! One user-added camera as persisted by the record store.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRecord {
    pub id: String,
    pub display_name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub csv_content: String,
    pub css_content: String,
    pub css_file_name: String,
    /// Base64 PNG shipped alongside the menu, separate from per-row icons
    pub icon_data: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CameraRecord {
    /// Prefix shared by every user-added camera id
    pub const ID_PREFIX: &'static str = "custom-";

    pub fn is_custom_id(id: &str) -> bool {
        id.starts_with(Self::ID_PREFIX)
    }
}
