//! Camera metadata entity
//!
//! `CameraConfig` is what a document's configuration block says about the
//! camera, field by field. `CameraIdentity` is the fully resolved view with
//! every fallback applied.

use indexmap::IndexMap;
use serde::Serialize;

/// Camera metadata parsed from a document's configuration block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CameraConfig {
    /// Icon name to base64-encoded bitmap
    pub icons: IndexMap<String, String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub display_name: Option<String>,
    pub css_file: Option<String>,
}

/// Resolved presentation metadata for a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CameraIdentity {
    pub brand: String,
    pub model: String,
    pub display_name: String,
    pub css_file: String,
}

impl CameraIdentity {
    /// Label used when listing cameras: `"brand model"` when both are
    /// known, otherwise the display name.
    pub fn label(&self) -> String {
        if !self.brand.is_empty() && !self.model.is_empty() {
            format!("{} {}", self.brand, self.model)
        } else {
            self.display_name.clone()
        }
    }
}

/// Split a display name on its first space into brand and model.
///
/// A name without a space is all brand.
pub fn split_brand_model(name: &str) -> (String, String) {
    let name = name.trim();
    match name.split_once(' ') {
        Some((brand, model)) => (brand.to_string(), model.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl CameraConfig {
    /// Base64 bitmap for an icon name
    pub fn icon(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str)
    }

    /// Apply the fallback rules for missing fields.
    ///
    /// - no brand: split the display name (or `document_id`) on its first
    ///   space; an explicit model still wins over the derived one
    /// - no display name: `"brand model"`
    /// - no stylesheet: `document_id`
    ///
    /// Blank values count as missing.
    pub fn identity(&self, document_id: &str) -> CameraIdentity {
        let brand = filled(self.brand.as_deref());
        let model = filled(self.model.as_deref());
        let display_name = filled(self.display_name.as_deref());

        let (brand, model) = match brand {
            Some(brand) => (brand.to_string(), model.unwrap_or_default().to_string()),
            None => {
                let (brand, derived_model) = split_brand_model(display_name.unwrap_or(document_id));
                (brand, model.map_or(derived_model, str::to_string))
            }
        };

        let display_name = display_name
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} {}", brand, model).trim().to_string());

        let css_file = filled(self.css_file.as_deref()).unwrap_or(document_id).to_string();

        CameraIdentity {
            brand,
            model,
            display_name,
            css_file,
        }
    }
}
