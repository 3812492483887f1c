//! Turning an imported bundle into a stored camera record

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::domain::entities::{split_brand_model, CameraRecord};
use crate::domain::services::{resolve_config, set_config_value, split_sections, Placement};
use crate::error::MenuResult;
use crate::infrastructure::BundleContents;
use crate::parser::{decode_rows, encode_rows};

/// Hex digits of the content hash kept in a record id
const ID_HASH_LEN: usize = 7;

/// Build the record for an imported bundle.
///
/// The document's configuration block is rewritten so that it names the
/// bundle's stylesheet and carries the resolved brand, model and display
/// name. A custom name wins over the document's own metadata.
pub(crate) fn prepare_record(
    contents: BundleContents,
    custom_name: Option<&str>,
    now: DateTime<Utc>,
) -> MenuResult<CameraRecord> {
    let BundleContents {
        csv_stem,
        csv_content,
        css_stem,
        css_content,
        icon_data,
    } = contents;
    let css_file_name = if css_stem.is_empty() {
        csv_stem.clone()
    } else {
        css_stem
    };

    let mut rows = decode_rows(&csv_content);
    set_config_value(
        &mut rows,
        "css_file",
        &css_file_name,
        Placement::After("display_name"),
    );

    let config = resolve_config(split_sections(&rows).1);
    let filled = |value: Option<String>| value.filter(|v| !v.is_empty());
    let mut brand = filled(config.brand);
    let mut model = config.model;
    let custom_name = custom_name.map(str::trim).filter(|name| !name.is_empty());

    if let Some(name) = custom_name {
        if brand.is_none() && filled(model.clone()).is_none() {
            let (b, m) = split_brand_model(name);
            brand = Some(b);
            model = Some(m);
        }
    }

    let display_name = match (custom_name, &brand, &model) {
        (Some(name), _, _) => name.to_string(),
        (None, Some(b), Some(m)) if !m.is_empty() => format!("{b} {m}").trim().to_string(),
        _ => filled(config.display_name).unwrap_or_else(|| csv_stem.clone()),
    };

    if let Some(brand) = &brand {
        set_config_value(&mut rows, "brand", brand, Placement::Start);
    }
    if let Some(model) = &model {
        set_config_value(&mut rows, "model", model, Placement::After("brand"));
    }
    set_config_value(&mut rows, "display_name", &display_name, Placement::End);

    let csv_content = encode_rows(&rows)?;
    let id = record_id(&csv_content, now);

    Ok(CameraRecord {
        id,
        display_name,
        brand,
        model,
        csv_content,
        css_content,
        css_file_name,
        icon_data,
        created_at: now,
    })
}

/// `custom-<unix millis>-<short content hash>`
pub(crate) fn record_id(csv_content: &str, now: DateTime<Utc>) -> String {
    let digest = format!("{:x}", Sha256::digest(csv_content.as_bytes()));
    format!(
        "{}{}-{}",
        CameraRecord::ID_PREFIX,
        now.timestamp_millis(),
        &digest[..ID_HASH_LEN]
    )
}
