//! Camera bundle archives
//!
//! A bundle is a zip holding one menu document (`.csv`), one stylesheet
//! (`.css`) and optionally a camera icon (`.png`). Export also writes every
//! icon from the document's configuration block as `<name>.png`.

use std::io::{Cursor, Read, Write};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use thiserror::Error;
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Entries under this prefix are Finder metadata, not bundle content
const MACOS_METADATA_PREFIX: &str = "__MACOSX/";

/// File name of the camera icon inside an exported bundle
pub const CAMERA_ICON_FILE: &str = "icon.png";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("No CSV file found in archive")]
    NoCsv,

    #[error("Multiple CSV files found in archive. Please include only one CSV file.")]
    MultipleCsv,

    #[error("No CSS file found in archive")]
    NoCss,

    #[error("Multiple CSS files found in archive. Please include only one CSS file.")]
    MultipleCss,

    #[error("{name} in archive is not UTF-8 text")]
    NotText { name: String },

    #[error("invalid archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What an imported bundle contained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleContents {
    /// CSV file name without directories or extension
    pub csv_stem: String,
    pub csv_content: String,
    /// Stylesheet file name without directories or extension
    pub css_stem: String,
    pub css_content: String,
    /// First PNG in the bundle, base64-encoded
    pub icon_data: Option<String>,
}

/// Everything an exported bundle holds
#[derive(Debug, Clone, Copy)]
pub struct BundleExport<'a> {
    pub css_file_name: &'a str,
    pub csv_content: &'a str,
    pub css_content: &'a str,
    pub icon_data: Option<&'a str>,
    /// `(name, base64)` for each icon referenced by the document
    pub icons: &'a [(String, String)],
}

fn has_extension(name: &str, ext: &str) -> bool {
    name.to_lowercase().ends_with(ext)
}

fn file_stem(name: &str) -> String {
    let base = name.rsplit('/').next().unwrap_or(name);
    match base.rfind('.') {
        Some(dot) => base[..dot].to_string(),
        None => base.to_string(),
    }
}

fn pick_one(
    names: &[String],
    ext: &str,
    none: ArchiveError,
    many: ArchiveError,
) -> Result<String, ArchiveError> {
    let mut matches = names.iter().filter(|name| has_extension(name, ext));
    match (matches.next(), matches.next()) {
        (Some(name), None) => Ok(name.clone()),
        (None, _) => Err(none),
        (Some(_), Some(_)) => Err(many),
    }
}

fn read_text<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, ArchiveError> {
    let mut bytes = Vec::new();
    archive.by_name(name)?.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|_| ArchiveError::NotText {
        name: name.to_string(),
    })?;
    Ok(text)
}

/// Read a bundle. Nothing is returned unless the bundle holds exactly one
/// CSV and exactly one CSS file.
pub fn read_bundle(bytes: &[u8]) -> Result<BundleContents, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut names = Vec::new();
    for i in 0..archive.len() {
        let file = archive.by_index(i)?;
        let name = file.name().to_string();
        if file.is_dir() || name.starts_with(MACOS_METADATA_PREFIX) {
            continue;
        }
        names.push(name);
    }

    let csv_name = pick_one(&names, ".csv", ArchiveError::NoCsv, ArchiveError::MultipleCsv)?;
    let css_name = pick_one(&names, ".css", ArchiveError::NoCss, ArchiveError::MultipleCss)?;

    let csv_content = read_text(&mut archive, &csv_name)?;
    let css_content = read_text(&mut archive, &css_name)?;

    let icon_data = match names.iter().find(|name| has_extension(name, ".png")) {
        Some(png) => {
            let mut bytes = Vec::new();
            archive.by_name(png)?.read_to_end(&mut bytes)?;
            Some(BASE64.encode(bytes))
        }
        None => None,
    };

    debug!(csv = %csv_name, css = %css_name, icon = icon_data.is_some(), "read camera bundle");
    Ok(BundleContents {
        csv_stem: file_stem(&csv_name),
        csv_content,
        css_stem: file_stem(&css_name),
        css_content,
        icon_data,
    })
}

/// Write a bundle. Icons that are not valid base64 are left out with a
/// warning.
pub fn write_bundle(export: &BundleExport<'_>) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file(format!("{}.csv", export.css_file_name), options)?;
    zip.write_all(export.csv_content.as_bytes())?;
    zip.start_file(format!("{}.css", export.css_file_name), options)?;
    zip.write_all(export.css_content.as_bytes())?;

    let camera_icon = export
        .icon_data
        .map(|data| (CAMERA_ICON_FILE.to_string(), data));
    let named_icons = export
        .icons
        .iter()
        .map(|(name, data)| (format!("{name}.png"), data.as_str()));

    for (file_name, data) in camera_icon.into_iter().chain(named_icons) {
        match BASE64.decode(data.trim()) {
            Ok(png) => {
                zip.start_file(file_name, options)?;
                zip.write_all(&png)?;
            }
            Err(e) => warn!(file = %file_name, error = %e, "skipping icon that is not valid base64"),
        }
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
