//! Built-in camera library
//!
//! A data directory of `<id>.csv` menu documents, each styled by the
//! `<css_file>.css` next to it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::MenuResult;

/// One built-in document found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFile {
    pub id: String,
    pub csv_path: PathBuf,
    pub csv_content: String,
}

/// Read every `*.csv` in `dir`, sorted by id. A missing directory is an
/// empty library; unreadable files are skipped with a warning.
pub fn scan_library(dir: &Path) -> MenuResult<Vec<LibraryFile>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no camera library directory");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv || !path.is_file() {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(csv_content) => files.push(LibraryFile {
                id,
                csv_path: path,
                csv_content,
            }),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable menu document"),
        }
    }

    files.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(files)
}

/// Path of the stylesheet named by a document's `css_file`
pub fn stylesheet_path(dir: &Path, css_file: &str) -> PathBuf {
    dir.join(format!("{css_file}.css"))
}

/// Replace a built-in document's text
pub fn write_document(path: &Path, content: &str) -> MenuResult<()> {
    let tmp = path.with_extension("csv.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "wrote menu document");
    Ok(())
}
