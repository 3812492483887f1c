//! Bundle import, export and removal

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use super::CommandContext;
use crate::ui::json;
use crate::ui::text::{glyphs, ColoredText};

fn done(ctx: &CommandContext, message: String) {
    println!(
        "{} {}",
        ColoredText::success(glyphs::success(ctx.unicode())).render(ctx.color()),
        message
    );
}

pub fn cmd_import(ctx: &CommandContext, archive: &Path, name: Option<&str>) -> Result<()> {
    let bytes =
        fs::read(archive).with_context(|| format!("failed to read {}", archive.display()))?;
    let mut catalog = ctx.catalog()?;
    let entry = catalog.import_archive(&bytes, name)?;
    let summary = entry.summary();

    if ctx.json {
        json::emit(json!({
            "type": "import",
            "camera": summary,
        }))?;
        return Ok(());
    }

    done(ctx, format!("Imported {} as {}", summary.label, summary.id));
    Ok(())
}

pub fn cmd_export(ctx: &CommandContext, id: &str, output: Option<PathBuf>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let bytes = catalog.export_archive(id)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{id}.zip")));
    fs::write(&path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;

    if ctx.json {
        json::emit(json!({
            "type": "export",
            "id": id,
            "path": path.display().to_string(),
            "bytes": bytes.len(),
        }))?;
        return Ok(());
    }

    done(ctx, format!("Exported {id} to {}", path.display()));
    Ok(())
}

pub fn cmd_remove(ctx: &CommandContext, id: &str) -> Result<()> {
    let mut catalog = ctx.catalog()?;
    let record = catalog.remove(id)?;

    if ctx.json {
        json::emit(json!({
            "type": "remove",
            "id": record.id,
            "display_name": record.display_name,
        }))?;
        return Ok(());
    }

    done(ctx, format!("Removed {} ({})", record.display_name, record.id));
    Ok(())
}
