//! Menu edits from the command line

use anyhow::Result;
use serde_json::json;

use camera_menu::{EditSession, SelectionPath};

use super::CommandContext;
use crate::cli::EditAction;
use crate::ui::json;
use crate::ui::views::status::render_edit;

/// Apply one edit to a session, returning a description of what changed
fn apply(session: &mut EditSession, action: EditAction) -> Result<String> {
    let message = match action {
        EditAction::Rename { path, label } => {
            session.rename_node(path.as_slice(), &label)?;
            if label.trim().is_empty() {
                format!("Deleted entry {path}")
            } else {
                format!("Renamed entry {path} to '{}'", label.trim())
            }
        }
        EditAction::AddChild { path } => {
            let parent = path.unwrap_or_default();
            let added = SelectionPath::from(session.add_child(parent.as_slice())?);
            format!("Added entry {added}")
        }
        EditAction::AddSibling { path } => {
            session.set_selection(path.unwrap_or_default());
            let added = SelectionPath::from(session.add_sibling()?);
            format!("Added entry {added}")
        }
        EditAction::Delete { path } => {
            session.delete_node(path.as_slice())?;
            format!("Deleted entry {path}")
        }
    };
    Ok(message)
}

pub fn cmd_edit(ctx: &CommandContext, id: &str, action: EditAction, dry_run: bool) -> Result<()> {
    let mut catalog = ctx.catalog()?;
    let document = catalog.entry(id)?.document.clone();
    let mut session = EditSession::new(id, document.tree(), document.help())
        .with_placeholder(ctx.config.editor.placeholder.clone());

    let message = apply(&mut session, action)?;

    let csv = if dry_run {
        document.apply(&session).to_csv(ctx.config.fidelity())?
    } else {
        let committed = catalog.commit(&session)?;
        committed.document.to_csv(ctx.config.fidelity())?
    };

    if ctx.json {
        json::emit(json!({
            "type": "edit",
            "id": id,
            "message": message,
            "selection": session.selection().to_string(),
            "dry_run": dry_run,
            "csv": csv,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_edit(
            &message,
            id,
            session.selection(),
            dry_run,
            ctx.color(),
            ctx.unicode()
        )
    );
    if dry_run {
        print!("{csv}");
    }
    Ok(())
}
