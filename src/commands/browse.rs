//! Read-only commands: list, show, search, help and dump

use anyhow::Result;
use serde_json::json;

use camera_menu::domain::services::{search, Fidelity};
use camera_menu::{MenuError, SelectionPath, HELP_PATH_SEPARATOR};

use super::CommandContext;
use crate::ui::json;
use crate::ui::views::catalog::CatalogView;
use crate::ui::views::menu::{render_help, MenuView};
use crate::ui::views::search::SearchView;

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    let groups = catalog.grouped_by_brand();

    if ctx.json {
        json::emit(json!({
            "type": "list",
            "count": catalog.len(),
            "brands": groups,
        }))?;
        return Ok(());
    }

    print!("{}", CatalogView::new(&groups).render(ctx.color()));
    Ok(())
}

pub fn cmd_show(ctx: &CommandContext, id: &str, path: Option<SelectionPath>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let document = catalog.document_or_empty(id);
    let selection = path.unwrap_or_default();
    let tree = document.tree();

    if ctx.json {
        let mut valid = selection.clone();
        valid.clamp(tree);
        let crumbs = valid.breadcrumbs(tree);
        let help = if crumbs.is_empty() {
            None
        } else {
            document.help().get_for(&crumbs)
        };
        let levels: Vec<_> = selection
            .levels(tree)
            .into_iter()
            .map(|level| {
                let entries: Vec<_> = level
                    .parent
                    .iter()
                    .map(|node| {
                        json!({
                            "label": node.label(),
                            "icon": node.icon(),
                            "submenu": !node.is_leaf(),
                        })
                    })
                    .collect();
                json!({
                    "depth": level.depth,
                    "selected": level.selected,
                    "entries": entries,
                })
            })
            .collect();

        json::emit(json!({
            "type": "show",
            "id": document.id(),
            "camera": document.identity(),
            "selection": valid.to_string(),
            "breadcrumbs": crumbs,
            "levels": levels,
            "help": help,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        MenuView::new(&document, &selection).render(ctx.color(), ctx.unicode())
    );
    Ok(())
}

pub fn cmd_search(ctx: &CommandContext, id: &str, query: &str, case_sensitive: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let entry = catalog.entry(id)?;
    let case_insensitive = !case_sensitive && ctx.config.search.case_insensitive;
    let hits: Vec<_> = search(entry.document.tree(), query, case_insensitive).collect();

    if ctx.json {
        let matches: Vec<_> = hits
            .iter()
            .map(|hit| {
                json!({
                    "label": hit.node.label(),
                    "ancestors": hit.ancestors,
                    "breadcrumb": hit.breadcrumb(),
                    "path": hit.selection().to_string(),
                })
            })
            .collect();
        json::emit(json!({
            "type": "search",
            "id": id,
            "query": query,
            "count": matches.len(),
            "matches": matches,
        }))?;
        return Ok(());
    }

    print!("{}", SearchView::new(query, &hits).render(ctx.color()));
    Ok(())
}

pub fn cmd_help(ctx: &CommandContext, id: &str, path: &SelectionPath) -> Result<()> {
    let catalog = ctx.catalog()?;
    let document = &catalog.entry(id)?.document;
    let labels = document
        .tree()
        .labels_along(path.as_slice())
        .filter(|labels| !labels.is_empty())
        .ok_or_else(|| MenuError::InvalidPath {
            path: path.as_slice().to_vec(),
        })?;
    let text = document.help().get_for(&labels);
    let breadcrumb = labels.join(HELP_PATH_SEPARATOR);

    if ctx.json {
        json::emit(json!({
            "type": "help",
            "id": id,
            "path": path.to_string(),
            "breadcrumb": breadcrumb,
            "help": text,
        }))?;
        return Ok(());
    }

    print!("{}", render_help(&breadcrumb, text, ctx.color()));
    Ok(())
}

pub fn cmd_dump(ctx: &CommandContext, id: &str, lossy: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let document = &catalog.entry(id)?.document;
    let fidelity = if lossy {
        Fidelity::Lossy
    } else {
        ctx.config.fidelity()
    };
    let csv = document.to_csv(fidelity)?;

    if ctx.json {
        json::emit(json!({
            "type": "dump",
            "id": id,
            "lossy": fidelity == Fidelity::Lossy,
            "csv": csv,
        }))?;
        return Ok(());
    }

    print!("{csv}");
    Ok(())
}
