//! camera-menu CLI - browse, search and edit camera settings menus
//!
//! Usage: camera-menu <COMMAND>
//!
//! Commands:
//!   list     List cameras grouped by brand
//!   show     Show a camera's menu
//!   search   Find entries by label
//!   help     Print an entry's help text
//!   import   Import a camera bundle
//!   export   Export a camera bundle
//!   remove   Remove an imported camera
//!   dump     Print a camera's menu document
//!   edit     Rename, add or delete entries

mod cli;
mod commands;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use camera_menu::config::{find_config_file, Config};

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.library.data_dir = Some(dir);
    }
    let ctx = CommandContext::new(config, cli.json);

    match cli.command {
        Commands::List => commands::cmd_list(&ctx),
        Commands::Show { id, path } => commands::cmd_show(&ctx, &id, path),
        Commands::Search {
            id,
            query,
            case_sensitive,
        } => commands::cmd_search(&ctx, &id, &query, case_sensitive),
        Commands::Help { id, path } => commands::cmd_help(&ctx, &id, &path),
        Commands::Import { archive, name } => {
            commands::cmd_import(&ctx, &archive, name.as_deref())
        }
        Commands::Export { id, output } => commands::cmd_export(&ctx, &id, output),
        Commands::Remove { id } => commands::cmd_remove(&ctx, &id),
        Commands::Dump { id, lossy } => commands::cmd_dump(&ctx, &id, lossy),
        Commands::Edit {
            id,
            dry_run,
            action,
        } => commands::cmd_edit(&ctx, &id, action, dry_run),
    }
}

/// Stderr logging: `RUST_LOG` when set, otherwise from the `-v` count
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("camera_menu={level},warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Explicit `--config`, else the project or user config file, then
/// `CAMERA_MENU_*` overrides on top
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(Some(&std::env::current_dir()?)),
    };

    let config = match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)?;
            for warning in warnings {
                warn!("{warning}");
            }
            config
        }
        None => Config::default(),
    };
    Ok(config.with_env_overrides())
}

fn report_error(err: &anyhow::Error, json: bool) {
    if json {
        let chain: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
        let event = json!({
            "type": "error",
            "message": err.to_string(),
            "causes": chain,
        });
        if ui::json::emit(event).is_ok() {
            return;
        }
    }

    let caps = ui::terminal::detect_capabilities();
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        message.push_str(&format!("\n  caused by: {cause}"));
    }
    eprint!(
        "{}",
        ui::views::status::render_error(&message, caps.supports_color, caps.supports_unicode)
    );
}
