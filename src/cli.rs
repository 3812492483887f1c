use std::path::PathBuf;

use camera_menu::SelectionPath;
use clap::{Parser, Subcommand};

/// camera-menu - browse, search and edit camera settings menus
#[derive(Parser, Debug)]
#[command(name = "camera-menu")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory of built-in menu documents
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of .camera-menu.toml or the user config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cameras grouped by brand
    List,

    /// Show a camera's menu, opened at a path
    Show {
        /// Camera id
        id: String,

        /// Selected entry per level, e.g. 0.1.2
        #[arg(long)]
        path: Option<SelectionPath>,
    },

    /// Find entries whose label contains a query
    Search {
        /// Camera id
        id: String,

        /// Text to look for
        query: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Print the help text for one entry
    Help {
        /// Camera id
        id: String,

        /// Entry path, e.g. 0.1.2
        #[arg(long)]
        path: SelectionPath,
    },

    /// Import a camera bundle (.zip with one .csv and one .css)
    Import {
        /// Bundle archive
        archive: PathBuf,

        /// Display name for the camera (split into brand and model)
        #[arg(long)]
        name: Option<String>,
    },

    /// Export a camera as a bundle archive
    Export {
        /// Camera id
        id: String,

        /// Output file (defaults to <id>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove an imported camera
    Remove {
        /// Camera id
        id: String,
    },

    /// Print a camera's menu document
    Dump {
        /// Camera id
        id: String,

        /// Labels only: drop icon tags and help text
        #[arg(long)]
        lossy: bool,
    },

    /// Edit a camera's menu
    Edit {
        /// Camera id
        id: String,

        /// Show the result without saving it
        #[arg(long, global = true)]
        dry_run: bool,

        #[command(subcommand)]
        action: EditAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum EditAction {
    /// Rename an entry (an empty label deletes it)
    Rename {
        /// Entry path, e.g. 0.1
        path: SelectionPath,

        /// New label
        label: String,
    },

    /// Add a placeholder entry under a category (the top level by default)
    AddChild {
        /// Parent path, e.g. 0.1
        path: Option<SelectionPath>,
    },

    /// Add a placeholder entry next to the selected one
    AddSibling {
        /// Selected entry path, e.g. 0.1
        path: Option<SelectionPath>,
    },

    /// Delete an entry and everything below it
    Delete {
        /// Entry path, e.g. 0.1
        path: SelectionPath,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_path() {
        let cli = Cli::try_parse_from(["camera-menu", "show", "cam", "--path", "0.2"]).unwrap();
        match cli.command {
            Commands::Show { id, path } => {
                assert_eq!(id, "cam");
                assert_eq!(path, Some(SelectionPath::from(vec![0, 2])));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_path() {
        let err = Cli::try_parse_from(["camera-menu", "help", "cam", "--path", "0.x"]).unwrap_err();
        assert!(err.to_string().contains("invalid menu path"));
    }

    #[test]
    fn edit_flags_after_action() {
        let cli = Cli::try_parse_from([
            "camera-menu",
            "--json",
            "edit",
            "cam",
            "rename",
            "0",
            "Still",
            "--dry-run",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Edit {
                dry_run: true,
                action: EditAction::Rename { label, .. },
                ..
            } => assert_eq!(label, "Still"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
