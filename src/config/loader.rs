//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::Config;
use super::ConfigWarning;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = ".camera-menu.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Path of the first config file that exists: project, then user
pub fn find_config_file(project_root: Option<&Path>) -> Option<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = dirs_config_dir().map(|dir| dir.join("camera-menu/config.toml"));
    project.into_iter().chain(user).find(|path| path.exists())
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(path) = find_config_file(project_root) {
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (CAMERA_MENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = var("CAMERA_MENU_DATA_DIR") {
        config.library.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(path) = var("CAMERA_MENU_STORE_PATH") {
        config.store.path = Some(PathBuf::from(path));
    }

    if let Some(placeholder) = var("CAMERA_MENU_PLACEHOLDER") {
        if !placeholder.trim().is_empty() {
            config.editor.placeholder = placeholder;
        }
    }

    if let Some(val) = var("CAMERA_MENU_FULL_FIDELITY") {
        config.editor.full_fidelity = parse_flag(&val);
    }

    if let Some(val) = var("CAMERA_MENU_CASE_INSENSITIVE") {
        config.search.case_insensitive = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "library",
        "data_dir",
        "store",
        "path",
        "editor",
        "placeholder",
        "full_fidelity",
        "search",
        "case_insensitive",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
