//! Use Case Factory
//!
//! Creates the catalog with its infrastructure dependencies wired up.

use std::path::PathBuf;

use crate::application::Catalog;
use crate::config::Config;
use crate::error::MenuResult;
use crate::infrastructure::TomlCameraStore;

/// The catalog as the command line uses it
pub type ConcreteCatalog = Catalog<TomlCameraStore>;

/// Record store at the configured path, or the default one
pub fn create_store(config: &Config) -> TomlCameraStore {
    match &config.store.path {
        Some(path) => TomlCameraStore::with_path(path.clone()),
        None => TomlCameraStore::new(),
    }
}

/// Where cameras are stored for this configuration
pub fn store_path(config: &Config) -> PathBuf {
    create_store(config).path().to_path_buf()
}

/// Load every camera: built-ins from the configured data directory and
/// user-added ones from the record store.
pub fn create_catalog(config: &Config) -> MenuResult<ConcreteCatalog> {
    let store = create_store(config);
    let catalog = Catalog::load(store, config.library.data_dir.as_deref())?;
    Ok(catalog.with_fidelity(config.fidelity()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn catalog_uses_configured_locations() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(data.join("cam.csv"), "Level 1\nPhoto\n").unwrap();

        let mut config = Config::default();
        config.library.data_dir = Some(data);
        config.store.path = Some(dir.path().join("cameras.toml"));

        assert_eq!(store_path(&config), dir.path().join("cameras.toml"));
        let catalog = create_catalog(&config).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["cam"]);
    }
}
