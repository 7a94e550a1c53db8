//! Wires configuration, storage and catalog into a [`TalesApp`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use tales_application::TalesApp;
use tales_core::RootConfig;
use tales_core::store::{JsonStore, KeyValueStore};
use tales_infrastructure::{
    ConfigService, FileKeyValueStore, JsonFileCatalog, MemoryKeyValueStore, TalesPaths,
};

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub ephemeral: bool,
}

/// Loads the configuration, applying command-line overrides.
pub fn load_config(options: &StartupOptions) -> Result<RootConfig> {
    let service = match &options.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let mut config = service.load()?;

    if let Some(catalog) = &options.catalog {
        config.catalog_path = catalog.clone();
    }
    Ok(config)
}

/// Builds the controller. The catalog is read later, on `LoadCatalog`.
pub fn build_app(options: &StartupOptions, config: &RootConfig) -> Result<TalesApp> {
    let raw: Arc<dyn KeyValueStore> = if options.ephemeral {
        tracing::info!("Using in-memory store; nothing will be persisted");
        Arc::new(MemoryKeyValueStore::new())
    } else {
        let path = match &options.store {
            Some(path) => path.clone(),
            None => TalesPaths::store_file()
                .map_err(|e| anyhow!("Failed to resolve store location: {}", e))?,
        };
        tracing::debug!(path = %path.display(), "Using file store");
        Arc::new(FileKeyValueStore::new(path))
    };

    let catalog = Arc::new(JsonFileCatalog::new(config.catalog_path.clone()));
    Ok(TalesApp::new(JsonStore::new(raw), catalog, config.locale))
}
