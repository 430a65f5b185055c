//! Startup config loading.

use std::path::Path;

use phosphor_common::ConfigError;
use tracing::{info, warn};

use crate::schema::PhosphorConfig;
use crate::store::ConfigStore;

/// Load a config document from `path`, merged over the defaults.
pub fn load_from_path(path: &Path) -> Result<PhosphorConfig, ConfigError> {
    let mut store = ConfigStore::default();
    store.import_file(path)?;
    Ok(store.config().clone())
}

/// Load the optional startup `config.json`.
///
/// A missing or broken file is not an error: it is logged and the
/// defaults are used.
pub fn load_startup(path: &Path) -> PhosphorConfig {
    match load_from_path(path) {
        Ok(config) => {
            info!("loaded startup config from {}", path.display());
            config
        }
        Err(ConfigError::FileNotFound(_)) => {
            info!("no startup config at {}, using defaults", path.display());
            PhosphorConfig::default()
        }
        Err(e) => {
            warn!("startup config ignored, using defaults: {e}");
            PhosphorConfig::default()
        }
    }
}
