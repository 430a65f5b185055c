//! The live configuration store.
//!
//! Owns the single `PhosphorConfig` for the session. Every mutation goes
//! through clamping and bumps a revision counter so consumers (the uniform
//! bridge, the layout) can tell that something changed.

use std::path::Path;

use phosphor_common::ConfigError;
use serde_json::Value;
use tracing::{info, warn};

use crate::json_writer::{config_to_json, save_config_to_path};
use crate::merge::deep_merge;
use crate::schema::PhosphorConfig;
use crate::validation::{self, ClampedField};

pub struct ConfigStore {
    config: PhosphorConfig,
    revision: u64,
}

impl ConfigStore {
    /// Wrap an initial config. The config is clamped on the way in.
    pub fn new(mut config: PhosphorConfig) -> Self {
        log_clamped(&validation::clamp(&mut config));
        Self {
            config,
            revision: 0,
        }
    }

    pub fn config(&self) -> &PhosphorConfig {
        &self.config
    }

    /// Monotonic counter bumped on every successful change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mutate the config in place, then clamp it back into range.
    pub fn update(&mut self, f: impl FnOnce(&mut PhosphorConfig)) -> Vec<ClampedField> {
        f(&mut self.config);
        let clamped = validation::clamp(&mut self.config);
        log_clamped(&clamped);
        self.revision += 1;
        clamped
    }

    /// Deep-merge a JSON document over the current config.
    ///
    /// The document is parsed, merged, deserialized, clamped and validated
    /// against a copy; the live config only changes if every step succeeds.
    pub fn apply_json(&mut self, json: &str) -> Result<Vec<ClampedField>, ConfigError> {
        let overlay: Value = serde_json::from_str(json)
            .map_err(|e| ConfigError::ParseError(format!("invalid JSON: {e}")))?;
        if !overlay.is_object() {
            return Err(ConfigError::ParseError(
                "top-level JSON value must be an object".into(),
            ));
        }

        let mut merged = serde_json::to_value(&self.config)
            .map_err(|e| ConfigError::ParseError(format!("failed to encode config: {e}")))?;
        deep_merge(&mut merged, overlay);

        let mut candidate: PhosphorConfig = serde_json::from_value(merged)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        let clamped = validation::clamp(&mut candidate);
        validation::validate(&candidate)?;

        log_clamped(&clamped);
        self.config = candidate;
        self.revision += 1;
        Ok(clamped)
    }

    /// Read a JSON document from disk and apply it.
    pub fn import_file(&mut self, path: &Path) -> Result<Vec<ClampedField>, ConfigError> {
        let contents = read_config_file(path)?;
        let clamped = self.apply_json(&contents)?;
        info!("imported config from {}", path.display());
        Ok(clamped)
    }

    pub fn export_json(&self) -> Result<String, ConfigError> {
        config_to_json(&self.config)
    }

    pub fn export_file(&self, path: &Path) -> Result<(), ConfigError> {
        save_config_to_path(&self.config, path)?;
        info!("exported config to {}", path.display());
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(PhosphorConfig::default())
    }
}

pub(crate) fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })
}

fn log_clamped(clamped: &[ClampedField]) {
    for field in clamped {
        warn!(
            field = %field.name,
            value = field.value,
            clamped = field.clamped,
            "config value out of range, clamped"
        );
    }
}
