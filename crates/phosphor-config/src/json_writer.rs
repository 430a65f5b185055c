//! Write a config to JSON on disk.
//!
//! Uses atomic writes (write to `.tmp`, then rename) so an interrupted
//! export never leaves a truncated document behind.

use std::path::Path;

use phosphor_common::ConfigError;

use crate::schema::PhosphorConfig;

/// File name used by the export keybind.
pub const EXPORT_FILE_NAME: &str = "terminal-config.json";

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PhosphorConfig) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::WriteError(format!("failed to serialize config: {e}")))
}

/// Write config to a specific path.
///
/// Creates parent directories if they don't exist.
pub fn save_config_to_path(config: &PhosphorConfig, path: &Path) -> Result<(), ConfigError> {
    let json = config_to_json(config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| {
        ConfigError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &json).map_err(|e2| {
            ConfigError::WriteError(format!("failed to write {}: {e2}", path.display()))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "config exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn export_writes_parseable_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let config = PhosphorConfig::default();
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: PhosphorConfig = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn export_is_pretty_printed() {
        let json = config_to_json(&PhosphorConfig::default()).unwrap();
        assert!(json.contains("\n  \"crt\": {"));
        assert!(json.contains("\"bootSequence\""));
    }

    #[test]
    fn export_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join(EXPORT_FILE_NAME);

        save_config_to_path(&PhosphorConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn export_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        save_config_to_path(&PhosphorConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists(), "tmp file should be renamed away");
    }
}
