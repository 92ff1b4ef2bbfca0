//! Configuration file storage.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors from reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home or platform configuration directory.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The default configuration could not be serialized.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Locates and reads the configuration file.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Uses `config_dir` instead of the platform directory.
    #[must_use]
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Loads the configuration from `path_override` or the default location.
    ///
    /// A missing file is created with defaults so users have something to
    /// edit. A malformed file is left alone and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(path = %config_path.display(), "Config file not found, writing defaults");
            let default_config = AppConfig::default();
            Self::write_atomic(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        toml::from_str::<AppConfig>(&content).or_else(|e| {
            warn!(
                path = %config_path.display(),
                error = %e,
                "Malformed config file, using defaults"
            );
            Ok(AppConfig::default())
        })
    }

    fn write_atomic(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("config path has no parent directory"))?;
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(config)?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WhitelistRule;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("nested").join("url-image-auto");
        let manager = StorageManager::with_dir(config_dir.clone());

        manager.load_config(None).unwrap();
        assert!(config_dir.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let config = manager.load_config(None).unwrap();
        assert!(config.convert.randomize_seed);

        let config_file = dir.path().join(CONFIG_FILE_NAME);
        assert!(config_file.exists());

        let reloaded = manager.load_config(None).unwrap();
        assert_eq!(reloaded.convert, config.convert);
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert!(config.convert.convert_markdown);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_load_config_from_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");

        fs::write(
            &custom,
            "[convert]\nwhitelist_rules = [{ host = \"img.example.com\" }]\n",
        )
        .unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(
            config.convert.whitelist_rules,
            vec![WhitelistRule::new("img.example.com", "")]
        );
    }

    #[test]
    fn test_written_config_round_trips() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.convert.whitelist_rules = vec![WhitelistRule::new("cdn.example.com", "/img/")];
        config.chain.pad_plain_text = false;

        StorageManager::write_atomic(&dir.path().join(CONFIG_FILE_NAME), &config).unwrap();

        let loaded = manager.load_config(None).unwrap();
        assert_eq!(loaded.convert, config.convert);
        assert!(!loaded.chain.pad_plain_text);
    }
}
