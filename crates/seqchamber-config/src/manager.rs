//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{ChamberConfig, ConfigManager as ConfigManagerTrait, LOG_LEVELS},
};

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "SEQCHAMBER".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "SEQCHAMBER".to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("seqchamber")
            .join("config.toml")
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<ChamberConfig> {
        debug!(path = %self.config_path.display(), "loading configuration");

        // Nested keys use a double underscore: SEQCHAMBER_LOGGING__LEVEL
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let chamber_config: ChamberConfig = config.try_deserialize()?;
        self.validate_config(&chamber_config)?;
        Ok(chamber_config)
    }

    fn save_config(&self, config: &ChamberConfig) -> Result<()> {
        self.validate_config(config)?;
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        debug!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }

    fn validate_config(&self, config: &ChamberConfig) -> Result<()> {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                config.logging.level
            )));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::with_path(dir.path().join("absent.toml"))
            .with_env_prefix("SEQCHAMBER_TEST_MISSING");

        let config = manager.load_config().unwrap();
        assert_eq!(config, ChamberConfig::default());
        assert!(config.analysis.store_memory);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\nstore_memory = false\n").unwrap();

        let mut manager =
            ConfigManager::with_path(path).with_env_prefix("SEQCHAMBER_TEST_PARTIAL");
        let config = manager.load_config().unwrap();
        assert!(!config.analysis.store_memory);
        assert_eq!(config.logging, Default::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        std::env::set_var("SEQCHAMBER_TEST_ENV_LOGGING__LEVEL", "debug");

        let mut manager = ConfigManager::with_path(path).with_env_prefix("SEQCHAMBER_TEST_ENV");
        let config = manager.load_config().unwrap();
        std::env::remove_var("SEQCHAMBER_TEST_ENV_LOGGING__LEVEL");

        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(path.clone());

        let mut config = ChamberConfig::default();
        config.logging.json = true;
        config.logging.level = "trace".to_string();
        manager.save_config(&config).unwrap();
        assert!(path.exists());

        let mut reloaded =
            ConfigManager::with_path(path).with_env_prefix("SEQCHAMBER_TEST_SAVE");
        assert_eq!(reloaded.load_config().unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let mut manager = ConfigManager::with_path(path).with_env_prefix("SEQCHAMBER_TEST_BAD");
        let err = manager.load_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_accepts_mixed_case_level() {
        let manager = ConfigManager::new();
        let mut config = ChamberConfig::default();
        config.logging.level = "WARN".to_string();
        assert!(manager.validate_config(&config).is_ok());
    }
}
