//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

/// Accepted values for [`LoggingSettings::level`]
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChamberConfig {
    /// Analysis behaviour
    pub analysis: AnalysisSettings,
    /// Log output
    pub logging: LoggingSettings,
}

/// Analysis behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Whether analyses are stored in the memory log unless the caller says otherwise
    pub store_memory: bool,
}

/// Log output settings for the binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Maximum level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Include the event target in each line
    pub with_target: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self { store_memory: true }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            with_target: false,
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<ChamberConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &ChamberConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &ChamberConfig) -> Result<(), crate::error::ConfigError>;
}
