//! SeqChamber Configuration Management
//!
//! Loads engine and logging settings from an optional TOML file layered under
//! `SEQCHAMBER_*` environment variables, validates them, and writes them back.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AnalysisSettings, ChamberConfig, ConfigManager as ConfigManagerTrait, LoggingSettings,
    LOG_LEVELS,
};
