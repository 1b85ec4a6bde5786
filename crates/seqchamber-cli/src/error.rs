// CLI error types

use thiserror::Error;

/// Errors surfaced to the command-line user
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'seqchamber --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck the file passed with --config or SEQCHAMBER_* variables.",
                    msg
                )
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }
}

impl From<seqchamber_config::ConfigError> for CliError {
    fn from(err: seqchamber_config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
