// Logging initialisation for the binary

use seqchamber_config::LoggingSettings;
use tracing::Level;

use crate::error::{CliError, CliResult};

/// Resolve the effective level from configuration and CLI flags
pub fn resolve_level(settings: &LoggingSettings, verbose: bool, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    if verbose {
        return Level::DEBUG;
    }
    match settings.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global tracing subscriber, writing to stderr
pub fn init_logging(settings: &LoggingSettings, verbose: bool, quiet: bool) -> CliResult<()> {
    let level = resolve_level(settings, verbose, quiet);

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(settings.with_target)
        .with_writer(std::io::stderr);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| CliError::Internal(format!("failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(level: &str) -> LoggingSettings {
        LoggingSettings {
            level: level.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_override_configured_level() {
        assert_eq!(resolve_level(&settings("warn"), true, false), Level::DEBUG);
        assert_eq!(resolve_level(&settings("trace"), false, true), Level::ERROR);
        assert_eq!(resolve_level(&settings("trace"), true, true), Level::ERROR);
    }

    #[test]
    fn test_configured_level() {
        assert_eq!(resolve_level(&settings("warn"), false, false), Level::WARN);
        assert_eq!(resolve_level(&settings("TRACE"), false, false), Level::TRACE);
        assert_eq!(resolve_level(&settings("bogus"), false, false), Level::INFO);
    }
}
