//! Error types for pattern detection

use thiserror::Error;

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors raised by the pattern crate.
///
/// Detectors never fail: a sequence that does not match a detector is a
/// normal negative result. These errors only cover parsing of pattern data
/// handed in from outside.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern type name that does not map to a known pattern kind
    #[error("Unknown pattern type: {0}")]
    UnknownPatternKind(String),
}
