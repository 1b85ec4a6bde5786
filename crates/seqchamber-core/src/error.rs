//! Error types for sequence analysis

use seqchamber_patterns::{NO_PATTERN_ERROR, NO_PATTERN_SUGGESTION};
use thiserror::Error;

/// Suggestion attached to rejected input
pub const INVALID_INPUT_SUGGESTION: &str = "Provide at least 2 finite numbers";

/// Reasons an analysis fails.
///
/// These never cross [`crate::PatternChamber::analyze`] as `Err`; they are
/// rendered into the outcome's `error` and `suggestion` fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input is not a sequence, is too short, or holds a non-finite value
    #[error("{0}")]
    InvalidInput(String),

    /// Every detector declined the sequence
    #[error("{}", NO_PATTERN_ERROR)]
    NoPatternDetected,
}

impl AnalysisError {
    /// Hint shown alongside the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput(_) => INVALID_INPUT_SUGGESTION,
            AnalysisError::NoPatternDetected => NO_PATTERN_SUGGESTION,
        }
    }
}
