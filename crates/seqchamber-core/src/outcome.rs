//! Result of a single analysis

use serde::{Deserialize, Serialize};
use seqchamber_patterns::{PatternKind, PatternResult};

use crate::error::AnalysisError;

/// Everything a caller learns from one analysis.
///
/// Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    /// Whether a pattern was detected
    pub success: bool,
    /// The sequence as received
    pub sequence: Vec<f64>,
    /// Predicted next term
    pub prediction: Option<f64>,
    /// Detected pattern; `Unknown` when no detector matched, absent for invalid input
    pub pattern: Option<PatternResult>,
    /// Failure message
    pub error: Option<String>,
    /// Hint for failed analyses
    pub suggestion: Option<String>,
    /// Id assigned by the memory log when the analysis was stored
    pub memory_id: Option<u64>,
}

impl AnalysisOutcome {
    /// Outcome for a detected pattern
    pub fn detected(sequence: Vec<f64>, pattern: PatternResult, memory_id: Option<u64>) -> Self {
        Self {
            success: true,
            sequence,
            prediction: pattern.next_value(),
            pattern: Some(pattern),
            error: None,
            suggestion: None,
            memory_id,
        }
    }

    /// Outcome for a failed analysis
    pub fn failed(
        sequence: Vec<f64>,
        error: &AnalysisError,
        pattern: Option<PatternResult>,
        memory_id: Option<u64>,
    ) -> Self {
        Self {
            success: false,
            sequence,
            prediction: None,
            pattern,
            error: Some(error.to_string()),
            suggestion: Some(error.suggestion().to_string()),
            memory_id,
        }
    }

    /// Kind of the detected pattern, if any
    pub fn pattern_kind(&self) -> Option<PatternKind> {
        self.pattern.as_ref().map(PatternResult::kind)
    }
}
