//! Records kept by the memory log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use seqchamber_patterns::{PatternKind, PatternResult};

/// A successful analysis remembered by the log.
///
/// Entries are created only by [`crate::MemoryLog`]; callers receive clones,
/// so the stored entry never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntry {
    /// Sequential identifier assigned by the log
    pub id: u64,
    /// Snapshot of the analysed sequence
    pub sequence: Vec<f64>,
    /// Detected pattern
    pub pattern: PatternResult,
    /// Predicted next term
    pub prediction: f64,
    /// When the analysis was recorded
    pub timestamp: DateTime<Utc>,
}

impl MemoryEntry {
    /// Kind of the remembered pattern
    pub fn pattern_kind(&self) -> PatternKind {
        self.pattern.kind()
    }
}

/// Any stored analysis, successful or not, with rendered pattern detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Sequential identifier, shared with the matching memory entry
    pub id: u64,
    /// Snapshot of the analysed sequence
    pub sequence: Vec<f64>,
    /// Detected pattern kind
    pub pattern_type: PatternKind,
    /// Pattern description
    pub description: String,
    /// Display formula
    pub formula: Option<String>,
    /// Predicted next term
    pub prediction: Option<f64>,
    /// Whether a pattern was detected
    pub success: bool,
    /// Error for failed analyses
    pub error: Option<String>,
    /// When the analysis was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Build a record for an analysis
    pub fn new(id: u64, sequence: &[f64], pattern: &PatternResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            sequence: sequence.to_vec(),
            pattern_type: pattern.kind(),
            description: pattern.description().to_string(),
            formula: pattern.formula().map(str::to_string),
            prediction: pattern.next_value(),
            success: !pattern.is_unknown(),
            error: pattern.error().map(str::to_string),
            timestamp,
        }
    }
}
