//! Aggregate statistics derived from the memory log

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use seqchamber_patterns::PatternKind;

use crate::models::{HistoryRecord, MemoryEntry};

/// Summary of remembered (successful) analyses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    /// Number of memory entries
    pub total_memories: usize,
    /// Count of entries by pattern type name
    pub patterns: BTreeMap<String, usize>,
}

impl MemoryStats {
    /// Count the given entries
    pub fn from_entries(entries: &[MemoryEntry]) -> Self {
        let mut patterns: BTreeMap<String, usize> = BTreeMap::new();
        for entry in entries {
            *patterns
                .entry(entry.pattern_kind().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total_memories: entries.len(),
            patterns,
        }
    }
}

/// Number of analyses with a given pattern kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCount {
    /// Pattern kind
    pub pattern: PatternKind,
    /// Number of analyses
    pub count: usize,
}

/// Statistics over every stored analysis, recomputed on each request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatistics {
    /// Number of stored analyses
    pub total_analyses: usize,
    /// Counts per pattern kind, in order of first appearance
    pub pattern_counts: Vec<PatternCount>,
    /// Mean sequence length, 0 when empty
    pub average_length: f64,
    /// Most frequent kind; ties go to the kind seen first
    pub most_common_pattern: Option<PatternKind>,
    /// Percentage of analyses that found a pattern, 0 when empty
    pub success_rate: f64,
}

impl HistoryStatistics {
    /// Scan `records` and compute the statistics
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total = records.len();
        let pattern_counts = count_in_order(records.iter().map(|r| r.pattern_type));
        let total_length: usize = records.iter().map(|r| r.sequence.len()).sum();
        let successes = records.iter().filter(|r| r.success).count();

        let mut most_common: Option<PatternCount> = None;
        for count in &pattern_counts {
            if most_common.map_or(true, |best| count.count > best.count) {
                most_common = Some(*count);
            }
        }

        Self {
            total_analyses: total,
            average_length: total_length as f64 / total as f64,
            most_common_pattern: most_common.map(|c| c.pattern),
            success_rate: successes as f64 / total as f64 * 100.0,
            pattern_counts,
        }
    }

    /// Number of analyses of the given kind
    pub fn count_for(&self, kind: PatternKind) -> usize {
        self.pattern_counts
            .iter()
            .find(|c| c.pattern == kind)
            .map_or(0, |c| c.count)
    }
}

fn count_in_order(kinds: impl Iterator<Item = PatternKind>) -> Vec<PatternCount> {
    let mut counts: Vec<PatternCount> = Vec::new();
    for kind in kinds {
        match counts.iter_mut().find(|c| c.pattern == kind) {
            Some(existing) => existing.count += 1,
            None => counts.push(PatternCount {
                pattern: kind,
                count: 1,
            }),
        }
    }
    counts
}
