//! Append-only log of analyses

use chrono::Utc;
use parking_lot::RwLock;
use seqchamber_patterns::PatternResult;
use tracing::{debug, info};

use crate::{
    models::{HistoryRecord, MemoryEntry},
    statistics::{HistoryStatistics, MemoryStats},
};

#[derive(Debug)]
struct LogState {
    entries: Vec<MemoryEntry>,
    records: Vec<HistoryRecord>,
    next_id: u64,
}

/// Thread-safe, append-only record of analyses.
///
/// A single `RwLock` guards both collections and the id counter, so appends
/// and clears are serialised while readers may run concurrently. Ids start at
/// 1 and are never reused, even across [`MemoryLog::clear`].
#[derive(Debug)]
pub struct MemoryLog {
    state: RwLock<LogState>,
}

impl MemoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LogState {
                entries: Vec::new(),
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Append an analysis and return its id.
    ///
    /// Every call adds a history record. Only results with a finite prediction
    /// also add a memory entry. The sequence is copied into the log.
    pub fn append(&self, sequence: &[f64], pattern: &PatternResult) -> u64 {
        let timestamp = Utc::now();
        let mut state = self.state.write();

        let id = state.next_id;
        state.next_id += 1;

        state
            .records
            .push(HistoryRecord::new(id, sequence, pattern, timestamp));

        if let Some(prediction) = pattern.next_value() {
            state.entries.push(MemoryEntry {
                id,
                sequence: sequence.to_vec(),
                pattern: pattern.clone(),
                prediction,
                timestamp,
            });
        }

        debug!(id, pattern = %pattern.kind(), "analysis recorded");
        id
    }

    /// Memory entries, oldest first
    pub fn entries(&self) -> Vec<MemoryEntry> {
        self.state.read().entries.clone()
    }

    /// History records, oldest first
    pub fn records(&self) -> Vec<HistoryRecord> {
        self.state.read().records.clone()
    }

    /// Number of memory entries
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    /// True if no memory entry is stored
    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Number of history records
    pub fn record_count(&self) -> usize {
        self.state.read().records.len()
    }

    /// Remove every entry and record. Returns the number of records removed.
    pub fn clear(&self) -> usize {
        let mut state = self.state.write();
        let removed = state.records.len();
        state.entries.clear();
        state.records.clear();
        info!(removed, "memory log cleared");
        removed
    }

    /// Counts over the memory entries
    pub fn memory_stats(&self) -> MemoryStats {
        MemoryStats::from_entries(&self.state.read().entries)
    }

    /// Statistics over the history records
    pub fn history_statistics(&self) -> HistoryStatistics {
        HistoryStatistics::from_records(&self.state.read().records)
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::new()
    }
}
