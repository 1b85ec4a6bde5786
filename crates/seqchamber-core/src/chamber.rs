//! The analysis orchestrator

use serde_json::Value;
use seqchamber_config::AnalysisSettings;
use seqchamber_memory::{HistoryRecord, HistoryStatistics, MemoryEntry, MemoryLog, MemoryStats};
use seqchamber_patterns::PatternDetector;
use tracing::{info, instrument, warn};

use crate::{
    error::AnalysisError,
    outcome::AnalysisOutcome,
    validation::{sequence_from_value, validate_sequence},
};

/// Owns the detector and the memory log.
///
/// Construct one per context that needs its own memory; there is no shared
/// global instance. `PatternChamber` is `Send + Sync` and can be shared behind
/// an `Arc`: detection is pure, and the memory log serialises its writers.
#[derive(Debug, Default)]
pub struct PatternChamber {
    detector: PatternDetector,
    memory: MemoryLog,
    settings: AnalysisSettings,
}

impl PatternChamber {
    /// Create a chamber with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chamber with the given settings
    pub fn with_config(settings: &AnalysisSettings) -> Self {
        Self {
            detector: PatternDetector::new(),
            memory: MemoryLog::new(),
            settings: settings.clone(),
        }
    }

    /// Settings in effect
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Analyze a sequence and predict its next term.
    ///
    /// Invalid input is rejected before detection and never stored. When
    /// `store_memory` is set, every valid analysis is added to the history,
    /// and successful ones also become memory entries.
    #[instrument(skip(self, sequence), fields(len = sequence.len()))]
    pub fn analyze(&self, sequence: &[f64], store_memory: bool) -> AnalysisOutcome {
        if let Err(err) = validate_sequence(sequence) {
            warn!(error = %err, "rejected sequence");
            return AnalysisOutcome::failed(sequence.to_vec(), &err, None, None);
        }

        let pattern = self.detector.detect(sequence);
        let memory_id = store_memory.then(|| self.memory.append(sequence, &pattern));

        if pattern.is_unknown() {
            info!("no pattern detected");
            return AnalysisOutcome::failed(
                sequence.to_vec(),
                &AnalysisError::NoPatternDetected,
                Some(pattern),
                memory_id,
            );
        }

        info!(pattern = %pattern.kind(), prediction = ?pattern.next_value(), "pattern detected");
        AnalysisOutcome::detected(sequence.to_vec(), pattern, memory_id)
    }

    /// Analyze using the configured storage default
    pub fn analyze_default(&self, sequence: &[f64]) -> AnalysisOutcome {
        self.analyze(sequence, self.settings.store_memory)
    }

    /// Analyze untyped JSON input.
    ///
    /// Anything other than an array of numbers fails with invalid input.
    pub fn analyze_value(&self, value: &Value, store_memory: bool) -> AnalysisOutcome {
        match sequence_from_value(value) {
            Ok(sequence) => self.analyze(&sequence, store_memory),
            Err(err) => {
                warn!(error = %err, "rejected input");
                AnalysisOutcome::failed(Vec::new(), &err, None, None)
            }
        }
    }

    /// Remembered successful analyses, oldest first
    pub fn memories(&self) -> Vec<MemoryEntry> {
        self.memory.entries()
    }

    /// Count of memories per pattern type
    pub fn memory_stats(&self) -> MemoryStats {
        self.memory.memory_stats()
    }

    /// Forget everything. Clearing an empty log is a no-op.
    pub fn clear_memories(&self) {
        self.memory.clear();
    }

    /// Statistics over every stored analysis
    pub fn history_analysis(&self) -> HistoryStatistics {
        self.memory.history_statistics()
    }

    /// Every stored analysis with pattern detail, oldest first
    pub fn full_history(&self) -> Vec<HistoryRecord> {
        self.memory.records()
    }
}
