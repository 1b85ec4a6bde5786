// Analyze every sequence in a file

use std::{fs, path::PathBuf};

use seqchamber_core::{AnalysisOutcome, PatternChamber, PatternKind};
use serde_json::json;
use tracing::debug;

use super::Command;
use crate::{
    error::{CliError, CliResult},
    input::parse_batch,
    output::OutputStyle,
};

/// `seqchamber batch <FILE>`
pub struct BatchCommand {
    pub file: PathBuf,
    pub json: bool,
    pub only: Option<PatternKind>,
}

impl BatchCommand {
    pub fn new(file: PathBuf, json: bool) -> Self {
        Self {
            file,
            json,
            only: None,
        }
    }

    /// Show only outcomes of the given kind. Every sequence is still analyzed.
    pub fn with_filter(mut self, only: Option<PatternKind>) -> Self {
        self.only = only;
        self
    }

    /// Whether an outcome passes the display filter
    pub fn shows(&self, outcome: &AnalysisOutcome) -> bool {
        self.only.map_or(true, |kind| outcome.pattern_kind() == Some(kind))
    }

    /// Analyze each sequence, storing according to the chamber's settings
    pub fn run(&self, chamber: &PatternChamber) -> CliResult<Vec<AnalysisOutcome>> {
        let contents = fs::read_to_string(&self.file)?;
        let batch = parse_batch(&contents)?;
        debug!(file = %self.file.display(), sequences = batch.len(), "loaded batch");

        Ok(batch
            .iter()
            .map(|(_, sequence)| chamber.analyze_default(sequence))
            .collect())
    }
}

impl Command for BatchCommand {
    fn execute(&self, chamber: &PatternChamber) -> CliResult<bool> {
        let outcomes = self.run(chamber)?;
        let all_succeeded = outcomes.iter().all(|o| o.success);
        let shown: Vec<&AnalysisOutcome> = outcomes.iter().filter(|o| self.shows(o)).collect();

        if self.json {
            let report = json!({
                "outcomes": shown,
                "memoryStats": chamber.memory_stats(),
                "history": chamber.history_analysis(),
            });
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", rendered);
        } else {
            let style = OutputStyle::default();
            for outcome in &shown {
                println!("{}\n", style.outcome(outcome));
            }
            println!("{}", style.statistics(&chamber.history_analysis()));
        }

        Ok(all_succeeded)
    }
}
