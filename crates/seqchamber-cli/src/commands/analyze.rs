// Analyze a single sequence given on the command line

use seqchamber_core::PatternChamber;

use super::Command;
use crate::{
    error::{CliError, CliResult},
    input::parse_arguments,
    output::OutputStyle,
};

/// `seqchamber analyze <N>...`
pub struct AnalyzeCommand {
    pub numbers: Vec<String>,
    pub json: bool,
    pub store: bool,
}

impl AnalyzeCommand {
    pub fn new(numbers: Vec<String>, json: bool, store: bool) -> Self {
        Self {
            numbers,
            json,
            store,
        }
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, chamber: &PatternChamber) -> CliResult<bool> {
        let sequence = parse_arguments(&self.numbers)?;
        let outcome = chamber.analyze(&sequence, self.store);

        if self.json {
            let rendered = serde_json::to_string_pretty(&outcome)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", rendered);
        } else {
            println!("{}", OutputStyle::default().outcome(&outcome));
        }

        Ok(outcome.success)
    }
}
