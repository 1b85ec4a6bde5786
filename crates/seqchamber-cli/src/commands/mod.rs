// Command handlers for the seqchamber CLI

pub mod analyze;
pub mod batch;
pub mod config;

pub use analyze::AnalyzeCommand;
pub use batch::BatchCommand;
pub use config::ConfigCommand;

use seqchamber_core::PatternChamber;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command against a chamber.
    ///
    /// Returns `false` when any analysis failed.
    fn execute(&self, chamber: &PatternChamber) -> CliResult<bool>;
}
