// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seqchamber_config::{ChamberConfig, ConfigManager, ConfigManagerTrait};
use seqchamber_core::{PatternChamber, PatternKind};
use tracing::debug;

use crate::{
    commands::{AnalyzeCommand, BatchCommand, Command, ConfigCommand},
    error::CliResult,
};

/// SeqChamber - numeric sequence pattern detection
#[derive(Parser, Debug)]
#[command(name = "seqchamber")]
#[command(about = "Detect the pattern behind a numeric sequence and predict its next term")]
#[command(
    long_about = "SeqChamber recognises arithmetic, geometric, Fibonacci-like and polynomial \
                  (degree 1-5) sequences and predicts the next term.\n\n\
                  Examples:\n  \
                  seqchamber analyze 2 4 6 8\n  \
                  seqchamber analyze 1,4,9,16 --json\n  \
                  seqchamber batch sequences.txt"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze one sequence
    #[command(about = "Analyze one sequence and predict its next term")]
    Analyze {
        /// Terms of the sequence, separated by spaces or commas
        #[arg(value_name = "N", required = true, num_args = 1.., allow_negative_numbers = true)]
        numbers: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Do not record the analysis in memory
        #[arg(long)]
        no_store: bool,
    },

    /// Analyze every sequence in a file
    #[command(about = "Analyze one sequence per line of a file and summarise the history")]
    Batch {
        /// File with one sequence per line; '#' starts a comment line
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print outcomes and statistics as JSON
        #[arg(long)]
        json: bool,

        /// Only show outcomes of this pattern type (arithmetic, geometric, polynomial, fibonacci, unknown)
        #[arg(long, value_name = "KIND", value_parser = parse_pattern_kind)]
        only: Option<PatternKind>,
    },

    /// Show or create the configuration file
    #[command(about = "Print the effective configuration or write a default file")]
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

fn parse_pattern_kind(value: &str) -> Result<PatternKind, String> {
    value.parse::<PatternKind>().map_err(|e| e.to_string())
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler.
    ///
    /// Returns `false` when any analysis failed.
    pub fn route() -> CliResult<bool> {
        let cli = Cli::parse();

        let mut manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        let config = manager.load_config()?;

        crate::logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;
        debug!(path = %manager.config_path().display(), "configuration loaded");

        Self::execute(&cli, &config, &manager)
    }

    /// Execute a command
    pub fn execute(cli: &Cli, config: &ChamberConfig, manager: &ConfigManager) -> CliResult<bool> {
        let chamber = PatternChamber::with_config(&config.analysis);

        match &cli.command {
            Commands::Analyze {
                numbers,
                json,
                no_store,
            } => AnalyzeCommand::new(numbers.clone(), *json, !*no_store).execute(&chamber),
            Commands::Batch { file, json, only } => BatchCommand::new(file.clone(), *json)
                .with_filter(*only)
                .execute(&chamber),
            Commands::Config { init } => {
                ConfigCommand::new(config.clone(), manager, *init).execute(&chamber)
            }
        }
    }
}
