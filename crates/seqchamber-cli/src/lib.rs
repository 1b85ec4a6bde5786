// SeqChamber CLI library

pub mod commands;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
