#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # SeqChamber Memory
//!
//! Append-only, in-process record of past sequence analyses. The log keeps a
//! memory entry for every successful analysis and a history record for every
//! stored analysis, and derives aggregate statistics from them on demand.

/// Thread-safe log of entries and records
pub mod memory_log;
/// Stored entry and record types
pub mod models;
/// Aggregates computed from the log
pub mod statistics;

pub use memory_log::MemoryLog;
pub use models::{HistoryRecord, MemoryEntry};
pub use statistics::{HistoryStatistics, MemoryStats, PatternCount};
