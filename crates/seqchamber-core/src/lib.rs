#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # SeqChamber Core
//!
//! The analysis entry point. A [`PatternChamber`] validates raw sequences,
//! runs the pattern detectors, and keeps an in-process memory of past
//! analyses. Failures are returned inside [`AnalysisOutcome`], never raised.
//!
//! ```
//! use seqchamber_core::PatternChamber;
//!
//! let chamber = PatternChamber::new();
//! let outcome = chamber.analyze(&[2.0, 4.0, 6.0, 8.0], true);
//! assert!(outcome.success);
//! assert_eq!(outcome.prediction, Some(10.0));
//! assert_eq!(chamber.memories().len(), 1);
//! ```

pub mod chamber;
pub mod error;
pub mod outcome;
pub mod validation;

pub use chamber::PatternChamber;
pub use error::AnalysisError;
pub use outcome::AnalysisOutcome;
pub use validation::{sequence_from_value, validate_sequence, MIN_SEQUENCE_LEN};

pub use seqchamber_memory::{HistoryRecord, HistoryStatistics, MemoryEntry, MemoryStats};
pub use seqchamber_patterns::{format_number, PatternKind, PatternResult};
