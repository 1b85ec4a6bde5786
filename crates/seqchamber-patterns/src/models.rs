//! Data models for pattern detection

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::PatternError, tolerance::is_negligible};

/// Error message carried by [`PatternResult::Unknown`]
pub const NO_PATTERN_ERROR: &str = "No pattern detected";

/// Suggestion carried by [`PatternResult::Unknown`]
pub const NO_PATTERN_SUGGESTION: &str =
    "Try an arithmetic, geometric, polynomial (degree 1-5) or Fibonacci-like sequence";

/// Pattern detected in a numeric sequence.
///
/// Every variant except [`PatternResult::Unknown`] carries a finite
/// predicted next term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PatternResult {
    /// Constant difference between consecutive terms
    #[serde(rename_all = "camelCase")]
    Arithmetic {
        /// Human-readable description
        description: String,
        /// Display formula
        formula: String,
        /// Common difference
        common_difference: f64,
        /// Predicted next term
        next_value: f64,
    },
    /// Constant ratio between consecutive terms
    #[serde(rename_all = "camelCase")]
    Geometric {
        /// Human-readable description
        description: String,
        /// Display formula
        formula: String,
        /// Common ratio
        common_ratio: f64,
        /// Predicted next term
        next_value: f64,
    },
    /// Polynomial of low degree, found through finite differences
    #[serde(rename_all = "camelCase")]
    Polynomial {
        /// Human-readable description
        description: String,
        /// Display formula
        formula: String,
        /// Degree of the polynomial (1..=5)
        degree: usize,
        /// Difference table, from the sequence down to the constant row
        differences: Vec<Vec<f64>>,
        /// Predicted next term
        next_value: f64,
    },
    /// Each term is the sum of the two preceding terms
    #[serde(rename_all = "camelCase")]
    Fibonacci {
        /// Human-readable description
        description: String,
        /// Display formula
        formula: String,
        /// Predicted next term
        next_value: f64,
    },
    /// No detector accepted the sequence
    #[serde(rename_all = "camelCase")]
    Unknown {
        /// Human-readable description
        description: String,
        /// Explanation of the failure
        error: String,
        /// Hint about the supported pattern families
        suggestion: String,
    },
}

impl PatternResult {
    /// Result returned when no detector matches
    pub fn unknown() -> Self {
        PatternResult::Unknown {
            description: "No recognizable pattern".to_string(),
            error: NO_PATTERN_ERROR.to_string(),
            suggestion: NO_PATTERN_SUGGESTION.to_string(),
        }
    }

    /// Discriminant of this result
    pub fn kind(&self) -> PatternKind {
        match self {
            PatternResult::Arithmetic { .. } => PatternKind::Arithmetic,
            PatternResult::Geometric { .. } => PatternKind::Geometric,
            PatternResult::Polynomial { .. } => PatternKind::Polynomial,
            PatternResult::Fibonacci { .. } => PatternKind::Fibonacci,
            PatternResult::Unknown { .. } => PatternKind::Unknown,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        match self {
            PatternResult::Arithmetic { description, .. }
            | PatternResult::Geometric { description, .. }
            | PatternResult::Polynomial { description, .. }
            | PatternResult::Fibonacci { description, .. }
            | PatternResult::Unknown { description, .. } => description,
        }
    }

    /// Display formula, absent for unknown patterns
    pub fn formula(&self) -> Option<&str> {
        match self {
            PatternResult::Arithmetic { formula, .. }
            | PatternResult::Geometric { formula, .. }
            | PatternResult::Polynomial { formula, .. }
            | PatternResult::Fibonacci { formula, .. } => Some(formula),
            PatternResult::Unknown { .. } => None,
        }
    }

    /// Predicted next term, absent for unknown patterns
    pub fn next_value(&self) -> Option<f64> {
        match self {
            PatternResult::Arithmetic { next_value, .. }
            | PatternResult::Geometric { next_value, .. }
            | PatternResult::Polynomial { next_value, .. }
            | PatternResult::Fibonacci { next_value, .. } => Some(*next_value),
            PatternResult::Unknown { .. } => None,
        }
    }

    /// Error explaining an unknown pattern
    pub fn error(&self) -> Option<&str> {
        match self {
            PatternResult::Unknown { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Suggestion attached to an unknown pattern
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            PatternResult::Unknown { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }

    /// True if no pattern was detected
    pub fn is_unknown(&self) -> bool {
        matches!(self, PatternResult::Unknown { .. })
    }
}

impl fmt::Display for PatternResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formula() {
            Some(formula) => write!(f, "{} ({})", self.description(), formula),
            None => write!(f, "{}", self.description()),
        }
    }
}

/// Pattern kind without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Arithmetic progression
    Arithmetic,
    /// Geometric progression
    Geometric,
    /// Polynomial via finite differences
    Polynomial,
    /// Fibonacci-like recurrence
    Fibonacci,
    /// No pattern
    Unknown,
}

impl PatternKind {
    /// All kinds, in declaration order
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Arithmetic,
        PatternKind::Geometric,
        PatternKind::Polynomial,
        PatternKind::Fibonacci,
        PatternKind::Unknown,
    ];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Arithmetic => "arithmetic",
            PatternKind::Geometric => "geometric",
            PatternKind::Polynomial => "polynomial",
            PatternKind::Fibonacci => "fibonacci",
            PatternKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| PatternError::UnknownPatternKind(s.to_string()))
    }
}

/// Display name for a polynomial degree
pub fn polynomial_degree_name(degree: usize) -> &'static str {
    match degree {
        1 => "linear",
        2 => "quadratic",
        3 => "cubic",
        4 => "quartic",
        5 => "quintic",
        _ => "polynomial",
    }
}

/// Formats a term for descriptions and formulas.
///
/// Integral values print without a fractional part; others keep up to six
/// decimals with trailing zeros removed.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if is_negligible(value - rounded) && rounded.abs() < 1e15 {
        // + 0.0 folds -0.0 into 0.0
        return format!("{}", rounded + 0.0);
    }
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
