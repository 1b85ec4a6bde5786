//! Input validation performed before any detector runs

use serde_json::Value;

use crate::error::AnalysisError;

/// Fewest terms a sequence may have
pub const MIN_SEQUENCE_LEN: usize = 2;

/// Check length and finiteness of a sequence
pub fn validate_sequence(sequence: &[f64]) -> Result<(), AnalysisError> {
    if sequence.len() < MIN_SEQUENCE_LEN {
        return Err(AnalysisError::InvalidInput(format!(
            "Sequence must contain at least {} numbers",
            MIN_SEQUENCE_LEN
        )));
    }

    if let Some(index) = sequence.iter().position(|term| !term.is_finite()) {
        return Err(AnalysisError::InvalidInput(format!(
            "Element at index {} is not a finite number",
            index
        )));
    }

    Ok(())
}

/// Extract a sequence from untyped JSON handed over by a boundary layer.
///
/// Only checks shape and element types; length and finiteness are left to
/// [`validate_sequence`].
pub fn sequence_from_value(value: &Value) -> Result<Vec<f64>, AnalysisError> {
    let items = value.as_array().ok_or_else(|| {
        AnalysisError::InvalidInput("Input must be a sequence of numbers".to_string())
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64().ok_or_else(|| {
                AnalysisError::InvalidInput(format!("Element at index {} is not a number", index))
            })
        })
        .collect()
}
