//! Geometric progression detection

use crate::{
    models::{format_number, PatternResult},
    tolerance::{approx_eq, is_negligible},
};

/// Detect a constant ratio between consecutive terms.
///
/// Requires at least two terms, none of them within tolerance of zero.
pub fn detect_geometric(sequence: &[f64]) -> Option<PatternResult> {
    if sequence.len() < 2 {
        return None;
    }
    if sequence.iter().any(|term| is_negligible(*term)) {
        return None;
    }

    let ratio = sequence[1] / sequence[0];
    let constant = sequence
        .windows(2)
        .all(|pair| approx_eq(pair[1] / pair[0], ratio));
    if !constant {
        return None;
    }

    let last = sequence[sequence.len() - 1];
    Some(PatternResult::Geometric {
        description: format!(
            "Geometric sequence with common ratio {}",
            format_number(ratio)
        ),
        formula: format!(
            "a_n = {}·{}^(n-1)",
            format_number(sequence[0]),
            format_number(ratio)
        ),
        common_ratio: ratio,
        next_value: last * ratio,
    })
}
