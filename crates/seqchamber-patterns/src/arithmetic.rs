//! Arithmetic progression detection

use crate::{
    models::{format_number, PatternResult},
    tolerance::approx_eq,
};

/// Detect a constant difference between consecutive terms.
///
/// Requires at least two terms. Returns `None` when the differences are not
/// all tolerance-equal to the first one.
pub fn detect_arithmetic(sequence: &[f64]) -> Option<PatternResult> {
    if sequence.len() < 2 {
        return None;
    }

    let difference = sequence[1] - sequence[0];
    let constant = sequence
        .windows(2)
        .all(|pair| approx_eq(pair[1] - pair[0], difference));
    if !constant {
        return None;
    }

    let last = sequence[sequence.len() - 1];
    Some(PatternResult::Arithmetic {
        description: format!(
            "Arithmetic sequence with common difference {}",
            format_number(difference)
        ),
        formula: format!(
            "a_n = {} + (n-1)·{}",
            format_number(sequence[0]),
            format_number(difference)
        ),
        common_difference: difference,
        next_value: last + difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_increasing_sequence() {
        let result = detect_arithmetic(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        match result {
            PatternResult::Arithmetic {
                common_difference,
                next_value,
                ref formula,
                ..
            } => {
                assert_eq!(common_difference, 2.0);
                assert_eq!(next_value, 10.0);
                assert_eq!(formula, "a_n = 2 + (n-1)·2");
            }
            other => panic!("expected arithmetic, got {:?}", other),
        }
    }

    #[test]
    fn test_detects_decreasing_fractional_sequence() {
        let result = detect_arithmetic(&[1.0, 0.9, 0.8, 0.7]).unwrap();
        let next = result.next_value().unwrap();
        assert!(approx_eq(next, 0.6));
    }

    #[test]
    fn test_two_terms_always_arithmetic() {
        let result = detect_arithmetic(&[3.0, 7.0]).unwrap();
        assert_eq!(result.next_value(), Some(11.0));
    }

    #[test]
    fn test_rejects_non_constant_difference() {
        assert!(detect_arithmetic(&[1.0, 2.0, 4.0]).is_none());
        assert!(detect_arithmetic(&[5.0]).is_none());
        assert!(detect_arithmetic(&[]).is_none());
    }
}
