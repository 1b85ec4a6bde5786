//! Fibonacci-like recurrence detection

use crate::{models::PatternResult, tolerance::approx_eq};

/// Detect sequences where every term from the third on is the sum of the two
/// preceding terms.
pub fn detect_fibonacci(sequence: &[f64]) -> Option<PatternResult> {
    if sequence.len() < 3 {
        return None;
    }

    let follows = sequence
        .windows(3)
        .all(|w| approx_eq(w[2], w[1] + w[0]));
    if !follows {
        return None;
    }

    let n = sequence.len();
    Some(PatternResult::Fibonacci {
        description: "Fibonacci-like sequence (each term is the sum of the previous two)"
            .to_string(),
        formula: "a_n = a_(n-1) + a_(n-2)".to_string(),
        next_value: sequence[n - 1] + sequence[n - 2],
    })
}
