//! Property-based tests for sequence detection
//!
//! Generated sequences with a known construction must be recognised as that
//! construction, and the dispatcher must be deterministic and respect its
//! fixed detector order.

use proptest::prelude::*;
use seqchamber_core::PatternChamber;
use seqchamber_patterns::{
    approx_eq, detect_arithmetic, detect_geometric, detect_polynomial, PatternDetector,
    PatternKind, PatternResult,
};

/// Evaluate a polynomial with the given coefficients (constant term first)
fn polynomial_values(coefficients: &[i64], len: usize) -> Vec<f64> {
    (0..len as i64)
        .map(|x| {
            coefficients
                .iter()
                .rev()
                .fold(0i64, |acc, c| acc * x + c) as f64
        })
        .collect()
}

/// Coefficients for a polynomial of exactly the given degree
fn coefficients_strategy(degree: usize) -> impl Strategy<Value = Vec<i64>> {
    (
        prop::collection::vec(-5i64..=5, degree),
        1i64..=5,
        any::<bool>(),
    )
        .prop_map(|(mut lower, leading, negative)| {
            lower.push(if negative { -leading } else { leading });
            lower
        })
}

fn magnitude(range: std::ops::Range<f64>) -> impl Strategy<Value = f64> {
    (range, any::<bool>()).prop_map(|(value, negative)| if negative { -value } else { value })
}

proptest! {
    #[test]
    fn prop_detection_is_deterministic(sequence in prop::collection::vec(-1e6f64..1e6, 2..12)) {
        let detector = PatternDetector::new();
        let first = detector.detect(&sequence);
        let second = detector.detect(&sequence);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.next_value(), second.next_value());

        let chamber = PatternChamber::new();
        let a = chamber.analyze(&sequence, false);
        let b = chamber.analyze(&sequence, false);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_arithmetic_round_trip(
        start in -1e3f64..1e3,
        difference in -100f64..100.0,
        len in 2usize..20,
    ) {
        let sequence: Vec<f64> = (0..len).map(|i| start + i as f64 * difference).collect();

        match detect_arithmetic(&sequence) {
            Some(PatternResult::Arithmetic { common_difference, next_value, .. }) => {
                prop_assert!(approx_eq(common_difference, difference));
                prop_assert!((next_value - (start + len as f64 * difference)).abs() < 1e-9);
            }
            other => prop_assert!(false, "expected arithmetic, got {:?}", other),
        }
    }

    #[test]
    fn prop_geometric_round_trip(
        start in magnitude(0.5..100.0),
        ratio in magnitude(0.5..4.0),
        len in 2usize..10,
    ) {
        let sequence: Vec<f64> = (0..len).map(|i| start * ratio.powi(i as i32)).collect();

        match detect_geometric(&sequence) {
            Some(PatternResult::Geometric { common_ratio, next_value, .. }) => {
                prop_assert!(approx_eq(common_ratio, ratio));
                let expected = start * ratio.powi(len as i32);
                prop_assert!((next_value - expected).abs() <= 1e-9 * expected.abs().max(1.0));
            }
            other => prop_assert!(false, "expected geometric, got {:?}", other),
        }
    }

    #[test]
    fn prop_polynomial_reports_true_degree(
        (degree, coefficients) in (2usize..=5).prop_flat_map(|d| (Just(d), coefficients_strategy(d))),
        extra in 0usize..4,
    ) {
        let len = degree + 2 + extra;
        let sequence = polynomial_values(&coefficients, len);
        let expected_next = polynomial_values(&coefficients, len + 1)[len];

        match detect_polynomial(&sequence) {
            Some(PatternResult::Polynomial { degree: found, next_value, .. }) => {
                prop_assert_eq!(found, degree);
                prop_assert!((next_value - expected_next).abs() < 1e-6);
            }
            other => prop_assert!(false, "expected polynomial, got {:?}", other),
        }
    }

    #[test]
    fn prop_sextic_is_unknown(
        leading in 1i64..=5,
        constant in -50i64..=50,
        len in 8usize..=10,
    ) {
        let sequence = polynomial_values(&[constant, 0, 0, 0, 0, 0, leading], len);
        let result = PatternDetector::new().detect(&sequence);
        prop_assert_eq!(result.kind(), PatternKind::Unknown);
    }

    #[test]
    fn prop_fibonacci_wins_over_arithmetic(a in -1e3f64..1e3) {
        let sequence = [a, 2.0 * a, 3.0 * a];
        prop_assert!(detect_arithmetic(&sequence).is_some());
        prop_assert_eq!(PatternDetector::new().detect(&sequence).kind(), PatternKind::Fibonacci);
    }

    #[test]
    fn prop_zero_run_is_fibonacci(len in 3usize..12) {
        let sequence = vec![0.0; len];
        prop_assert_eq!(PatternDetector::new().detect(&sequence).kind(), PatternKind::Fibonacci);
    }

    #[test]
    fn prop_single_term_is_invalid(
        value in prop_oneof![any::<f64>(), Just(f64::NAN), Just(0.0)],
    ) {
        let chamber = PatternChamber::new();
        let outcome = chamber.analyze(&[value], true);
        prop_assert!(!outcome.success);
        prop_assert!(outcome.pattern.is_none());
        prop_assert_eq!(
            outcome.error.as_deref(),
            Some("Sequence must contain at least 2 numbers")
        );
        prop_assert!(chamber.full_history().is_empty());
    }
}
