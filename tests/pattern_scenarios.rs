//! End-to-end scenarios through the public analysis API
//!
//! Each case runs a raw sequence through `PatternChamber::analyze` with
//! storage enabled and checks the outcome, the remembered entry and the
//! history statistics that follow from it.

use seqchamber_core::{PatternChamber, PatternKind, PatternResult};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_arithmetic_scenario() {
    let chamber = PatternChamber::new();
    let outcome = chamber.analyze(&[2.0, 4.0, 6.0, 8.0], true);

    assert!(outcome.success);
    assert_close(outcome.prediction.unwrap(), 10.0);
    match outcome.pattern.unwrap() {
        PatternResult::Arithmetic {
            common_difference,
            next_value,
            ..
        } => {
            assert_close(common_difference, 2.0);
            assert_close(next_value, 10.0);
        }
        other => panic!("expected arithmetic, got {:?}", other),
    }
}

#[test]
fn test_geometric_scenario() {
    let chamber = PatternChamber::new();
    let outcome = chamber.analyze(&[2.0, 6.0, 18.0, 54.0], true);

    assert!(outcome.success);
    match outcome.pattern.unwrap() {
        PatternResult::Geometric {
            common_ratio,
            next_value,
            ..
        } => {
            assert_close(common_ratio, 3.0);
            assert_close(next_value, 162.0);
        }
        other => panic!("expected geometric, got {:?}", other),
    }
}

#[test]
fn test_polynomial_scenario() {
    let chamber = PatternChamber::new();
    let outcome = chamber.analyze(&[1.0, 4.0, 9.0, 16.0, 25.0], true);

    assert!(outcome.success);
    match outcome.pattern.unwrap() {
        PatternResult::Polynomial {
            degree,
            differences,
            next_value,
            ..
        } => {
            assert_eq!(degree, 2);
            assert_eq!(differences.len(), 3);
            assert_eq!(differences[2], vec![2.0, 2.0, 2.0]);
            assert_close(next_value, 36.0);
        }
        other => panic!("expected polynomial, got {:?}", other),
    }
}

#[test]
fn test_fibonacci_scenario() {
    let chamber = PatternChamber::new();
    let outcome = chamber.analyze(&[1.0, 1.0, 2.0, 3.0, 5.0, 8.0], true);

    assert!(outcome.success);
    assert_eq!(outcome.pattern_kind(), Some(PatternKind::Fibonacci));
    assert_close(outcome.prediction.unwrap(), 13.0);
}

#[test]
fn test_unknown_scenario() {
    let chamber = PatternChamber::new();
    let outcome = chamber.analyze(&[2.0, 3.0, 5.0, 7.0], true);

    assert!(!outcome.success);
    assert_eq!(outcome.pattern_kind(), Some(PatternKind::Unknown));
    assert!(outcome.prediction.is_none());
    assert!(!outcome.error.unwrap_or_default().is_empty());
    assert!(!outcome.suggestion.unwrap_or_default().is_empty());
    assert!(chamber.memories().is_empty());
}

#[test]
fn test_constant_scenario() {
    let chamber = PatternChamber::new();
    let outcome = chamber.analyze(&[100.0, 100.0, 100.0, 100.0], true);

    assert!(outcome.success);
    match outcome.pattern.unwrap() {
        PatternResult::Arithmetic {
            common_difference,
            next_value,
            ..
        } => {
            assert_close(common_difference, 0.0);
            assert_close(next_value, 100.0);
        }
        other => panic!("expected arithmetic, got {:?}", other),
    }
}

#[test]
fn test_history_after_all_scenarios() {
    let chamber = PatternChamber::new();
    let sequences: [&[f64]; 6] = [
        &[2.0, 4.0, 6.0, 8.0],
        &[2.0, 6.0, 18.0, 54.0],
        &[1.0, 4.0, 9.0, 16.0, 25.0],
        &[1.0, 1.0, 2.0, 3.0, 5.0, 8.0],
        &[2.0, 3.0, 5.0, 7.0],
        &[100.0, 100.0, 100.0, 100.0],
    ];
    for sequence in sequences {
        chamber.analyze(sequence, true);
    }

    let memories = chamber.memories();
    assert_eq!(memories.len(), 5);
    assert_eq!(memories[3].pattern_kind(), PatternKind::Fibonacci);
    assert_close(memories[3].prediction, 13.0);

    let history = chamber.history_analysis();
    let counts: Vec<_> = history
        .pattern_counts
        .iter()
        .map(|c| (c.pattern, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (PatternKind::Arithmetic, 2),
            (PatternKind::Geometric, 1),
            (PatternKind::Polynomial, 1),
            (PatternKind::Fibonacci, 1),
            (PatternKind::Unknown, 1),
        ]
    );

    chamber.clear_memories();
    assert!(chamber.memories().is_empty());
    assert!(chamber.full_history().is_empty());

    let outcome = chamber.analyze(&[3.0, 6.0], true);
    assert_eq!(outcome.memory_id, Some(7));
}

#[test]
fn test_json_report_shape() {
    let chamber = PatternChamber::new();
    chamber.analyze(&[1.0, 4.0, 9.0, 16.0], true);

    let memories = serde_json::to_value(chamber.memories()).unwrap();
    assert_eq!(memories[0]["pattern"]["type"], "polynomial");
    assert_eq!(memories[0]["pattern"]["degree"], 2);
    assert_eq!(memories[0]["pattern"]["nextValue"], 25.0);

    let stats = serde_json::to_value(chamber.memory_stats()).unwrap();
    assert_eq!(stats["totalMemories"], 1);
    assert_eq!(stats["patterns"]["polynomial"], 1);

    let history = serde_json::to_value(chamber.full_history()).unwrap();
    assert_eq!(history[0]["patternType"], "polynomial");
    assert_eq!(history[0]["success"], true);
}
