//! Main pattern detector coordinating all sequence detectors

use tracing::{debug, trace};

use crate::{
    arithmetic::detect_arithmetic,
    fibonacci::detect_fibonacci,
    geometric::detect_geometric,
    models::{PatternKind, PatternResult},
    polynomial::detect_polynomial,
};

/// Signature shared by every detector
pub type DetectorFn = fn(&[f64]) -> Option<PatternResult>;

/// Detectors in priority order. The first match wins.
const DETECTORS: [(PatternKind, DetectorFn); 4] = [
    (PatternKind::Fibonacci, detect_fibonacci as DetectorFn),
    (PatternKind::Arithmetic, detect_arithmetic as DetectorFn),
    (PatternKind::Geometric, detect_geometric as DetectorFn),
    (PatternKind::Polynomial, detect_polynomial as DetectorFn),
];

/// Dispatcher that runs the detectors in a fixed priority order.
///
/// Fibonacci and arithmetic checks run before the polynomial search, which
/// would otherwise explain many short sequences with an inflated degree.
/// Detection is pure; a detector is stateless and the dispatcher can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDetector;

impl PatternDetector {
    /// Create a new pattern detector
    pub fn new() -> Self {
        Self
    }

    /// Detectors in the order they are tried
    pub fn detectors(&self) -> &'static [(PatternKind, DetectorFn)] {
        &DETECTORS
    }

    /// Detect the pattern of `sequence`.
    ///
    /// Returns the first detector match, or [`PatternResult::Unknown`] when
    /// every detector declines. A match whose prediction is not finite (for
    /// example after overflow) counts as a decline.
    pub fn detect(&self, sequence: &[f64]) -> PatternResult {
        for (kind, detector) in self.detectors() {
            match detector(sequence) {
                Some(result) if result.next_value().is_some_and(f64::is_finite) => {
                    debug!(pattern = %kind, len = sequence.len(), "pattern detected");
                    return result;
                }
                Some(_) => {
                    debug!(pattern = %kind, "prediction is not finite, trying next detector");
                }
                None => {
                    trace!(pattern = %kind, "detector declined");
                }
            }
        }

        debug!(len = sequence.len(), "no pattern detected");
        PatternResult::unknown()
    }
}
