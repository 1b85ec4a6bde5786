//! Finite-difference tables and forward-difference extrapolation
//!
//! A sequence sampled from a polynomial of degree `k` has a constant `k`-th
//! row of consecutive differences. [`DifferenceTable::build`] searches for
//! that row with a bounded loop, and [`DifferenceTable::extend`] walks the
//! table back up to produce the next term.

use tracing::trace;

use crate::tolerance::all_approx_eq;

/// Highest polynomial degree the table search will accept
pub const MAX_POLYNOMIAL_DEGREE: usize = 5;

/// Consecutive differences `values[i] - values[i-1]`
pub fn differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Difference table whose last row is constant.
///
/// Row 0 is the sequence itself and row `degree` is the constant row.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    rows: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Build the table for `sequence`, or `None` if no row of at least two
    /// values becomes constant within [`MAX_POLYNOMIAL_DEGREE`] levels.
    pub fn build(sequence: &[f64]) -> Option<Self> {
        if sequence.len() < 3 {
            return None;
        }

        let mut rows = Vec::with_capacity(MAX_POLYNOMIAL_DEGREE + 1);
        let mut current = sequence.to_vec();

        for depth in 0..MAX_POLYNOMIAL_DEGREE {
            let next = differences(&current);
            rows.push(current);

            // A single value cannot witness a constant row
            if next.len() < 2 {
                trace!(depth, "difference row too short to be constant");
                return None;
            }

            if all_approx_eq(&next) {
                trace!(degree = depth + 1, "constant difference row found");
                rows.push(next);
                return Some(Self { rows });
            }

            current = next;
        }

        trace!(
            max_degree = MAX_POLYNOMIAL_DEGREE,
            "no constant difference row within bound"
        );
        None
    }

    /// Degree of the polynomial, the depth of the constant row
    pub fn degree(&self) -> usize {
        self.rows.len() - 1
    }

    /// Rows from the sequence down to the constant row
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Value of the constant row
    pub fn constant_difference(&self) -> f64 {
        self.rows
            .last()
            .and_then(|row| row.first())
            .copied()
            .unwrap_or(0.0)
    }

    /// Table with one extra column appended by back-substitution.
    ///
    /// The constant row repeats its last value; every row above gains the sum
    /// of its own last value and the value just appended to the row below.
    pub fn extend(&self) -> Vec<Vec<f64>> {
        let mut rows = self.rows.clone();
        let degree = self.degree();

        if let Some(last) = rows[degree].last().copied() {
            rows[degree].push(last);
        }

        for level in (0..degree).rev() {
            let below = rows[level + 1].last().copied().unwrap_or(0.0);
            let own = rows[level].last().copied().unwrap_or(0.0);
            rows[level].push(own + below);
        }

        rows
    }

    /// Predicted next term of the sequence
    pub fn extrapolate(&self) -> f64 {
        self.extend()
            .first()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}
