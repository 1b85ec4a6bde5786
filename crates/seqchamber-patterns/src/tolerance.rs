//! Absolute-tolerance comparison of floating-point values

/// Two values closer than this are treated as equal.
///
/// The tolerance is absolute and does not scale with the magnitude of the
/// inputs, so sequences with very large terms and tiny variation may be
/// misclassified.
pub const EPSILON: f64 = 1e-10;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_negligible(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Returns true if every value is tolerance-equal to the first one.
///
/// An empty slice is trivially constant; callers enforce their own minimum
/// lengths.
pub fn all_approx_eq(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| approx_eq(*v, *first)),
        None => true,
    }
}
