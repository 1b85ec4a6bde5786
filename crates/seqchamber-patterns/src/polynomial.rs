//! Polynomial detection through finite differences

use crate::{
    finite_difference::DifferenceTable,
    models::{format_number, polynomial_degree_name, PatternResult},
};

/// Detect a polynomial of degree 1 through 5.
///
/// Requires at least three terms and enough of them for the constant row to
/// hold two values.
pub fn detect_polynomial(sequence: &[f64]) -> Option<PatternResult> {
    let table = DifferenceTable::build(sequence)?;
    let degree = table.degree();
    let next_value = table.extrapolate();
    let constant = table.constant_difference();
    let name = polynomial_degree_name(degree);

    Some(PatternResult::Polynomial {
        description: format!("Polynomial sequence of degree {} ({})", degree, name),
        formula: format!(
            "{} polynomial, constant {} = {}",
            capitalize(name),
            difference_label(degree),
            format_number(constant)
        ),
        degree,
        differences: table.into_rows(),
        next_value,
    })
}

fn difference_label(degree: usize) -> String {
    let ordinal = match degree {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{}th", n),
    };
    format!("{} differences", ordinal)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
