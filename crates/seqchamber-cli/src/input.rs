// Parsing numbers typed on the command line or read from batch files

use crate::error::{CliError, CliResult};

/// Parse one sequence from text.
///
/// Terms may be separated by commas, whitespace, or both. Tokens that are not
/// numbers are rejected here; finiteness is checked by the analysis itself.
pub fn parse_sequence(text: &str) -> CliResult<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| CliError::InvalidArgument {
                message: format!("'{}' is not a number", token),
            })
        })
        .collect()
}

/// Parse every argument of `analyze` into a single sequence
pub fn parse_arguments(args: &[String]) -> CliResult<Vec<f64>> {
    let mut sequence = Vec::new();
    for arg in args {
        sequence.extend(parse_sequence(arg)?);
    }
    Ok(sequence)
}

/// Parse a batch file into `(line number, sequence)` pairs.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_batch(contents: &str) -> CliResult<Vec<(usize, Vec<f64>)>> {
    let mut sequences = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let sequence = parse_sequence(line).map_err(|e| match e {
            CliError::InvalidArgument { message } => CliError::InvalidArgument {
                message: format!("line {}: {}", index + 1, message),
            },
            other => other,
        })?;
        sequences.push((index + 1, sequence));
    }
    Ok(sequences)
}
