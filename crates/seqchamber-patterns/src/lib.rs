#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # SeqChamber Patterns
//!
//! Pattern detection for finite numeric sequences: identifies the rule that
//! generated a sequence and predicts its next term.
//!
//! ## Features
//!
//! - **Arithmetic Detection**: constant consecutive difference
//! - **Geometric Detection**: constant consecutive ratio, guarded against near-zero terms
//! - **Fibonacci-like Detection**: every term is the sum of the two before it
//! - **Polynomial Detection**: finite-difference tables up to degree 5 with
//!   forward-difference extrapolation
//! - **Fixed Priority Dispatch**: Fibonacci, Arithmetic, Geometric, Polynomial
//!
//! All comparisons use the absolute tolerance in [`tolerance::EPSILON`].

pub mod arithmetic;
pub mod detector;
pub mod error;
pub mod fibonacci;
pub mod finite_difference;
pub mod geometric;
pub mod models;
pub mod polynomial;
pub mod tolerance;

pub use arithmetic::detect_arithmetic;
pub use detector::{DetectorFn, PatternDetector};
pub use error::{PatternError, Result};
pub use fibonacci::detect_fibonacci;
pub use finite_difference::{DifferenceTable, MAX_POLYNOMIAL_DEGREE};
pub use geometric::detect_geometric;
pub use models::*;
pub use polynomial::detect_polynomial;
pub use tolerance::{all_approx_eq, approx_eq, is_negligible, EPSILON};
