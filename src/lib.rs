//! # bincalc
//!
//! bincalc is an interactive calculator written in Rust.
//! It evaluates arithmetic expressions directly from a token stream, with
//! 32-bit bitwise operators, variables, built-in functions and a history of
//! previous results.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::Error,
    interpreter::session::{Outcome, Session},
};

/// Settings shared by the library and the command line.
///
/// Holds the history size, output precision and radix, and the fraction
/// policy of the bitwise level.
pub mod config;
/// Provides unified error types for lexing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, evaluator).
/// - Carries the offending text, name or offset for user feedback.
pub mod error;
/// Orchestrates the calculator: lexing, evaluation and the session driver.
///
/// # Responsibilities
/// - Coordinates the lexer, the evaluator and the session state.
/// - Provides entry points for evaluating lines of input.
pub mod interpreter;
/// Integer views of floating-point values.
///
/// # Responsibilities
/// - Truncate values into the 32-bit integer view used by bitwise operators.
/// - Provide overflow-free shifts, remainder and factorial helpers.
pub mod util;

/// Evaluates `source` in a fresh session and returns the last printed value.
///
/// Statements are separated by `;` or line breaks. Evaluation stops at the
/// first error.
///
/// # Errors
/// Returns the first lexing or evaluation error.
///
/// # Examples
/// ```
/// use bincalc::calculate;
///
/// assert_eq!(calculate("x = 3\nx * 4").unwrap(), Some(12.0));
/// assert_eq!(calculate("0xf0 | 0x0f").unwrap(), Some(255.0));
///
/// // 'y' was never assigned.
/// assert!(calculate("y + 1").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Option<f64>, Error> {
    let mut session = Session::new(Config::default());
    let mut result = None;

    for outcome in session.run_line(source) {
        match outcome {
            Outcome::Value(value) => result = Some(value),
            Outcome::Silent => {},
            Outcome::Failed(error) => return Err(error),
        }
    }

    Ok(result)
}
