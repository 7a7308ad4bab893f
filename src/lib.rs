//! # reckon
//!
//! reckon is a small arithmetic expression evaluator written in Rust.
//! It evaluates integer literals, the four basic operators, unary negation and
//! parenthesized groups with standard precedence, in a single pass over the
//! input and without building a syntax tree.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalFailure, interpreter::parser::core::parse_expression};

/// Provides unified error types for tokenizing, parsing and evaluating.
///
/// This module defines the three error families that can abort an evaluation
/// and the `EvalFailure` union every routine returns. Each error carries the
/// byte offset at which it was detected.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and readable messages.
/// - Integrates with standard error handling traits through `thiserror`.
pub mod error;
/// Turns text into a number.
///
/// This module ties together the tokenizer and the fused parser/evaluator.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Evaluates the token stream by recursive descent over precedence levels.
/// - Reports the first error met and stops.
pub mod interpreter;
/// Interactive read loop.
///
/// Reads one expression per line, prints its result or error, and stops on
/// `exit` or end of input.
pub mod repl;
/// General utilities, currently number formatting for printed results.
pub mod util;

/// Evaluates one arithmetic expression and returns its value.
///
/// Each call is independent: no state is kept between evaluations.
///
/// # Errors
/// Returns an error if the input contains an unknown character, does not form
/// a single well-formed expression, or divides by zero.
///
/// # Examples
/// ```
/// use reckon::{error::EvalFailure, evaluate};
///
/// // Precedence and grouping.
/// assert_eq!(evaluate("2 + 3 * (4 - 1)").unwrap(), 11.0);
///
/// // Errors are values.
/// assert!(matches!(evaluate("4 / (2 - 2)"), Err(EvalFailure::Eval(_))));
/// assert!(matches!(evaluate("2 + @"), Err(EvalFailure::Lex(_))));
/// assert!(matches!(evaluate("(2 + 3"), Err(EvalFailure::Parse(_))));
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalFailure> {
    parse_expression(source)
}
