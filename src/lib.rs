//! # xcalc
//!
//! xcalc evaluates single-variable arithmetic expressions such as
//! `-sin(x)^2 + 3*(x - 1)`. Expressions are validated, converted to postfix
//! order with the shunting-yard algorithm and evaluated on an operand stack.
//!
//! Supported syntax:
//! - numbers like `3`, `2.5` or `.5`,
//! - the variable `x`,
//! - binary operators `+ - * / ^` (all left-associative, so `2^3^2` is 64),
//! - unary minus,
//! - parentheses,
//! - the functions `sin`, `cos`, `tg`, `ctg` and `exp`.

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

pub use crate::{
    error::{CalcResult, CalculatorError, ErrorKind},
    interpreter::calculator::{Calculator, Prompt, VariableSource},
};

/// Provides unified error types for validation and evaluation.
///
/// This module defines every error a calculation can end with and classifies
/// them into the kinds a caller reports: invalid expression, division by
/// zero, calculation error and missing variable value.
///
/// # Responsibilities
/// - Defines error enums for each phase (validation, evaluation).
/// - Attaches source offsets or postfix positions for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the processing of an expression.
///
/// This module ties together lexing, validation, conversion and evaluation,
/// and exposes the calculator entry point.
pub mod interpreter;
/// Defines the postfix representation of an expression.
///
/// This module declares the tokens the converter produces and the evaluator
/// consumes, the operator precedence table and the built-in function table.
pub mod postfix;

/// Evaluates one expression.
///
/// `x` is bound to `x` if the expression references it; passing `None` for
/// an expression that uses `x` fails with
/// [`ErrorKind::VariableUnavailable`].
///
/// # Errors
/// Returns an error if the expression is invalid or its evaluation fails.
///
/// # Examples
/// ```
/// use xcalc::{ErrorKind, calculate};
///
/// assert_eq!(calculate("(2 + 3) * 4", None), Ok(20.0));
/// assert_eq!(calculate("-3 + 2", None), Ok(-1.0));
/// assert_eq!(calculate("x * 2 + 1", Some(5.0)), Ok(11.0));
///
/// let err = calculate("(1 + 2", None).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidExpression);
/// ```
pub fn calculate(expression: &str, x: Option<f64>) -> CalcResult<f64> {
    Calculator::new(x).calculate(expression)
}
