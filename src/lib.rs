//! # quickcalc
//!
//! quickcalc evaluates infix arithmetic expressions and provides the
//! numerically optimized primitives the evaluator is built on: powers by
//! repeated squaring, Newton-Raphson square roots, factorials and division
//! with an explicit zero-divisor policy. A chainable [`Calculator`] offers
//! the same arithmetic as a stateful accumulator with a memory register.

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

/// The primitive arithmetic layer.
///
/// This module defines the operations every other part of the crate computes
/// with, generic over the [`Scalar`](arith::Scalar) trait so that integer and
/// floating-point types share one implementation while keeping their own
/// overflow and division-by-zero behavior.
///
/// # Responsibilities
/// - Addition, subtraction, multiplication and policy-driven division.
/// - Integer powers, square roots and factorials.
/// - Conversion of literals to numbers and of numbers to display text.
pub mod arith;
/// The stateful accumulator.
///
/// Holds a running value and a memory register and exposes chainable
/// operations on them.
pub mod calculator;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing or
/// evaluating an expression and while operating the accumulator. Positional
/// errors carry the byte offset of the offending token.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator,
///   arithmetic).
/// - Supports integration with standard error handling traits and `?`.
pub mod error;
/// Orchestrates the evaluation of expression text.
///
/// This module ties together the lexer, the operator table and the
/// shunting-yard pass, and exposes the entry points for evaluating
/// expressions.
///
/// # Responsibilities
/// - Tokenizes expression text.
/// - Resolves operator precedence and parentheses.
/// - Dispatches each operator to the arithmetic layer.
pub mod evaluator;
/// General utilities for numeric conversion.
pub mod util;

pub use arith::format_number;
pub use calculator::Calculator;
pub use evaluator::core::{evaluate, evaluate_as};
