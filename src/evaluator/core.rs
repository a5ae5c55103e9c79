use tracing::{debug, trace};

use crate::{
    arith::{Scalar, convert::parse_number_at},
    error::{CalcResult, ParseError},
    evaluator::{
        lexer::{Token, tokenize},
        operator::Operator,
    },
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    OpenParen,
}

/// Evaluation state of one expression.
///
/// `operators` holds pending operators and open parentheses with the byte
/// offset where each appeared; `output` holds the values computed so far.
/// Every application pops two values from `output` and pushes one back.
struct ShuntingYard<T> {
    operators: Vec<(Pending, usize)>,
    output:    Vec<T>,
}

impl<T: Scalar> ShuntingYard<T> {
    const fn new() -> Self {
        Self { operators: Vec::new(),
               output:    Vec::new(), }
    }

    /// Applies every stacked operator that binds at least as tightly as `op`,
    /// stopping at an open parenthesis, then stacks `op`.
    fn push_operator(&mut self, op: Operator, position: usize) -> CalcResult<()> {
        while let Some(&(Pending::Operator(top), top_position)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top, top_position)?;
        }
        self.operators.push((Pending::Operator(op), position));
        Ok(())
    }

    fn open_paren(&mut self, position: usize) {
        self.operators.push((Pending::OpenParen, position));
    }

    /// Applies operators down to the matching open parenthesis, which is
    /// discarded.
    fn close_paren(&mut self, position: usize) -> CalcResult<()> {
        loop {
            match self.operators.pop() {
                Some((Pending::Operator(op), op_position)) => self.apply(op, op_position)?,
                Some((Pending::OpenParen, _)) => return Ok(()),
                None => return Err(ParseError::MismatchedParentheses { position }.into()),
            }
        }
    }

    /// Pops the right operand, then the left one, and pushes their result.
    fn apply(&mut self, op: Operator, position: usize) -> CalcResult<()> {
        let missing = || ParseError::MissingOperand { operator: op.symbol(),
                                                      position };

        let right = self.output.pop().ok_or_else(missing)?;
        let left = self.output.pop().ok_or_else(missing)?;
        let value = op.apply(left, right)?;

        trace!(%left, %op, %right, %value, "applied operator");
        self.output.push(value);
        Ok(())
    }

    /// Applies the remaining operators and returns the single value left.
    fn finish(mut self) -> CalcResult<T> {
        while let Some((pending, position)) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.apply(op, position)?,
                Pending::OpenParen => {
                    return Err(ParseError::MismatchedParentheses { position }.into());
                },
            }
        }

        let value = self.output.pop().ok_or(ParseError::EmptyExpression)?;
        debug_assert!(self.output.is_empty(), "operands and operators alternate");
        Ok(value)
    }
}

/// Evaluates an infix expression in `f64`.
///
/// Supports numeric literals, `+ - * / ^`, parentheses and a unary minus
/// directly in front of a literal. Division by zero follows floating-point
/// rules and yields an infinity or NaN rather than an error.
///
/// # Errors
/// Returns a [`ParseError`](crate::error::ParseError) for malformed input:
/// invalid literals or characters, unbalanced parentheses, operators without
/// operands and empty input.
///
/// # Example
/// ```
/// use quickcalc::{
///     error::{Error, ParseError},
///     evaluate,
/// };
///
/// assert!((evaluate("(10.5 + 5.2) * 2").unwrap() - 31.4).abs() < 1e-12);
/// assert_eq!(evaluate("2 ^ 10 - 24").unwrap(), 1000.0);
/// assert_eq!(evaluate("1 / 0").unwrap(), f64::INFINITY);
/// assert_eq!(evaluate("").unwrap_err(), Error::Parse(ParseError::EmptyExpression));
/// ```
pub fn evaluate(expression: &str) -> CalcResult<f64> {
    evaluate_as(expression)
}

/// Evaluates an infix expression in any [`Scalar`] type.
///
/// Literals are parsed directly into `T` and every operator uses `T`'s
/// arithmetic, so integer evaluation divides with truncation and reports a
/// zero divisor as an error.
///
/// A `-` at the start of the expression, after `(` or after another operator
/// is a unary minus. It must be followed by a numeric literal, which it
/// negates; `-(1)` and `--1` are rejected. Anywhere else `-` subtracts.
///
/// # Errors
/// Returns every error [`evaluate`] does, plus
/// [`RuntimeError::DivisionByZero`](crate::error::RuntimeError::DivisionByZero)
/// for integral division by zero.
///
/// # Example
/// ```
/// use quickcalc::{
///     error::{Error, RuntimeError},
///     evaluate_as,
/// };
///
/// assert_eq!(evaluate_as::<i64>("7 / 2 * 2").unwrap(), 6);
/// assert_eq!(evaluate_as::<i64>("3 - -2").unwrap(), 5);
/// assert_eq!(evaluate_as::<i64>("1 / (2 - 2)").unwrap_err(),
///            Error::Runtime(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate_as<T: Scalar>(expression: &str) -> CalcResult<T> {
    let tokens = tokenize(expression)?;
    let mut yard = ShuntingYard::new();
    let mut expect_operand = true;
    let mut iter = tokens.into_iter();

    while let Some((token, position)) = iter.next() {
        expect_operand = match token {
            Token::Number(_) | Token::LParen if !expect_operand => {
                return Err(ParseError::MissingOperator { position }.into());
            },
            Token::Number(literal) => {
                yard.output.push(parse_number_at(literal, position)?);
                false
            },
            Token::Minus if expect_operand => {
                let Some((Token::Number(literal), _)) = iter.next() else {
                    return Err(ParseError::DanglingMinus { position }.into());
                };
                yard.output.push(parse_number_at(&format!("-{literal}"), position)?);
                false
            },
            Token::LParen => {
                yard.open_paren(position);
                true
            },
            Token::RParen => {
                yard.close_paren(position)?;
                false
            },
            Token::Plus => push(&mut yard, Operator::Add, position, expect_operand)?,
            Token::Minus => push(&mut yard, Operator::Sub, position, expect_operand)?,
            Token::Star => push(&mut yard, Operator::Mul, position, expect_operand)?,
            Token::Slash => push(&mut yard, Operator::Div, position, expect_operand)?,
            Token::Caret => push(&mut yard, Operator::Pow, position, expect_operand)?,
        };
    }

    let result = yard.finish()?;
    debug!(expression, %result, "evaluated expression");
    Ok(result)
}

/// Stacks a binary operator; an operand is expected next.
///
/// An operator may only follow a value or a closing parenthesis.
fn push<T: Scalar>(yard: &mut ShuntingYard<T>,
                   op: Operator,
                   position: usize,
                   expect_operand: bool)
                   -> CalcResult<bool> {
    if expect_operand {
        return Err(ParseError::MissingOperand { operator: op.symbol(),
                                                position }.into());
    }
    yard.push_operator(op, position)?;
    Ok(true)
}
