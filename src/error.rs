/// Parsing errors.
///
/// Defines all error types that can occur while lexing an expression or
/// running the shunting-yard pass over its tokens. Parse errors include
/// malformed literals, unknown characters, unbalanced parentheses and
/// operators without operands.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the arithmetic failures raised by the primitive layer and the
/// accumulator, such as integer division by zero or the reciprocal of zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used by the evaluator and every fallible public operation.
///
/// Either layer's error lifts into [`Error`] through `?`.
pub type CalcResult<T> = Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced while evaluating an expression.
pub enum Error {
    /// The expression text could not be turned into a computation.
    Parse(ParseError),
    /// The computation itself failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
