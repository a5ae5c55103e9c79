#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero on an integral type.
    ///
    /// Floating-point division by zero is not an error; it yields an infinity
    /// or NaN instead.
    DivisionByZero,
    /// An operation was applied outside of its mathematical domain.
    DomainError {
        /// Details about the violated domain.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::DomainError { details } => write!(f, "Error: Domain error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
