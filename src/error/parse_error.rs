#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or evaluation order
/// resolution.
///
/// Every positional variant carries the byte offset of the offending token
/// in the source expression.
pub enum ParseError {
    /// A numeric literal could not be converted to the target type.
    InvalidNumber {
        /// The literal text, including a folded unary minus.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// A character that is not part of the expression grammar.
    InvalidCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A `(` without a matching `)` or the other way around.
    MismatchedParentheses {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// The expression produced no value at all.
    EmptyExpression,
    /// A unary minus that is not directly followed by a numeric literal.
    DanglingMinus {
        /// Byte offset of the minus sign.
        position: usize,
    },
    /// An operator was applied with fewer than two values available.
    MissingOperand {
        /// The operator symbol.
        operator: char,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A value or `(` appeared where a binary operator was expected.
    MissingOperator {
        /// Byte offset of the value or parenthesis.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { literal, position } => {
                write!(f, "Error at position {position}: Invalid number '{literal}'.")
            },

            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Error at position {position}: Invalid character in expression: '{character}'."),

            Self::MismatchedParentheses { position } => {
                write!(f, "Error at position {position}: Mismatched parentheses.")
            },

            Self::EmptyExpression => write!(f, "Error: Empty expression."),

            Self::DanglingMinus { position } => write!(f,
                                                       "Error at position {position}: Unary minus not followed by a number."),

            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Error at position {position}: Operator '{operator}' is missing an operand."),

            Self::MissingOperator { position } => {
                write!(f, "Error at position {position}: Expected an operator.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
