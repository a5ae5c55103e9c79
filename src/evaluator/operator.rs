use crate::{
    arith::{Scalar, add, divide, multiply, power, subtract},
    error::RuntimeError,
};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Binding strength; a higher value binds tighter.
    ///
    /// All operators are applied left to right among equals, `^` included.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// For `^` the right operand is truncated toward zero to an integer
    /// exponent.
    ///
    /// # Errors
    /// Fails only where the arithmetic layer fails for `T`: integral division
    /// by zero, or an integral zero raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use quickcalc::evaluator::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0).unwrap(), 6.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 3.9).unwrap(), 8.0);
    /// assert!(Operator::Div.apply(1, 0).is_err());
    /// ```
    pub fn apply<T: Scalar>(self, left: T, right: T) -> Result<T, RuntimeError> {
        match self {
            Self::Add => Ok(add(left, right)),
            Self::Sub => Ok(subtract(left, right)),
            Self::Mul => Ok(multiply(left, right)),
            Self::Div => divide(left, right),
            Self::Pow => power(left, right.truncate_exponent()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
