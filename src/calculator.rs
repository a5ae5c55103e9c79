use num_traits::Float;
use tracing::trace;

use crate::{
    arith::{Scalar, add, divide, multiply, sqrt, subtract},
    error::RuntimeError,
};

/// A stateful accumulator with a single memory register.
///
/// Every operation mutates the calculator in place and returns it again, so
/// operations chain. Operations that can fail return the calculator wrapped
/// in a `Result`, which keeps the chain going through `?`.
///
/// ## Usage
///
/// ```
/// use quickcalc::Calculator;
///
/// # fn main() -> Result<(), quickcalc::error::RuntimeError> {
/// let mut calc = Calculator::new(10.0);
/// calc.add_to(5.0).multiply_by(2.0).divide_by(3.0)?;
/// assert_eq!(calc.current_value(), 10.0);
///
/// calc.memory_store().clear().add_to(1.0).memory_add();
/// assert_eq!(calc.memory(), 11.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator<T = f64> {
    current_value: T,
    memory:        T,
}

impl<T: Scalar> Default for Calculator<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Scalar> Calculator<T> {
    /// Creates a calculator holding `initial_value` with an empty memory.
    #[must_use]
    pub fn new(initial_value: T) -> Self {
        Self { current_value: initial_value,
               memory:        T::zero(), }
    }

    /// The running result.
    #[must_use]
    pub const fn current_value(&self) -> T {
        self.current_value
    }

    /// The memory register.
    #[must_use]
    pub const fn memory(&self) -> T {
        self.memory
    }

    /// Replaces the running result.
    pub fn set_value(&mut self, value: T) -> &mut Self {
        self.current_value = value;
        self
    }

    /// Adds `value` to the running result.
    pub fn add_to(&mut self, value: T) -> &mut Self {
        self.current_value = add(self.current_value, value);
        self
    }

    /// Subtracts `value` from the running result.
    pub fn subtract_from(&mut self, value: T) -> &mut Self {
        self.current_value = subtract(self.current_value, value);
        self
    }

    /// Multiplies the running result by `value`.
    pub fn multiply_by(&mut self, value: T) -> &mut Self {
        self.current_value = multiply(self.current_value, value);
        self
    }

    /// Divides the running result by `value`.
    ///
    /// Floating-point calculators never fail here; dividing by zero stores an
    /// infinity or NaN.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] for an integral zero divisor,
    /// leaving the running result untouched.
    pub fn divide_by(&mut self, value: T) -> Result<&mut Self, RuntimeError> {
        self.current_value = divide(self.current_value, value)?;
        Ok(self)
    }

    /// Resets the running result to zero. Memory is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.current_value = T::zero();
        self
    }

    /// Squares the running result.
    pub fn square(&mut self) -> &mut Self {
        self.current_value = multiply(self.current_value, self.current_value);
        self
    }

    /// Replaces the running result with its reciprocal.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DomainError`] when the running result is zero.
    ///
    /// # Example
    /// ```
    /// use quickcalc::{Calculator, error::RuntimeError};
    ///
    /// let mut calc = Calculator::new(4.0);
    /// assert_eq!(calc.reciprocal().unwrap().current_value(), 0.25);
    ///
    /// let mut zero = Calculator::<f64>::default();
    /// assert!(matches!(zero.reciprocal(), Err(RuntimeError::DomainError { .. })));
    /// ```
    pub fn reciprocal(&mut self) -> Result<&mut Self, RuntimeError> {
        if self.current_value == T::zero() {
            let details = "reciprocal of zero is undefined".to_string();
            return Err(RuntimeError::DomainError { details });
        }
        self.current_value = divide(T::one(), self.current_value)?;
        Ok(self)
    }

    /// Copies the running result into memory.
    pub fn memory_store(&mut self) -> &mut Self {
        trace!(value = %self.current_value, "memory store");
        self.memory = self.current_value;
        self
    }

    /// Copies memory into the running result.
    pub fn memory_recall(&mut self) -> &mut Self {
        self.current_value = self.memory;
        self
    }

    /// Resets memory to zero.
    pub fn memory_clear(&mut self) -> &mut Self {
        self.memory = T::zero();
        self
    }

    /// Adds the running result to memory.
    pub fn memory_add(&mut self) -> &mut Self {
        self.memory = add(self.memory, self.current_value);
        trace!(memory = %self.memory, "memory add");
        self
    }
}

impl<T: Scalar + Float> Calculator<T> {
    /// Replaces the running result with its Newton-Raphson square root.
    ///
    /// A non-positive running result becomes zero.
    pub fn sqrt(&mut self) -> &mut Self {
        self.current_value = sqrt(self.current_value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_by_default() {
        let calc = Calculator::<f64>::default();
        assert_eq!(calc.current_value(), 0.0);
        assert_eq!(calc.memory(), 0.0);
    }

    #[test]
    fn failed_division_keeps_state() {
        let mut calc = Calculator::new(9_i64);
        assert_eq!(calc.divide_by(0).unwrap_err(), RuntimeError::DivisionByZero);
        assert_eq!(calc.current_value(), 9);
        assert_eq!(calc.divide_by(2).unwrap().current_value(), 4);
    }

    #[test]
    fn float_division_by_zero_stores_infinity() {
        let mut calc = Calculator::new(-2.0);
        calc.divide_by(0.0).unwrap();
        assert_eq!(calc.current_value(), f64::NEG_INFINITY);
    }

    #[test]
    fn integer_reciprocal_truncates() {
        let mut calc = Calculator::new(3_i32);
        assert_eq!(calc.reciprocal().unwrap().current_value(), 0);
        assert!(calc.reciprocal().is_err());
    }
}
