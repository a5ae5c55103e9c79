use crate::{arith::scalar::Scalar, error::RuntimeError};

/// Returns `a + b`.
///
/// Total for every [`Scalar`]; integral sums wrap on overflow.
///
/// # Example
/// ```
/// use quickcalc::arith::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(i8::MAX, 1), i8::MIN);
/// ```
#[inline]
#[must_use]
pub fn add<T: Scalar>(a: T, b: T) -> T {
    a.sum(b)
}

/// Returns `a - b`.
#[inline]
#[must_use]
pub fn subtract<T: Scalar>(a: T, b: T) -> T {
    a.difference(b)
}

/// Returns `a * b`.
#[inline]
#[must_use]
pub fn multiply<T: Scalar>(a: T, b: T) -> T {
    a.product(b)
}

/// Divides `a` by `b`.
///
/// For floating-point types this never fails: a zero divisor yields positive
/// infinity for a positive numerator, negative infinity for a negative one
/// and NaN when the numerator is zero as well. For integral types a zero
/// divisor is an error.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when `b` is an integral zero.
///
/// # Example
/// ```
/// use quickcalc::{arith::divide, error::RuntimeError};
///
/// assert_eq!(divide(1.0, 0.0).unwrap(), f64::INFINITY);
/// assert_eq!(divide(-1.0, 0.0).unwrap(), f64::NEG_INFINITY);
/// assert!(divide(0.0_f64, 0.0).unwrap().is_nan());
/// assert_eq!(divide(7, 0), Err(RuntimeError::DivisionByZero));
/// ```
#[inline]
pub fn divide<T: Scalar>(a: T, b: T) -> Result<T, RuntimeError> {
    a.quotient(b)
}
