use crate::{
    arith::{basic::divide, scalar::Scalar},
    error::RuntimeError,
};

/// Raises `base` to an integer power by repeated squaring.
///
/// The base is squared once per bit of `|exp|` and multiplied into the
/// result only on set bits, so the cost is `O(log |exp|)` multiplications.
/// `exp == 0` yields one for every base, `0^0` included. A negative exponent
/// yields the reciprocal of the positive power, computed with [`divide`], so
/// a zero base follows the same infinity / NaN / error policy as division.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] for an integral zero base with a
/// negative exponent.
///
/// # Example
/// ```
/// use quickcalc::arith::power;
///
/// assert_eq!(power(2_i64, 10).unwrap(), 1024);
/// assert_eq!(power(0.0, 0).unwrap(), 1.0);
/// assert_eq!(power(2.0, -2).unwrap(), 0.25);
/// assert_eq!(power(0.0, -1).unwrap(), f64::INFINITY);
/// ```
pub fn power<T: Scalar>(base: T, exp: i64) -> Result<T, RuntimeError> {
    if exp == 0 {
        return Ok(T::one());
    }

    let magnitude = raise(base, exp.unsigned_abs());
    if exp < 0 { divide(T::one(), magnitude) } else { Ok(magnitude) }
}

fn raise<T: Scalar>(mut base: T, mut exp: u64) -> T {
    let mut result = T::one();
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.product(base);
        }
        exp >>= 1;
        // Skip the final squaring; its value is never used.
        if exp > 0 {
            base = base.product(base);
        }
    }
    result
}
