use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use num_traits::{One, ToPrimitive, Zero};

use crate::{error::RuntimeError, util::num::to_exponent_saturating};

/// An arithmetic scalar accepted by the primitive layer, the evaluator and the
/// accumulator.
///
/// The trait is implemented for every primitive integer type and for `f32`
/// and `f64`. Integral implementations wrap on overflow and refuse a zero
/// divisor; floating-point implementations follow IEEE semantics except that
/// the sign of an infinite quotient always follows the numerator.
pub trait Scalar:
    Copy + PartialOrd + Debug + Display + FromStr + Zero + One + ToPrimitive
{
    /// Returns `self + rhs`.
    fn sum(self, rhs: Self) -> Self;
    /// Returns `self - rhs`.
    fn difference(self, rhs: Self) -> Self;
    /// Returns `self * rhs`.
    fn product(self, rhs: Self) -> Self;
    /// Returns `self / rhs`, or an error when the type cannot represent the
    /// quotient of a zero divisor.
    fn quotient(self, rhs: Self) -> Result<Self, RuntimeError>;

    /// Truncates the value toward zero into an exponent usable by
    /// [`power`](crate::arith::power::power).
    ///
    /// Values outside the `i64` range saturate; NaN becomes `0`.
    fn truncate_exponent(self) -> i64 {
        to_exponent_saturating(self)
    }
}

macro_rules! integral_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn sum(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn difference(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn product(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn quotient(self, rhs: Self) -> Result<Self, RuntimeError> {
                if rhs == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                // `MIN / -1` wraps back to `MIN`.
                Ok(self.wrapping_div(rhs))
            }
        }
    )*};
}

macro_rules! float_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn sum(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn difference(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn product(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn quotient(self, rhs: Self) -> Result<Self, RuntimeError> {
                if rhs == 0.0 {
                    return Ok(if self > 0.0 {
                                  <$t>::INFINITY
                              } else if self < 0.0 {
                                  <$t>::NEG_INFINITY
                              } else {
                                  <$t>::NAN
                              });
                }
                Ok(self / rhs)
            }
        }
    )*};
}

integral_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_scalar!(f32, f64);
