use num_traits::{ToPrimitive, Zero};

/// Converts a numeric value to an `i64` exponent, truncating toward zero.
///
/// Values above `i64::MAX` saturate to `i64::MAX`, values below `i64::MIN`
/// saturate to `i64::MIN`, and values that are neither (NaN) become `0`.
///
/// ## Parameters
/// - `value`: The number to convert.
///
/// ## Returns
/// The truncated, saturated exponent.
///
/// ## Example
/// ```
/// use quickcalc::util::num::to_exponent_saturating;
///
/// assert_eq!(to_exponent_saturating(2.9_f64), 2);
/// assert_eq!(to_exponent_saturating(-2.9_f64), -2);
/// assert_eq!(to_exponent_saturating(1e300_f64), i64::MAX);
/// assert_eq!(to_exponent_saturating(f64::NAN), 0);
/// assert_eq!(to_exponent_saturating(u64::MAX), i64::MAX);
/// ```
pub fn to_exponent_saturating<T: ToPrimitive + PartialOrd + Zero>(value: T) -> i64 {
    value.to_i64().unwrap_or_else(|| {
                       if value > T::zero() {
                           i64::MAX
                       } else if value < T::zero() {
                           i64::MIN
                       } else {
                           0
                       }
                   })
}
