use num_traits::{PrimInt, WrappingMul};

/// Computes `n!` as an iterative product.
///
/// Inputs of one or less, negative values included, yield one. There is no
/// overflow check: the product wraps in the type's native width once it no
/// longer fits.
///
/// # Example
/// ```
/// use quickcalc::arith::factorial;
///
/// assert_eq!(factorial(5_u32), 120);
/// assert_eq!(factorial(0_i64), 1);
/// assert_eq!(factorial(-3_i8), 1);
/// ```
#[must_use]
pub fn factorial<T: PrimInt + WrappingMul>(n: T) -> T {
    let one = T::one();
    if n <= one {
        return one;
    }

    let mut result = one;
    let mut factor = one + one;
    loop {
        result = result.wrapping_mul(&factor);
        if factor == n {
            return result;
        }
        factor = factor + one;
    }
}

/// Computes `n!` in a constant context.
///
/// Wraps on overflow like [`factorial`], which happens from `21!` onward.
///
/// # Example
/// ```
/// use quickcalc::arith::const_factorial;
///
/// const TABLE: [u64; 4] = [const_factorial(0),
///                          const_factorial(1),
///                          const_factorial(5),
///                          const_factorial(20)];
/// assert_eq!(TABLE, [1, 1, 120, 2_432_902_008_176_640_000]);
/// ```
#[must_use]
pub const fn const_factorial(n: u64) -> u64 {
    let mut result: u64 = 1;
    let mut factor: u64 = 2;
    while factor <= n {
        result = result.wrapping_mul(factor);
        factor += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_const_version() {
        for n in 0..=20_u64 {
            assert_eq!(factorial(n), const_factorial(n));
        }
    }

    #[test]
    fn overflow_wraps() {
        // 6! = 720 = 2 * 256 + 208
        assert_eq!(factorial(6_u8), 208);
        assert_eq!(factorial(21_u64), const_factorial(21));
    }
}
