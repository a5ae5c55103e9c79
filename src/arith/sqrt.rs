use num_traits::{Float, NumCast};

/// Upper bound on Newton-Raphson refinements.
pub const MAX_ITERATIONS: usize = 20;
/// Multiple of the machine epsilon below which two successive guesses are
/// considered converged.
pub const TOLERANCE_SCALE: u8 = 100;

/// Computes the square root of `x` by Newton-Raphson iteration.
///
/// Starting from `x / 2`, the guess is refined as `(g + x / g) / 2` until two
/// successive guesses differ by less than `100 * epsilon` or
/// [`MAX_ITERATIONS`] refinements have been made. The last guess is returned
/// even if it has not converged, which happens for very large inputs.
///
/// Non-positive inputs return zero rather than an error; negative inputs are
/// therefore not distinguished from zero. One returns exactly one.
///
/// # Example
/// ```
/// use quickcalc::arith::sqrt;
///
/// assert!((sqrt(2.0_f64) - std::f64::consts::SQRT_2).abs() < 1e-12);
/// assert_eq!(sqrt(1.0_f64), 1.0);
/// assert_eq!(sqrt(-4.0_f64), 0.0);
/// ```
#[must_use]
pub fn sqrt<F: Float>(x: F) -> F {
    if x <= F::zero() {
        return F::zero();
    }
    if x == F::one() {
        return F::one();
    }

    let two = F::one() + F::one();
    // Small integers are exact in every float type.
    let scale = <F as NumCast>::from(TOLERANCE_SCALE).unwrap_or_else(F::one);
    let tolerance = F::epsilon() * scale;

    let mut guess = x / two;
    for _ in 0..MAX_ITERATIONS {
        let next = (guess + x / guess) / two;
        if (next - guess).abs() < tolerance {
            return next;
        }
        guess = next;
    }

    guess
}
