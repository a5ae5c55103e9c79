use proptest::prelude::*;
use quickcalc::{
    arith::{divide, factorial, power, sqrt},
    evaluate,
};

fn naive_power(base: i64, exp: u32) -> i64 {
    (0..exp).fold(1, |acc, _| acc * base)
}

#[test]
fn zero_exponent_is_one_for_all_bases() {
    for base in [0.0, -0.0, 1.0, -2.5, 1e300, f64::INFINITY] {
        assert_eq!(power(base, 0), Ok(1.0), "base {base}");
    }
    assert_eq!(power(0_i64, 0), Ok(1));
}

#[test]
fn sqrt_fixed_points() {
    assert_eq!(sqrt(0.0_f64), 0.0);
    assert_eq!(sqrt(1.0_f64), 1.0);
}

#[test]
fn float_division_by_zero_policy() {
    assert_eq!(divide(3.0, 0.0), Ok(f64::INFINITY));
    assert_eq!(divide(-3.0, 0.0), Ok(f64::NEG_INFINITY));
    assert_eq!(divide(3.0, -0.0), Ok(f64::INFINITY));
    assert!(divide(0.0_f64, 0.0).unwrap().is_nan());
}

proptest! {
    #[test]
    fn squaring_matches_repeated_multiplication(base in -9_i64..=9, exp in 0_u32..=15) {
        prop_assert_eq!(power(base, i64::from(exp)), Ok(naive_power(base, exp)));
    }

    #[test]
    fn float_power_matches_repeated_multiplication(base in -4.0_f64..4.0, exp in 0_u32..=12) {
        let expected = (0..exp).fold(1.0, |acc, _| acc * base);
        let actual = power(base, i64::from(exp)).unwrap();
        prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn sqrt_squares_back(x in 1.0_f64..=1000.0) {
        let root = sqrt(x);
        prop_assert!((root * root - x).abs() < 1e-6);
    }

    #[test]
    fn factorial_recurrence(n in 1_u64..=20) {
        prop_assert_eq!(factorial(n), n * factorial(n - 1));
    }

    #[test]
    fn evaluation_agrees_with_direct_arithmetic(a in 0_u32..1000,
                                                b in 1_u32..1000,
                                                c in 0_u32..1000) {
        let src = format!("{a} + {b} * {c} - {a} / {b}");
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&src).unwrap(), a + b * c - a / b);
    }
}
