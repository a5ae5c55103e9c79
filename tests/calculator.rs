use quickcalc::{Calculator, error::RuntimeError};

#[test]
fn chained_arithmetic() {
    let mut calc = Calculator::new(10.0);
    calc.add_to(5.0).multiply_by(2.0).divide_by(3.0).unwrap();
    assert_eq!(calc.current_value(), 10.0);

    calc.subtract_from(4.0).square();
    assert_eq!(calc.current_value(), 36.0);
}

#[test]
fn sqrt_and_reciprocal() {
    let mut calc = Calculator::new(16.0_f64);
    calc.sqrt();
    assert!((calc.current_value() - 4.0).abs() < 1e-12);

    calc.reciprocal().unwrap();
    assert!((calc.current_value() - 0.25).abs() < 1e-12);

    calc.set_value(-9.0).sqrt();
    assert_eq!(calc.current_value(), 0.0);
}

#[test]
fn reciprocal_of_zero_is_a_domain_error() {
    let mut calc = Calculator::new(5.0);
    calc.clear();
    assert!(matches!(calc.reciprocal(), Err(RuntimeError::DomainError { .. })));
    assert_eq!(calc.current_value(), 0.0);
}

#[test]
fn memory_register_workflow() {
    let mut calc = Calculator::new(3.0);
    calc.memory_store()
        .add_to(4.0)
        .memory_add()
        .clear()
        .memory_recall();
    assert_eq!(calc.current_value(), 10.0);
    assert_eq!(calc.memory(), 10.0);

    calc.memory_clear();
    assert_eq!(calc.memory(), 0.0);
    assert_eq!(calc.current_value(), 10.0);
}

#[test]
fn integer_calculator_follows_integer_division() {
    let mut calc = Calculator::new(7_i64);
    calc.divide_by(2).unwrap().multiply_by(2);
    assert_eq!(calc.current_value(), 6);
    assert_eq!(calc.divide_by(0).unwrap_err(), RuntimeError::DivisionByZero);
}
