use num_bigint::BigInt;
use polycalc::{function_value, CasError, Function, Polynomial, Rational};

fn function(input: &str) -> Function {
    Function::parse(input).expect("parse function")
}

fn int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

#[test]
fn call_sums_signed_terms() {
    let f = function("f(x) = x^2 - 4");
    assert_eq!(f.call(3.0), 5.0);
    assert_eq!(f.call(-2.0), 0.0);
    assert_eq!(f.call(0.0), -4.0);
}

#[test]
fn degree_and_coefficients() {
    let f = function("f(x) = 3x^2 - 2x + 7");
    assert_eq!(f.degree(), 2);
    assert_eq!(f.coefficient(2), int(3));
    assert_eq!(f.coefficient(1), int(-2));
    assert_eq!(f.independent_term(), &int(7));
    assert_eq!(f.canonical_text(), "f(x) = 3x^2 - 2x + 7");
    assert_eq!(function("f(x) = x - 5").independent_term(), &int(-5));
}

#[test]
fn exact_values() {
    let f = function("f(x) = 0.5x^2 + x");
    let half = Rational::new(BigInt::from(1), BigInt::from(2));
    assert_eq!(f.value_at(&int(2)), Some(int(4)));
    assert_eq!(
        f.value_at(&half),
        Some(Rational::new(BigInt::from(5), BigInt::from(8)))
    );
}

#[test]
fn vertex_of_a_parabola() {
    assert_eq!(function("f(x) = x^2 - 4x + 3").vertex(), Some((2.0, -1.0)));
    assert_eq!(function("f(x) = 2x + 1").vertex(), None);
}

#[test]
fn sampling_is_inclusive() {
    let points = function("f(x) = x^2 - 4x + 3").sample(0.0, 2.0, 2);
    assert_eq!(points, vec![(0.0, 3.0), (1.0, 0.0), (2.0, -1.0)]);
    assert_eq!(function("f(x) = x").sample(1.0, 5.0, 0), vec![(1.0, 1.0)]);
}

#[test]
fn grapher_entry_point() {
    assert_eq!(function_value("f(x) = 2x + 1", 2.5).unwrap(), 6.0);
    assert_eq!(function_value("x^2", 3.0).unwrap(), 9.0);
    assert_eq!(function_value("F(X) = X**3", 2.0).unwrap(), 8.0);
    assert!(matches!(function_value("f(x) =", 1.0), Err(CasError::Parse(_))));
}

#[test]
fn built_from_a_polynomial() {
    let f = Function::from(Polynomial::parse("x + 1"));
    assert_eq!(f, function("f(x)=x+1"));
    assert_eq!(f.to_string(), "f(x) = x + 1");
}
