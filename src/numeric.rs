//! Scalar helpers: the iterative square root used by the quadratic solver,
//! factorial for the `!` key, and angle conversions.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

pub type Rational = BigRational;

pub const PI: f64 = std::f64::consts::PI;

const DEFAULT_SQRT_ITERATIONS: usize = 64;

/// Square root by Newton iteration from a power-of-two seed.
pub fn square_root(number: f64) -> f64 {
    square_root_with(number, DEFAULT_SQRT_ITERATIONS)
}

/// Like [`square_root`] but stops after `max_iterations` refinements even if
/// the estimate is still moving.
pub fn square_root_with(number: f64, max_iterations: usize) -> f64 {
    if number.is_nan() || number < 0.0 {
        return f64::NAN;
    }
    if number == 0.0 || number.is_infinite() {
        return number;
    }
    let mut root = seed(number);
    for _ in 0..max_iterations {
        let next = (number / root + root) / 2.0;
        if next == root {
            break;
        }
        root = next;
    }
    root
}

// 2^(e/2) for number = m·2^e, within a factor of two of the root.
fn seed(number: f64) -> f64 {
    let exponent = ((number.to_bits() >> 52) & 0x7ff) as i32 - 1023;
    2f64.powi(exponent / 2)
}

/// Exact square root of a non-negative rational, when numerator and
/// denominator are both perfect squares.
pub fn exact_square_root(value: &Rational) -> Option<Rational> {
    if value.is_negative() {
        return None;
    }
    let numer = value.numer();
    let denom = value.denom();
    let root_n = numer.sqrt();
    let root_d = denom.sqrt();
    if &(&root_n * &root_n) == numer && &(&root_d * &root_d) == denom {
        Some(Rational::new(root_n, root_d))
    } else {
        None
    }
}

pub fn factorial(n: u64) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, k| acc * BigInt::from(k))
}

pub fn radians_to_degrees(x: f64) -> f64 {
    x * 180.0 / PI
}

pub fn degrees_to_radians(x: f64) -> f64 {
    x / 180.0 * PI
}

pub fn rational_to_f64(value: &Rational) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        if value.is_zero() {
            0.0
        } else if value.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

#[cfg(test)]
mod numeric_internal_tests {
    use super::*;

    #[test]
    fn square_root_converges() {
        assert_eq!(square_root(49.0), 7.0);
        assert!((square_root(2.0) - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(square_root(0.0), 0.0);
        assert!(square_root(-4.0).is_nan());
    }

    #[test]
    fn square_root_converges_across_magnitudes() {
        for number in [1e-300, 1e-12, 3.0, 1e36, 1e300, f64::MAX] {
            let root = square_root(number);
            assert!((root - number.sqrt()).abs() <= number.sqrt() * 1e-15, "{number}");
        }
    }

    #[test]
    fn square_root_respects_iteration_cap() {
        let coarse = square_root_with(1e6, 1);
        assert!(coarse > 1000.0);
        assert!((square_root_with(1e6, 64) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn exact_root_of_perfect_squares() {
        let value = Rational::new(BigInt::from(49), BigInt::from(4));
        assert_eq!(
            exact_square_root(&value),
            Some(Rational::new(BigInt::from(7), BigInt::from(2)))
        );
        assert_eq!(exact_square_root(&Rational::from_integer(BigInt::from(2))), None);
        assert_eq!(exact_square_root(&Rational::from_integer(BigInt::from(-9))), None);
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), BigInt::from(1));
        assert_eq!(factorial(1), BigInt::from(1));
        assert_eq!(factorial(5), BigInt::from(120));
    }

    #[test]
    fn angle_conversions_are_inverse() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((degrees_to_radians(radians_to_degrees(1.25)) - 1.25).abs() < 1e-12);
    }
}
