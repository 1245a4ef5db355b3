use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::config::Settings;
use crate::monomial::Sign;
use crate::numeric::{exact_square_root, rational_to_f64, square_root_with, Rational};
use crate::polynomial::Polynomial;

use super::{Root, SolutionSet};

/// Solve `ax² + bx + c = 0`, dispatching on which lower-degree terms are present.
pub fn solve_quadratic(poly: &Polynomial, settings: &Settings) -> SolutionSet {
    let a = poly.coefficient(2);
    let b = poly.coefficient(1);
    let c = poly.coefficient(0);
    let zero = || Root::Exact(Rational::zero());

    match (poly.has_term(1), poly.has_term(0)) {
        (true, true) => complete(&a, &b, &c, settings),
        // ax² = 0
        (false, false) => SolutionSet::Quadratic([zero(), zero()]),
        // x(ax + b) = 0
        (true, false) => SolutionSet::Quadratic([zero(), Root::Exact(-b / a)]),
        // ax² + c = 0
        (false, true) => pure(&a, &c, settings),
    }
}

fn complete(a: &Rational, b: &Rational, c: &Rational, settings: &Settings) -> SolutionSet {
    let four = Rational::from_integer(BigInt::from(4));
    let two_a = a * Rational::from_integer(BigInt::from(2));
    let delta = b * b - four * a * c;
    if delta.is_negative() {
        return SolutionSet::NoRealSolution;
    }

    if let Some(root) = exact_square_root(&delta) {
        let x1 = (-b + &root) / &two_a;
        let x2 = (-b - &root) / &two_a;
        return SolutionSet::Quadratic([Root::Exact(x1), Root::Exact(x2)]);
    }

    // q = -(b + sign(b)·√Δ)/2 avoids cancelling -b against √Δ.
    let root = square_root_with(rational_to_f64(&delta), settings.sqrt_max_iterations);
    let (a, b, c) = (rational_to_f64(a), rational_to_f64(b), rational_to_f64(c));
    let q = -(b + root.copysign(b)) / 2.0;
    let (plus, minus) = if b < 0.0 { (q / a, c / q) } else { (c / q, q / a) };
    SolutionSet::Quadratic([Root::Real(plus), Root::Real(minus)])
}

fn pure(a: &Rational, c: &Rational, settings: &Settings) -> SolutionSet {
    if Sign::of(a) == Sign::of(c) {
        return SolutionSet::NoRealSolution;
    }
    let quotient = -c / a;
    match exact_square_root(&quotient) {
        Some(root) => SolutionSet::Quadratic([Root::Exact(root.clone()), Root::Exact(-root)]),
        None => {
            let root = square_root_with(rational_to_f64(&quotient), settings.sqrt_max_iterations);
            SolutionSet::Quadratic([Root::Real(root), Root::Real(-root)])
        }
    }
}
