//! `f(x) = <polynomial>` as a callable, used for sampling curves.

use std::fmt;

use num_traits::{One, Zero};

use crate::error::{CasError, Result};
use crate::numeric::{rational_to_f64, Rational};
use crate::polynomial::Polynomial;

const MARKER: &str = "f(x)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    polynomial: Polynomial,
    independent_term: Rational,
}

impl Function {
    /// Parse `f(x) = body`. The marker and the `=` are optional, so a bare
    /// polynomial is accepted as the body.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix(MARKER).unwrap_or(trimmed).trim_start();
        let body = body.strip_prefix('=').unwrap_or(body);
        if body.contains('=') {
            return Err(CasError::Parse(format!(
                "function body must not contain '=': {input}"
            )));
        }
        if body.trim().is_empty() {
            return Err(CasError::Parse(format!("empty function body: {input}")));
        }
        Ok(Function::from_polynomial(Polynomial::parse(body)))
    }

    pub fn from_polynomial(polynomial: Polynomial) -> Self {
        let independent_term = polynomial.coefficient(0);
        Function {
            polynomial,
            independent_term,
        }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn canonical_text(&self) -> String {
        format!("{MARKER} = {}", self.polynomial)
    }

    pub fn degree(&self) -> u32 {
        self.polynomial.max_degree()
    }

    pub fn coefficient(&self, degree: i32) -> Rational {
        self.polynomial.coefficient(degree)
    }

    /// Signed constant term.
    pub fn independent_term(&self) -> &Rational {
        &self.independent_term
    }

    /// `Σ c_d · x^d` over the folded terms.
    pub fn call(&self, x: f64) -> f64 {
        self.polynomial
            .terms()
            .map(|t| rational_to_f64(&t.signed_coefficient()) * x.powi(t.degree()))
            .sum()
    }

    /// Exact value at a rational point; `None` when a negative power meets `x = 0`.
    pub fn value_at(&self, x: &Rational) -> Option<Rational> {
        let mut total = Rational::zero();
        for term in self.polynomial.terms() {
            let power = match term.degree() {
                d if d >= 0 => num_traits::pow(x.clone(), d as usize),
                _ if x.is_zero() => return None,
                d => Rational::one() / num_traits::pow(x.clone(), d.unsigned_abs() as usize),
            };
            total += term.signed_coefficient() * power;
        }
        Some(total)
    }

    /// Turning point of a parabola.
    pub fn vertex(&self) -> Option<(f64, f64)> {
        if self.degree() != 2 || self.polynomial.has_negative_degrees() {
            return None;
        }
        let a = rational_to_f64(&self.coefficient(2));
        let b = rational_to_f64(&self.coefficient(1));
        let x = -b / (2.0 * a);
        Some((x, self.call(x)))
    }

    /// `steps + 1` evenly spaced points from `start` to `end` inclusive.
    pub fn sample(&self, start: f64, end: f64, steps: usize) -> Vec<(f64, f64)> {
        if steps == 0 {
            return vec![(start, self.call(start))];
        }
        let width = (end - start) / steps as f64;
        (0..=steps)
            .map(|i| {
                let x = start + width * i as f64;
                (x, self.call(x))
            })
            .collect()
    }
}

impl From<Polynomial> for Function {
    fn from(polynomial: Polynomial) -> Self {
        Function::from_polynomial(polynomial)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_text())
    }
}

#[cfg(test)]
mod function_internal_tests {
    use super::*;

    #[test]
    fn marker_and_equals_are_optional() {
        let full = Function::parse("f(x) = 2x + 1").unwrap();
        let bare = Function::parse("2x + 1").unwrap();
        assert_eq!(full, bare);
        assert_eq!(full.canonical_text(), "f(x) = 2x + 1");
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(matches!(Function::parse("f(x) ="), Err(CasError::Parse(_))));
        assert!(matches!(Function::parse("f(x) = x = 1"), Err(CasError::Parse(_))));
    }

    #[test]
    fn negative_powers_at_zero() {
        let f = Function::parse("f(x) = x^-1 + 1").unwrap();
        assert_eq!(f.value_at(&Rational::zero()), None);
        assert_eq!(
            f.value_at(&Rational::from_integer(2.into())),
            Some(Rational::new(3.into(), 2.into()))
        );
    }
}
