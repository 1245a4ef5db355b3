//! Equations `lhs = rhs`, normalized to `polynomial = 0` and solved by degree.

mod linear;
mod quadratic;

use std::fmt;

use tracing::debug;

use crate::config::Settings;
use crate::error::{CasError, Result};
use crate::format::number::{show_coefficient, show_real};
use crate::numeric::{rational_to_f64, Rational};
use crate::polynomial::Polynomial;

pub use linear::solve_linear;
pub use quadratic::solve_quadratic;

/// A real root, exact when the arithmetic allowed it.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Exact(Rational),
    Real(f64),
}

impl Root {
    pub fn value(&self) -> f64 {
        match self {
            Root::Exact(r) => rational_to_f64(r),
            Root::Real(v) => *v,
        }
    }

    pub fn render(&self, settings: &Settings) -> String {
        match self {
            Root::Exact(r) => show_coefficient(r),
            Root::Real(v) => show_real(*v, settings.real_precision),
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Settings::default()))
    }
}

/// Root of `ax + b = 0` kept as the fraction `-b / a` it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSolution {
    pub numerator: Rational,
    pub denominator: Rational,
    pub root: Rational,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolutionSet {
    Linear(LinearSolution),
    Quadratic([Root; 2]),
    /// Negative discriminant, same-signed pure quadratic, or a false constant equation.
    NoRealSolution,
    /// `0 = 0`.
    AllReals,
    /// Degree above 2 or terms with negative exponents.
    Unsupported { degree: u32 },
}

impl SolutionSet {
    pub fn roots(&self) -> Vec<f64> {
        match self {
            SolutionSet::Linear(solution) => vec![rational_to_f64(&solution.root)],
            SolutionSet::Quadratic(roots) => roots.iter().map(Root::value).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SolutionSet::NoRealSolution)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, SolutionSet::Unsupported { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    polynomial: Polynomial,
    degree: u32,
}

impl Equation {
    /// Parse `lhs = rhs`, or a bare expression taken as `expr = 0`.
    pub fn parse(input: &str) -> Result<Self> {
        let (lhs, rhs) = match input.split_once('=') {
            Some((_, rhs)) if rhs.contains('=') => {
                return Err(CasError::Parse(format!(
                    "equation must contain a single '=': {input}"
                )));
            }
            Some((lhs, rhs)) => (lhs, rhs),
            None => (input, "0"),
        };
        Ok(Equation::new(&Polynomial::parse(lhs), &Polynomial::parse(rhs)))
    }

    /// Move every right-hand term to the left with its sign flipped.
    pub fn new(lhs: &Polynomial, rhs: &Polynomial) -> Self {
        let polynomial = if rhs.is_zero() { lhs.clone() } else { lhs - rhs };
        debug!(lhs = %lhs, rhs = %rhs, normalized = %polynomial, "normalized equation");
        Equation::from_polynomial(polynomial)
    }

    pub fn from_polynomial(polynomial: Polynomial) -> Self {
        let degree = polynomial.max_degree();
        Equation { polynomial, degree }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn canonical_text(&self) -> String {
        format!("{} = 0", self.polynomial)
    }

    pub fn solve(&self) -> SolutionSet {
        self.solve_with(&Settings::default())
    }

    pub fn solve_with(&self, settings: &Settings) -> SolutionSet {
        if self.polynomial.has_negative_degrees() {
            debug!(equation = %self, "negative exponents are not solvable");
            return SolutionSet::Unsupported {
                degree: self.degree,
            };
        }
        debug!(equation = %self, degree = self.degree, "solving");
        match self.degree {
            0 if self.polynomial.is_zero() => SolutionSet::AllReals,
            0 => SolutionSet::NoRealSolution,
            1 => solve_linear(&self.polynomial),
            2 => solve_quadratic(&self.polynomial, settings),
            degree => SolutionSet::Unsupported { degree },
        }
    }
}

impl From<Polynomial> for Equation {
    fn from(polynomial: Polynomial) -> Self {
        Equation::from_polynomial(polynomial)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = 0", self.polynomial)
    }
}
