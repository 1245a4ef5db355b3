//! Operator inputs and mixed results.

use std::fmt;

use num_bigint::BigInt;

use crate::error::{CasError, Result};
use crate::monomial::Monomial;
use crate::numeric::Rational;
use crate::polynomial::Polynomial;

/// Anything an arithmetic operator accepts on its right-hand side.
///
/// Numbers and text are canonicalized into a term or polynomial before the
/// operation runs; a polynomial handed to a monomial operator is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Number(Rational),
    Text(String),
    Term(Monomial),
    Expression(Polynomial),
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Number(_) => "number",
            Operand::Text(_) => "text",
            Operand::Term(_) => "Monomial",
            Operand::Expression(_) => "Polynomial",
        }
    }

    pub fn into_monomial(self, op: &'static str) -> Result<Monomial> {
        match self {
            Operand::Number(n) => Ok(Monomial::constant(n)),
            Operand::Text(text) => Ok(Monomial::parse(&text)),
            Operand::Term(term) => Ok(term),
            Operand::Expression(poly) => Err(CasError::unsupported(
                op,
                format!("'Monomial' and 'Polynomial' ({poly})"),
            )),
        }
    }

    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Operand::Number(n) => Polynomial::from(Monomial::constant(n)),
            Operand::Text(text) => Polynomial::parse(&text),
            Operand::Term(term) => Polynomial::from(term),
            Operand::Expression(poly) => poly,
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Number(Rational::from_integer(BigInt::from(value)))
    }
}

impl From<Rational> for Operand {
    fn from(value: Rational) -> Self {
        Operand::Number(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<Monomial> for Operand {
    fn from(value: Monomial) -> Self {
        Operand::Term(value)
    }
}

impl From<&Monomial> for Operand {
    fn from(value: &Monomial) -> Self {
        Operand::Term(value.clone())
    }
}

impl From<Polynomial> for Operand {
    fn from(value: Polynomial) -> Self {
        Operand::Expression(value)
    }
}

impl From<&Polynomial> for Operand {
    fn from(value: &Polynomial) -> Self {
        Operand::Expression(value.clone())
    }
}

/// Result of adding or subtracting two monomials: terms of equal degree stay a
/// single monomial, anything else becomes a polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sum {
    Monomial(Monomial),
    Polynomial(Polynomial),
}

impl Sum {
    pub fn as_monomial(&self) -> Option<&Monomial> {
        match self {
            Sum::Monomial(term) => Some(term),
            Sum::Polynomial(_) => None,
        }
    }

    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        match self {
            Sum::Monomial(_) => None,
            Sum::Polynomial(poly) => Some(poly),
        }
    }

    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Sum::Monomial(term) => Polynomial::from(term),
            Sum::Polynomial(poly) => poly,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Sum::Monomial(term) => term.is_zero(),
            Sum::Polynomial(poly) => poly.is_zero(),
        }
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sum::Monomial(term) => write!(f, "{term}"),
            Sum::Polynomial(poly) => write!(f, "{poly}"),
        }
    }
}
