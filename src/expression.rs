//! Classify raw input as a monomial, polynomial, equation or function.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::format::pretty_solution_set;
use crate::function::Function;
use crate::monomial::Monomial;
use crate::parser::clean;
use crate::polynomial::Polynomial;
use crate::solver::{Equation, SolutionSet};

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Monomial(Monomial),
    Polynomial(Polynomial),
    Equation {
        equation: Equation,
        solutions: SolutionSet,
    },
    Function(Function),
}

impl Expression {
    pub fn parse(input: &str) -> Result<Self> {
        Expression::parse_with(input, &Settings::default())
    }

    pub fn parse_with(input: &str, settings: &Settings) -> Result<Self> {
        let text = clean(input);
        let text = text.trim();
        let expression = if text.contains('=') {
            if text.starts_with("f(x)") {
                Expression::Function(Function::parse(text)?)
            } else {
                let equation = Equation::parse(text)?;
                let solutions = equation.solve_with(settings);
                Expression::Equation {
                    equation,
                    solutions,
                }
            }
        } else {
            let poly = Polynomial::parse(text);
            if poly.term_count() <= 1 {
                Expression::Monomial(poly.terms().next().cloned().unwrap_or_default())
            } else {
                Expression::Polynomial(poly)
            }
        };
        debug!(input, kind = expression.kind(), "classified input");
        Ok(expression)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Monomial(_) => "monomial",
            Expression::Polynomial(_) => "polynomial",
            Expression::Equation { .. } => "equation",
            Expression::Function(_) => "function",
        }
    }

    pub fn is_monomial(&self) -> bool {
        matches!(self, Expression::Monomial(_))
    }

    pub fn is_polynomial(&self) -> bool {
        matches!(self, Expression::Polynomial(_))
    }

    pub fn is_equation(&self) -> bool {
        matches!(self, Expression::Equation { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Expression::Function(_))
    }

    pub fn canonical_text(&self) -> String {
        match self {
            Expression::Monomial(term) => term.to_string(),
            Expression::Polynomial(poly) => poly.to_string(),
            Expression::Equation { equation, .. } => equation.canonical_text(),
            Expression::Function(function) => function.canonical_text(),
        }
    }

    pub fn solutions(&self) -> Option<&SolutionSet> {
        match self {
            Expression::Equation { solutions, .. } => Some(solutions),
            _ => None,
        }
    }

    /// The record handed to a front end: canonical text, numeric roots and the
    /// line to display.
    pub fn evaluation(&self, settings: &Settings) -> Evaluation {
        let canonical_text = self.canonical_text();
        let (solutions, display) = match self.solutions() {
            Some(set) => (
                solution_values(set),
                format!("{canonical_text}   {}", pretty_solution_set(set, settings)),
            ),
            None => (None, canonical_text.clone()),
        };
        Evaluation {
            canonical_text,
            solutions,
            display,
        }
    }
}

fn solution_values(set: &SolutionSet) -> Option<Vec<SolutionValue>> {
    match set {
        SolutionSet::Linear(_) | SolutionSet::Quadratic(_) => Some(
            set.roots()
                .into_iter()
                .map(SolutionValue::Number)
                .collect(),
        ),
        SolutionSet::NoRealSolution => Some(vec![SolutionValue::NoRealSolution]),
        SolutionSet::AllReals | SolutionSet::Unsupported { .. } => None,
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.evaluation(&Settings::default()).display)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionValue {
    Number(f64),
    NoRealSolution,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub canonical_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<SolutionValue>>,
    pub display: String,
}

#[cfg(test)]
mod expression_internal_tests {
    use super::*;

    #[test]
    fn single_terms_are_monomials() {
        assert!(Expression::parse("3x^2").unwrap().is_monomial());
        assert!(Expression::parse("x + x").unwrap().is_monomial());
        assert!(Expression::parse("x + 1").unwrap().is_polynomial());
    }

    #[test]
    fn keypad_symbols_are_cleaned() {
        let expr = Expression::parse("2X**2 + 6÷3").unwrap();
        assert_eq!(expr.canonical_text(), "2x^2 + 2");
    }

    #[test]
    fn no_real_solution_value() {
        let eval = Expression::parse("x^2 + 1 = 0")
            .unwrap()
            .evaluation(&Settings::default());
        assert_eq!(eval.solutions, Some(vec![SolutionValue::NoRealSolution]));
        assert_eq!(eval.display, "x^2 + 1 = 0   S=Ø");
    }
}
