//! String-in, string-out entry points for front ends.

use crate::config::Settings;
use crate::error::Result;
use crate::expression::{Evaluation, Expression};
use crate::function::Function;
use crate::parser::clean;
use crate::solver::{Equation, SolutionSet};

pub fn evaluate(input: &str) -> Result<Evaluation> {
    evaluate_with(input, &Settings::default())
}

pub fn evaluate_with(input: &str, settings: &Settings) -> Result<Evaluation> {
    Ok(Expression::parse_with(input, settings)?.evaluation(settings))
}

/// Sample `f(x)` at `x`; accepts `f(x) = ...` or a bare polynomial.
pub fn function_value(input: &str, x: f64) -> Result<f64> {
    Ok(Function::parse(&clean(input))?.call(x))
}

pub fn canonical(input: &str) -> Result<String> {
    Ok(Expression::parse(input)?.canonical_text())
}

pub fn solve(input: &str) -> Result<SolutionSet> {
    Ok(Equation::parse(&clean(input))?.solve())
}
