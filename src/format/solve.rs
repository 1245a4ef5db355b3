use crate::config::Settings;
use crate::solver::{LinearSolution, Root, SolutionSet};

use num_traits::One;

use super::number::{show_coefficient, show_decimal};

/// Render a solution set as the `S=...` suffix shown after an equation.
///
/// Unsupported degrees produce a note instead of a set.
pub fn pretty_solution_set(set: &SolutionSet, settings: &Settings) -> String {
    match set {
        SolutionSet::Linear(solution) => format!("S={{{}}}", pretty_linear(solution, settings)),
        SolutionSet::Quadratic(roots) => format!("S={{{}}}", pretty_roots(roots, settings)),
        SolutionSet::NoRealSolution => "S=Ø".to_string(),
        SolutionSet::AllReals => "S=ℝ".to_string(),
        SolutionSet::Unsupported { degree } => format!("(degree {degree} not supported)"),
    }
}

/// The unreduced fraction `b/a`, followed by `= decimal` when the root has a
/// short decimal form: `10/2 = 5`, `92/5 = 18.4`, `1/3`.
pub fn pretty_linear(solution: &LinearSolution, settings: &Settings) -> String {
    let fraction = if solution.denominator.is_one() {
        show_coefficient(&solution.numerator)
    } else {
        format!(
            "{}/{}",
            show_coefficient(&solution.numerator),
            show_coefficient(&solution.denominator)
        )
    };
    match show_decimal(&solution.root, settings.linear_decimal_places as usize) {
        Some(decimal) if decimal != fraction => format!("{fraction} = {decimal}"),
        _ => fraction,
    }
}

fn pretty_roots(roots: &[Root], settings: &Settings) -> String {
    roots
        .iter()
        .map(|root| root.render(settings))
        .collect::<Vec<_>>()
        .join(", ")
}
