use num_traits::{Signed, Zero};

use crate::polynomial::Polynomial;

use super::{LinearSolution, SolutionSet};

/// Solve `ax + b = 0` for `x = -b / a`.
pub fn solve_linear(poly: &Polynomial) -> SolutionSet {
    let a = poly.coefficient(1);
    let b = poly.coefficient(0);
    if a.is_zero() {
        return SolutionSet::Unsupported {
            degree: poly.max_degree(),
        };
    }
    let (numerator, denominator) = if a.is_negative() { (b, -a) } else { (-b, a) };
    let root = &numerator / &denominator;
    SolutionSet::Linear(LinearSolution {
        numerator,
        denominator,
        root,
    })
}
