//! Single-variable polynomial algebra: parse terms and sums of terms into a
//! canonical form, combine them, and solve equations of degree one and two.

pub mod config;
pub mod error;
pub mod expression;
pub mod format;
pub mod function;
pub mod monomial;
pub mod numeric;
pub mod operand;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod solver;

pub use config::Settings;
pub use error::{CasError, Result};
pub use expression::{Evaluation, Expression, SolutionValue};
pub use format::pretty_solution_set;
pub use function::Function;
pub use monomial::{Monomial, Sign};
pub use numeric::Rational;
pub use operand::{Operand, Sum};
pub use parser::{clean, evaluate_constant};
pub use polynomial::Polynomial;
pub use prelude::{evaluate, evaluate_with, function_value};
pub use solver::{Equation, LinearSolution, Root, SolutionSet};
