//! Formatting helpers for coefficients, roots and solution sets.

pub mod number;
pub mod solve;

pub use number::{show_coefficient, show_decimal, show_rational, show_real};
pub use solve::{pretty_linear, pretty_solution_set};
