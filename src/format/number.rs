use crate::numeric::Rational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

// Longest decimal expansion rendered for a coefficient before falling back to `n/d`.
const MAX_COEFFICIENT_PLACES: usize = 20;

/// `n` for integers, `n/d` otherwise.
pub fn show_rational(r: &Rational) -> String {
    let n = r.numer().clone();
    let d = r.denom().clone();
    if d == 1.into() {
        format!("{n}")
    } else if n < 0.into() {
        format!("-{}/{}", -n, d)
    } else {
        format!("{}/{}", n, d)
    }
}

/// Coefficient text: integers bare, terminating values as decimals, the rest as fractions.
pub fn show_coefficient(r: &Rational) -> String {
    show_decimal(r, MAX_COEFFICIENT_PLACES).unwrap_or_else(|| show_rational(r))
}

/// Decimal rendering of `r` when its expansion terminates within `max_places` digits.
pub fn show_decimal(r: &Rational, max_places: usize) -> Option<String> {
    let places = decimal_places(r.denom())?;
    if places > max_places {
        return None;
    }
    if places == 0 {
        return Some(r.to_integer().to_string());
    }
    let scale = num_traits::pow(BigInt::from(10), places);
    let scaled = (r.abs() * Rational::from_integer(scale.clone())).to_integer();
    let (whole, fraction) = scaled.div_rem(&scale);
    let sign = if r.is_negative() { "-" } else { "" };
    Some(format!(
        "{sign}{whole}.{fraction:0>width$}",
        fraction = fraction.to_string(),
        width = places
    ))
}

/// Number of digits after the point in the decimal expansion of `1/denom`,
/// or `None` when it repeats.
fn decimal_places(denom: &BigInt) -> Option<usize> {
    let two = BigInt::from(2);
    let five = BigInt::from(5);
    let mut rest = denom.abs();
    if rest.is_zero() {
        return None;
    }
    let mut twos = 0;
    while rest.is_multiple_of(&two) {
        rest /= &two;
        twos += 1;
    }
    let mut fives = 0;
    while rest.is_multiple_of(&five) {
        rest /= &five;
        fives += 1;
    }
    rest.is_one().then_some(twos.max(fives))
}

/// Fixed-point rendering with trailing zeros removed: `1.500000` becomes `1.5`.
pub fn show_real(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
