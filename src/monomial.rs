//! Single terms `c·x^d` with a separately stored sign.

use std::fmt;
use std::hash::{Hash, Hasher};

use nom::character::complete::{digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::error::VerboseError;
use nom::sequence::pair;
use nom::IResult;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::warn;

use crate::error::{CasError, Result};
use crate::format::number::show_coefficient;
use crate::numeric::Rational;
use crate::operand::{Operand, Sum};
use crate::parser::evaluate_constant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn of(value: &Rational) -> Sign {
        if value.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    pub fn apply(self, magnitude: Rational) -> Rational {
        match self {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A term `c·x^d`. The coefficient is stored as a non-negative magnitude and
/// the sign separately, so zero is always `+0` and renders as bare `0`.
///
/// Equality, hashing and truthiness all go through the canonical text.
#[derive(Clone, Debug)]
pub struct Monomial {
    sign: Sign,
    coefficient: Rational,
    degree: i32,
    text: String,
}

impl Monomial {
    /// Build from a signed coefficient and a degree. Zero collapses to degree 0.
    pub fn new(value: Rational, degree: i32) -> Self {
        if value.is_zero() {
            return Monomial::zero();
        }
        let sign = Sign::of(&value);
        let coefficient = value.abs();
        let mut text = String::new();
        text.push(sign.as_char());
        if !(coefficient.is_one() && degree != 0) {
            text.push_str(&show_coefficient(&coefficient));
        }
        text.push_str(&literal_part(degree));
        Monomial {
            sign,
            coefficient,
            degree,
            text,
        }
    }

    pub fn zero() -> Self {
        Monomial {
            sign: Sign::Plus,
            coefficient: Rational::zero(),
            degree: 0,
            text: "0".to_string(),
        }
    }

    pub fn constant(value: Rational) -> Self {
        Monomial::new(value, 0)
    }

    /// Parse one signed term such as `-3x^2`, `x`, `4.5`, `2**3` or `(1+2)x`.
    ///
    /// Parsing never fails: an unreadable coefficient in front of `x` counts
    /// as 1, an unreadable exponent as 0 and an unreadable constant as 0.
    pub fn parse(input: &str) -> Self {
        let data: String = input
            .replace("**", "^")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if let Some(x_pos) = data.find("x^") {
            let value = parse_coefficient(&data[..x_pos]);
            let degree = parse_degree(&data[x_pos + 2..]);
            Monomial::new(value, degree)
        } else if let Some(x_pos) = data.find('x') {
            let value = parse_coefficient(&data[..x_pos]);
            Monomial::new(value, 1)
        } else {
            match evaluate_constant(&data) {
                Ok(value) => Monomial::constant(value),
                Err(err) => {
                    warn!(input, %err, "malformed constant, using 0");
                    Monomial::zero()
                }
            }
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude of the coefficient, never negative.
    pub fn coefficient(&self) -> &Rational {
        &self.coefficient
    }

    pub fn signed_coefficient(&self) -> Rational {
        self.sign.apply(self.coefficient.clone())
    }

    pub fn degree(&self) -> i32 {
        self.degree
    }

    pub fn canonical_text(&self) -> &str {
        &self.text
    }

    /// Canonical text without its sign: `3x^2` for both `+3x^2` and `-3x^2`.
    pub fn body(&self) -> &str {
        self.text.strip_prefix(&['+', '-'][..]).unwrap_or(&self.text)
    }

    pub fn literal_part(&self) -> String {
        if self.is_zero() {
            String::new()
        } else {
            literal_part(self.degree)
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.text.as_str(), "0" | "+0" | "-0")
    }

    pub fn both_nonzero(&self, other: &Monomial) -> bool {
        !self.is_zero() && !other.is_zero()
    }

    pub fn either_nonzero(&self, other: &Monomial) -> bool {
        !self.is_zero() || !other.is_zero()
    }

    /// Same magnitude and degree with a `+` sign.
    pub fn positive(&self) -> Monomial {
        Monomial::new(self.coefficient.clone(), self.degree)
    }

    pub fn add_monomial(&self, rhs: &Monomial) -> Sum {
        if self.degree == rhs.degree {
            let value = self.signed_coefficient() + rhs.signed_coefficient();
            Sum::Monomial(Monomial::new(value, self.degree))
        } else if rhs.is_zero() {
            Sum::Monomial(self.clone())
        } else if self.is_zero() {
            Sum::Monomial(rhs.clone())
        } else {
            Sum::Polynomial([self.clone(), rhs.clone()].into_iter().collect())
        }
    }

    pub fn sub_monomial(&self, rhs: &Monomial) -> Sum {
        if self.degree == rhs.degree {
            let value = self.signed_coefficient() - rhs.signed_coefficient();
            Sum::Monomial(Monomial::new(value, self.degree))
        } else {
            Sum::Polynomial([self.clone(), -rhs].into_iter().collect())
        }
    }

    pub fn mul_monomial(&self, rhs: &Monomial) -> Monomial {
        let value = self.signed_coefficient() * rhs.signed_coefficient();
        Monomial::new(value, self.degree.saturating_add(rhs.degree))
    }

    /// `(c·x^d)^n = c^n·x^(d·n)`.
    pub fn pow(&self, n: u32) -> Monomial {
        let value = num_traits::pow(self.signed_coefficient(), n as usize);
        let n = i32::try_from(n).unwrap_or(i32::MAX);
        Monomial::new(value, self.degree.saturating_mul(n))
    }

    pub fn checked_div(&self, rhs: &Monomial) -> Result<Monomial> {
        if rhs.is_zero() {
            return Err(CasError::Evaluation("division by zero".to_string()));
        }
        let value = self.signed_coefficient() / rhs.signed_coefficient();
        Ok(Monomial::new(value, self.degree.saturating_sub(rhs.degree)))
    }

    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Sum> {
        let rhs = rhs.into().into_monomial("+")?;
        Ok(self.add_monomial(&rhs))
    }

    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Sum> {
        let rhs = rhs.into().into_monomial("-")?;
        Ok(self.sub_monomial(&rhs))
    }

    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Monomial> {
        let rhs = rhs.into().into_monomial("*")?;
        Ok(self.mul_monomial(&rhs))
    }

    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Monomial> {
        let rhs = rhs.into().into_monomial("/")?;
        self.checked_div(&rhs)
    }

    /// Exponentiation by an operand that must denote a non-negative integer constant.
    pub fn try_pow(&self, exponent: impl Into<Operand>) -> Result<Monomial> {
        let exponent = exponent.into();
        let kind = exponent.kind();
        let term = exponent.into_monomial("**")?;
        let value = term.signed_coefficient();
        let n = (term.degree == 0 && value.is_integer())
            .then(|| value.to_integer().to_u32())
            .flatten()
            .ok_or_else(|| CasError::unsupported("**", format!("{kind} {}", term)))?;
        Ok(self.pow(n))
    }
}

fn literal_part(degree: i32) -> String {
    match degree {
        0 => String::new(),
        1 => "x".to_string(),
        d => format!("x^{d}"),
    }
}

/// Signed coefficient from the text in front of `x`; a missing or
/// unreadable coefficient means magnitude 1.
fn parse_coefficient(text: &str) -> Rational {
    let text = text.trim_end_matches('*');
    let (sign, rest) = match text.chars().next() {
        Some('+') => (Sign::Plus, &text[1..]),
        Some('-') => (Sign::Minus, &text[1..]),
        _ => (Sign::Plus, text),
    };
    if rest.is_empty() {
        return sign.apply(Rational::one());
    }
    match evaluate_constant(rest) {
        Ok(value) => sign.apply(value),
        Err(err) => {
            warn!(coefficient = rest, %err, "unreadable coefficient, using 1");
            sign.apply(Rational::one())
        }
    }
}

fn signed_integer(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

/// Integer exponent read up to the next sign or the end of the term.
fn parse_degree(text: &str) -> i32 {
    let digits = text.trim_start_matches('(');
    match signed_integer(digits).map(|(_, s)| s.parse::<i32>()) {
        Ok(Ok(degree)) => degree,
        _ => {
            warn!(exponent = text, "unreadable exponent, using 0");
            0
        }
    }
}

impl Default for Monomial {
    fn default() -> Self {
        Monomial::zero()
    }
}

impl From<i64> for Monomial {
    fn from(value: i64) -> Self {
        Monomial::constant(Rational::from_integer(BigInt::from(value)))
    }
}

impl From<&str> for Monomial {
    fn from(value: &str) -> Self {
        Monomial::parse(value)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text.strip_prefix('+').unwrap_or(&self.text);
        write!(f, "{text}")
    }
}

impl PartialEq for Monomial {
    fn eq(&self, other: &Monomial) -> bool {
        self.text == other.text
    }
}

impl Eq for Monomial {}

impl Hash for Monomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialEq<i64> for Monomial {
    fn eq(&self, other: &i64) -> bool {
        *self == Monomial::from(*other)
    }
}

impl PartialEq<str> for Monomial {
    fn eq(&self, other: &str) -> bool {
        *self == Monomial::parse(other)
    }
}

impl PartialEq<&str> for Monomial {
    fn eq(&self, other: &&str) -> bool {
        *self == Monomial::parse(other)
    }
}

impl std::ops::Neg for &Monomial {
    type Output = Monomial;
    fn neg(self) -> Monomial {
        Monomial::new(-self.signed_coefficient(), self.degree)
    }
}

impl std::ops::Neg for Monomial {
    type Output = Monomial;
    fn neg(self) -> Monomial {
        -&self
    }
}

impl std::ops::Add for &Monomial {
    type Output = Sum;
    fn add(self, rhs: &Monomial) -> Sum {
        self.add_monomial(rhs)
    }
}

impl std::ops::Add for Monomial {
    type Output = Sum;
    fn add(self, rhs: Monomial) -> Sum {
        self.add_monomial(&rhs)
    }
}

impl std::ops::Sub for &Monomial {
    type Output = Sum;
    fn sub(self, rhs: &Monomial) -> Sum {
        self.sub_monomial(rhs)
    }
}

impl std::ops::Sub for Monomial {
    type Output = Sum;
    fn sub(self, rhs: Monomial) -> Sum {
        self.sub_monomial(&rhs)
    }
}

impl std::ops::Mul for &Monomial {
    type Output = Monomial;
    fn mul(self, rhs: &Monomial) -> Monomial {
        self.mul_monomial(rhs)
    }
}

impl std::ops::Mul for Monomial {
    type Output = Monomial;
    fn mul(self, rhs: Monomial) -> Monomial {
        self.mul_monomial(&rhs)
    }
}
