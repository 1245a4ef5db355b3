//! Input cleaning and the constant evaluator.
//!
//! Constants are the only place arbitrary arithmetic text is accepted, and the
//! grammar is limited to numeric literals, `+ - * / ^ ( )` and postfix `!`.

use crate::error::{CasError, Result};
use crate::numeric::{factorial, Rational, PI};
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, multispace0};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::error::VerboseError;
use nom::multi::{fold_many0, many0_count};
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;
use num_bigint::BigInt;
use num_traits::{Num, One, ToPrimitive, Zero};
use tracing::trace;

const MAX_EXPONENT: i64 = 1024;
const MAX_FACTORIAL: u64 = 1000;
const MAX_POWER_BITS: u64 = 1 << 20;

/// Normalize keypad symbols into the plain grammar: lower-case, `**` to `^`,
/// `÷`/`×` to `/`/`*`, and `pi`/`π` to the numeric constant. A constant that
/// directly follows a digit or `)` gets an explicit `*`.
pub fn clean(input: &str) -> String {
    let text = input
        .to_lowercase()
        .replace("**", "^")
        .replace('÷', "/")
        .replace('×', "*")
        .replace('π', "pi");
    let pi = PI.to_string();
    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();
    while let Some(pos) = rest.find("pi") {
        out.push_str(&rest[..pos]);
        if out.ends_with(|c: char| c.is_ascii_digit() || c == ')') {
            out.push('*');
        }
        out.push_str(&pi);
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// Arithmetic over constant literals, evaluated exactly.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Constant {
    Number(Rational),
    Add(Box<Constant>, Box<Constant>),
    Sub(Box<Constant>, Box<Constant>),
    Mul(Box<Constant>, Box<Constant>),
    Div(Box<Constant>, Box<Constant>),
    Pow(Box<Constant>, Box<Constant>),
    Neg(Box<Constant>),
    Factorial(Box<Constant>),
}

impl Constant {
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn evaluate(&self) -> Result<Rational> {
        match self {
            Constant::Number(n) => Ok(n.clone()),
            Constant::Add(a, b) => Ok(a.evaluate()? + b.evaluate()?),
            Constant::Sub(a, b) => Ok(a.evaluate()? - b.evaluate()?),
            Constant::Mul(a, b) => Ok(a.evaluate()? * b.evaluate()?),
            Constant::Div(a, b) => {
                let divisor = b.evaluate()?;
                if divisor.is_zero() {
                    return Err(CasError::Evaluation("division by zero".to_string()));
                }
                Ok(a.evaluate()? / divisor)
            }
            Constant::Pow(base, exp) => power(&base.evaluate()?, &exp.evaluate()?),
            Constant::Neg(inner) => Ok(-inner.evaluate()?),
            Constant::Factorial(inner) => {
                let value = inner.evaluate()?;
                let n = value
                    .is_integer()
                    .then(|| value.to_integer().to_u64())
                    .flatten()
                    .filter(|n| *n <= MAX_FACTORIAL)
                    .ok_or_else(|| {
                        CasError::Evaluation(format!("factorial of {value} is not supported"))
                    })?;
                Ok(Rational::from_integer(factorial(n)))
            }
        }
    }
}

fn power(base: &Rational, exp: &Rational) -> Result<Rational> {
    if !exp.is_integer() {
        return Err(CasError::Evaluation(format!("non-integer exponent {exp}")));
    }
    let k = exp
        .to_integer()
        .to_i64()
        .filter(|k| k.abs() <= MAX_EXPONENT)
        .ok_or_else(|| CasError::Evaluation(format!("exponent {exp} is too large")))?;
    let bits = base.numer().bits().max(base.denom().bits());
    if bits.saturating_mul(k.unsigned_abs()) > MAX_POWER_BITS {
        return Err(CasError::Evaluation(format!(
            "{base}^{k} exceeds {MAX_POWER_BITS} bits"
        )));
    }
    let magnitude = num_traits::pow(base.clone(), k.unsigned_abs() as usize);
    if k >= 0 {
        Ok(magnitude)
    } else if magnitude.is_zero() {
        Err(CasError::Evaluation("division by zero".to_string()))
    } else {
        Ok(Rational::one() / magnitude)
    }
}

pub fn parse_constant(input: &str) -> Result<Constant> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, constant)) => Ok(constant),
        Err(e) => Err(CasError::Parse(format!("{e:?}"))),
    }
}

/// Parse and evaluate a constant literal such as `3`, `-2.5`, `(1+2)^2/3` or `4!`.
pub fn evaluate_constant(input: &str) -> Result<Rational> {
    let value = parse_constant(input)?.evaluate()?;
    trace!(input, %value, "evaluated constant");
    Ok(value)
}

fn parse_add_sub(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Constant::Add(acc.boxed(), rhs.boxed()),
            '-' => Constant::Sub(acc.boxed(), rhs.boxed()),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Constant::Mul(acc.boxed(), rhs.boxed()),
            '/' => Constant::Div(acc.boxed(), rhs.boxed()),
            _ => unreachable!(),
        },
    )(rest)
}

// Unary signs bind looser than `^`, so `-2^2` is `-(2^2)` and `2^-1` is allowed.
fn parse_unary(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    if let Ok((rest, constant)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Constant::Neg(constant.boxed())))
    } else if let Ok((rest, constant)) = preceded(ws(char('+')), parse_unary)(input) {
        Ok((rest, constant))
    } else {
        parse_pow(input)
    }
}

fn parse_pow(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    let (rest, base) = parse_postfix(input)?;
    if let Ok((next, exp)) = preceded(ws(char('^')), parse_unary)(rest) {
        Ok((next, Constant::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_postfix(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    let (rest, base) = parse_primary(input)?;
    let (rest, bangs) = many0_count(ws(char('!')))(rest)?;
    let constant = (0..bangs).fold(base, |acc, _| Constant::Factorial(acc.boxed()));
    Ok((rest, constant))
}

fn parse_primary(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    alt((parse_parens, parse_number))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> IResult<&str, Constant, VerboseError<&str>> {
    map(
        ws(alt((
            recognize(tuple((digit1, opt(pair(char('.'), digit0))))),
            recognize(pair(char('.'), digit1)),
        ))),
        |s: &str| Constant::Number(decimal_to_rational(s)),
    )(input)
}

fn decimal_to_rational(text: &str) -> Rational {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let digits = format!("{whole}{fraction}");
    let numer = if digits.is_empty() {
        BigInt::zero()
    } else {
        BigInt::from_str_radix(&digits, 10).unwrap_or_else(|_| BigInt::zero())
    };
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    Rational::new(numer, denom)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod constant_internal_tests {
    use super::*;
    use num_traits::Signed;

    fn value(input: &str) -> Rational {
        evaluate_constant(input).unwrap()
    }

    fn int(n: i64) -> Rational {
        Rational::from_integer(BigInt::from(n))
    }

    #[test]
    fn evaluates_basic_arithmetic() {
        assert_eq!(value("10 - 5"), int(5));
        assert_eq!(value("2 + 3 * 4"), int(14));
        assert_eq!(value("(2 + 3) * 4"), int(20));
        assert_eq!(value("7/2"), Rational::new(BigInt::from(7), BigInt::from(2)));
    }

    #[test]
    fn power_binds_tighter_than_unary_minus() {
        assert_eq!(value("-2^2"), int(-4));
        assert_eq!(value("2^-1"), Rational::new(BigInt::from(1), BigInt::from(2)));
        assert_eq!(value("2^3^2"), int(512));
    }

    #[test]
    fn decimals_are_exact() {
        assert_eq!(value("2.5"), Rational::new(BigInt::from(5), BigInt::from(2)));
        assert_eq!(value(".25"), Rational::new(BigInt::from(1), BigInt::from(4)));
        assert_eq!(value("3."), int(3));
    }

    #[test]
    fn factorial_postfix() {
        assert_eq!(value("4!"), int(24));
        assert_eq!(value("3!!"), int(720));
        assert!(evaluate_constant("(1/2)!").is_err());
    }

    #[test]
    fn nested_powers_are_bounded() {
        assert_eq!(value("2^1024"), Rational::from_integer(num_traits::pow(BigInt::from(2), 1024)));
        assert!(matches!(
            evaluate_constant("((3^1024)^1024)^64"),
            Err(CasError::Evaluation(_))
        ));
        assert!(evaluate_constant("(1000!)^1024").is_err());
    }

    #[test]
    fn rejects_what_it_cannot_evaluate() {
        assert!(evaluate_constant("1/0").is_err());
        assert!(evaluate_constant("2^(1/2)").is_err());
        assert!(evaluate_constant("abc").is_err());
        assert!(evaluate_constant("").is_err());
        assert!(evaluate_constant("2 +").is_err());
    }

    #[test]
    fn clean_applies_keypad_substitutions() {
        assert_eq!(clean("X**2 ÷ 2 × 3"), "x^2 / 2 * 3");
        assert_eq!(clean("2π"), format!("2*{}", PI));
        assert_eq!(clean("(1+1)pi"), format!("(1+1)*{}", PI));
        assert_eq!(clean("PI"), PI.to_string());
    }

    #[test]
    fn signed_values() {
        assert!(value("-3").is_negative());
        assert_eq!(value("+3"), int(3));
    }
}
