//! Sums of monomials in one variable, kept in canonical form.
//!
//! Every polynomial is built from text (or rendered to text and re-read), so
//! the canonical text is the single source of truth for equality and display.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::Zero;
use tracing::trace;

use crate::monomial::{Monomial, Sign};
use crate::numeric::Rational;
use crate::operand::Operand;

#[derive(Clone, Debug)]
pub struct Polynomial {
    buckets: BTreeMap<i32, Vec<Monomial>>,
    terms: Vec<Monomial>,
    text: String,
    max_degree: u32,
}

impl Polynomial {
    pub fn zero() -> Self {
        Polynomial {
            buckets: BTreeMap::new(),
            terms: Vec::new(),
            text: "0".to_string(),
            max_degree: 0,
        }
    }

    pub fn one() -> Self {
        Polynomial::from(Monomial::from(1i64))
    }

    /// Parse an additive chain of terms such as `3x^2 + 4x + 10 - 5`.
    pub fn parse(input: &str) -> Self {
        let data: String = input
            .replace("**", "^")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if is_zero_text(&data) {
            return Polynomial::zero();
        }

        let mut buckets: BTreeMap<i32, Vec<Monomial>> = BTreeMap::new();
        for token in split_terms(&data) {
            if matches!(token, "" | "0" | "+0" | "-0") {
                continue;
            }
            let term = Monomial::parse(token);
            trace!(token, term = %term, "polynomial term");
            buckets.entry(term.degree()).or_default().push(term);
        }
        Polynomial::assemble(buckets)
    }

    /// Build from a degree to term-list mapping. The mapping is rendered and
    /// read back so the result is indistinguishable from parsing its text.
    pub fn from_buckets(buckets: BTreeMap<i32, Vec<Monomial>>) -> Self {
        let rendered = Polynomial::assemble(buckets);
        Polynomial::parse(&rendered.text)
    }

    // Folds each bucket and renders the canonical text.
    fn assemble(mut buckets: BTreeMap<i32, Vec<Monomial>>) -> Self {
        let mut degrees: Vec<i32> = buckets.keys().copied().collect();
        degrees.sort_by(|a, b| {
            b.unsigned_abs()
                .cmp(&a.unsigned_abs())
                .then_with(|| b.cmp(a))
        });

        let mut terms = Vec::with_capacity(degrees.len());
        let mut text = String::new();
        let mut max_degree = 0;
        for degree in degrees {
            let total: Rational = buckets[&degree]
                .iter()
                .map(Monomial::signed_coefficient)
                .fold(Rational::zero(), |acc, c| acc + c);
            let folded = Monomial::new(total, degree);
            if folded.is_zero() {
                continue;
            }
            match (text.is_empty(), folded.sign()) {
                (true, Sign::Plus) => {}
                (true, Sign::Minus) => text.push('-'),
                (false, Sign::Plus) => text.push_str(" + "),
                (false, Sign::Minus) => text.push_str(" - "),
            }
            text.push_str(folded.body());
            max_degree = max_degree.max(degree.unsigned_abs());
            terms.push(folded);
        }
        if terms.is_empty() {
            buckets.clear();
            text.push('0');
        }

        Polynomial {
            buckets,
            terms,
            text,
            max_degree,
        }
    }

    pub fn canonical_text(&self) -> &str {
        &self.text
    }

    /// Canonical text with an explicit leading sign, ready for concatenation.
    fn signed_text(&self) -> String {
        if self.text.starts_with('-') {
            self.text.clone()
        } else {
            format!("+{}", self.text)
        }
    }

    /// Highest absolute degree carrying a nonzero term; 0 for the zero polynomial.
    pub fn max_degree(&self) -> u32 {
        self.max_degree
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Folded nonzero terms in rendering order.
    pub fn terms(&self) -> std::slice::Iter<'_, Monomial> {
        self.terms.iter()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Terms as parsed, grouped by degree and not yet folded.
    pub fn buckets(&self) -> &BTreeMap<i32, Vec<Monomial>> {
        &self.buckets
    }

    pub fn term(&self, degree: i32) -> Option<&Monomial> {
        self.terms.iter().find(|t| t.degree() == degree)
    }

    pub fn has_term(&self, degree: i32) -> bool {
        self.term(degree).is_some()
    }

    /// Signed folded coefficient at `degree`, zero when absent.
    pub fn coefficient(&self, degree: i32) -> Rational {
        self.term(degree)
            .map(Monomial::signed_coefficient)
            .unwrap_or_else(Rational::zero)
    }

    pub fn has_negative_degrees(&self) -> bool {
        self.terms.iter().any(|t| t.degree() < 0)
    }

    pub fn plus(&self, rhs: impl Into<Operand>) -> Polynomial {
        self + &rhs.into().into_polynomial()
    }

    pub fn minus(&self, rhs: impl Into<Operand>) -> Polynomial {
        self - &rhs.into().into_polynomial()
    }

    pub fn pow(&self, exp: u32) -> Polynomial {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            n /= 2;
        }
        result
    }
}

fn is_zero_text(data: &str) -> bool {
    let digits = data.strip_prefix(&['+', '-'][..]).unwrap_or(data);
    digits.chars().all(|c| c == '0')
}

/// Split before every top-level `+`/`-`. Signs right after `^`, `*`, `/`, `(`
/// or another sign belong to the following operand and are not split points.
fn split_terms(data: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut prev: Option<char> = None;
    for (i, c) in data.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '-' if depth == 0 && i > 0 => {
                if !matches!(prev, Some('^' | '*' | '/' | '(' | '+' | '-')) {
                    tokens.push(&data[start..i]);
                    start = i;
                }
            }
            _ => {}
        }
        prev = Some(c);
    }
    tokens.push(&data[start..]);
    tokens
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl From<i64> for Polynomial {
    fn from(value: i64) -> Self {
        Polynomial::from(Monomial::from(value))
    }
}

impl From<Monomial> for Polynomial {
    fn from(term: Monomial) -> Self {
        std::iter::once(term).collect()
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        let mut buckets: BTreeMap<i32, Vec<Monomial>> = BTreeMap::new();
        for term in iter {
            buckets.entry(term.degree()).or_default().push(term);
        }
        Polynomial::from_buckets(buckets)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Monomial;
    type IntoIter = std::slice::Iter<'a, Monomial>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Polynomial) -> bool {
        self.text == other.text
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl std::ops::Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::parse(&format!("{}{}", self.signed_text(), rhs.signed_text()))
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.terms.iter().map(|t| -t).collect()
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -&self
    }
}

impl std::ops::Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl std::ops::Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.terms
            .iter()
            .flat_map(|a| rhs.terms.iter().map(move |b| a * b))
            .collect()
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}
