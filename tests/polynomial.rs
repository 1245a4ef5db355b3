use std::collections::BTreeMap;

use num_bigint::BigInt;
use polycalc::{Monomial, Polynomial, Rational};

fn poly(input: &str) -> Polynomial {
    Polynomial::parse(input)
}

fn int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

#[test]
fn like_terms_collapse() {
    assert_eq!(poly("3x^2 + 4x + 10 - 5").canonical_text(), "3x^2 + 4x + 5");
    assert_eq!(poly("x + x + x").canonical_text(), "3x");
    assert_eq!(poly("0.5x + 0.25x").canonical_text(), "0.75x");
}

#[test]
fn degrees_render_descending() {
    assert_eq!(poly("1 + x + x^2").canonical_text(), "x^2 + x + 1");
    assert_eq!(poly("-4 + 2x^3").canonical_text(), "2x^3 - 4");
    assert_eq!(poly("-x^2 + 3x - 2").canonical_text(), "-x^2 + 3x - 2");
}

#[test]
fn positive_degree_precedes_its_negative() {
    let p = poly("1 + x^-2 + x^2");
    assert_eq!(p.canonical_text(), "x^2 + x^-2 + 1");
    assert_eq!(p.max_degree(), 2);
    assert!(p.has_negative_degrees());
}

#[test]
fn zero_polynomial() {
    for input in ["", "0", "000", "x - x", "3 - 3"] {
        let p = poly(input);
        assert!(p.is_zero(), "{input}");
        assert_eq!(p.canonical_text(), "0");
        assert_eq!(p.max_degree(), 0);
        assert_eq!(p.terms().count(), 0);
    }
}

#[test]
fn folded_zero_has_an_empty_degree_map() {
    assert!(poly("x - x").buckets().is_empty());
    assert!(poly("2x^2 + 1 - 2x^2 - 1").buckets().is_empty());
    assert!(!poly("x + 1 - 1").buckets().is_empty());
}

#[test]
fn high_degree_powers_do_not_overflow() {
    assert_eq!(poly("x^2000000000").pow(2).max_degree(), i32::MAX as u32);
}

#[test]
fn canonical_text_round_trips() {
    for input in ["3x^2 + 4x + 10 - 5", "-x^3 + 0.5x", "7", "x^2 + x^-1", "-2x"] {
        let p = poly(input);
        assert_eq!(poly(p.canonical_text()), p, "{input}");
    }
}

#[test]
fn equality_ignores_input_order() {
    assert_eq!(poly("2x + 1"), poly("1 + 2x"));
    assert_ne!(poly("2x + 1"), poly("2x - 1"));
}

#[test]
fn iteration_follows_rendering_order() {
    let p = poly("5 - 4x + 3x^2 + 0x^7");
    let texts: Vec<&str> = p.terms().map(Monomial::canonical_text).collect();
    assert_eq!(texts, vec!["+3x^2", "-4x", "+5"]);
    assert_eq!((&p).into_iter().count(), 3);
}

#[test]
fn coefficient_lookup() {
    let p = poly("3x^2 - 4x");
    assert_eq!(p.coefficient(2), int(3));
    assert_eq!(p.coefficient(1), int(-4));
    assert_eq!(p.coefficient(0), int(0));
    assert!(p.has_term(1));
    assert!(!p.has_term(0));
    assert_eq!(p.term(2), Some(&Monomial::parse("3x^2")));
}

#[test]
fn addition_and_subtraction() {
    assert_eq!(poly("x^2 + 1") + poly("2x - 1"), poly("x^2 + 2x"));
    assert_eq!(poly("x^2 + 2x") - poly("x^2"), poly("2x"));
    assert_eq!(poly("x + 1") - poly("-x - 1"), poly("2x + 2"));
    assert!((poly("x^2 - x") - poly("x^2 - x")).is_zero());
}

#[test]
fn operands_are_canonicalized() {
    let p = poly("3x");
    assert_eq!(p.plus(5_i64), poly("3x + 5"));
    assert_eq!(p.plus("x^2"), poly("x^2 + 3x"));
    assert_eq!(p.minus(Monomial::parse("x")), poly("2x"));
    assert_eq!(p.minus(&poly("3x - 1")), poly("1"));
}

#[test]
fn multiplication_and_powers() {
    assert_eq!(poly("x + 1") * poly("x - 1"), poly("x^2 - 1"));
    assert_eq!(poly("2x") * poly("x^2 + 3"), poly("2x^3 + 6x"));
    assert_eq!(poly("x + 1").pow(2), poly("x^2 + 2x + 1"));
    assert_eq!(poly("x - 2").pow(3), poly("x^3 - 6x^2 + 12x - 8"));
    assert_eq!(poly("x + 5").pow(0), Polynomial::one());
}

#[test]
fn negation() {
    assert_eq!(-poly("x^2 - 3x + 2"), poly("-x^2 + 3x - 2"));
    assert!((-Polynomial::zero()).is_zero());
}

#[test]
fn buckets_match_parsed_text() {
    let mut buckets = BTreeMap::new();
    buckets.insert(2, vec![Monomial::parse("3x^2")]);
    buckets.insert(0, vec![Monomial::parse("10"), Monomial::parse("-5")]);
    let built = Polynomial::from_buckets(buckets);
    assert_eq!(built, poly("3x^2 + 10 - 5"));
    assert_eq!(built.canonical_text(), "3x^2 + 5");

    let collected: Polynomial = vec![Monomial::parse("x"), Monomial::parse("x^2")]
        .into_iter()
        .collect();
    assert_eq!(collected, poly("x^2 + x"));
}

#[test]
fn parenthesized_and_product_coefficients() {
    assert_eq!(poly("(1+2)x + 2*3").canonical_text(), "3x + 6");
    assert_eq!(poly("2 * -3 + x").canonical_text(), "x - 6");
}
