// Lexer and parser: grammar coverage, rewrite passes, error cases.

use polyfactor::error::AlgebraError;
use polyfactor::parser::parse;
use polyfactor::polynomial::polynomial::Polynomial;
use polyfactor::polynomial::term::Term;

fn poly(terms: &[(i64, usize)]) -> Polynomial {
    Polynomial::new(terms.iter().map(|&(c, d)| Term::new(c, d)).collect())
}

#[test]
fn parses_simple_sum() {
    assert_eq!(parse("x^2 - 1").unwrap(), poly(&[(1, 2), (-1, 0)]));
    assert_eq!(parse("3*x + 2").unwrap(), poly(&[(3, 1), (2, 0)]));
}

#[test]
fn parses_single_atoms() {
    assert_eq!(parse("x").unwrap(), poly(&[(1, 1)]));
    assert_eq!(parse("42").unwrap(), poly(&[(42, 0)]));
    assert_eq!(parse("-x").unwrap(), poly(&[(-1, 1)]));
}

#[test]
fn distributes_products_over_sums() {
    assert_eq!(parse("(x + 1) * (x - 1)").unwrap(), poly(&[(1, 2), (-1, 0)]));
    assert_eq!(
        parse("(x + 2) * (x + 3)").unwrap(),
        poly(&[(1, 2), (5, 1), (6, 0)])
    );
}

#[test]
fn expands_exponents_of_compound_bases() {
    assert_eq!(
        parse("(x + 1)^2").unwrap(),
        poly(&[(1, 2), (2, 1), (1, 0)])
    );
    assert_eq!(parse("x^3").unwrap(), poly(&[(1, 3)]));
    assert_eq!(parse("x^0").unwrap(), poly(&[(1, 0)]));
}

#[test]
fn folds_constants() {
    assert_eq!(parse("2*3 + x").unwrap(), poly(&[(1, 1), (6, 0)]));
    assert_eq!(parse("2^3").unwrap(), poly(&[(8, 0)]));
    assert_eq!(parse("1 + 2 + 3").unwrap(), poly(&[(6, 0)]));
}

#[test]
fn unary_minus_and_subtraction_chains() {
    assert_eq!(parse("-3*x^2 + x - 7").unwrap(), poly(&[(-3, 2), (1, 1), (-7, 0)]));
    assert_eq!(parse("x - x").unwrap(), Polynomial::zero());
    assert_eq!(parse("-(x + 1)").unwrap(), poly(&[(-1, 1), (-1, 0)]));
}

#[test]
fn combines_like_terms() {
    assert_eq!(parse("x*x + x*x").unwrap(), poly(&[(2, 2)]));
    assert_eq!(parse("x + x + 1").unwrap(), poly(&[(2, 1), (1, 0)]));
}

#[test]
fn rejects_invalid_characters() {
    assert!(matches!(parse("x $ 1"), Err(AlgebraError::Parse(_))));
}

#[test]
fn rejects_adjacent_operators_and_operands() {
    assert!(matches!(parse("x + * 1"), Err(AlgebraError::Parse(_))));
    assert!(matches!(parse("2 2"), Err(AlgebraError::Parse(_))));
    assert!(matches!(parse("x y"), Err(AlgebraError::Parse(_))));
}

#[test]
fn rejects_unbalanced_parens() {
    assert!(matches!(parse("(x + 1"), Err(AlgebraError::Parse(_))));
    assert!(matches!(parse("x + 1)"), Err(AlgebraError::Parse(_))));
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(parse(""), Err(AlgebraError::Parse(_))));
}

#[test]
fn rejects_unsupported_division() {
    assert!(matches!(parse("x / 2"), Err(AlgebraError::Parse(_))));
}

#[test]
fn rejects_mixed_variables() {
    assert!(matches!(parse("x + y"), Err(AlgebraError::Parse(_))));
}

#[test]
fn negative_exponent_is_an_arithmetic_error() {
    assert_eq!(parse("x^-2"), Err(AlgebraError::NegativeExponent(-2)));
}
