// Term and Polynomial invariants, arithmetic, and the mod-p ring operations.

use polyfactor::error::AlgebraError;
use polyfactor::polynomial::field;
use polyfactor::polynomial::polynomial::Polynomial;
use polyfactor::polynomial::term::Term;

fn poly(terms: &[(i64, usize)]) -> Polynomial {
    Polynomial::new(terms.iter().map(|&(c, d)| Term::new(c, d)).collect())
}

#[test]
fn zero_coefficient_forces_degree_zero() {
    let t = Term::new(0, 7);
    assert!(t.is_zero());
    assert_eq!(t.degree(), 0);
}

#[test]
fn checked_rejects_negative_degree() {
    assert_eq!(Term::checked(3, -1), Err(AlgebraError::NegativeDegree(-1)));
    assert_eq!(Term::checked(3, 2).unwrap(), Term::new(3, 2));
}

#[test]
fn term_addition_requires_equal_degree() {
    assert_eq!(
        Term::new(1, 2).add(&Term::new(2, 3)),
        Err(AlgebraError::DegreeMismatch(2, 3))
    );
    assert_eq!(
        Term::new(1, 2).add(&Term::new(2, 2)).unwrap(),
        Term::new(3, 2)
    );
}

#[test]
fn term_multiplication_adds_degrees() {
    assert_eq!(Term::new(2, 3) * Term::new(5, 4), Term::new(10, 7));
}

#[test]
fn term_division_needs_a_prime() {
    // 6x^3 / 2x  ->  3x^2 under any prime where 2 is invertible
    let q = Term::new(6, 3).div(&Term::new(2, 1), 7).unwrap();
    assert_eq!(q, Term::new(3, 2));

    assert_eq!(
        Term::new(1, 1).div(&Term::new(1, 2), 7),
        Err(AlgebraError::TermDivisionDegree(1, 2))
    );
}

#[test]
fn term_derivative_floors_degree() {
    assert_eq!(Term::new(3, 4).derivative(), Term::new(12, 3));
    assert_eq!(Term::new(5, 0).derivative(), Term::zero());
}

#[test]
fn term_evaluate() {
    assert_eq!(Term::new(3, 2).evaluate(4), 48);
    assert_eq!(Term::new(-2, 1).evaluate(5), -10);
}

#[test]
fn polynomial_canonical_form() {
    // out of order, duplicate degree, explicit zero
    let p = poly(&[(1, 1), (2, 3), (3, 1), (0, 5)]);
    assert_eq!(p.terms(), &[Term::new(2, 3), Term::new(4, 1)]);
    assert_eq!(p.degree(), 3);
    assert_eq!(p.leading(), Term::new(2, 3));
}

#[test]
fn zero_polynomial_is_distinct_from_one() {
    let zero = Polynomial::zero();
    let one = Polynomial::one();
    assert!(zero.is_zero());
    assert_eq!(zero.degree(), 0);
    assert_ne!(zero, one);
    assert_eq!(zero.terms().len(), 1);
}

#[test]
fn addition_merges_and_cancels() {
    let p = poly(&[(1, 2), (2, 0)]);
    let q = poly(&[(-1, 2), (3, 1)]);
    assert_eq!(p + q, poly(&[(3, 1), (2, 0)]));
}

#[test]
fn multiplication_distributes() {
    // (x + 1)(x + 4) = x^2 + 5x + 4
    let p = poly(&[(1, 1), (1, 0)]);
    let q = poly(&[(1, 1), (4, 0)]);
    assert_eq!(p * q, poly(&[(1, 2), (5, 1), (4, 0)]));
}

#[test]
fn modulo_maps_coefficients() {
    let p = poly(&[(1, 2), (-1, 0)]);
    assert_eq!(p.modulo(5), poly(&[(1, 2), (4, 0)]));

    // x^2 + 5x + 10 mod 5 drops the middle term
    let q = poly(&[(1, 2), (5, 1), (10, 0)]);
    assert_eq!(q.modulo(5), poly(&[(1, 2)]));
}

#[test]
fn derivative_and_content() {
    let p = poly(&[(6, 3), (9, 1), (12, 0)]);
    assert_eq!(p.derivative(), poly(&[(18, 2), (9, 0)]));
    assert_eq!(p.content(), 3);
}

#[test]
fn primitive_part_divides_content() {
    let p = poly(&[(6, 2), (9, 0)]);
    // content 3: 2x^2 + 3 mod 7
    assert_eq!(p.primitive_part(7).unwrap(), poly(&[(2, 2), (3, 0)]));
}

#[test]
fn evaluation_sums_terms() {
    let p = poly(&[(1, 2), (-1, 0)]);
    assert_eq!(p.evaluate(3), 8);
    assert_eq!(p.evaluate(-1), 0);
}

#[test]
fn division_identity_holds() {
    // (x^3 + 2x + 3) / (x + 1) over Z/7Z
    let num = poly(&[(1, 3), (2, 1), (3, 0)]);
    let den = poly(&[(1, 1), (1, 0)]);
    let (q, r) = field::divide(&num, &den, 7).unwrap();
    assert!(r.is_zero() || r.degree() < den.degree());
    let recombined = (q * den + r).modulo(7);
    assert_eq!(recombined, num.modulo(7));
}

#[test]
fn division_by_zero_polynomial_fails() {
    let num = poly(&[(1, 2)]);
    assert_eq!(
        field::divide(&num, &Polynomial::zero(), 7),
        Err(AlgebraError::DivisionByZero)
    );
}

#[test]
fn division_detects_unsuitable_prime() {
    // leading coefficient 5 vanishes mod 5
    let num = poly(&[(5, 2), (1, 0)]);
    let den = poly(&[(1, 1)]);
    assert_eq!(
        field::divide(&num, &den, 5),
        Err(AlgebraError::UnsuitablePrime(5))
    );
}

#[test]
fn remainder_of_lower_degree_is_identity() {
    let num = poly(&[(2, 1), (1, 0)]);
    let den = poly(&[(1, 3)]);
    let (q, r) = field::divide(&num, &den, 7).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, num.modulo(7));
}

#[test]
fn div_scalar_uses_modular_inverse() {
    let p = poly(&[(4, 2), (2, 0)]);
    // dividing by 2 mod 5 multiplies by 3
    assert_eq!(field::div_scalar(&p, 2, 5).unwrap(), poly(&[(2, 2), (1, 0)]));
    assert_eq!(
        field::div_scalar(&p, 5, 5),
        Err(AlgebraError::NotInvertible(5, 5))
    );
}

#[test]
fn pow_mod_by_squaring() {
    // (x + 1)^2 mod 5 = x^2 + 2x + 1
    let p = poly(&[(1, 1), (1, 0)]);
    assert_eq!(
        field::pow_mod(&p, 2, 5).unwrap(),
        poly(&[(1, 2), (2, 1), (1, 0)])
    );
    assert_eq!(field::pow_mod(&p, 0, 5).unwrap(), Polynomial::one());
    assert_eq!(
        field::pow_mod(&p, -1, 5),
        Err(AlgebraError::NegativeExponent(-1))
    );
}

#[test]
fn extended_gcd_bezout_over_the_ring() {
    let a = poly(&[(1, 2), (-1, 0)]); // (x-1)(x+1)
    let b = poly(&[(1, 1), (1, 0)]); // x+1
    let prime = 7;
    let (g, s, t) = field::extended_gcd(&a, &b, prime).unwrap();

    // g is a scalar multiple of x+1
    assert_eq!(g.degree(), 1);
    let identity = (s * a.clone() + t * b.clone()).modulo(prime);
    assert_eq!(identity, g.modulo(prime));
}

#[test]
fn gcd_of_coprime_polynomials_is_constant() {
    let a = poly(&[(1, 1), (1, 0)]);
    let b = poly(&[(1, 1), (2, 0)]);
    let g = field::gcd(&a, &b, 7).unwrap();
    assert_eq!(g.degree(), 0);
    assert!(!g.is_zero());
}

#[test]
fn display_rendering() {
    let p = poly(&[(3, 2), (1, 1), (-4, 0)]);
    assert_eq!(p.to_string(), "3*x^2 + x + -4");
    assert_eq!(Polynomial::zero().to_string(), "0");
    assert_eq!(Polynomial::x().to_string(), "x");
}
