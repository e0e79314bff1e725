// src/polynomial/field.rs
//
// Operations over the polynomial ring Z/pZ[x]. The prime is deliberately an
// ambient parameter rather than part of the polynomial: the same value may
// be reduced under different primes, so modulus is context, not identity.

use log::trace;

use crate::error::{AlgebraError, Result};
use crate::polynomial::polynomial::Polynomial;
use crate::polynomial::term::Term;

/// Long division of `num` by `den` mod `prime`, returning `(quotient,
/// remainder)`.
///
/// Both operands are reduced mod `prime` first. A degree drop in the
/// numerator under reduction means the leading coefficient is a multiple of
/// the prime, which makes the division ill-posed for this modulus.
pub fn divide(num: &Polynomial, den: &Polynomial, prime: i64) -> Result<(Polynomial, Polynomial)> {
    let mut f = num.modulo(prime);
    if f.degree() < num.degree() {
        return Err(AlgebraError::UnsuitablePrime(prime));
    }

    let g = den.modulo(prime);
    if g.is_zero() {
        return Err(AlgebraError::DivisionByZero);
    }

    let mut q = Polynomial::zero();
    let mut prev_degree = f.degree();
    while f.degree() >= g.degree() {
        let h = Polynomial::new(vec![f.leading().div(&g.leading(), prime)?]);
        f = (f - h.clone() * g.clone()).modulo(prime);
        q = (q + h).modulo(prime);
        // degree unchanged means no progress was made; stop rather than spin
        if prev_degree == f.degree() {
            break;
        }
        prev_degree = f.degree();
    }

    if !(num.clone() - (q.clone() * g + f.clone())).modulo(prime).is_zero() {
        return Err(AlgebraError::Internal("division identity num = q*g + r failed"));
    }

    trace!("divide: deg(num)={} deg(den)={} -> deg(q)={} deg(r)={}",
        num.degree(), den.degree(), q.degree(), f.degree());
    Ok((q, f))
}

pub fn quotient(num: &Polynomial, den: &Polynomial, prime: i64) -> Result<Polynomial> {
    Ok(divide(num, den, prime)?.0)
}

pub fn remainder(num: &Polynomial, den: &Polynomial, prime: i64) -> Result<Polynomial> {
    Ok(divide(num, den, prime)?.1)
}

/// Divides every coefficient by `n` mod `prime`.
pub fn div_scalar(p: &Polynomial, n: i64, prime: i64) -> Result<Polynomial> {
    let divisor = Term::new(n, 0);
    let terms = p
        .terms()
        .iter()
        .map(|t| t.div(&divisor, prime))
        .collect::<Result<Vec<Term>>>()?;
    Ok(Polynomial::new(terms))
}

/// Polynomial exponentiation by squaring, coefficients reduced mod `prime`
/// at every step. The exponent must be non-negative.
pub fn pow_mod(p: &Polynomial, exp: i64, prime: i64) -> Result<Polynomial> {
    if exp < 0 {
        return Err(AlgebraError::NegativeExponent(exp));
    }

    let mut result = Polynomial::one();
    let mut base = p.clone();
    let mut exp = exp;
    while exp > 0 {
        if exp % 2 == 1 {
            result = (base.clone() * result).modulo(prime);
        }
        exp >>= 1;
        base = (base.clone() * base).modulo(prime);
    }

    Ok(result)
}

/// Extended Euclid over Z/pZ[x]: returns `(g, s, t)` with
/// `g = s*a + t*b (mod prime)`, following the same Bezout recurrence as the
/// scalar version but with polynomial quotient and remainder.
pub fn extended_gcd(
    a: &Polynomial,
    b: &Polynomial,
    prime: i64,
) -> Result<(Polynomial, Polynomial, Polynomial)> {
    let (mut old_r, mut r) = (a.modulo(prime), b.modulo(prime));
    let (mut old_s, mut s) = (Polynomial::one(), Polynomial::zero());
    let (mut old_t, mut t) = (Polynomial::zero(), Polynomial::one());

    while !r.modulo(prime).is_zero() {
        let q = quotient(&old_r, &r, prime)?;
        (old_r, r) = (r.clone(), (old_r - q.clone() * r).modulo(prime));
        (old_s, s) = (s.clone(), (old_s - q.clone() * s).modulo(prime));
        (old_t, t) = (t.clone(), (old_t - q * t).modulo(prime));
    }

    Ok((old_r, old_s, old_t))
}

pub fn gcd(a: &Polynomial, b: &Polynomial, prime: i64) -> Result<Polynomial> {
    Ok(extended_gcd(a, b, prime)?.0)
}
