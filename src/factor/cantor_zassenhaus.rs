// src/factor/cantor_zassenhaus.rs
//
// Cantor-Zassenhaus factorization over Z/pZ[x]: squarefree separation,
// distinct-degree factorization, then randomized equal-degree splitting.
// The splitting stage is Las Vegas: a trivial split is retried only through
// the recursion, so termination is almost sure for odd primes but carries
// no explicit retry cap.

use log::debug;
use rand::Rng;

use crate::error::Result;
use crate::integer_math::modular;
use crate::polynomial::field;
use crate::polynomial::polynomial::Polynomial;
use crate::polynomial::random::{random_polynomial, RandomPolyConfig};

/// An irreducible factor together with its multiplicity in the input.
pub type FactorList = Vec<(Polynomial, usize)>;

/// Factors `f` over Z/pZ for an odd prime `p`.
///
/// The result multiset reconstructs `f mod p` under `expand_factorization`;
/// the final entry is a constant pseudo-factor preserving the unit lost
/// during monic normalization. The caller must choose a prime for which the
/// leading coefficient of `f` is invertible.
pub fn cantor_zassenhaus<R: Rng + ?Sized>(
    f: &Polynomial,
    prime: i64,
    rng: &mut R,
) -> Result<FactorList> {
    let f_mod_p = f.modulo(prime);
    if f_mod_p.degree() <= 1 {
        return Ok(vec![(f_mod_p, 1)]);
    }

    // squarefree separation: the derivative shares factors with f exactly
    // where f has repeated roots
    let ff = f_mod_p.primitive_part(prime)?;
    let square_poly = field::gcd(f, &ff.derivative(), prime)?;
    let ff = field::quotient(&ff, &square_poly, prime)?;
    let ff = field::div_scalar(&ff, ff.leading().coeff(), prime)?;
    debug!("squarefree part: {} (deg {})", ff, ff.degree());

    let dds = distinct_degree_factor(&ff, prime)?;

    let mut factors: FactorList = Vec::new();
    for (i, dd) in dds.iter().enumerate() {
        let d = i + 1;
        for part in equal_degree_split(dd, d, prime, rng)? {
            let monic = field::div_scalar(&part, part.leading().coeff(), prime)?;
            let count = multiplicity(&f_mod_p, &monic, prime)?;
            debug!("irreducible factor {} with multiplicity {}", monic, count);
            factors.push((monic, count));
        }
    }

    factors.push((Polynomial::constant(f_mod_p.leading().coeff()), 1));
    Ok(factors)
}

/// Multiplies `factor^multiplicity` over all entries and reduces mod
/// `prime`; the inverse of `cantor_zassenhaus` up to that reduction.
pub fn expand_factorization(factors: &[(Polynomial, usize)], prime: i64) -> Polynomial {
    factors
        .iter()
        .fold(Polynomial::one(), |acc, (p, m)| acc * p.pow(*m))
        .modulo(prime)
}

/// Multiplicity of `g` in `f` mod `prime` by recursive trial division.
pub fn multiplicity(f: &Polynomial, g: &Polynomial, prime: i64) -> Result<usize> {
    if field::gcd(f, g, prime)?.degree() == 0 {
        return Ok(0);
    }
    Ok(1 + multiplicity(&field::quotient(f, g, prime)?, g, prime)?)
}

/// Distinct-degree factorization of a squarefree monic `f`.
///
/// Entry `i` (1-based) is the product of all irreducible factors of degree
/// `i`. When the candidate-degree loop exhausts without reducing `f` to the
/// constant 1, the remainder is appended as a single irreducible factor of
/// full remaining degree.
pub fn distinct_degree_factor(f: &Polynomial, prime: i64) -> Result<Vec<Polynomial>> {
    let mut w = Polynomial::x();
    let mut f = f.clone();
    let n = f.degree();

    let mut g: Vec<Polynomial> = Vec::with_capacity(n);
    for _ in 0..n {
        let wp = field::pow_mod(&w, prime, prime)?;
        w = field::remainder(&wp, &f, prime)?;
        let gi = field::gcd(&(w.clone() - Polynomial::x()), &f, prime)?;
        f = field::quotient(&f, &gi, prime)?;
        g.push(gi);
    }

    if !f.is_one() {
        g.push(f);
    }
    Ok(g)
}

/// Splits a product `f` of degree-`d` irreducibles into the individual
/// factors.
///
/// A random monic candidate `w` of degree `d` is raised to `(p^d - 1) / 2`;
/// elements of the degree-d extension field fall into quadratic-residue
/// classes under this map, so `gcd(w^e - 1, f)` is a nontrivial divisor
/// with overwhelming probability for odd `p`. A trivial draw simply recurses
/// on the unsplit remainder with fresh randomness.
pub fn equal_degree_split<R: Rng + ?Sized>(
    f: &Polynomial,
    d: usize,
    prime: i64,
    rng: &mut R,
) -> Result<Vec<Polynomial>> {
    let f = f.modulo(prime);
    if f.degree() == d {
        return Ok(vec![f]);
    }
    if f.degree() == 0 {
        return Ok(vec![]);
    }

    let config = RandomPolyConfig {
        degree: Some(d),
        monic: true,
        ..RandomPolyConfig::default()
    };
    let w = random_polynomial(&config, rng).modulo(prime);

    let exp = (modular::pow(prime, d as i64)? - 1) / 2;
    let g = field::gcd(
        &(field::pow_mod(&w, exp, prime)? - Polynomial::one()),
        &f,
        prime,
    )?;
    let cofactor = field::quotient(&f, &g, prime)?;

    let mut parts = equal_degree_split(&g, d, prime, rng)?;
    parts.extend(equal_degree_split(&cofactor, d, prime, rng)?);
    Ok(parts)
}
