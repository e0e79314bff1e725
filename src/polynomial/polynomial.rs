// src/polynomial/polynomial.rs

use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::integer_math::modular;
use crate::polynomial::field;
use crate::polynomial::term::Term;

/// A univariate integer polynomial as an ordered sequence of terms,
/// strictly decreasing by degree, with at most one term per degree.
///
/// The zero polynomial is the singleton `[Term::zero()]`; it has degree 0
/// but is distinct from the constant polynomial 1. Every operation returns
/// a fresh value, so there are no aliasing concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Canonicalizes on construction: like terms combined, zeros dropped,
    /// terms sorted by decreasing degree.
    pub fn new(terms: Vec<Term>) -> Self {
        let mut terms: Vec<Term> = terms.into_iter().filter(|t| !t.is_zero()).collect();
        terms.sort_by(|a, b| b.degree().cmp(&a.degree()));

        let mut combined: Vec<Term> = Vec::with_capacity(terms.len());
        for term in terms {
            match combined.last_mut() {
                Some(last) if last.degree() == term.degree() => {
                    *last = Term::new(last.coeff() + term.coeff(), term.degree());
                }
                _ => combined.push(term),
            }
        }
        combined.retain(|t| !t.is_zero());

        if combined.is_empty() {
            combined.push(Term::zero());
        }
        Polynomial { terms: combined }
    }

    pub fn zero() -> Self {
        Polynomial::new(vec![])
    }

    pub fn one() -> Self {
        Polynomial::new(vec![Term::one()])
    }

    /// The identity polynomial `x`.
    pub fn x() -> Self {
        Polynomial::new(vec![Term::new(1, 1)])
    }

    pub fn constant(n: i64) -> Self {
        Polynomial::new(vec![Term::new(n, 0)])
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The highest-degree term.
    pub fn leading(&self) -> Term {
        self.terms.first().copied().unwrap_or_else(Term::zero)
    }

    pub fn degree(&self) -> usize {
        self.leading().degree()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms[0] == Term::one()
    }

    pub fn coeffs(&self) -> Vec<i64> {
        self.terms.iter().map(|t| t.coeff()).collect()
    }

    /// Merges one term into the sorted sequence, combining equal degrees
    /// and re-canonicalizing.
    pub fn add_term(&self, t: Term) -> Polynomial {
        if t.is_zero() {
            return self.clone();
        }
        let mut terms = self.terms.clone();
        terms.push(t);
        Polynomial::new(terms)
    }

    pub fn mul_term(&self, t: Term) -> Polynomial {
        if t.is_zero() {
            return Polynomial::zero();
        }
        Polynomial::new(self.terms.iter().map(|u| *u * t).collect())
    }

    /// Maps every coefficient through the floor modulus.
    pub fn modulo(&self, p: i64) -> Polynomial {
        Polynomial::new(self.terms.iter().map(|t| t.modulo(p)).collect())
    }

    pub fn derivative(&self) -> Polynomial {
        Polynomial::new(self.terms.iter().map(Term::derivative).collect())
    }

    pub fn evaluate(&self, x: i64) -> i64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }

    /// Integer GCD of all coefficients.
    pub fn content(&self) -> i64 {
        modular::gcd_all(&self.coeffs())
    }

    /// Divides out the content, then reduces mod `prime`.
    pub fn primitive_part(&self, prime: i64) -> Result<Polynomial> {
        field::div_scalar(self, self.content(), prime)
    }

    /// Plain repeated multiplication; exponents here are small multiplicities.
    pub fn pow(&self, n: usize) -> Polynomial {
        let mut result = Polynomial::one();
        for _ in 0..n {
            result = result * self.clone();
        }
        result
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        let mut result = self;
        for term in other.terms {
            result = result.add_term(term);
        }
        result
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::new(self.terms.into_iter().map(|t| -t).collect())
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        self + -other
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        let mut result = Polynomial::zero();
        for term in &self.terms {
            result = result + other.mul_term(*term);
        }
        result
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.terms.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
