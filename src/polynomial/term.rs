// src/polynomial/term.rs

use std::fmt::{Display, Formatter};
use std::ops::{Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};
use crate::integer_math::modular;

/// A single monomial `coeff * x^degree`.
///
/// Canonical form: a zero coefficient forces the degree to 0, so there is
/// exactly one representation of the zero monomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    coeff: i64,
    degree: usize,
}

impl Term {
    pub fn new(coeff: i64, degree: usize) -> Self {
        Term {
            coeff,
            degree: if coeff != 0 { degree } else { 0 },
        }
    }

    /// Constructor for degrees coming from unvalidated input.
    pub fn checked(coeff: i64, degree: i64) -> Result<Self> {
        if degree < 0 {
            return Err(AlgebraError::NegativeDegree(degree));
        }
        Ok(Term::new(coeff, degree as usize))
    }

    pub fn zero() -> Self {
        Term::new(0, 0)
    }

    pub fn one() -> Self {
        Term::new(1, 0)
    }

    pub fn coeff(&self) -> i64 {
        self.coeff
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.coeff == 0
    }

    /// Adds two terms of equal degree.
    pub fn add(&self, other: &Term) -> Result<Term> {
        if self.degree != other.degree {
            return Err(AlgebraError::DegreeMismatch(self.degree, other.degree));
        }
        Ok(Term::new(self.coeff + other.coeff, self.degree))
    }

    pub fn sub(&self, other: &Term) -> Result<Term> {
        self.add(&-*other)
    }

    /// Term division is only meaningful once a prime is supplied: the
    /// coefficient quotient is `coeff * inverse(other.coeff) mod prime`.
    pub fn div(&self, other: &Term, prime: i64) -> Result<Term> {
        if self.degree < other.degree {
            return Err(AlgebraError::TermDivisionDegree(self.degree, other.degree));
        }
        let coeff = modular::mod_floor(
            self.coeff * modular::inverse_mod(other.coeff, prime)?,
            prime,
        );
        Ok(Term::new(coeff, self.degree - other.degree))
    }

    pub fn div_scalar(&self, n: i64, prime: i64) -> Result<Term> {
        self.div(&Term::new(n, 0), prime)
    }

    /// Reduces the coefficient into `[0, m)`.
    pub fn modulo(&self, m: i64) -> Term {
        Term::new(modular::mod_floor(self.coeff, m), self.degree)
    }

    /// The degree floor matches the canonical zero: the derivative of a
    /// constant is the zero monomial, not a degree `-1` artifact.
    pub fn derivative(&self) -> Term {
        Term::new(self.coeff * self.degree as i64, self.degree.saturating_sub(1))
    }

    pub fn evaluate(&self, x: i64) -> i64 {
        self.coeff * modular::pow_u(x, self.degree as u64)
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(-self.coeff, self.degree)
    }
}

impl Mul for Term {
    type Output = Term;

    fn mul(self, other: Term) -> Term {
        Term::new(self.coeff * other.coeff, self.degree + other.degree)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.degree == 0 {
            return write!(f, "{}", self.coeff);
        }
        if self.coeff != 1 {
            write!(f, "{}*", self.coeff)?;
        }
        write!(f, "x")?;
        if self.degree != 1 {
            write!(f, "^{}", self.degree)?;
        }
        Ok(())
    }
}
