// src/parser/ast.rs
//
// Closed expression tree for the input grammar, with each rewrite pass a
// single recursive function dispatching exhaustively over the variants.
// The passes run in order: expand_exponents, distribute, flatten,
// fold_constants; after that every node is a flat sum of flat products of
// numbers and identifiers, ready for conversion to a Polynomial.

use crate::error::{AlgebraError, Result};
use crate::integer_math::modular;
use crate::polynomial::polynomial::Polynomial;
use crate::polynomial::term::Term;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Identifier(String),
    Negative(Box<Expr>),
    Addition(Vec<Expr>),
    Multiplication(Vec<Expr>),
    Exponentiation(Box<Expr>, i64),
}

/// Rewrites `base^n` into an n-fold product of clones of the base.
pub fn expand_exponents(expr: Expr) -> Result<Expr> {
    Ok(match expr {
        Expr::Number(_) | Expr::Identifier(_) => expr,
        Expr::Negative(inner) => Expr::Negative(Box::new(expand_exponents(*inner)?)),
        Expr::Addition(children) => Expr::Addition(
            children.into_iter().map(expand_exponents).collect::<Result<Vec<_>>>()?,
        ),
        Expr::Multiplication(children) => Expr::Multiplication(
            children.into_iter().map(expand_exponents).collect::<Result<Vec<_>>>()?,
        ),
        Expr::Exponentiation(base, exp) => {
            if exp < 0 {
                return Err(AlgebraError::NegativeExponent(exp));
            }
            let base = expand_exponents(*base)?;
            Expr::Multiplication(vec![base; exp as usize])
        }
    })
}

/// Pushes products over sums until no Addition remains under a
/// Multiplication, and rewrites Negative into a `-1 *` product.
pub fn distribute(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Identifier(_) => expr,
        Expr::Negative(inner) => match *inner {
            Expr::Number(n) => Expr::Number(-n),
            other => distribute(Expr::Multiplication(vec![Expr::Number(-1), distribute(other)])),
        },
        Expr::Addition(children) => Expr::Addition(children.into_iter().map(distribute).collect()),
        Expr::Exponentiation(base, exp) => Expr::Exponentiation(Box::new(distribute(*base)), exp),
        Expr::Multiplication(children) => {
            let mut children: Vec<Expr> = children.into_iter().map(distribute).collect();
            while children.len() > 1 {
                let Some(idx) = children.iter().position(|c| matches!(c, Expr::Addition(_))) else {
                    return Expr::Multiplication(children);
                };
                let addition = children.remove(idx);
                let other = children.remove(0);
                let Expr::Addition(summands) = addition else { unreachable!() };

                let mut terms = Vec::with_capacity(summands.len());
                for summand in summands {
                    match distribute(Expr::Multiplication(vec![summand, other.clone()])) {
                        Expr::Addition(inner) => terms.extend(inner),
                        single => terms.push(single),
                    }
                }
                children.push(Expr::Addition(terms));
            }
            children.into_iter().next().unwrap_or(Expr::Number(1))
        }
    }
}

/// Splices nested Additions into their parent Addition and nested
/// Multiplications into their parent Multiplication.
pub fn flatten(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Identifier(_) => expr,
        Expr::Negative(inner) => Expr::Negative(Box::new(flatten(*inner))),
        Expr::Exponentiation(base, exp) => Expr::Exponentiation(Box::new(flatten(*base)), exp),
        Expr::Addition(children) => {
            let mut flat = Vec::with_capacity(children.len());
            for child in children.into_iter().map(flatten) {
                match child {
                    Expr::Addition(inner) => flat.extend(inner),
                    other => flat.push(other),
                }
            }
            Expr::Addition(flat)
        }
        Expr::Multiplication(children) => {
            let mut flat = Vec::with_capacity(children.len());
            for child in children.into_iter().map(flatten) {
                match child {
                    Expr::Multiplication(inner) => flat.extend(inner),
                    other => flat.push(other),
                }
            }
            Expr::Multiplication(flat)
        }
    }
}

/// Folds numeric children: sums inside Additions, products inside
/// Multiplications, and constant bases under Exponentiation.
pub fn fold_constants(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Identifier(_) => expr,
        Expr::Negative(inner) => Expr::Negative(Box::new(fold_constants(*inner))),
        Expr::Exponentiation(base, exp) => match fold_constants(*base) {
            Expr::Number(n) if exp >= 0 => Expr::Number(modular::pow_u(n, exp as u64)),
            base => Expr::Exponentiation(Box::new(base), exp),
        },
        Expr::Addition(children) => {
            let mut sum = 0i64;
            let mut rest = Vec::new();
            for child in children.into_iter().map(fold_constants) {
                match child {
                    Expr::Number(n) => sum += n,
                    other => rest.push(other),
                }
            }
            if rest.is_empty() {
                return Expr::Number(sum);
            }
            if sum != 0 {
                rest.push(Expr::Number(sum));
            }
            Expr::Addition(rest)
        }
        Expr::Multiplication(children) => {
            let mut product = 1i64;
            let mut rest = Vec::new();
            for child in children.into_iter().map(fold_constants) {
                match child {
                    Expr::Number(n) => product *= n,
                    other => rest.push(other),
                }
            }
            if rest.is_empty() {
                return Expr::Number(product);
            }
            if product != 1 {
                rest.push(Expr::Number(product));
            }
            Expr::Multiplication(rest)
        }
    }
}

/// Converts a fully rewritten tree into a Polynomial. Exactly one variable
/// symbol may appear across the whole expression.
pub fn to_polynomial(expr: Expr) -> Result<Polynomial> {
    let expr = fold_constants(flatten(distribute(expand_exponents(expr)?)));

    let summands = match expr {
        Expr::Addition(children) => children,
        other => vec![other],
    };

    let mut variable: Option<String> = None;
    let mut poly = Polynomial::zero();
    for node in summands {
        let term = match node {
            Expr::Number(n) => Term::new(n, 0),
            Expr::Identifier(name) => {
                check_variable(&mut variable, &name)?;
                Term::new(1, 1)
            }
            Expr::Multiplication(factors) => {
                let mut coeff = 1i64;
                let mut degree = 0usize;
                for factor in factors {
                    match factor {
                        Expr::Number(n) => coeff *= n,
                        Expr::Identifier(name) => {
                            check_variable(&mut variable, &name)?;
                            degree += 1;
                        }
                        other => {
                            return Err(AlgebraError::Parse(format!(
                                "cannot convert expression node {:?} to a term",
                                other
                            )))
                        }
                    }
                }
                Term::new(coeff, degree)
            }
            other => {
                return Err(AlgebraError::Parse(format!(
                    "cannot convert expression node {:?} to a term",
                    other
                )))
            }
        };
        poly = poly.add_term(term);
    }

    Ok(poly)
}

fn check_variable(variable: &mut Option<String>, name: &str) -> Result<()> {
    match variable {
        Some(existing) if existing != name => Err(AlgebraError::Parse(format!(
            "only one variable symbol is allowed, found '{}' and '{}'",
            existing, name
        ))),
        Some(_) => Ok(()),
        None => {
            *variable = Some(name.to_string());
            Ok(())
        }
    }
}
