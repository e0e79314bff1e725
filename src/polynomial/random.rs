// src/polynomial/random.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::integer_math::sampling;
use crate::polynomial::polynomial::Polynomial;
use crate::polynomial::term::Term;

/// Configuration surface for random polynomial generation.
///
/// Unset fields are sampled: the degree from a Poisson distribution around
/// `mean_degree`, the term count from a Binomial over the degree with
/// success probability `prob_term`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RandomPolyConfig {
    pub degree: Option<usize>,
    pub terms: Option<usize>,
    pub max_coeff: i64,
    pub mean_degree: f64,
    pub prob_term: f64,
    pub monic: bool,
}

impl Default for RandomPolyConfig {
    fn default() -> Self {
        RandomPolyConfig {
            degree: None,
            terms: None,
            max_coeff: 100,
            mean_degree: 5.0,
            prob_term: 0.7,
            monic: false,
        }
    }
}

/// Generates one random polynomial from the configuration.
pub fn random_polynomial<R: Rng + ?Sized>(config: &RandomPolyConfig, rng: &mut R) -> Polynomial {
    let degree = config
        .degree
        .unwrap_or_else(|| sampling::random_poisson(config.mean_degree, rng) as usize);
    let term_count = config
        .terms
        .unwrap_or_else(|| sampling::random_binomial(degree as i64, config.prob_term, rng) as usize);

    // distinct degrees drawn without replacement from the exponent range,
    // plus the leading degree itself
    let mut pool: Vec<usize> = (0..degree).collect();
    let mut degrees: Vec<usize> = Vec::with_capacity(term_count + 1);
    for _ in 0..term_count.min(degree) {
        let idx = rng.random_range(0..pool.len());
        degrees.push(pool.swap_remove(idx));
    }
    degrees.push(degree);

    let last = degrees.len() - 1;
    let terms: Vec<Term> = degrees
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let coeff = if config.monic && i == last {
                1
            } else {
                rng.random_range(0..config.max_coeff)
            };
            Term::new(coeff, d)
        })
        .collect();

    Polynomial::new(terms)
}

/// Regenerates until `condition` accepts a candidate. There is no bound on
/// the number of retries; the caller must supply a satisfiable predicate.
pub fn random_polynomial_where<R, F>(config: &RandomPolyConfig, condition: F, rng: &mut R) -> Polynomial
where
    R: Rng + ?Sized,
    F: Fn(&Polynomial) -> bool,
{
    loop {
        let p = random_polynomial(config, rng);
        if condition(&p) {
            return p;
        }
    }
}
