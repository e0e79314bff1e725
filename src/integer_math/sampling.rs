// src/integer_math/sampling.rs

use rand::Rng;
use statrs::function::gamma::ln_gamma;

/// Binomial deviate with `n` trials and success probability `p`.
///
/// For `n < 1000` the Bernoulli sum is simulated exactly. Beyond that the
/// distribution tail decides the approximation: Poisson when either tail is
/// thin (`n*p < 10` or `n*(1-p) < 10`), otherwise a normal deviate rounded
/// and clamped to `[0, n]`.
pub fn random_binomial<R: Rng + ?Sized>(n: i64, p: f64, rng: &mut R) -> i64 {
    if n < 1000 {
        let mut result = 0;
        for _ in 0..n {
            if rng.random::<f64>() < p {
                result += 1;
            }
        }
        return result;
    }

    let np = n as f64 * p;
    if np < 10.0 {
        return random_poisson(np, rng);
    }
    if n as f64 * (1.0 - p) < 10.0 {
        return n - random_poisson(np, rng);
    }

    let v = (0.5 + random_normal(np, (np * (1.0 - p)).sqrt(), rng)) as i64;
    v.clamp(0, n)
}

/// Normal deviate via the Box-Muller transform. Both uniform draws are
/// mapped through `1 - u` to exclude 0 from the open interval.
pub fn random_normal<R: Rng + ?Sized>(mean: f64, std_dev: f64, rng: &mut R) -> f64 {
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = 1.0 - rng.random::<f64>();
    let std_normal = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).sin();
    mean + std_dev * std_normal
}

/// Poisson deviate: Knuth's product loop for `lambda < 30`, transformed
/// rejection for larger rates.
pub fn random_poisson<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> i64 {
    if lambda < 30.0 {
        poisson_small(lambda, rng)
    } else {
        poisson_large(lambda, rng)
    }
}

fn poisson_small<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> i64 {
    let limit = (-lambda).exp();
    let mut product = 1.0;
    let mut k = 0i64;
    loop {
        k += 1;
        product *= rng.random::<f64>();
        if product <= limit {
            return k - 1;
        }
    }
}

/// Transformed-rejection sampling (Ahrens-Dieter). The loop retries with
/// fresh uniform draws until the acceptance inequality holds; termination
/// is almost sure but carries no iteration cap.
fn poisson_large<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> i64 {
    let c = 0.767 - 3.36 / lambda;
    let beta = std::f64::consts::PI / (3.0 * lambda).sqrt();
    let alpha = beta * lambda;
    let k = c.ln() - lambda - beta.ln();

    loop {
        let u = rng.random::<f64>();
        let x = (alpha - ((1.0 - u) / u).ln()) / beta;
        let n = (x + 0.5).floor() as i64;
        if n < 0 {
            continue;
        }
        let v = rng.random::<f64>();
        let y = alpha - beta * x;
        let temp = y.exp();
        let lhs = y + (v / (temp * temp)).ln();
        let rhs = k + n as f64 * lambda.ln() - ln_gamma(n as f64);
        if lhs <= rhs {
            return n;
        }
    }
}
