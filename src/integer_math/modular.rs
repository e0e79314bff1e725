// src/integer_math/modular.rs

use crate::error::{AlgebraError, Result};

/// Floor modulus: the result lies in `[0, m)` for any integer `x`,
/// including negative `x`.
pub fn mod_floor(x: i64, m: i64) -> i64 {
    ((x % m) + m) % m
}

/// Exponentiation by squaring. The exponent must be non-negative.
pub fn pow(base: i64, exp: i64) -> Result<i64> {
    if exp < 0 {
        return Err(AlgebraError::NegativeExponent(exp));
    }
    Ok(pow_u(base, exp as u64))
}

/// Squaring ladder for exponents already known to be non-negative.
pub fn pow_u(base: i64, exp: u64) -> i64 {
    let mut result = 1i64;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp % 2 == 1 {
            result *= base;
        }
        exp >>= 1;
        base *= base;
    }
    result
}

/// Modular exponentiation by squaring. The exponent must be non-negative.
pub fn pow_mod(base: i64, exp: i64, m: i64) -> Result<i64> {
    if exp < 0 {
        return Err(AlgebraError::NegativeExponent(exp));
    }

    let mut result = 1i64;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp % 2 == 1 {
            result = mod_floor(result * base, m);
        }
        exp >>= 1;
        base = mod_floor(base * base, m);
    }

    Ok(mod_floor(result, m))
}

/// Euclidean algorithm using the floor modulus.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, mod_floor(a, b));
    }
    a
}

/// GCD of a whole sequence, folded from the identity element 0.
pub fn gcd_all(nums: &[i64]) -> i64 {
    nums.iter().fold(0, |acc, &n| gcd(acc, n))
}

/// Iterative extended Euclid. Returns `(g, s, t)` satisfying the Bezout
/// identity `g == s*a + t*b` with `g == gcd(a, b)`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    (old_r, old_s, old_t)
}

/// Multiplicative inverse of `a` mod `m`. Fails when `m` divides `a`,
/// since no inverse exists.
pub fn inverse_mod(a: i64, m: i64) -> Result<i64> {
    if a % m == 0 {
        return Err(AlgebraError::NotInvertible(a, m));
    }

    let (_, s, _) = extended_gcd(a, m);
    Ok(mod_floor(s, m))
}
