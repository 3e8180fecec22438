//! Number-theoretic functions.
//!
//! ## Purpose
//!
//! Greatest common divisors over any Euclidean algebra, plus modular
//! exponentiation, primality, factorials and Fibonacci numbers on `u64`.
//!
//! ## Invariants
//!
//! * `gcd(a, b) >= 0`, `gcd(0, 0) == 0`.
//! * Results that do not fit the member type (`gcd(MIN, 0)`, a wrapped `lcm`) are
//!   reported as `Overflow`, never returned.
//! * `extended_gcd(a, b) == (g, x, y)` with `a*x + b*y == g`.
//! * `is_prime` is exact for every `u64` (deterministic Miller-Rabin witness set).

// Internal dependencies
use crate::algebra::traits::{Absolute, Additive, Euclidean, Multiplicative, Ordered};
use crate::primitives::errors::AlgebraError;

/// Witnesses that make Miller-Rabin deterministic below 2^64.
const MILLER_RABIN_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

// ============================================================================
// Divisibility
// ============================================================================

/// Greatest common divisor, always non-negative.
pub fn gcd<A>(alg: &A, a: &A::Member, b: &A::Member) -> Result<A::Member, AlgebraError>
where
    A: Euclidean + Additive + Absolute + Ordered,
{
    let mut x = alg.abs(a);
    let mut y = alg.abs(b);
    while !alg.is_zero(&y) {
        let r = alg.rem(&x, &y)?;
        x = y;
        y = r;
    }
    non_negative(alg, alg.abs(&x))
}

/// Least common multiple, always non-negative; `lcm(0, x) == 0`.
pub fn lcm<A>(alg: &A, a: &A::Member, b: &A::Member) -> Result<A::Member, AlgebraError>
where
    A: Euclidean + Additive + Absolute + Multiplicative + Ordered,
{
    if alg.is_zero(a) || alg.is_zero(b) {
        return Ok(alg.zero());
    }
    let g = gcd(alg, a, b)?;
    let q = alg.div_trunc(a, &g)?;
    let product = alg.multiply(&q, b);
    if !alg.is_equal(&alg.div_trunc(&product, b)?, &q) {
        return Err(AlgebraError::Overflow);
    }
    non_negative(alg, alg.abs(&product))
}

/// `abs` wraps at `MIN`; a negative result means the magnitude is unrepresentable.
fn non_negative<A>(alg: &A, value: A::Member) -> Result<A::Member, AlgebraError>
where
    A: Additive + Ordered,
{
    if alg.is_less(&value, &alg.zero()) {
        return Err(AlgebraError::Overflow);
    }
    Ok(value)
}

/// Extended Euclid: `(g, x, y)` with `a*x + b*y == g == gcd(a, b)` up to sign.
pub fn extended_gcd<A>(
    alg: &A,
    a: &A::Member,
    b: &A::Member,
) -> Result<(A::Member, A::Member, A::Member), AlgebraError>
where
    A: Euclidean + Additive + Multiplicative,
{
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (alg.one(), alg.zero());
    let (mut old_t, mut t) = (alg.zero(), alg.one());
    while !alg.is_zero(&r) {
        let q = alg.div_trunc(&old_r, &r)?;
        let next_r = alg.subtract(&old_r, &alg.multiply(&q, &r));
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = alg.subtract(&old_s, &alg.multiply(&q, &s));
        old_s = core::mem::replace(&mut s, next_s);
        let next_t = alg.subtract(&old_t, &alg.multiply(&q, &t));
        old_t = core::mem::replace(&mut t, next_t);
    }
    Ok((old_r, old_s, old_t))
}

// ============================================================================
// Modular Arithmetic and Primality
// ============================================================================

/// `base^exp mod modulus`; fails with `DivisionByZero` for a zero modulus.
pub fn pow_mod(base: u64, exp: u64, modulus: u64) -> Result<u64, AlgebraError> {
    if modulus == 0 {
        return Err(AlgebraError::DivisionByZero);
    }
    let m = modulus as u128;
    let mut result: u128 = 1 % m;
    let mut b = base as u128 % m;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    Ok(result as u64)
}

/// Deterministic primality test for all of `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &MILLER_RABIN_WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &MILLER_RABIN_WITNESSES {
        // n > 37 here, so pow_mod cannot see a zero modulus
        let mut x = pow_mod(a, d, n).unwrap_or(0);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = ((x as u128 * x as u128) % n as u128) as u64;
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

// ============================================================================
// Sequences
// ============================================================================

/// `n!`; fails with `Overflow` above `20!`.
pub fn factorial(n: u64) -> Result<u64, AlgebraError> {
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(k).ok_or(AlgebraError::Overflow))
}

/// The `n`th Fibonacci number (`F(0) = 0`, `F(1) = 1`); fails with `Overflow` above `F(93)`.
pub fn fibonacci(n: u64) -> Result<u64, AlgebraError> {
    let (mut a, mut b) = (0u64, 1u64);
    let mut b_overflowed = false;
    for _ in 0..n {
        // b only becomes the answer on the next step
        if b_overflowed {
            return Err(AlgebraError::Overflow);
        }
        let (next, overflowed) = a.overflowing_add(b);
        a = b;
        b = next;
        b_overflowed = overflowed;
    }
    Ok(a)
}
