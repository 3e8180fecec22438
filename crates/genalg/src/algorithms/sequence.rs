//! Elementwise and reducing operations over indexed data sources.
//!
//! ## Purpose
//!
//! This module provides the sequence algorithms every other layer builds on:
//! filling, copying, transforming, generating and reducing sequences of
//! members. Each function is written once against capability bounds and runs
//! over any algebra and any storage.
//!
//! ## Design notes
//!
//! * **Storage-agnostic**: Sources are read with `get`, destinations written with `set`.
//! * **Size-checked**: Binary operations fail with `SizeMismatch` before touching any element.
//! * **Pairwise summation**: `sum` splits long ranges in halves to bound float error growth.
//!
//! ## Invariants
//!
//! * `sum` of an empty source is `zero`; `product` of an empty source is `one`.
//! * `min_element`/`max_element` return the first index of the extreme value.
//!
//! ## Non-goals
//!
//! * Parallel execution (see the engine's transform executor).

// Internal dependencies
use crate::algebra::traits::{Additive, Algebra, Multiplicative, Ordered, RandomSource};
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;
use crate::primitives::storage::{IndexedDataSource, check_same_size};

/// Ranges at or below this length are summed left to right.
const PAIRWISE_BLOCK: usize = 16;

// ============================================================================
// Filling and Copying
// ============================================================================

/// Set every element of `dest` to `value`.
pub fn fill<A, D>(_alg: &A, value: &A::Member, dest: &mut D) -> Result<(), AlgebraError>
where
    A: Algebra,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    for i in 0..dest.size() {
        dest.set(i, value)?;
    }
    Ok(())
}

/// Set every element of `dest` to zero.
pub fn fill_zero<A, D>(alg: &A, dest: &mut D) -> Result<(), AlgebraError>
where
    A: Additive,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    fill(alg, &alg.zero(), dest)
}

/// Copy `src` into `dest` element by element.
pub fn copy<U, S, D>(src: &S, dest: &mut D) -> Result<(), AlgebraError>
where
    S: IndexedDataSource<U> + ?Sized,
    D: IndexedDataSource<U> + ?Sized,
{
    check_same_size(src.size(), dest.size())?;
    for i in 0..src.size() {
        dest.set(i, &src.get(i)?)?;
    }
    Ok(())
}

/// Reverse `dest` in place.
pub fn reverse<U, D>(dest: &mut D) -> Result<(), AlgebraError>
where
    D: IndexedDataSource<U> + ?Sized,
{
    let n = dest.size();
    for i in 0..n / 2 {
        let j = n - 1 - i;
        let a = dest.get(i)?;
        let b = dest.get(j)?;
        dest.set(i, &b)?;
        dest.set(j, &a)?;
    }
    Ok(())
}

// ============================================================================
// Transforms
// ============================================================================

/// `dest[i] = f(src[i])`.
pub fn transform<A, B, S, D, F>(
    _from: &A,
    _to: &B,
    f: F,
    src: &S,
    dest: &mut D,
) -> Result<(), AlgebraError>
where
    A: Algebra,
    B: Algebra,
    S: IndexedDataSource<A::Member> + ?Sized,
    D: IndexedDataSource<B::Member> + ?Sized,
    F: Fn(&A::Member) -> B::Member,
{
    check_same_size(src.size(), dest.size())?;
    for i in 0..src.size() {
        dest.set(i, &f(&src.get(i)?))?;
    }
    Ok(())
}

/// `dest[i] = f(a[i], b[i])`.
pub fn transform2<A, S1, S2, D, F>(
    _alg: &A,
    f: F,
    a: &S1,
    b: &S2,
    dest: &mut D,
) -> Result<(), AlgebraError>
where
    A: Algebra,
    S1: IndexedDataSource<A::Member> + ?Sized,
    S2: IndexedDataSource<A::Member> + ?Sized,
    D: IndexedDataSource<A::Member> + ?Sized,
    F: Fn(&A::Member, &A::Member) -> A::Member,
{
    check_same_size(a.size(), b.size())?;
    check_same_size(a.size(), dest.size())?;
    for i in 0..a.size() {
        dest.set(i, &f(&a.get(i)?, &b.get(i)?))?;
    }
    Ok(())
}

/// `dest[i] = a[i] + b[i]`.
pub fn add_elements<A, S1, S2, D>(alg: &A, a: &S1, b: &S2, dest: &mut D) -> Result<(), AlgebraError>
where
    A: Additive,
    S1: IndexedDataSource<A::Member> + ?Sized,
    S2: IndexedDataSource<A::Member> + ?Sized,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    transform2(alg, |x, y| alg.add(x, y), a, b, dest)
}

/// `dest[i] = factor * src[i]`.
pub fn scale_elements<A, S, D>(
    alg: &A,
    factor: &A::Member,
    src: &S,
    dest: &mut D,
) -> Result<(), AlgebraError>
where
    A: Multiplicative,
    S: IndexedDataSource<A::Member> + ?Sized,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    transform(alg, alg, |x| alg.multiply(factor, x), src, dest)
}

/// Fill `dest` with random members.
pub fn generate<A, D>(alg: &A, rng: &mut SimpleRng, dest: &mut D) -> Result<(), AlgebraError>
where
    A: RandomSource,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    for i in 0..dest.size() {
        dest.set(i, &alg.random(rng))?;
    }
    Ok(())
}

/// Fill `dest` with `f(i)` for each index.
pub fn generate_with<A, D, F>(_alg: &A, f: F, dest: &mut D) -> Result<(), AlgebraError>
where
    A: Algebra,
    D: IndexedDataSource<A::Member> + ?Sized,
    F: Fn(usize) -> A::Member,
{
    for i in 0..dest.size() {
        dest.set(i, &f(i))?;
    }
    Ok(())
}

// ============================================================================
// Reductions
// ============================================================================

/// Sum of all elements.
pub fn sum<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Additive,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    sum_range(alg, src, 0, src.size())
}

fn sum_range<A, S>(alg: &A, src: &S, start: usize, end: usize) -> Result<A::Member, AlgebraError>
where
    A: Additive,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    if end - start <= PAIRWISE_BLOCK {
        let mut acc = alg.zero();
        for i in start..end {
            acc = alg.add(&acc, &src.get(i)?);
        }
        return Ok(acc);
    }
    let mid = start + (end - start) / 2;
    let left = sum_range(alg, src, start, mid)?;
    let right = sum_range(alg, src, mid, end)?;
    Ok(alg.add(&left, &right))
}

/// Product of all elements, in index order.
pub fn product<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Multiplicative,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let mut acc = alg.one();
    for i in 0..src.size() {
        acc = alg.multiply(&acc, &src.get(i)?);
    }
    Ok(acc)
}

/// `sum(a[i] * b[i])`.
pub fn dot_product<A, S1, S2>(alg: &A, a: &S1, b: &S2) -> Result<A::Member, AlgebraError>
where
    A: Additive + Multiplicative,
    S1: IndexedDataSource<A::Member> + ?Sized,
    S2: IndexedDataSource<A::Member> + ?Sized,
{
    check_same_size(a.size(), b.size())?;
    let mut acc = alg.zero();
    for i in 0..a.size() {
        acc = alg.add(&acc, &alg.multiply(&a.get(i)?, &b.get(i)?));
    }
    Ok(acc)
}

/// Index of the first minimum.
pub fn min_element<A, S>(alg: &A, src: &S) -> Result<usize, AlgebraError>
where
    A: Ordered,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    extreme_element(alg, src, |candidate, best| alg.is_less(candidate, best))
}

/// Index of the first maximum.
pub fn max_element<A, S>(alg: &A, src: &S) -> Result<usize, AlgebraError>
where
    A: Ordered,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    extreme_element(alg, src, |candidate, best| alg.is_greater(candidate, best))
}

fn extreme_element<A, S, F>(_alg: &A, src: &S, better: F) -> Result<usize, AlgebraError>
where
    A: Algebra,
    S: IndexedDataSource<A::Member> + ?Sized,
    F: Fn(&A::Member, &A::Member) -> bool,
{
    if src.is_empty() {
        return Err(AlgebraError::EmptyInput);
    }
    let mut best_idx = 0;
    let mut best = src.get(0)?;
    for i in 1..src.size() {
        let v = src.get(i)?;
        if better(&v, &best) {
            best = v;
            best_idx = i;
        }
    }
    Ok(best_idx)
}

/// Number of elements equal to `value`.
pub fn count<A, S>(alg: &A, value: &A::Member, src: &S) -> Result<usize, AlgebraError>
where
    A: Algebra,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let mut n = 0;
    for i in 0..src.size() {
        if alg.is_equal(&src.get(i)?, value) {
            n += 1;
        }
    }
    Ok(n)
}

/// Index of the first element equal to `value`.
pub fn find<A, S>(alg: &A, value: &A::Member, src: &S) -> Result<Option<usize>, AlgebraError>
where
    A: Algebra,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    for i in 0..src.size() {
        if alg.is_equal(&src.get(i)?, value) {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// True when both sources hold equal members at every index.
pub fn equal<A, S1, S2>(alg: &A, a: &S1, b: &S2) -> Result<bool, AlgebraError>
where
    A: Algebra,
    S1: IndexedDataSource<A::Member> + ?Sized,
    S2: IndexedDataSource<A::Member> + ?Sized,
{
    if a.size() != b.size() {
        return Ok(false);
    }
    for i in 0..a.size() {
        if alg.is_not_equal(&a.get(i)?, &b.get(i)?) {
            return Ok(false);
        }
    }
    Ok(true)
}
