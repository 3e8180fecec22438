//! Parallel reductions over contiguous storage.
//!
//! ## Purpose
//!
//! Sum and dot product that split the input across the rayon thread pool
//! and combine partial results with the algebra's addition.
//!
//! ## Design notes
//!
//! * **Associativity**: Partial sums are combined in an unspecified tree order. Results
//!   are exact for integer algebras and agree with the sequential sum up to rounding
//!   for floating-point algebras.
//! * **Fallback**: Without the `cpu` feature the sequential genalg reductions are used.

// External dependencies
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from genalg crate
use genalg::algebra::traits::{Additive, Multiplicative};
#[cfg(not(feature = "cpu"))]
use genalg::algorithms::sequence;
#[cfg(not(feature = "cpu"))]
use genalg::prelude::ArrayStorage;
use genalg::prelude::{AlgebraError, ContiguousStorage};

// ============================================================================
// Parallel Sum
// ============================================================================

/// Sum of all elements of `src`.
pub fn sum_parallel<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Additive + Sync,
    A::Member: Send + Sync,
    S: ContiguousStorage<A::Member> + ?Sized,
{
    let values = src.as_slice();

    #[cfg(feature = "cpu")]
    return Ok(values
        .par_iter()
        .fold(|| alg.zero(), |acc, x| alg.add(&acc, x))
        .reduce(|| alg.zero(), |a, b| alg.add(&a, &b)));

    #[cfg(not(feature = "cpu"))]
    return sequence::sum(alg, &ArrayStorage::from_vec(values.to_vec()));
}

/// `sum(a[i] * b[i])`.
pub fn dot_product_parallel<A, S1, S2>(alg: &A, a: &S1, b: &S2) -> Result<A::Member, AlgebraError>
where
    A: Additive + Multiplicative + Sync,
    A::Member: Send + Sync,
    S1: ContiguousStorage<A::Member> + ?Sized,
    S2: ContiguousStorage<A::Member> + ?Sized,
{
    let (x, y) = (a.as_slice(), b.as_slice());
    if x.len() != y.len() {
        return Err(AlgebraError::SizeMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }

    #[cfg(feature = "cpu")]
    return Ok(x
        .par_iter()
        .zip(y.par_iter())
        .fold(|| alg.zero(), |acc, (p, q)| alg.add(&acc, &alg.multiply(p, q)))
        .reduce(|| alg.zero(), |l, r| alg.add(&l, &r)));

    #[cfg(not(feature = "cpu"))]
    return sequence::dot_product(
        alg,
        &ArrayStorage::from_vec(x.to_vec()),
        &ArrayStorage::from_vec(y.to_vec()),
    );
}
