//! Descriptive statistics.
//!
//! ## Purpose
//!
//! Location and spread estimates over any algebra that can add, divide by
//! a count, and (for the median) order its members.
//!
//! ## Design notes
//!
//! * **Two-pass variance**: The mean is computed first and squared deviations summed second,
//!   which avoids the cancellation of the one-pass textbook formula.
//! * **Sample variance**: Divides by `n - 1`.
//! * **Median**: Sorts a copy; even lengths combine the middle pair with `average_two`,
//!   so integer medians round toward negative infinity.
//!
//! ## Invariants
//!
//! * The source is never modified.
//!
//! ## Non-goals
//!
//! * Weighted statistics.
//! * Streaming (single-pass) estimators.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algebra::traits::{
    Additive, Averageable, FromCount, Invertible, Multiplicative, Ordered, Roots,
};
use crate::algorithms::sequence::sum;
use crate::primitives::errors::AlgebraError;
use crate::primitives::storage::{IndexedDataSource, to_vec};

// ============================================================================
// Location
// ============================================================================

/// Arithmetic mean.
pub fn mean<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Additive + Invertible + FromCount,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    if src.is_empty() {
        return Err(AlgebraError::EmptyInput);
    }
    let total = sum(alg, src)?;
    alg.divide(&total, &alg.from_count(src.size())?)
}

/// Median; for even lengths the midpoint of the two central members.
pub fn median<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Ordered + Averageable,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let mut values: Vec<A::Member> = to_vec(src)?;
    let n = values.len();
    if n == 0 {
        return Err(AlgebraError::EmptyInput);
    }
    values.sort_by(|a, b| alg.compare(a, b));
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(values[mid].clone())
    } else {
        Ok(alg.average_two(&values[mid - 1], &values[mid]))
    }
}

/// Floor-rounded midpoint of two members.
///
/// For integer algebras this equals `floor((a + b) / 2)` over the full value
/// range, with no intermediate overflow.
#[inline]
pub fn average_two<A: Averageable>(alg: &A, a: &A::Member, b: &A::Member) -> A::Member {
    alg.average_two(a, b)
}

// ============================================================================
// Spread
// ============================================================================

/// `sum(x_i^2)`.
pub fn sum_of_squares<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Additive + Multiplicative,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let mut acc = alg.zero();
    for i in 0..src.size() {
        let x = src.get(i)?;
        acc = alg.add(&acc, &alg.multiply(&x, &x));
    }
    Ok(acc)
}

/// Sample variance `sum((x_i - mean)^2) / (n - 1)`.
pub fn variance<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Additive + Invertible + FromCount,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let n = src.size();
    if n < 2 {
        return Err(AlgebraError::TooFewPoints { got: n, min: 2 });
    }
    let m = mean(alg, src)?;
    let mut acc = alg.zero();
    for i in 0..n {
        let d = alg.subtract(&src.get(i)?, &m);
        acc = alg.add(&acc, &alg.multiply(&d, &d));
    }
    alg.divide(&acc, &alg.from_count(n - 1)?)
}

/// Sample standard deviation.
pub fn std_dev<A, S>(alg: &A, src: &S) -> Result<A::Member, AlgebraError>
where
    A: Additive + Invertible + FromCount + Roots,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    Ok(alg.sqrt(&variance(alg, src)?))
}
