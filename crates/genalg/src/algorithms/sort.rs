//! Sorting and searching over ordered algebras.
//!
//! ## Purpose
//!
//! Sorts any indexed data source by its algebra's order, and searches sorted
//! sources.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of equal members.
//! * **Load-sort-store**: Members are read into a scratch `Vec`, sorted, and written back,
//!   so file-backed sources see one sequential pass in each direction.
//!
//! ## Invariants
//!
//! * After `sort`, `is_sorted` holds and the multiset of members is unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algebra::traits::Ordered;
use crate::primitives::errors::AlgebraError;
use crate::primitives::storage::{IndexedDataSource, to_vec};

// ============================================================================
// Sorting
// ============================================================================

/// Sort `dest` ascending by the algebra's order.
pub fn sort<A, D>(alg: &A, dest: &mut D) -> Result<(), AlgebraError>
where
    A: Ordered,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    sort_by(dest, |a, b| alg.compare(a, b))
}

/// Sort `dest` descending by the algebra's order.
pub fn sort_descending<A, D>(alg: &A, dest: &mut D) -> Result<(), AlgebraError>
where
    A: Ordered,
    D: IndexedDataSource<A::Member> + ?Sized,
{
    sort_by(dest, |a, b| alg.compare(b, a))
}

/// Stable sort of `dest` with a caller-supplied comparator.
pub fn sort_by<U, D, F>(dest: &mut D, cmp: F) -> Result<(), AlgebraError>
where
    D: IndexedDataSource<U> + ?Sized,
    F: FnMut(&U, &U) -> Ordering,
{
    let mut values: Vec<U> = to_vec(&*dest)?;
    if values.len() < 2 {
        return Ok(());
    }
    values.sort_by(cmp);
    for (i, v) in values.iter().enumerate() {
        dest.set(i, v)?;
    }
    Ok(())
}

/// Index permutation that sorts `src`: `result[k]` is the original index of the k-th smallest.
pub fn sort_indices<A, S>(alg: &A, src: &S) -> Result<Vec<usize>, AlgebraError>
where
    A: Ordered,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let values = to_vec(src)?;
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| alg.compare(&values[a], &values[b]));
    Ok(indices)
}

/// True when every element is no greater than its successor.
pub fn is_sorted<A, S>(alg: &A, src: &S) -> Result<bool, AlgebraError>
where
    A: Ordered,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    if src.size() < 2 {
        return Ok(true);
    }
    let mut prev = src.get(0)?;
    for i in 1..src.size() {
        let cur = src.get(i)?;
        if alg.is_greater(&prev, &cur) {
            return Ok(false);
        }
        prev = cur;
    }
    Ok(true)
}

// ============================================================================
// Searching
// ============================================================================

/// Binary search in an ascending source.
///
/// Returns `Ok(index)` of a matching element, or `Err(insertion_point)`
/// wrapped in the outer `Ok`. Storage failures use the outer `Err`.
pub fn binary_search<A, S>(
    alg: &A,
    value: &A::Member,
    src: &S,
) -> Result<Result<usize, usize>, AlgebraError>
where
    A: Ordered,
    S: IndexedDataSource<A::Member> + ?Sized,
{
    let mut lo = 0;
    let mut hi = src.size();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match alg.compare(&src.get(mid)?, value) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Ok(Ok(mid)),
        }
    }
    Ok(Err(lo))
}
