//! Linear algebra over matrix members.
//!
//! ## Purpose
//!
//! Determinant, inverse, linear solve, trace and product for [`Matrix`]
//! members of any element algebra that supports the required arithmetic.
//!
//! ## Design notes
//!
//! * **Fraction-free determinant**: Bareiss elimination divides only by the previous
//!   pivot, and that division is exact. Integer matrices therefore get exact determinants
//!   without rationals, and float matrices behave like ordinary elimination.
//! * **Partial pivoting**: Gauss-Jordan picks the candidate with the largest norm in the
//!   pivot column, which keeps float error bounded.
//! * **Left row operations**: Rows are scaled by multiplying the pivot inverse on the left,
//!   so solve and inverse stay correct for non-commutative division rings (quaternions).
//!
//! ## Invariants
//!
//! * `determinant` of the 0x0 matrix is `one`.
//! * `inverse(a) * a == identity` up to rounding.
//!
//! ## Non-goals
//!
//! * Sparse or banded storage.
//! * Eigen-decomposition.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use tracing::trace;

// Internal dependencies
use crate::algebra::matrix::{Matrix, MatrixAlgebra};
use crate::algebra::traits::{Additive, Invertible, Multiplicative, Norm};
use crate::primitives::errors::AlgebraError;

// ============================================================================
// Determinant
// ============================================================================

/// Determinant by Bareiss fraction-free elimination.
///
/// Requires a commutative element algebra whose division is exact on the
/// intermediate Bareiss quotients (every field and every integer type).
pub fn determinant<A>(alg: &A, m: &Matrix<A::Member>) -> Result<A::Member, AlgebraError>
where
    A: Additive + Invertible,
{
    if !m.is_square() {
        return Err(AlgebraError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let n = m.rows();
    if n == 0 {
        return Ok(alg.one());
    }

    let mut a: Vec<A::Member> = m.as_slice().to_vec();
    let mut negate = false;
    let mut prev = alg.one();

    for k in 0..n - 1 {
        if alg.is_zero(&a[k * n + k]) {
            // Bring up the first row with a non-zero entry in column k
            let Some(swap) = (k + 1..n).find(|&i| !alg.is_zero(&a[i * n + k])) else {
                return Ok(alg.zero());
            };
            for c in 0..n {
                a.swap(k * n + c, swap * n + c);
            }
            negate = !negate;
        }
        let pivot = a[k * n + k].clone();
        for i in k + 1..n {
            let lead = a[i * n + k].clone();
            for j in k + 1..n {
                let left = alg.multiply(&a[i * n + j], &pivot);
                let right = alg.multiply(&lead, &a[k * n + j]);
                a[i * n + j] = alg.divide(&alg.subtract(&left, &right), &prev)?;
            }
        }
        trace!(step = k, "bareiss elimination step");
        prev = pivot;
    }

    let det = a[n * n - 1].clone();
    Ok(if negate { alg.negate(&det) } else { det })
}

// ============================================================================
// Solve and Inverse
// ============================================================================

/// Solve `a * x = b` for `x`, where `b` may have several columns.
pub fn solve<A>(
    alg: &A,
    a: &Matrix<A::Member>,
    b: &Matrix<A::Member>,
) -> Result<Matrix<A::Member>, AlgebraError>
where
    A: Additive + Invertible + Norm,
{
    if !a.is_square() {
        return Err(AlgebraError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if a.rows() != b.rows() {
        return Err(AlgebraError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let n = a.rows();
    let m = b.cols();
    let width = n + m;

    // Augmented [a | b], row-major
    let mut aug: Vec<A::Member> = Vec::with_capacity(n * width);
    for r in 0..n {
        aug.extend_from_slice(&a.as_slice()[r * n..(r + 1) * n]);
        aug.extend_from_slice(&b.as_slice()[r * m..(r + 1) * m]);
    }

    for col in 0..n {
        let pivot_row = (col..n)
            .map(|r| (r, alg.norm(&aug[r * width + col])))
            .fold(None, |best: Option<(usize, f64)>, (r, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((r, v)),
            })
            .filter(|&(_, v)| v > 0.0)
            .map(|(r, _)| r)
            .ok_or(AlgebraError::Singular)?;

        if pivot_row != col {
            for c in 0..width {
                aug.swap(col * width + c, pivot_row * width + c);
            }
        }

        let inv = alg.invert(&aug[col * width + col])?;
        for c in 0..width {
            aug[col * width + c] = alg.multiply(&inv, &aug[col * width + c]);
        }

        for r in 0..n {
            if r == col || alg.is_zero(&aug[r * width + col]) {
                continue;
            }
            let factor = aug[r * width + col].clone();
            for c in 0..width {
                let delta = alg.multiply(&factor, &aug[col * width + c]);
                aug[r * width + c] = alg.subtract(&aug[r * width + c], &delta);
            }
        }
    }

    let mut x = Vec::with_capacity(n * m);
    for r in 0..n {
        x.extend_from_slice(&aug[r * width + n..(r + 1) * width]);
    }
    Matrix::new(n, m, x)
}

/// Matrix inverse by Gauss-Jordan elimination.
pub fn inverse<A>(alg: &A, a: &Matrix<A::Member>) -> Result<Matrix<A::Member>, AlgebraError>
where
    A: Additive + Invertible + Norm + Clone,
{
    let identity = MatrixAlgebra::new(alg.clone()).identity(a.rows());
    solve(alg, a, &identity)
}

// ============================================================================
// Elementary Operations
// ============================================================================

/// Sum of the diagonal.
pub fn trace<A>(alg: &A, m: &Matrix<A::Member>) -> Result<A::Member, AlgebraError>
where
    A: Additive,
{
    if !m.is_square() {
        return Err(AlgebraError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let n = m.rows();
    let mut acc = alg.zero();
    for i in 0..n {
        acc = alg.add(&acc, &m.as_slice()[i * n + i]);
    }
    Ok(acc)
}

/// Matrix product `a * b`.
pub fn matrix_multiply<A>(
    alg: &A,
    a: &Matrix<A::Member>,
    b: &Matrix<A::Member>,
) -> Result<Matrix<A::Member>, AlgebraError>
where
    A: Additive + Multiplicative + Clone,
{
    MatrixAlgebra::new(alg.clone()).try_multiply(a, b)
}

/// Matrix transpose.
pub fn transpose<M: Clone>(m: &Matrix<M>) -> Matrix<M> {
    m.transpose()
}
