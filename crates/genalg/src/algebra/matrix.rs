//! Dense matrices over any algebra.
//!
//! ## Purpose
//!
//! [`Matrix<M>`] is a row-major matrix of members; [`MatrixAlgebra<A>`] lifts
//! an element algebra `A` to matrices over it. Because matrix operands can
//! disagree in shape, the arithmetic here is fallible (`try_add`,
//! `try_multiply`) instead of implementing the closed capability traits.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` for every matrix.
//! * A matrix is also an [`IndexedDataSource`] over its elements in row-major order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algebra::traits::{Additive, Algebra, Multiplicative};
use crate::primitives::errors::AlgebraError;
use crate::primitives::storage::{IndexedDataSource, check_index};

// ============================================================================
// Matrix Member
// ============================================================================

/// A row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<M> {
    rows: usize,
    cols: usize,
    data: Vec<M>,
}

impl<M: Clone> Matrix<M> {
    /// Build a matrix from row-major data; `data.len()` must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<M>) -> Result<Self, AlgebraError> {
        let expected = rows.checked_mul(cols).ok_or(AlgebraError::Overflow)?;
        if data.len() != expected {
            return Err(AlgebraError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<M>>) -> Result<Self, AlgebraError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(AlgebraError::SizeMismatch {
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// A `rows x cols` matrix filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: M) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for square matrices.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at (`row`, `col`).
    pub fn element(&self, row: usize, col: usize) -> Result<&M, AlgebraError> {
        self.position(row, col).map(|p| &self.data[p])
    }

    /// Overwrite the element at (`row`, `col`).
    pub fn set_element(&mut self, row: usize, col: usize, value: M) -> Result<(), AlgebraError> {
        let p = self.position(row, col)?;
        self.data[p] = value;
        Ok(())
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), AlgebraError> {
        check_index(a, self.rows)?;
        check_index(b, self.rows)?;
        if a != b {
            for c in 0..self.cols {
                self.data.swap(a * self.cols + c, b * self.cols + c);
            }
        }
        Ok(())
    }

    /// Row-major elements.
    pub fn as_slice(&self) -> &[M] {
        &self.data
    }

    /// A copy with rows and columns exchanged.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    fn position(&self, row: usize, col: usize) -> Result<usize, AlgebraError> {
        check_index(row, self.rows)?;
        check_index(col, self.cols)?;
        Ok(row * self.cols + col)
    }
}

impl<M: Clone> IndexedDataSource<M> for Matrix<M> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<M, AlgebraError> {
        check_index(index, self.data.len())?;
        Ok(self.data[index].clone())
    }

    fn set(&mut self, index: usize, value: &M) -> Result<(), AlgebraError> {
        check_index(index, self.data.len())?;
        self.data[index].clone_from(value);
        Ok(())
    }
}

// ============================================================================
// Matrix Algebra
// ============================================================================

/// Algebra of matrices whose elements belong to `A`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixAlgebra<A> {
    element: A,
}

impl<A> MatrixAlgebra<A> {
    /// Matrices over `element`.
    pub const fn new(element: A) -> Self {
        Self { element }
    }

    /// The element algebra.
    pub fn element_algebra(&self) -> &A {
        &self.element
    }
}

impl<A: Algebra> Algebra for MatrixAlgebra<A> {
    type Member = Matrix<A::Member>;

    fn name(&self) -> &'static str {
        "Matrix"
    }

    /// The empty 0x0 matrix.
    fn construct(&self) -> Matrix<A::Member> {
        Matrix {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    fn is_equal(&self, a: &Matrix<A::Member>, b: &Matrix<A::Member>) -> bool {
        a.shape() == b.shape()
            && a
                .data
                .iter()
                .zip(&b.data)
                .all(|(x, y)| self.element.is_equal(x, y))
    }
}

impl<A: Additive> MatrixAlgebra<A> {
    /// The `rows x cols` zero matrix.
    pub fn zero(&self, rows: usize, cols: usize) -> Matrix<A::Member> {
        Matrix::filled(rows, cols, self.element.zero())
    }

    /// Elementwise sum.
    pub fn try_add(
        &self,
        a: &Matrix<A::Member>,
        b: &Matrix<A::Member>,
    ) -> Result<Matrix<A::Member>, AlgebraError> {
        self.zip_with(a, b, |x, y| self.element.add(x, y))
    }

    /// Elementwise difference.
    pub fn try_subtract(
        &self,
        a: &Matrix<A::Member>,
        b: &Matrix<A::Member>,
    ) -> Result<Matrix<A::Member>, AlgebraError> {
        self.zip_with(a, b, |x, y| self.element.subtract(x, y))
    }

    /// Elementwise negation.
    pub fn negate(&self, a: &Matrix<A::Member>) -> Matrix<A::Member> {
        Matrix {
            rows: a.rows,
            cols: a.cols,
            data: a.data.iter().map(|x| self.element.negate(x)).collect(),
        }
    }

    fn zip_with<F>(
        &self,
        a: &Matrix<A::Member>,
        b: &Matrix<A::Member>,
        f: F,
    ) -> Result<Matrix<A::Member>, AlgebraError>
    where
        F: Fn(&A::Member, &A::Member) -> A::Member,
    {
        if a.shape() != b.shape() {
            return Err(AlgebraError::ShapeMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }
        Ok(Matrix {
            rows: a.rows,
            cols: a.cols,
            data: a.data.iter().zip(&b.data).map(|(x, y)| f(x, y)).collect(),
        })
    }
}

impl<A: Additive + Multiplicative> MatrixAlgebra<A> {
    /// The `n x n` identity.
    pub fn identity(&self, n: usize) -> Matrix<A::Member> {
        let mut m = self.zero(n, n);
        for i in 0..n {
            m.data[i * n + i] = self.element.one();
        }
        m
    }

    /// Matrix product `a * b`; requires `a.cols() == b.rows()`.
    pub fn try_multiply(
        &self,
        a: &Matrix<A::Member>,
        b: &Matrix<A::Member>,
    ) -> Result<Matrix<A::Member>, AlgebraError> {
        if a.cols != b.rows {
            return Err(AlgebraError::ShapeMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }
        let mut out = self.zero(a.rows, b.cols);
        for r in 0..a.rows {
            for c in 0..b.cols {
                let mut acc = self.element.zero();
                for k in 0..a.cols {
                    let term = self
                        .element
                        .multiply(&a.data[r * a.cols + k], &b.data[k * b.cols + c]);
                    acc = self.element.add(&acc, &term);
                }
                out.data[r * b.cols + c] = acc;
            }
        }
        Ok(out)
    }

    /// Every element multiplied on the left by `factor`.
    pub fn scale(&self, factor: &A::Member, a: &Matrix<A::Member>) -> Matrix<A::Member> {
        Matrix {
            rows: a.rows,
            cols: a.cols,
            data: a
                .data
                .iter()
                .map(|x| self.element.multiply(factor, x))
                .collect(),
        }
    }
}
