#![cfg(feature = "dev")]
//! Tests for linear algebra over matrix members.
//!
//! These tests verify the elimination-based routines across element algebras:
//! - Exact integer determinants (fraction-free elimination)
//! - Float solve and inverse with pivoting
//! - Non-commutative solve over quaternions
//!
//! ## Test Organization
//!
//! 1. **Determinant**
//! 2. **Solve and Inverse**
//! 3. **Elementary Operations**

use approx::assert_relative_eq;

use genalg::algorithms::linear;
use genalg::prelude::*;

fn int_matrix_4x4() -> Matrix<i64> {
    Matrix::from_rows(vec![
        vec![0, -3, 2, 0],
        vec![-9, 7, 8, -1],
        vec![1, -7, -4, -2],
        vec![-9, 1, -2, -2],
    ])
    .unwrap()
}

// ============================================================================
// Determinant Tests
// ============================================================================

/// Test an exact integer determinant that needs a pivot row swap.
#[test]
fn test_determinant_integer_4x4() {
    assert_eq!(linear::determinant(&INT64, &int_matrix_4x4()).unwrap(), 602);
}

/// Test the same determinant computed in floating point.
#[test]
fn test_determinant_float_4x4() {
    let m = int_matrix_4x4();
    let data: Vec<f64> = m.as_slice().iter().map(|&x| x as f64).collect();
    let mf = Matrix::new(4, 4, data).unwrap();
    assert_relative_eq!(
        linear::determinant(&DBL, &mf).unwrap(),
        602.0,
        epsilon = 1e-9
    );
}

/// Test degenerate determinants.
#[test]
fn test_determinant_edge_cases() {
    let empty: Matrix<i32> = Matrix::new(0, 0, Vec::new()).unwrap();
    assert_eq!(linear::determinant(&INT32, &empty).unwrap(), 1);

    let single = Matrix::new(1, 1, vec![-7]).unwrap();
    assert_eq!(linear::determinant(&INT32, &single).unwrap(), -7);

    let zero_column = Matrix::from_rows(vec![vec![0, 1], vec![0, 5]]).unwrap();
    assert_eq!(linear::determinant(&INT32, &zero_column).unwrap(), 0);

    let swapped = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
    assert_eq!(linear::determinant(&INT32, &swapped).unwrap(), -1);

    let wide = Matrix::new(2, 3, vec![0; 6]).unwrap();
    assert_eq!(
        linear::determinant(&INT32, &wide),
        Err(AlgebraError::NotSquare { rows: 2, cols: 3 })
    );
}

// ============================================================================
// Solve and Inverse Tests
// ============================================================================

/// Test a classic 3x3 system.
#[test]
fn test_solve_3x3() {
    let a = Matrix::from_rows(vec![
        vec![2.0, 1.0, -1.0],
        vec![-3.0, -1.0, 2.0],
        vec![-2.0, 1.0, 2.0],
    ])
    .unwrap();
    let b = Matrix::new(3, 1, vec![8.0, -11.0, -3.0]).unwrap();

    let x = linear::solve(&DBL, &a, &b).unwrap();
    assert_eq!(x.shape(), (3, 1));
    for (got, want) in x.as_slice().iter().zip([2.0, 3.0, -1.0]) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
}

/// Test solve failures.
#[test]
fn test_solve_errors() {
    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let b = Matrix::new(2, 1, vec![1.0, 1.0]).unwrap();
    assert_eq!(
        linear::solve(&DBL, &singular, &b),
        Err(AlgebraError::Singular)
    );

    let a = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    let tall = Matrix::new(3, 1, vec![1.0; 3]).unwrap();
    assert!(matches!(
        linear::solve(&DBL, &a, &tall),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
}

/// Test a 2x2 inverse and that it multiplies back to the identity.
#[test]
fn test_inverse_2x2() {
    let a = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    let inv = linear::inverse(&DBL, &a).unwrap();
    for (got, want) in inv.as_slice().iter().zip([0.6, -0.7, -0.2, 0.4]) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }

    let product = linear::matrix_multiply(&DBL, &inv, &a).unwrap();
    for (got, want) in product.as_slice().iter().zip([1.0, 0.0, 0.0, 1.0]) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
}

/// Test a complex inverse.
#[test]
fn test_inverse_complex() {
    use num_complex::Complex;

    let a = Matrix::from_rows(vec![
        vec![Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)],
        vec![Complex::new(3.0, 0.0), Complex::new(1.0, -1.0)],
    ])
    .unwrap();
    let inv = linear::inverse(&CDBL, &a).unwrap();
    let product = linear::matrix_multiply(&CDBL, &a, &inv).unwrap();
    let identity = [1.0, 0.0, 0.0, 1.0];
    for (got, want) in product.as_slice().iter().zip(identity) {
        assert_relative_eq!(got.re, want, epsilon = 1e-12);
        assert_relative_eq!(got.im, 0.0, epsilon = 1e-12);
    }
}

/// Test that a quaternion system is solved with left division.
#[test]
fn test_solve_quaternion() {
    let q = Quaternion::new(1.0, 2.0, -1.0, 0.5);
    let p = Quaternion::new(0.0, 1.0, 3.0, -2.0);
    let a = Matrix::new(1, 1, vec![q]).unwrap();
    let b = Matrix::new(1, 1, vec![p]).unwrap();

    let x = linear::solve(&QDBL, &a, &b).unwrap();
    let back = QDBL.multiply(&q, &x.as_slice()[0]);
    assert_relative_eq!(back.r, p.r, epsilon = 1e-12);
    assert_relative_eq!(back.i, p.i, epsilon = 1e-12);
    assert_relative_eq!(back.j, p.j, epsilon = 1e-12);
    assert_relative_eq!(back.k, p.k, epsilon = 1e-12);
}

// ============================================================================
// Elementary Operation Tests
// ============================================================================

/// Test trace, product and transpose.
#[test]
fn test_trace_multiply_transpose() {
    let m = int_matrix_4x4();
    assert_eq!(linear::trace(&INT64, &m).unwrap(), 1);

    let mt = linear::transpose(&m);
    assert_eq!(*mt.element(0, 1).unwrap(), -9);
    assert_eq!(linear::determinant(&INT64, &mt).unwrap(), 602);

    let a = Matrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
    let b = Matrix::from_rows(vec![vec![4], vec![5], vec![6]]).unwrap();
    let ab = linear::matrix_multiply(&INT32, &a, &b).unwrap();
    assert_eq!(ab.as_slice(), &[32]);
    assert!(linear::matrix_multiply(&INT32, &a, &a).is_err());
}
