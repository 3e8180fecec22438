#![cfg(feature = "dev")]
//! Tests for the concrete algebras.
//!
//! These tests verify member arithmetic for every family of algebra:
//! - Integer widths with wrapping, floor division and midpoint rounding
//! - Floating-point reals
//! - Complex numbers, quaternions and octonions
//! - Matrices over an element algebra
//!
//! ## Test Organization
//!
//! 1. **Integers** - Division semantics, overflow, average_two
//! 2. **Reals** - Division by zero, ordering, constants
//! 3. **Complex** - Field identities and transcendental functions
//! 4. **Quaternions** - Non-commutativity and inverses
//! 5. **Octonions** - Non-associativity, inverses, norm
//! 6. **Matrices** - Shape checks and products

use approx::assert_relative_eq;
use num_complex::Complex;

use genalg::prelude::*;

// ============================================================================
// Integer Tests
// ============================================================================

/// Test that `average_two` equals the floor of the exact midpoint.
///
/// Exhaustive over every pair of 8-bit signed integers.
#[test]
fn test_int8_average_two_exhaustive() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let expected = (a as i16 + b as i16).div_euclid(2) as i8;
            assert_eq!(INT8.average_two(&a, &b), expected, "a={a} b={b}");
        }
    }
}

/// Test `average_two` at the extremes of wider and unsigned types.
#[test]
fn test_average_two_extremes() {
    assert_eq!(INT64.average_two(&i64::MAX, &i64::MAX), i64::MAX);
    assert_eq!(INT64.average_two(&i64::MIN, &i64::MIN), i64::MIN);
    assert_eq!(INT64.average_two(&i64::MIN, &i64::MAX), -1);
    assert_eq!(UINT8.average_two(&255, &254), 254);
    assert_eq!(UINT64.average_two(&u64::MAX, &u64::MAX), u64::MAX);
}

/// Test floor division and modulo against truncating division.
#[test]
fn test_integer_division_semantics() {
    assert_eq!(INT32.div_floor(&-7, &2).unwrap(), -4);
    assert_eq!(INT32.modulo(&-7, &2).unwrap(), 1);
    assert_eq!(INT32.div_trunc(&-7, &2).unwrap(), -3);
    assert_eq!(INT32.rem(&-7, &2).unwrap(), -1);

    assert_eq!(INT32.div_floor(&7, &-2).unwrap(), -4);
    assert_eq!(INT32.modulo(&7, &-2).unwrap(), -1);
    assert_eq!(INT32.div_floor(&6, &-2).unwrap(), -3);
    assert_eq!(INT32.modulo(&6, &-2).unwrap(), 0);

    assert_eq!(UINT16.div_floor(&17, &5).unwrap(), 3);
    assert_eq!(UINT16.modulo(&17, &5).unwrap(), 2);
}

/// Test integer division failures.
#[test]
fn test_integer_division_errors() {
    assert_eq!(INT8.divide(&1, &0), Err(AlgebraError::DivisionByZero));
    assert_eq!(INT8.modulo(&1, &0), Err(AlgebraError::DivisionByZero));
    assert_eq!(INT8.div_trunc(&i8::MIN, &-1), Err(AlgebraError::Overflow));
    assert_eq!(INT8.rem(&i8::MIN, &-1).unwrap(), 0);
}

/// Test wrapping arithmetic and powers.
#[test]
fn test_integer_wrapping() {
    assert_eq!(INT8.add(&127, &1), -128);
    assert_eq!(UINT8.subtract(&0, &1), 255);
    assert_eq!(INT8.negate(&i8::MIN), i8::MIN);
    assert_eq!(INT32.power(&3, 4), 81);
    assert_eq!(UINT8.power(&2, 8), 0);
}

/// Test ordering, bounds and sign helpers.
#[test]
fn test_integer_order_and_bounds() {
    assert!(INT16.is_less(&-3, &2));
    assert_eq!(INT16.max(&-3, &2), 2);
    assert_eq!(INT16.min(&-3, &2), -3);
    assert_eq!(INT16.min_bound(), i16::MIN);
    assert_eq!(UINT32.max_bound(), u32::MAX);
    assert_eq!(INT16.signum(&-9), -1);
    assert_eq!(UINT16.signum(&0), 0);
    assert_eq!(INT64.abs(&-12), 12);
    assert_eq!(INT64.norm(&-12), 12.0);
}

/// Test algebra names and default members.
#[test]
fn test_integer_names() {
    assert_eq!(INT8.name(), "SignedInt8");
    assert_eq!(UINT64.name(), "UnsignedInt64");
    assert_eq!(INT32.construct(), 0);
}

// ============================================================================
// Real Tests
// ============================================================================

/// Test that real division by zero is an error instead of infinity.
#[test]
fn test_real_divide_by_zero() {
    assert_eq!(DBL.divide(&1.0, &0.0), Err(AlgebraError::DivisionByZero));
    assert_eq!(DBL.invert(&0.0), Err(AlgebraError::DivisionByZero));
    assert_relative_eq!(DBL.divide(&1.0, &4.0).unwrap(), 0.25);
}

/// Test real transcendental functions and constants.
#[test]
fn test_real_functions() {
    assert_relative_eq!(DBL.sin(&DBL.pi()), 0.0, epsilon = 1e-15);
    let (s, c) = DBL.sin_and_cos(&0.5);
    assert_relative_eq!(s * s + c * c, 1.0, epsilon = 1e-15);
    assert_relative_eq!(DBL.ln(&DBL.e()), 1.0, epsilon = 1e-15);
    assert_relative_eq!(DBL.pow(&2.0, &10.0), 1024.0);
    assert_relative_eq!(DBL.cbrt(&-27.0), -3.0, epsilon = 1e-12);
    assert_relative_eq!(FLT.sqrt(&2.0), std::f32::consts::SQRT_2);
    assert_relative_eq!(DBL.tanh(&0.0), 0.0);
}

/// Test that NaN compares equal to everything under the algebra's order.
#[test]
fn test_real_nan_ordering() {
    assert_eq!(DBL.compare(&f64::NAN, &1.0), core::cmp::Ordering::Equal);
    assert!(!DBL.is_finite(&f64::NAN));
    assert!(DBL.is_not_equal(&f64::NAN, &f64::NAN));
}

/// Test random reals stay in the unit interval.
#[test]
fn test_real_random_range() {
    let mut rng = SimpleRng::new(7);
    for _ in 0..1000 {
        let x = FLT.random(&mut rng);
        assert!((0.0..1.0).contains(&x));
    }
}

/// Test the real midpoint at large magnitudes.
#[test]
fn test_real_average_two_no_overflow() {
    assert_eq!(DBL.average_two(&f64::MAX, &f64::MAX), f64::MAX);
    assert_eq!(DBL.average_two(&1.0, &2.0), 1.5);
    assert_eq!(DBL.average_two(&-f64::MAX, &f64::MAX), 0.0);
}

/// Test the real midpoint at subnormal magnitudes.
#[test]
fn test_real_average_two_subnormal() {
    let tiny = f64::from_bits(1);
    assert_eq!(DBL.average_two(&tiny, &tiny), tiny);
    assert_eq!(DBL.average_two(&-tiny, &-tiny), -tiny);
    assert_eq!(FLT.average_two(&f32::from_bits(1), &f32::from_bits(3)), f32::from_bits(2));
}

// ============================================================================
// Complex Tests
// ============================================================================

/// Test complex field operations.
#[test]
fn test_complex_arithmetic() {
    let a = Complex::new(1.0, 2.0);
    let b = Complex::new(3.0, -1.0);

    assert_eq!(CDBL.multiply(&a, &b), Complex::new(5.0, 5.0));
    let q = CDBL.divide(&a, &b).unwrap();
    let back = CDBL.multiply(&q, &b);
    assert_relative_eq!(back.re, 1.0, epsilon = 1e-15);
    assert_relative_eq!(back.im, 2.0, epsilon = 1e-15);

    assert_eq!(
        CDBL.divide(&a, &CDBL.zero()),
        Err(AlgebraError::DivisionByZero)
    );
    assert_eq!(CDBL.conjugate(&a), Complex::new(1.0, -2.0));
    assert_relative_eq!(CDBL.norm(&Complex::new(3.0, 4.0)), 5.0);
}

/// Test Euler's identity through the exponential.
#[test]
fn test_complex_euler_identity() {
    let z = CDBL.exp(&Complex::new(0.0, std::f64::consts::PI));
    assert_relative_eq!(z.re, -1.0, epsilon = 1e-15);
    assert_relative_eq!(z.im, 0.0, epsilon = 1e-15);

    let i = CDBL.sqrt(&Complex::new(-1.0, 0.0));
    assert_relative_eq!(i.re, 0.0, epsilon = 1e-15);
    assert_relative_eq!(i.im, 1.0, epsilon = 1e-15);
}

// ============================================================================
// Quaternion Tests
// ============================================================================

/// Test the Hamilton product of the basis units.
#[test]
fn test_quaternion_basis_products() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    let minus_one = QDBL.negate(&QDBL.one());

    assert_eq!(QDBL.multiply(&i, &j), k);
    assert_eq!(QDBL.multiply(&j, &i), QDBL.negate(&k));
    assert_eq!(QDBL.multiply(&i, &i), minus_one);
    assert_eq!(QDBL.multiply(&QDBL.multiply(&i, &j), &k), minus_one);
}

/// Test that a quaternion times its inverse is one.
#[test]
fn test_quaternion_inverse() {
    let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
    let inv = QDBL.invert(&q).unwrap();
    let p = QDBL.multiply(&q, &inv);
    assert_relative_eq!(p.r, 1.0, epsilon = 1e-15);
    assert_relative_eq!(p.i, 0.0, epsilon = 1e-15);
    assert_relative_eq!(p.j, 0.0, epsilon = 1e-15);
    assert_relative_eq!(p.k, 0.0, epsilon = 1e-15);

    assert_eq!(QDBL.invert(&QDBL.zero()), Err(AlgebraError::DivisionByZero));
}

/// Test that ln inverts exp for a quaternion with a short vector part.
#[test]
fn test_quaternion_exp_ln() {
    let q = Quaternion::new(0.3, 0.2, -0.4, 0.1);
    let back = QDBL.ln(&QDBL.exp(&q));
    assert_relative_eq!(back.r, q.r, epsilon = 1e-12);
    assert_relative_eq!(back.i, q.i, epsilon = 1e-12);
    assert_relative_eq!(back.j, q.j, epsilon = 1e-12);
    assert_relative_eq!(back.k, q.k, epsilon = 1e-12);
    assert_relative_eq!(QDBL.norm(&Quaternion::new(1.0, 1.0, 1.0, 1.0)), 2.0);
}

// ============================================================================
// Octonion Tests
// ============================================================================

fn basis(n: usize) -> Octonion<f64> {
    let mut c = [0.0; 8];
    c[n] = 1.0;
    Octonion::from_components(c)
}

/// Test that the product is not associative on basis elements.
#[test]
fn test_octonion_non_associative() {
    let (i, j, l) = (basis(1), basis(2), basis(4));

    let left = ODBL.multiply(&ODBL.multiply(&i, &j), &l);
    let right = ODBL.multiply(&i, &ODBL.multiply(&j, &l));
    assert_eq!(left, basis(7));
    assert_eq!(right, ODBL.negate(&basis(7)));

    assert_eq!(ODBL.multiply(&l, &l), ODBL.negate(&ODBL.one()));
}

/// Test inverses and right division.
#[test]
fn test_octonion_inverse() {
    let a = Octonion::from_components([1.0, 2.0, -1.0, 0.5, 3.0, 0.0, -2.0, 1.0]);
    let b = Octonion::from_components([0.0, 1.0, 3.0, -2.0, 0.5, 1.0, 0.0, -1.0]);

    let product = ODBL.multiply(&a, &ODBL.invert(&a).unwrap());
    for (got, want) in product.components().iter().zip(ODBL.one().components()) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }

    let back = ODBL.multiply(&ODBL.divide(&a, &b).unwrap(), &b);
    for (got, want) in back.components().iter().zip(a.components()) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }

    assert_eq!(ODBL.invert(&ODBL.zero()), Err(AlgebraError::DivisionByZero));
}

/// Test that the norm is multiplicative.
#[test]
fn test_octonion_norm_multiplicative() {
    let a = Octonion::from_components([1.0, -1.0, 2.0, 0.0, 0.5, 3.0, -1.5, 2.0]);
    let b = Octonion::from_components([2.0, 0.0, -1.0, 1.0, 1.0, -2.0, 0.0, 0.5]);
    assert_relative_eq!(
        ODBL.norm(&ODBL.multiply(&a, &b)),
        ODBL.norm(&a) * ODBL.norm(&b),
        epsilon = 1e-12
    );

    // a * conj(a) is the real number |a|^2
    let n2 = ODBL.multiply(&a, &ODBL.conjugate(&a)).components();
    assert_relative_eq!(n2[0], ODBL.norm(&a).powi(2), epsilon = 1e-12);
    assert!(n2[1..].iter().all(|x| x.abs() < 1e-12));
    assert_eq!(ODBL.name(), "Octonion");
}

// ============================================================================
// Matrix Tests
// ============================================================================

/// Test matrix construction checks.
#[test]
fn test_matrix_construction() {
    assert!(matches!(
        Matrix::new(2, 2, vec![1, 2, 3]),
        Err(AlgebraError::SizeMismatch {
            expected: 4,
            got: 3
        })
    ));
    assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());

    let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(*m.element(1, 2).unwrap(), 6);
    assert!(m.element(2, 0).is_err());
    assert_eq!(m.transpose().as_slice(), &[1, 4, 2, 5, 3, 6]);
}

/// Test matrix algebra arithmetic.
#[test]
fn test_matrix_algebra_arithmetic() {
    let alg = MatrixAlgebra::new(INT32);
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();

    let ab = alg.try_multiply(&a, &b).unwrap();
    assert_eq!(ab.as_slice(), &[2, 1, 4, 3]);
    let ba = alg.try_multiply(&b, &a).unwrap();
    assert_eq!(ba.as_slice(), &[3, 4, 1, 2]);

    let sum = alg.try_add(&a, &b).unwrap();
    assert_eq!(sum.as_slice(), &[1, 3, 4, 4]);
    assert!(alg.is_equal(&alg.try_subtract(&sum, &b).unwrap(), &a));

    let id = alg.identity(2);
    assert!(alg.is_equal(&alg.try_multiply(&a, &id).unwrap(), &a));
    assert_eq!(alg.scale(&2, &a).as_slice(), &[2, 4, 6, 8]);

    let wide = alg.zero(2, 3);
    assert!(alg.try_add(&a, &wide).is_err());
    assert!(alg.try_multiply(&wide, &a).is_err());
    assert!(alg.is_not_equal(&wide, &alg.construct()));
}
