#![cfg(feature = "dev")]
//! Tests for sequence, sorting and search algorithms.
//!
//! These tests verify that one generic implementation behaves correctly
//! across algebras and storage kinds:
//! - Fill, copy, reverse, transform and generate
//! - Reductions (sum, product, dot product, extremes)
//! - Sorting and binary search
//!
//! ## Test Organization
//!
//! 1. **Filling and Copying**
//! 2. **Transforms and Generation**
//! 3. **Reductions**
//! 4. **Sorting and Searching**

use approx::assert_relative_eq;
use num_complex::Complex;

use genalg::algorithms::{sequence, sort};
use genalg::prelude::*;

// ============================================================================
// Filling and Copying Tests
// ============================================================================

/// Test fill and fill_zero.
#[test]
fn test_fill() {
    let mut data = ArrayStorage::new(3, 0u8);
    sequence::fill(&UINT8, &9, &mut data).unwrap();
    assert_eq!(data.as_slice(), &[9, 9, 9]);
    sequence::fill_zero(&UINT8, &mut data).unwrap();
    assert_eq!(data.as_slice(), &[0, 0, 0]);
}

/// Test that fill into a read-only source fails.
#[test]
fn test_fill_read_only() {
    let mut constant = ConstantStorage::new(2, 1.0);
    assert_eq!(
        sequence::fill(&DBL, &2.0, &mut constant),
        Err(AlgebraError::ReadOnly)
    );
}

/// Test copy between storage kinds with a size check.
#[test]
fn test_copy() {
    let src = GeneratedStorage::new(4, |i| i as i32 * 10);
    let mut dest = ArrayStorage::new(4, 0);
    sequence::copy(&src, &mut dest).unwrap();
    assert_eq!(dest.as_slice(), &[0, 10, 20, 30]);

    let mut short = ArrayStorage::new(3, 0);
    assert_eq!(
        sequence::copy(&src, &mut short),
        Err(AlgebraError::SizeMismatch {
            expected: 4,
            got: 3
        })
    );
}

/// Test in-place reversal for odd and even lengths.
#[test]
fn test_reverse() {
    let mut odd = ArrayStorage::from_vec(vec![1, 2, 3]);
    sequence::reverse(&mut odd).unwrap();
    assert_eq!(odd.as_slice(), &[3, 2, 1]);

    let mut even = ArrayStorage::from_vec(vec![1, 2, 3, 4]);
    sequence::reverse(&mut even).unwrap();
    assert_eq!(even.as_slice(), &[4, 3, 2, 1]);
}

// ============================================================================
// Transform and Generation Tests
// ============================================================================

/// Test a transform between algebras.
#[test]
fn test_transform_across_algebras() {
    let src = ArrayStorage::from_vec(vec![1.0, -2.0, 0.5]);
    let mut dest = ArrayStorage::new(3, Complex::new(0.0, 0.0));
    sequence::transform(&DBL, &CDBL, |x| Complex::new(0.0, *x), &src, &mut dest).unwrap();
    assert_eq!(dest.as_slice()[1], Complex::new(0.0, -2.0));
}

/// Test elementwise addition and scaling.
#[test]
fn test_add_and_scale_elements() {
    let a = ArrayStorage::from_vec(vec![1, 2, 3]);
    let b = ArrayStorage::from_vec(vec![10, 20, 30]);
    let mut out = ArrayStorage::new(3, 0i64);
    sequence::add_elements(&INT64, &a, &b, &mut out).unwrap();
    assert_eq!(out.as_slice(), &[11, 22, 33]);

    let mut scaled = ArrayStorage::new(3, 0i64);
    sequence::scale_elements(&INT64, &-2, &out, &mut scaled).unwrap();
    assert_eq!(scaled.as_slice(), &[-22, -44, -66]);

    let mut wrong = ArrayStorage::new(2, 0i64);
    assert!(sequence::add_elements(&INT64, &a, &b, &mut wrong).is_err());
}

/// Test that random generation is reproducible for a seed.
#[test]
fn test_generate_reproducible() {
    let mut first = ArrayStorage::new(16, 0.0f64);
    let mut second = ArrayStorage::new(16, 0.0f64);
    sequence::generate(&DBL, &mut SimpleRng::new(99), &mut first).unwrap();
    sequence::generate(&DBL, &mut SimpleRng::new(99), &mut second).unwrap();
    assert_eq!(first, second);
    assert!(first.as_slice().iter().all(|x| (0.0..1.0).contains(x)));
}

/// Test index-driven generation.
#[test]
fn test_generate_with() {
    let mut data = ArrayStorage::new(5, 0u32);
    sequence::generate_with(&UINT32, |i| (i as u32).pow(2), &mut data).unwrap();
    assert_eq!(data.as_slice(), &[0, 1, 4, 9, 16]);
}

// ============================================================================
// Reduction Tests
// ============================================================================

/// Test sums over several algebras, including the empty sum.
#[test]
fn test_sum() {
    let empty: ArrayStorage<f64> = ArrayStorage::from_vec(Vec::new());
    assert_eq!(sequence::sum(&DBL, &empty).unwrap(), 0.0);

    let ints = GeneratedStorage::new(1000, |i| i as i64 + 1);
    assert_eq!(sequence::sum(&INT64, &ints).unwrap(), 500_500);

    let zs = ArrayStorage::from_vec(vec![Complex::new(1.0, 1.0); 4]);
    assert_eq!(sequence::sum(&CDBL, &zs).unwrap(), Complex::new(4.0, 4.0));
}

/// Test that pairwise summation keeps float error small.
#[test]
fn test_sum_pairwise_accuracy() {
    let tenths = ConstantStorage::new(100_000, 0.1f64);
    assert_relative_eq!(
        sequence::sum(&DBL, &tenths).unwrap(),
        10_000.0,
        epsilon = 1e-9
    );
}

/// Test product and dot product.
#[test]
fn test_product_and_dot() {
    let empty: ArrayStorage<i32> = ArrayStorage::from_vec(Vec::new());
    assert_eq!(sequence::product(&INT32, &empty).unwrap(), 1);

    let a = ArrayStorage::from_vec(vec![1.0, 2.0, 3.0]);
    let b = ArrayStorage::from_vec(vec![4.0, -5.0, 6.0]);
    assert_eq!(sequence::product(&DBL, &a).unwrap(), 6.0);
    assert_eq!(sequence::dot_product(&DBL, &a, &b).unwrap(), 12.0);
}

/// Test extreme-element search, which returns the first occurrence.
#[test]
fn test_min_max_element() {
    let data = ArrayStorage::from_vec(vec![3, -1, 7, -1, 7]);
    assert_eq!(sequence::min_element(&INT32, &data).unwrap(), 1);
    assert_eq!(sequence::max_element(&INT32, &data).unwrap(), 2);

    let empty: ArrayStorage<i32> = ArrayStorage::from_vec(Vec::new());
    assert_eq!(
        sequence::min_element(&INT32, &empty),
        Err(AlgebraError::EmptyInput)
    );
}

/// Test count, find and equal.
#[test]
fn test_count_find_equal() {
    let data = ArrayStorage::from_vec(vec![2u16, 5, 2, 8]);
    assert_eq!(sequence::count(&UINT16, &2, &data).unwrap(), 2);
    assert_eq!(sequence::find(&UINT16, &8, &data).unwrap(), Some(3));
    assert_eq!(sequence::find(&UINT16, &9, &data).unwrap(), None);

    let same = GeneratedStorage::new(4, |i| [2u16, 5, 2, 8][i]);
    assert!(sequence::equal(&UINT16, &data, &same).unwrap());
    let shorter = ArrayStorage::from_vec(vec![2u16, 5]);
    assert!(!sequence::equal(&UINT16, &data, &shorter).unwrap());
}

// ============================================================================
// Sorting and Searching Tests
// ============================================================================

/// Test ascending and descending sorts.
#[test]
fn test_sort_orders() {
    let mut data = ArrayStorage::from_vec(vec![3.5, -1.0, 2.0, 0.0]);
    sort::sort(&DBL, &mut data).unwrap();
    assert_eq!(data.as_slice(), &[-1.0, 0.0, 2.0, 3.5]);
    assert!(sort::is_sorted(&DBL, &data).unwrap());

    sort::sort_descending(&DBL, &mut data).unwrap();
    assert_eq!(data.as_slice(), &[3.5, 2.0, 0.0, -1.0]);
    assert!(!sort::is_sorted(&DBL, &data).unwrap());
}

/// Test that the sort is stable.
#[test]
fn test_sort_by_stable() {
    let mut pairs = ArrayStorage::from_vec(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
    sort::sort_by(&mut pairs, |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0)).unwrap();
    assert_eq!(
        pairs.into_vec(),
        vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]
    );
}

/// Test sorting a view sorts only the viewed range.
#[test]
fn test_sort_through_view() {
    let mut data = ArrayStorage::from_vec(vec![9i8, 4, 3, 2, 1, 0]);
    {
        let mut window = TrimmedDataSource::new(&mut data, 1, 4).unwrap();
        sort::sort(&INT8, &mut window).unwrap();
    }
    assert_eq!(data.as_slice(), &[9, 1, 2, 3, 4, 0]);
}

/// Test the sorting permutation.
#[test]
fn test_sort_indices() {
    let data = ArrayStorage::from_vec(vec![30u64, 10, 20]);
    assert_eq!(sort::sort_indices(&UINT64, &data).unwrap(), vec![1, 2, 0]);
}

/// Test binary search hits and insertion points.
#[test]
fn test_binary_search() {
    let data = ArrayStorage::from_vec(vec![1, 3, 5, 7]);
    assert_eq!(sort::binary_search(&INT32, &5, &data).unwrap(), Ok(2));
    assert_eq!(sort::binary_search(&INT32, &4, &data).unwrap(), Err(2));
    assert_eq!(sort::binary_search(&INT32, &0, &data).unwrap(), Err(0));
    assert_eq!(sort::binary_search(&INT32, &9, &data).unwrap(), Err(4));
}
