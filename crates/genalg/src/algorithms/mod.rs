//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! Generic algorithms written once against capability bounds and storage
//! abstractions: sequence operations, sorting, statistics, linear algebra,
//! number theory, cardinal sines, root finding and clustering.

/// Elementwise and reducing sequence operations.
pub mod sequence;

/// Sorting and searching.
pub mod sort;

/// Descriptive statistics.
pub mod statistics;

/// Determinant, inverse, solve.
pub mod linear;

/// Divisibility, primality, integer sequences.
pub mod number_theory;

/// Cardinal sine functions.
pub mod special;

/// Newton-Raphson and bisection.
pub mod roots;

/// K-means clustering.
pub mod cluster;
