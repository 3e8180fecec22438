//! # fastGenalg — Parallel execution for genalg
//!
//! Extends [`genalg`] with rayon-backed passes: an elementwise
//! [`ParallelTransform`](prelude::ParallelTransform) injected into genalg's
//! transform executor, and parallel reductions over contiguous storage.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastGenalg::prelude::*;
//! use genalg::prelude::*;
//!
//! let src = ArrayStorage::from_vec((0..10_000).map(|i| i as f64).collect());
//! let mut dest = ArrayStorage::new(10_000, 0.0f64);
//!
//! let transform = ParallelTransform::builder()
//!     .min_parallel_len(1024) // Parallelize inputs of at least 1024 elements
//!     .build()?;
//!
//! transform.apply(&src, &mut dest, |x: &f64| x * 2.0)?;
//! assert_eq!(dest.as_slice()[4999], 9998.0);
//!
//! let total = sum_parallel(&INT64, &ArrayStorage::from_vec(vec![1i64, 2, 3, 4]))?;
//! assert_eq!(total, 10);
//! # Result::<(), AlgebraError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): rayon parallelism. Without it every operation runs sequentially.
//! * `dev`: re-exports internal modules for integration tests.

#![allow(non_snake_case)]

// Layer 3: Algorithms - parallel reductions.
mod algorithms;

// Layer 4: Engine - parallel passes.
mod engine;

// High-level fluent API for parallel transforms.
mod api;

// Standard fastGenalg prelude.
pub mod prelude {
    pub use crate::algorithms::reduce::{dot_product_parallel, sum_parallel};
    pub use crate::api::{ParallelTransform, ParallelTransformBuilder};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
