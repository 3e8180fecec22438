//! # genalg — Capability-based generic numeric algebra for Rust
//!
//! Write a numeric algorithm once and run it unmodified over reals, integers
//! of every width and signedness, complex numbers, quaternions, octonions and matrices.
//!
//! ## What is an algebra?
//!
//! An *algebra* is a stateless value that owns the operations on one member
//! type: [`DBL`](algebra::DBL) operates on `f64`, [`INT8`](algebra::INT8) on
//! `i8`, [`CDBL`](algebra::CDBL) on complex numbers, and so on. Each capability
//! (addition, ordering, trigonometry, random generation, ...) is a trait. An
//! algorithm names the capabilities it needs as trait bounds, and any algebra
//! that has them can run it.
//!
//! Algorithms read and write members through an
//! [`IndexedDataSource`](prelude::IndexedDataSource), so they work the same over
//! arrays, files, computed sequences and views.
//!
//! ## Quick Start
//!
//! ```rust
//! use genalg::prelude::*;
//! use genalg::algorithms::{sequence, sort, statistics};
//!
//! let mut data = ArrayStorage::from_vec(vec![3.0, 1.0, 4.0, 1.0, 5.0]);
//!
//! let total = sequence::sum(&DBL, &data)?;
//! assert_eq!(total, 14.0);
//!
//! sort::sort(&DBL, &mut data)?;
//! assert_eq!(data.as_slice(), &[1.0, 1.0, 3.0, 4.0, 5.0]);
//!
//! let m = statistics::mean(&DBL, &data)?;
//! assert_eq!(m, 2.8);
//! # Result::<(), AlgebraError>::Ok(())
//! ```
//!
//! The same `sum` runs over 8-bit integers:
//!
//! ```rust
//! use genalg::prelude::*;
//! use genalg::algorithms::sequence;
//!
//! let bytes = ArrayStorage::from_vec(vec![1i8, 2, 3]);
//! assert_eq!(sequence::sum(&INT8, &bytes)?, 6);
//! # Result::<(), AlgebraError>::Ok(())
//! ```
//!
//! ### Storage configuration
//!
//! ```rust
//! use genalg::prelude::*;
//!
//! let allocator = StorageBuilder::new()
//!     .file_threshold(1_000_000) // sequences this long or longer live in a temp file
//!     .build()?;
//!
//! let small = allocator.allocate(10, 0.0f64)?;
//! assert!(!small.is_file_backed());
//! # Result::<(), AlgebraError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, AlgebraError>`; the `?`
//! operator composes them across storage, algebra and algorithm layers.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library (and file-backed storage):
//!
//! ```toml
//! [dependencies]
//! genalg = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - storage, codecs, errors, random source.
mod primitives;

// Layer 2: Algebra - capability traits and concrete algebras.
pub mod algebra;

// Layer 3: Algorithms - generic algorithm library.
pub mod algorithms;

// Layer 4: Engine - execution and allocation.
mod engine;

// High-level fluent API for configuration.
mod api;

// Standard genalg prelude.
pub mod prelude {
    pub use crate::algebra::traits::{
        Absolute, Additive, Algebra, Averageable, Bounded, Conjugate, Euclidean, Exponential,
        FromCount, Hyperbolic, Invertible, Multiplicative, Norm, Ordered, RandomSource,
        RealConstants, RealScalar, Roots, Signed, Trigonometric,
    };
    pub use crate::algebra::{
        CDBL, DBL, FLT, INT8, INT16, INT32, INT64, ODBL, QDBL, UINT8, UINT16, UINT32, UINT64,
    };
    pub use crate::api::*;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
