//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! Parallel versions of genalg reductions over contiguous storage.

/// Parallel reductions.
pub mod reduce;
