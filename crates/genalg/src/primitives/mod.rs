//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the storage abstraction, member codecs, the random
//! source, and the shared error type. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Indexed data sources and views.
pub mod storage;

/// File-backed storage.
#[cfg(feature = "std")]
pub mod file_storage;

/// Fixed-width member encoding.
pub mod codec;

/// Deterministic random source.
pub mod random;
