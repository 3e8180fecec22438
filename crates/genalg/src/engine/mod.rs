//! Layer 4: Engine
//!
//! # Purpose
//!
//! Execution and allocation machinery shared by the algorithms: the
//! transform executor with its injectable pass, and the storage allocator
//! that picks a backend by size.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Transform executor.
pub mod executor;

/// Storage allocation policy.
pub mod allocator;
