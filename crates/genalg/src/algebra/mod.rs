//! Layer 2: Algebra
//!
//! # Purpose
//!
//! This layer defines the capability traits and the concrete algebras that
//! implement them: reals, fixed-width integers, complex numbers, quaternions,
//! octonions, and matrices over any of these.
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
//! Layer 2: Algebra ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Capability traits.
pub mod traits;

/// Floating-point real algebras.
pub mod real;

/// Fixed-width integer algebras.
pub mod integer;

/// Complex algebras.
pub mod complex;

/// Quaternion algebra.
pub mod quaternion;

/// Octonion algebra.
pub mod octonion;

/// Matrices over an element algebra.
pub mod matrix;

// ============================================================================
// Algebra Instances
// ============================================================================

use complex::ComplexFloat64Algebra;
use integer::{
    SignedInt8Algebra, SignedInt16Algebra, SignedInt32Algebra, SignedInt64Algebra,
    UnsignedInt8Algebra, UnsignedInt16Algebra, UnsignedInt32Algebra, UnsignedInt64Algebra,
};
use octonion::OctonionFloat64Algebra;
use quaternion::QuaternionFloat64Algebra;
use real::{Float32Algebra, Float64Algebra};

/// Single-precision reals.
pub const FLT: Float32Algebra = Float32Algebra::new();
/// Double-precision reals.
pub const DBL: Float64Algebra = Float64Algebra::new();
/// Double-precision complex numbers.
pub const CDBL: ComplexFloat64Algebra = ComplexFloat64Algebra::new();
/// Double-precision quaternions.
pub const QDBL: QuaternionFloat64Algebra = QuaternionFloat64Algebra::new();
/// Double-precision octonions.
pub const ODBL: OctonionFloat64Algebra = OctonionFloat64Algebra::new();
/// Signed 8-bit integers.
pub const INT8: SignedInt8Algebra = SignedInt8Algebra::new();
/// Signed 16-bit integers.
pub const INT16: SignedInt16Algebra = SignedInt16Algebra::new();
/// Signed 32-bit integers.
pub const INT32: SignedInt32Algebra = SignedInt32Algebra::new();
/// Signed 64-bit integers.
pub const INT64: SignedInt64Algebra = SignedInt64Algebra::new();
/// Unsigned 8-bit integers.
pub const UINT8: UnsignedInt8Algebra = UnsignedInt8Algebra::new();
/// Unsigned 16-bit integers.
pub const UINT16: UnsignedInt16Algebra = UnsignedInt16Algebra::new();
/// Unsigned 32-bit integers.
pub const UINT32: UnsignedInt32Algebra = UnsignedInt32Algebra::new();
/// Unsigned 64-bit integers.
pub const UINT64: UnsignedInt64Algebra = UnsignedInt64Algebra::new();
