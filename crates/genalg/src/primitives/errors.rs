//! Error types for genalg operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while running a
//! generic algorithm: storage addressing, shape constraints, numeric failures,
//! and builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index and size, row and column counts).
//! * **Single type**: Every layer reports through [`AlgebraError`] so `?` composes across layers.
//! * **No-std**: Uses `alloc::string::String` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Storage errors**: Out-of-range access, read-only sources, IO failures.
//! 2. **Shape errors**: Mismatched sequence sizes and matrix dimensions.
//! 3. **Numeric errors**: Division by zero, singular matrices, overflow, divergence.
//! 4. **Configuration errors**: Invalid or duplicated builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform any validation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for genalg operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// The algorithm needs at least one element.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// An index fell outside `0..size`.
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Size of the data source.
        size: usize,
    },

    /// Two sequences that must have equal length do not.
    SizeMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements.
        got: usize,
    },

    /// A view was requested outside the bounds of its parent source.
    InvalidRange {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Size of the parent source.
        size: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    ShapeMismatch {
        /// Shape of the left operand as (rows, cols).
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols).
        right: (usize, usize),
    },

    /// The operation is only defined for square matrices.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The matrix has no inverse.
    Singular,

    /// A divisor evaluated to zero.
    DivisionByZero,

    /// The result does not fit in the member type.
    Overflow,

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// An iterative method hit its iteration limit.
    NoConvergence {
        /// Iterations performed.
        iterations: usize,
    },

    /// The data source does not accept writes.
    ReadOnly,

    /// Underlying IO failure of a file-backed source.
    Io(String),

    /// Tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgebraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Index out of bounds: {index} (size is {size})")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "Size mismatch: expected {expected} elements, got {got}")
            }
            Self::InvalidRange { offset, len, size } => {
                write!(
                    f,
                    "Invalid range: offset {offset} with length {len} exceeds size {size}"
                )
            }
            Self::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "Shape mismatch: {}x{} is incompatible with {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {rows}x{cols}")
            }
            Self::Singular => write!(f, "Matrix is singular"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Result overflows the member type"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::NoConvergence { iterations } => {
                write!(f, "No convergence after {iterations} iterations")
            }
            Self::ReadOnly => write!(f, "Data source is read-only"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AlgebraError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for AlgebraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
