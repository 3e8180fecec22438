//! High-level API: builders and re-exports.
//!
//! ## Purpose
//!
//! This module is the user-facing configuration surface. It provides the
//! fluent [`StorageBuilder`] that produces a [`StorageAllocator`], and
//! re-exports the types most callers need.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every parameter.
//! * **Deferred validation**: Problems are recorded while chaining and reported by `.build()`.
//! * **Single assignment**: Setting a parameter twice is a `DuplicateParameter` error.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`StorageBuilder`] via `StorageBuilder::new()`.
//! 2. Chain configuration methods (`.file_threshold()`, `.directory()`).
//! 3. Call `.build()` to obtain a validated [`StorageAllocator`].

// Feature-gated imports
#[cfg(feature = "std")]
use std::path::PathBuf;

// External dependencies
pub use num_complex::Complex;

// Publicly re-exported types
pub use crate::algebra::complex::{ComplexAlgebra, ComplexFloat32Algebra, ComplexFloat64Algebra};
pub use crate::algebra::integer::{
    IntegerAlgebra, SignedInt8Algebra, SignedInt16Algebra, SignedInt32Algebra, SignedInt64Algebra,
    UnsignedInt8Algebra, UnsignedInt16Algebra, UnsignedInt32Algebra, UnsignedInt64Algebra,
};
pub use crate::algebra::matrix::{Matrix, MatrixAlgebra};
pub use crate::algebra::octonion::{Octonion, OctonionAlgebra, OctonionFloat64Algebra};
pub use crate::algebra::quaternion::{Quaternion, QuaternionAlgebra, QuaternionFloat64Algebra};
pub use crate::algebra::real::{Float32Algebra, Float64Algebra, RealAlgebra};
pub use crate::algorithms::cluster::{KMeansConfig, KMeansResult};
pub use crate::algorithms::roots::{Root, RootConfig};
pub use crate::engine::allocator::{AllocatedStorage, StorageAllocator};
pub use crate::engine::executor::{TransformExecutor, TransformPassFn};
pub use crate::primitives::codec::FixedWidthCodec;
pub use crate::primitives::errors::AlgebraError;
pub use crate::primitives::random::SimpleRng;
pub use crate::primitives::storage::{
    ArrayStorage, ConstantStorage, ContiguousStorage, GeneratedStorage, IndexedDataSource,
    ReversedDataSource, StridedDataSource, TrimmedDataSource, to_vec,
};

#[cfg(feature = "std")]
pub use crate::primitives::file_storage::FileStorage;

// ============================================================================
// Storage Builder
// ============================================================================

/// Fluent builder for a [`StorageAllocator`].
#[derive(Debug, Clone, Default)]
pub struct StorageBuilder {
    /// Element count at which storage moves to a file.
    pub file_threshold: Option<usize>,

    /// Directory for temporary files.
    #[cfg(feature = "std")]
    pub directory: Option<PathBuf>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl StorageBuilder {
    /// Create a builder with default parameters (everything in memory).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequences of at least `threshold` elements are stored in a file.
    pub fn file_threshold(mut self, threshold: usize) -> Self {
        if self.file_threshold.is_some() {
            self.duplicate_param = Some("file_threshold");
        }
        self.file_threshold = Some(threshold);
        self
    }

    /// Keep file-backed storage in `dir` instead of the system temporary directory.
    #[cfg(feature = "std")]
    pub fn directory<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        if self.directory.is_some() {
            self.duplicate_param = Some("directory");
        }
        self.directory = Some(dir.into());
        self
    }

    /// Validate the configuration and produce the allocator.
    pub fn build(self) -> Result<StorageAllocator, AlgebraError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(AlgebraError::DuplicateParameter { parameter });
        }

        #[cfg(feature = "std")]
        if let Some(dir) = &self.directory {
            if !dir.is_dir() {
                return Err(AlgebraError::InvalidInput(format!(
                    "storage directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        let defaults = StorageAllocator::default();
        Ok(StorageAllocator {
            file_threshold: self.file_threshold.unwrap_or(defaults.file_threshold),
            #[cfg(feature = "std")]
            directory: self.directory,
        })
    }
}
