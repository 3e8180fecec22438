//! High-level API for parallel transforms.
//!
//! ## Purpose
//!
//! This module provides [`ParallelTransform`], the entry point for running an
//! elementwise transform across CPU cores. It configures a genalg
//! `TransformExecutor` and injects the rayon pass when the input is large
//! enough to benefit.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults.
//! * **Threshold**: Inputs shorter than `min_parallel_len` run sequentially, since thread
//!   coordination dominates for small slices.
//! * **Validated**: Duplicate parameters are reported by `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `ParallelTransform::builder()`.
//! 2. Chain `.parallel()` and `.min_parallel_len()`.
//! 3. Call `.build()` and then `.apply(src, dest, f)`.

// External dependencies
use tracing::debug;

// Export dependencies from genalg crate
use genalg::prelude::{AlgebraError, ContiguousStorage, TransformExecutor};

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::transform_pass_parallel;

/// Default minimum input length for parallel execution.
const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`ParallelTransform`].
#[derive(Debug, Clone, Default)]
pub struct ParallelTransformBuilder {
    /// Enable parallel execution (default: true).
    pub parallel: Option<bool>,

    /// Minimum input length for the parallel pass.
    pub min_parallel_len: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl ParallelTransformBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel execution.
    pub fn parallel(mut self, enabled: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(enabled);
        self
    }

    /// Inputs shorter than `len` run sequentially.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        if self.min_parallel_len.is_some() {
            self.duplicate_param = Some("min_parallel_len");
        }
        self.min_parallel_len = Some(len);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<ParallelTransform, AlgebraError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(AlgebraError::DuplicateParameter { parameter });
        }
        Ok(ParallelTransform {
            parallel: self.parallel.unwrap_or(true),
            min_parallel_len: self.min_parallel_len.unwrap_or(DEFAULT_MIN_PARALLEL_LEN),
        })
    }
}

// ============================================================================
// Parallel Transform
// ============================================================================

/// Elementwise transform that runs on the rayon thread pool for large inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelTransform {
    parallel: bool,
    min_parallel_len: usize,
}

impl Default for ParallelTransform {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl ParallelTransform {
    /// Start configuring a transform.
    pub fn builder() -> ParallelTransformBuilder {
        ParallelTransformBuilder::new()
    }

    /// True when an input of `len` elements would use the parallel pass.
    pub fn runs_parallel(&self, len: usize) -> bool {
        cfg!(feature = "cpu") && self.parallel && len >= self.min_parallel_len
    }

    /// `dest[i] = f(src[i])`.
    pub fn apply<U, V, S, D, F>(&self, src: &S, dest: &mut D, f: F) -> Result<(), AlgebraError>
    where
        U: Sync,
        V: Send,
        S: ContiguousStorage<U> + ?Sized,
        D: ContiguousStorage<V> + ?Sized,
        F: Fn(&U) -> V + Sync,
    {
        let len = src.as_slice().len();
        #[allow(unused_mut)]
        let mut executor = TransformExecutor::<U, V>::new();

        #[cfg(feature = "cpu")]
        if self.runs_parallel(len) {
            executor = executor.custom_transform_pass(Some(transform_pass_parallel::<U, V>));
        }

        debug!(
            len,
            parallel = executor.custom_transform_pass.is_some(),
            "parallel transform"
        );
        executor.transform_contiguous(src, dest, f)
    }
}
