//! Transform executor with an injectable inner pass.
//!
//! ## Purpose
//!
//! Runs the elementwise transform `dest[i] = f(src[i])`. Over arbitrary
//! indexed data sources it walks element by element; over contiguous storage
//! it hands whole slices to a pass function, which extension crates replace
//! with a parallel implementation.
//!
//! ## Design notes
//!
//! * **Injection**: `custom_transform_pass` holds a plain function pointer; `None` selects
//!   the sequential pass in this module.
//! * **Shared closure**: The element function is passed as `&(dyn Fn + Sync)` so a pass may
//!   call it from several threads.
//!
//! ## Key concepts
//!
//! * **Pass**: A function that fills a destination slice from a source slice.
//! * **Contiguous path**: Both sides implement [`ContiguousStorage`].
//!
//! ## Invariants
//!
//! * Source and destination sizes are checked before any pass runs.
//!
//! ## Non-goals
//!
//! * This module does not spawn threads itself.

// External dependencies
use core::fmt::{self, Debug, Formatter};
use tracing::debug;

// Internal dependencies
use crate::primitives::errors::AlgebraError;
use crate::primitives::storage::{ContiguousStorage, IndexedDataSource, check_same_size};

// ============================================================================
// Pass Types
// ============================================================================

/// Signature of a transform pass over slices.
pub type TransformPassFn<U, V> = fn(&[U], &mut [V], &(dyn Fn(&U) -> V + Sync));

/// The default single-threaded pass.
pub fn transform_pass_sequential<U, V>(src: &[U], dest: &mut [V], f: &(dyn Fn(&U) -> V + Sync)) {
    for (out, x) in dest.iter_mut().zip(src) {
        *out = f(x);
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Elementwise transform runner.
pub struct TransformExecutor<U, V> {
    /// Replacement for the sequential pass on contiguous storage.
    #[doc(hidden)]
    pub custom_transform_pass: Option<TransformPassFn<U, V>>,
}

impl<U, V> Debug for TransformExecutor<U, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformExecutor")
            .field("custom_transform_pass", &self.custom_transform_pass.is_some())
            .finish()
    }
}

impl<U, V> Clone for TransformExecutor<U, V> {
    fn clone(&self) -> Self {
        Self {
            custom_transform_pass: self.custom_transform_pass,
        }
    }
}

impl<U, V> Default for TransformExecutor<U, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U, V> TransformExecutor<U, V> {
    /// An executor using the sequential pass.
    pub fn new() -> Self {
        Self {
            custom_transform_pass: None,
        }
    }

    /// Install (or with `None`, remove) a custom pass.
    pub fn custom_transform_pass(mut self, pass: Option<TransformPassFn<U, V>>) -> Self {
        self.custom_transform_pass = pass;
        self
    }

    /// `dest[i] = f(src[i])` over any indexed data sources.
    pub fn transform<S, D, F>(&self, src: &S, dest: &mut D, f: F) -> Result<(), AlgebraError>
    where
        S: IndexedDataSource<U> + ?Sized,
        D: IndexedDataSource<V> + ?Sized,
        F: Fn(&U) -> V,
    {
        check_same_size(src.size(), dest.size())?;
        for i in 0..src.size() {
            dest.set(i, &f(&src.get(i)?))?;
        }
        Ok(())
    }

    /// `dest[i] = f(src[i])` over contiguous storage, through the configured pass.
    pub fn transform_contiguous<S, D, F>(
        &self,
        src: &S,
        dest: &mut D,
        f: F,
    ) -> Result<(), AlgebraError>
    where
        S: ContiguousStorage<U> + ?Sized,
        D: ContiguousStorage<V> + ?Sized,
        F: Fn(&U) -> V + Sync,
    {
        let input = src.as_slice();
        let output = dest.as_mut_slice();
        check_same_size(input.len(), output.len())?;
        match self.custom_transform_pass {
            Some(pass) => {
                debug!(len = input.len(), "running custom transform pass");
                pass(input, output, &f);
            }
            None => transform_pass_sequential(input, output, &f),
        }
        Ok(())
    }
}
