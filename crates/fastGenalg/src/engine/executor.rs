//! Parallel transform pass for the genalg executor.
//!
//! ## Purpose
//!
//! This module provides the parallel pass that is injected into genalg's
//! `TransformExecutor`. It splits the destination slice across the rayon
//! thread pool and applies the element function independently to each
//! element.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential transform pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Integration**: Plugs into the genalg executor via the `TransformPassFn` hook.
//!
//! ## Invariants
//!
//! * Source and destination have equal lengths (checked by the executor).
//! * Output position `i` depends only on input position `i`.
//!
//! ## Non-goals
//!
//! * This module does not validate sizes (handled by the executor).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// ============================================================================
// Parallel Transform Pass
// ============================================================================

/// Fill `dest[i] = f(src[i])` on the rayon thread pool.
#[cfg(feature = "cpu")]
pub fn transform_pass_parallel<U, V>(src: &[U], dest: &mut [V], f: &(dyn Fn(&U) -> V + Sync))
where
    U: Sync,
    V: Send,
{
    dest.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(out, x)| *out = f(x));
}
