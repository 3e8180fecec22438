//! Layer 4: Engine
//!
//! # Purpose
//!
//! Parallel passes injected into the genalg execution engine.

/// Parallel transform pass.
pub mod executor;
