//! Root finding: Newton-Raphson and bisection.
//!
//! ## Purpose
//!
//! Locates zeros of a caller-supplied function over any algebra with
//! division and a norm. Newton-Raphson also works over complex numbers;
//! bisection needs an ordered algebra.
//!
//! ## Design notes
//!
//! * **Step criterion**: Newton stops when the norm of the last step is at most the tolerance.
//! * **Interval criterion**: Bisection stops when the bracket is at most the tolerance wide,
//!   or when the midpoint is an exact root.
//! * **Validated config**: Tolerance must be positive and finite; at least one iteration.
//!
//! ## Invariants
//!
//! * Bisection keeps `f(lo)` and `f(hi)` of opposite sign throughout.
//!
//! ## Non-goals
//!
//! * Multi-dimensional systems.
//! * Derivative estimation by finite differences.

// External dependencies
use tracing::{debug, trace};

// Internal dependencies
use crate::algebra::traits::{Additive, FromCount, Invertible, Norm, Ordered, Signed};
use crate::primitives::errors::AlgebraError;

// ============================================================================
// Configuration
// ============================================================================

/// Stopping rules shared by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Convergence tolerance on step size (Newton) or bracket width (bisection).
    pub tolerance: f64,

    /// Iteration limit.
    pub max_iterations: usize,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-12,
            max_iterations: 100,
        }
    }
}

impl RootConfig {
    /// Set the tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration limit.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<(), AlgebraError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AlgebraError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(AlgebraError::InvalidInput(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// A located root.
#[derive(Debug, Clone, PartialEq)]
pub struct Root<M> {
    /// The approximate zero.
    pub value: M,

    /// Iterations performed.
    pub iterations: usize,
}

// ============================================================================
// Newton-Raphson
// ============================================================================

/// Newton-Raphson iteration `x <- x - f(x) / f'(x)` from `guess`.
pub fn newton_raphson<A, F, D>(
    alg: &A,
    f: F,
    derivative: D,
    guess: &A::Member,
    config: &RootConfig,
) -> Result<Root<A::Member>, AlgebraError>
where
    A: Additive + Invertible + Norm,
    F: Fn(&A::Member) -> A::Member,
    D: Fn(&A::Member) -> A::Member,
{
    config.validate()?;
    let mut x = guess.clone();
    for iteration in 1..=config.max_iterations {
        let fx = f(&x);
        let dfx = derivative(&x);
        if alg.is_zero(&dfx) {
            return Err(AlgebraError::DivisionByZero);
        }
        let step = alg.divide(&fx, &dfx)?;
        x = alg.subtract(&x, &step);
        let step_norm = alg.norm(&step);
        trace!(iteration, step_norm, "newton step");
        if step_norm <= config.tolerance {
            debug!(iterations = iteration, "newton-raphson converged");
            return Ok(Root {
                value: x,
                iterations: iteration,
            });
        }
    }
    Err(AlgebraError::NoConvergence {
        iterations: config.max_iterations,
    })
}

// ============================================================================
// Bisection
// ============================================================================

/// Bisection on `[lo, hi]`; `f(lo)` and `f(hi)` must differ in sign.
pub fn bisection<A, F>(
    alg: &A,
    f: F,
    lo: &A::Member,
    hi: &A::Member,
    config: &RootConfig,
) -> Result<Root<A::Member>, AlgebraError>
where
    A: Additive + Invertible + Ordered + FromCount + Norm,
    F: Fn(&A::Member) -> A::Member,
{
    config.validate()?;
    let (mut lo, mut hi) = if alg.is_greater(lo, hi) {
        (hi.clone(), lo.clone())
    } else {
        (lo.clone(), hi.clone())
    };

    let sign_lo = alg.signum(&f(&lo));
    let sign_hi = alg.signum(&f(&hi));
    if sign_lo == 0 {
        return Ok(Root {
            value: lo,
            iterations: 0,
        });
    }
    if sign_hi == 0 {
        return Ok(Root {
            value: hi,
            iterations: 0,
        });
    }
    if sign_lo == sign_hi {
        return Err(AlgebraError::InvalidInput(
            "bisection requires f(lo) and f(hi) of opposite sign".into(),
        ));
    }

    let two = alg.from_count(2)?;
    for iteration in 1..=config.max_iterations {
        let mid = alg.divide(&alg.add(&lo, &hi), &two)?;
        let sign_mid = alg.signum(&f(&mid));
        if sign_mid == 0 {
            return Ok(Root {
                value: mid,
                iterations: iteration,
            });
        }
        if sign_mid == sign_lo {
            lo = mid;
        } else {
            hi = mid;
        }
        if alg.norm(&alg.subtract(&hi, &lo)) <= config.tolerance {
            debug!(iterations = iteration, "bisection converged");
            return Ok(Root {
                value: alg.divide(&alg.add(&lo, &hi), &two)?,
                iterations: iteration,
            });
        }
    }
    Err(AlgebraError::NoConvergence {
        iterations: config.max_iterations,
    })
}
