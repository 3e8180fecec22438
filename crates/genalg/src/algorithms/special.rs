//! Cardinal sine functions.
//!
//! ## Purpose
//!
//! `sinc(x) = sin(x)/x` and its hyperbolic counterpart `sinch(x) = sinh(x)/x`,
//! plus the normalized `pi`-scaled variants. All are entire functions whose
//! removable singularity at zero evaluates to one.
//!
//! ## Design notes
//!
//! * **Series near zero**: Below [`SERIES_THRESHOLD`] in norm the quotient loses digits to
//!   cancellation, so the Taylor series `1 ∓ x²/6 + x⁴/120` is used instead.
//! * **Generic**: `sinc` and `sinch` work for any algebra with the needed capabilities,
//!   complex numbers included.

// Internal dependencies
use crate::algebra::traits::{
    Additive, FromCount, Hyperbolic, Invertible, Norm, RealConstants, Trigonometric,
};
use crate::primitives::errors::AlgebraError;

/// Norm below which the Taylor series replaces the quotient.
pub const SERIES_THRESHOLD: f64 = 1.0e-4;

// ============================================================================
// Cardinal Sines
// ============================================================================

/// `sin(x) / x`, with `sinc(0) = 1`.
pub fn sinc<A>(alg: &A, x: &A::Member) -> Result<A::Member, AlgebraError>
where
    A: Trigonometric + Additive + Invertible + FromCount + Norm,
{
    if alg.norm(x) < SERIES_THRESHOLD {
        return series(alg, x, false);
    }
    alg.divide(&alg.sin(x), x)
}

/// `sinh(x) / x`, with `sinch(0) = 1`.
pub fn sinch<A>(alg: &A, x: &A::Member) -> Result<A::Member, AlgebraError>
where
    A: Hyperbolic + Additive + Invertible + FromCount + Norm,
{
    if alg.norm(x) < SERIES_THRESHOLD {
        return series(alg, x, true);
    }
    alg.divide(&alg.sinh(x), x)
}

/// Normalized sinc `sin(pi x) / (pi x)`; zero at every non-zero integer.
pub fn sincpi<A>(alg: &A, x: &A::Member) -> Result<A::Member, AlgebraError>
where
    A: Trigonometric + Additive + Invertible + FromCount + Norm + RealConstants,
{
    sinc(alg, &alg.multiply(&alg.pi(), x))
}

/// Normalized hyperbolic sinc `sinh(pi x) / (pi x)`.
pub fn sinchpi<A>(alg: &A, x: &A::Member) -> Result<A::Member, AlgebraError>
where
    A: Hyperbolic + Additive + Invertible + FromCount + Norm + RealConstants,
{
    sinch(alg, &alg.multiply(&alg.pi(), x))
}

/// `1 ∓ x²/6 + x⁴/120` (minus for sinc, plus for sinch).
fn series<A>(alg: &A, x: &A::Member, hyperbolic: bool) -> Result<A::Member, AlgebraError>
where
    A: Additive + Invertible + FromCount,
{
    let x2 = alg.multiply(x, x);
    let x4 = alg.multiply(&x2, &x2);
    let second = alg.divide(&x2, &alg.from_count(6)?)?;
    let fourth = alg.divide(&x4, &alg.from_count(120)?)?;
    let one = alg.one();
    let head = if hyperbolic {
        alg.add(&one, &second)
    } else {
        alg.subtract(&one, &second)
    };
    Ok(alg.add(&head, &fourth))
}
