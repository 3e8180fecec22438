//! Real-number algebras over IEEE floating point.
//!
//! ## Purpose
//!
//! [`RealAlgebra<T>`] provides every real capability for any `num_traits::Float`
//! member: `f32` ([`Float32Algebra`]) and `f64` ([`Float64Algebra`]).
//!
//! ## Design notes
//!
//! * **Generic**: One implementation serves both precisions.
//! * **Ordering**: NaN compares equal to everything, so sorting never panics.
//! * **Division**: Dividing by exactly zero is reported instead of producing infinity.
//!
//! ## Invariants
//!
//! * `construct()` and `zero()` return `0.0`.
//! * `random` yields values in `[0, 1)`.

// External dependencies
use core::cmp::Ordering;
use core::fmt::Debug;
use core::marker::PhantomData;
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::algebra::traits::{
    Absolute, Additive, Algebra, Averageable, Bounded, Exponential, FromCount, Hyperbolic,
    Invertible, Multiplicative, Norm, Ordered, RandomSource, RealConstants, RealScalar, Roots,
    Trigonometric,
};
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;

// ============================================================================
// Real Algebra
// ============================================================================

/// Algebra of real numbers represented by the float type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RealAlgebra<T>(PhantomData<T>);

impl<T> RealAlgebra<T> {
    /// The algebra value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// Single-precision reals.
pub type Float32Algebra = RealAlgebra<f32>;

/// Double-precision reals.
pub type Float64Algebra = RealAlgebra<f64>;

/// Float types a [`RealAlgebra`] accepts.
pub trait RealMember: Float + FloatConst + Debug {
    /// Name of the algebra over this type.
    const ALGEBRA_NAME: &'static str;
}

impl RealMember for f32 {
    const ALGEBRA_NAME: &'static str = "Float32";
}

impl RealMember for f64 {
    const ALGEBRA_NAME: &'static str = "Float64";
}

#[inline]
fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

impl<T: RealMember> Algebra for RealAlgebra<T> {
    type Member = T;

    fn name(&self) -> &'static str {
        T::ALGEBRA_NAME
    }

    fn construct(&self) -> T {
        T::zero()
    }

    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: RealMember> Additive for RealAlgebra<T> {
    fn zero(&self) -> T {
        T::zero()
    }

    #[inline]
    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    #[inline]
    fn subtract(&self, a: &T, b: &T) -> T {
        *a - *b
    }

    #[inline]
    fn negate(&self, a: &T) -> T {
        -*a
    }

    #[inline]
    fn is_zero(&self, a: &T) -> bool {
        a.is_zero()
    }
}

impl<T: RealMember> Multiplicative for RealAlgebra<T> {
    fn one(&self) -> T {
        T::one()
    }

    #[inline]
    fn multiply(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    fn power(&self, a: &T, exponent: u32) -> T {
        match i32::try_from(exponent) {
            Ok(e) => a.powi(e),
            Err(_) => a.powf(cast(exponent as f64)),
        }
    }
}

impl<T: RealMember> Invertible for RealAlgebra<T> {
    #[inline]
    fn divide(&self, a: &T, b: &T) -> Result<T, AlgebraError> {
        if b.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(*a / *b)
    }
}

impl<T: RealMember> Ordered for RealAlgebra<T> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

impl<T: RealMember> Absolute for RealAlgebra<T> {
    #[inline]
    fn abs(&self, a: &T) -> T {
        a.abs()
    }
}

impl<T: RealMember> Bounded for RealAlgebra<T> {
    fn min_bound(&self) -> T {
        T::min_value()
    }

    fn max_bound(&self) -> T {
        T::max_value()
    }
}

impl<T: RealMember> Trigonometric for RealAlgebra<T> {
    fn sin(&self, a: &T) -> T {
        a.sin()
    }

    fn cos(&self, a: &T) -> T {
        a.cos()
    }

    fn tan(&self, a: &T) -> T {
        a.tan()
    }

    fn sin_and_cos(&self, a: &T) -> (T, T) {
        a.sin_cos()
    }
}

impl<T: RealMember> Hyperbolic for RealAlgebra<T> {
    fn sinh(&self, a: &T) -> T {
        a.sinh()
    }

    fn cosh(&self, a: &T) -> T {
        a.cosh()
    }

    fn tanh(&self, a: &T) -> T {
        a.tanh()
    }
}

impl<T: RealMember> Exponential for RealAlgebra<T> {
    fn exp(&self, a: &T) -> T {
        a.exp()
    }

    fn ln(&self, a: &T) -> T {
        a.ln()
    }

    fn pow(&self, a: &T, b: &T) -> T {
        a.powf(*b)
    }
}

impl<T: RealMember> Roots for RealAlgebra<T> {
    fn sqrt(&self, a: &T) -> T {
        a.sqrt()
    }

    fn cbrt(&self, a: &T) -> T {
        a.cbrt()
    }
}

impl<T: RealMember> RealConstants for RealAlgebra<T> {
    fn pi(&self) -> T {
        T::PI()
    }

    fn e(&self) -> T {
        T::E()
    }

    fn epsilon(&self) -> T {
        T::epsilon()
    }
}

impl<T: RealMember> RealScalar for RealAlgebra<T> {
    fn from_f64(&self, value: f64) -> T {
        cast(value)
    }

    fn to_f64(&self, a: &T) -> f64 {
        a.to_f64().unwrap_or(f64::NAN)
    }

    fn is_finite(&self, a: &T) -> bool {
        a.is_finite()
    }
}

impl<T: RealMember> FromCount for RealAlgebra<T> {
    fn from_count(&self, n: usize) -> Result<T, AlgebraError> {
        Ok(T::from(n).unwrap_or_else(T::infinity))
    }
}

impl<T: RealMember> Norm for RealAlgebra<T> {
    fn norm(&self, a: &T) -> f64 {
        a.abs().to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: RealMember> RandomSource for RealAlgebra<T> {
    fn random(&self, rng: &mut SimpleRng) -> T {
        let v: T = cast(rng.next_f64());
        // f32 rounding can lift values just under 1.0 up to 1.0
        if v >= T::one() { T::one() - T::epsilon() } else { v }
    }
}

impl<T: RealMember> Averageable for RealAlgebra<T> {
    fn average_two(&self, a: &T, b: &T) -> T {
        let half: T = cast(0.5);
        // Summing first overflows above MAX / 2; halving first flushes subnormals
        let large = T::max_value() * half;
        if a.abs() > large || b.abs() > large {
            *a * half + *b * half
        } else {
            (*a + *b) * half
        }
    }
}
