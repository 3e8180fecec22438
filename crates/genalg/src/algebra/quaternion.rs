//! Quaternion algebra (Hamilton's non-commutative division ring).
//!
//! ## Purpose
//!
//! [`QuaternionAlgebra<T>`] operates on [`Quaternion<T>`] members
//! `r + i·x + j·y + k·z`. It is the test case for algorithms that must not
//! assume commutative multiplication.
//!
//! ## Design notes
//!
//! * **Right division**: `divide(a, b)` is `a * b^-1`.
//! * **Exponential**: Closed form `e^r (cos|v| + v/|v| sin|v|)` for vector part `v`.
//!
//! ## Invariants
//!
//! * `i*j = k`, `j*k = i`, `k*i = j`, `i*i = j*j = k*k = -1`.
//! * `norm(a * b) == norm(a) * norm(b)` up to rounding.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algebra::real::RealMember;
use crate::algebra::traits::{
    Additive, Algebra, Conjugate, Exponential, FromCount, Invertible, Multiplicative, Norm,
    RandomSource,
};
use crate::primitives::codec::FixedWidthCodec;
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;

// ============================================================================
// Member Type
// ============================================================================

/// A quaternion `r + i·i + j·j + k·k`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion<T> {
    /// Real part.
    pub r: T,
    /// Coefficient of `i`.
    pub i: T,
    /// Coefficient of `j`.
    pub j: T,
    /// Coefficient of `k`.
    pub k: T,
}

impl<T> Quaternion<T> {
    /// Build a quaternion from its four components.
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { r, i, j, k }
    }
}

impl<T: FixedWidthCodec> FixedWidthCodec for Quaternion<T> {
    const WIDTH: usize = 4 * T::WIDTH;

    fn encode(&self, buf: &mut [u8]) {
        let w = T::WIDTH;
        self.r.encode(&mut buf[..w]);
        self.i.encode(&mut buf[w..2 * w]);
        self.j.encode(&mut buf[2 * w..3 * w]);
        self.k.encode(&mut buf[3 * w..4 * w]);
    }

    fn decode(buf: &[u8]) -> Self {
        let w = T::WIDTH;
        Self {
            r: T::decode(&buf[..w]),
            i: T::decode(&buf[w..2 * w]),
            j: T::decode(&buf[2 * w..3 * w]),
            k: T::decode(&buf[3 * w..4 * w]),
        }
    }
}

// ============================================================================
// Quaternion Algebra
// ============================================================================

/// Algebra of quaternions with components of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuaternionAlgebra<T>(PhantomData<T>);

impl<T> QuaternionAlgebra<T> {
    /// The algebra value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// Quaternions with `f64` components.
pub type QuaternionFloat64Algebra = QuaternionAlgebra<f64>;

impl<T: RealMember> QuaternionAlgebra<T> {
    fn norm_squared(a: &Quaternion<T>) -> T {
        a.r * a.r + a.i * a.i + a.j * a.j + a.k * a.k
    }

    fn scale(a: &Quaternion<T>, s: T) -> Quaternion<T> {
        Quaternion::new(a.r * s, a.i * s, a.j * s, a.k * s)
    }
}

impl<T: RealMember> Algebra for QuaternionAlgebra<T> {
    type Member = Quaternion<T>;

    fn name(&self) -> &'static str {
        "Quaternion"
    }

    fn construct(&self) -> Quaternion<T> {
        self.zero()
    }

    fn is_equal(&self, a: &Quaternion<T>, b: &Quaternion<T>) -> bool {
        a == b
    }
}

impl<T: RealMember> Additive for QuaternionAlgebra<T> {
    fn zero(&self) -> Quaternion<T> {
        Quaternion::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    fn add(&self, a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
        Quaternion::new(a.r + b.r, a.i + b.i, a.j + b.j, a.k + b.k)
    }

    fn subtract(&self, a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
        Quaternion::new(a.r - b.r, a.i - b.i, a.j - b.j, a.k - b.k)
    }

    fn negate(&self, a: &Quaternion<T>) -> Quaternion<T> {
        Quaternion::new(-a.r, -a.i, -a.j, -a.k)
    }
}

impl<T: RealMember> Multiplicative for QuaternionAlgebra<T> {
    fn one(&self) -> Quaternion<T> {
        Quaternion::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    fn multiply(&self, a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
        Quaternion::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
            a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
            a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
        )
    }
}

impl<T: RealMember> Invertible for QuaternionAlgebra<T> {
    fn divide(&self, a: &Quaternion<T>, b: &Quaternion<T>) -> Result<Quaternion<T>, AlgebraError> {
        let inverse = self.invert(b)?;
        Ok(self.multiply(a, &inverse))
    }

    fn invert(&self, a: &Quaternion<T>) -> Result<Quaternion<T>, AlgebraError> {
        let n2 = Self::norm_squared(a);
        if n2.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::scale(&self.conjugate(a), T::one() / n2))
    }
}

impl<T: RealMember> Conjugate for QuaternionAlgebra<T> {
    fn conjugate(&self, a: &Quaternion<T>) -> Quaternion<T> {
        Quaternion::new(a.r, -a.i, -a.j, -a.k)
    }
}

impl<T: RealMember> Norm for QuaternionAlgebra<T> {
    fn norm(&self, a: &Quaternion<T>) -> f64 {
        Self::norm_squared(a).sqrt().to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: RealMember> Exponential for QuaternionAlgebra<T> {
    fn exp(&self, a: &Quaternion<T>) -> Quaternion<T> {
        let er = a.r.exp();
        let v = (a.i * a.i + a.j * a.j + a.k * a.k).sqrt();
        if v.is_zero() {
            return Quaternion::new(er, T::zero(), T::zero(), T::zero());
        }
        let s = er * v.sin() / v;
        Quaternion::new(er * v.cos(), a.i * s, a.j * s, a.k * s)
    }

    fn ln(&self, a: &Quaternion<T>) -> Quaternion<T> {
        let n = Self::norm_squared(a).sqrt();
        let v = (a.i * a.i + a.j * a.j + a.k * a.k).sqrt();
        if v.is_zero() {
            return Quaternion::new(n.ln(), T::zero(), T::zero(), T::zero());
        }
        let s = (a.r / n).acos() / v;
        Quaternion::new(n.ln(), a.i * s, a.j * s, a.k * s)
    }

    fn pow(&self, a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
        self.exp(&self.multiply(&self.ln(a), b))
    }
}

impl<T: RealMember> FromCount for QuaternionAlgebra<T> {
    fn from_count(&self, n: usize) -> Result<Quaternion<T>, AlgebraError> {
        let r = T::from(n).unwrap_or_else(T::infinity);
        Ok(Quaternion::new(r, T::zero(), T::zero(), T::zero()))
    }
}

impl<T: RealMember> RandomSource for QuaternionAlgebra<T> {
    fn random(&self, rng: &mut SimpleRng) -> Quaternion<T> {
        let mut draw = || T::from(rng.next_f64()).unwrap_or_else(T::zero);
        Quaternion::new(draw(), draw(), draw(), draw())
    }
}
