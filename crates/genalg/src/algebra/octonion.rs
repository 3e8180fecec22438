//! Octonion algebra (the non-associative Cayley-Dickson double of the quaternions).
//!
//! ## Purpose
//!
//! [`OctonionAlgebra<T>`] operates on [`Octonion<T>`] members, stored as a
//! pair of quaternions `(a, b)` meaning `a + b·l`. Octonions are neither
//! commutative nor associative, which makes them the strictest test for
//! algorithms that claim to need only the capabilities they declare.
//!
//! ## Design notes
//!
//! * **Product**: `(a, b)(c, d) = (ac - d̄b, da + bc̄)`.
//! * **Right division**: `divide(a, b)` is `a * b^-1`; octonions are alternative, so
//!   `(a * b^-1) * b == a` still holds.
//!
//! ## Invariants
//!
//! * `norm(a * b) == norm(a) * norm(b)` up to rounding.
//! * `a * conjugate(a)` is real and equals `norm(a)^2`.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algebra::quaternion::{Quaternion, QuaternionAlgebra};
use crate::algebra::real::RealMember;
use crate::algebra::traits::{
    Additive, Algebra, Conjugate, FromCount, Invertible, Multiplicative, Norm, RandomSource,
};
use crate::primitives::codec::FixedWidthCodec;
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;

// ============================================================================
// Member Type
// ============================================================================

/// An octonion `a + b·l` with quaternion halves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Octonion<T> {
    /// The quaternion half on `1, i, j, k`.
    pub a: Quaternion<T>,
    /// The quaternion half on `l, il, jl, kl`.
    pub b: Quaternion<T>,
}

impl<T> Octonion<T> {
    /// Build an octonion from its two quaternion halves.
    pub const fn new(a: Quaternion<T>, b: Quaternion<T>) -> Self {
        Self { a, b }
    }
}

impl<T: Copy> Octonion<T> {
    /// Build an octonion from its eight real components.
    pub fn from_components(c: [T; 8]) -> Self {
        Self {
            a: Quaternion::new(c[0], c[1], c[2], c[3]),
            b: Quaternion::new(c[4], c[5], c[6], c[7]),
        }
    }

    /// The eight real components.
    pub fn components(&self) -> [T; 8] {
        [
            self.a.r, self.a.i, self.a.j, self.a.k, self.b.r, self.b.i, self.b.j, self.b.k,
        ]
    }
}

impl<T: FixedWidthCodec> FixedWidthCodec for Octonion<T> {
    const WIDTH: usize = 2 * Quaternion::<T>::WIDTH;

    fn encode(&self, buf: &mut [u8]) {
        let w = Quaternion::<T>::WIDTH;
        self.a.encode(&mut buf[..w]);
        self.b.encode(&mut buf[w..2 * w]);
    }

    fn decode(buf: &[u8]) -> Self {
        let w = Quaternion::<T>::WIDTH;
        Self {
            a: Quaternion::decode(&buf[..w]),
            b: Quaternion::decode(&buf[w..2 * w]),
        }
    }
}

// ============================================================================
// Octonion Algebra
// ============================================================================

/// Algebra of octonions with components of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OctonionAlgebra<T>(PhantomData<T>);

impl<T> OctonionAlgebra<T> {
    /// The algebra value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// Octonions with `f64` components.
pub type OctonionFloat64Algebra = OctonionAlgebra<f64>;

impl<T: RealMember> OctonionAlgebra<T> {
    const HALF: QuaternionAlgebra<T> = QuaternionAlgebra::new();

    fn norm_squared(o: &Octonion<T>) -> T {
        o.components().iter().fold(T::zero(), |acc, &x| acc + x * x)
    }

    fn scale(o: &Octonion<T>, s: T) -> Octonion<T> {
        let mut c = o.components();
        for x in c.iter_mut() {
            *x = *x * s;
        }
        Octonion::from_components(c)
    }
}

impl<T: RealMember> Algebra for OctonionAlgebra<T> {
    type Member = Octonion<T>;

    fn name(&self) -> &'static str {
        "Octonion"
    }

    fn construct(&self) -> Octonion<T> {
        self.zero()
    }

    fn is_equal(&self, a: &Octonion<T>, b: &Octonion<T>) -> bool {
        a == b
    }
}

impl<T: RealMember> Additive for OctonionAlgebra<T> {
    fn zero(&self) -> Octonion<T> {
        Octonion::new(Self::HALF.zero(), Self::HALF.zero())
    }

    fn add(&self, x: &Octonion<T>, y: &Octonion<T>) -> Octonion<T> {
        Octonion::new(Self::HALF.add(&x.a, &y.a), Self::HALF.add(&x.b, &y.b))
    }

    fn subtract(&self, x: &Octonion<T>, y: &Octonion<T>) -> Octonion<T> {
        Octonion::new(
            Self::HALF.subtract(&x.a, &y.a),
            Self::HALF.subtract(&x.b, &y.b),
        )
    }

    fn negate(&self, x: &Octonion<T>) -> Octonion<T> {
        Octonion::new(Self::HALF.negate(&x.a), Self::HALF.negate(&x.b))
    }
}

impl<T: RealMember> Multiplicative for OctonionAlgebra<T> {
    fn one(&self) -> Octonion<T> {
        Octonion::new(Self::HALF.one(), Self::HALF.zero())
    }

    fn multiply(&self, x: &Octonion<T>, y: &Octonion<T>) -> Octonion<T> {
        let q = Self::HALF;
        let (a, b, c, d) = (&x.a, &x.b, &y.a, &y.b);
        let lo = q.subtract(&q.multiply(a, c), &q.multiply(&q.conjugate(d), b));
        let hi = q.add(&q.multiply(d, a), &q.multiply(b, &q.conjugate(c)));
        Octonion::new(lo, hi)
    }
}

impl<T: RealMember> Invertible for OctonionAlgebra<T> {
    fn divide(&self, a: &Octonion<T>, b: &Octonion<T>) -> Result<Octonion<T>, AlgebraError> {
        let inverse = self.invert(b)?;
        Ok(self.multiply(a, &inverse))
    }

    fn invert(&self, a: &Octonion<T>) -> Result<Octonion<T>, AlgebraError> {
        let n2 = Self::norm_squared(a);
        if n2.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::scale(&self.conjugate(a), T::one() / n2))
    }
}

impl<T: RealMember> Conjugate for OctonionAlgebra<T> {
    fn conjugate(&self, x: &Octonion<T>) -> Octonion<T> {
        Octonion::new(Self::HALF.conjugate(&x.a), Self::HALF.negate(&x.b))
    }
}

impl<T: RealMember> Norm for OctonionAlgebra<T> {
    fn norm(&self, x: &Octonion<T>) -> f64 {
        Self::norm_squared(x).sqrt().to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: RealMember> FromCount for OctonionAlgebra<T> {
    fn from_count(&self, n: usize) -> Result<Octonion<T>, AlgebraError> {
        Ok(Octonion::new(Self::HALF.from_count(n)?, Self::HALF.zero()))
    }
}

impl<T: RealMember> RandomSource for OctonionAlgebra<T> {
    fn random(&self, rng: &mut SimpleRng) -> Octonion<T> {
        Octonion::new(Self::HALF.random(rng), Self::HALF.random(rng))
    }
}
