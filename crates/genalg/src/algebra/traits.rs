//! Capability traits: the vocabulary algorithms are written against.
//!
//! ## Purpose
//!
//! An algebra is a stateless value that owns the operations on one member
//! type. Each trait in this module is one capability. An algorithm states
//! what it needs as a conjunction of bounds, for example
//! `A: Additive + Ordered`, and runs unmodified over every algebra that
//! provides those capabilities.
//!
//! ## Design notes
//!
//! * **Stateless**: Algebras are zero-sized; passing `&A` costs nothing.
//! * **Value-returning**: Operations return new members instead of writing to out-parameters.
//! * **Fallible only where undefined**: Division and Euclidean operations return `Result`;
//!   closed operations (add, multiply) do not.
//! * **Defaults**: Derived operations (`is_zero`, `power`, `is_less`, ...) have default bodies
//!   in terms of the primitive ones, so an algebra implements the minimum.
//!
//! ## Key concepts
//!
//! | Capability       | Provides                                    |
//! |------------------|---------------------------------------------|
//! | `Algebra`        | member type, construction, equality, copy   |
//! | `Additive`       | zero, add, subtract, negate                 |
//! | `Multiplicative` | one, multiply, integer power                |
//! | `Invertible`     | division, reciprocal                        |
//! | `Ordered`        | total comparison                            |
//! | `Euclidean`      | floor/truncating division and remainders    |
//! | `Trigonometric`  | sin, cos, tan                               |
//! | `Hyperbolic`     | sinh, cosh, tanh                            |
//! | `Exponential`    | exp, ln, pow                                |
//! | `Roots`          | sqrt, cbrt                                  |
//! | `RandomSource`   | random member generation                    |
//!
//! ## Invariants
//!
//! * `add(zero, a) == a` and `multiply(one, a) == a` for every member `a`.
//! * `compare` is a total order consistent with `is_equal`.
//!
//! ## Non-goals
//!
//! * Algebras do not allocate storage; see the storage primitives.

// External dependencies
use core::cmp::Ordering;
use core::fmt::Debug;

// Internal dependencies
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;

// ============================================================================
// Base Capability
// ============================================================================

/// The base of every algebra: a member type plus construction and equality.
pub trait Algebra {
    /// The values this algebra operates on.
    type Member: Clone + Debug;

    /// Human-readable name of the algebra.
    fn name(&self) -> &'static str;

    /// A fresh member holding the algebra's default value.
    fn construct(&self) -> Self::Member;

    /// Exact equality of two members.
    fn is_equal(&self, a: &Self::Member, b: &Self::Member) -> bool;

    /// Negation of [`is_equal`](Algebra::is_equal).
    fn is_not_equal(&self, a: &Self::Member, b: &Self::Member) -> bool {
        !self.is_equal(a, b)
    }

    /// Copy `from` into `to`.
    fn assign(&self, from: &Self::Member, to: &mut Self::Member) {
        to.clone_from(from);
    }
}

// ============================================================================
// Ring-like Capabilities
// ============================================================================

/// Addition with identity and inverse.
pub trait Additive: Algebra {
    /// The additive identity.
    fn zero(&self) -> Self::Member;

    /// `a + b`.
    fn add(&self, a: &Self::Member, b: &Self::Member) -> Self::Member;

    /// `a - b`.
    fn subtract(&self, a: &Self::Member, b: &Self::Member) -> Self::Member;

    /// `-a`.
    fn negate(&self, a: &Self::Member) -> Self::Member;

    /// True when `a` equals the additive identity.
    fn is_zero(&self, a: &Self::Member) -> bool {
        self.is_equal(a, &self.zero())
    }
}

/// Multiplication with identity.
pub trait Multiplicative: Algebra {
    /// The multiplicative identity.
    fn one(&self) -> Self::Member;

    /// `a * b`. Not assumed commutative.
    fn multiply(&self, a: &Self::Member, b: &Self::Member) -> Self::Member;

    /// `a` raised to a non-negative integer power by square-and-multiply.
    fn power(&self, a: &Self::Member, exponent: u32) -> Self::Member {
        let mut result = self.one();
        let mut base = a.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = self.multiply(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.multiply(&base, &base);
            }
        }
        result
    }
}

/// Division. For integer algebras this is truncating division.
pub trait Invertible: Multiplicative {
    /// `a / b` (right division `a * b^-1` for non-commutative algebras).
    fn divide(&self, a: &Self::Member, b: &Self::Member) -> Result<Self::Member, AlgebraError>;

    /// `1 / a`.
    fn invert(&self, a: &Self::Member) -> Result<Self::Member, AlgebraError> {
        self.divide(&self.one(), a)
    }
}

/// Floor and truncating division for integer algebras.
pub trait Euclidean: Algebra {
    /// Quotient rounded toward negative infinity.
    fn div_floor(&self, a: &Self::Member, b: &Self::Member) -> Result<Self::Member, AlgebraError>;

    /// Remainder matching [`div_floor`](Euclidean::div_floor); takes the sign of the divisor.
    fn modulo(&self, a: &Self::Member, b: &Self::Member) -> Result<Self::Member, AlgebraError>;

    /// Quotient rounded toward zero.
    fn div_trunc(&self, a: &Self::Member, b: &Self::Member) -> Result<Self::Member, AlgebraError>;

    /// Remainder matching [`div_trunc`](Euclidean::div_trunc); takes the sign of the dividend.
    fn rem(&self, a: &Self::Member, b: &Self::Member) -> Result<Self::Member, AlgebraError>;
}

// ============================================================================
// Order Capabilities
// ============================================================================

/// A total order on members.
pub trait Ordered: Algebra {
    /// Compare two members.
    fn compare(&self, a: &Self::Member, b: &Self::Member) -> Ordering;

    /// `a < b`.
    fn is_less(&self, a: &Self::Member, b: &Self::Member) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `a > b`.
    fn is_greater(&self, a: &Self::Member, b: &Self::Member) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// The larger of two members (`a` on ties).
    fn max(&self, a: &Self::Member, b: &Self::Member) -> Self::Member {
        if self.is_less(a, b) { b.clone() } else { a.clone() }
    }

    /// The smaller of two members (`a` on ties).
    fn min(&self, a: &Self::Member, b: &Self::Member) -> Self::Member {
        if self.is_greater(a, b) { b.clone() } else { a.clone() }
    }
}

/// Sign of a member as -1, 0 or 1.
pub trait Signed: Ordered + Additive {
    /// -1, 0 or 1 according to the sign of `a`.
    fn signum(&self, a: &Self::Member) -> i32 {
        match self.compare(a, &self.zero()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl<A: Ordered + Additive> Signed for A {}

/// Absolute value.
pub trait Absolute: Algebra {
    /// `|a|`.
    fn abs(&self, a: &Self::Member) -> Self::Member;
}

/// Smallest and largest representable members.
pub trait Bounded: Algebra {
    /// Smallest member.
    fn min_bound(&self) -> Self::Member;

    /// Largest member.
    fn max_bound(&self) -> Self::Member;
}

// ============================================================================
// Transcendental Capabilities
// ============================================================================

/// Circular trigonometric functions.
pub trait Trigonometric: Algebra {
    /// Sine.
    fn sin(&self, a: &Self::Member) -> Self::Member;

    /// Cosine.
    fn cos(&self, a: &Self::Member) -> Self::Member;

    /// Tangent.
    fn tan(&self, a: &Self::Member) -> Self::Member;

    /// Sine and cosine together.
    fn sin_and_cos(&self, a: &Self::Member) -> (Self::Member, Self::Member) {
        (self.sin(a), self.cos(a))
    }
}

/// Hyperbolic functions.
pub trait Hyperbolic: Algebra {
    /// Hyperbolic sine.
    fn sinh(&self, a: &Self::Member) -> Self::Member;

    /// Hyperbolic cosine.
    fn cosh(&self, a: &Self::Member) -> Self::Member;

    /// Hyperbolic tangent.
    fn tanh(&self, a: &Self::Member) -> Self::Member;
}

/// Exponentials and logarithms.
pub trait Exponential: Algebra {
    /// `e^a`.
    fn exp(&self, a: &Self::Member) -> Self::Member;

    /// Natural logarithm (principal branch).
    fn ln(&self, a: &Self::Member) -> Self::Member;

    /// `a^b`.
    fn pow(&self, a: &Self::Member, b: &Self::Member) -> Self::Member;
}

/// Square and cube roots (principal branch).
pub trait Roots: Algebra {
    /// Square root.
    fn sqrt(&self, a: &Self::Member) -> Self::Member;

    /// Cube root.
    fn cbrt(&self, a: &Self::Member) -> Self::Member;
}

// ============================================================================
// Real-number Capabilities
// ============================================================================

/// Constants of a real algebra.
pub trait RealConstants: Algebra {
    /// Archimedes' constant.
    fn pi(&self) -> Self::Member;

    /// Euler's number.
    fn e(&self) -> Self::Member;

    /// Machine epsilon.
    fn epsilon(&self) -> Self::Member;
}

/// Conversions between members of a real algebra and `f64`.
pub trait RealScalar: Algebra {
    /// Nearest member to `value`.
    fn from_f64(&self, value: f64) -> Self::Member;

    /// Member widened (or narrowed) to `f64`.
    fn to_f64(&self, a: &Self::Member) -> f64;

    /// True when `a` is neither infinite nor NaN.
    fn is_finite(&self, a: &Self::Member) -> bool;
}

/// Embedding of element counts into the algebra.
pub trait FromCount: Algebra {
    /// The member representing the count `n`.
    ///
    /// Fails with `Overflow` when `n` is not representable.
    fn from_count(&self, n: usize) -> Result<Self::Member, AlgebraError>;
}

// ============================================================================
// Structural Capabilities
// ============================================================================

/// Conjugation for complex-like algebras.
pub trait Conjugate: Algebra {
    /// The conjugate of `a`.
    fn conjugate(&self, a: &Self::Member) -> Self::Member;
}

/// Euclidean norm of a member.
pub trait Norm: Algebra {
    /// `|a|` as an `f64`.
    fn norm(&self, a: &Self::Member) -> f64;
}

/// Random member generation.
pub trait RandomSource: Algebra {
    /// A random member.
    ///
    /// Real components are uniform in `[0, 1)`; integers cover their full range.
    fn random(&self, rng: &mut SimpleRng) -> Self::Member;
}

/// Midpoint of two members without intermediate overflow.
pub trait Averageable: Algebra {
    /// `(a + b) / 2`; integer algebras round toward negative infinity.
    fn average_two(&self, a: &Self::Member, b: &Self::Member) -> Self::Member;
}
