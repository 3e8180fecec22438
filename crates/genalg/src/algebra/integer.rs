//! Fixed-width integer algebras, signed and unsigned, 8 to 64 bits.
//!
//! ## Purpose
//!
//! [`IntegerAlgebra<T>`] exposes the primitive integer types as algebras so
//! that integer-only algorithms (gcd, floor division, exact determinants)
//! and generic ones (sum, sort) run over them.
//!
//! ## Design notes
//!
//! * **Two's complement**: Addition, subtraction, negation and multiplication wrap.
//! * **Checked division**: Division by zero and `MIN / -1` are reported as errors.
//! * **Floor semantics**: `div_floor`/`modulo` round toward negative infinity,
//!   `div_trunc`/`rem` toward zero.
//!
//! ## Invariants
//!
//! * `average_two(a, b) == floor((a + b) / 2)` for all `a`, `b`, computed without overflow.
//! * `modulo(a, b)` is zero or has the sign of `b`.

// External dependencies
use core::cmp::Ordering;
use core::marker::PhantomData;

// Internal dependencies
use crate::algebra::traits::{
    Absolute, Additive, Algebra, Averageable, Bounded, Euclidean, FromCount, Invertible,
    Multiplicative, Norm, Ordered, RandomSource,
};
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;

// ============================================================================
// Integer Algebra
// ============================================================================

/// Algebra of the primitive integer type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerAlgebra<T>(PhantomData<T>);

impl<T> IntegerAlgebra<T> {
    /// The algebra value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// Signed 8-bit integers.
pub type SignedInt8Algebra = IntegerAlgebra<i8>;
/// Signed 16-bit integers.
pub type SignedInt16Algebra = IntegerAlgebra<i16>;
/// Signed 32-bit integers.
pub type SignedInt32Algebra = IntegerAlgebra<i32>;
/// Signed 64-bit integers.
pub type SignedInt64Algebra = IntegerAlgebra<i64>;
/// Unsigned 8-bit integers.
pub type UnsignedInt8Algebra = IntegerAlgebra<u8>;
/// Unsigned 16-bit integers.
pub type UnsignedInt16Algebra = IntegerAlgebra<u16>;
/// Unsigned 32-bit integers.
pub type UnsignedInt32Algebra = IntegerAlgebra<u32>;
/// Unsigned 64-bit integers.
pub type UnsignedInt64Algebra = IntegerAlgebra<u64>;

// ============================================================================
// Shared Implementation
// ============================================================================

macro_rules! impl_integer_algebra {
    ($t:ty, $name:literal) => {
        impl Algebra for IntegerAlgebra<$t> {
            type Member = $t;

            fn name(&self) -> &'static str {
                $name
            }

            fn construct(&self) -> $t {
                0
            }

            #[inline]
            fn is_equal(&self, a: &$t, b: &$t) -> bool {
                a == b
            }
        }

        impl Additive for IntegerAlgebra<$t> {
            fn zero(&self) -> $t {
                0
            }

            #[inline]
            fn add(&self, a: &$t, b: &$t) -> $t {
                a.wrapping_add(*b)
            }

            #[inline]
            fn subtract(&self, a: &$t, b: &$t) -> $t {
                a.wrapping_sub(*b)
            }

            #[inline]
            fn negate(&self, a: &$t) -> $t {
                a.wrapping_neg()
            }

            #[inline]
            fn is_zero(&self, a: &$t) -> bool {
                *a == 0
            }
        }

        impl Multiplicative for IntegerAlgebra<$t> {
            fn one(&self) -> $t {
                1
            }

            #[inline]
            fn multiply(&self, a: &$t, b: &$t) -> $t {
                a.wrapping_mul(*b)
            }

            fn power(&self, a: &$t, exponent: u32) -> $t {
                a.wrapping_pow(exponent)
            }
        }

        impl Invertible for IntegerAlgebra<$t> {
            fn divide(&self, a: &$t, b: &$t) -> Result<$t, AlgebraError> {
                self.div_trunc(a, b)
            }
        }

        #[allow(unused_comparisons)]
        impl Euclidean for IntegerAlgebra<$t> {
            fn div_floor(&self, a: &$t, b: &$t) -> Result<$t, AlgebraError> {
                let q = self.div_trunc(a, b)?;
                let r = a.wrapping_sub(q.wrapping_mul(*b));
                // Truncation rounded up when the remainder and divisor disagree in sign
                if r != 0 && ((r < 0) != (*b < 0)) {
                    return Ok(q - 1);
                }
                Ok(q)
            }

            fn modulo(&self, a: &$t, b: &$t) -> Result<$t, AlgebraError> {
                let r = self.rem(a, b)?;
                if r != 0 && ((r < 0) != (*b < 0)) {
                    return Ok(r.wrapping_add(*b));
                }
                Ok(r)
            }

            fn div_trunc(&self, a: &$t, b: &$t) -> Result<$t, AlgebraError> {
                if *b == 0 {
                    return Err(AlgebraError::DivisionByZero);
                }
                a.checked_div(*b).ok_or(AlgebraError::Overflow)
            }

            fn rem(&self, a: &$t, b: &$t) -> Result<$t, AlgebraError> {
                if *b == 0 {
                    return Err(AlgebraError::DivisionByZero);
                }
                // MIN % -1 is mathematically 0
                Ok(a.wrapping_rem(*b))
            }
        }

        impl Ordered for IntegerAlgebra<$t> {
            #[inline]
            fn compare(&self, a: &$t, b: &$t) -> Ordering {
                a.cmp(b)
            }
        }

        impl Bounded for IntegerAlgebra<$t> {
            fn min_bound(&self) -> $t {
                <$t>::MIN
            }

            fn max_bound(&self) -> $t {
                <$t>::MAX
            }
        }

        impl FromCount for IntegerAlgebra<$t> {
            fn from_count(&self, n: usize) -> Result<$t, AlgebraError> {
                <$t>::try_from(n).map_err(|_| AlgebraError::Overflow)
            }
        }

        impl RandomSource for IntegerAlgebra<$t> {
            fn random(&self, rng: &mut SimpleRng) -> $t {
                rng.next_u64() as $t
            }
        }

        impl Averageable for IntegerAlgebra<$t> {
            #[inline]
            fn average_two(&self, a: &$t, b: &$t) -> $t {
                // floor(a/2) + floor(b/2), plus one when both halves dropped a 1
                (a >> 1) + (b >> 1) + (a & b & 1)
            }
        }
    };
}

macro_rules! impl_signed_extras {
    ($t:ty) => {
        impl Absolute for IntegerAlgebra<$t> {
            #[inline]
            fn abs(&self, a: &$t) -> $t {
                a.wrapping_abs()
            }
        }

        impl Norm for IntegerAlgebra<$t> {
            fn norm(&self, a: &$t) -> f64 {
                (*a as f64).abs()
            }
        }
    };
}

macro_rules! impl_unsigned_extras {
    ($t:ty) => {
        impl Absolute for IntegerAlgebra<$t> {
            #[inline]
            fn abs(&self, a: &$t) -> $t {
                *a
            }
        }

        impl Norm for IntegerAlgebra<$t> {
            fn norm(&self, a: &$t) -> f64 {
                *a as f64
            }
        }
    };
}

impl_integer_algebra!(i8, "SignedInt8");
impl_integer_algebra!(i16, "SignedInt16");
impl_integer_algebra!(i32, "SignedInt32");
impl_integer_algebra!(i64, "SignedInt64");
impl_integer_algebra!(u8, "UnsignedInt8");
impl_integer_algebra!(u16, "UnsignedInt16");
impl_integer_algebra!(u32, "UnsignedInt32");
impl_integer_algebra!(u64, "UnsignedInt64");

impl_signed_extras!(i8);
impl_signed_extras!(i16);
impl_signed_extras!(i32);
impl_signed_extras!(i64);
impl_unsigned_extras!(u8);
impl_unsigned_extras!(u16);
impl_unsigned_extras!(u32);
impl_unsigned_extras!(u64);
