//! Complex-number algebras backed by `num_complex::Complex`.
//!
//! ## Purpose
//!
//! [`ComplexAlgebra<T>`] lifts a float type to the complex field. It provides
//! field arithmetic and the transcendental capabilities (principal branches),
//! but no ordering.

// External dependencies
use core::marker::PhantomData;
use num_complex::Complex;

// Internal dependencies
use crate::algebra::real::RealMember;
use crate::algebra::traits::{
    Additive, Algebra, Conjugate, Exponential, FromCount, Hyperbolic, Invertible, Multiplicative,
    Norm, RandomSource, Roots, Trigonometric,
};
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;

/// Algebra of complex numbers with components of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplexAlgebra<T>(PhantomData<T>);

impl<T> ComplexAlgebra<T> {
    /// The algebra value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// Complex numbers with `f32` components.
pub type ComplexFloat32Algebra = ComplexAlgebra<f32>;

/// Complex numbers with `f64` components.
pub type ComplexFloat64Algebra = ComplexAlgebra<f64>;

impl<T: RealMember> Algebra for ComplexAlgebra<T> {
    type Member = Complex<T>;

    fn name(&self) -> &'static str {
        "Complex"
    }

    fn construct(&self) -> Complex<T> {
        Complex::new(T::zero(), T::zero())
    }

    fn is_equal(&self, a: &Complex<T>, b: &Complex<T>) -> bool {
        a == b
    }
}

impl<T: RealMember> Additive for ComplexAlgebra<T> {
    fn zero(&self) -> Complex<T> {
        Complex::new(T::zero(), T::zero())
    }

    fn add(&self, a: &Complex<T>, b: &Complex<T>) -> Complex<T> {
        a + b
    }

    fn subtract(&self, a: &Complex<T>, b: &Complex<T>) -> Complex<T> {
        a - b
    }

    fn negate(&self, a: &Complex<T>) -> Complex<T> {
        -a
    }
}

impl<T: RealMember> Multiplicative for ComplexAlgebra<T> {
    fn one(&self) -> Complex<T> {
        Complex::new(T::one(), T::zero())
    }

    fn multiply(&self, a: &Complex<T>, b: &Complex<T>) -> Complex<T> {
        a * b
    }
}

impl<T: RealMember> Invertible for ComplexAlgebra<T> {
    fn divide(&self, a: &Complex<T>, b: &Complex<T>) -> Result<Complex<T>, AlgebraError> {
        if b.re.is_zero() && b.im.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(a / b)
    }
}

impl<T: RealMember> Trigonometric for ComplexAlgebra<T> {
    fn sin(&self, a: &Complex<T>) -> Complex<T> {
        a.sin()
    }

    fn cos(&self, a: &Complex<T>) -> Complex<T> {
        a.cos()
    }

    fn tan(&self, a: &Complex<T>) -> Complex<T> {
        a.tan()
    }
}

impl<T: RealMember> Hyperbolic for ComplexAlgebra<T> {
    fn sinh(&self, a: &Complex<T>) -> Complex<T> {
        a.sinh()
    }

    fn cosh(&self, a: &Complex<T>) -> Complex<T> {
        a.cosh()
    }

    fn tanh(&self, a: &Complex<T>) -> Complex<T> {
        a.tanh()
    }
}

impl<T: RealMember> Exponential for ComplexAlgebra<T> {
    fn exp(&self, a: &Complex<T>) -> Complex<T> {
        a.exp()
    }

    fn ln(&self, a: &Complex<T>) -> Complex<T> {
        a.ln()
    }

    fn pow(&self, a: &Complex<T>, b: &Complex<T>) -> Complex<T> {
        a.powc(*b)
    }
}

impl<T: RealMember> Roots for ComplexAlgebra<T> {
    fn sqrt(&self, a: &Complex<T>) -> Complex<T> {
        a.sqrt()
    }

    fn cbrt(&self, a: &Complex<T>) -> Complex<T> {
        a.cbrt()
    }
}

impl<T: RealMember> Conjugate for ComplexAlgebra<T> {
    fn conjugate(&self, a: &Complex<T>) -> Complex<T> {
        a.conj()
    }
}

impl<T: RealMember> Norm for ComplexAlgebra<T> {
    fn norm(&self, a: &Complex<T>) -> f64 {
        a.norm().to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: RealMember> FromCount for ComplexAlgebra<T> {
    fn from_count(&self, n: usize) -> Result<Complex<T>, AlgebraError> {
        Ok(Complex::new(T::from(n).unwrap_or_else(T::infinity), T::zero()))
    }
}

impl<T: RealMember> RandomSource for ComplexAlgebra<T> {
    fn random(&self, rng: &mut SimpleRng) -> Complex<T> {
        let re = T::from(rng.next_f64()).unwrap_or_else(T::zero);
        let im = T::from(rng.next_f64()).unwrap_or_else(T::zero);
        Complex::new(re, im)
    }
}
