//! The scalar policy: which element types are supported and how they are compared.

use std::fmt;

use ndarray::{ArrayD, ArrayViewD};

use crate::{
    approx::{ApproxEq, DefaultTolerances},
    buffer::{Buffer, Dtype},
    MinMax, Number, Sqrt, Trig,
};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// The element types supported by all math3d types: [`f32`] and [`f64`].
///
/// Every scalar type carries a fixed [`Scalar::EPSILON`] that is used by the `==` operator of all
/// vector, matrix, quaternion and pose types: two values compare equal if every pair of
/// corresponding components differs by *strictly less* than `EPSILON`.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Scalar:
    Number
    + Trig
    + Sqrt
    + MinMax
    + ApproxEq<Tolerance = Self>
    + DefaultTolerances
    + bytemuck::Pod
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + sealed::Sealed
    + 'static
{
    /// The comparison tolerance used by `==`, and the threshold below which lengths and
    /// determinants are considered zero.
    const EPSILON: Self;

    /// The buffer element type corresponding to `Self`.
    const DTYPE: Dtype;

    /// One half, used by a few trigonometric formulas.
    const HALF: Self;

    /// Two.
    const TWO: Self;

    fn abs(self) -> Self;

    /// Converts `self` to an [`f64`] for error reporting.
    fn to_f64(self) -> f64;

    /// Returns whether `self` and `other` differ by less than [`Scalar::EPSILON`].
    ///
    /// Infinities compare equal to themselves, `NaN` compares unequal to everything.
    fn eps_eq(self, other: Self) -> bool {
        self == other || (self - other).abs() < Self::EPSILON
    }

    #[doc(hidden)]
    fn wrap_array(array: ArrayD<Self>) -> Buffer;

    #[doc(hidden)]
    fn view_array(buffer: &Buffer) -> Option<ArrayViewD<'_, Self>>;
}

impl Scalar for f32 {
    const EPSILON: Self = 1e-5;
    const DTYPE: Dtype = Dtype::F32;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    fn abs(self) -> Self {
        self.abs()
    }

    fn to_f64(self) -> f64 {
        self.into()
    }

    fn wrap_array(array: ArrayD<Self>) -> Buffer {
        Buffer::F32(array)
    }

    fn view_array(buffer: &Buffer) -> Option<ArrayViewD<'_, Self>> {
        match buffer {
            Buffer::F32(array) => Some(array.view()),
            Buffer::F64(_) => None,
        }
    }
}

impl Scalar for f64 {
    const EPSILON: Self = 1e-6;
    const DTYPE: Dtype = Dtype::F64;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    fn abs(self) -> Self {
        self.abs()
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn wrap_array(array: ArrayD<Self>) -> Buffer {
        Buffer::F64(array)
    }

    fn view_array(buffer: &Buffer) -> Option<ArrayViewD<'_, Self>> {
        match buffer {
            Buffer::F64(array) => Some(array.view()),
            Buffer::F32(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eps_eq() {
        assert!(1.0f32.eps_eq(1.0 + 0.5e-5));
        assert!(!1.0f32.eps_eq(1.0 + 2e-5));
        assert!(1.0f64.eps_eq(1.0 + 0.5e-6));
        assert!(!1.0f64.eps_eq(1.0 + 2e-6));

        // The comparison is strict.
        assert!(!0.0f64.eps_eq(1e-6));

        assert!(f32::INFINITY.eps_eq(f32::INFINITY));
        assert!(!f32::INFINITY.eps_eq(f32::NEG_INFINITY));
        assert!(!f64::NAN.eps_eq(f64::NAN));
    }

    #[test]
    fn dtype() {
        assert_eq!(<f32 as Scalar>::DTYPE, Dtype::F32);
        assert_eq!(<f64 as Scalar>::DTYPE, Dtype::F64);
    }
}
