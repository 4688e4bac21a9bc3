//! Implementations of `std::ops` and comparison traits.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Scalar};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Component-wise comparison with a tolerance of [`Scalar::EPSILON`].
impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.eps_eq(*b))
    }
}

impl<T: Scalar, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == Vector(*other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add + Copy,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l + r)
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub + Copy,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l - r)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise (Hadamard) product.
///
/// ```
/// # use math3d::*;
/// assert_eq!(vec3(1.0, 2.0, 3.0) * vec3(4.0, 5.0, -1.0), vec3(4.0, 10.0, -3.0));
/// ```
impl<T, const N: usize> Mul<Vector<T, N>> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a * b)
    }
}

/// Element-wise (Hadamard) product.
impl<T, const N: usize> MulAssign<Vector<T, N>> for Vector<T, N>
where
    T: MulAssign,
{
    fn mul_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

// Supporting both vector-scalar and element-wise vector-vector multiplication rules out a more
// generic `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Vector-scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Element-wise division.
impl<T, const N: usize> Div<Vector<T, N>> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a / b)
    }
}

/// Vector-scalar division.
///
/// Division by zero follows IEEE 754 and yields infinities or NaN.
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-scalar division.
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// Scalar-vector multiplication (`2.0 * v`) cannot be implemented generically, since the scalar
// type is foreign.
macro_rules! scalar_lhs_mul {
    ($($f:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$f, N>> for $f {
                type Output = Vector<$f, N>;

                fn mul(self, rhs: Vector<$f, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);
