use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, Matrix, Scalar, Vector};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

/// Element-wise comparison with a tolerance of [`Scalar::EPSILON`].
impl<T: Scalar, const N: usize> PartialEq for Matrix<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.eps_eq(*b))
    }
}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
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

impl<T: Scalar, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Scalar, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

impl<T: Scalar, const N: usize> AddAssign for Matrix<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

impl<T: Scalar, const N: usize> SubAssign for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Matrix * Column Vector.
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
///
/// When both matrices are transforms, the result applies `rhs` first, then `self`.
impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T: Scalar, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($($f:ty),+) => {
        $(
            /// Scalar * Matrix.
            impl<const N: usize> Mul<Matrix<$f, N>> for $f {
                type Output = Matrix<$f, N>;

                fn mul(self, rhs: Matrix<$f, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn epsilon_eq() {
        let mut m = Mat3f::IDENTITY;
        m[(1, 2)] = 0.5e-5;
        assert_eq!(m, Mat3f::IDENTITY);
        m[(1, 2)] = 2e-5;
        assert_ne!(m, Mat3f::IDENTITY);
    }

    #[test]
    fn arithmetic() {
        let a = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2d::from_rows([[0.5, -1.0], [0.0, 2.0]]);
        assert_eq!(a + b, Mat2d::from_rows([[1.5, 1.0], [3.0, 6.0]]));
        assert_eq!(a - b, Mat2d::from_rows([[0.5, 3.0], [3.0, 2.0]]));
        assert_eq!(-a, Mat2d::from_rows([[-1.0, -2.0], [-3.0, -4.0]]));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a * 2.0, a + a);
        assert_eq!(a * b, Mat2d::from_rows([[0.5, 3.0], [1.5, 5.0]]));
        assert_ne!(a * b, b * a);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= Mat2d::IDENTITY * 3.0;
        assert_eq!(c, b * 3.0);
        c *= 0.5;
        assert_eq!(c, b * 1.5);
    }
}
