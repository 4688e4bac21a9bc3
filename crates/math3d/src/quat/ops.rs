use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::{approx::ApproxEq, Quat, Scalar, Vec3};

/// Component-wise comparison with a tolerance of [`Scalar::EPSILON`].
impl<T: Scalar> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }
}

impl<T: Scalar> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Quat { vec: -self.vec }
    }
}

impl<T: Scalar> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec - rhs.vec,
        }
    }
}

/// Hamilton product.
///
/// The resulting rotation applies `rhs` first, then `self`.
impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (w1, v1) = (self.real(), self.imaginary());
        let (w2, v2) = (rhs.real(), rhs.imaginary());
        let vec = v2 * w1 + v1 * w2 + v1.cross(v2);
        Quat::from_vec(vec.extend(w1 * w2 - v1.dot(v2)))
    }
}

impl<T: Scalar> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
impl<T: Scalar> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

/// Scales every component.
impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Quat {
            vec: self.vec * rhs,
        }
    }
}

macro_rules! scalar_lhs_mul {
    ($($f:ty),+) => {
        $(
            impl Mul<Quat<$f>> for $f {
                type Output = Quat<$f>;

                fn mul(self, rhs: Quat<$f>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);
