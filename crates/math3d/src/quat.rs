mod ops;
mod view;

use std::fmt;

use crate::{
    error::{Error, Result},
    euler::{Convention, Euler, Order},
    vec4, Mat3, Mat4, One, Scalar, Vec3, Vector, Zero,
};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of a real part `w` and the imaginary parts `x`, `y` and `z`.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space. Quaternions are not
/// normalized on construction; use [`Quat::normalize`] where that matters.
///
/// # Rotation convention
///
/// - `q * v` rotates the vector `v` by the unit quaternion `q`.
/// - `q1 * q2` is the Hamilton product. As a rotation, it applies `q2` first, then `q1`:
///   `(q1 * q2) * v == q1 * (q2 * v)`.
///
/// ```
/// # use math3d::*;
/// # use std::f64::consts::FRAC_PI_2;
/// let about_z = Quatd::from_rotation_z(FRAC_PI_2);
/// let about_x = Quatd::from_rotation_x(FRAC_PI_2);
/// assert_eq!(about_z * Vec3d::X, Vec3d::Y);
/// assert_eq!((about_x * about_z) * Vec3d::X, Vec3d::Z);
/// ```
///
/// # Equality
///
/// `==` compares the four components with [`Scalar::EPSILON`], so `q != -q` even though both
/// represent the same rotation. [`Quat::rotation_eq`] compares rotations instead.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Quat<T> {
    /// `(x, y, z, w)`.
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real part of the quaternion.
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components of this quaternion as an `(x, y, z, w)` vector.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }
}

impl<T: Scalar> Quat<T> {
    /// Creates a quaternion that rotates by `radians` around `axis`.
    ///
    /// `axis` does not have to be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if `axis` has (nearly) zero length.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Result<Self> {
        let axis = axis
            .normalize()
            .map_err(|_| Error::degenerate("rotate around a zero-length axis"))?;
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Ok(Self::from_vec((axis * sin).extend(cos)))
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(cos, sin, T::ZERO, T::ZERO)
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(cos, T::ZERO, sin, T::ZERO)
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::new(cos, T::ZERO, T::ZERO, sin)
    }

    /// Creates a quaternion from a set of Euler angles.
    ///
    /// Equivalent to [`Euler::to_quat`].
    #[doc(alias = "euler")]
    pub fn from_euler(euler: &Euler<T>) -> Self {
        euler.to_quat()
    }

    /// Creates a unit quaternion from a pure rotation matrix.
    ///
    /// The result is unspecified if `mat` is not orthonormal with a determinant of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mat = Mat3d::rotation_y(1.25);
    /// assert_eq!(Quatd::from_rotation_matrix(&mat), Quatd::from_rotation_y(1.25));
    /// ```
    pub fn from_rotation_matrix(mat: &Mat3<T>) -> Self {
        let m = |row: usize, col: usize| mat[(row, col)];
        let quarter = T::HALF * T::HALF;
        let trace = mat.trace();

        // Pick the numerically largest component to divide by.
        if trace > T::ZERO {
            let s = T::HALF / (trace + T::ONE).sqrt();
            Self::new(
                quarter / s,
                (m(2, 1) - m(1, 2)) * s,
                (m(0, 2) - m(2, 0)) * s,
                (m(1, 0) - m(0, 1)) * s,
            )
        } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
            let s = T::TWO * (T::ONE + m(0, 0) - m(1, 1) - m(2, 2)).sqrt();
            Self::new(
                (m(2, 1) - m(1, 2)) / s,
                quarter * s,
                (m(0, 1) + m(1, 0)) / s,
                (m(0, 2) + m(2, 0)) / s,
            )
        } else if m(1, 1) > m(2, 2) {
            let s = T::TWO * (T::ONE + m(1, 1) - m(0, 0) - m(2, 2)).sqrt();
            Self::new(
                (m(0, 2) - m(2, 0)) / s,
                (m(0, 1) + m(1, 0)) / s,
                quarter * s,
                (m(1, 2) + m(2, 1)) / s,
            )
        } else {
            let s = T::TWO * (T::ONE + m(2, 2) - m(0, 0) - m(1, 1)).sqrt();
            Self::new(
                (m(1, 0) - m(0, 1)) / s,
                (m(0, 2) + m(2, 0)) / s,
                (m(1, 2) + m(2, 1)) / s,
                quarter * s,
            )
        }
    }

    /// Creates a unit quaternion from the rotation part (upper-left 3x3 block) of a homogeneous
    /// transform.
    pub fn from_rotation_matrix4(mat: &Mat4<T>) -> Self {
        Self::from_rotation_matrix(&mat.truncate())
    }

    /// Returns the real part of this quaternion.
    pub fn real(&self) -> T {
        self.vec.w
    }

    /// Returns the imaginary parts of this quaternion as a vector.
    pub fn imaginary(&self) -> Vec3<T> {
        self.vec.truncate()
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(&self, other: &Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    pub fn square_norm(&self) -> T {
        self.vec.square_norm()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> T {
        self.vec.norm()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the length of `self` is less than
    /// [`Scalar::EPSILON`].
    pub fn normalize(self) -> Result<Self> {
        let vec = self
            .vec
            .normalize()
            .map_err(|_| Error::degenerate("normalize a quaternion"))?;
        Ok(Self { vec })
    }

    /// Normalizes this quaternion in place and returns it for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the length of `self` is less than
    /// [`Scalar::EPSILON`]. `self` is not modified in that case.
    pub fn normalize_in_place(&mut self) -> Result<&mut Self> {
        *self = self.normalize()?;
        Ok(self)
    }

    /// Returns the conjugate of this quaternion (the imaginary parts negated).
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        Self::from_vec((-self.imaginary()).extend(self.real()))
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the length of `self` is less than
    /// [`Scalar::EPSILON`], just like [`Quat::normalize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let q = Quatd::new(1.0, 2.0, -1.0, 0.5);
    /// assert_eq!(q * q.inverse()?, Quatd::IDENTITY);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn inverse(self) -> Result<Self> {
        if self.norm() < T::EPSILON {
            return Err(Error::degenerate("invert a quaternion"));
        }
        Ok(self.conjugate() * (T::ONE / self.square_norm()))
    }

    /// Returns whether `self` and `other` represent the same rotation.
    ///
    /// Unlike `==`, this treats `q` and `-q` as equal.
    pub fn rotation_eq(&self, other: &Self) -> bool {
        *self == *other || *self == -*other
    }

    /// Rotates `vector` by this quaternion, which must be of unit length.
    ///
    /// Equivalent to `self * vector`.
    pub fn rotate(&self, vector: Vec3<T>) -> Vec3<T> {
        let u = self.imaginary();
        let t = u.cross(vector) * T::TWO;
        vector + t * self.real() + u.cross(t)
    }

    /// Returns the rotation matrix corresponding to this unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let q = Quatf::from_rotation_x(0.5);
    /// assert_eq!(q.to_matrix3(), Mat3f::rotation_x(0.5));
    /// ```
    pub fn to_matrix3(&self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let (l, two) = (T::ONE, T::TWO);

        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [l - two * (y * y + z * z), two * (x * y - w * z), two * (x * z + w * y)],
            [two * (x * y + w * z), l - two * (x * x + z * z), two * (y * z - w * x)],
            [two * (x * z - w * y), two * (y * z + w * x), l - two * (x * x + y * y)],
        ]);
        mat
    }

    /// Returns the homogeneous rotation transform corresponding to this unit quaternion.
    pub fn to_matrix4(&self) -> Mat4<T> {
        self.to_matrix3().extend()
    }

    /// Decomposes this rotation into Euler angles in the given `order` and `convention`.
    ///
    /// Equivalent to [`Euler::from_quat`].
    pub fn to_euler(&self, order: Order, convention: Convention) -> Euler<T> {
        Euler::from_quat(self, order, convention)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(quat: Quat<T>) -> Self {
        quat.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.as_array();
        f.debug_struct("Quat")
            .field("w", w)
            .field("x", x)
            .field("y", y)
            .field("z", z)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.as_array();
        write!(f, "(w: ")?;
        w.fmt(f)?;
        write!(f, ", x: ")?;
        x.fmt(f)?;
        write!(f, ", y: ")?;
        y.fmt(f)?;
        write!(f, ", z: ")?;
        z.fmt(f)?;
        write!(f, ")")
    }
}

/// Constructs a [`Quat`] from its real part `w` and imaginary parts `x`, `y` and `z`.
#[inline]
pub const fn quat<T>(w: T, x: T, y: T, z: T) -> Quat<T> {
    Quat::new(w, x, y, z)
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec3, Vec3d};

    use super::*;

    #[test]
    fn components() {
        let q = Quatf::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.w, q.x, q.y, q.z), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.real(), 1.0);
        assert_eq!(q.imaginary(), vec3(2.0, 3.0, 4.0));
        assert_eq!(Vector::from(q), vec4(2.0, 3.0, 4.0, 1.0));
        assert_eq!(Quatf::default(), Quatf::IDENTITY);
        assert_eq!(format!("{}", q), "(w: 1, x: 2, y: 3, z: 4)");
        assert_eq!(format!("{:?}", Quatf::IDENTITY), "Quat { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }");
    }

    #[test]
    fn equality() {
        let q = Quatd::from_rotation_y(1.0);
        assert_ne!(q, -q);
        assert!(q.rotation_eq(&-q));
        assert!(q.rotation_eq(&q));
        assert!(!q.rotation_eq(&Quatd::IDENTITY));
    }

    #[test]
    fn axis_angle() {
        let q = Quatd::from_axis_angle(vec3(0.0, 0.0, 5.0), FRAC_PI_2).unwrap();
        assert_eq!(q, Quatd::from_rotation_z(FRAC_PI_2));
        assert_eq!(q * Vec3d::X, Vec3d::Y);

        let [x, y, z] = [Vec3d::X, Vec3d::Y, Vec3d::Z];
        assert_eq!(Quatd::from_axis_angle(x, 0.3).unwrap(), Quatd::from_rotation_x(0.3));
        assert_eq!(Quatd::from_axis_angle(y, 0.3).unwrap(), Quatd::from_rotation_y(0.3));
        assert_eq!(Quatd::from_axis_angle(z, 0.3).unwrap(), Quatd::from_rotation_z(0.3));

        assert_eq!(
            Quatd::from_axis_angle(Vec3d::ZERO, 1.0),
            Err(Error::DegenerateInput {
                operation: "rotate around a zero-length axis"
            })
        );
    }

    #[test]
    fn elemental_rotations() {
        assert_eq!(Quatd::from_rotation_x(FRAC_PI_2) * Vec3d::Y, Vec3d::Z);
        assert_eq!(Quatd::from_rotation_y(FRAC_PI_2) * Vec3d::Z, Vec3d::X);
        assert_eq!(Quatd::from_rotation_z(FRAC_PI_2) * Vec3d::X, Vec3d::Y);
        assert_eq!(Quatd::from_rotation_x(PI) * Vec3d::Y, -Vec3d::Y);
    }

    #[test]
    fn composition_order() {
        let a = Quatd::from_rotation_z(FRAC_PI_2);
        let b = Quatd::from_rotation_x(FRAC_PI_2);
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!((a * b) * v, a * (b * v));
        assert_ne!((a * b) * v, (b * a) * v);
        assert_eq!((a * b).to_matrix3(), a.to_matrix3() * b.to_matrix3());
    }

    #[test]
    fn normalize() {
        let mut q = Quatd::new(2.0, 0.0, 0.0, 0.0);
        q.normalize_in_place().unwrap();
        assert_eq!(q, Quatd::IDENTITY);

        let q = Quatf::new(1.0, 1.0, 1.0, 1.0).normalize().unwrap();
        assert_approx_eq!(q.norm(), 1.0);
        assert_eq!(q, Quatf::new(0.5, 0.5, 0.5, 0.5));

        let mut zero = Quatf::new(0.0, 0.0, 0.0, 0.0);
        assert!(zero.normalize_in_place().is_err());
        assert_eq!(zero.into_vec(), Vector::ZERO);
    }

    #[test]
    fn inverse() {
        let q = Quatd::from_rotation_x(0.7) * Quatd::from_rotation_z(-0.2);
        assert_eq!(q.inverse().unwrap(), q.conjugate());
        assert_eq!(q * q.conjugate(), Quatd::IDENTITY);

        let scaled = q * 3.0;
        assert_eq!(scaled * scaled.inverse().unwrap(), Quatd::IDENTITY);

        assert!(Quatd::new(0.0, 0.0, 0.0, 0.0).inverse().is_err());
    }

    #[test]
    fn inverse_and_normalize_agree_on_degenerate_input() {
        // Short, but longer than `EPSILON`.
        let short = Quatf::new(0.002, 0.0, 0.0, 0.0);
        assert!(short.normalize().is_ok());
        let inv = short.inverse().unwrap();
        assert_eq!(short * inv, Quatf::IDENTITY);

        let tiny = Quatf::new(5e-6, 0.0, 0.0, 0.0);
        assert!(tiny.normalize().is_err());
        assert_eq!(
            tiny.inverse(),
            Err(Error::DegenerateInput {
                operation: "invert a quaternion"
            })
        );
    }

    #[test]
    fn rotate() {
        let q = Quatd::from_axis_angle(vec3(1.0, 1.0, 1.0), 2.0 * PI / 3.0).unwrap();
        assert_eq!(q * Vec3d::X, Vec3d::Y);
        assert_eq!(q * Vec3d::Y, Vec3d::Z);
        assert_eq!(q.rotate(Vec3d::Z), Vec3d::X);

        let v = vec3(0.5, -2.0, 1.5);
        assert_approx_eq!((q * v).norm(), v.norm());
    }

    #[test]
    fn matrix_round_trip() {
        let quats = [
            Quatd::IDENTITY,
            Quatd::from_rotation_x(PI),
            Quatd::from_rotation_y(PI),
            Quatd::from_rotation_z(PI),
            Quatd::from_rotation_x(0.4) * Quatd::from_rotation_y(2.9),
            Quatd::from_axis_angle(vec3(-1.0, 2.0, 0.5), 3.1).unwrap(),
            Quatd::from_axis_angle(vec3(0.1, -0.2, 3.0), -2.5).unwrap(),
        ];
        for q in quats {
            let m = q.to_matrix3();
            assert_approx_eq!(m.determinant(), 1.0);
            assert_eq!(m * m.transpose(), Mat3::IDENTITY);

            let back = Quatd::from_rotation_matrix(&m);
            assert!(back.rotation_eq(&q), "{q} -> {back}");
            assert_eq!(Quatd::from_rotation_matrix4(&q.to_matrix4()), back);
            assert_eq!(Mat3::from_quat(q), m);
        }
    }

    #[test]
    fn arithmetic() {
        let a = Quatf::new(1.0, 2.0, 3.0, 4.0);
        let b = Quatf::new(0.5, 0.0, -1.0, 2.0);
        assert_eq!(a + b, Quatf::new(1.5, 2.0, 2.0, 6.0));
        assert_eq!(a * 2.0, Quatf::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_approx_eq!(a.dot(&b), 0.5 + 0.0 - 3.0 + 8.0);
        assert_eq!(a.square_norm(), 30.0);

        // i * j = k
        let i = Quatf::new(0.0, 1.0, 0.0, 0.0);
        let j = Quatf::new(0.0, 0.0, 1.0, 0.0);
        let k = Quatf::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quatf::new(-1.0, 0.0, 0.0, 0.0));
    }
}
