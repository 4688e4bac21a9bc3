use std::{fmt, ops::Mul};

use crate::{approx::ApproxEq, Mat4, One, Quat, Scalar, Vec3, Zero};

/// A [`Pose3`] with [`f32`] components.
pub type Pose3f = Pose3<f32>;
/// A [`Pose3`] with [`f64`] components.
pub type Pose3d = Pose3<f64>;

/// A rigid transform in 3D space: a rotation followed by a translation.
///
/// Applying a pose to a point first rotates the point by [`Pose3::orientation`], then moves it by
/// [`Pose3::position`]. The orientation is expected to be a unit quaternion; a pose does not
/// normalize it.
///
/// Poses compose like quaternions and matrices do: `a * b` applies `b` first, then `a`.
///
/// ```
/// # use math3d::*;
/// # use std::f64::consts::FRAC_PI_2;
/// let pose = Pose3d::new(vec3(1.0, 0.0, 0.0), Quatd::from_rotation_z(FRAC_PI_2));
/// assert_eq!(pose.transform_point(Vec3d::X), vec3(1.0, 1.0, 0.0));
/// assert_eq!(pose.transform_vector(Vec3d::X), Vec3d::Y);
/// assert_eq!(pose * pose.invert(), Pose3d::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pose3<T> {
    pub position: Vec3<T>,
    pub orientation: Quat<T>,
}

impl<T: Zero + One> Pose3<T> {
    /// The pose that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };
}

impl<T> Pose3<T> {
    #[inline]
    pub const fn new(position: Vec3<T>, orientation: Quat<T>) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl<T: Scalar> Pose3<T> {
    /// Creates a pure translation.
    pub fn from_position(position: Vec3<T>) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Creates a pure rotation about the origin.
    pub fn from_orientation(orientation: Quat<T>) -> Self {
        Self::new(Vec3::ZERO, orientation)
    }

    /// Extracts the pose from a homogeneous transform made of a rotation and a translation.
    ///
    /// Scale, shear and projection components of `mat` are not supported and yield meaningless
    /// results.
    pub fn from_matrix4(mat: &Mat4<T>) -> Self {
        Self::new(
            mat.column(3).truncate(),
            Quat::from_rotation_matrix4(mat),
        )
    }

    /// Returns the pose that applies `other` first, then `self`.
    ///
    /// Equivalent to `self * other`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            position: self.position + self.orientation * other.position,
            orientation: self.orientation * other.orientation,
        }
    }

    /// Returns the inverse pose, which undoes `self`.
    ///
    /// The orientation must be of unit length, which allows inverting it with
    /// [`Quat::conjugate`]. Therefore, this operation cannot fail.
    pub fn invert(&self) -> Self {
        let orientation = self.orientation.conjugate();
        Self {
            position: -(orientation * self.position),
            orientation,
        }
    }

    /// Rotates, then translates `point`.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        self.orientation * point + self.position
    }

    /// Rotates `vector`; directions are not affected by the translation.
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        self.orientation * vector
    }

    /// Returns the equivalent homogeneous transform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let pose = Pose3f::new(vec3(1.0, 2.0, 3.0), Quatf::from_rotation_y(0.5));
    /// let p = vec3(-1.0, 0.5, 2.0);
    /// assert_eq!(pose.to_matrix4().transform_point(p), pose.transform_point(p));
    /// ```
    pub fn to_matrix4(&self) -> Mat4<T> {
        Mat4::from_rotation_translation(self.orientation.to_matrix3(), self.position)
    }
}

impl<T: Scalar> Default for Pose3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composition: the result applies `rhs` first, then `self`.
impl<T: Scalar> Mul for Pose3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

/// Transforms a point.
impl<T: Scalar> Mul<Vec3<T>> for Pose3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.transform_point(rhs)
    }
}

/// Compares position and orientation components with a tolerance of [`Scalar::EPSILON`].
///
/// Like for [`Quat`], poses whose orientations differ only in sign compare unequal.
impl<T: Scalar> PartialEq for Pose3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.orientation == other.orientation
    }
}

impl<T: ApproxEq> ApproxEq for Pose3<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.position.abs_diff_eq(&other.position, abs_tolerance)
            && self.orientation.abs_diff_eq(&other.orientation, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.position.rel_diff_eq(&other.position, rel_tolerance)
            && self.orientation.rel_diff_eq(&other.orientation, rel_tolerance)
    }
}

impl<T: fmt::Display> fmt::Display for Pose3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position ")?;
        self.position.fmt(f)?;
        write!(f, ", orientation ")?;
        self.orientation.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec3, Quatd, Quatf, Vec3d};

    use super::*;

    fn sample() -> Pose3d {
        let orientation = Quatd::from_axis_angle(vec3(1.0, -2.0, 0.5), 1.2).unwrap();
        Pose3d::new(vec3(0.5, -3.0, 2.0), orientation)
    }

    #[test]
    fn identity() {
        let p = vec3(1.0, 2.0, 3.0);
        assert_eq!(Pose3d::default(), Pose3d::IDENTITY);
        assert_eq!(Pose3d::IDENTITY.transform_point(p), p);
        assert_eq!(Pose3d::IDENTITY.to_matrix4(), Mat4::IDENTITY);
        assert_eq!(sample() * Pose3d::IDENTITY, sample());
        assert_eq!(Pose3d::IDENTITY * sample(), sample());
    }

    #[test]
    fn transform() {
        let pose = Pose3d::new(vec3(0.0, 0.0, 1.0), Quatd::from_rotation_x(FRAC_PI_2));
        assert_eq!(pose.transform_point(Vec3d::Y), vec3(0.0, 0.0, 2.0));
        assert_eq!(pose * Vec3d::ZERO, vec3(0.0, 0.0, 1.0));
        assert_eq!(pose.transform_vector(Vec3d::Y), Vec3d::Z);

        let shift = Pose3d::from_position(vec3(1.0, 1.0, 1.0));
        assert_eq!(shift.transform_vector(Vec3d::X), Vec3d::X);
        assert_eq!(shift.transform_point(Vec3d::X), vec3(2.0, 1.0, 1.0));

        let turn = Pose3d::from_orientation(Quatd::from_rotation_z(PI));
        assert_eq!(turn.transform_point(vec3(1.0, 2.0, 0.0)), vec3(-1.0, -2.0, 0.0));
    }

    #[test]
    fn compose() {
        let a = sample();
        let b = Pose3d::new(vec3(1.0, 1.0, 0.0), Quatd::from_rotation_z(0.4));
        let p = vec3(-0.5, 2.0, 1.5);

        assert_eq!((a * b).transform_point(p), a.transform_point(b.transform_point(p)));
        assert_eq!((b * a).transform_point(p), b.transform_point(a.transform_point(p)));
        assert_eq!(a.compose(&b), a * b);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn invert() {
        let pose = sample();
        let p = vec3(4.0, 0.0, -1.0);
        assert_eq!(pose * pose.invert(), Pose3d::IDENTITY);
        assert_eq!(pose.invert() * pose, Pose3d::IDENTITY);
        assert_eq!(pose.invert().transform_point(pose.transform_point(p)), p);
        assert_eq!(pose.invert().invert(), pose);
        assert_eq!(Pose3d::IDENTITY.invert(), Pose3d::IDENTITY);
    }

    #[test]
    fn matrix() {
        let pose = sample();
        let mat = pose.to_matrix4();
        let p = vec3(1.0, 2.0, 3.0);
        assert_eq!(mat.transform_point(p), pose.transform_point(p));
        assert_eq!(mat.transform_vector(p), pose.transform_vector(p));
        assert_eq!(mat.inverse().unwrap(), pose.invert().to_matrix4());
        assert_eq!(pose.invert().to_matrix4() * mat, Mat4::IDENTITY);
        assert_eq!((pose * pose).to_matrix4(), mat * mat);

        let back = Pose3d::from_matrix4(&mat);
        assert_eq!(back.position, pose.position);
        assert!(back.orientation.rotation_eq(&pose.orientation));
    }

    #[test]
    fn single_precision() {
        let pose = Pose3f::new(vec3(1.0, 2.0, 3.0), Quatf::from_rotation_y(0.7));
        let p = vec3(0.1, -0.2, 0.3);
        assert_approx_eq!(pose.invert().transform_point(pose.transform_point(p)), p);
        assert_approx_eq!(pose * pose.invert(), Pose3f::IDENTITY).abs(1e-5);
    }

    #[test]
    fn fmt() {
        let pose = Pose3f::from_position(vec3(1.0, 2.0, 3.0));
        assert_eq!(
            pose.to_string(),
            "position (1, 2, 3), orientation (w: 1, x: 0, y: 0, z: 0)"
        );
    }
}
