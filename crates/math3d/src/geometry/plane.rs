use std::fmt;

use crate::{
    error::{Error, Result},
    Scalar, Vec3,
};

/// A [`Plane`] with [`f32`] components.
pub type Planef = Plane<f32>;
/// A [`Plane`] with [`f64`] components.
pub type Planed = Plane<f64>;

/// An infinite plane, described by its normal and its signed offset from the origin.
///
/// The plane consists of all points `p` with `normal.dot(p) == offset`. The normal is expected to
/// be of unit length, which makes [`Plane::signed_distance`] return true Euclidean distances. It
/// is not normalized on construction; use [`Plane::normalize`] where that matters.
///
/// The [`Default`] plane is the XY plane through the origin.
///
/// ```
/// # use math3d::*;
/// let floor = Planed::from_point_normal(vec3(0.0, 0.0, 2.0), Vec3::Z);
/// assert_eq!(floor.signed_distance(vec3(7.0, 7.0, 5.0)), 3.0);
/// assert_eq!(floor.signed_distance(Vec3::ZERO), -2.0);
/// assert_eq!(floor.project(vec3(7.0, 7.0, 5.0)), vec3(7.0, 7.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Plane<T> {
    pub normal: Vec3<T>,
    pub offset: T,
}

impl<T> Plane<T> {
    #[inline]
    pub const fn new(normal: Vec3<T>, offset: T) -> Self {
        Self { normal, offset }
    }
}

impl<T: Scalar> Plane<T> {
    /// Creates the plane through `point` that is perpendicular to `normal`.
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        Self::new(normal, normal.dot(point))
    }

    /// Returns an equivalent plane with a unit-length normal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the normal has (nearly) zero length.
    pub fn normalize(&self) -> Result<Self> {
        let norm = self.normal.norm();
        if norm < T::EPSILON {
            return Err(Error::degenerate("normalize a plane"));
        }
        Ok(Self::new(self.normal / norm, self.offset / norm))
    }

    /// Returns the signed distance of `point` from the plane: `normal.dot(point) - offset`.
    ///
    /// The result is positive on the side the normal points to. For a non-unit normal, it is
    /// scaled by the length of the normal.
    pub fn signed_distance(&self, point: Vec3<T>) -> T {
        self.normal.dot(point) - self.offset
    }

    /// Returns the unsigned distance of `point` from the plane.
    pub fn distance_to(&self, point: Vec3<T>) -> T {
        self.signed_distance(point).abs()
    }

    /// Returns the point on the plane that is closest to `point`.
    ///
    /// This also works for planes with a non-unit normal.
    pub fn project(&self, point: Vec3<T>) -> Vec3<T> {
        point - self.normal * (self.signed_distance(point) / self.normal.square_norm())
    }
}

impl<T: Scalar> Default for Plane<T> {
    fn default() -> Self {
        Self::new(Vec3::Z, T::ZERO)
    }
}

/// Compares normal and offset with a tolerance of [`Scalar::EPSILON`].
///
/// Planes with opposite normals and offsets contain the same points, but compare unequal.
impl<T: Scalar> PartialEq for Plane<T> {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.offset.eps_eq(other.offset)
    }
}

impl<T: fmt::Display> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "normal ")?;
        self.normal.fmt(f)?;
        write!(f, ", offset ")?;
        self.offset.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Vec3d};

    use super::*;

    #[test]
    fn default_is_xy_plane() {
        let plane = Planed::default();
        assert_eq!(plane, Plane::new(Vec3d::Z, 0.0));
        assert_eq!(plane.signed_distance(vec3(4.0, -2.0, 3.0)), 3.0);
        assert_eq!(plane.signed_distance(vec3(4.0, -2.0, -3.0)), -3.0);
        assert_eq!(plane.distance_to(vec3(4.0, -2.0, -3.0)), 3.0);
        assert_eq!(plane.project(vec3(4.0, -2.0, -3.0)), vec3(4.0, -2.0, 0.0));
        assert_eq!(plane.to_string(), "normal (0, 0, 1), offset 0");
    }

    #[test]
    fn point_normal() {
        let normal = vec3(1.0, 1.0, 0.0).normalize().unwrap();
        let plane = Planed::from_point_normal(vec3(1.0, 1.0, 5.0), normal);
        assert_approx_eq!(plane.offset, 2.0f64.sqrt());
        assert_approx_eq!(plane.signed_distance(vec3(1.0, 1.0, -3.0)), 0.0);
        assert_approx_eq!(plane.signed_distance(vec3(2.0, 2.0, 0.0)), 2.0f64.sqrt());
        assert_approx_eq!(plane.signed_distance(Vec3d::ZERO), -(2.0f64.sqrt()));
        assert_eq!(plane.project(Vec3d::ZERO), vec3(1.0, 1.0, 0.0));
    }

    #[test]
    fn non_unit_normal() {
        // The plane z = 2, with a normal of length 2.
        let plane = Planed::new(vec3(0.0, 0.0, 2.0), 4.0);
        assert_eq!(plane.signed_distance(vec3(1.0, 1.0, 5.0)), 6.0);
        assert_eq!(plane.project(vec3(1.0, 1.0, 5.0)), vec3(1.0, 1.0, 2.0));

        let unit = plane.normalize().unwrap();
        assert_eq!(unit, Plane::new(Vec3d::Z, 2.0));
        assert_eq!(unit.signed_distance(vec3(1.0, 1.0, 5.0)), 3.0);

        assert_eq!(
            Planed::new(Vec3d::ZERO, 1.0).normalize(),
            Err(Error::DegenerateInput {
                operation: "normalize a plane"
            })
        );
    }
}
