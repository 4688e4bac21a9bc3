use std::fmt;

use crate::{
    error::{Error, Result},
    Scalar, Vec3,
};

/// A [`Line`] with [`f32`] components.
pub type Linef = Line<f32>;
/// A [`Line`] with [`f64`] components.
pub type Lined = Line<f64>;

/// A line through two points in 3D space.
///
/// The two points also describe a segment and a direction, but [`Line::distance_to`] and
/// [`Line::closest_point`] treat the line as infinitely long.
#[derive(Debug, Clone, Copy)]
pub struct Line<T> {
    pub start: Vec3<T>,
    pub end: Vec3<T>,
}

impl<T> Line<T> {
    /// Creates the line from `start` to `end`.
    #[inline]
    pub const fn from_points(start: Vec3<T>, end: Vec3<T>) -> Self {
        Self { start, end }
    }
}

impl<T: Scalar> Line<T> {
    /// Creates the line from `point` to `point + direction`.
    ///
    /// `direction` is not normalized, so it also determines [`Line::length`].
    pub fn from_point_direction(point: Vec3<T>, direction: Vec3<T>) -> Self {
        Self::from_points(point, point + direction)
    }

    /// Returns the vector from `start` to `end`.
    fn delta(&self) -> Vec3<T> {
        self.end - self.start
    }

    /// Returns the unit vector pointing from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if `start` and `end` (nearly) coincide.
    pub fn direction(&self) -> Result<Vec3<T>> {
        self.delta()
            .normalize()
            .map_err(|_| Error::degenerate("take the direction of a zero-length line"))
    }

    /// Returns the distance between `start` and `end`.
    pub fn length(&self) -> T {
        self.delta().norm()
    }

    /// Returns the point at parameter `t`, where `t = 0` is `start` and `t = 1` is `end`.
    pub fn point_at(&self, t: T) -> Vec3<T> {
        self.start + self.delta() * t
    }

    /// Computes the shortest distance from `point` to the infinite line through `start` and `end`.
    ///
    /// If the line has (nearly) zero length, this is the distance from `point` to `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let line = Lined::from_points(Vec3::ZERO, vec3(1.0, 0.0, 0.0));
    /// assert_eq!(line.distance_to(vec3(5.0, 3.0, 4.0)), 5.0);
    /// ```
    pub fn distance_to(&self, point: Vec3<T>) -> T {
        let length = self.length();
        if length < T::EPSILON {
            return (point - self.start).norm();
        }
        (point - self.start).cross(point - self.end).norm() / length
    }

    /// Returns the point on the infinite line that is closest to `point`.
    ///
    /// If the line has (nearly) zero length, this returns `start`.
    pub fn closest_point(&self, point: Vec3<T>) -> Vec3<T> {
        let delta = self.delta();
        let square_length = delta.square_norm();
        if square_length.sqrt() < T::EPSILON {
            return self.start;
        }
        self.point_at((point - self.start).dot(delta) / square_length)
    }
}

/// Compares both points with a tolerance of [`Scalar::EPSILON`].
impl<T: Scalar> PartialEq for Line<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T: fmt::Display> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt(f)?;
        write!(f, " -> ")?;
        self.end.fmt(f)
    }
}
