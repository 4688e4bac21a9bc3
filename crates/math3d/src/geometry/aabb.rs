use std::fmt;

use crate::{Scalar, Vec3};

/// An [`Aabb`] with [`f32`] components.
pub type Aabbf = Aabb<f32>;
/// An [`Aabb`] with [`f64`] components.
pub type Aabbd = Aabb<f64>;

/// An axis-aligned bounding box.
///
/// The box spans from its [`min`][Aabb::min] to its [`max`][Aabb::max] corner, both inclusive.
/// `min <= max` holds for every component.
///
/// ```
/// # use math3d::*;
/// let unit = Aabbd::new(Vec3::ZERO, Vec3::splat(1.0));
/// assert!(unit.contains(vec3(0.5, 0.5, 0.5)));
/// assert!(unit.contains(vec3(1.0, 0.0, 1.0)));
/// assert!(!unit.contains(vec3(1.5, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Aabb<T> {
    min: Vec3<T>,
    max: Vec3<T>,
}

impl<T: Scalar> Aabb<T> {
    /// Creates a box from its minimum and maximum corners.
    ///
    /// # Panics
    ///
    /// Panics if any component of `min` is greater than the same component of `max` (or if any
    /// component is NaN). Use [`Aabb::from_corners`] for corners in arbitrary order.
    pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        assert!(
            (0..3).all(|i| min[i] <= max[i]),
            "min={}, max={}",
            min,
            max
        );
        Self { min, max }
    }

    /// Creates the box spanned by two opposite corners.
    pub fn from_corners(a: Vec3<T>, b: Vec3<T>) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Computes the smallest box that encompasses `points`.
    ///
    /// Returns [`None`] if `points` is an empty iterator.
    pub fn bounding<I: IntoIterator<Item = P>, P: Into<Vec3<T>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();

        let first: Vec3<T> = iter.next()?.into();
        let (mut min, mut max) = (first, first);

        for pt in iter {
            let pt = pt.into();
            min = min.min(pt);
            max = max.max(pt);
        }

        Some(Self::new(min, max))
    }

    #[inline]
    pub fn min(&self) -> Vec3<T> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec3<T> {
        self.max
    }

    pub fn center(&self) -> Vec3<T> {
        (self.min + self.max) * T::HALF
    }

    /// Returns the size of the box along each axis (`max - min`).
    pub fn extent(&self) -> Vec3<T> {
        self.max - self.min
    }

    pub fn half_extent(&self) -> Vec3<T> {
        self.extent() * T::HALF
    }

    /// Returns whether `point` lies inside of the box or on its boundary.
    pub fn contains(&self, point: Vec3<T>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns whether `self` and `other` overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Computes the box where `self` and `other` overlap.
    ///
    /// Returns [`None`] if the boxes don't intersect. Touching boxes intersect in a flat box.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::new(self.min.max(other.min), self.max.min(other.max)))
    }

    /// Returns the smallest box that encompasses both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Grows the box so that it contains `point`.
    pub fn expand_to_include(&mut self, point: Vec3<T>) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

/// Compares both corners with a tolerance of [`Scalar::EPSILON`].
impl<T: Scalar> PartialEq for Aabb<T> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<T: fmt::Display> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.min.fmt(f)?;
        write!(f, " - ")?;
        self.max.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Vec3d, Vec3f};

    use super::*;

    fn unit() -> Aabbd {
        Aabb::new(Vec3::ZERO, Vec3::splat(1.0))
    }

    #[test]
    fn construction() {
        let a = vec3(1.0, -1.0, 2.0);
        let b = vec3(-1.0, 1.0, 0.0);
        let aabb = Aabbd::from_corners(a, b);
        assert_eq!(aabb.min(), vec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max(), vec3(1.0, 1.0, 2.0));
        assert_eq!(aabb, Aabbd::from_corners(b, a));
        assert_eq!(aabb.to_string(), "(-1, -1, 0) - (1, 1, 2)");

        let flat = Aabbf::new(Vec3f::X, Vec3f::X);
        assert_eq!(flat.extent(), Vec3f::ZERO);
    }

    #[test]
    #[should_panic]
    fn inverted() {
        Aabbd::new(vec3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 1.0));
    }

    #[test]
    fn bounding() {
        assert_eq!(Aabbd::bounding(Vec::<Vec3d>::new()), None);

        let single = Aabbd::bounding([vec3(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(single.extent(), Vec3d::ZERO);

        let aabb = Aabbd::bounding([
            [0.5, 0.0, 0.0],
            [-1.0, 2.0, 0.5],
            [0.0, -3.0, 1.0],
        ])
        .unwrap();
        assert_eq!(aabb, Aabb::new(vec3(-1.0, -3.0, 0.0), vec3(0.5, 2.0, 1.0)));
    }

    #[test]
    fn measures() {
        let aabb = Aabbd::new(vec3(-1.0, 0.0, 2.0), vec3(3.0, 1.0, 2.0));
        assert_eq!(aabb.center(), vec3(1.0, 0.5, 2.0));
        assert_eq!(aabb.extent(), vec3(4.0, 1.0, 0.0));
        assert_eq!(aabb.half_extent(), vec3(2.0, 0.5, 0.0));
    }

    #[test]
    fn contains() {
        let aabb = unit();
        assert!(aabb.contains(vec3(0.5, 0.5, 0.5)));
        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::splat(1.0)));
        assert!(!aabb.contains(vec3(1.5, 0.0, 0.0)));
        assert!(!aabb.contains(vec3(0.5, -0.1, 0.5)));
    }

    #[test]
    fn intersects() {
        let aabb = unit();
        let overlapping = Aabbd::new(Vec3::splat(0.5), Vec3::splat(2.0));
        let touching = Aabbd::new(vec3(1.0, 0.0, 0.0), vec3(2.0, 1.0, 1.0));
        let apart = Aabbd::new(vec3(1.5, 0.0, 0.0), vec3(2.0, 1.0, 1.0));
        assert!(aabb.intersects(&aabb));
        assert!(aabb.intersects(&overlapping));
        assert!(overlapping.intersects(&aabb));
        assert!(aabb.intersects(&touching));
        assert!(!aabb.intersects(&apart));
        assert!(!apart.intersects(&aabb));

        assert_eq!(
            aabb.intersection(&overlapping),
            Some(Aabb::new(Vec3::splat(0.5), Vec3::splat(1.0)))
        );
        assert_eq!(aabb.intersection(&touching).unwrap().extent(), vec3(0.0, 1.0, 1.0));
        assert_eq!(aabb.intersection(&apart), None);
    }

    #[test]
    fn union_and_expand() {
        let aabb = unit();
        let other = Aabbd::new(vec3(2.0, -1.0, 0.0), vec3(3.0, 0.0, 0.5));
        let union = aabb.union(&other);
        assert_eq!(union, Aabb::new(vec3(0.0, -1.0, 0.0), vec3(3.0, 1.0, 1.0)));
        assert_eq!(union, other.union(&aabb));
        assert!(union.contains(aabb.center()) && union.contains(other.center()));

        let mut grown = aabb;
        grown.expand_to_include(vec3(0.5, 0.5, 0.5));
        assert_eq!(grown, aabb);
        grown.expand_to_include(vec3(-2.0, 0.5, 4.0));
        assert_eq!(grown, Aabb::new(vec3(-2.0, 0.0, 0.0), vec3(1.0, 1.0, 4.0)));
    }
}
