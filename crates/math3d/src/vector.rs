use std::{array, fmt};

use crate::{
    error::{Error, Result},
    MinMax, One, Scalar, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from all of their
///   components.
/// - [`Vector::ZERO`] and the [`Default`] impl create a vector of zeroes.
/// - [`Vector::splat`] copies a single value into every element.
/// - [`Vec3::from_xy`], [`Vec4::from_xy`] and [`Vec4::from_xyz`] take fewer values than the
///   vector has elements; the last value given is repeated into the remaining elements.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::from_buffer`] reads a vector from a [`Buffer`][crate::Buffer].
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors along each axis.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z` and `w`.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays (and panic when out of
///   bounds).
/// - [`Vector::get`], [`Vector::get_mut`] and [`Vector::set`] are checked and return
///   [`Error::Index`] instead.
///
/// Named fields and indices refer to the same storage:
///
/// ```
/// # use math3d::*;
/// let mut v = vec3(1.0, 2.0, 3.0);
/// v.y = 20.0;
/// assert_eq!(v[1], 20.0);
/// v[2] = 30.0;
/// assert_eq!(v.z, 30.0);
/// ```
///
/// # Equality
///
/// `==` compares component-wise with the [`Scalar::EPSILON`] of the element type.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v = Vector::splat(5.0);
    /// assert_eq!(v, vec3(5.0, 5.0, 5.0));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from the leading `values`, repeating the last one into the remaining
    /// elements.
    fn fill_from<const M: usize>(values: [T; M]) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|i| values[i.min(M - 1)])
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v = vec2(1.0, 2.0);
    /// assert_eq!(v.get(1), Ok(&2.0));
    /// assert_eq!(v.get(2), Err(Error::Index { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.0.get(index).ok_or(Error::Index { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] if `index >= N`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0.get_mut(index).ok_or(Error::Index { index, len: N })
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] if `index >= N`. The vector is left unchanged in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared Euclidean length of this vector.
    ///
    /// This avoids the square root computed by [`Vector::norm`].
    pub fn square_norm(&self) -> T {
        self.dot(*self)
    }

    /// Returns the Euclidean length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(vec3(3.0, 4.0, 12.0).norm(), 13.0);
    /// ```
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> T {
        self.square_norm().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the length of `self` is less than
    /// [`Scalar::EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize()?, Vec3d::Z);
    /// assert!(Vec3f::ZERO.normalize().is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn normalize(self) -> Result<Self> {
        let norm = self.norm();
        if norm < T::EPSILON {
            return Err(Error::degenerate("normalize a vector"));
        }
        Ok(self / norm)
    }

    /// Normalizes this vector in place and returns it for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the length of `self` is less than
    /// [`Scalar::EPSILON`]. `self` is not modified in that case.
    pub fn normalize_in_place(&mut self) -> Result<&mut Self> {
        *self = self.normalize()?;
        Ok(self)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    pub fn abs_angle_to(self, other: Self) -> T {
        let cos = self.dot(other) / (self.norm() * other.norm());
        MinMax::clamp(cos, -T::ONE, T::ONE).acos()
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.25), vec2(2.5, 12.5));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| MinMax::min(self[i], other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| MinMax::max(self[i], other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| MinMax::clamp(self[i], min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }
}

impl<T> Vector<T, 3> {
    /// Creates a vector from its `x` and `y` components; `z` is set to `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Vec3f::from_xy(1.0, 2.0), vec3(1.0, 2.0, 2.0));
    /// ```
    pub fn from_xy(x: T, y: T) -> Self
    where
        T: Copy,
    {
        Self::fill_from([x, y])
    }

    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the (right-handed) cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
    /// assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Scalar,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Creates a vector from its `x` and `y` components; `z` and `w` are set to `y`.
    pub fn from_xy(x: T, y: T) -> Self
    where
        T: Copy,
    {
        Self::fill_from([x, y])
    }

    /// Creates a vector from its `x`, `y` and `z` components; `w` is set to `z`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Vec4d::from_xyz(1.0, 2.0, 3.0), vec4(1.0, 2.0, 3.0, 3.0));
    /// assert_eq!(Vec4d::from_xy(1.0, 2.0), vec4(1.0, 2.0, 2.0, 2.0));
    /// ```
    pub fn from_xyz(x: T, y: T, z: T) -> Self
    where
        T: Copy,
    {
        Self::fill_from([x, y, z])
    }

    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Zero, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Vec3f::default(), vec3(0.0, 0.0, 0.0));
        assert_eq!(Vec2d::ZERO, vec2(0.0, 0.0));
        assert_eq!(Vec3f::splat(5.0), vec3(5.0, 5.0, 5.0));
        assert_eq!(Vec3d::from_xy(1.0, 2.0), vec3(1.0, 2.0, 2.0));
        assert_eq!(Vec4f::from_xy(1.0, 2.0), vec4(1.0, 2.0, 2.0, 2.0));
        assert_eq!(Vec4f::from_xyz(1.0, 2.0, 3.0), vec4(1.0, 2.0, 3.0, 3.0));
        assert_eq!(Vec3d::from([1.0, 2.0, 3.0]), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0.0, 1.0);
        v.x = 777.0;
        assert_eq!(v[0], 777.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
        assert_eq!(v.into_array(), [777.0, 9.0]);
    }

    #[test]
    fn checked_access() {
        let mut v = vec4(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v.get(3), Ok(&4.0));
        assert_eq!(v.get(4), Err(Error::Index { index: 4, len: 4 }));

        v.set(0, -1.0).unwrap();
        assert_eq!(v.x, -1.0);

        let before = v;
        assert_eq!(
            v.set(10, 0.0),
            Err(Error::Index { index: 10, len: 4 })
        );
        assert_eq!(v.into_array(), before.into_array());

        *v.get_mut(2).unwrap() = 30.0;
        assert_eq!(v.z, 30.0);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(0.3f64, 1.0)), "(0.3, 1.0)");
    }

    #[test]
    fn norm() {
        assert_eq!(vec3(3.0, 4.0, 12.0).norm(), 13.0);
        assert_eq!(vec3(3.0f32, 4.0, 12.0).square_norm(), 169.0);
        assert_eq!(vec2(3.0, 4.0).norm(), 5.0);
        assert_eq!(Vec4d::W.norm(), 1.0);
    }

    #[test]
    fn normalize() {
        let v = vec3(1.0f32, 2.0, -2.0).normalize().unwrap();
        assert_eq!(v, vec3(1.0 / 3.0, 2.0 / 3.0, -2.0 / 3.0));
        assert_approx_eq!(v.norm(), 1.0);

        assert_eq!(
            Vec3d::ZERO.normalize(),
            Err(Error::DegenerateInput {
                operation: "normalize a vector"
            })
        );
        assert!(vec2(1e-7f32, 0.0).normalize().is_err());
    }

    #[test]
    fn normalize_in_place() {
        let mut v = vec2(0.0, -3.0);
        v.normalize_in_place().unwrap().x = 5.0;
        assert_eq!(v, vec2(5.0, -1.0));

        let mut zero = Vec4f::ZERO;
        assert!(zero.normalize_in_place().is_err());
        assert_eq!(zero.into_array(), [0.0; 4]);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
        assert_eq!(Vec3d::Y.cross(Vec3d::Z), Vec3d::X);
        assert_eq!(Vec3d::Z.cross(Vec3d::X), Vec3d::Y);
        assert_eq!(Vec3d::X.cross(Vec3d::X), Vec3d::ZERO);

        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_approx_eq!(c.dot(a), 0.0);
        assert_approx_eq!(c.dot(b), 0.0);
        assert_eq!(b.cross(a), -c);
    }

    #[test]
    fn abs_angle() {
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
        assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(-1.0, 2.0, f32::NAN);
        let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
        assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
        assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
        assert_eq!(
            vec3(-5.0, 0.5, 5.0).clamp(Vec3d::ZERO, Vec3d::splat(1.0)),
            vec3(0.0, 0.5, 1.0)
        );
    }

    #[test]
    fn resize() {
        assert_eq!(vec2(1.0, 2.0).extend(3.0), vec3(1.0, 2.0, 3.0));
        assert_eq!(vec3(1.0, 2.0, 3.0).extend(4.0).truncate(), vec3(1.0, 2.0, 3.0));
        assert_eq!(vec3(1.0, 2.0, 3.0).truncate(), vec2(1.0, 2.0));
    }
}
