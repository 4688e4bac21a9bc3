use std::{array, fmt};

use itertools::iproduct;

use crate::{
    buffer::Layout,
    error::{Error, Result},
    One, Quat, Scalar, Vec3, Vector, Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A square, column-major `N`x`N` matrix with element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix with raw elements, or
///   create it from an array of row or column vectors.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero elsewhere.
/// - [`Matrix::from_slice`] reads `N * N` elements in either [`Layout`].
/// - [`Matrix::from_buffer`] reads an `[N, N]` [`Buffer`][crate::Buffer].
/// - Rotation, scaling and translation matrices have dedicated constructors on [`Mat2`],
///   [`Mat3`] and [`Mat4`].
///
/// [`Matrix::ZERO`] has every element set to 0. [`Matrix::IDENTITY`] has 1 on its diagonal and 0
/// everywhere else, and is also what [`Default`] returns.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use math3d::*;
/// let mut mat = Matrix::from_rows([
///     [0.0, 1.0],
///     [2.0, 3.0],
/// ]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(1, 0)], 2.0);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices. [`Matrix::get`],
/// [`Matrix::get_mut`] and [`Matrix::set`] return [`Error::MatrixIndex`] instead:
///
/// ```
/// # use math3d::*;
/// let mat = Mat2f::IDENTITY;
/// assert_eq!(mat.get(1, 1), Ok(&1.0));
/// assert!(mat.get(0, 2).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N> {
    /// The identity matrix.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mat = Mat2d::from_fn(|row, col| (row * 10 + col) as f64);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[row][col])
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndex`] if `row` or `col` is not less than `N`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.0
            .get(col)
            .and_then(|column| column.get(row))
            .ok_or(Error::MatrixIndex { row, col, size: N })
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndex`] if `row` or `col` is not less than `N`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.0
            .get_mut(col)
            .and_then(|column| column.get_mut(row))
            .ok_or(Error::MatrixIndex { row, col, size: N })
    }

    /// Replaces the element at `(row, col)` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndex`] if `row` or `col` is not less than `N`. The matrix is not
    /// modified in that case.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns row `index` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][index])
    }

    /// Returns column `index` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column(&self, index: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1.0, 4.0]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal are initialized with zero.
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Creates a matrix from a flat slice of `N * N` elements stored in the given [`Layout`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] if `elems` does not have exactly `N * N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let elems = [1.0, 2.0, 3.0, 4.0];
    /// let rm = Mat2f::from_slice(&elems, Layout::RowMajor)?;
    /// let cm = Mat2f::from_slice(&elems, Layout::ColumnMajor)?;
    /// assert_eq!(rm[(0, 1)], 2.0);
    /// assert_eq!(cm[(0, 1)], 3.0);
    /// assert_eq!(rm, cm.transpose());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_slice(elems: &[T], layout: Layout) -> Result<Self>
    where
        T: Copy,
    {
        if elems.len() != N * N {
            return Err(Error::shape(format!("[{}]", N * N), &[elems.len()]));
        }

        Ok(match layout {
            Layout::RowMajor => Self::from_fn(|row, col| elems[row * N + col]),
            Layout::ColumnMajor => Self::from_fn(|row, col| elems[col * N + row]),
        })
    }

    /// Copies the elements of this matrix into a [`Vec`], in the given [`Layout`].
    pub fn to_vec(&self, layout: Layout) -> Vec<T>
    where
        T: Copy,
    {
        match layout {
            Layout::RowMajor => iproduct!(0..N, 0..N)
                .map(|(row, col)| self.0[col][row])
                .collect(),
            Layout::ColumnMajor => self.0.iter().flatten().copied().collect(),
        }
    }

    /// Returns the elements of this matrix as a column-major slice.
    pub fn as_slice(&self) -> &[T]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.0)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let diag = Matrix::from_diagonal([1.0, 2.0, 3.0]);
    /// assert_eq!(diag.trace(), 6.0);
    /// assert_eq!(Mat4d::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Turns a determinant into the error returned when it is too small to invert.
    fn check_invertible(det: T) -> Result<T> {
        if det.abs() < T::EPSILON {
            log::debug!("refusing to invert {}x{} matrix with determinant {}", N, N, det);
            return Err(Error::SingularMatrix {
                determinant: det.to_f64(),
            });
        }
        Ok(det)
    }
}

impl<T: Scalar> Matrix<T, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Computes the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the absolute value of the [`determinant`] is less
    /// than [`Scalar::EPSILON`].
    ///
    /// [`determinant`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Mat2f::IDENTITY.inverse()?, Mat2f::IDENTITY);
    /// assert!(Mat2f::ZERO.inverse().is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = Self::check_invertible(self.determinant())?;
        let [[a, c], [b, d]] = self.0;
        Ok(Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / det))
    }

    /// Creates a rotation matrix for a counterclockwise rotation by `radians` in the XY plane.
    pub fn rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Computes the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the absolute value of the [`determinant`] is less
    /// than [`Scalar::EPSILON`].
    ///
    /// [`determinant`]: Self::determinant
    pub fn inverse(&self) -> Result<Self> {
        let det = Self::check_invertible(self.determinant())?;

        // The rows of the inverse are the cross products of pairs of columns.
        let [c0, c1, c2] = self.0.map(Vec3::from);
        Ok(Self::from_rows([c1.cross(c2), c2.cross(c0), c0.cross(c1)]) * (T::ONE / det))
    }

    /// Creates a rotation matrix for a counterclockwise rotation by `radians` around the X axis.
    pub fn rotation_x(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([[l, o, o], [o, cos, -sin], [o, sin, cos]])
    }

    /// Creates a rotation matrix for a counterclockwise rotation by `radians` around the Y axis.
    pub fn rotation_y(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([[cos, o, sin], [o, l, o], [-sin, o, cos]])
    }

    /// Creates a rotation matrix for a counterclockwise rotation by `radians` around the Z axis.
    pub fn rotation_z(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([[cos, -sin, o], [sin, cos, o], [o, o, l]])
    }

    /// Creates a matrix scaling each axis by the corresponding element of `scale`.
    pub fn scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale)
    }

    /// Creates the rotation matrix corresponding to a unit quaternion.
    ///
    /// Equivalent to [`Quat::to_matrix3`].
    pub fn from_quat(quat: Quat<T>) -> Self {
        quat.to_matrix3()
    }

    /// Embeds this matrix in the upper-left block of a 4x4 matrix.
    ///
    /// The remaining elements are taken from [`Matrix::IDENTITY`], so a rotation matrix becomes
    /// a homogeneous rotation transform.
    pub fn extend(self) -> Mat4<T> {
        Mat4::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => self.0[col][row],
        })
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let (s, c) = self.sub_determinants();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Computes the 2x2 determinants of the top two and bottom two rows that the determinant and
    /// inverse are built from.
    fn sub_determinants(&self) -> ([T; 6], [T; 6]) {
        let m = |row: usize, col: usize| self.0[col][row];
        let s = [
            m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
            m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2),
            m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3),
            m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2),
            m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3),
            m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3),
        ];
        let c = [
            m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1),
            m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2),
            m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3),
            m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2),
            m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3),
            m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3),
        ];
        (s, c)
    }

    /// Computes the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the absolute value of the [`determinant`] is less
    /// than [`Scalar::EPSILON`].
    ///
    /// [`determinant`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mat = Mat4d::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat.inverse()?, Mat4d::translation(vec3(-1.0, -2.0, -3.0)));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = Self::check_invertible(self.determinant())?;
        let (s, c) = self.sub_determinants();
        let m = |row: usize, col: usize| self.0[col][row];

        #[rustfmt::skip]
        let adjugate = Self::from_rows([
            [
                 m(1, 1) * c[5] - m(1, 2) * c[4] + m(1, 3) * c[3],
                -m(0, 1) * c[5] + m(0, 2) * c[4] - m(0, 3) * c[3],
                 m(3, 1) * s[5] - m(3, 2) * s[4] + m(3, 3) * s[3],
                -m(2, 1) * s[5] + m(2, 2) * s[4] - m(2, 3) * s[3],
            ],
            [
                -m(1, 0) * c[5] + m(1, 2) * c[2] - m(1, 3) * c[1],
                 m(0, 0) * c[5] - m(0, 2) * c[2] + m(0, 3) * c[1],
                -m(3, 0) * s[5] + m(3, 2) * s[2] - m(3, 3) * s[1],
                 m(2, 0) * s[5] - m(2, 2) * s[2] + m(2, 3) * s[1],
            ],
            [
                 m(1, 0) * c[4] - m(1, 1) * c[2] + m(1, 3) * c[0],
                -m(0, 0) * c[4] + m(0, 1) * c[2] - m(0, 3) * c[0],
                 m(3, 0) * s[4] - m(3, 1) * s[2] + m(3, 3) * s[0],
                -m(2, 0) * s[4] + m(2, 1) * s[2] - m(2, 3) * s[0],
            ],
            [
                -m(1, 0) * c[3] + m(1, 1) * c[1] - m(1, 2) * c[0],
                 m(0, 0) * c[3] - m(0, 1) * c[1] + m(0, 2) * c[0],
                -m(3, 0) * s[3] + m(3, 1) * s[1] - m(3, 2) * s[0],
                 m(2, 0) * s[3] - m(2, 1) * s[1] + m(2, 2) * s[0],
            ],
        ]);
        Ok(adjugate * (T::ONE / det))
    }

    /// Creates a homogeneous translation by `offset`.
    pub fn translation(offset: Vec3<T>) -> Self {
        let mut mat = Self::IDENTITY;
        mat.0[3] = offset.extend(T::ONE).into_array();
        mat
    }

    /// Creates a homogeneous transform scaling each axis by the corresponding element of `scale`.
    pub fn scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale.extend(T::ONE))
    }

    /// Creates a homogeneous transform that applies `rotation` first, then `translation`.
    pub fn from_rotation_translation(rotation: Mat3<T>, translation: Vec3<T>) -> Self {
        let mut mat = rotation.extend();
        mat.0[3] = translation.extend(T::ONE).into_array();
        mat
    }

    /// Returns the upper-left 3x3 block of this matrix.
    ///
    /// For an affine transform, this is its linear (rotation and scale) part.
    pub fn truncate(&self) -> Mat3<T> {
        Mat3::from_fn(|row, col| self.0[col][row])
    }

    /// Transforms a point (with an implicit `w` of 1) by this homogeneous transform.
    ///
    /// The result is divided by the resulting `w` component.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        let v = *self * point.extend(T::ONE);
        v.truncate() / v.w
    }

    /// Transforms a direction (with an implicit `w` of 0) by this homogeneous transform.
    ///
    /// Translation does not affect directions.
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        self.truncate() * vector
    }
}

impl<T: Zero + One + Copy, const N: usize> Default for Matrix<T, N> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T, const N: usize>(&'a Matrix<T, N>, usize);

        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    self.0 .0[col][self.1].fmt(f)?;
                }
                write!(f, "]")
            }
        }

        // Natural writing order (row-wise), regardless of storage order.
        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..N {
            if row != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for col in 0..N {
                if col != 0 {
                    write!(f, ", ")?;
                }
                self.0[col][row].fmt(f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, vec4};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            Mat3d::from_columns([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]),
        );
        let mat = Mat2f::from_rows([vec2(1.0, 2.0), vec2(3.0, 4.0)]);
        assert_eq!(mat.row(1), vec2(3.0, 4.0));
        assert_eq!(mat.column(1), vec2(2.0, 4.0));
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat3f::default(), Mat3f::IDENTITY);
        assert_eq!(Mat4d::default().trace(), 4.0);
        assert_ne!(Mat2d::default(), Mat2d::ZERO);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1.0, 2.0]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1.0, 0.0],
            [0.0, 2.0],
        ]));

        assert_eq!(mat.into_diagonal(), [1.0, 2.0]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");
        assert_eq!(format!("{}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn checked_access() {
        let mut mat = Mat3f::ZERO;
        mat.set(2, 0, 5.0).unwrap();
        assert_eq!(mat[(2, 0)], 5.0);
        assert_eq!(mat.get(2, 0), Ok(&5.0));
        assert_eq!(
            mat.get(3, 0),
            Err(Error::MatrixIndex {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(mat.set(0, 3, 1.0).is_err());
        assert!(mat.get_mut(usize::MAX, 0).is_err());
    }

    #[test]
    fn slices() {
        let elems: Vec<f64> = (0..9).map(f64::from).collect();

        let rm = Mat3d::from_slice(&elems, Layout::RowMajor).unwrap();
        assert_eq!(rm.row(0), vec3(0.0, 1.0, 2.0));
        assert_eq!(rm.to_vec(Layout::RowMajor), elems);

        let cm = Mat3d::from_slice(&elems, Layout::ColumnMajor).unwrap();
        assert_eq!(cm.column(0), vec3(0.0, 1.0, 2.0));
        assert_eq!(cm.to_vec(Layout::ColumnMajor), elems);
        assert_eq!(cm.as_slice(), &elems[..]);

        assert_eq!(
            Mat3d::from_slice(&elems[..8], Layout::RowMajor),
            Err(Error::Shape {
                expected: "[9]".into(),
                found: vec![8],
            })
        );
        assert!(Mat2d::from_slice(&elems, Layout::ColumnMajor).is_err());
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);
        let vec = vec2(4.0, 5.0);
        let out = mat * vec;
        assert_eq!(out, [4.0 * 0.0 + 5.0 * 1.0, 4.0 * 2.0 + 5.0 * 3.0]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0],
            [-1.0, 0.0, 2.0],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], 1.0 * 10.0 + 2.0 * 13.0 + 3.0 * 0.0);
        assert_eq!(c[(2, 2)], 7.0 * 11.0 + 8.0 * 14.0 + 9.0 * 2.0);
        assert_eq!(a * Mat3d::IDENTITY, a);
        assert_eq!(Mat3d::IDENTITY * a, a);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Mat3d::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(testmat.determinant(), 54.0);
        assert_eq!(testmat.transpose().determinant(), 54.0);

        #[rustfmt::skip]
        let upper = Mat4d::from_rows([
            [2.0, 1.0, 0.0, 3.0],
            [0.0, 3.0, 1.0, 0.0],
            [0.0, 0.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 5.0],
        ]);
        assert_eq!(upper.determinant(), 120.0);
        assert_eq!(upper.transpose().determinant(), 120.0);

        // Swapping two rows flips the sign.
        let swapped = Mat4d::from_rows([upper.row(1), upper.row(0), upper.row(2), upper.row(3)]);
        assert_eq!(swapped.determinant(), -120.0);
    }

    #[test]
    fn inverse() {
        let m2 = Mat2d::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(m2 * m2.inverse().unwrap(), Mat2d::IDENTITY);

        #[rustfmt::skip]
        let m3 = Mat3d::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(m3 * m3.inverse().unwrap(), Mat3d::IDENTITY);
        assert_eq!(m3.inverse().unwrap() * m3, Mat3d::IDENTITY);

        #[rustfmt::skip]
        let m4 = Mat4d::from_rows([
            [2.0, 1.0, 0.0, 3.0],
            [1.0, 3.0, 1.0, 0.0],
            [0.0, -1.0, 4.0, 2.0],
            [1.0, 0.0, 2.0, 5.0],
        ]);
        assert_eq!(m4 * m4.inverse().unwrap(), Mat4d::IDENTITY);
        assert_eq!(m4.inverse().unwrap().inverse().unwrap(), m4);
    }

    #[test]
    fn singular() {
        let err = Mat3f::ZERO.inverse().unwrap_err();
        assert_eq!(err, Error::SingularMatrix { determinant: 0.0 });

        #[rustfmt::skip]
        let rank2 = Mat3d::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert!(matches!(
            rank2.inverse(),
            Err(Error::SingularMatrix { .. })
        ));

        let tiny = Mat4d::from_diagonal([1e-2, 1e-2, 1e-2, 1e-1]);
        assert!(tiny.inverse().is_err());
        assert!(Mat2f::from_diagonal([1e-3, 1e-3]).inverse().is_err());
    }

    #[test]
    fn rotation() {
        assert_eq!(Mat2d::rotation(0.0), Mat2d::IDENTITY);
        assert_eq!(Mat2d::rotation(FRAC_PI_2) * vec2(1.0, 0.0), vec2(0.0, 1.0));
        assert_approx_eq!(Mat2d::rotation(PI), Mat2d::from_diagonal([-1.0, -1.0]));

        assert_eq!(Mat3d::rotation_x(FRAC_PI_2) * Vec3::Y, Vec3::Z);
        assert_eq!(Mat3d::rotation_y(FRAC_PI_2) * Vec3::Z, Vec3::X);
        assert_eq!(Mat3d::rotation_z(FRAC_PI_2) * Vec3::X, Vec3::Y);

        let rot = Mat3d::rotation_x(0.3) * Mat3d::rotation_y(-1.2);
        assert_eq!(rot.inverse().unwrap(), rot.transpose());
        assert_approx_eq!(rot.determinant(), 1.0);
    }

    #[test]
    fn homogeneous() {
        let t = Mat4d::translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(t * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(t.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
        assert_eq!(t.transform_vector(vec3(1.0, 1.0, 1.0)), vec3(1.0, 1.0, 1.0));

        let s = Mat4d::scale(vec3(2.0, 3.0, 4.0));
        assert_eq!(s.transform_point(Vec3::splat(1.0)), vec3(2.0, 3.0, 4.0));
        assert_eq!(s.truncate(), Mat3d::scale(vec3(2.0, 3.0, 4.0)));

        let rot = Mat3d::rotation_z(FRAC_PI_2);
        let m = Mat4d::from_rotation_translation(rot, vec3(0.0, 0.0, 1.0));
        assert_eq!(m.transform_point(Vec3::X), vec3(0.0, 1.0, 1.0));
        assert_eq!(m.truncate(), rot);
        assert_eq!(rot.extend().truncate(), rot);
        assert_eq!(rot.extend()[(3, 3)], 1.0);
    }
}
