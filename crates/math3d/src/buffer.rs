//! Conversion between math3d types and n-dimensional array buffers.
//!
//! A [`Buffer`] is an [`ndarray`] array of either [`f32`] or [`f64`] elements. Vectors convert to
//! buffers of shape `[N]` and back from `[N]`, `[N, 1]` or `[1, N]`. Matrices convert to and from
//! buffers of shape `[N, N]`, indexed by `(row, column)`. Slices of vectors convert to and from
//! buffers of shape `[len, N]`.
//!
//! Element types are never converted implicitly. Reading an [`f32`] type from an [`f64`] buffer
//! (or the other way around) fails with [`Error::Dtype`].
//!
//! ```
//! # use math3d::*;
//! let buffer = Buffer::from_shape_vec(&[3, 1], vec![1.0f32, 2.0, 3.0], Layout::RowMajor)?;
//! assert_eq!(Vec3f::from_buffer(&buffer)?, vec3(1.0, 2.0, 3.0));
//! assert!(Vec3d::from_buffer(&buffer).is_err());
//! # Ok::<_, Error>(())
//! ```

use std::fmt;

use ndarray::{Array1, Array2, ArrayD, ArrayViewD, Ix2, IxDyn, ShapeBuilder};

use crate::{
    error::{Error, Result},
    Mat2d, Mat2f, Mat3d, Mat3f, Mat4d, Mat4f, Matrix, Scalar, Vec2d, Vec2f, Vec3d, Vec3f, Vec4d,
    Vec4f, Vector,
};

/// The element type of a [`Buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    F32,
    F64,
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dtype::F32 => "float32",
            Dtype::F64 => "float64",
        })
    }
}

/// Memory order of flat element sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// The last index varies fastest ("C order").
    #[default]
    RowMajor,
    /// The first index varies fastest ("Fortran order").
    ColumnMajor,
}

/// An n-dimensional array of [`f32`] or [`f64`] elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

impl Buffer {
    /// Creates a buffer of the given `shape` from a flat `Vec` of elements stored in `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] if the number of elements in `data` does not match `shape`.
    pub fn from_shape_vec<T: Scalar>(shape: &[usize], data: Vec<T>, layout: Layout) -> Result<Self> {
        let len = data.len();
        let array = match layout {
            Layout::RowMajor => ArrayD::from_shape_vec(IxDyn(shape), data),
            Layout::ColumnMajor => ArrayD::from_shape_vec(IxDyn(shape).f(), data),
        };
        array
            .map(T::wrap_array)
            .map_err(|_| Error::shape(format!("with {len} elements"), shape))
    }

    /// Returns the element type of this buffer.
    pub fn dtype(&self) -> Dtype {
        match self {
            Buffer::F32(_) => Dtype::F32,
            Buffer::F64(_) => Dtype::F64,
        }
    }

    /// Returns the shape (the length of each axis) of this buffer.
    pub fn shape(&self) -> &[usize] {
        match self {
            Buffer::F32(array) => array.shape(),
            Buffer::F64(array) => array.shape(),
        }
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// Returns whether this buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a view of the elements, if they are of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dtype`] if the buffer holds elements of the other precision.
    pub fn view<T: Scalar>(&self) -> Result<ArrayViewD<'_, T>> {
        T::view_array(self).ok_or_else(|| {
            log::trace!("rejecting {} buffer (expected {})", self.dtype(), T::DTYPE);
            Error::Dtype {
                expected: T::DTYPE,
                found: self.dtype(),
            }
        })
    }

    /// Copies the elements into a flat `Vec` in the given `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dtype`] if the buffer holds elements of the other precision.
    pub fn to_vec<T: Scalar>(&self, layout: Layout) -> Result<Vec<T>> {
        let view = self.view::<T>()?;
        Ok(match layout {
            Layout::RowMajor => view.iter().copied().collect(),
            // Reversing the axes turns logical column-major order into row-major order.
            Layout::ColumnMajor => view.t().iter().copied().collect(),
        })
    }
}

impl From<ArrayD<f32>> for Buffer {
    fn from(array: ArrayD<f32>) -> Self {
        Buffer::F32(array)
    }
}

impl From<ArrayD<f64>> for Buffer {
    fn from(array: ArrayD<f64>) -> Self {
        Buffer::F64(array)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Copies this vector into a buffer of shape `[N]`.
    pub fn to_buffer(&self) -> Buffer {
        T::wrap_array(Array1::from_vec(self.as_slice().to_vec()).into_dyn())
    }

    /// Reads a vector from a buffer of shape `[N]`, `[N, 1]` or `[1, N]`.
    ///
    /// # Errors
    ///
    /// - [`Error::Dtype`] if the buffer does not hold elements of type `T`.
    /// - [`Error::Shape`] if the buffer has any other shape.
    pub fn from_buffer(buffer: &Buffer) -> Result<Self> {
        let view = buffer.view::<T>()?;
        match view.shape() {
            [n] | [n, 1] | [1, n] if *n == N => {}
            shape => {
                return Err(Error::shape(
                    format!("[{N}], [{N}, 1] or [1, {N}]"),
                    shape,
                ))
            }
        }

        // All accepted shapes hold the elements in logical order.
        let elems: Vec<T> = view.iter().copied().collect();
        Ok(Self::from_fn(|i| elems[i]))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Copies this matrix into a buffer of shape `[N, N]`, indexed by `(row, column)`.
    pub fn to_buffer(&self) -> Buffer {
        T::wrap_array(Array2::from_shape_fn((N, N), |(row, col)| self[(row, col)]).into_dyn())
    }

    /// Reads a matrix from a buffer of shape `[N, N]`, indexed by `(row, column)`.
    ///
    /// The memory order of the buffer does not matter.
    ///
    /// # Errors
    ///
    /// - [`Error::Dtype`] if the buffer does not hold elements of type `T`.
    /// - [`Error::Shape`] if the buffer has any other shape.
    pub fn from_buffer(buffer: &Buffer) -> Result<Self> {
        let view = buffer.view::<T>()?;
        let expected = || format!("[{N}, {N}]");
        if view.shape() != [N, N] {
            return Err(Error::shape(expected(), view.shape()));
        }
        let view = view
            .into_dimensionality::<Ix2>()
            .map_err(|_| Error::shape(expected(), buffer.shape()))?;
        Ok(Self::from_fn(|row, col| view[(row, col)]))
    }
}

/// Copies a slice of vectors into a buffer of shape `[vectors.len(), N]`.
///
/// Row `i` of the buffer holds `vectors[i]`.
pub fn vectors_to_buffer<T: Scalar, const N: usize>(vectors: &[Vector<T, N>]) -> Buffer {
    T::wrap_array(Array2::from_shape_fn((vectors.len(), N), |(i, j)| vectors[i][j]).into_dyn())
}

/// Reads a list of vectors from the rows of a buffer of shape `[len, N]`.
///
/// # Errors
///
/// - [`Error::Dtype`] if the buffer does not hold elements of type `T`.
/// - [`Error::Shape`] if the buffer is not 2-dimensional with `N` columns.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// let points = [vec3(0.0, 1.0, 2.0), vec3(3.0, 4.0, 5.0)];
/// let buffer = vectors_to_buffer(&points);
/// assert_eq!(buffer.shape(), [2, 3]);
/// assert_eq!(buffer_to_vectors::<f64, 3>(&buffer)?, points);
/// # Ok::<_, Error>(())
/// ```
pub fn buffer_to_vectors<T: Scalar, const N: usize>(buffer: &Buffer) -> Result<Vec<Vector<T, N>>> {
    let view = buffer.view::<T>()?;
    match view.shape() {
        [_, n] if *n == N => {}
        shape => return Err(Error::shape(format!("[_, {N}]"), shape)),
    }

    let elems: Vec<T> = view.iter().copied().collect();
    Ok(bytemuck::cast_slice(&elems).to_vec())
}

macro_rules! named_conversions {
    ($($ty:ty: $to:ident, $from:ident;)+) => {
        $(
            #[doc = concat!("Copies a [`", stringify!($ty), "`] into a buffer.")]
            pub fn $to(value: &$ty) -> Buffer {
                value.to_buffer()
            }

            #[doc = concat!("Reads a [`", stringify!($ty), "`] from a buffer.")]
            pub fn $from(buffer: &Buffer) -> Result<$ty> {
                <$ty>::from_buffer(buffer)
            }
        )+
    };
}

named_conversions! {
    Vec2f: vec2_to_buffer_f32, buffer_to_vec2_f32;
    Vec2d: vec2_to_buffer_f64, buffer_to_vec2_f64;
    Vec3f: vec3_to_buffer_f32, buffer_to_vec3_f32;
    Vec3d: vec3_to_buffer_f64, buffer_to_vec3_f64;
    Vec4f: vec4_to_buffer_f32, buffer_to_vec4_f32;
    Vec4d: vec4_to_buffer_f64, buffer_to_vec4_f64;
    Mat2f: mat2_to_buffer_f32, buffer_to_mat2_f32;
    Mat2d: mat2_to_buffer_f64, buffer_to_mat2_f64;
    Mat3f: mat3_to_buffer_f32, buffer_to_mat3_f32;
    Mat3d: mat3_to_buffer_f64, buffer_to_mat3_f64;
    Mat4f: mat4_to_buffer_f32, buffer_to_mat4_f32;
    Mat4d: mat4_to_buffer_f64, buffer_to_mat4_f64;
}
