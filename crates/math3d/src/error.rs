//! The crate-wide error type.

use crate::buffer::Dtype;

/// Errors returned by fallible math3d operations.
///
/// Every error is returned at the point where the violation is detected. Operations that fail
/// leave their receiver unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A vector element index was out of range.
    #[error("index {index} is out of range for a vector of length {len}")]
    Index { index: usize, len: usize },

    /// A matrix element position was out of range.
    #[error("element ({row}, {col}) is out of range for a {size}x{size} matrix")]
    MatrixIndex { row: usize, col: usize, size: usize },

    /// A buffer or slice had a shape incompatible with the requested type.
    #[error("expected a buffer of shape {expected}, found {found:?}")]
    Shape {
        /// Human-readable description of the accepted shapes.
        expected: String,
        found: Vec<usize>,
    },

    /// A buffer had the wrong element type.
    #[error("expected a buffer of {expected} elements, found {found}")]
    Dtype { expected: Dtype, found: Dtype },

    /// Attempted to invert a matrix whose determinant is (nearly) zero.
    #[error("matrix is not invertible (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    /// An operation needed a non-zero length input, but got a (nearly) zero-length one.
    #[error("cannot {operation}: input has (nearly) zero length")]
    DegenerateInput { operation: &'static str },
}

/// Result type used throughout math3d.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn shape(expected: impl Into<String>, found: &[usize]) -> Self {
        let expected = expected.into();
        log::trace!("rejecting buffer of shape {found:?} (expected {expected})");
        Error::Shape {
            expected,
            found: found.to_vec(),
        }
    }

    pub(crate) fn degenerate(operation: &'static str) -> Self {
        log::trace!("cannot {operation}: input has (nearly) zero length");
        Error::DegenerateInput { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::Index { index: 3, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 3 is out of range for a vector of length 3"
        );

        let err = Error::MatrixIndex {
            row: 0,
            col: 4,
            size: 4,
        };
        assert_eq!(
            err.to_string(),
            "element (0, 4) is out of range for a 4x4 matrix"
        );

        let err = Error::Dtype {
            expected: Dtype::F32,
            found: Dtype::F64,
        };
        assert_eq!(
            err.to_string(),
            "expected a buffer of float32 elements, found float64"
        );

        let err = Error::shape("[3]", &[2, 2]);
        assert_eq!(err.to_string(), "expected a buffer of shape [3], found [2, 2]");

        let err = Error::degenerate("normalize a vector");
        assert_eq!(
            err.to_string(),
            "cannot normalize a vector: input has (nearly) zero length"
        );
    }
}
