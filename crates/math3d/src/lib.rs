//! Small, fixed-size linear algebra types for 3D math.
//!
//! This library provides the value types that come up whenever points and rigid transforms in 3D
//! space have to be manipulated:
//!
//! - [`Vector`]s of 2, 3 and 4 elements, and square [`Matrix`] types of the same sizes.
//! - [`Quat`]ernions and [`Euler`] angles (in all 6 axis orders, intrinsic or extrinsic) to
//!   represent rotations.
//! - [`Pose3`], a rotation followed by a translation.
//! - The geometric primitives [`Line`], [`Plane`] and [`Aabb`].
//! - Conversion of all vector and matrix types from and to n-dimensional array [`Buffer`]s.
//!
//! Every type is generic over its element type, which must be one of the [`Scalar`] types
//! [`f32`] and [`f64`]. Each type has two aliases with the suffix `f` and `d` (for example,
//! [`Vec3f`] and [`Vec3d`]).
//!
//! # Conventions
//!
//! - Vectors are column vectors; matrices are stored column-major and always addressed by
//!   `(row, column)`.
//! - Products of transforms apply the right-hand side first: `(a * b) * v == a * (b * v)`. This
//!   holds for matrices, quaternions and poses alike.
//! - Rotations are right-handed: a positive angle about the Z axis rotates X towards Y.
//!
//! # Equality
//!
//! The `==` operator of all types compares components with the fixed tolerance
//! [`Scalar::EPSILON`] (`1e-5` for [`f32`], `1e-6` for [`f64`]). Since this relation is not
//! transitive, none of the types implement [`Eq`]. The [`approx`] module offers comparisons with
//! configurable tolerances.
//!
//! ```
//! use math3d::*;
//!
//! assert_eq!(vec3(1.0, 2.0, 3.0) + vec3(4.0, 5.0, 6.0), vec3(5.0, 7.0, 9.0));
//! assert_eq!(vec3(0.1, 0.2, 0.3) * 3.0, vec3(0.3, 0.6, 0.9));
//! assert_ne!(vec3(0.1, 0.2, 0.3), vec3(0.1, 0.2, 0.31));
//! ```
//!
//! # Errors
//!
//! Operations that can fail for some inputs return a [`Result`] with the crate-wide [`Error`]
//! type: normalizing a zero-length vector, inverting a singular matrix, reading a buffer of the
//! wrong shape or element type, and checked element access. Only the array-style `Index` impls
//! and [`Aabb::new`] panic on invalid input, like the standard library does for slices.
//!
//! ```
//! use math3d::*;
//!
//! assert!(matches!(Vec3d::ZERO.normalize(), Err(Error::DegenerateInput { .. })));
//! assert!(matches!(Mat2d::ZERO.inverse(), Err(Error::SingularMatrix { .. })));
//! ```

pub mod approx;
mod buffer;
mod error;
mod euler;
mod geometry;
mod matrix;
mod pose;
mod quat;
mod scalar;
mod traits;
mod vector;

pub use buffer::*;
pub use error::{Error, Result};
pub use euler::*;
pub use geometry::*;
pub use matrix::*;
pub use pose::*;
pub use quat::*;
pub use scalar::Scalar;
pub use traits::*;
pub use vector::*;
