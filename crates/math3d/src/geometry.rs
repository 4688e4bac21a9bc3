//! Simple geometric primitives in 3D space.
//!
//! All primitives are plain values made of [`Vec3`][crate::Vec3]s and compare with the same
//! epsilon-based `==` as the vectors they are made of.

mod aabb;
mod line;
mod plane;

pub use aabb::*;
pub use line::*;
pub use plane::*;
