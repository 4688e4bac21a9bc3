use std::ops::{Deref, DerefMut};

use crate::{Quat, XYZW};

/// Gives quaternions the named fields `x`, `y`, `z` (imaginary) and `w` (real).
impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}
