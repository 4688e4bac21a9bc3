//! Named-field views of 2, 3 and 4 element vectors.
//!
//! These structs are never constructed. They only exist as [`Deref`] targets, so that `v.x` and
//! `v[0]` name the same element.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! deref_view {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Both types are `repr(C)`-compatible sequences of `$n` `T`s.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

deref_view!(2 => XY, 3 => XYZ, 4 => XYZW);
