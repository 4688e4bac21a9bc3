//! Approximate equality with configurable tolerances.
//!
//! The `==` operator of every math3d type already compares with the fixed [`Scalar::EPSILON`]
//! of its element type. This module is for the cases where that is not the right tolerance, for
//! example when checking the result of a long chain of `f32` operations in a test.
//!
//! [`Scalar::EPSILON`]: crate::Scalar::EPSILON

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their fields are.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to
    /// `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two values times `rel_tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;
}

/// Supplies the tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq] when none are
/// configured explicitly.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-5;
    const DEFAULT_REL_TOLERANCE: Self = 1e-5;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-6;
    const DEFAULT_REL_TOLERANCE: Self = 1e-6;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Calling [`Asserter::abs`] or
/// [`Asserter::rel`] before that selects the comparison; if both are called, the values are equal
/// if *either* comparison says so. If neither is called, an absolute and a relative comparison
/// with the [`DefaultTolerances`] are performed.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |abs| T::abs_diff_eq(self.left, self.right, abs));
        let rel = self
            .rel
            .map_or(false, |rel| T::rel_diff_eq(self.left, self.right, rel));
        abs || rel
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        if equal != (self.kind == AssertionKind::Eq) {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // `#[track_caller]` does not work on `drop`, so the location is printed manually.
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Returns an [`Asserter`] that can be used to pick the comparison and tolerance.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(vec3(100.0, 0.0, 0.0), vec3(99.0, 0.0, 0.0)).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using
/// [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(Vec2f::X, Vec2f::Y);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "rotation drifted")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "rotation drifted");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, 0.0).abs(1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).rel(0.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).abs(10000.0);
    }
}
