use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively), so `NaN` operands are ignored.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + ops::DivAssign
        + PartialEq
        + PartialOrd
        + Copy
{
}

macro_rules! float_traits {
    ($($f:ty),+) => {
        $(
            impl Zero for $f {
                const ZERO: Self = 0.0;
            }

            impl One for $f {
                const ONE: Self = 1.0;
            }

            impl Trig for $f {
                fn sin(self) -> Self {
                    <$f>::sin(self)
                }

                fn cos(self) -> Self {
                    <$f>::cos(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$f>::sin_cos(self)
                }

                fn asin(self) -> Self {
                    <$f>::asin(self)
                }

                fn acos(self) -> Self {
                    <$f>::acos(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$f>::atan2(self, other)
                }
            }

            impl Sqrt for $f {
                fn sqrt(self) -> Self {
                    <$f>::sqrt(self)
                }
            }

            impl MinMax for $f {
                fn min(self, other: Self) -> Self {
                    <$f>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$f>::max(self, other)
                }
            }
        )+
    };
}
float_traits!(f32, f64);
