//! Euler angle rotations.

use std::fmt;

use crate::{Mat3, Quat, Scalar, Vec3};

/// A set of Euler angles with [`f32`] elements.
pub type Eulerf = Euler<f32>;
/// A set of Euler angles with [`f64`] elements.
pub type Eulerd = Euler<f64>;

/// The sequence in which the three elemental rotations of an [`Euler`] are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    #[default]
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    ZYX,
}

impl Order {
    /// All six orders.
    pub const ALL: [Order; 6] = [
        Order::XYZ,
        Order::XZY,
        Order::YXZ,
        Order::YZX,
        Order::ZXY,
        Order::ZYX,
    ];

    /// Returns the axis indices (0 = X, 1 = Y, 2 = Z) in the order they are named.
    pub const fn axes(self) -> [usize; 3] {
        match self {
            Order::XYZ => [0, 1, 2],
            Order::XZY => [0, 2, 1],
            Order::YXZ => [1, 0, 2],
            Order::YZX => [1, 2, 0],
            Order::ZXY => [2, 0, 1],
            Order::ZYX => [2, 1, 0],
        }
    }

    /// Returns the order naming the same axes back to front.
    pub const fn reversed(self) -> Order {
        match self {
            Order::XYZ => Order::ZYX,
            Order::XZY => Order::YZX,
            Order::YXZ => Order::ZXY,
            Order::YZX => Order::XZY,
            Order::ZXY => Order::YXZ,
            Order::ZYX => Order::XYZ,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether the axes of an [`Euler`] rotation move with the body or stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Convention {
    /// Each rotation is about an axis of the already rotated frame.
    ///
    /// Order `ABC` means `R = R_A * R_B * R_C`.
    #[default]
    Intrinsic,
    /// Each rotation is about an axis of the fixed world frame.
    ///
    /// Order `ABC` means `R = R_C * R_B * R_A`, which is the intrinsic rotation with the reversed
    /// order.
    Extrinsic,
}

/// A rotation described by three angles (in radians) about the X, Y and Z axes, applied in a
/// given [`Order`] and [`Convention`].
///
/// `angles.x` is always the angle about the X axis, regardless of `order`.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// # use std::f64::consts::FRAC_PI_2;
/// // Rotate about the world Z axis, then the world X axis.
/// let euler = Eulerd::new(vec3(FRAC_PI_2, 0.0, FRAC_PI_2), Order::ZYX, Convention::Extrinsic);
/// assert_eq!(euler.to_quat() * Vec3d::X, Vec3d::Z);
///
/// // The same rotation, described intrinsically.
/// let intrinsic = Eulerd::new(euler.angles, Order::XYZ, Convention::Intrinsic);
/// assert!(intrinsic.to_quat().rotation_eq(&euler.to_quat()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Euler<T> {
    pub angles: Vec3<T>,
    pub order: Order,
    pub convention: Convention,
}

impl<T: Scalar> Euler<T> {
    /// Creates a set of Euler angles.
    pub fn new(angles: Vec3<T>, order: Order, convention: Convention) -> Self {
        Self {
            angles,
            order,
            convention,
        }
    }

    /// Returns the axis indices in the sequence the rotations are multiplied together.
    fn intrinsic_axes(&self) -> [usize; 3] {
        match self.convention {
            Convention::Intrinsic => self.order.axes(),
            Convention::Extrinsic => self.order.reversed().axes(),
        }
    }

    /// Converts these angles into a rotation quaternion.
    pub fn to_quat(&self) -> Quat<T> {
        let [a, b, c] = self.intrinsic_axes().map(|axis| {
            let angle = self.angles[axis];
            match axis {
                0 => Quat::from_rotation_x(angle),
                1 => Quat::from_rotation_y(angle),
                _ => Quat::from_rotation_z(angle),
            }
        });
        a * b * c
    }

    /// Converts these angles into a rotation matrix.
    pub fn to_matrix3(&self) -> Mat3<T> {
        let [a, b, c] = self
            .intrinsic_axes()
            .map(|axis| axis_rotation(axis, self.angles[axis]));
        a * b * c
    }

    /// Decomposes a unit quaternion into Euler angles.
    pub fn from_quat(quat: &Quat<T>, order: Order, convention: Convention) -> Self {
        Self::from_rotation_matrix(&quat.to_matrix3(), order, convention)
    }

    /// Decomposes a pure rotation matrix into Euler angles.
    ///
    /// The middle angle is always in `[-π/2, π/2]`, the other two in `[-π, π]`. When the middle
    /// angle is (nearly) `±π/2`, the first and last rotation axes coincide (gimbal lock); the last
    /// angle of the intrinsic sequence is then set to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mat = Mat3d::rotation_z(0.5) * Mat3d::rotation_y(-0.25) * Mat3d::rotation_x(1.5);
    /// let euler = Eulerd::from_rotation_matrix(&mat, Order::ZYX, Convention::Intrinsic);
    /// assert_eq!(euler.angles, vec3(1.5, -0.25, 0.5));
    /// ```
    pub fn from_rotation_matrix(mat: &Mat3<T>, order: Order, convention: Convention) -> Self {
        let intrinsic_order = match convention {
            Convention::Intrinsic => order,
            Convention::Extrinsic => order.reversed(),
        };

        let m = |row: usize, col: usize| mat[(row, col)];

        // Per order: the sine of the middle angle, two entries whose length is the cosine of the
        // middle angle, and the `atan2` arguments of the first angle with and without gimbal lock.
        #[rustfmt::skip]
        let (sin_mid, cos_terms, first, first_locked) = match intrinsic_order {
            Order::XYZ => (m(0, 2), (-m(0, 1), m(0, 0)), (-m(1, 2), m(2, 2)), (m(2, 1), m(1, 1))),
            Order::XZY => (-m(0, 1), (m(0, 2), m(0, 0)), (m(2, 1), m(1, 1)), (-m(1, 2), m(2, 2))),
            Order::YXZ => (-m(1, 2), (m(1, 0), m(1, 1)), (m(0, 2), m(2, 2)), (-m(2, 0), m(0, 0))),
            Order::YZX => (m(1, 0), (-m(1, 2), m(1, 1)), (-m(2, 0), m(0, 0)), (m(0, 2), m(2, 2))),
            Order::ZXY => (m(2, 1), (-m(2, 0), m(2, 2)), (-m(0, 1), m(1, 1)), (m(1, 0), m(0, 0))),
            Order::ZYX => (-m(2, 0), (m(2, 1), m(2, 2)), (m(1, 0), m(0, 0)), (-m(0, 1), m(1, 1))),
        };

        let cos_mid = (cos_terms.0 * cos_terms.0 + cos_terms.1 * cos_terms.1).sqrt();
        let mid = sin_mid.atan2(cos_mid);
        let [a, b, c] = intrinsic_order.axes();
        let (first, last) = if cos_mid < T::EPSILON {
            log::trace!("gimbal lock decomposing rotation in {intrinsic_order} order");
            (first_locked.0.atan2(first_locked.1), T::ZERO)
        } else {
            // The arguments of `first` shrink with the cosine of the middle angle, so `first` loses
            // precision near the lock. The last angle is taken from what remains after undoing
            // the first rotation, which absorbs that error.
            let first = first.0.atan2(first.1);
            let rest = axis_rotation(a, first).transpose() * *mat;
            // Row `b` of `R_b * R_c` is row `b` of `R_c`.
            let sin_last = if b == (c + 1) % 3 {
                -rest[(b, a)]
            } else {
                rest[(b, a)]
            };
            (first, sin_last.atan2(rest[(b, b)]))
        };

        let mut angles = Vec3::ZERO;
        angles[a] = first;
        angles[b] = mid;
        angles[c] = last;

        Self {
            angles,
            order,
            convention,
        }
    }
}

/// The rotation by `radians` about the X (0), Y (1) or Z (2) axis.
fn axis_rotation<T: Scalar>(axis: usize, radians: T) -> Mat3<T> {
    match axis {
        0 => Mat3::rotation_x(radians),
        1 => Mat3::rotation_y(radians),
        _ => Mat3::rotation_z(radians),
    }
}

impl<T: Scalar> Default for Euler<T> {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Order::default(), Convention::default())
    }
}

/// Angles are compared with [`Scalar::EPSILON`]; order and convention must match exactly.
///
/// Two different sets of angles can describe the same rotation. Compare [`Euler::to_quat`] with
/// [`Quat::rotation_eq`] to test for that.
impl<T: Scalar> PartialEq for Euler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.convention == other.convention
            && self.angles == other.angles
    }
}

impl<T: fmt::Display> fmt::Display for Euler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.angles, self.convention, self.order)
    }
}
