//! Small 3D math layer for the cube simulator: signs, axes, approximate
//! comparison, and centroids on top of [`cgmath`].

pub use cgmath;

/// Floating-point type used for scene geometry.
pub type Float = f32;

/// Tolerance for comparing coordinates that have picked up rounding error
/// from repeated rotations.
pub const EPSILON: Float = 0.001;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

/// 3D vector used for positions and directions.
pub type Vector3 = cgmath::Vector3<Float>;
/// Unit quaternion used for orientations.
pub type Quaternion = cgmath::Quaternion<Float>;

/// Asserts that both values are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

/// Panics in debug builds; logs an error in release builds.
#[macro_export]
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => $crate::log::error!($($tok)*),
        }
    };
}

#[doc(hidden)]
pub use {approx, log};

pub mod approx_cmp;
pub mod axis;
pub mod centroid;
pub mod sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use cgmath::{InnerSpace, One, Rotation, Rotation3, Zero};

    pub use crate::approx_cmp::*;
    pub use crate::axis::Axis;
    pub use crate::centroid::Centroid;
    pub use crate::sign::Sign;
    pub use crate::{AXIS_NAMES, EPSILON, Float, Quaternion, Vector3};
}
pub use prelude::*;

/// Returns a rotation of `angle` radians around `axis`.
pub fn rotation_about(axis: Axis, angle: Float) -> Quaternion {
    Quaternion::from_axis_angle(axis.unit(), cgmath::Rad(angle))
}
