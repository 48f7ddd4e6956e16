//! Coordinate axes in 3D.

use std::fmt;

use cgmath::vec3;

use crate::{AXIS_NAMES, Float, Vector3};

/// A 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
    /// Returns the uppercase name of the axis.
    pub fn name(self) -> char {
        AXIS_NAMES.as_bytes()[self.int()] as char
    }
    /// Returns the unit vector along the positive direction of this axis.
    pub fn unit(self) -> Vector3 {
        match self {
            Self::X => vec3(1.0, 0.0, 0.0),
            Self::Y => vec3(0.0, 1.0, 0.0),
            Self::Z => vec3(0.0, 0.0, 1.0),
        }
    }
    /// Returns the component of `v` along this axis.
    pub fn component(self, v: Vector3) -> Float {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }
}
