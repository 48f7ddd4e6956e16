//! Centroid of a set of points.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use cgmath::Zero;

use crate::{Float, Vector3};

/// Running "center of mass" of a set of points, each with a weight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Centroid {
    /// Center of mass, scaled by `weight`.
    weighted_center: Vector3,
    /// Total weight.
    weight: Float,
}

impl Default for Centroid {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Centroid {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for Centroid {
    fn add_assign(&mut self, rhs: Centroid) {
        self.weighted_center += rhs.weighted_center;
        self.weight += rhs.weight;
    }
}

impl Sum<Centroid> for Centroid {
    fn sum<I: Iterator<Item = Centroid>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl FromIterator<Vector3> for Centroid {
    fn from_iter<I: IntoIterator<Item = Vector3>>(iter: I) -> Self {
        iter.into_iter().map(Centroid::point).sum()
    }
}

impl Centroid {
    /// Zero centroid.
    pub const ZERO: Self = Centroid {
        weighted_center: cgmath::Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        weight: 0.0,
    };

    /// Constructs a new weighted centroid.
    pub fn new(center: Vector3, weight: Float) -> Self {
        Centroid {
            weighted_center: center * weight,
            weight,
        }
    }
    /// Constructs a centroid for a single point with weight 1.
    pub fn point(p: Vector3) -> Self {
        Self::new(p, 1.0)
    }
    /// Returns the centroid point, or the origin if the total weight is zero.
    pub fn center(&self) -> Vector3 {
        if self.weight > 0.0 {
            self.weighted_center / self.weight
        } else {
            Vector3::zero()
        }
    }
    /// Returns the weight.
    pub fn weight(&self) -> Float {
        self.weight
    }
    /// Returns whether the weight is zero.
    pub fn is_zero(&self) -> bool {
        self.weight == 0.0
    }
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_centroid_of_points() {
        let c: Centroid = [vec3(1.0, 1.0, 0.0), vec3(-1.0, 1.0, 0.0), vec3(0.0, 1.0, 3.0)]
            .into_iter()
            .collect();
        assert_eq!(3.0, c.weight());
        assert_approx_eq!(vec3(0.0, 1.0, 1.0), c.center());
    }

    #[test]
    fn test_empty_centroid_is_origin() {
        let c: Centroid = std::iter::empty::<Vector3>().collect();
        assert!(c.is_zero());
        assert_eq!(Vector3::zero(), c.center());
    }
}
