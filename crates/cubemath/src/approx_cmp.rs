//! Approximate comparison functions that automatically use [`EPSILON`].

pub use approx::AbsDiffEq;

use crate::{EPSILON, Float, Quaternion, Vector3};

/// Compares two values, but considers them equal if every component is
/// separated by less than `EPSILON`.
///
/// Handles infinity specially.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns whether two unit quaternions represent approximately the same
/// rotation. `q` and `-q` are the same rotation.
pub fn rotations_approx_eq(a: &Quaternion, b: &Quaternion) -> bool {
    approx_eq(a, b) || approx_eq(a, &-*b)
}

/// Returns `f` as an integer if it is approximately equal to one.
pub fn to_approx_integer(f: Float) -> Option<i32> {
    let i = f.round() as i32;
    approx_eq(&f, &(i as Float)).then_some(i)
}

/// Returns the integer lattice point nearest to `v` if `v` is approximately
/// on the lattice.
pub fn to_approx_lattice(v: Vector3) -> Option<[i32; 3]> {
    Some([
        to_approx_integer(v.x)?,
        to_approx_integer(v.y)?,
        to_approx_integer(v.z)?,
    ])
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;

    use super::*;

    #[test]
    fn test_approx_float() {
        assert!(approx_eq::<Float>(&1.0, &1.0005));
        assert!(!approx_eq::<Float>(&1.0, &1.01));
        assert!(approx_eq(&Float::INFINITY, &Float::INFINITY));
        assert!(!approx_eq(&Float::INFINITY, &Float::NEG_INFINITY));
    }

    #[test]
    fn test_approx_vector() {
        assert!(approx_eq::<Vector3>(&vec3(1.0, 0.0, -1.0), &vec3(1.0002, -0.0004, -0.9995)));
        assert!(!approx_eq::<Vector3>(&vec3(1.0, 0.0, -1.0), &vec3(1.0, 0.01, -1.0)));
    }

    #[test]
    fn test_approx_lattice() {
        assert_eq!(Some([1, 0, -1]), to_approx_lattice(vec3(0.9999, 0.0003, -1.0)));
        assert_eq!(None, to_approx_lattice(vec3(0.5, 0.0, 0.0)));
        assert_eq!(Some(-1), to_approx_integer(-0.99995));
    }

    #[test]
    fn test_rotations_double_cover() {
        let q = crate::rotation_about(crate::Axis::Y, 1.0);
        assert!(rotations_approx_eq(&q, &-q));
        assert!(!approx_eq(&q, &-q));
        assert!(!rotations_approx_eq(&q, &crate::rotation_about(crate::Axis::Y, 1.1)));
    }
}
