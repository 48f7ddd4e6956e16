//! Interpolation functions.

use std::f32::consts::PI;

use cube_prefs::Interpolation;

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
pub type InterpolateFn = fn(f32) -> f32;

/// Interpolate using cosine from 0.0 to PI.
pub const COSINE: InterpolateFn = |x| (1.0 - (x * PI).cos()) / 2.0;
/// Interpolate linearly.
pub const LINEAR: InterpolateFn = |x| x;
/// Interpolate using a cubic that decelerates to a stop.
pub const CUBIC_OUT: InterpolateFn = |x| 1.0 - (1.0 - x).powi(3);

/// Returns the interpolation function for a preference value.
pub fn from_preference(interpolation: Interpolation) -> InterpolateFn {
    match interpolation {
        Interpolation::Cosine => COSINE,
        Interpolation::Linear => LINEAR,
        Interpolation::CubicOut => CUBIC_OUT,
    }
}
