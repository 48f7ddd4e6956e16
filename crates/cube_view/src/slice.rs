use cubemath::prelude::*;
use smallvec::SmallVec;

use crate::{Cubelet, Scene};

/// Returns the nodes of the cubelets whose world position along `axis` is
/// within [`EPSILON`] of `coordinate`.
pub fn select_slice(
    scene: &Scene,
    cubelets: &[Cubelet],
    axis: Axis,
    coordinate: Float,
) -> SmallVec<[crate::NodeId; 9]> {
    cubelets
        .iter()
        .filter(|c| {
            scene
                .world_position(c.node)
                .is_some_and(|p| approx_eq(&axis.component(p), &coordinate))
        })
        .map(|c| c.node)
        .collect()
}
