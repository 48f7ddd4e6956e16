use cube_core::geometry::{Lattice, StickerLocation, dot};
use cube_core::{CubeState, Face, Grid};
use cubemath::prelude::*;

use crate::{NodeId, NodeKind, Scene, SceneError};

/// Outward normals of the six sides of a cubelet, in the order of
/// [`Cubelet::stickers`].
pub const SIDE_NORMALS: [Lattice; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

/// One visible piece of the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubelet {
    /// Scene node carrying the cubelet's transform.
    pub node: NodeId,
    /// Sticker color on each local side, ordered like [`SIDE_NORMALS`].
    /// Sides that face the inside of the cube have no sticker.
    pub stickers: [Option<cube_core::Color>; 6],
}

impl Cubelet {
    /// Returns the color the cubelet shows in the world direction
    /// `world_normal`, or `None` if no sticker faces that way.
    pub fn color_facing(&self, scene: &Scene, world_normal: Vector3) -> Option<cube_core::Color> {
        let (_, orientation) = scene.world_transform(self.node)?;
        std::iter::zip(SIDE_NORMALS, self.stickers)
            .find(|&(n, _)| approx_eq(&orientation.rotate_vector(lattice_vector(n)), &world_normal))
            .and_then(|(_, sticker)| sticker)
    }

    /// Returns the world position of the cubelet rounded to the lattice, or
    /// `None` if it is between lattice points.
    pub fn lattice_position(&self, scene: &Scene) -> Option<[i32; 3]> {
        to_approx_lattice(scene.world_position(self.node)?)
    }
}

/// Converts a lattice vector to a float vector.
pub(crate) fn lattice_vector(v: Lattice) -> Vector3 {
    Vector3::new(v[0] as Float, v[1] as Float, v[2] as Float)
}

/// Adds the 26 visible cubelets under the scene root, painted from `state`.
pub fn build_cubelets(scene: &mut Scene, state: &CubeState) -> Result<Vec<Cubelet>, SceneError> {
    let mut cubelets = Vec::with_capacity(26);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let piece: Lattice = [x, y, z];
                if piece == [0; 3] {
                    continue; // core
                }
                let stickers = SIDE_NORMALS.map(|normal| {
                    if dot(piece, normal) != 1 {
                        return None;
                    }
                    let face = Face::ALL.into_iter().find(|f| f.normal() == normal)?;
                    let (row, col) = StickerLocation { piece, face }.grid_cell();
                    Some(state.grid(face)[row][col])
                });
                let node = scene.add_node(scene.root(), NodeKind::Cubelet, lattice_vector(piece))?;
                cubelets.push(Cubelet { node, stickers });
            }
        }
    }
    Ok(cubelets)
}

/// Reads the colors of one face off the cubelets in the scene, in the same
/// layout as [`CubeState::grid`]. Returns `None` if some sticker position is
/// not covered by a cubelet, such as in the middle of a turn.
pub fn scene_face_grid(scene: &Scene, cubelets: &[Cubelet], face: Face) -> Option<Grid> {
    let outward = lattice_vector(face.normal());
    let mut grid = [[face.home_color(); 3]; 3];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let piece = face.sticker_location(row, col).piece.map(i32::from);
            let cubelet = cubelets
                .iter()
                .find(|c| c.lattice_position(scene) == Some(piece))?;
            *cell = cubelet.color_facing(scene, outward)?;
        }
    }
    Some(grid)
}

#[cfg(test)]
mod tests {
    use cube_core::Color;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build_solved_cubelets() {
        let mut scene = Scene::new();
        let cubelets = build_cubelets(&mut scene, &CubeState::solved()).unwrap();
        assert_eq!(26, cubelets.len());
        assert_eq!(27, scene.node_count());

        let sticker_count: usize = cubelets
            .iter()
            .map(|c| c.stickers.iter().flatten().count())
            .sum();
        assert_eq!(54, sticker_count);

        // Corner at +X +Y +Z shows red, white, and green.
        let corner = cubelets
            .iter()
            .find(|c| c.lattice_position(&scene) == Some([1, 1, 1]))
            .unwrap();
        assert_eq!(
            [Some(Color::Red), None, Some(Color::White), None, Some(Color::Green), None],
            corner.stickers,
        );
        assert_eq!(Some(Color::White), corner.color_facing(&scene, Vector3::unit_y()));
        assert_eq!(None, corner.color_facing(&scene, -Vector3::unit_y()));
    }

    #[test]
    fn test_scene_matches_solved_state() {
        let mut scene = Scene::new();
        let state = CubeState::solved();
        let cubelets = build_cubelets(&mut scene, &state).unwrap();
        for face in Face::ALL {
            assert_eq!(Some(state.grid(face)), scene_face_grid(&scene, &cubelets, face));
        }
    }
}
