//! Integer lattice geometry of cubelets and stickers.
//!
//! Cubelet positions are points in `{-1, 0, 1}³` with X right, Y up, and Z
//! toward the front.

use crate::Face;

/// Integer point or direction on the cubelet lattice.
pub type Lattice = [i8; 3];

/// Returns the dot product of two lattice vectors.
pub fn dot(a: Lattice, b: Lattice) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Returns the cross product of two lattice vectors.
pub fn cross(a: Lattice, b: Lattice) -> Lattice {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotates `v` a quarter turn clockwise as seen from outside `face`, which is
/// a rotation of -90° about the face's outward normal.
pub fn rotate_clockwise(v: Lattice, face: Face) -> Lattice {
    let n = face.normal();
    let n_cross_v = cross(n, v);
    let n_dot_v = dot(n, v);
    std::array::from_fn(|i| n[i] * n_dot_v - n_cross_v[i])
}

/// Location of a single sticker: the cubelet that carries it and the face of
/// the cube it points out of.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StickerLocation {
    /// Lattice position of the cubelet.
    pub piece: Lattice,
    /// Face the sticker is on.
    pub face: Face,
}

impl StickerLocation {
    /// Returns the `(row, col)` of this sticker in its face's grid.
    pub fn grid_cell(self) -> (usize, usize) {
        let (up, right) = self.face.drawing_basis();
        let row = 1 - dot(self.piece, up);
        let col = 1 + dot(self.piece, right);
        (row as usize, col as usize)
    }

    /// Returns where this sticker ends up after a clockwise quarter turn of
    /// `turning` (as seen from outside `turning`), or `self` if the sticker
    /// is not in the turning layer.
    #[must_use]
    pub fn turned_clockwise(self, turning: Face) -> Self {
        if dot(self.piece, turning.normal()) != 1 {
            return self;
        }
        let new_normal = rotate_clockwise(self.face.normal(), turning);
        Self {
            piece: rotate_clockwise(self.piece, turning),
            face: Face::ALL
                .into_iter()
                .find(|f| f.normal() == new_normal)
                .unwrap_or(self.face),
        }
    }
}
