use cubemath::{Axis, Sign};
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::geometry::{Lattice, StickerLocation};

/// Face of the cube.
///
/// Faces are ordered `U R F D L B`; the index of a face is also the index of
/// its home [`Color`].
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter,
)]
pub enum Face {
    /// Up.
    U = 0,
    /// Right.
    R = 1,
    /// Front.
    F = 2,
    /// Down.
    D = 3,
    /// Left.
    L = 4,
    /// Back.
    B = 5,
}

impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Returns the index of the face, in the range `0..6`.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the color of the center sticker, which never moves.
    pub fn home_color(self) -> Color {
        Color::ALL[self.index()]
    }
    /// Returns the lowercase name of the face (`up`, `right`, etc.).
    pub const fn name(self) -> &'static str {
        match self {
            Face::U => "up",
            Face::R => "right",
            Face::F => "front",
            Face::D => "down",
            Face::L => "left",
            Face::B => "back",
        }
    }
    /// Returns the uppercase letter for the face.
    pub const fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub const fn sign(self) -> Sign {
        match self {
            Face::U | Face::R | Face::F => Sign::Pos,
            Face::D | Face::L | Face::B => Sign::Neg,
        }
    }
    /// Returns the face on the given axis with the given sign.
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Face {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::R,
            (Axis::X, Sign::Neg) => Face::L,
            (Axis::Y, Sign::Pos) => Face::U,
            (Axis::Y, Sign::Neg) => Face::D,
            (Axis::Z, Sign::Pos) => Face::F,
            (Axis::Z, Sign::Neg) => Face::B,
        }
    }
    /// Returns the face on the opposite side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::B => Face::F,
        }
    }

    /// Returns the outward unit normal of the face.
    pub const fn normal(self) -> Lattice {
        let mut ret = [0; 3];
        ret[self.axis().int()] = self.sign().int();
        ret
    }
    /// Returns the directions of the top edge and right edge of the face as
    /// it is drawn in the net, seen from outside the cube.
    ///
    /// U is drawn with B along its top edge, D with F along its top edge,
    /// and the four side faces with U along their top edge.
    pub const fn drawing_basis(self) -> (Lattice, Lattice) {
        match self {
            Face::U => ([0, 0, -1], [1, 0, 0]),
            Face::R => ([0, 1, 0], [0, 0, -1]),
            Face::F => ([0, 1, 0], [1, 0, 0]),
            Face::D => ([0, 0, 1], [1, 0, 0]),
            Face::L => ([0, 1, 0], [0, 0, 1]),
            Face::B => ([0, 1, 0], [-1, 0, 0]),
        }
    }
    /// Returns the location of the sticker at `row` and `col` of the face as
    /// drawn in the net. Row 0 is the top row; column 0 is the left column.
    pub fn sticker_location(self, row: usize, col: usize) -> StickerLocation {
        let (up, right) = self.drawing_basis();
        let n = self.normal();
        let (r, c) = (1 - row as i8, col as i8 - 1);
        let piece = std::array::from_fn(|i| n[i] + r * up[i] + c * right[i]);
        StickerLocation { piece, face: self }
    }
}
