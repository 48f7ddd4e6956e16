//! Static topology of the six face turns.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use cubemath::{Axis, Float, Sign};
use serde::{Deserialize, Serialize};

use crate::Face;

/// Key identifying one of the six face turns.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum MoveKey {
    /// Turn the up face.
    U,
    /// Turn the down face.
    D,
    /// Turn the left face.
    L,
    /// Turn the right face.
    R,
    /// Turn the front face.
    F,
    /// Turn the back face.
    B,
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face().symbol())
    }
}

impl MoveKey {
    /// All move keys, in table order.
    pub const ALL: [MoveKey; 6] = [
        MoveKey::U,
        MoveKey::D,
        MoveKey::L,
        MoveKey::R,
        MoveKey::F,
        MoveKey::B,
    ];

    /// Returns the move key for a key name, ignoring case. Only single
    /// letters `u d l r f b` are recognized.
    pub fn from_key_name(key: &str) -> Option<MoveKey> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }
    /// Returns the move key for a letter, ignoring case.
    pub fn from_char(c: char) -> Option<MoveKey> {
        match c.to_ascii_lowercase() {
            'u' => Some(MoveKey::U),
            'd' => Some(MoveKey::D),
            'l' => Some(MoveKey::L),
            'r' => Some(MoveKey::R),
            'f' => Some(MoveKey::F),
            'b' => Some(MoveKey::B),
            _ => None,
        }
    }
    /// Returns the static definition of the move.
    pub fn definition(self) -> &'static MoveDefinition {
        &MOVE_TABLE[self as usize]
    }
    /// Returns the face turned by the move.
    pub fn face(self) -> Face {
        self.definition().face
    }
}

/// Band of three stickers on a neighboring face that travels with a turning
/// face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeStrip {
    /// Face that the stickers are on.
    pub face: Face,
    /// Ring indices of the stickers on `face`.
    pub nibbles: [usize; 3],
}

/// Static description of one face turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveDefinition {
    /// Key for the move.
    pub key: MoveKey,
    /// Face whose own ring rotates.
    pub face: Face,
    /// Axis of the 3D rotation.
    pub axis: Axis,
    /// Coordinate of the turning layer along `axis`.
    pub layer: Sign,
    /// Whether stickers travel from strip `i` to strip `i + 1` on a clockwise
    /// turn. If `false`, they travel from strip `i` to strip `i - 1`.
    pub clockwise: bool,
    /// Number of ring positions the main face rotates by on a quarter turn.
    pub ring_shift: i32,
    /// The four strips bordering the main face, in cycle order. Sticker `j`
    /// of each strip moves to sticker `j` of the next strip.
    pub strips: [EdgeStrip; 4],
}

impl MoveDefinition {
    /// Returns the signed 3D rotation angle, in radians about the positive
    /// `axis`, for one quarter turn.
    ///
    /// A clockwise turn (as seen from outside the face) is a rotation of -90°
    /// about the face's outward normal.
    pub fn quarter_turn_angle(&self, reversed: bool) -> Float {
        let direction = if reversed { 1.0 } else { -1.0 };
        direction * FRAC_PI_2 * self.layer.float()
    }
    /// Returns the offset from a strip to the strip its stickers move to.
    pub fn strip_step(&self, reversed: bool) -> usize {
        if self.clockwise != reversed { 1 } else { 3 }
    }
}

const fn strip(face: Face, nibbles: [usize; 3]) -> EdgeStrip {
    EdgeStrip { face, nibbles }
}

/// Topology of every face turn, indexed by [`MoveKey`].
///
/// Ring indices follow [`crate::RING`]. Each strip lists its stickers in the
/// order that lines up with the next strip in the cycle.
pub static MOVE_TABLE: [MoveDefinition; 6] = [
    MoveDefinition {
        key: MoveKey::U,
        face: Face::U,
        axis: Axis::Y,
        layer: Sign::Pos,
        clockwise: false,
        ring_shift: 2,
        strips: [
            strip(Face::F, [0, 1, 2]),
            strip(Face::R, [0, 1, 2]),
            strip(Face::B, [0, 1, 2]),
            strip(Face::L, [0, 1, 2]),
        ],
    },
    MoveDefinition {
        key: MoveKey::D,
        face: Face::D,
        axis: Axis::Y,
        layer: Sign::Neg,
        clockwise: true,
        ring_shift: 2,
        strips: [
            strip(Face::F, [4, 5, 6]),
            strip(Face::R, [4, 5, 6]),
            strip(Face::B, [4, 5, 6]),
            strip(Face::L, [4, 5, 6]),
        ],
    },
    MoveDefinition {
        key: MoveKey::L,
        face: Face::L,
        axis: Axis::X,
        layer: Sign::Neg,
        clockwise: true,
        ring_shift: 2,
        strips: [
            strip(Face::U, [6, 7, 0]),
            strip(Face::F, [6, 7, 0]),
            strip(Face::D, [6, 7, 0]),
            strip(Face::B, [2, 3, 4]),
        ],
    },
    MoveDefinition {
        key: MoveKey::R,
        face: Face::R,
        axis: Axis::X,
        layer: Sign::Pos,
        clockwise: false,
        ring_shift: 2,
        strips: [
            strip(Face::U, [2, 3, 4]),
            strip(Face::F, [2, 3, 4]),
            strip(Face::D, [2, 3, 4]),
            strip(Face::B, [6, 7, 0]),
        ],
    },
    MoveDefinition {
        key: MoveKey::F,
        face: Face::F,
        axis: Axis::Z,
        layer: Sign::Pos,
        clockwise: true,
        ring_shift: 2,
        strips: [
            strip(Face::U, [4, 5, 6]),
            strip(Face::R, [6, 7, 0]),
            strip(Face::D, [0, 1, 2]),
            strip(Face::L, [2, 3, 4]),
        ],
    },
    MoveDefinition {
        key: MoveKey::B,
        face: Face::B,
        axis: Axis::Z,
        layer: Sign::Neg,
        clockwise: false,
        ring_shift: 2,
        strips: [
            strip(Face::U, [0, 1, 2]),
            strip(Face::R, [2, 3, 4]),
            strip(Face::D, [4, 5, 6]),
            strip(Face::L, [6, 7, 0]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_table_indexed_by_key() {
        for key in MoveKey::iter() {
            assert_eq!(key, key.definition().key);
            assert_eq!(key.face().symbol().to_string(), key.to_string());
        }
    }

    #[test]
    fn test_from_key_name() {
        assert_eq!(Some(MoveKey::R), MoveKey::from_key_name("R"));
        assert_eq!(Some(MoveKey::B), MoveKey::from_key_name("b"));
        assert_eq!(None, MoveKey::from_key_name("Shift"));
        assert_eq!(None, MoveKey::from_key_name("x"));
        assert_eq!(None, MoveKey::from_key_name(""));
    }

    #[test]
    fn test_quarter_turn_angle() {
        // Clockwise U turns the top layer from front to left, which is a
        // negative rotation about +Y.
        assert!(MoveKey::U.definition().quarter_turn_angle(false) < 0.0);
        // Clockwise D is the opposite rotation about +Y.
        assert!(MoveKey::D.definition().quarter_turn_angle(false) > 0.0);
        let r = MoveKey::R.definition();
        assert_eq!(-r.quarter_turn_angle(false), r.quarter_turn_angle(true));
    }
}
