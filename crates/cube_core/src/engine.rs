use std::fmt;

use smallvec::SmallVec;

use crate::{Color, FACE_COUNT, Face, FaceState, Grid, Move, MoveKey, RING_LEN};

/// Sticker colors of the whole cube: one [`FaceState`] per face.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [FaceState; FACE_COUNT],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for face in Face::ALL {
            map.entry(&face, &self.faces[face.index()]);
        }
        map.finish()
    }
}

impl CubeState {
    /// Returns the solved cube: every sticker on each face has that face's
    /// home color.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|f| FaceState::uniform(f.home_color())),
        }
    }

    /// Returns the packed state of a face.
    pub fn face(&self, face: Face) -> FaceState {
        self.faces[face.index()]
    }
    /// Overwrites the packed state of a face.
    pub fn set_face(&mut self, face: Face, state: FaceState) {
        self.faces[face.index()] = state;
    }
    /// Returns the colors of a face as drawn in the net.
    pub fn grid(&self, face: Face) -> Grid {
        self.face(face).decode(face)
    }
    /// Returns whether every face shows only its home color.
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }
    /// Returns how many stickers of each color are on the cube, centers
    /// included.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for face in Face::ALL {
            for row in self.grid(face) {
                for color in row {
                    counts[color.index() as usize] += 1;
                }
            }
        }
        counts
    }

    /// Applies a quarter turn of the face for `key`, counterclockwise if
    /// `reversed`.
    ///
    /// All four edge strips are read before any of them is written because
    /// strips on different faces are stored independently but cycle into one
    /// another.
    pub fn apply_move(&mut self, key: MoveKey, reversed: bool) {
        let def = key.definition();
        log::trace!("applying {}", Move { key, reversed });

        let direction = if reversed { -1 } else { 1 };
        let main = &mut self.faces[def.face.index()];
        *main = main.rotate_ring(def.ring_shift * direction);

        let snapshot: [SmallVec<[Color; RING_LEN]>; 4] = def
            .strips
            .each_ref()
            .map(|strip| self.face(strip.face).read_nibbles(&strip.nibbles));

        let step = def.strip_step(reversed);
        for (i, values) in snapshot.iter().enumerate() {
            let dst = &def.strips[(i + step) % 4];
            let face = &mut self.faces[dst.face.index()];
            *face = face.write_nibbles(&dst.nibbles, values);
        }
    }
    /// Applies a single move.
    pub fn apply(&mut self, mv: Move) {
        self.apply_move(mv.key, mv.reversed);
    }
    /// Applies a sequence of moves in order.
    pub fn apply_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }
}
