use std::fmt;

use smallvec::SmallVec;

use crate::{Color, Face};

/// Number of non-center stickers on a face.
pub const RING_LEN: usize = 8;

/// Number of bits used to store one sticker.
const NIBBLE_BITS: u32 = 4;
const NIBBLE_MASK: u32 = 0xF;

/// Grid cells of the ring, clockwise as seen from outside the face, starting
/// at the top-left corner. Ring index `i` is stored in nibble `i`.
///
/// Even indices are corners and odd indices are edges.
pub const RING: [(usize, usize); RING_LEN] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
];

/// Colors of a face as drawn in the net, indexed `[row][col]`.
pub type Grid = [[Color; 3]; 3];

/// Colors of the eight non-center stickers of a face, packed into 4-bit
/// fields of a `u32`.
///
/// The center is not stored because it never moves. Every nibble holds a
/// valid [`Color`] index because the only way to construct or modify a
/// `FaceState` is from `Color`s.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceState(u32);

impl fmt::Debug for FaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceState({:#010x})", self.0)
    }
}

impl FaceState {
    /// Returns a face where every sticker has the same color.
    pub fn uniform(color: Color) -> Self {
        Self::from_ring([color; RING_LEN])
    }
    /// Constructs a face from ring colors in ring order.
    pub fn from_ring(ring: [Color; RING_LEN]) -> Self {
        let bits = ring
            .iter()
            .enumerate()
            .fold(0, |acc, (i, c)| acc | Self::nibble(i, *c));
        Self(bits)
    }

    /// Packs the eight boundary cells of `grid`. The center cell is ignored.
    pub fn encode(grid: &Grid) -> Self {
        Self::from_ring(RING.map(|(row, col)| grid[row][col]))
    }
    /// Unpacks the face into a grid. The center cell is always the home color
    /// of `face`.
    pub fn decode(self, face: Face) -> Grid {
        let mut grid = [[face.home_color(); 3]; 3];
        for (i, (row, col)) in RING.into_iter().enumerate() {
            grid[row][col] = self.get(i);
        }
        grid
    }

    /// Returns the ring colors in ring order.
    pub fn ring(self) -> [Color; RING_LEN] {
        std::array::from_fn(|i| self.get(i))
    }
    /// Returns the color at ring index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= RING_LEN`.
    pub fn get(self, i: usize) -> Color {
        assert!(i < RING_LEN, "ring index {i} out of range");
        let value = (self.0 >> (i as u32 * NIBBLE_BITS)) & NIBBLE_MASK;
        Color::ALL[value as usize]
    }
    /// Returns a copy of the face with ring index `i` set to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= RING_LEN`.
    #[must_use]
    pub fn with(self, i: usize, color: Color) -> Self {
        assert!(i < RING_LEN, "ring index {i} out of range");
        let cleared = self.0 & !Self::nibble_mask(i);
        Self(cleared | Self::nibble(i, color))
    }

    /// Cyclically rotates the ring so that the sticker at index `i` moves to
    /// index `i + shift` (mod 8). A shift of `+2` is one clockwise quarter
    /// turn of the face; `-2` is counterclockwise.
    #[must_use]
    pub fn rotate_ring(self, shift: i32) -> Self {
        let slots = shift.rem_euclid(RING_LEN as i32) as u32;
        Self(self.0.rotate_left(slots * NIBBLE_BITS))
    }

    /// Returns the colors at the given ring indices, in the order given.
    pub fn read_nibbles(self, indices: &[usize]) -> SmallVec<[Color; RING_LEN]> {
        indices.iter().map(|&i| self.get(i)).collect()
    }
    /// Returns a copy of the face with the given ring indices overwritten by
    /// `values`, pairwise. All other stickers are unchanged.
    #[must_use]
    pub fn write_nibbles(self, indices: &[usize], values: &[Color]) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        std::iter::zip(indices, values).fold(self, |acc, (&i, &c)| acc.with(i, c))
    }

    /// Returns the packed representation.
    pub fn bits(self) -> u32 {
        self.0
    }

    fn nibble(i: usize, color: Color) -> u32 {
        (color.index() as u32) << (i as u32 * NIBBLE_BITS)
    }
    fn nibble_mask(i: usize) -> u32 {
        NIBBLE_MASK << (i as u32 * NIBBLE_BITS)
    }
}
