//! Sticker state and quarter-turn move engine for a 3x3x3 cube.
//!
//! Each of the six faces stores its eight non-center stickers in a
//! [`FaceState`], a packed integer with one 4-bit [`Color`] per sticker. The
//! [`MOVE_TABLE`] describes, for each face turn, which stickers on the
//! neighboring faces travel with the turning face; [`CubeState::apply_move`]
//! uses it to permute stickers. Centers never move and are not stored.

#[macro_use]
extern crate strum;

mod color;
mod engine;
mod face;
mod face_state;
pub mod geometry;
mod move_table;
mod notation;
pub mod scramble;
mod validate;

pub use color::Color;
pub use engine::CubeState;
pub use face::Face;
pub use face_state::{FaceState, Grid, RING, RING_LEN};
pub use move_table::{EdgeStrip, MOVE_TABLE, MoveDefinition, MoveKey};
pub use notation::{Move, ParseMoveError, invert_sequence, parse_moves};
pub use validate::{MoveTableError, validate_move_table};

/// Number of faces on a cube.
pub const FACE_COUNT: usize = 6;
