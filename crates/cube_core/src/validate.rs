//! Startup self-check of [`MOVE_TABLE`].

use itertools::Itertools;
use thiserror::Error;

use crate::geometry::StickerLocation;
use crate::{Face, MOVE_TABLE, MoveDefinition, MoveKey, RING, RING_LEN};

/// Inconsistency found in a move definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MoveTableError {
    #[error("move {key} is stored at the slot for {slot}")]
    WrongSlot { key: MoveKey, slot: MoveKey },
    #[error("move {key} turns face {face:?} but rotates about {axis} layer {layer:?}")]
    WrongAxis {
        key: MoveKey,
        face: Face,
        axis: cubemath::Axis,
        layer: cubemath::Sign,
    },
    #[error("move {key} has ring shift {shift}; a quarter turn is 2")]
    WrongRingShift { key: MoveKey, shift: i32 },
    #[error("move {key} has a strip on face {face:?}, which does not border the turning face")]
    StripNotAdjacent { key: MoveKey, face: Face },
    #[error("move {key} has more than one strip on face {face:?}")]
    DuplicateStripFace { key: MoveKey, face: Face },
    #[error("move {key} has strip {strip} with ring indices {nibbles:?}, which are not a corner-edge-corner run")]
    NonContiguousStrip {
        key: MoveKey,
        strip: usize,
        nibbles: [usize; 3],
    },
    #[error(
        "move {key} sends sticker {sticker} of strip {strip} to {actual:?}, \
         but the next strip expects it at {expected:?}"
    )]
    AdjacencyMismatch {
        key: MoveKey,
        strip: usize,
        sticker: usize,
        expected: StickerLocation,
        actual: StickerLocation,
    },
    #[error("move {key} sends ring index {index} of its own face to {actual}, expected {expected}")]
    RingMismatch {
        key: MoveKey,
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Checks every entry of [`MOVE_TABLE`] against cube geometry.
///
/// This verifies that each strip is a run of three stickers on a distinct
/// neighboring face, and that a physical clockwise quarter turn carries each
/// strip onto the next strip in the direction given by
/// [`MoveDefinition::clockwise`], sticker by sticker.
pub fn validate_move_table() -> Result<(), MoveTableError> {
    for (slot, def) in MoveKey::ALL.into_iter().zip(&MOVE_TABLE) {
        if def.key != slot {
            return Err(MoveTableError::WrongSlot { key: def.key, slot });
        }
        validate_move(def).inspect_err(|e| log::error!("bad move table: {e}"))?;
    }
    Ok(())
}

/// Checks a single move definition against cube geometry.
pub(crate) fn validate_move(def: &MoveDefinition) -> Result<(), MoveTableError> {
    let key = def.key;

    if def.face.axis() != def.axis || def.face.sign() != def.layer {
        return Err(MoveTableError::WrongAxis {
            key,
            face: def.face,
            axis: def.axis,
            layer: def.layer,
        });
    }
    if def.ring_shift != 2 {
        return Err(MoveTableError::WrongRingShift {
            key,
            shift: def.ring_shift,
        });
    }

    for strip in &def.strips {
        if strip.face.axis() == def.face.axis() {
            return Err(MoveTableError::StripNotAdjacent {
                key,
                face: strip.face,
            });
        }
    }
    if let Some(face) = def.strips.iter().map(|s| s.face).duplicates().next() {
        return Err(MoveTableError::DuplicateStripFace { key, face });
    }

    for (i, strip) in def.strips.iter().enumerate() {
        let [a, b, c] = strip.nibbles;
        let is_run = a % 2 == 0 && a < RING_LEN && b == (a + 1) % RING_LEN && c == (a + 2) % RING_LEN;
        if !is_run {
            return Err(MoveTableError::NonContiguousStrip {
                key,
                strip: i,
                nibbles: strip.nibbles,
            });
        }
    }

    // Strip stickers must follow the physical turn.
    let step = def.strip_step(false);
    for (i, strip) in def.strips.iter().enumerate() {
        let next = &def.strips[(i + step) % 4];
        for (j, (&src, &dst)) in std::iter::zip(&strip.nibbles, &next.nibbles).enumerate() {
            let actual = ring_location(strip.face, src).turned_clockwise(def.face);
            let expected = ring_location(next.face, dst);
            if actual != expected {
                return Err(MoveTableError::AdjacencyMismatch {
                    key,
                    strip: i,
                    sticker: j,
                    expected,
                    actual,
                });
            }
        }
    }

    // The main face ring must follow the physical turn too.
    for index in 0..RING_LEN {
        let expected = (index as i32 + def.ring_shift).rem_euclid(RING_LEN as i32) as usize;
        let turned = ring_location(def.face, index).turned_clockwise(def.face);
        let actual = RING
            .iter()
            .position(|&cell| cell == turned.grid_cell())
            .unwrap_or(usize::MAX);
        if actual != expected {
            return Err(MoveTableError::RingMismatch {
                key,
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

fn ring_location(face: Face, index: usize) -> StickerLocation {
    let (row, col) = RING[index];
    face.sticker_location(row, col)
}
