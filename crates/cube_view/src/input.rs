use cube_core::{Move, MoveKey};

use crate::{CubeEngine, NetSurface, render_net};

/// Name of the modifier key that reverses the next move.
pub const SHIFT_KEY: &str = "Shift";

/// Result of a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The move was applied and its animation started.
    Applied(Move),
    /// The key names a move, but another move is still animating.
    Dropped,
    /// The key does not name a move.
    Unrecognized,
    /// The key is the direction modifier.
    Modifier,
}

/// Maps key presses to moves.
///
/// Pressing [`SHIFT_KEY`] arms reversal for the next applied move only.
/// Releasing it disarms reversal if no move has consumed it yet.
#[derive(Debug, Default, Clone)]
pub struct InputDispatcher {
    reverse_next: bool,
}

impl InputDispatcher {
    /// Returns whether the next applied move will be reversed.
    pub fn is_reverse_armed(&self) -> bool {
        self.reverse_next
    }

    /// Handles a key press. Move letters are case-insensitive.
    ///
    /// If a move is applied, the net on `surface` is repainted.
    pub fn on_key_down(
        &mut self,
        engine: &mut CubeEngine,
        key: &str,
        surface: &mut impl NetSurface,
    ) -> KeyOutcome {
        if key == SHIFT_KEY {
            self.reverse_next = true;
            return KeyOutcome::Modifier;
        }

        let Some(move_key) = MoveKey::from_key_name(key) else {
            log::debug!("ignoring unrecognized key {key:?}");
            return KeyOutcome::Unrecognized;
        };

        if engine.is_locked() {
            log::trace!("dropping {move_key} because a move is in progress");
            return KeyOutcome::Dropped;
        }

        let mv = Move {
            key: move_key,
            reversed: std::mem::take(&mut self.reverse_next),
        };
        engine.start_move(mv);
        render_net(engine.state(), surface);
        KeyOutcome::Applied(mv)
    }

    /// Handles a key release.
    pub fn on_key_up(&mut self, key: &str) {
        if key == SHIFT_KEY {
            self.reverse_next = false;
        }
    }
}
