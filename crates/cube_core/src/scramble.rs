//! Random move sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Move, MoveKey};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Returns `len` random quarter turns. The same face is never turned twice
/// in a row, so no move cancels or merges with the one before it.
pub fn scramble(rng: &mut impl Rng, len: usize) -> Vec<Move> {
    let mut ret: Vec<Move> = Vec::with_capacity(len);
    while ret.len() < len {
        let key = MoveKey::ALL[rng.random_range(0..MoveKey::ALL.len())];
        if ret.last().is_some_and(|prev| prev.key == key) {
            continue;
        }
        ret.push(Move {
            key,
            reversed: rng.random_bool(0.5),
        });
    }
    ret
}

/// Returns a scramble that depends only on `seed` and `len`.
pub fn seeded_scramble(seed: u64, len: usize) -> Vec<Move> {
    scramble(&mut ChaCha8Rng::seed_from_u64(seed), len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubeState, invert_sequence};

    #[test]
    fn test_seeded_scramble_is_reproducible() {
        let a = seeded_scramble(42, DEFAULT_SCRAMBLE_LENGTH);
        let b = seeded_scramble(42, DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(a, b);
        assert_eq!(DEFAULT_SCRAMBLE_LENGTH, a.len());
        assert_ne!(a, seeded_scramble(43, DEFAULT_SCRAMBLE_LENGTH));
    }

    #[test]
    fn test_no_repeated_face() {
        let moves = seeded_scramble(7, 200);
        for pair in moves.windows(2) {
            assert_ne!(pair[0].key, pair[1].key);
        }
    }

    #[test]
    fn test_scramble_then_inverse_solves() {
        let moves = seeded_scramble(1, 50);
        let mut state = CubeState::solved();
        state.apply_moves(moves.iter().copied());
        assert!(!state.is_solved());
        state.apply_moves(invert_sequence(&moves));
        assert!(state.is_solved());
    }
}
