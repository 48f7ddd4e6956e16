//! Scenarios on the public move API.

use cube_core::{
    Color, CubeState, Face, FaceState, MOVE_TABLE, Move, MoveKey, parse_moves,
    validate_move_table,
};
use pretty_assertions::assert_eq;

#[test]
fn test_solved_cube_faces_are_uniform() {
    let state = CubeState::solved();
    for face in Face::ALL {
        let expected = FaceState::uniform(face.home_color());
        assert_eq!(expected, state.face(face));
        assert_eq!([[face.home_color(); 3]; 3], state.grid(face));
    }
}

#[test]
fn test_u_from_solved_hands_off_edge_strips() {
    let before = CubeState::solved();
    let mut after = before;
    after.apply_move(MoveKey::U, false);

    let strips = &MoveKey::U.definition().strips;
    for (i, strip) in strips.iter().enumerate() {
        // Each strip now shows what the following strip showed.
        let source = &strips[(i + 1) % 4];
        assert_eq!(
            before.face(source.face).read_nibbles(&source.nibbles),
            after.face(strip.face).read_nibbles(&strip.nibbles),
        );
    }
    assert_eq!(before.face(Face::U).rotate_ring(2), after.face(Face::U));

    let front = after.grid(Face::F);
    assert_eq!([Color::Red; 3], front[0]);
    assert_eq!([Color::Green; 3], front[1]);
}

#[test]
fn test_r_four_times_is_identity() {
    let mut state = CubeState::solved();
    for _ in 0..4 {
        state.apply_move(MoveKey::R, false);
    }
    for face in Face::ALL {
        assert_eq!(CubeState::solved().face(face).bits(), state.face(face).bits());
    }
}

#[test]
fn test_every_move_inverse() {
    let mut state = CubeState::solved();
    state.apply_moves(parse_moves("F R' D B2 L U'").unwrap());
    for def in &MOVE_TABLE {
        let mut s = state;
        s.apply(Move::cw(def.key));
        assert_ne!(state, s);
        s.apply(Move::ccw(def.key));
        assert_eq!(state, s);
    }
}

#[test]
fn test_opposite_faces_commute() {
    for (a, b) in [(MoveKey::U, MoveKey::D), (MoveKey::L, MoveKey::R), (MoveKey::F, MoveKey::B)] {
        let mut ab = CubeState::solved();
        ab.apply_moves([Move::cw(a), Move::ccw(b)]);
        let mut ba = CubeState::solved();
        ba.apply_moves([Move::ccw(b), Move::cw(a)]);
        assert_eq!(ab, ba);
    }
}

#[test]
fn test_builtin_table_passes_self_check() {
    validate_move_table().unwrap();
}
