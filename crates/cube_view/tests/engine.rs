//! Keeping the scene and the sticker state in step.

use cube_core::scramble::seeded_scramble;
use cube_core::{CubeState, Face, Move, MoveKey, parse_moves};
use cube_prefs::DEFAULT_PREFS;
use cube_view::{
    CubeEngine, InputDispatcher, KeyOutcome, NetSnapshot, NodeKind, SHIFT_KEY, scene_face_grid,
};
use cubemath::{Vector3, assert_approx_eq};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn assert_scene_matches_state(engine: &CubeEngine) {
    assert!(!engine.is_locked());
    let scene = engine.scene();
    assert_eq!(27, scene.node_count());
    assert!(scene.iter().all(|(_, node)| node.kind != NodeKind::Pivot));
    for cubelet in engine.cubelets() {
        assert_eq!(Some(scene.root()), scene.node(cubelet.node).unwrap().parent);
    }
    for face in Face::ALL {
        assert_eq!(
            Some(engine.state().grid(face)),
            scene_face_grid(scene, engine.cubelets(), face),
            "{face:?}",
        );
    }
}

fn run_until_idle(engine: &mut CubeEngine) {
    while engine.proceed(FRAME) {}
}

#[test]
fn test_pivot_is_at_slice_centroid() {
    let mut engine = CubeEngine::new(&DEFAULT_PREFS.animation).unwrap();
    engine.start_move(Move::cw(MoveKey::U));
    let anim = engine.animator().current().unwrap();
    assert_approx_eq!(Vector3::new(0.0, 1.0, 0.0), anim.centroid);
    assert_eq!(9, engine.scene().children(anim.pivot).count());
    assert_eq!(28, engine.scene().node_count());
}

#[test]
fn test_scene_follows_sequence() {
    let mut engine = CubeEngine::new(&DEFAULT_PREFS.animation).unwrap();
    let moves = parse_moves("R U R' U' F2 D L' B").unwrap();
    for mv in moves.iter().copied() {
        engine.start_move(mv);
        run_until_idle(&mut engine);
        assert_scene_matches_state(&engine);
    }

    let mut expected = CubeState::solved();
    expected.apply_moves(moves);
    assert_eq!(expected, *engine.state());
}

#[test]
fn test_scene_stays_on_lattice_over_many_moves() {
    let mut engine = CubeEngine::new(&DEFAULT_PREFS.animation).unwrap();
    for (i, mv) in seeded_scramble(3, 120_000).into_iter().enumerate() {
        engine.start_move(mv);
        engine.finish_animation();
        if i % 20_000 == 0 {
            assert_scene_matches_state(&engine);
        }
    }
    assert_scene_matches_state(&engine);
    for cubelet in engine.cubelets() {
        let p = engine.scene().node(cubelet.node).unwrap().position;
        assert_eq!(p.map(f32::round), p);
    }
}

#[test]
fn test_key_presses_drive_engine_and_net() {
    let mut engine = CubeEngine::new(&DEFAULT_PREFS.animation).unwrap();
    let mut input = InputDispatcher::default();
    let mut net = NetSnapshot::default();

    for key in ["r", "u", SHIFT_KEY, "R", "U"] {
        if key != SHIFT_KEY {
            run_until_idle(&mut engine);
        }
        input.on_key_down(&mut engine, key, &mut net);
    }
    input.on_key_up(SHIFT_KEY);
    run_until_idle(&mut engine);

    let mut expected = CubeState::solved();
    expected.apply_moves(parse_moves("R U R' U").unwrap());
    assert_eq!(expected, *engine.state());
    for face in Face::ALL {
        assert_eq!(Some(expected.grid(face)), net.grid(face));
    }
    assert_eq!(4 * 54, net.paint_count());
    assert_scene_matches_state(&engine);
}

#[derive(Debug, Clone)]
enum Event {
    KeyDown(char),
    Shift(bool),
    Frames(u8),
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => prop::sample::select(vec!['u', 'd', 'l', 'r', 'f', 'b', 'U', 'x', 'q']).prop_map(Event::KeyDown),
        1 => any::<bool>().prop_map(Event::Shift),
        3 => (0..20_u8).prop_map(Event::Frames),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_locked_presses_leave_state_unchanged(events in prop::collection::vec(arb_event(), 0..60)) {
        let mut engine = CubeEngine::new(&DEFAULT_PREFS.animation).unwrap();
        let mut input = InputDispatcher::default();
        let mut net = NetSnapshot::default();
        let mut applied = vec![];

        for event in events {
            match event {
                Event::KeyDown(c) => {
                    let was_locked = engine.is_locked();
                    let before = *engine.state();
                    match input.on_key_down(&mut engine, &c.to_string(), &mut net) {
                        KeyOutcome::Applied(mv) => {
                            prop_assert!(!was_locked);
                            applied.push(mv);
                        }
                        KeyOutcome::Dropped => {
                            prop_assert!(was_locked);
                            prop_assert_eq!(before, *engine.state());
                        }
                        KeyOutcome::Unrecognized => prop_assert_eq!(before, *engine.state()),
                        KeyOutcome::Modifier => unreachable!(),
                    }
                }
                Event::Shift(true) => {
                    input.on_key_down(&mut engine, SHIFT_KEY, &mut net);
                }
                Event::Shift(false) => input.on_key_up(SHIFT_KEY),
                Event::Frames(n) => {
                    for _ in 0..n {
                        engine.proceed(FRAME);
                    }
                }
            }
        }

        engine.finish_animation();
        let mut expected = CubeState::solved();
        expected.apply_moves(applied);
        prop_assert_eq!(expected, *engine.state());
        assert_scene_matches_state(&engine);
    }
}
