use cube_core::{CubeState, Move, MoveTableError, validate_move_table};
use cube_prefs::AnimationPreferences;
use cubemath::debug_panic;
use web_time::Duration;

use crate::interpolate::{self, InterpolateFn};
use crate::{Cubelet, PivotAnimator, Scene, build_cubelets, select_slice};

/// Flag that is held while a slice animation is restructuring the scene.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MoveLock {
    held: bool,
}

impl MoveLock {
    /// Returns whether the lock is held.
    pub fn is_held(self) -> bool {
        self.held
    }
    /// Raises the lock.
    pub fn raise(&mut self) {
        if self.held {
            debug_panic!("move lock raised twice");
        }
        self.held = true;
    }
    /// Lowers the lock.
    pub fn lower(&mut self) {
        self.held = false;
    }
}

/// Cube simulator: the sticker state together with the 3D scene that mirrors
/// it.
///
/// Sticker state changes as soon as a move starts; the scene catches up over
/// the following frames. While the scene is catching up, the [`MoveLock`] is
/// held and no other move may start.
#[derive(Debug)]
pub struct CubeEngine {
    state: CubeState,
    lock: MoveLock,
    scene: Scene,
    cubelets: Vec<Cubelet>,
    animator: PivotAnimator,

    twist_duration: Duration,
    easing: InterpolateFn,
}

impl CubeEngine {
    /// Constructs a solved cube after checking the move table.
    pub fn new(prefs: &AnimationPreferences) -> Result<Self, MoveTableError> {
        validate_move_table()?;

        let state = CubeState::solved();
        let mut scene = Scene::new();
        let cubelets = build_cubelets(&mut scene, &state).unwrap_or_else(|e| {
            debug_panic!("error building cubelets: {e}");
            vec![]
        });

        let mut ret = Self {
            state,
            lock: MoveLock::default(),
            scene,
            cubelets,
            animator: PivotAnimator::Idle,

            twist_duration: Duration::ZERO,
            easing: interpolate::COSINE,
        };
        ret.set_animation_prefs(prefs);
        Ok(ret)
    }

    /// Updates animation timing for subsequent moves.
    pub fn set_animation_prefs(&mut self, prefs: &AnimationPreferences) {
        self.twist_duration = Duration::try_from_secs_f32(prefs.twist_duration)
            .unwrap_or_else(|e| {
                log::warn!("invalid twist duration {}: {e}", prefs.twist_duration);
                Duration::ZERO
            });
        self.easing = interpolate::from_preference(prefs.interpolation);
    }

    /// Returns whether a slice animation is in progress.
    pub fn is_locked(&self) -> bool {
        self.lock.is_held()
    }
    /// Returns the sticker state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the 3D scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    /// Returns the cubelets in the scene.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }
    /// Returns the slice animator.
    pub fn animator(&self) -> &PivotAnimator {
        &self.animator
    }

    /// Applies a move to the sticker state and starts turning its slice in
    /// the scene.
    ///
    /// Callers must check [`Self::is_locked()`] first; a move started while
    /// locked is ignored.
    pub fn start_move(&mut self, mv: Move) {
        if self.is_locked() {
            debug_panic!("move {mv} started while locked");
            return;
        }

        self.state.apply(mv);

        let def = mv.key.definition();
        let selection = select_slice(&self.scene, &self.cubelets, def.axis, def.layer.float());
        self.animator.begin(
            &mut self.scene,
            &mut self.lock,
            &selection,
            def.axis,
            def.quarter_turn_angle(mv.reversed),
            self.twist_duration,
            self.easing,
        );
        if self.twist_duration.is_zero() {
            self.finish_animation();
        }
    }

    /// Advances the animation by one frame. Returns whether another frame is
    /// needed.
    pub fn proceed(&mut self, delta: Duration) -> bool {
        self.animator
            .proceed(&mut self.scene, &mut self.lock, delta)
    }

    /// Completes any animation in progress immediately.
    pub fn finish_animation(&mut self) {
        self.animator.finish(&mut self.scene, &mut self.lock);
    }
}
