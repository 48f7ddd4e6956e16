//! Animation of one slice turning as a rigid group.

use std::f32::consts::FRAC_1_SQRT_2;

use cubemath::prelude::*;
use cubemath::{debug_panic, rotation_about};
use web_time::Duration;

use crate::interpolate::InterpolateFn;
use crate::{MoveLock, NodeId, NodeKind, Scene, Tween, TweenStatus};

/// Slice turn in progress.
#[derive(Debug, Clone)]
pub struct PivotAnimation {
    /// Temporary parent of the turning cubelets.
    pub pivot: NodeId,
    /// World position of the pivot.
    pub centroid: Vector3,
    /// Axis of rotation.
    pub axis: Axis,
    /// Rotation angle of the pivot, in radians.
    pub tween: Tween,
}

/// State machine that turns a set of cubelets about an axis.
///
/// Starting an animation groups the cubelets under a new pivot node placed at
/// their centroid and raises the [`MoveLock`]. When the animation completes,
/// the pivot's rotation is baked into each cubelet's own transform, the
/// cubelets return to the scene root, the pivot is removed, and the lock is
/// lowered.
#[derive(Debug, Default, Clone)]
pub enum PivotAnimator {
    /// No pivot exists.
    #[default]
    Idle,
    /// Exactly one pivot exists and is rotating.
    Animating(PivotAnimation),
}

impl PivotAnimator {
    /// Returns whether no animation is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    /// Returns the animation in progress.
    pub fn current(&self) -> Option<&PivotAnimation> {
        match self {
            Self::Idle => None,
            Self::Animating(anim) => Some(anim),
        }
    }

    /// Starts turning `selection` by `angle` radians about `axis`.
    ///
    /// An empty selection is allowed; the pivot is then placed at the origin
    /// and the animation has no visible effect.
    pub fn begin(
        &mut self,
        scene: &mut Scene,
        lock: &mut MoveLock,
        selection: &[NodeId],
        axis: Axis,
        angle: Float,
        duration: Duration,
        easing: InterpolateFn,
    ) {
        if !self.is_idle() {
            debug_panic!("pivot animation started while another is in progress");
            self.finish(scene, lock);
        }

        let centroid = selection
            .iter()
            .filter_map(|&id| scene.world_position(id))
            .collect::<Centroid>()
            .center();

        let pivot = match scene.add_node(scene.root(), NodeKind::Pivot, centroid) {
            Ok(id) => id,
            Err(e) => {
                debug_panic!("error creating pivot: {e}");
                return;
            }
        };
        log::trace!("created pivot {pivot} at {centroid:?} for {} cubelets", selection.len());

        for &id in selection {
            if let Some(node) = scene.node_mut(id) {
                node.position -= centroid;
            }
            if let Err(e) = scene.reparent(id, pivot) {
                debug_panic!("error attaching {id} to pivot: {e}");
            }
        }

        lock.raise();
        *self = Self::Animating(PivotAnimation {
            pivot,
            centroid,
            axis,
            tween: Tween::new(0.0, angle, duration, easing),
        });
    }

    /// Steps the animation forward, completing it if its time is up. Returns
    /// whether another frame is needed.
    pub fn proceed(&mut self, scene: &mut Scene, lock: &mut MoveLock, delta: Duration) -> bool {
        let Self::Animating(anim) = self else {
            return false;
        };
        let status = anim.tween.advance(delta);
        if let Some(pivot) = scene.node_mut(anim.pivot) {
            pivot.orientation = rotation_about(anim.axis, anim.tween.value());
        }
        match status {
            TweenStatus::Pending => true,
            TweenStatus::Done => {
                self.bake(scene, lock);
                false
            }
        }
    }

    /// Completes the animation immediately. Does nothing if idle.
    pub fn finish(&mut self, scene: &mut Scene, lock: &mut MoveLock) {
        if let Self::Animating(anim) = self {
            anim.tween.finish();
        }
        self.bake(scene, lock);
    }

    /// Moves the pivot's final rotation into each of its children, returns
    /// them to the root, and removes the pivot.
    fn bake(&mut self, scene: &mut Scene, lock: &mut MoveLock) {
        let Self::Animating(anim) = std::mem::take(self) else {
            return;
        };
        let rotation = rotation_about(anim.axis, anim.tween.target());
        let root = scene.root();

        let children: Vec<NodeId> = scene.children(anim.pivot).collect();
        for &id in &children {
            if let Some(node) = scene.node_mut(id) {
                let position = rotation.rotate_vector(node.position) + anim.centroid;
                node.position = snap_position(position);
                node.orientation = snap_orientation(rotation * node.orientation);
            }
            if let Err(e) = scene.reparent(id, root) {
                debug_panic!("error returning {id} to root: {e}");
            }
        }
        if let Err(e) = scene.remove_node(anim.pivot) {
            debug_panic!("error removing pivot: {e}");
        }
        log::trace!("baked pivot {} into {} cubelets", anim.pivot, children.len());

        lock.lower();
    }
}

/// Rounds `v` to the nearest lattice point if it is approximately on one.
fn snap_position(v: Vector3) -> Vector3 {
    match to_approx_lattice(v) {
        Some([x, y, z]) => Vector3::new(x as Float, y as Float, z as Float),
        None => v,
    }
}

/// Rounds each component of `q` to the nearest value that appears in one of
/// the 24 rotations of the cube, if they are all approximately one of those.
/// Otherwise normalizes `q`.
fn snap_orientation(q: Quaternion) -> Quaternion {
    const VALUES: [Float; 4] = [0.0, 0.5, FRAC_1_SQRT_2, 1.0];
    let snap = |x: Float| {
        VALUES
            .into_iter()
            .find(|v| approx_eq(&x.abs(), v))
            .map(|v| v.copysign(x))
    };
    match (snap(q.s), snap(q.v.x), snap(q.v.y), snap(q.v.z)) {
        (Some(s), Some(x), Some(y), Some(z)) => Quaternion::new(s, x, y, z),
        _ => q.normalize(),
    }
}
