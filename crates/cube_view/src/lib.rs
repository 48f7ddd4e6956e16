//! Scene-side state of the cube simulator, kept in step with the sticker
//! model in [`cube_core`].
//!
//! A [`CubeEngine`] owns the sticker state, a [`Scene`] of cubelet nodes, and
//! the [`PivotAnimator`] that turns one slice at a time. The
//! [`InputDispatcher`] turns key presses into moves and repaints a
//! [`NetSurface`] after each one.

mod cubelet;
mod engine;
mod input;
pub mod interpolate;
mod net;
mod pivot;
mod scene;
mod slice;
mod tween;

pub use cubelet::{Cubelet, SIDE_NORMALS, build_cubelets, scene_face_grid};
pub use engine::{CubeEngine, MoveLock};
pub use input::{InputDispatcher, KeyOutcome, SHIFT_KEY};
pub use net::{
    NET_LAYOUT, NetSnapshot, NetSurface, cell_element_id, face_element_id, net_face_at, render_net,
};
pub use pivot::{PivotAnimation, PivotAnimator};
pub use scene::{Node, NodeId, NodeKind, Scene, SceneError};
pub use slice::select_slice;
pub use tween::{Tween, TweenStatus};
