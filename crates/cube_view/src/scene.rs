//! Arena of transform nodes.

use std::fmt;

use cubemath::prelude::*;
use thiserror::Error;

/// Handle to a node in a [`Scene`].
///
/// Handles of removed nodes may be reused by later nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Scene root.
    Root,
    /// Piece of the cube.
    Cubelet,
    /// Temporary parent used to turn a slice.
    Pivot,
}

/// Transform node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Parent node, or `None` for the root.
    pub parent: Option<NodeId>,
    /// Position relative to the parent.
    pub position: Vector3,
    /// Orientation relative to the parent.
    pub orientation: Quaternion,
    /// What the node represents.
    pub kind: NodeKind,
}

/// Error from a structural scene edit.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The node does not exist.
    #[error("no node {0}")]
    NoSuchNode(NodeId),
    /// The root cannot be removed or moved.
    #[error("cannot remove or reparent the scene root")]
    Root,
    /// The node still has children.
    #[error("node {0} still has children")]
    HasChildren(NodeId),
    /// Reparenting would make a node its own ancestor.
    #[error("node {node} cannot be moved under its descendant {parent}")]
    Cycle {
        /// Node being moved.
        node: NodeId,
        /// Requested parent.
        parent: NodeId,
    },
}

/// Tree of transform nodes stored in a slot arena. Re-parenting a node only
/// changes its `parent` field.
#[derive(Debug, Clone)]
pub struct Scene {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Constructs a scene containing only the root.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Node {
                parent: None,
                position: Vector3::zero(),
                orientation: Quaternion::one(),
                kind: NodeKind::Root,
            })],
            free: vec![],
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds a node under `parent` with the given local position and no
    /// rotation.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        position: Vector3,
    ) -> Result<NodeId, SceneError> {
        self.node(parent).ok_or(SceneError::NoSuchNode(parent))?;
        let node = Node {
            parent: Some(parent),
            position,
            orientation: Quaternion::one(),
            kind,
        };
        let id = match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(node);
                NodeId(i)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };
        Ok(id)
    }

    /// Removes a node that has no children and returns it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, SceneError> {
        if id == self.root() {
            return Err(SceneError::Root);
        }
        self.node(id).ok_or(SceneError::NoSuchNode(id))?;
        if self.children(id).next().is_some() {
            return Err(SceneError::HasChildren(id));
        }
        self.free.push(id.0);
        self.slots[id.0].take().ok_or(SceneError::NoSuchNode(id))
    }

    /// Moves a node under a new parent. Its local transform is unchanged.
    pub fn reparent(&mut self, id: NodeId, parent: NodeId) -> Result<(), SceneError> {
        if id == self.root() {
            return Err(SceneError::Root);
        }
        self.node(id).ok_or(SceneError::NoSuchNode(id))?;
        self.node(parent).ok_or(SceneError::NoSuchNode(parent))?;
        if self.ancestors(parent).any(|a| a == id) {
            return Err(SceneError::Cycle { node: id, parent });
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = Some(parent);
        }
        Ok(())
    }

    /// Returns a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0)?.as_ref()
    }
    /// Returns a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Iterates over the direct children of a node.
    pub fn children(&self, id: NodeId) -> impl '_ + Iterator<Item = NodeId> {
        self.iter()
            .filter(move |(_, node)| node.parent == Some(id))
            .map(|(child, _)| child)
    }

    /// Iterates over all nodes, root first.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (NodeId, &Node)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((NodeId(i), slot.as_ref()?)))
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Iterates over a node and its ancestors, ending at the root.
    fn ancestors(&self, id: NodeId) -> impl '_ + Iterator<Item = NodeId> {
        std::iter::successors(Some(id), |&i| self.node(i)?.parent)
    }

    /// Returns the position and orientation of a node in world space.
    pub fn world_transform(&self, id: NodeId) -> Option<(Vector3, Quaternion)> {
        let mut position = Vector3::zero();
        let mut orientation = Quaternion::one();
        for ancestor in self.ancestors(id) {
            let node = self.node(ancestor)?;
            position = node.orientation.rotate_vector(position) + node.position;
            orientation = node.orientation * orientation;
        }
        Some((position, orientation))
    }
    /// Returns the position of a node in world space.
    pub fn world_position(&self, id: NodeId) -> Option<Vector3> {
        Some(self.world_transform(id)?.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use cubemath::{assert_approx_eq, rotation_about};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_remove_reuses_slots() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = scene
            .add_node(root, NodeKind::Cubelet, Vector3::unit_x())
            .unwrap();
        let b = scene.add_node(a, NodeKind::Cubelet, Vector3::zero()).unwrap();
        assert_eq!(3, scene.node_count());

        assert_eq!(Err(SceneError::HasChildren(a)), scene.remove_node(a));
        assert_eq!(Err(SceneError::Root), scene.remove_node(root));
        scene.remove_node(b).unwrap();
        assert_eq!(Err(SceneError::NoSuchNode(b)), scene.remove_node(b));
        assert_eq!(2, scene.node_count());

        let c = scene.add_node(root, NodeKind::Pivot, Vector3::zero()).unwrap();
        assert_eq!(b, c);
        assert_eq!(NodeKind::Pivot, scene.node(c).unwrap().kind);
    }

    #[test]
    fn test_reparent() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = scene.add_node(root, NodeKind::Pivot, Vector3::zero()).unwrap();
        let b = scene.add_node(a, NodeKind::Cubelet, Vector3::zero()).unwrap();

        assert_eq!(vec![b], scene.children(a).collect::<Vec<_>>());
        assert_eq!(Err(SceneError::Cycle { node: a, parent: b }), scene.reparent(a, b));
        assert_eq!(Err(SceneError::Cycle { node: a, parent: a }), scene.reparent(a, a));
        assert_eq!(Err(SceneError::Root), scene.reparent(root, a));

        scene.reparent(b, root).unwrap();
        assert_eq!(0, scene.children(a).count());
        assert_eq!(2, scene.children(root).count());
    }

    #[test]
    fn test_world_transform_composes_parents() {
        let mut scene = Scene::new();
        let root = scene.root();
        let pivot = scene
            .add_node(root, NodeKind::Pivot, Vector3::new(0.0, 1.0, 0.0))
            .unwrap();
        let child = scene
            .add_node(pivot, NodeKind::Cubelet, Vector3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert_approx_eq!(Vector3::new(0.0, 1.0, 1.0), scene.world_position(child).unwrap());

        // Quarter turn about +Y carries +Z to +X.
        let rot = rotation_about(Axis::Y, FRAC_PI_2);
        scene.node_mut(pivot).unwrap().orientation = rot;
        let (pos, orientation) = scene.world_transform(child).unwrap();
        assert_approx_eq!(Vector3::new(1.0, 1.0, 0.0), pos);
        assert_approx_eq!(rot, orientation);
    }
}
