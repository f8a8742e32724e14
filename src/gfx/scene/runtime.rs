//! Rendering runtime seam
//!
//! The engine never draws anything itself. It drives whatever scene graph the
//! host renders through this trait: creating and attaching nodes, removing
//! them, and scheduling animations that run on the runtime's own timeline.

use super::node::{NodeId, RotateBy, SceneNode};

/// Primitives the engine needs from a scene-graph runtime
///
/// All calls happen on the thread that owns the runtime. `run_action` is
/// fire-and-forget: it returns as soon as the animation is queued, and an
/// animation whose node is removed is dropped without notice.
pub trait RenderRuntime {
    /// The scene's root node; never removable
    fn root(&self) -> NodeId;

    /// Creates a detached node and returns its handle
    fn create_node(&mut self, node: SceneNode) -> NodeId;

    /// Makes `child` a child of `parent`, detaching it from any previous parent.
    /// Returns false when either node does not exist.
    fn attach(&mut self, parent: NodeId, child: NodeId) -> bool;

    /// Removes a node and its whole subtree. Returns false if it did not exist.
    fn remove_node(&mut self, id: NodeId) -> bool;

    fn contains(&self, id: NodeId) -> bool;

    fn node(&self, id: NodeId) -> Option<&SceneNode>;

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;

    /// Queues a relative rotation on a node
    fn run_action(&mut self, id: NodeId, action: RotateBy);

    fn set_default_lighting(&mut self, enabled: bool);

    /// Creates a node and attaches it under `parent` in one step
    fn spawn(&mut self, parent: NodeId, node: SceneNode) -> NodeId {
        let id = self.create_node(node);
        self.attach(parent, id);
        id
    }
}
