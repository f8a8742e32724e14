use std::collections::{HashMap, HashSet};

use cgmath::Matrix4;
use log::{debug, warn};

use super::{
    node::{NodeId, RotateBy, SceneNode},
    runtime::RenderRuntime,
};

struct NodeEntry {
    node: SceneNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct RunningAction {
    target: NodeId,
    action: RotateBy,
    elapsed: f32,
}

/// In-memory scene graph with an animation timeline
///
/// Stands in for a platform renderer: it keeps the node hierarchy, applies
/// queued [`RotateBy`] actions as time is advanced, and drops the actions of
/// any node that gets removed mid-flight.
pub struct Scene {
    nodes: HashMap<NodeId, NodeEntry>,
    root: NodeId,
    next_id: u64,
    actions: Vec<RunningAction>,
    scheduled_total: usize,
    default_lighting: bool,
}

impl Scene {
    /// Creates a scene holding only the root node
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            NodeEntry {
                node: SceneNode::new("root"),
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
            actions: Vec::new(),
            scheduled_total: 0,
            default_lighting: false,
        }
    }

    /// Advances the animation timeline by `delta_time` seconds
    ///
    /// Each running action applies the slice of its rotation that falls inside
    /// this step. Returns how many actions finished.
    pub fn advance(&mut self, delta_time: f32) -> usize {
        let nodes = &mut self.nodes;
        let before = self.actions.len();

        self.actions.retain_mut(|running| {
            let from = running.action.progress(running.elapsed);
            running.elapsed += delta_time;
            let to = running.action.progress(running.elapsed);

            match nodes.get_mut(&running.target) {
                Some(entry) => {
                    entry.node.euler_angles += running.action.angles * (to - from);
                    to < 1.0
                }
                None => false,
            }
        });

        before - self.actions.len()
    }

    /// Runs every queued action to completion
    pub fn finish_actions(&mut self) {
        while !self.actions.is_empty() {
            let longest = self
                .actions
                .iter()
                .map(|a| a.action.duration - a.elapsed)
                .fold(0.0_f32, f32::max);
            self.advance(longest.max(f32::EPSILON));
        }
    }

    /// Number of actions still running
    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    /// Number of actions still running on one node
    pub fn pending_actions_for(&self, id: NodeId) -> usize {
        self.actions.iter().filter(|a| a.target == id).count()
    }

    /// Number of actions ever scheduled on this scene
    pub fn scheduled_actions(&self) -> usize {
        self.scheduled_total
    }

    pub fn default_lighting(&self) -> bool {
        self.default_lighting
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|entry| entry.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of live nodes, root excluded
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Transform from node space to world space, composed up the parent chain
    pub fn world_transform(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let mut entry = self.nodes.get(&id)?;
        let mut transform = entry.node.local_transform();
        while let Some(parent) = entry.parent {
            entry = self.nodes.get(&parent)?;
            transform = entry.node.local_transform() * transform;
        }
        Some(transform)
    }

    fn collect_subtree(&self, id: NodeId, out: &mut HashSet<NodeId>) {
        if out.insert(id) {
            for child in self.children(id) {
                self.collect_subtree(*child, out);
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes.get_mut(&id).and_then(|e| e.parent.take()) {
            if let Some(parent_entry) = self.nodes.get_mut(&parent) {
                parent_entry.children.retain(|c| *c != id);
            }
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderRuntime for Scene {
    fn root(&self) -> NodeId {
        self.root
    }

    fn create_node(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            NodeEntry {
                node,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child == self.root || !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child)
        {
            return false;
        }
        if self.is_ancestor(child, parent) {
            warn!("refusing to attach node {} under its own descendant", child.raw());
            return false;
        }
        self.detach(child);
        if let Some(entry) = self.nodes.get_mut(&child) {
            entry.parent = Some(parent);
        }
        if let Some(entry) = self.nodes.get_mut(&parent) {
            entry.children.push(child);
        }
        true
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        if id == self.root {
            warn!("the root node cannot be removed");
            return false;
        }
        if !self.nodes.contains_key(&id) {
            return false;
        }

        let mut doomed = HashSet::new();
        self.collect_subtree(id, &mut doomed);
        self.detach(id);
        for node in &doomed {
            self.nodes.remove(node);
        }

        let before = self.actions.len();
        self.actions.retain(|a| !doomed.contains(&a.target));
        let dropped = before - self.actions.len();
        if dropped > 0 {
            debug!("discarded {} in-flight action(s) of removed node {}", dropped, id.raw());
        }
        true
    }

    fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id).map(|entry| &entry.node)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id).map(|entry| &mut entry.node)
    }

    fn run_action(&mut self, id: NodeId, action: RotateBy) {
        if !self.nodes.contains_key(&id) {
            debug!("ignoring action for missing node {}", id.raw());
            return;
        }
        self.scheduled_total += 1;
        self.actions.push(RunningAction {
            target: id,
            action,
            elapsed: 0.0,
        });
    }

    fn set_default_lighting(&mut self, enabled: bool) {
        self.default_lighting = enabled;
    }
}
