//! Surface visuals for detected plane anchors
//!
//! Every plane the tracker reports gets a flat grid quad matching its extent,
//! parented to the anchor's node so it follows the anchor's pose. Other anchor
//! kinds get a node but no visual.

use std::collections::BTreeMap;

use cgmath::{Deg, InnerSpace, Rad, Vector3, Vector4};
use log::{debug, info};

use crate::{
    gfx::{
        geometry::{generate_plane, GeometryData},
        material::Material,
        scene::{NodeId, RenderRuntime, SceneNode},
    },
    tracking::{Anchor, AnchorEvent, AnchorId, PlaneAnchor},
};

/// Tilt that lays a default (vertical, +Z facing) quad flat with its face up.
/// Positive would turn it face down.
pub const FLAT_TILT: Deg<f32> = Deg(-90.0);

/// Flat, grid-textured quad sized to one plane anchor
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceVisual {
    pub anchor: AnchorId,
    pub width: f32,
    pub depth: f32,
    /// Position in the anchor's frame; always on the anchor's own plane (y = 0)
    pub position: Vector3<f32>,
    pub euler_angles: Vector3<f32>,
    pub geometry: GeometryData,
    pub material: Material,
}

impl SurfaceVisual {
    /// Face normal in the anchor's frame
    pub fn normal(&self) -> Vector3<f32> {
        let node = self.to_node();
        (node.local_transform() * Vector4::unit_z()).truncate().normalize()
    }

    pub fn to_node(&self) -> SceneNode {
        SceneNode::new(format!("surface-{}", self.anchor.0))
            .with_position(self.position)
            .with_euler_angles(self.euler_angles)
            .with_geometry(self.geometry.clone())
            .with_material(self.material.clone())
    }

    fn apply_to(&self, node: &mut SceneNode) {
        node.position = self.position;
        node.euler_angles = self.euler_angles;
        node.geometry = Some(self.geometry.clone());
    }
}

/// Builds surface visuals; holds the grid material shared by all of them
#[derive(Debug, Clone)]
pub struct AnchorVisualizer {
    grid: Material,
}

impl AnchorVisualizer {
    pub fn new(grid_texture: &str) -> Self {
        Self {
            grid: Material::grid(grid_texture),
        }
    }

    /// Visual for a newly detected plane
    ///
    /// Zero or negative extents are accepted as-is and give a degenerate quad
    /// that renders nothing.
    pub fn on_anchor_added(&self, anchor: &PlaneAnchor) -> SurfaceVisual {
        let (width, depth) = (anchor.width(), anchor.depth());
        SurfaceVisual {
            anchor: anchor.id,
            width,
            depth,
            position: Vector3::new(anchor.center.x, 0.0, anchor.center.z),
            euler_angles: Vector3::new(Rad::from(FLAT_TILT).0, 0.0, 0.0),
            geometry: generate_plane(width, depth, 1, 1),
            material: self.grid.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SurfaceBinding {
    anchor_node: NodeId,
    visual_node: Option<NodeId>,
}

/// Live map from tracked anchors to their scene nodes
///
/// Consumes anchor events and keeps the runtime's nodes in step: one anchor
/// node per anchor (carrying the tracker's pose) and, for planes, one visual
/// child under it.
pub struct SurfaceTracker {
    visualizer: AnchorVisualizer,
    bindings: BTreeMap<AnchorId, SurfaceBinding>,
}

impl SurfaceTracker {
    pub fn new(visualizer: AnchorVisualizer) -> Self {
        Self {
            visualizer,
            bindings: BTreeMap::new(),
        }
    }

    pub fn handle_event<R: RenderRuntime + ?Sized>(&mut self, event: &AnchorEvent, runtime: &mut R) {
        match event {
            AnchorEvent::Added(anchor) => {
                if self.bindings.contains_key(&anchor.id()) {
                    debug!("anchor {:?} added twice, treating as update", anchor.id());
                    self.anchor_updated(anchor, runtime);
                } else {
                    self.anchor_added(anchor, runtime);
                }
            }
            AnchorEvent::Updated(anchor) => self.anchor_updated(anchor, runtime),
            AnchorEvent::Removed(id) => self.anchor_removed(*id, runtime),
        }
    }

    fn anchor_added<R: RenderRuntime + ?Sized>(&mut self, anchor: &Anchor, runtime: &mut R) {
        let root = runtime.root();
        let anchor_node = runtime.spawn(
            root,
            SceneNode::new(format!("anchor-{}", anchor.id().0)).with_transform(anchor.transform()),
        );

        let visual_node = anchor.as_plane().map(|plane| {
            let visual = self.visualizer.on_anchor_added(plane);
            info!(
                "surface {:?} detected: {:.2}m x {:.2}m",
                plane.id, visual.width, visual.depth
            );
            runtime.spawn(anchor_node, visual.to_node())
        });

        self.bindings.insert(
            anchor.id(),
            SurfaceBinding {
                anchor_node,
                visual_node,
            },
        );
    }

    fn anchor_updated<R: RenderRuntime + ?Sized>(&mut self, anchor: &Anchor, runtime: &mut R) {
        let Some(binding) = self.bindings.get(&anchor.id()).copied() else {
            debug!("update for unknown anchor {:?} ignored", anchor.id());
            return;
        };
        if !runtime.contains(binding.anchor_node) {
            // node vanished from under us; start over
            self.bindings.remove(&anchor.id());
            self.anchor_added(anchor, runtime);
            return;
        }

        if let Some(node) = runtime.node_mut(binding.anchor_node) {
            node.transform_override = Some(anchor.transform());
        }

        let Some(plane) = anchor.as_plane() else {
            return;
        };
        let visual = self.visualizer.on_anchor_added(plane);
        match binding.visual_node.filter(|id| runtime.contains(*id)) {
            Some(visual_node) => {
                if let Some(node) = runtime.node_mut(visual_node) {
                    visual.apply_to(node);
                }
            }
            None => {
                let visual_node = runtime.spawn(binding.anchor_node, visual.to_node());
                self.bindings.insert(
                    plane.id,
                    SurfaceBinding {
                        anchor_node: binding.anchor_node,
                        visual_node: Some(visual_node),
                    },
                );
            }
        }
    }

    fn anchor_removed<R: RenderRuntime + ?Sized>(&mut self, id: AnchorId, runtime: &mut R) {
        match self.bindings.remove(&id) {
            Some(binding) => {
                runtime.remove_node(binding.anchor_node);
                info!("surface {:?} lost", id);
            }
            None => debug!("removal of unknown anchor {:?} ignored", id),
        }
    }

    pub fn anchor_node(&self, id: AnchorId) -> Option<NodeId> {
        self.bindings.get(&id).map(|b| b.anchor_node)
    }

    pub fn visual_node(&self, id: AnchorId) -> Option<NodeId> {
        self.bindings.get(&id).and_then(|b| b.visual_node)
    }

    /// Number of tracked anchors of any kind
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of anchors currently showing a surface visual
    pub fn surface_count(&self) -> usize {
        self.bindings.values().filter(|b| b.visual_node.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::Scene;
    use crate::tracking::PointAnchor;
    use cgmath::{Matrix4, SquareMatrix, Zero};

    fn plane(id: u64, center: Vector3<f32>, width: f32, depth: f32) -> PlaneAnchor {
        PlaneAnchor::horizontal(
            AnchorId(id),
            Matrix4::from_translation(Vector3::new(0.0, -0.8, -1.0)),
            center,
            Vector3::new(width, 0.0, depth),
        )
    }

    #[test]
    fn test_visual_matches_extent_and_lies_flat() {
        let visualizer = AnchorVisualizer::new("grid.png");
        let visual = visualizer.on_anchor_added(&plane(1, Vector3::new(0.2, 0.3, -0.1), 1.5, 0.75));

        assert_eq!(visual.width, 1.5);
        assert_eq!(visual.depth, 0.75);
        // vertical offset pinned to the anchor plane even if center.y is not
        assert_eq!(visual.position, Vector3::new(0.2, 0.0, -0.1));
        assert!((visual.normal() - Vector3::unit_y()).magnitude() < 1e-5);
        assert_eq!(visual.material.diffuse_texture.as_deref(), Some("grid.png"));

        let bounds = visual.geometry.aabb();
        assert!((bounds.max.x - bounds.min.x - 1.5).abs() < 1e-6);
        assert!((bounds.max.y - bounds.min.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_flat_tilt_sign_faces_up() {
        let visualizer = AnchorVisualizer::new("grid.png");
        let mut visual = visualizer.on_anchor_added(&plane(1, Vector3::zero(), 1.0, 1.0));
        assert!(visual.normal().y > 0.99);
        visual.euler_angles.x = -visual.euler_angles.x;
        assert!(visual.normal().y < -0.99);
    }

    #[test]
    fn test_zero_extent_is_tolerated() {
        let visualizer = AnchorVisualizer::new("grid.png");
        let visual = visualizer.on_anchor_added(&plane(3, Vector3::zero(), 0.0, 0.0));
        assert_eq!(visual.geometry.vertex_count(), 4);
        assert_eq!(visual.geometry.bounding_radius(), 0.0);
    }

    #[test]
    fn test_tracker_attaches_visual_under_anchor_node() {
        let mut scene = Scene::new();
        let mut tracker = SurfaceTracker::new(AnchorVisualizer::new("grid.png"));
        let anchor = plane(7, Vector3::zero(), 1.0, 2.0);
        tracker.handle_event(&AnchorEvent::Added(Anchor::Plane(anchor)), &mut scene);

        let anchor_node = tracker.anchor_node(AnchorId(7)).unwrap();
        let visual_node = tracker.visual_node(AnchorId(7)).unwrap();
        assert_eq!(scene.parent(anchor_node), Some(scene.root()));
        assert_eq!(scene.parent(visual_node), Some(anchor_node));

        // world pose follows the anchor: flat at the anchor's height
        let world = scene.world_transform(visual_node).unwrap();
        assert_eq!(world.w.truncate(), Vector3::new(0.0, -0.8, -1.0));
        let normal = (world * Vector4::unit_z()).truncate();
        assert!((normal - Vector3::unit_y()).magnitude() < 1e-5);
    }

    #[test]
    fn test_tracker_update_resizes_visual() {
        let mut scene = Scene::new();
        let mut tracker = SurfaceTracker::new(AnchorVisualizer::new("grid.png"));
        tracker.handle_event(
            &AnchorEvent::Added(Anchor::Plane(plane(1, Vector3::zero(), 0.5, 0.5))),
            &mut scene,
        );
        let visual_node = tracker.visual_node(AnchorId(1)).unwrap();

        let grown = plane(1, Vector3::new(0.1, 0.0, 0.0), 2.0, 1.0);
        tracker.handle_event(&AnchorEvent::Updated(Anchor::Plane(grown)), &mut scene);

        assert_eq!(tracker.visual_node(AnchorId(1)), Some(visual_node));
        let node = scene.node(visual_node).unwrap();
        let bounds = node.geometry.as_ref().unwrap().aabb();
        assert!((bounds.max.x - bounds.min.x - 2.0).abs() < 1e-6);
        assert_eq!(node.position.x, 0.1);
    }

    #[test]
    fn test_tracker_removal_drops_visual() {
        let mut scene = Scene::new();
        let mut tracker = SurfaceTracker::new(AnchorVisualizer::new("grid.png"));
        tracker.handle_event(
            &AnchorEvent::Added(Anchor::Plane(plane(1, Vector3::zero(), 1.0, 1.0))),
            &mut scene,
        );
        let visual_node = tracker.visual_node(AnchorId(1)).unwrap();

        tracker.handle_event(&AnchorEvent::Removed(AnchorId(1)), &mut scene);
        assert!(tracker.is_empty());
        assert!(!scene.contains(visual_node));
        assert_eq!(scene.node_count(), 0);

        // unknown ids are ignored
        tracker.handle_event(&AnchorEvent::Removed(AnchorId(1)), &mut scene);
        tracker.handle_event(
            &AnchorEvent::Updated(Anchor::Plane(plane(9, Vector3::zero(), 1.0, 1.0))),
            &mut scene,
        );
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_non_plane_anchors_get_no_visual() {
        let mut scene = Scene::new();
        let mut tracker = SurfaceTracker::new(AnchorVisualizer::new("grid.png"));
        let point = Anchor::Point(PointAnchor {
            id: AnchorId(4),
            transform: Matrix4::identity(),
        });
        tracker.handle_event(&AnchorEvent::Added(point), &mut scene);

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.surface_count(), 0);
        assert!(tracker.visual_node(AnchorId(4)).is_none());
        assert_eq!(scene.node_count(), 1);
    }
}
