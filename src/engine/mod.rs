//! The placement and animation engine
//!
//! [`DiceEngine`] ties the pieces together: surface visuals follow anchor
//! events, taps resolve to placements, placed dice live in the registry and
//! get rolled by the animator. It owns both collaborators and is driven from
//! a single thread.

pub mod anchor_visualizer;
pub mod dispatcher;
pub mod placement;
pub mod registry;
pub mod roll;

pub use anchor_visualizer::{AnchorVisualizer, SurfaceTracker, SurfaceVisual};
pub use dispatcher::Interaction;
pub use placement::PlacementResolver;
pub use registry::{ObjectId, ObjectRegistry, PlacedObject};
pub use roll::{RollAnimator, RollCommand};

use cgmath::Vector3;
use log::{info, warn};

use crate::{
    config::EngineConfig,
    error::Result,
    gfx::{scene::RenderRuntime, template::ObjectTemplate},
    tracking::{simulated::SimulatedTracking, AnchorEvent, TrackingSession},
};

pub struct DiceEngine<R: RenderRuntime, T: TrackingSession> {
    runtime: R,
    tracking: T,
    config: EngineConfig,
    template: ObjectTemplate,
    surfaces: SurfaceTracker,
    resolver: PlacementResolver,
    registry: ObjectRegistry,
    animator: RollAnimator,
    next_object_id: u64,
}

impl<R: RenderRuntime, T: TrackingSession> DiceEngine<R, T> {
    /// Validates the configuration and resolves the placeable template
    ///
    /// This is the only fallible step; a missing asset fails here rather
    /// than on the first tap.
    pub fn new(config: EngineConfig, mut runtime: R, tracking: T) -> Result<Self> {
        config.validate()?;
        let template = ObjectTemplate::resolve(&config.template)?;
        let radius = config.bounding_radius.unwrap_or(template.bounding_radius);

        runtime.set_default_lighting(config.default_lighting);

        info!(
            "dice engine ready: template '{}', {:?} placement, radius {:.3}m",
            template.name, config.height_policy, radius
        );

        Ok(Self {
            surfaces: SurfaceTracker::new(AnchorVisualizer::new(&config.grid_texture)),
            resolver: PlacementResolver::new(config.height_policy, radius),
            registry: ObjectRegistry::new(),
            animator: RollAnimator::new(config.roll),
            runtime,
            tracking,
            config,
            template,
            next_object_id: 1,
        })
    }

    /// Starts tracking with the configured session options
    pub fn start_session(&mut self) {
        let session = self.config.session;
        self.tracking.run(&session);
    }

    pub fn pause_session(&mut self) {
        self.tracking.pause();
    }

    /// Keeps surface visuals in step with the tracker
    pub fn on_anchor_event(&mut self, event: &AnchorEvent) {
        self.surfaces.handle_event(event, &mut self.runtime);
    }

    /// Spawns a die at `position`, registers it and gives it an initial roll
    fn place_object(&mut self, position: Vector3<f32>) -> Option<ObjectId> {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;

        let root = self.runtime.root();
        let node = self.runtime.spawn(root, self.template.instantiate(position));
        let object = PlacedObject { id, node, position };

        if !self.registry.append(object.clone()) {
            warn!("dropping object {:?}: registry rejected it", id);
            self.runtime.remove_node(node);
            return None;
        }

        info!(
            "placed {:?} at ({:.3}, {:.3}, {:.3})",
            id, position.x, position.y, position.z
        );
        self.animator.roll(&object, &mut self.runtime);
        Some(id)
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    pub fn tracking(&self) -> &T {
        &self.tracking
    }

    pub fn tracking_mut(&mut self) -> &mut T {
        &mut self.tracking
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn surfaces(&self) -> &SurfaceTracker {
        &self.surfaces
    }

    pub fn template(&self) -> &ObjectTemplate {
        &self.template
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> &PlacementResolver {
        &self.resolver
    }
}

impl<R: RenderRuntime> DiceEngine<R, SimulatedTracking> {
    /// Forwards every anchor event the simulated tracker queued.
    /// Returns how many were handled.
    pub fn sync_anchors(&mut self) -> usize {
        let events = self.tracking.poll_events();
        for event in &events {
            self.surfaces.handle_event(event, &mut self.runtime);
        }
        events.len()
    }
}
