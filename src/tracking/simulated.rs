//! Tracking session over a scripted set of surfaces
//!
//! Planes are "detected" by calling [`SimulatedTracking::detect_plane`]; the
//! session queues the matching anchor events for the host to forward to the
//! engine, and answers hit-tests by casting the camera ray through the tapped
//! pixel against every known plane.

use std::collections::VecDeque;

use cgmath::{Matrix4, SquareMatrix};
use log::{debug, info};

use super::{
    Anchor, AnchorEvent, AnchorId, HitTestKind, HitTestResult, PlaneAnchor, PointAnchor,
    ScreenPoint, SessionConfig, TrackingSession,
};
use crate::gfx::{
    camera::DeviceCamera,
    picking::{intersect_plane, screen_to_ray},
};

pub struct SimulatedTracking {
    pub camera: DeviceCamera,
    planes: Vec<PlaneAnchor>,
    points: Vec<PointAnchor>,
    events: VecDeque<AnchorEvent>,
    config: Option<SessionConfig>,
    next_id: u64,
}

impl SimulatedTracking {
    pub fn new(camera: DeviceCamera) -> Self {
        Self {
            camera,
            planes: Vec::new(),
            points: Vec::new(),
            events: VecDeque::new(),
            config: None,
            next_id: 1,
        }
    }

    /// Hands out a fresh anchor id
    pub fn allocate_id(&mut self) -> AnchorId {
        let id = AnchorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Reports a newly detected plane
    ///
    /// Ignored unless the session runs with plane detection covering the
    /// plane's alignment. Returns whether the plane is now tracked.
    pub fn detect_plane(&mut self, plane: PlaneAnchor) -> bool {
        let accepted = self
            .config
            .map_or(false, |c| c.plane_detection.allows(plane.alignment));
        if !accepted {
            debug!("plane {:?} not tracked under current session", plane.id);
            return false;
        }
        if self.planes.iter().any(|p| p.id == plane.id) {
            return self.refine_plane(plane);
        }
        self.events.push_back(AnchorEvent::Added(Anchor::Plane(plane.clone())));
        self.planes.push(plane);
        true
    }

    /// Replaces a tracked plane's pose or extent. Returns false for unknown ids.
    pub fn refine_plane(&mut self, plane: PlaneAnchor) -> bool {
        match self.planes.iter_mut().find(|p| p.id == plane.id) {
            Some(existing) => {
                *existing = plane.clone();
                self.events.push_back(AnchorEvent::Updated(Anchor::Plane(plane)));
                true
            }
            None => false,
        }
    }

    /// Reports a non-planar anchor
    pub fn add_point_anchor(&mut self, transform: Matrix4<f32>) -> AnchorId {
        let anchor = PointAnchor {
            id: self.allocate_id(),
            transform,
        };
        let id = anchor.id;
        self.events.push_back(AnchorEvent::Added(Anchor::Point(anchor.clone())));
        self.points.push(anchor);
        id
    }

    /// Stops tracking an anchor of any kind
    pub fn remove_anchor(&mut self, id: AnchorId) -> bool {
        let before = self.planes.len() + self.points.len();
        self.planes.retain(|p| p.id != id);
        self.points.retain(|p| p.id != id);
        let removed = self.planes.len() + self.points.len() < before;
        if removed {
            self.events.push_back(AnchorEvent::Removed(id));
        }
        removed
    }

    /// Takes every anchor event queued since the last call, oldest first
    pub fn poll_events(&mut self) -> Vec<AnchorEvent> {
        self.events.drain(..).collect()
    }

    pub fn planes(&self) -> &[PlaneAnchor] {
        &self.planes
    }

    pub fn session_config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    /// Whether the running session asked for feature points to be drawn
    pub fn feature_points_visible(&self) -> bool {
        self.config.is_some_and(|c| c.show_feature_points)
    }

    fn hit_planes(&self, point: ScreenPoint, kind: HitTestKind) -> Vec<HitTestResult> {
        let ray = screen_to_ray(point, &self.camera);

        let mut hits: Vec<HitTestResult> = self
            .planes
            .iter()
            .filter_map(|plane| {
                let t = intersect_plane(&ray, plane.world_center(), plane.world_normal())?;
                let world = ray.point_at(t);

                if kind == HitTestKind::ExistingPlaneUsingExtent {
                    let local = plane.transform.invert()? * world.extend(1.0);
                    if !plane.contains_local(local.truncate()) {
                        return None;
                    }
                }

                Some(HitTestResult {
                    kind,
                    world_transform: Matrix4::from_translation(world),
                    distance: t,
                    anchor: Some(plane.id),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl TrackingSession for SimulatedTracking {
    fn run(&mut self, config: &SessionConfig) {
        info!(
            "tracking session running (plane detection: {:?}, feature points {})",
            config.plane_detection,
            if config.show_feature_points { "shown" } else { "hidden" }
        );
        self.config = Some(*config);
    }

    fn pause(&mut self) {
        info!("tracking session paused");
        self.config = None;
    }

    fn is_running(&self) -> bool {
        self.config.is_some()
    }

    /// Feature points are not simulated, so `FeaturePoint` tests never hit
    fn hit_test(&self, point: ScreenPoint, kind: HitTestKind) -> Vec<HitTestResult> {
        if !self.is_running() {
            return Vec::new();
        }
        match kind {
            HitTestKind::ExistingPlaneUsingExtent | HitTestKind::ExistingPlane => {
                self.hit_planes(point, kind)
            }
            HitTestKind::FeaturePoint => Vec::new(),
        }
    }
}
