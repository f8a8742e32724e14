//! # Surface Tracking
//!
//! Types exchanged with the tracking subsystem (the SLAM layer that finds
//! surfaces and answers hit-tests) and the [`TrackingSession`] trait the engine
//! consumes. The tracker owns every anchor; the engine only reads them.
//!
//! [`SimulatedTracking`] is a self-contained session over a fixed set of planes,
//! used headless and in tests.

pub mod simulated;

pub use simulated::SimulatedTracking;

use cgmath::{InnerSpace, Matrix4, Vector3, Vector4};

/// Opaque anchor identifier assigned by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u64);

/// Screen position in pixels, origin at the top-left corner
pub type ScreenPoint = (f32, f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneAlignment {
    Horizontal,
    Vertical,
}

/// A detected flat surface
///
/// `center` and `extent` are expressed in the anchor's own frame, which is
/// given by `transform`. The plane lies in that frame's XZ plane; `extent.x`
/// is the width and `extent.z` the depth.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    pub id: AnchorId,
    pub transform: Matrix4<f32>,
    pub center: Vector3<f32>,
    pub extent: Vector3<f32>,
    pub alignment: PlaneAlignment,
}

impl PlaneAnchor {
    /// Horizontal plane with its frame at `transform`
    pub fn horizontal(
        id: AnchorId,
        transform: Matrix4<f32>,
        center: Vector3<f32>,
        extent: Vector3<f32>,
    ) -> Self {
        Self {
            id,
            transform,
            center,
            extent,
            alignment: PlaneAlignment::Horizontal,
        }
    }

    pub fn width(&self) -> f32 {
        self.extent.x
    }

    pub fn depth(&self) -> f32 {
        self.extent.z
    }

    /// Plane center in world space
    pub fn world_center(&self) -> Vector3<f32> {
        (self.transform * self.center.extend(1.0)).truncate()
    }

    /// Plane normal in world space
    pub fn world_normal(&self) -> Vector3<f32> {
        (self.transform * Vector4::unit_y()).truncate().normalize()
    }

    /// Whether a point given in the anchor frame falls inside the detected extent
    pub fn contains_local(&self, local: Vector3<f32>) -> bool {
        (local.x - self.center.x).abs() <= self.extent.x * 0.5
            && (local.z - self.center.z).abs() <= self.extent.z * 0.5
    }
}

/// Any other anchor kind the tracker reports; carries a pose only
#[derive(Debug, Clone, PartialEq)]
pub struct PointAnchor {
    pub id: AnchorId,
    pub transform: Matrix4<f32>,
}

/// Tagged anchor kinds. Only planes get a visual.
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    Plane(PlaneAnchor),
    Point(PointAnchor),
}

impl Anchor {
    pub fn id(&self) -> AnchorId {
        match self {
            Anchor::Plane(plane) => plane.id,
            Anchor::Point(point) => point.id,
        }
    }

    pub fn transform(&self) -> Matrix4<f32> {
        match self {
            Anchor::Plane(plane) => plane.transform,
            Anchor::Point(point) => point.transform,
        }
    }

    pub fn as_plane(&self) -> Option<&PlaneAnchor> {
        match self {
            Anchor::Plane(plane) => Some(plane),
            Anchor::Point(_) => None,
        }
    }
}

/// Anchor lifecycle notifications from the tracker
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorEvent {
    Added(Anchor),
    Updated(Anchor),
    Removed(AnchorId),
}

/// What a hit-test is allowed to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestKind {
    /// Detected planes, limited to their measured extent
    ExistingPlaneUsingExtent,
    /// Detected planes, treated as infinite
    ExistingPlane,
    /// Raw feature points
    FeaturePoint,
}

/// One intersection reported by a hit-test
#[derive(Debug, Clone, PartialEq)]
pub struct HitTestResult {
    pub kind: HitTestKind,
    /// Pose of the intersection in world space
    pub world_transform: Matrix4<f32>,
    /// Distance from the camera along the hit ray
    pub distance: f32,
    pub anchor: Option<AnchorId>,
}

impl HitTestResult {
    /// Translation column of the world transform
    pub fn translation(&self) -> Vector3<f32> {
        self.world_transform.w.truncate()
    }
}

/// Which surface orientations the tracker should look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneDetection {
    Off,
    Horizontal,
    Vertical,
    HorizontalAndVertical,
}

impl PlaneDetection {
    pub fn allows(self, alignment: PlaneAlignment) -> bool {
        matches!(
            (self, alignment),
            (PlaneDetection::Horizontal, PlaneAlignment::Horizontal)
                | (PlaneDetection::Vertical, PlaneAlignment::Vertical)
                | (PlaneDetection::HorizontalAndVertical, _)
        )
    }
}

/// Session options handed to [`TrackingSession::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub plane_detection: PlaneDetection,
    /// Ask the tracker to draw the feature points it is using. Trackers
    /// without a camera feed of their own only report the setting.
    pub show_feature_points: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            plane_detection: PlaneDetection::Horizontal,
            show_feature_points: true,
        }
    }
}

/// The tracking subsystem as seen by the engine
pub trait TrackingSession {
    /// Starts or restarts tracking with `config`
    fn run(&mut self, config: &SessionConfig);

    fn pause(&mut self);

    fn is_running(&self) -> bool;

    /// Intersections of the ray through `point` with tracked geometry of
    /// `kind`, nearest first. Empty when nothing is hit.
    fn hit_test(&self, point: ScreenPoint, kind: HitTestKind) -> Vec<HitTestResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Matrix4};

    #[test]
    fn test_plane_world_frame() {
        let plane = PlaneAnchor::horizontal(
            AnchorId(1),
            Matrix4::from_translation(Vector3::new(0.0, -1.0, -2.0)),
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 2.0),
        );
        assert_eq!(plane.world_center(), Vector3::new(0.5, -1.0, -2.0));
        assert_eq!(plane.world_normal(), Vector3::unit_y());
        assert!(plane.contains_local(Vector3::new(1.0, 0.0, 1.0)));
        assert!(!plane.contains_local(Vector3::new(1.1, 0.0, 0.0)));
        assert_eq!(plane.width(), 1.0);
        assert_eq!(plane.depth(), 2.0);
    }

    #[test]
    fn test_tilted_plane_normal() {
        let plane = PlaneAnchor::horizontal(
            AnchorId(2),
            Matrix4::from_angle_x(Deg(90.0)),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 1.0),
        );
        assert!((plane.world_normal() - Vector3::unit_z()).magnitude() < 1e-5);
    }

    #[test]
    fn test_plane_detection_filter() {
        assert!(PlaneDetection::Horizontal.allows(PlaneAlignment::Horizontal));
        assert!(!PlaneDetection::Horizontal.allows(PlaneAlignment::Vertical));
        assert!(PlaneDetection::HorizontalAndVertical.allows(PlaneAlignment::Vertical));
        assert!(!PlaneDetection::Off.allows(PlaneAlignment::Horizontal));
    }

    #[test]
    fn test_anchor_accessors() {
        let point = Anchor::Point(PointAnchor {
            id: AnchorId(9),
            transform: Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0)),
        });
        assert_eq!(point.id(), AnchorId(9));
        assert!(point.as_plane().is_none());
        assert_eq!(point.transform().w.truncate(), Vector3::new(1.0, 2.0, 3.0));
    }
}
