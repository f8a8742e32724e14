//! Screen point to world placement
//!
//! A tap only places something if the tracker reports a hit on an already
//! detected surface, inside that surface's measured extent. The first (nearest)
//! hit wins; all others are ignored.

use cgmath::Vector3;
use log::{debug, trace};

use crate::{
    config::HeightPolicy,
    tracking::{HitTestKind, HitTestResult, ScreenPoint, TrackingSession},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResolver {
    policy: HeightPolicy,
    bounding_radius: f32,
}

impl PlacementResolver {
    /// Only bounded, already detected planes are valid placement targets
    pub const HIT_TEST_KIND: HitTestKind = HitTestKind::ExistingPlaneUsingExtent;

    /// `bounding_radius` is the radius of the object about to be placed
    pub fn new(policy: HeightPolicy, bounding_radius: f32) -> Self {
        Self {
            policy,
            bounding_radius,
        }
    }

    pub fn policy(&self) -> HeightPolicy {
        self.policy
    }

    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// World position for an object placed at `point`, or `None` on no hit
    pub fn resolve_placement<T: TrackingSession + ?Sized>(
        &self,
        point: ScreenPoint,
        tracking: &T,
    ) -> Option<Vector3<f32>> {
        let hits = tracking.hit_test(point, Self::HIT_TEST_KIND);
        let Some(first) = hits.first() else {
            debug!("tap at ({:.0}, {:.0}) hit no surface", point.0, point.1);
            return None;
        };
        trace!("{} hit(s), using nearest at {:.3}m", hits.len(), first.distance);
        Some(self.position_for_hit(first))
    }

    /// Placement derived from a single hit's translation
    pub fn position_for_hit(&self, hit: &HitTestResult) -> Vector3<f32> {
        let mut position = hit.translation();
        if self.policy == HeightPolicy::Flush {
            position.y += self.bounding_radius;
        }
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::SessionConfig;
    use cgmath::Matrix4;
    use std::cell::RefCell;

    /// Tracker double returning canned hits and recording the queries it got
    struct CannedHits {
        hits: Vec<HitTestResult>,
        queries: RefCell<Vec<(ScreenPoint, HitTestKind)>>,
    }

    impl CannedHits {
        fn new(translations: &[[f32; 3]]) -> Self {
            let hits = translations
                .iter()
                .enumerate()
                .map(|(i, t)| HitTestResult {
                    kind: HitTestKind::ExistingPlaneUsingExtent,
                    world_transform: Matrix4::from_translation(Vector3::from(*t)),
                    distance: i as f32 + 1.0,
                    anchor: None,
                })
                .collect();
            Self {
                hits,
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl TrackingSession for CannedHits {
        fn run(&mut self, _config: &SessionConfig) {}
        fn pause(&mut self) {}
        fn is_running(&self) -> bool {
            true
        }
        fn hit_test(&self, point: ScreenPoint, kind: HitTestKind) -> Vec<HitTestResult> {
            self.queries.borrow_mut().push((point, kind));
            self.hits.clone()
        }
    }

    #[test]
    fn test_flush_offset_scenario() {
        let tracking = CannedHits::new(&[[0.3, 0.0, -0.5]]);
        let resolver = PlacementResolver::new(HeightPolicy::Flush, 0.02);
        let position = resolver.resolve_placement((10.0, 20.0), &tracking).unwrap();
        assert_eq!(position, Vector3::new(0.3, 0.02, -0.5));
    }

    #[test]
    fn test_surface_level_policy_keeps_hit_height() {
        let tracking = CannedHits::new(&[[0.3, 0.1, -0.5]]);
        let resolver = PlacementResolver::new(HeightPolicy::SurfaceLevel, 0.02);
        let position = resolver.resolve_placement((0.0, 0.0), &tracking).unwrap();
        assert_eq!(position, Vector3::new(0.3, 0.1, -0.5));
    }

    #[test]
    fn test_no_hits_resolves_to_nothing() {
        let tracking = CannedHits::new(&[]);
        let resolver = PlacementResolver::new(HeightPolicy::Flush, 0.02);
        assert!(resolver.resolve_placement((5.0, 5.0), &tracking).is_none());
    }

    #[test]
    fn test_only_first_hit_is_used() {
        let tracking = CannedHits::new(&[[1.0, 0.0, -1.0], [2.0, 5.0, -2.0], [3.0, 9.0, -3.0]]);
        let resolver = PlacementResolver::new(HeightPolicy::Flush, 0.5);
        let position = resolver.resolve_placement((5.0, 5.0), &tracking).unwrap();
        assert_eq!(position, Vector3::new(1.0, 0.5, -1.0));
    }

    #[test]
    fn test_queries_bounded_planes_only() {
        let tracking = CannedHits::new(&[]);
        let resolver = PlacementResolver::new(HeightPolicy::Flush, 0.0);
        resolver.resolve_placement((42.0, 7.0), &tracking);
        assert_eq!(
            tracking.queries.borrow().as_slice(),
            &[((42.0, 7.0), HitTestKind::ExistingPlaneUsingExtent)]
        );
    }
}
