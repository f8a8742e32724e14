//! User interaction entry points
//!
//! Taps, shakes and the remove-all command all land here. None of them report
//! anything back to the caller: a tap that misses every surface and a shake
//! with nothing placed are silently ignored.

use log::{debug, info};

use super::DiceEngine;
use crate::{
    gfx::scene::RenderRuntime,
    tracking::{ScreenPoint, TrackingSession},
};

/// Something the user did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Touch or click at a screen point (pixels, origin top-left)
    Tap(ScreenPoint),
    /// Device shake or "roll again"
    Shake,
    RemoveAll,
}

impl<R: RenderRuntime, T: TrackingSession> DiceEngine<R, T> {
    pub fn dispatch(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Tap(point) => self.on_tap(point),
            Interaction::Shake => self.on_shake_detected(),
            Interaction::RemoveAll => self.on_remove_all_command(),
        }
    }

    /// Places a die where the tap meets a detected surface
    pub fn on_tap(&mut self, point: ScreenPoint) {
        if let Some(position) = self.resolver.resolve_placement(point, &self.tracking) {
            self.place_object(position);
        }
    }

    /// Rolls every placed die once, in placement order
    pub fn on_shake_detected(&mut self) {
        let Self {
            registry,
            animator,
            runtime,
            ..
        } = self;

        if registry.is_empty() {
            debug!("shake with nothing placed");
            return;
        }
        registry.for_each(|object| {
            animator.roll(object, &mut *runtime);
        });
        debug!("rolled {} object(s)", registry.len());
    }

    /// Removes every placed die from the scene
    pub fn on_remove_all_command(&mut self) {
        let removed = self.registry.clear(&mut self.runtime);
        if removed > 0 {
            info!("removed {} object(s)", removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EngineConfig,
        engine::ObjectRegistry,
        gfx::scene::Scene,
        tracking::{HitTestKind, HitTestResult, SessionConfig},
    };
    use cgmath::{InnerSpace, Matrix4, Vector3};

    /// Tracker that hits a fixed table point wherever the tap lands,
    /// except for taps with a negative x coordinate
    struct FixedTable;

    impl TrackingSession for FixedTable {
        fn run(&mut self, _config: &SessionConfig) {}

        fn pause(&mut self) {}

        fn is_running(&self) -> bool {
            true
        }

        fn hit_test(&self, point: ScreenPoint, kind: HitTestKind) -> Vec<HitTestResult> {
            if point.0 < 0.0 {
                return Vec::new();
            }
            vec![HitTestResult {
                kind,
                world_transform: Matrix4::from_translation(Vector3::new(0.3, 0.0, -0.5)),
                distance: 1.0,
                anchor: None,
            }]
        }
    }

    fn engine() -> DiceEngine<Scene, FixedTable> {
        let config = EngineConfig::default()
            .with_seed(3)
            .with_bounding_radius(0.02);
        DiceEngine::new(config, Scene::new(), FixedTable).unwrap()
    }

    fn registry_nodes(registry: &ObjectRegistry) -> Vec<u64> {
        registry.iter().map(|o| o.node.raw()).collect()
    }

    #[test]
    fn test_taps_append_in_order() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.dispatch(Interaction::Tap((10.0, 10.0)));
        }
        let nodes = registry_nodes(engine.registry());
        assert_eq!(nodes.len(), 3);
        assert!(nodes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(engine.runtime().node_count(), 3);

        let first = engine.registry().iter().next().unwrap();
        assert_eq!(first.position, Vector3::new(0.3, 0.02, -0.5));
    }

    #[test]
    fn test_missed_tap_changes_nothing() {
        let mut engine = engine();
        engine.on_tap((-1.0, 10.0));
        assert!(engine.registry().is_empty());
        assert_eq!(engine.runtime().node_count(), 0);
        assert_eq!(engine.runtime().scheduled_actions(), 0);
    }

    #[test]
    fn test_shake_rolls_each_object_once() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.on_tap((10.0, 10.0));
        }
        engine.runtime_mut().finish_actions();
        let before = engine.runtime().scheduled_actions();

        let angles_of = |engine: &DiceEngine<Scene, FixedTable>| -> Vec<Vector3<f32>> {
            engine
                .registry()
                .iter()
                .map(|o| engine.runtime().node(o.node).unwrap().euler_angles)
                .collect()
        };
        let settled = angles_of(&engine);

        engine.dispatch(Interaction::Shake);
        assert_eq!(engine.runtime().scheduled_actions() - before, 3);
        for object in engine.registry() {
            assert_eq!(engine.runtime().pending_actions_for(object.node), 1);
        }

        engine.runtime_mut().finish_actions();
        let deltas: Vec<Vector3<f32>> = angles_of(&engine)
            .iter()
            .zip(&settled)
            .map(|(after, before)| *after - *before)
            .collect();
        let quarter = std::f32::consts::FRAC_PI_2;
        for delta in &deltas {
            assert_eq!(delta.y, 0.0);
            for turns in [delta.x / quarter, delta.z / quarter] {
                assert!((turns - turns.round()).abs() < 1e-3);
                assert!([5.0, 10.0, 15.0, 20.0].contains(&turns.round()));
            }
        }
    }

    #[test]
    fn test_shake_draws_each_object_separately() {
        // Identical rolls for every die under every seed would mean one draw
        // shared across the shake
        let varied = (0..20).any(|seed| {
            let config = EngineConfig::default().with_seed(seed);
            let mut engine = DiceEngine::new(config, Scene::new(), FixedTable).unwrap();
            for _ in 0..3 {
                engine.on_tap((10.0, 10.0));
            }
            engine.runtime_mut().finish_actions();
            let before: Vec<_> = engine
                .registry()
                .iter()
                .map(|o| engine.runtime().node(o.node).unwrap().euler_angles)
                .collect();

            engine.on_shake_detected();
            engine.runtime_mut().finish_actions();
            let deltas: Vec<_> = engine
                .registry()
                .iter()
                .zip(&before)
                .map(|(o, b)| engine.runtime().node(o.node).unwrap().euler_angles - *b)
                .collect();
            deltas.windows(2).any(|w| (w[0] - w[1]).magnitude() > 1e-3)
        });
        assert!(varied);
    }

    #[test]
    fn test_shake_and_remove_all_on_empty_are_noops() {
        let mut engine = engine();
        engine.on_shake_detected();
        engine.on_remove_all_command();
        assert_eq!(engine.runtime().scheduled_actions(), 0);
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn test_remove_all_clears_scene_and_animations() {
        let mut engine = engine();
        engine.on_tap((10.0, 10.0));
        engine.on_tap((20.0, 10.0));
        assert_eq!(engine.runtime().pending_actions(), 2);

        engine.dispatch(Interaction::RemoveAll);
        assert!(engine.registry().is_empty());
        assert_eq!(engine.runtime().node_count(), 0);
        assert_eq!(engine.runtime().pending_actions(), 0);

        engine.on_tap((10.0, 10.0));
        assert_eq!(engine.registry().len(), 1);
    }
}
