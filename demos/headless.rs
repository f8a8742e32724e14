//! # Headless Dice Demo
//!
//! Runs the dice engine against the simulated tracker and the in-memory scene,
//! logging what happens along the way.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example headless
//! ```
//!
//! ## What you'll see:
//! - A table detected one meter in front of the camera, then refined
//! - Three taps that land on it and one that misses
//! - A shake that rolls every die, and a final remove-all

use anyhow::{ensure, Context, Result};
use ardice::prelude::*;
use log::info;

const FRAME: f32 = 1.0 / 60.0;

fn run_frames(scene: &mut Scene, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        scene.advance(FRAME);
    }
}

fn main() -> Result<()> {
    ardice::init_logging();

    // Phone held at 1.2m looking at a spot on the table
    let camera = DeviceCamera::look_at(
        Vector3::new(0.0, 1.2, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
        (1170.0, 2532.0),
    );

    let config = EngineConfig::default().with_seed(2024);
    let mut engine = DiceEngine::new(config, Scene::new(), SimulatedTracking::new(camera))
        .context("building the dice engine")?;
    engine.start_session();

    let table = engine.tracking_mut().allocate_id();
    let pose = Matrix4::from_translation(Vector3::new(0.0, 0.0, -1.0));
    engine.tracking_mut().detect_plane(PlaneAnchor::horizontal(
        table,
        pose,
        Vector3::zero(),
        Vector3::new(0.6, 0.0, 0.4),
    ));
    engine.sync_anchors();

    // More of the table comes into view
    engine.tracking_mut().detect_plane(PlaneAnchor::horizontal(
        table,
        pose,
        Vector3::new(0.1, 0.0, 0.0),
        Vector3::new(1.2, 0.0, 0.8),
    ));
    engine.sync_anchors();

    for point in [(585.0, 1266.0), (500.0, 1300.0), (700.0, 1250.0), (585.0, 40.0)] {
        engine.dispatch(Interaction::Tap(point));
    }
    ensure!(
        engine.registry().len() == 3,
        "expected three dice, got {}",
        engine.registry().len()
    );
    run_frames(engine.runtime_mut(), 0.5);

    engine.dispatch(Interaction::Shake);
    run_frames(engine.runtime_mut(), 0.5);

    for object in engine.registry() {
        if let Some(node) = engine.runtime().node(object.node) {
            let angles = node.euler_angles;
            info!(
                "{:?} turned {:.0}° about X and {:.0}° about Z",
                object.id,
                Deg::from(Rad(angles.x)).0,
                Deg::from(Rad(angles.z)).0
            );
        }
    }

    engine.dispatch(Interaction::RemoveAll);
    info!(
        "{} die(s) left, {} scene node(s), {} roll(s) scheduled in total",
        engine.registry().len(),
        engine.runtime().node_count(),
        engine.runtime().scheduled_actions()
    );
    Ok(())
}
