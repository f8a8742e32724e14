use std::io::Write;

use ardice::prelude::*;

fn camera() -> DeviceCamera {
    DeviceCamera::look_at(
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
        (800.0, 600.0),
    )
}

fn engine_with(config: EngineConfig) -> DiceEngine<Scene, SimulatedTracking> {
    let mut engine = DiceEngine::new(config, Scene::new(), SimulatedTracking::new(camera()))
        .expect("engine should build");
    engine.start_session();
    engine
}

/// Engine with a 2m x 2m table centered one meter ahead of the camera
fn engine_on_table() -> (DiceEngine<Scene, SimulatedTracking>, AnchorId) {
    let mut engine = engine_with(EngineConfig::default().with_seed(7).with_bounding_radius(0.02));
    let id = engine.tracking_mut().allocate_id();
    engine.tracking_mut().detect_plane(PlaneAnchor::horizontal(
        id,
        Matrix4::from_translation(Vector3::new(0.0, 0.0, -1.0)),
        Vector3::zero(),
        Vector3::new(2.0, 0.0, 2.0),
    ));
    engine.sync_anchors();
    (engine, id)
}

#[test]
fn n_taps_place_n_dice() {
    let (mut engine, _) = engine_on_table();
    let taps = [(400.0, 300.0), (380.0, 320.0), (420.0, 310.0), (400.0, 350.0)];
    for point in taps {
        engine.on_tap(point);
    }
    assert_eq!(engine.registry().len(), taps.len());
    for object in engine.registry() {
        assert!(engine.runtime().contains(object.node));
        assert!((object.position.y - 0.02).abs() < 1e-4);
    }
}

#[test]
fn tap_off_the_table_is_ignored() {
    let (mut engine, _) = engine_on_table();
    // Ray through the top edge passes far beyond the table
    engine.on_tap((400.0, 0.0));
    assert!(engine.registry().is_empty());
    assert_eq!(engine.runtime().scheduled_actions(), 0);
}

#[test]
fn tap_before_any_surface_is_ignored() {
    let mut engine = engine_with(EngineConfig::default().with_seed(1));
    engine.on_tap((400.0, 300.0));
    assert!(engine.registry().is_empty());
}

#[test]
fn remove_all_empties_scene_of_dice_only() {
    let (mut engine, table) = engine_on_table();
    for _ in 0..3 {
        engine.on_tap((400.0, 300.0));
    }
    let surface_nodes = engine.runtime().node_count() - 3;

    engine.on_remove_all_command();
    assert!(engine.registry().is_empty());
    assert_eq!(engine.runtime().node_count(), surface_nodes);
    assert!(engine.surfaces().visual_node(table).is_some());

    // Nothing left to remove
    engine.on_remove_all_command();
    assert_eq!(engine.runtime().node_count(), surface_nodes);
}

#[test]
fn shake_schedules_one_roll_per_die() {
    let (mut engine, _) = engine_on_table();
    for _ in 0..3 {
        engine.on_tap((400.0, 300.0));
    }
    assert_eq!(engine.runtime().scheduled_actions(), 3);

    engine.on_shake_detected();
    assert_eq!(engine.runtime().scheduled_actions(), 6);
}

#[test]
fn rolls_only_turn_about_horizontal_axes() {
    let (mut engine, _) = engine_on_table();
    engine.on_tap((400.0, 300.0));
    engine.on_shake_detected();
    engine.runtime_mut().finish_actions();

    let quarter = std::f32::consts::FRAC_PI_2;
    let object = engine.registry().iter().next().unwrap();
    let angles = engine.runtime().node(object.node).unwrap().euler_angles;
    assert_eq!(angles.y, 0.0);
    for angle in [angles.x, angles.z] {
        // Two rolls of 5..=20 quarter turns each
        let turns = angle / quarter;
        assert!((turns - turns.round()).abs() < 1e-3);
        assert!((10.0..=40.0).contains(&turns.round()));
        assert_eq!(turns.round() as i32 % 5, 0);
    }
}

#[test]
fn same_seed_replays_the_same_rolls() {
    let angles = || {
        let (mut engine, _) = engine_on_table();
        engine.on_tap((400.0, 300.0));
        engine.on_shake_detected();
        engine.runtime_mut().finish_actions();
        let object = engine.registry().iter().next().unwrap();
        engine.runtime().node(object.node).unwrap().euler_angles
    };
    assert_eq!(angles(), angles());
}

#[test]
fn surface_follows_anchor_lifecycle() {
    let (mut engine, table) = engine_on_table();
    let visual = engine.surfaces().visual_node(table).unwrap();
    assert_eq!(engine.runtime().node(visual).unwrap().position, Vector3::zero());

    engine.tracking_mut().refine_plane(PlaneAnchor::horizontal(
        table,
        Matrix4::from_translation(Vector3::new(0.0, 0.0, -1.0)),
        Vector3::new(0.2, 0.0, 0.1),
        Vector3::new(3.0, 0.0, 2.5),
    ));
    assert_eq!(engine.sync_anchors(), 1);
    let node = engine.runtime().node(visual).unwrap();
    assert_eq!(node.position, Vector3::new(0.2, 0.0, 0.1));

    engine.tracking_mut().remove_anchor(table);
    engine.sync_anchors();
    assert!(!engine.runtime().contains(visual));
    assert!(engine.surfaces().is_empty());

    // Dice placed before stay where they are; new taps find nothing
    engine.on_tap((400.0, 300.0));
    assert!(engine.registry().is_empty());
}

#[test]
fn missing_asset_fails_construction() {
    let config = EngineConfig::default().with_obj_template("/nonexistent/art/dice.obj", "Dice");
    let result = DiceEngine::new(config, Scene::new(), SimulatedTracking::new(camera()));
    assert!(matches!(result, Err(DiceError::AssetLoad(_))));
}

#[test]
fn missing_template_node_fails_construction() {
    let path = std::env::temp_dir().join(format!("ardice_scenario_{}.obj", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"o Table\nv 0 0 0\nv 1 0 0\nv 0 0 1\nf 1 2 3\n")
        .unwrap();

    let config = EngineConfig::default().with_obj_template(&path, "Dice");
    let result = DiceEngine::new(config, Scene::new(), SimulatedTracking::new(camera()));
    assert!(matches!(result, Err(DiceError::TemplateNotFound { .. })));
    let _ = std::fs::remove_file(path);
}
