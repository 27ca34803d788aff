use cloth_core::config::ClothConfig;
use cloth_core::simulation::ClothSimulation;

const DT: f32 = 1.0 / 60.0;

#[test]
fn test_snapshot_mirrors_cloth_state() {
    let mut sim = ClothSimulation::with_resolution(6);
    sim.set_wire_visibility(false);
    let snap = sim.snapshot();

    assert_eq!(snap.points.len(), 36);
    assert_eq!(snap.springs.len(), sim.springs().len());
    assert_eq!(snap.faces.len(), sim.faces().len());
    assert!(!snap.show_wires);

    assert!(snap.points[0].fixed && snap.points[5].fixed);
    assert!(snap.points.iter().all(|p| !p.dragged));
    for (view, spring) in snap.springs.iter().zip(sim.springs()) {
        assert_eq!((view.a, view.b), (spring.a, spring.b));
        assert!(!view.broken);
        assert!((view.stretch - 1.0).abs() < 1e-4, "rest layout is unstretched");
    }
    for face in &snap.faces {
        assert!((face.mean_stretch - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_snapshot_reports_stretch_under_drag() {
    let mut sim = ClothSimulation::new(ClothConfig::new(2, 2, 10.0)).unwrap();
    sim.fix_point(0, 0);
    assert_eq!(sim.begin_drag(110.0, 110.0), Some(3));
    sim.update_drag(130.0, 110.0);
    sim.update(DT, None);

    let snap = sim.snapshot();
    assert!(snap.points[3].dragged);
    assert_eq!(snap.points[3].position, glam::Vec2::new(130.0, 110.0));
    let stretched = snap.springs.iter().find(|s| (s.a, s.b) == (1, 3)).expect("vertical spring");
    assert!(stretched.stretch > 1.0);
    assert!(snap.faces.iter().any(|f| f.mean_stretch > 1.0));
}

#[test]
fn test_stretch_views_follow_displayed_geometry() {
    let mut sim = ClothSimulation::new(ClothConfig::new(2, 2, 10.0)).unwrap();
    sim.fix_point(0, 0);
    assert_eq!(sim.begin_drag(110.0, 110.0), Some(3));
    sim.update_drag(130.0, 110.0);
    // alpha 0 shows the cloth as it was at the start of the step
    sim.update(DT, Some(0.0));

    let snap = sim.snapshot();
    let render = &sim.points().render_position;
    for (view, spring) in snap.springs.iter().zip(sim.springs()) {
        let drawn = render[view.a].distance(render[view.b]) / spring.rest_length;
        assert!((view.stretch - drawn).abs() < 1e-5, "spring {}-{}", view.a, view.b);
    }

    let vertical = sim.springs().iter().position(|s| (s.a, s.b) == (1, 3)).expect("vertical spring");
    assert!(sim.springs()[vertical].stretch(sim.points()) > 1.5, "physics has moved on");
    assert!((snap.springs[vertical].stretch - 1.0).abs() < 1e-4, "colour matches the drawn segment");
    for face in &snap.faces {
        assert!((face.mean_stretch - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_flat_position_views() {
    let sim = ClothSimulation::with_resolution(4);
    let flat = sim.points().positions_as_floats();
    assert_eq!(flat.len(), 2 * sim.points().count);
    assert_eq!(flat[2], sim.points().position[1].x);
    assert_eq!(flat[3], sim.points().position[1].y);
    assert_eq!(sim.points().render_positions_as_floats(), flat);
}
