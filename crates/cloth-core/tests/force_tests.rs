use cloth_core::config::{ClothConfig, PhysicsConfig};
use cloth_core::forces::external::apply_uniform_force;
use cloth_core::forces::gravity::apply_gravity;
use cloth_core::forces::spring::{apply_spring_forces, SpringResponse};
use cloth_core::point::PointSet;
use cloth_core::simulation::ClothSimulation;
use cloth_core::spring::{Spring, SpringKind};
use cloth_core::topology::{build_points, build_springs};
use glam::Vec2;

/// Two free points `distance` apart on the x axis joined by one structural
/// spring of rest length 10.
fn pair(distance: f32) -> (PointSet, Vec<Spring>) {
    let points = PointSet::from_layout(vec![Vec2::new(100.0, 100.0), Vec2::new(100.0 + distance, 100.0)]);
    let springs = vec![Spring::new(0, 1, SpringKind::Structural, 10.0, &PhysicsConfig::default())];
    (points, springs)
}

// ---------------------------------------------------------------------------
// Spring forces
// ---------------------------------------------------------------------------

#[test]
fn test_spring_at_rest_length_is_force_free() {
    for response in [SpringResponse::Linear, SpringResponse::Nonlinear] {
        let (mut points, springs) = pair(10.0);
        apply_spring_forces(&springs, &mut points, response);
        assert_eq!(points.force[0], Vec2::ZERO, "{response:?}");
        assert_eq!(points.force[1], Vec2::ZERO, "{response:?}");
    }
}

#[test]
fn test_grid_at_rest_is_nearly_force_free() {
    let config = ClothConfig::new(5, 5, 10.0);
    let mut points = build_points(&config);
    let springs = build_springs(&config, &PhysicsConfig::default());
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);

    for (i, f) in points.force.iter().enumerate() {
        assert!(f.length() < 1e-1, "point {i} has residual force {f:?}");
    }
}

#[test]
fn test_hooke_spring_pulls_endpoints_together() {
    let (mut points, springs) = pair(12.0);
    apply_spring_forces(&springs, &mut points, SpringResponse::Linear);

    // k * (12 - 10) = 4000
    assert!((points.force[0].x - 4000.0).abs() < 1e-2, "got {:?}", points.force[0]);
    assert!((points.force[1].x + 4000.0).abs() < 1e-2, "got {:?}", points.force[1]);
    assert_eq!(points.force[0] + points.force[1], Vec2::ZERO, "equal and opposite");
}

#[test]
fn test_nonlinear_spring_stiffens_past_linear_region() {
    // stretch 1.5: 0.2 * 1.5 + 0.3 * 2.5 = 1.05, times k * rest / 2.5 = 8000
    let (mut points, springs) = pair(15.0);
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);
    assert!((points.force[0].x - 8400.0).abs() < 1.0, "got {:?}", points.force[0]);

    // stretch 1.1 stays in the linear region: 0.1 * 1.5 * 8000 = 1200
    let (mut points, springs) = pair(11.0);
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);
    assert!((points.force[0].x - 1200.0).abs() < 1.0, "got {:?}", points.force[0]);

    // Past the knee the curve is as steep as Hooke: one more unit adds k = 2000
    let (mut points, springs) = pair(16.0);
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);
    assert!((points.force[0].x - 10400.0).abs() < 1.0, "got {:?}", points.force[0]);
}

#[test]
fn test_compressed_spring_pushes_apart() {
    let (mut points, springs) = pair(8.0);
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);
    assert!(points.force[0].x < 0.0);
    assert!(points.force[1].x > 0.0);
}

#[test]
fn test_axial_damping_resists_separation() {
    let (mut points, springs) = pair(10.0);
    points.velocity[1] = Vec2::new(4.0, 0.0);
    points.velocity[0] = Vec2::new(0.0, 3.0); // perpendicular, ignored
    apply_spring_forces(&springs, &mut points, SpringResponse::Linear);

    // damping 0.5 * relative axial speed 4
    assert!((points.force[0].x - 2.0).abs() < 1e-5, "got {:?}", points.force[0]);
    assert!((points.force[1].x + 2.0).abs() < 1e-5, "got {:?}", points.force[1]);
    assert!(points.force[0].y.abs() < 1e-6);
}

#[test]
fn test_fixed_and_dragged_endpoints_receive_no_spring_force() {
    let (mut points, springs) = pair(14.0);
    points.fixed[0] = true;
    apply_spring_forces(&springs, &mut points, SpringResponse::Linear);
    assert_eq!(points.force[0], Vec2::ZERO);
    assert!(points.force[1].x < 0.0);

    let (mut points, springs) = pair(14.0);
    points.dragged[1] = true;
    apply_spring_forces(&springs, &mut points, SpringResponse::Linear);
    assert_eq!(points.force[1], Vec2::ZERO);
    assert!(points.force[0].x > 0.0);
}

#[test]
fn test_broken_and_degenerate_springs_are_skipped() {
    let (mut points, mut springs) = pair(20.0);
    springs[0].broken = true;
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);
    assert_eq!(points.force[0], Vec2::ZERO);

    let (mut points, springs) = pair(0.0);
    apply_spring_forces(&springs, &mut points, SpringResponse::Nonlinear);
    assert_eq!(points.force[0], Vec2::ZERO);
    assert!(points.force[0].is_finite());
}

// ---------------------------------------------------------------------------
// Gravity and uniform forces
// ---------------------------------------------------------------------------

#[test]
fn test_gravity_only_on_free_points() {
    let mut points = PointSet::from_layout(vec![Vec2::ZERO; 3]);
    points.mass[2] = 2.0;
    points.fixed[0] = true;
    apply_gravity(&mut points, 500.0);

    assert_eq!(points.force[0], Vec2::ZERO);
    assert_eq!(points.force[1], Vec2::new(0.0, 500.0));
    assert_eq!(points.force[2], Vec2::new(0.0, 1000.0));
}

#[test]
fn test_uniform_force_is_additive() {
    let mut points = PointSet::from_layout(vec![Vec2::ZERO; 2]);
    points.dragged[1] = true;
    apply_gravity(&mut points, 10.0);
    apply_uniform_force(&mut points, Vec2::new(3.0, 1.0));
    assert_eq!(points.force[0], Vec2::new(3.0, 11.0));
    assert_eq!(points.force[1], Vec2::ZERO);
}

#[test]
fn test_external_force_lasts_one_step() {
    let mut sim = ClothSimulation::new(ClothConfig::new(1, 1, 10.0)).unwrap();
    sim.physics.gravity = 0.0;
    let damping = sim.physics.velocity_damping;

    sim.apply_external_force(30.0, 0.0);
    sim.apply_external_force(30.0, 0.0);
    assert_eq!(sim.pending_force(), Vec2::new(60.0, 0.0));

    sim.update(1.0 / 60.0, None);
    assert_eq!(sim.pending_force(), Vec2::ZERO);
    let v1 = sim.points().velocity[0].x;
    assert!((v1 - damping).abs() < 1e-5, "one step of 60 units: got {v1}");

    sim.update(1.0 / 60.0, None);
    let v2 = sim.points().velocity[0].x;
    assert!((v2 - damping * damping).abs() < 1e-5, "no force on the second step: got {v2}");
}
