use glam::Vec2;

use crate::config::{controls, spacing_for_resolution, ClothConfig, ClothVariant, PhysicsConfig, MAX_RESOLUTION};
use crate::constraints::boundary::{resolve_boundary, Boundary};
use crate::constraints::breaking::update_spring_breaking;
use crate::constraints::self_collision::resolve_self_collisions;
use crate::error::ClothError;
use crate::forces::external::apply_uniform_force;
use crate::forces::gravity::apply_gravity;
use crate::forces::pointer::DragState;
use crate::forces::spring::{apply_spring_forces, SpringResponse};
use crate::integrator::{capture_previous, integrate, interpolate, sync_render, IntegratorParams};
use crate::point::PointSet;
use crate::presets::QualityPreset;
use crate::snapshot::{face_views, point_views, spring_views, ClothSnapshot};
use crate::spring::{Face, Spring};
use crate::topology::{build_faces, build_points, build_springs, index};

/// What happened during one call to [`ClothSimulation::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Springs that broke in this step.
    pub springs_broken: usize,
    /// Point pairs pushed apart by self-collision.
    pub self_collisions: usize,
    /// Wall contacts, counted per axis.
    pub boundary_contacts: usize,
}

/// A mass-spring cloth and everything needed to step it.
///
/// The grid is rebuilt only by [`rebuild_with_resolution`](Self::rebuild_with_resolution)
/// or a preset; [`reset`](Self::reset) restores the initial layout in place.
pub struct ClothSimulation {
    /// Physical constants. The normalized setters write through to these.
    pub physics: PhysicsConfig,
    config: ClothConfig,
    points: PointSet,
    springs: Vec<Spring>,
    faces: Vec<Face>,
    drag: DragState,
    /// External force queued for the next step.
    pending_force: Vec2,
    show_wires: bool,
    stiffness_override: Option<f32>,
    damping_override: Option<f32>,
}

impl ClothSimulation {
    pub fn new(config: ClothConfig) -> Result<Self, ClothError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Square cloth hanging from its top corners, the layout the host starts with.
    pub fn with_resolution(resolution: usize) -> Self {
        Self::from_valid_config(ClothConfig::hanging(resolution))
    }

    fn from_valid_config(config: ClothConfig) -> Self {
        let physics = PhysicsConfig::for_variant(config.variant);
        let mut sim = Self {
            physics,
            points: PointSet::new(0),
            springs: Vec::new(),
            faces: Vec::new(),
            drag: DragState::default(),
            pending_force: Vec2::ZERO,
            show_wires: true,
            stiffness_override: None,
            damping_override: None,
            config,
        };
        sim.build_grid();
        sim
    }

    fn build_grid(&mut self) {
        self.drag.clear();
        self.points = build_points(&self.config);
        self.springs = build_springs(&self.config, &self.physics);
        self.faces = match self.config.variant {
            ClothVariant::Enhanced => build_faces(&self.config),
            ClothVariant::Basic => Vec::new(),
        };

        if self.config.pin_top_corners {
            let last = self.config.width - 1;
            self.fix_point(0, 0);
            self.fix_point(last, 0);
        }
        self.apply_overrides();

        log::debug!(
            "built {}x{} cloth: {} points, {} springs, {} faces",
            self.config.width,
            self.config.height,
            self.points.count,
            self.springs.len(),
            self.faces.len()
        );
    }

    /// Advance by one step of `min(dt, max_timestep)` seconds.
    ///
    /// With `alpha`, render positions are blended between the start and end
    /// of the step; without it they snap to the physics positions. A
    /// non-positive or non-finite `dt` does nothing.
    pub fn update(&mut self, dt: f32, alpha: Option<f32>) -> StepStats {
        let mut stats = StepStats::default();
        if !dt.is_finite() || dt <= 0.0 {
            return stats;
        }
        let dt = dt.min(self.physics.max_timestep);
        let enhanced = self.config.variant == ClothVariant::Enhanced;
        let boundary = self.boundary();

        capture_previous(&mut self.points);

        // Forces
        self.points.clear_forces();
        apply_gravity(&mut self.points, self.physics.gravity);
        apply_uniform_force(&mut self.points, std::mem::take(&mut self.pending_force));
        let response = if enhanced { SpringResponse::Nonlinear } else { SpringResponse::Linear };
        apply_spring_forces(&self.springs, &mut self.points, response);

        // Positional passes
        if enhanced {
            stats.springs_broken = update_spring_breaking(&mut self.springs, &self.points);
            stats.self_collisions = resolve_self_collisions(&mut self.points, self.config.spacing);
        }
        stats.boundary_contacts = resolve_boundary(&mut self.points, &boundary);

        // Integration
        let params = IntegratorParams {
            dt,
            velocity_damping: self.physics.velocity_damping,
            max_velocity: self.physics.max_velocity,
        };
        integrate(&mut self.points, &params);
        self.drag.apply(&mut self.points);
        stats.boundary_contacts += resolve_boundary(&mut self.points, &boundary);

        match alpha {
            Some(alpha) => interpolate(&mut self.points, alpha),
            None => sync_render(&mut self.points),
        }
        stats
    }

    /// Re-blend render positions for a leftover fraction of a step.
    pub fn interpolate(&mut self, alpha: f32) {
        interpolate(&mut self.points, alpha);
    }

    /// Queue a force for every free point, consumed by the next update.
    pub fn apply_external_force(&mut self, fx: f32, fy: f32) {
        let force = Vec2::new(fx, fy);
        if force.is_finite() {
            self.pending_force += force;
        }
    }

    pub fn pending_force(&self) -> Vec2 {
        self.pending_force
    }

    // ---------- pointer ----------

    /// Grab the nearest point within the pick radius. Returns its index.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> Option<usize> {
        self.drag.begin(&mut self.points, Vec2::new(x, y), self.physics.pick_radius)
    }

    pub fn update_drag(&mut self, x: f32, y: f32) {
        self.drag.update(Vec2::new(x, y));
    }

    pub fn end_drag(&mut self) {
        self.drag.end(&mut self.points);
    }

    pub fn dragged_point(&self) -> Option<usize> {
        self.drag.index
    }

    // ---------- structure ----------

    /// Pin grid coordinate (`col`, `row`). Out-of-range coordinates are ignored.
    pub fn fix_point(&mut self, col: usize, row: usize) -> bool {
        match self.point_index(col, row) {
            Some(i) => {
                self.points.fixed[i] = true;
                self.points.velocity[i] = Vec2::ZERO;
                true
            }
            None => false,
        }
    }

    pub fn point_index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.config.width && row < self.config.height).then(|| index(self.config.width, col, row))
    }

    /// Initial layout at rest, every spring whole again. Topology, anchors
    /// and parameters are kept; an active drag is released. Springs that
    /// were broken when a control moved pick up its current value.
    pub fn reset(&mut self) {
        self.drag.clear();
        self.points.reset();
        for spring in &mut self.springs {
            spring.reset_stress();
        }
        self.apply_overrides();
        self.pending_force = Vec2::ZERO;
        log::debug!("cloth reset to initial layout");
    }

    /// Throw the grid away and build a square one at `resolution`
    /// (clamped to 1..=40) spanning the same area.
    pub fn rebuild_with_resolution(&mut self, resolution: usize) {
        let resolution = resolution.clamp(1, MAX_RESOLUTION);
        self.config.width = resolution;
        self.config.height = resolution;
        self.config.spacing = spacing_for_resolution(resolution);
        self.pending_force = Vec2::ZERO;
        self.build_grid();
    }

    pub fn apply_preset(&mut self, preset: &QualityPreset) {
        preset.apply_to(self);
    }

    // ---------- parameters ----------

    /// Normalized [0, 1] gravity control.
    pub fn set_gravity(&mut self, value: f32) {
        self.physics.gravity = controls::gravity(value);
    }

    /// Normalized [0, 1] stiffness, applied to every live spring regardless of kind.
    pub fn set_stiffness(&mut self, value: f32) {
        let stiffness = controls::stiffness(value);
        self.stiffness_override = Some(stiffness);
        self.set_live_stiffness(stiffness);
    }

    /// Normalized [0, 1] spring damping, applied to every live spring.
    pub fn set_damping(&mut self, value: f32) {
        let damping = controls::damping(value);
        self.damping_override = Some(damping);
        self.set_live_damping(damping);
    }

    /// Break threshold of structural springs; shear springs keep their
    /// default proportion to it. Non-positive ratios are ignored.
    pub fn set_max_stretch(&mut self, ratio: f32) {
        if !ratio.is_finite() || ratio <= 0.0 {
            return;
        }
        let defaults = PhysicsConfig::for_variant(self.config.variant);
        self.physics.structural_break_threshold = ratio;
        self.physics.shear_break_threshold =
            ratio * defaults.shear_break_threshold / defaults.structural_break_threshold;
        for spring in &mut self.springs {
            spring.break_threshold = spring.kind.break_threshold(&self.physics);
        }
    }

    fn apply_overrides(&mut self) {
        if let Some(stiffness) = self.stiffness_override {
            self.set_live_stiffness(stiffness);
        }
        if let Some(damping) = self.damping_override {
            self.set_live_damping(damping);
        }
    }

    fn set_live_stiffness(&mut self, stiffness: f32) {
        for spring in self.springs.iter_mut().filter(|s| !s.broken) {
            spring.stiffness = stiffness;
        }
    }

    fn set_live_damping(&mut self, damping: f32) {
        for spring in self.springs.iter_mut().filter(|s| !s.broken) {
            spring.damping = damping;
        }
    }

    pub fn set_wire_visibility(&mut self, visible: bool) {
        self.show_wires = visible;
    }

    pub fn wire_visibility(&self) -> bool {
        self.show_wires
    }

    // ---------- queries ----------

    pub fn boundary(&self) -> Boundary {
        Boundary::inset(
            self.config.bounds,
            self.physics.boundary_margin,
            self.physics.restitution,
            self.physics.wall_friction,
        )
    }

    pub fn snapshot(&self) -> ClothSnapshot {
        ClothSnapshot {
            points: point_views(&self.points),
            springs: spring_views(&self.springs, &self.points),
            faces: face_views(&self.faces, &self.points),
            show_wires: self.show_wires,
        }
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn spacing(&self) -> f32 {
        self.config.spacing
    }

    pub fn variant(&self) -> ClothVariant {
        self.config.variant
    }

    pub fn broken_spring_count(&self) -> usize {
        self.springs.iter().filter(|s| s.broken).count()
    }
}
