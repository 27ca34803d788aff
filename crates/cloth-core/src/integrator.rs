use crate::point::PointSet;

/// Knobs of the semi-implicit Euler step.
#[derive(Clone, Copy, Debug)]
pub struct IntegratorParams {
    pub dt: f32,
    pub velocity_damping: f32,
    pub max_velocity: f32,
}

/// Semi-implicit Euler over free points: velocity first (damped and
/// speed-capped), then position from the new velocity.
///
/// Consumes the force accumulator but does not clear it; the next step
/// does that before adding new forces.
pub fn integrate(points: &mut PointSet, params: &IntegratorParams) {
    for i in 0..points.count {
        if !points.is_free(i) {
            continue;
        }
        let acceleration = points.force[i] * points.inv_mass(i);
        let velocity = (points.velocity[i] + acceleration * params.dt) * params.velocity_damping;
        let velocity = velocity.clamp_length_max(params.max_velocity);

        points.velocity[i] = velocity;
        points.position[i] += velocity * params.dt;
    }
}

/// Remember where every point starts this step.
pub fn capture_previous(points: &mut PointSet) {
    points.prev_position.copy_from_slice(&points.position);
}

/// Blend render positions between the previous and current step.
///
/// Only the display cache is written; `alpha` is clamped to [0, 1].
pub fn interpolate(points: &mut PointSet, alpha: f32) {
    let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    for i in 0..points.count {
        points.render_position[i] = points.prev_position[i] * (1.0 - alpha) + points.position[i] * alpha;
    }
}

/// Render positions equal physics positions.
pub fn sync_render(points: &mut PointSet) {
    points.render_position.copy_from_slice(&points.position);
}
