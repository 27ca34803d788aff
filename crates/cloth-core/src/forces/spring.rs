use crate::point::PointSet;
use crate::spring::{Spring, MIN_SPRING_LENGTH};

/// Stretch ratio where the nonlinear response leaves its linear region.
pub const LINEAR_LIMIT: f32 = 1.2;
/// Slope of the response up to [`LINEAR_LIMIT`].
pub const LINEAR_SLOPE: f32 = 1.5;
/// Slope past [`LINEAR_LIMIT`]; fabric stiffens once the weave is taut.
pub const STIFF_SLOPE: f32 = 2.5;

/// How spring tension depends on stretch.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpringResponse {
    /// Hooke's law: `k * (length - rest)`.
    Linear,
    /// Piecewise-linear in stretch, steeper past [`LINEAR_LIMIT`].
    Nonlinear,
}

/// Dimensionless tension for a given stretch ratio.
pub fn nonlinear_response(stretch: f32) -> f32 {
    if stretch <= LINEAR_LIMIT {
        (stretch - 1.0) * LINEAR_SLOPE
    } else {
        (LINEAR_LIMIT - 1.0) * LINEAR_SLOPE + (stretch - LINEAR_LIMIT) * STIFF_SLOPE
    }
}

/// Tension along the spring axis, positive when stretched.
///
/// The nonlinear curve is scaled so its steep part has slope `stiffness`
/// per unit length, the same as a Hooke spring. The linear part is softer.
/// No spring is ever stiffer than its Hooke counterpart, so both variants
/// share one stability limit at the capped timestep.
pub fn spring_tension(spring: &Spring, length: f32, response: SpringResponse) -> f32 {
    match response {
        SpringResponse::Linear => spring.stiffness * (length - spring.rest_length),
        SpringResponse::Nonlinear => {
            let stretch = length / spring.rest_length;
            spring.stiffness * spring.rest_length * nonlinear_response(stretch) / STIFF_SLOPE
        }
    }
}

/// Accumulate tension plus axial damping of every live spring.
///
/// Endpoint `a` is pulled toward `b` and `b` toward `a` with equal and
/// opposite force; fixed and dragged endpoints receive nothing.
pub fn apply_spring_forces(springs: &[Spring], points: &mut PointSet, response: SpringResponse) {
    for spring in springs.iter().filter(|s| !s.broken) {
        let (a, b) = (spring.a, spring.b);

        let delta = points.position[b] - points.position[a];
        let length = delta.length();
        if length < MIN_SPRING_LENGTH || spring.rest_length <= 0.0 {
            continue;
        }
        let axis = delta / length;

        let tension = spring_tension(spring, length, response);
        let relative_velocity = points.velocity[b] - points.velocity[a];
        let damping = spring.damping * relative_velocity.dot(axis);

        let force = axis * (tension + damping);

        if points.is_free(a) {
            points.force[a] += force;
        }
        if points.is_free(b) {
            points.force[b] -= force;
        }
    }
}
