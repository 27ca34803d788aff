use glam::Vec2;

use crate::point::PointSet;

/// Add the same force to every free point, on top of whatever this step
/// has accumulated so far.
pub fn apply_uniform_force(points: &mut PointSet, force: Vec2) {
    if force == Vec2::ZERO {
        return;
    }
    for i in 0..points.count {
        if points.is_free(i) {
            points.force[i] += force;
        }
    }
}
