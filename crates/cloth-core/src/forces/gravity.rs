use crate::point::PointSet;

/// Add `gravity * mass` downward (+y) to every free point.
pub fn apply_gravity(points: &mut PointSet, gravity: f32) {
    for i in 0..points.count {
        if points.is_free(i) {
            points.force[i].y += gravity * points.mass[i];
        }
    }
}
