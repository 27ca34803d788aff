use glam::Vec2;

/// Smallest mass a point may carry; keeps `force / mass` finite.
pub const MIN_MASS: f32 = 1e-4;

/// SoA point-mass storage, indexed row-major over the cloth grid.
pub struct PointSet {
    pub count: usize,
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    /// Force accumulator, zeroed at the start of every step.
    pub force: Vec<Vec2>,
    pub mass: Vec<f32>,
    /// Anchored points never move.
    pub fixed: Vec<bool>,
    /// Position driven by the pointer instead of physics.
    pub dragged: Vec<bool>,
    /// Construction layout, restored by a reset.
    pub rest_position: Vec<Vec2>,
    /// Position at the start of the last step (render interpolation).
    pub prev_position: Vec<Vec2>,
    /// Display position; physics never reads it.
    pub render_position: Vec<Vec2>,
}

impl PointSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            velocity: vec![Vec2::ZERO; count],
            force: vec![Vec2::ZERO; count],
            mass: vec![1.0; count],
            fixed: vec![false; count],
            dragged: vec![false; count],
            rest_position: vec![Vec2::ZERO; count],
            prev_position: vec![Vec2::ZERO; count],
            render_position: vec![Vec2::ZERO; count],
        }
    }

    /// Place every point at `layout` and treat it as the rest layout.
    pub fn from_layout(layout: Vec<Vec2>) -> Self {
        let mut points = Self::new(layout.len());
        points.position.copy_from_slice(&layout);
        points.prev_position.copy_from_slice(&layout);
        points.render_position.copy_from_slice(&layout);
        points.rest_position = layout;
        points
    }

    /// Neither fixed nor dragged: forces, collisions and integration apply.
    #[inline]
    pub fn is_free(&self, i: usize) -> bool {
        !self.fixed[i] && !self.dragged[i]
    }

    #[inline]
    pub fn inv_mass(&self, i: usize) -> f32 {
        1.0 / self.mass[i].max(MIN_MASS)
    }

    pub fn clear_forces(&mut self) {
        self.force.fill(Vec2::ZERO);
    }

    /// Back to the construction layout at rest. Fixed flags survive.
    pub fn reset(&mut self) {
        self.position.copy_from_slice(&self.rest_position);
        self.prev_position.copy_from_slice(&self.rest_position);
        self.render_position.copy_from_slice(&self.rest_position);
        self.velocity.fill(Vec2::ZERO);
        self.force.fill(Vec2::ZERO);
        self.dragged.fill(false);
    }

    /// Index of the point closest to `target` strictly within `radius`.
    pub fn nearest_within(&self, target: Vec2, radius: f32) -> Option<usize> {
        let mut best = None;
        let mut best_dist = radius;
        for (i, p) in self.position.iter().enumerate() {
            let dist = p.distance(target);
            if dist < best_dist {
                best_dist = dist;
                best = Some(i);
            }
        }
        best
    }

    /// Physics positions as a flat `[x0, y0, x1, y1, ...]` slice.
    pub fn positions_as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }

    /// Display positions as a flat `[x0, y0, x1, y1, ...]` slice.
    pub fn render_positions_as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.render_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_within_is_strict() {
        let points = PointSet::from_layout(vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]);
        assert_eq!(points.nearest_within(Vec2::new(10.0, 0.0), 10.0), Some(1));
        assert_eq!(points.nearest_within(Vec2::new(3.0, 0.0), 10.0), Some(0));
        assert_eq!(points.nearest_within(Vec2::new(5.0, 10.0), 10.0), None);
    }

    #[test]
    fn test_flat_views_interleave_xy() {
        let points = PointSet::from_layout(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(points.positions_as_floats(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(points.render_positions_as_floats(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_inv_mass_guards_zero_mass() {
        let mut points = PointSet::new(1);
        points.mass[0] = 0.0;
        assert!(points.inv_mass(0).is_finite());
    }
}
