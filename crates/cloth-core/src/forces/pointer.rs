use glam::Vec2;

use crate::point::PointSet;

/// Pointer drag of at most one point.
///
/// While a drag is active the selected point is flagged `dragged`, ignored
/// by every force and collision pass, and pinned to the pointer at the end
/// of each step.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    pub index: Option<usize>,
    pub target: Vec2,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Grab the nearest point strictly within `radius` of `at`.
    ///
    /// On a hit any previous drag is released and the new point taken.
    /// On a miss nothing changes and `None` is returned.
    pub fn begin(&mut self, points: &mut PointSet, at: Vec2, radius: f32) -> Option<usize> {
        let index = points.nearest_within(at, radius)?;
        self.end(points);
        points.dragged[index] = true;
        self.index = Some(index);
        self.target = at;
        Some(index)
    }

    pub fn update(&mut self, at: Vec2) {
        if self.is_active() {
            self.target = at;
        }
    }

    pub fn end(&mut self, points: &mut PointSet) {
        if let Some(index) = self.index.take() {
            if index < points.count {
                points.dragged[index] = false;
            }
        }
    }

    /// Snap the dragged point onto the pointer and stop it.
    pub fn apply(&self, points: &mut PointSet) {
        if let Some(index) = self.index {
            points.position[index] = self.target;
            points.velocity[index] = Vec2::ZERO;
        }
    }

    /// Forget the drag without touching any point (the grid was replaced).
    pub fn clear(&mut self) {
        self.index = None;
    }
}
