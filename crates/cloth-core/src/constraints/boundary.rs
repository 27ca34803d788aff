use glam::Vec2;

use crate::point::PointSet;

/// Rectangular wall response shared by every side of the world.
#[derive(Clone, Copy, Debug)]
pub struct Boundary {
    pub min: Vec2,
    pub max: Vec2,
    /// Fraction of the normal velocity kept (and reversed) on impact.
    pub restitution: f32,
    /// Tangential velocity multiplier on impact.
    pub friction: f32,
}

impl Boundary {
    /// World of size `bounds` shrunk by `margin` on every side.
    pub fn inset(bounds: Vec2, margin: f32, restitution: f32, friction: f32) -> Self {
        let min = Vec2::splat(margin);
        let max = (bounds - Vec2::splat(margin)).max(min);
        Self { min, max, restitution, friction }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Clamp free points into the boundary, reflecting the normal velocity and
/// damping the tangential one. Each axis is handled independently, so a
/// corner hit responds on both. Returns the number of wall contacts.
pub fn resolve_boundary(points: &mut PointSet, boundary: &Boundary) -> usize {
    let mut contacts = 0;
    for i in 0..points.count {
        if !points.is_free(i) {
            continue;
        }
        let mut p = points.position[i];
        let mut v = points.velocity[i];

        if p.y > boundary.max.y || p.y < boundary.min.y {
            p.y = p.y.clamp(boundary.min.y, boundary.max.y);
            v.y = -v.y * boundary.restitution;
            v.x *= boundary.friction;
            contacts += 1;
        }
        if p.x > boundary.max.x || p.x < boundary.min.x {
            p.x = p.x.clamp(boundary.min.x, boundary.max.x);
            v.x = -v.x * boundary.restitution;
            v.y *= boundary.friction;
            contacts += 1;
        }

        points.position[i] = p;
        points.velocity[i] = v;
    }
    contacts
}
