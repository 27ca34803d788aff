use crate::point::PointSet;

/// Closest two points may get, as a fraction of the grid spacing.
pub const MIN_DISTANCE_RATIO: f32 = 0.5;
/// Coincident points have no separation axis and are left alone.
pub const DEGENERATE_DISTANCE: f32 = 1e-6;

/// Push apart every pair of points closer than half the grid spacing.
///
/// All unordered pairs are tested; only pairs inside `spacing` are
/// measured exactly. Each free point of a violating pair moves half the
/// overlap along the separation axis. Positions change directly, velocities
/// are untouched. Returns the number of corrected pairs.
pub fn resolve_self_collisions(points: &mut PointSet, spacing: f32) -> usize {
    let min_distance = spacing * MIN_DISTANCE_RATIO;
    let contact_sq = spacing * spacing;
    let mut corrected = 0;

    for i in 0..points.count {
        for j in (i + 1)..points.count {
            let free_i = points.is_free(i);
            let free_j = points.is_free(j);
            if !free_i && !free_j {
                continue;
            }

            let delta = points.position[j] - points.position[i];
            let dist_sq = delta.length_squared();
            if dist_sq >= contact_sq {
                continue;
            }

            let dist = dist_sq.sqrt();
            if dist >= min_distance || dist <= DEGENERATE_DISTANCE {
                continue;
            }

            let correction = delta / dist * ((min_distance - dist) * 0.5);
            if free_i {
                points.position[i] -= correction;
            }
            if free_j {
                points.position[j] += correction;
            }
            corrected += 1;
        }
    }

    corrected
}
