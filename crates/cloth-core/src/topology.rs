//! Grid construction: row-major points, springs over every cell, and
//! two shading triangles per cell.

use glam::Vec2;

use crate::config::{ClothConfig, PhysicsConfig};
use crate::point::PointSet;
use crate::spring::{Face, Spring, SpringKind};

#[inline]
pub fn index(width: usize, col: usize, row: usize) -> usize {
    row * width + col
}

/// Expected spring count for a `width` x `height` grid.
pub fn spring_count(width: usize, height: usize) -> usize {
    let w = width.saturating_sub(1);
    let h = height.saturating_sub(1);
    w * height + width * h + 2 * w * h
}

pub fn build_points(config: &ClothConfig) -> PointSet {
    let mut layout = Vec::with_capacity(config.point_count());
    for row in 0..config.height {
        for col in 0..config.width {
            layout.push(Vec2::new(
                col as f32 * config.spacing + config.origin.x,
                row as f32 * config.spacing + config.origin.y,
            ));
        }
    }
    PointSet::from_layout(layout)
}

/// Per cell, in order: horizontal, vertical, then both diagonals.
pub fn build_springs(config: &ClothConfig, physics: &PhysicsConfig) -> Vec<Spring> {
    let (width, height, spacing) = (config.width, config.height, config.spacing);
    let diagonal = spacing * std::f32::consts::SQRT_2;
    let mut springs = Vec::with_capacity(spring_count(width, height));

    for row in 0..height {
        for col in 0..width {
            let current = index(width, col, row);

            if col + 1 < width {
                springs.push(Spring::new(current, current + 1, SpringKind::Structural, spacing, physics));
            }
            if row + 1 < height {
                springs.push(Spring::new(current, current + width, SpringKind::Structural, spacing, physics));
            }
            if col + 1 < width && row + 1 < height {
                springs.push(Spring::new(current, current + width + 1, SpringKind::Shear, diagonal, physics));
                springs.push(Spring::new(current + 1, current + width, SpringKind::Shear, diagonal, physics));
            }
        }
    }

    springs
}

pub fn build_faces(config: &ClothConfig) -> Vec<Face> {
    let width = config.width;
    let cells = width.saturating_sub(1) * config.height.saturating_sub(1);
    let mut faces = Vec::with_capacity(cells * 2);

    for row in 0..config.height.saturating_sub(1) {
        for col in 0..width.saturating_sub(1) {
            let top_left = index(width, col, row);
            let top_right = top_left + 1;
            let bottom_left = top_left + width;
            let bottom_right = bottom_left + 1;
            faces.push(Face { indices: [top_left, top_right, bottom_left] });
            faces.push(Face { indices: [top_right, bottom_right, bottom_left] });
        }
    }

    faces
}
