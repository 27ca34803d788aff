//! Read-only views handed to renderers. Nothing here mutates the cloth.

use glam::Vec2;

use crate::point::PointSet;
use crate::spring::{Face, Spring};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointView {
    /// Display (interpolated) position.
    pub position: Vec2,
    pub fixed: bool,
    pub dragged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringView {
    pub a: usize,
    pub b: usize,
    pub broken: bool,
    /// Displayed length over rest length.
    pub stretch: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceView {
    pub indices: [usize; 3],
    /// Mean stretch of the triangle's three edges, for stress shading.
    pub mean_stretch: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ClothSnapshot {
    pub points: Vec<PointView>,
    pub springs: Vec<SpringView>,
    pub faces: Vec<FaceView>,
    pub show_wires: bool,
}

pub fn point_views(points: &PointSet) -> Vec<PointView> {
    (0..points.count)
        .map(|i| PointView {
            position: points.render_position[i],
            fixed: points.fixed[i],
            dragged: points.dragged[i],
        })
        .collect()
}

pub fn spring_views(springs: &[Spring], points: &PointSet) -> Vec<SpringView> {
    springs
        .iter()
        .map(|s| SpringView {
            a: s.a,
            b: s.b,
            broken: s.broken,
            stretch: render_stretch(points, s.a, s.b, s.rest_length),
        })
        .collect()
}

pub fn face_views(faces: &[Face], points: &PointSet) -> Vec<FaceView> {
    faces
        .iter()
        .map(|face| {
            let [i, j, k] = face.indices;
            let mean_stretch =
                (edge_stretch(points, i, j) + edge_stretch(points, j, k) + edge_stretch(points, k, i)) / 3.0;
            FaceView { indices: face.indices, mean_stretch }
        })
        .collect()
}

fn edge_stretch(points: &PointSet, i: usize, j: usize) -> f32 {
    let rest = points.rest_position[i].distance(points.rest_position[j]);
    if rest <= 0.0 {
        return 1.0;
    }
    render_stretch(points, i, j, rest)
}

/// Stretch of the segment as drawn, so colour and geometry agree when
/// render positions are interpolated.
fn render_stretch(points: &PointSet, i: usize, j: usize, rest_length: f32) -> f32 {
    if rest_length <= 0.0 {
        return 0.0;
    }
    points.render_position[i].distance(points.render_position[j]) / rest_length
}
