use crate::config::PhysicsConfig;
use crate::point::PointSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Consecutive over-stressed steps a spring survives before it can break.
pub const STRESS_FRAME_LIMIT: u32 = 30;
/// Fraction of the break threshold that counts as "under stress".
pub const STRESS_RATIO: f32 = 0.8;
/// Springs shorter than this produce no force.
pub const MIN_SPRING_LENGTH: f32 = 1e-4;

/// Structural springs run along grid rows and columns, shear springs
/// across cell diagonals.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpringKind {
    Structural,
    Shear,
}

impl SpringKind {
    pub fn default_stiffness(self, physics: &PhysicsConfig) -> f32 {
        match self {
            SpringKind::Structural => physics.structural_stiffness,
            SpringKind::Shear => physics.shear_stiffness,
        }
    }

    pub fn break_threshold(self, physics: &PhysicsConfig) -> f32 {
        match self {
            SpringKind::Structural => physics.structural_break_threshold,
            SpringKind::Shear => physics.shear_break_threshold,
        }
    }
}

/// Damped spring between two point indices.
#[derive(Clone, Debug)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub kind: SpringKind,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Once set, only a full reset clears it.
    pub broken: bool,
    /// Stretch ratio (length / rest length) that breaks a fatigued spring.
    pub break_threshold: f32,
    /// Running count of over-stressed steps.
    pub stress_frames: u32,
}

impl Spring {
    pub fn new(a: usize, b: usize, kind: SpringKind, rest_length: f32, physics: &PhysicsConfig) -> Self {
        Self {
            a,
            b,
            kind,
            rest_length,
            stiffness: kind.default_stiffness(physics),
            damping: physics.spring_damping,
            broken: false,
            break_threshold: kind.break_threshold(physics),
            stress_frames: 0,
        }
    }

    /// Current length over rest length. Zero for a degenerate rest length.
    pub fn stretch(&self, points: &PointSet) -> f32 {
        if self.rest_length <= 0.0 {
            return 0.0;
        }
        points.position[self.a].distance(points.position[self.b]) / self.rest_length
    }

    /// Count up while over 80% of the threshold, recover twice as fast otherwise.
    pub fn record_stress(&mut self, stretch: f32) {
        if stretch > STRESS_RATIO * self.break_threshold {
            self.stress_frames = self.stress_frames.saturating_add(1);
        } else {
            self.stress_frames = self.stress_frames.saturating_sub(2);
        }
    }

    pub fn should_break(&self, stretch: f32) -> bool {
        stretch > self.break_threshold && self.stress_frames >= STRESS_FRAME_LIMIT
    }

    pub fn reset_stress(&mut self) {
        self.broken = false;
        self.stress_frames = 0;
    }
}

/// Shading triangle over three point indices. Carries no physical state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Face {
    pub indices: [usize; 3],
}
