use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ClothError;

/// Span of the default 20x20 hanging cloth (19 cells of 20 units).
pub const HANGING_SPAN: f32 = 380.0;
/// Largest square resolution accepted by a rebuild. Self-collision is O(n^2).
pub const MAX_RESOLUTION: usize = 40;

/// Which feature set the simulation runs with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClothVariant {
    /// Hooke springs only. No breaking, no self-collision, no faces.
    Basic,
    /// Nonlinear springs, fatigue breaking, self-collision and shading faces.
    #[default]
    Enhanced,
}

/// Grid layout of the cloth. Changing any of these requires a rebuild.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConfig {
    pub width: usize,
    pub height: usize,
    pub spacing: f32,
    /// Position of grid coordinate (0, 0).
    pub origin: Vec2,
    /// Size of the rectangular world the cloth lives in.
    pub bounds: Vec2,
    pub variant: ClothVariant,
    /// Fix the two top corners right after the grid is built.
    pub pin_top_corners: bool,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            spacing: 20.0,
            origin: Vec2::new(100.0, 100.0),
            bounds: Vec2::new(800.0, 600.0),
            variant: ClothVariant::Enhanced,
            pin_top_corners: false,
        }
    }
}

impl ClothConfig {
    pub fn new(width: usize, height: usize, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
            ..Self::default()
        }
    }

    /// Square cloth hanging from its top corners, spanning the same area
    /// regardless of resolution.
    pub fn hanging(resolution: usize) -> Self {
        let resolution = resolution.clamp(1, MAX_RESOLUTION);
        Self {
            width: resolution,
            height: resolution,
            spacing: spacing_for_resolution(resolution),
            pin_top_corners: true,
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: ClothVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn point_count(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width == 0 || self.height == 0 {
            return Err(ClothError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ClothError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

/// Grid spacing that keeps a `resolution` x `resolution` cloth at [`HANGING_SPAN`].
pub fn spacing_for_resolution(resolution: usize) -> f32 {
    if resolution > 1 {
        HANGING_SPAN / (resolution - 1) as f32
    } else {
        HANGING_SPAN
    }
}

/// Physical constants of the integrator and the spring network.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicsConfig {
    /// Downward acceleration (screen space, +y is down).
    pub gravity: f32,
    pub structural_stiffness: f32,
    pub shear_stiffness: f32,
    pub spring_damping: f32,
    /// Stretch ratio above which sustained stress breaks a structural spring.
    pub structural_break_threshold: f32,
    pub shear_break_threshold: f32,
    /// Per-step velocity multiplier.
    pub velocity_damping: f32,
    pub max_velocity: f32,
    pub restitution: f32,
    /// Tangential velocity multiplier applied on wall contact.
    pub wall_friction: f32,
    pub boundary_margin: f32,
    pub max_timestep: f32,
    pub pick_radius: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::for_variant(ClothVariant::Enhanced)
    }
}

impl PhysicsConfig {
    pub fn for_variant(variant: ClothVariant) -> Self {
        let velocity_damping = match variant {
            ClothVariant::Basic => 0.95,
            ClothVariant::Enhanced => 0.85,
        };
        Self {
            gravity: 500.0,
            structural_stiffness: 2000.0,
            shear_stiffness: 1000.0,
            spring_damping: 0.5,
            structural_break_threshold: 30.5,
            shear_break_threshold: 20.8,
            velocity_damping,
            max_velocity: 1000.0,
            restitution: 0.3,
            wall_friction: 0.8,
            boundary_margin: 20.0,
            max_timestep: 1.0 / 60.0,
            pick_radius: 10.0,
        }
    }
}

/// Maps normalized [0, 1] control values onto physical units.
///
/// Gravity and damping reproduce the built-in defaults at the midpoint.
/// Stiffness is written to every spring regardless of kind, so its top end
/// matches the stiffest default network (structural 2000 plus shear 1000
/// around each point) and stays inside the explicit Euler limit at 1/60 s.
pub mod controls {
    pub const GRAVITY_SCALE: f32 = 1000.0;
    pub const STIFFNESS_SCALE: f32 = 1500.0;
    pub const DAMPING_SCALE: f32 = 1.0;

    #[inline]
    fn unit(value: f32) -> f32 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }

    pub fn gravity(value: f32) -> f32 {
        unit(value) * GRAVITY_SCALE
    }

    pub fn stiffness(value: f32) -> f32 {
        unit(value) * STIFFNESS_SCALE
    }

    pub fn damping(value: f32) -> f32 {
        unit(value) * DAMPING_SCALE
    }
}
