use crate::simulation::ClothSimulation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quality preset bundling resolution with the normalized control values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualityPreset {
    pub resolution: usize,
    /// Normalized [0, 1] gravity control.
    pub gravity: f32,
    /// Normalized [0, 1] stiffness control.
    pub stiffness: f32,
    /// Normalized [0, 1] damping control.
    pub damping: f32,
    pub show_wires: bool,
}

impl QualityPreset {
    /// Dense, stiff cloth with wires drawn.
    pub const HIGH: Self = Self {
        resolution: 30,
        gravity: 0.7,
        stiffness: 0.8,
        damping: 0.6,
        show_wires: true,
    };

    /// The startup configuration.
    pub const MEDIUM: Self = Self {
        resolution: 20,
        gravity: 0.5,
        stiffness: 0.5,
        damping: 0.5,
        show_wires: true,
    };

    /// Coarse, soft cloth without wires.
    pub const LOW: Self = Self {
        resolution: 15,
        gravity: 0.3,
        stiffness: 0.3,
        damping: 0.4,
        show_wires: false,
    };

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "high" => Some(Self::HIGH),
            "medium" => Some(Self::MEDIUM),
            "low" => Some(Self::LOW),
            _ => None,
        }
    }

    /// Rebuild the cloth at this resolution, then apply the controls to the
    /// fresh springs.
    pub fn apply_to(&self, sim: &mut ClothSimulation) {
        log::info!(
            "applying quality preset: {}x{} gravity={} stiffness={} damping={}",
            self.resolution,
            self.resolution,
            self.gravity,
            self.stiffness,
            self.damping
        );
        sim.rebuild_with_resolution(self.resolution);
        sim.set_gravity(self.gravity);
        sim.set_stiffness(self.stiffness);
        sim.set_damping(self.damping);
        sim.set_wire_visibility(self.show_wires);
    }
}
