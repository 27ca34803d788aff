//! 2D mass-spring cloth.
//!
//! A rectangular grid of point masses joined by structural and shear
//! springs, stepped with a fixed-capped semi-implicit Euler integrator.
//! Each [`ClothSimulation::update`] runs, in order:
//!
//! 1. force reset, gravity, queued external force
//! 2. spring tension and axial damping (linear or nonlinear)
//! 3. fatigue breaking and self-collision (enhanced variant)
//! 4. boundary response
//! 5. integration, drag override, end-of-step boundary clamp
//! 6. render interpolation
//!
//! Rendering, windowing and controls live outside this crate; they read
//! [`ClothSnapshot`] and call the setters.

pub mod config;
pub mod error;
pub mod point;
pub mod spring;
pub mod topology;
pub mod forces;
pub mod constraints;
pub mod integrator;
pub mod simulation;
pub mod snapshot;
pub mod presets;
pub mod timestep;

pub use config::{ClothConfig, ClothVariant, PhysicsConfig};
pub use error::ClothError;
pub use point::PointSet;
pub use presets::QualityPreset;
pub use simulation::{ClothSimulation, StepStats};
pub use snapshot::{ClothSnapshot, FaceView, PointView, SpringView};
pub use spring::{Face, Spring, SpringKind};
pub use timestep::FixedTimestep;
