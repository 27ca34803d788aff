/// Positional passes that run between force accumulation and integration:
/// fatigue breaking, self-collision and the world boundary.
pub mod breaking;
pub mod self_collision;
pub mod boundary;
