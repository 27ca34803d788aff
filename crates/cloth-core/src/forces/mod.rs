/// Per-step force accumulation and pointer interaction.
///
/// Every force here writes into `PointSet::force` and skips fixed and
/// dragged points; integration consumes the accumulator once per step.
pub mod gravity;
pub mod spring;
pub mod external;
pub mod wind;
pub mod pointer;
