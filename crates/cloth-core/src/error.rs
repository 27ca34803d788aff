use thiserror::Error;

/// Errors raised while building a cloth. Stepping never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    #[error("cloth grid must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("grid spacing must be finite and positive, got {0}")]
    InvalidSpacing(f32),
}
