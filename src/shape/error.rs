use thiserror::Error;

/// Errors a shape can report while measuring itself
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("invalid dimension: width and height must be positive (got {width} x {height})")]
    InvalidDimension { width: f64, height: f64 },
}
