use crate::grid::Point;
use thiserror::Error;

/// Errors reported by grid generation and frame rendering. All of them are
/// raised synchronously, and a failing call never leaves partial output
/// behind.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// Rejected generation parameters: zero dimensions or an obstacle
    /// probability outside `[0, 1]`. Parameters are never clamped.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A start, end or path coordinate fell outside the grid being rendered.
    #[error("coordinate {point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
}
