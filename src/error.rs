use thiserror::Error;

/// Errors raised while building or configuring a [Board](crate::board::Board).
///
/// Failing to find a path is not an error: searches return an empty
/// [Path](crate::path::Path) instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("wall probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("max cost {max_cost} is negative or overflows a {width}x{height} board")]
    InvalidCost {
        max_cost: i32,
        width: usize,
        height: usize,
    },
    #[error("layout row {row} has width {found}, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown mark {mark:?} at ({x}, {y})")]
    UnknownMark { mark: char, x: usize, y: usize },
    #[error("second {mark:?} marker at ({x}, {y})")]
    DuplicateMarker { mark: char, x: usize, y: usize },
    #[error("coordinate ({x}, {y}) is not an available floor cell")]
    CoordinateUnavailable { x: i32, y: i32 },
}
