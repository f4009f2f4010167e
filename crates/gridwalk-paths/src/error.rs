use gridwalk_core::Point;
use thiserror::Error;

/// Failures of the grid searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The destination cannot be reached under the movement rules.
    #[error("no path from {from} to {to} under the given constraints")]
    NoPathFound { from: Point, to: Point },
    #[error("invalid run limits: min_run {min_run} exceeds max_run {max_run}")]
    InvalidRunLimits { min_run: u32, max_run: u32 },
    /// An endpoint lies outside the grid.
    #[error("{0} is outside the grid")]
    OutOfBounds(Point),
    /// Extrapolation was asked of a bounded grid.
    #[error("step extrapolation needs a tiled grid")]
    NotTiled,
    /// Extrapolation needs one period for both axes.
    #[error("step extrapolation needs a square tile, got size {0}")]
    NotSquare(Point),
}
