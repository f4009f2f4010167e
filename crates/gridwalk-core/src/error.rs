use thiserror::Error;

use crate::geom::Point;

/// Errors produced while turning puzzle text into grids or records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input had no rows.
    #[error("input is empty")]
    Empty,
    /// A row's width differs from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character not accepted by the cell parser.
    #[error("invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// A line-oriented record could not be read.
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

impl ParseError {
    /// Shorthand for [`ParseError::InvalidLine`] with a 0-based line index.
    pub fn line(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidLine {
            line: index + 1,
            reason: reason.into(),
        }
    }
}
