//! Geometry and grid types shared by the gridwalk puzzle solvers.
//!
//! This crate provides the foundational types: integer points and
//! rectangles, cardinal directions, a dense immutable-by-default grid, and
//! the text loader that builds grids from puzzle input.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::ParseError;
pub use geom::{Direction, Point, Range};
pub use grid::Grid;
