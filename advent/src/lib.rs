//! Solvers for Advent of Code 2023 puzzles, most of them grid-shaped.
//!
//! Each `dayNN` module implements [`runner::Solution`] for one puzzle and
//! is driven by the binary of the same name. Grid loading lives in
//! `gridwalk-core`; the heavier searches (run-constrained shortest paths,
//! step counting) live in `gridwalk-paths`.

pub mod error;
pub mod runner;

pub mod day03;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day21;
pub mod day23;

pub use error::PuzzleError;
pub use runner::{Report, Solution};
