//! Clumsy Crucible: least heat loss under run-length limits.
//!
//! The search itself is [`gridwalk_paths::least_heat_loss`].

use gridwalk_core::Grid;
use gridwalk_paths::{RunLimits, least_heat_loss};

use crate::error::PuzzleError;
use crate::runner::Solution;

pub const PART1_LIMITS: RunLimits = RunLimits::CRUCIBLE;
pub const PART2_LIMITS: RunLimits = RunLimits::ULTRA_CRUCIBLE;

pub struct Day17;

impl Solution for Day17 {
    const DAY: u8 = 17;
    const TITLE: &'static str = "Clumsy Crucible";
    type Input = Grid<u8>;
    type Answer = i32;

    fn parse(text: &str) -> Result<Grid<u8>, PuzzleError> {
        Ok(Grid::parse_digits(text)?)
    }

    fn part1(grid: &Grid<u8>) -> Result<i32, PuzzleError> {
        Ok(least_heat_loss(grid, PART1_LIMITS)?)
    }

    fn part2(grid: &Grid<u8>) -> Result<i32, PuzzleError> {
        Ok(least_heat_loss(grid, PART2_LIMITS)?)
    }
}
