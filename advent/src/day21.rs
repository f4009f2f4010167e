//! Step Counter: garden plots reachable after an exact number of steps.

use gridwalk_core::{Grid, Point};
use gridwalk_paths::{Boundary, StepCounter};

use crate::error::PuzzleError;
use crate::runner::Solution;

pub const PART1_STEPS: usize = 64;
pub const PART2_STEPS: usize = 26_501_365;

/// Parse the garden, marking rocks as blocked.
pub fn parse_garden(text: &str) -> Result<StepCounter, PuzzleError> {
    let mut start = None;
    let blocked = Grid::parse_with(text, |c, p: Point| match c {
        '#' => Some(true),
        '.' => Some(false),
        'S' => {
            if start.is_none() {
                start = Some(p);
            }
            Some(false)
        }
        _ => None,
    })?;
    let start = start.ok_or(PuzzleError::MissingStart)?;
    Ok(StepCounter::new(blocked, start, Boundary::Bounded)?)
}

pub struct Day21;

impl Solution for Day21 {
    const DAY: u8 = 21;
    const TITLE: &'static str = "Step Counter";
    type Input = StepCounter;
    type Answer = u64;

    fn parse(text: &str) -> Result<StepCounter, PuzzleError> {
        parse_garden(text)
    }

    fn part1(garden: &StepCounter) -> Result<u64, PuzzleError> {
        let bounded = garden.clone().with_boundary(Boundary::Bounded);
        Ok(bounded.walk(PART1_STEPS) as u64)
    }

    /// Extrapolated; see [`StepCounter::fit_quadratic`].
    fn part2(garden: &StepCounter) -> Result<u64, PuzzleError> {
        let tiled = garden.clone().with_boundary(Boundary::Tiled);
        Ok(tiled.extrapolate(PART2_STEPS)?)
    }
}
