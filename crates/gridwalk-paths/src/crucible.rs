//! Least-cost paths under run-length constraints.
//!
//! A walker must keep its heading for at least `min_run` cells after every
//! turn and may keep it for at most `max_run` cells. The search runs over
//! states `(cell, heading, run)`; each expansion turns left or right and
//! then advances `1..=max_run` cells in the new heading, emitting a state
//! for every advance of at least `min_run` cells. Going straight is never
//! a separate move, so the run counter never needs to grow in place.

use std::collections::BinaryHeap;

use gridwalk_core::{Direction, Grid, Point};

use crate::error::SearchError;
use crate::pathrange::UNREACHABLE;

/// How far a walker may and must travel between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLimits {
    pub min_run: u32,
    pub max_run: u32,
}

impl RunLimits {
    /// At most three cells between turns.
    pub const CRUCIBLE: Self = Self::new(1, 3);
    /// Four to ten cells between turns.
    pub const ULTRA_CRUCIBLE: Self = Self::new(4, 10);

    pub const fn new(min_run: u32, max_run: u32) -> Self {
        Self { min_run, max_run }
    }

    /// Check the limits, reading a `min_run` of 0 as 1.
    fn normalized(self) -> Result<(u32, u32), SearchError> {
        let min_run = self.min_run.max(1);
        if self.max_run < min_run {
            return Err(SearchError::InvalidRunLimits {
                min_run: self.min_run,
                max_run: self.max_run,
            });
        }
        Ok((min_run, self.max_run))
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        Self::CRUCIBLE
    }
}

/// Priority-queue entry, ordered by `cost` (smallest first).
#[derive(Clone, Copy, Eq, PartialEq)]
struct StateRef {
    cost: i32,
    cell: usize,
    heading: Direction,
    run: u32,
}

impl Ord for StateRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for StateRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum cost from the top-left cell to the bottom-right cell.
///
/// See [`constrained_path_cost`].
pub fn least_heat_loss(grid: &Grid<u8>, limits: RunLimits) -> Result<i32, SearchError> {
    let to = grid.size() - Point::new(1, 1);
    constrained_path_cost(grid, Point::ZERO, to, limits)
}

/// Minimum cost of walking from `from` to `to` under `limits`.
///
/// Entering a cell costs its digit; the start cell is free. The walker may
/// leave `from` in any of the four directions and must arrive at `to` at
/// the end of a run of at least `min_run` cells.
pub fn constrained_path_cost(
    grid: &Grid<u8>,
    from: Point,
    to: Point,
    limits: RunLimits,
) -> Result<i32, SearchError> {
    let (min_run, max_run) = limits.normalized()?;
    let start = grid.index_of(from).ok_or(SearchError::OutOfBounds(from))?;
    let goal = grid.index_of(to).ok_or(SearchError::OutOfBounds(to))?;
    if start == goal {
        return Ok(0);
    }

    // No straight run can cross more cells than the longer side minus one.
    let longest = (grid.width().max(grid.height()) - 1).max(0) as u32;
    if min_run > longest {
        return Err(SearchError::NoPathFound { from, to });
    }
    let max_run = max_run.min(longest);

    let runs = max_run as usize + 1;
    let state = |cell: usize, heading: Direction, run: u32| {
        (cell * 4 + heading.index()) * runs + run as usize
    };
    let mut best = vec![UNREACHABLE; grid.len() * 4 * runs];
    let mut closed = vec![false; best.len()];

    let mut open: BinaryHeap<StateRef> = BinaryHeap::new();
    for heading in Direction::ALL {
        best[state(start, heading, 0)] = 0;
        open.push(StateRef {
            cost: 0,
            cell: start,
            heading,
            run: 0,
        });
    }

    let cells = grid.cells();
    let mut settled = 0usize;
    while let Some(current) = open.pop() {
        let si = state(current.cell, current.heading, current.run);
        // Stale entry: this state was already settled at a lower or equal cost.
        if closed[si] || current.cost > best[si] {
            continue;
        }
        closed[si] = true;
        settled += 1;

        if current.cell == goal && current.run >= min_run {
            log::debug!(
                "crucible {}..={}: cost {} after settling {settled} states",
                min_run,
                max_run,
                current.cost
            );
            return Ok(current.cost);
        }

        let pos = grid.point_of(current.cell);
        for heading in [current.heading.turn_left(), current.heading.turn_right()] {
            let mut next = pos;
            let mut cost = current.cost;
            for run in 1..=max_run {
                next = next.step(heading);
                let Some(ni) = grid.index_of(next) else {
                    break;
                };
                cost += cells[ni] as i32;
                if run < min_run {
                    continue;
                }
                let nsi = state(ni, heading, run);
                if cost < best[nsi] {
                    best[nsi] = cost;
                    open.push(StateRef {
                        cost,
                        cell: ni,
                        heading,
                        run,
                    });
                }
            }
        }
    }

    log::debug!("crucible {min_run}..={max_run}: exhausted after {settled} states");
    Err(SearchError::NoPathFound { from, to })
}
