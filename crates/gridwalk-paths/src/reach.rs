//! Counting the cells a walker can stand on after exactly `N` steps.
//!
//! [`StepCounter::walk`] replaces the frontier with all open neighbours of
//! its cells once per step. A cell can be re-entered after two steps by
//! stepping off and back, so the frontier after `N` steps is exactly the
//! set of cells whose shortest distance is at most `N` and has the parity
//! of `N`. [`StepCounter::reachable_by_parity`] computes that set directly
//! from a BFS distance map and serves as a cross-check.
//!
//! For step counts far beyond the size of a tiled map,
//! [`StepCounter::fit_quadratic`] samples three walks one period apart and
//! fits a quadratic. This is an approximation: it is exact only when the
//! reachable area grows quadratically per period, which holds for maps with
//! open lanes running from the start to the tile edges.

use std::collections::HashSet;

use gridwalk_core::{Grid, Point, Range};

use crate::PathRange;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::traits::Pather;

/// How the map behaves past its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Cells outside the map cannot be entered.
    #[default]
    Bounded,
    /// The map repeats infinitely in every direction.
    Tiled,
}

/// A map of blocked cells with a start position.
#[derive(Debug, Clone)]
pub struct StepCounter {
    blocked: Grid<bool>,
    start: Point,
    boundary: Boundary,
}

impl StepCounter {
    /// `blocked` marks cells that cannot be entered. `start` must be inside
    /// the map.
    pub fn new(blocked: Grid<bool>, start: Point, boundary: Boundary) -> Result<Self, SearchError> {
        if !blocked.contains(start) {
            return Err(SearchError::OutOfBounds(start));
        }
        Ok(Self {
            blocked,
            start,
            boundary,
        })
    }

    /// The same map with a different boundary.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Whether a walker may stand on `p`.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        match self.boundary {
            Boundary::Bounded => self.blocked.at(p) == Some(&false),
            Boundary::Tiled => !*self.blocked.at_wrapped(p),
        }
    }

    /// Number of distinct cells the walker can occupy after exactly `steps`
    /// steps, by replacing the frontier once per step.
    pub fn walk(&self, steps: usize) -> usize {
        let mut frontier: HashSet<Point> = HashSet::from([self.start]);
        let mut next: HashSet<Point> = HashSet::new();
        let mut nb = Neighbors::new();

        for _ in 0..steps {
            next.clear();
            for &p in &frontier {
                next.extend(nb.cardinal(p, |n| self.is_open(n)));
            }
            std::mem::swap(&mut frontier, &mut next);
        }

        log::debug!(
            "walk: {} cells after {steps} steps ({:?})",
            frontier.len(),
            self.boundary
        );
        frontier.len()
    }

    /// Same count as [`walk`](Self::walk), from a single BFS: cells at
    /// distance `<= steps` with the parity of `steps`.
    pub fn reachable_by_parity(&self, steps: usize) -> usize {
        let rng = match self.boundary {
            Boundary::Bounded => self.blocked.bounds(),
            Boundary::Tiled => {
                let s = steps as i32;
                Range::new(
                    self.start.x - s,
                    self.start.y - s,
                    self.start.x + s + 1,
                    self.start.y + s + 1,
                )
            }
        };
        let parity = (steps % 2) as i32;
        let mut pr = PathRange::new(rng);
        pr.bfs_map(self, &[self.start], steps as i32)
            .iter()
            .filter(|n| n.cost % 2 == parity)
            .count()
    }

    /// Sample [`walk`](Self::walk) at `steps mod P`, one period later and
    /// two periods later, where `P` is the side of the square tile.
    ///
    /// The fit is only meaningful when growth is exactly quadratic per
    /// period; see the module docs.
    pub fn fit_quadratic(&self, steps: usize) -> Result<QuadraticFit, SearchError> {
        if self.boundary != Boundary::Tiled {
            return Err(SearchError::NotTiled);
        }
        let size = self.blocked.size();
        if size.x != size.y {
            return Err(SearchError::NotSquare(size));
        }
        let period = size.x as usize;
        let offset = steps % period;
        let samples = [
            self.walk(offset) as u64,
            self.walk(offset + period) as u64,
            self.walk(offset + 2 * period) as u64,
        ];
        log::info!(
            "extrapolating {steps} steps from samples {samples:?} (quadratic approximation)"
        );
        Ok(QuadraticFit {
            period,
            offset,
            samples,
        })
    }

    /// Approximate [`walk`](Self::walk) for a huge `steps` on a tiled map.
    pub fn extrapolate(&self, steps: usize) -> Result<u64, SearchError> {
        let fit = self.fit_quadratic(steps)?;
        Ok(fit.eval((steps / fit.period) as u64))
    }
}

impl Pather for StepCounter {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}

/// Reachable counts sampled at `offset + k * period` for `k = 0, 1, 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticFit {
    pub period: usize,
    pub offset: usize,
    pub samples: [u64; 3],
}

impl QuadraticFit {
    /// Value of the quadratic through the samples at `k`, i.e. the
    /// estimated count after `offset + k * period` steps.
    pub fn eval(&self, k: u64) -> u64 {
        let [b0, b1, b2] = self.samples.map(|s| s as i64);
        let k = k as i64;
        let first = b1 - b0;
        let second = b2 - 2 * b1 + b0;
        let value = b0 + k * first + k * (k - 1) / 2 * second;
        value.max(0) as u64
    }
}
