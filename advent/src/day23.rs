//! A Long Walk: the longest simple path through a trail map.
//!
//! The map is a maze of one-cell-wide corridors meeting at a few
//! junctions. It is first compressed into a [`JunctionGraph`] whose edges
//! are corridor lengths; the longest path is then an exhaustive DFS over
//! that much smaller graph.

use std::collections::HashMap;

use gridwalk_core::{Direction, Grid, Point};
use gridwalk_paths::SearchError;

use crate::error::PuzzleError;
use crate::runner::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trail {
    Path,
    Forest,
    /// Icy slope: may only be left downhill, in its direction.
    Slope(Direction),
}

impl Trail {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '.' => Trail::Path,
            '#' => Trail::Forest,
            '^' => Trail::Slope(Direction::North),
            '>' => Trail::Slope(Direction::East),
            'v' => Trail::Slope(Direction::South),
            '<' => Trail::Slope(Direction::West),
            _ => return None,
        })
    }
}

/// The trail grid with its entry in the top row and exit in the bottom row.
#[derive(Debug, Clone)]
pub struct TrailMap {
    grid: Grid<Trail>,
    start: Point,
    end: Point,
}

impl TrailMap {
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let grid = Grid::parse_with(text, |c, _| Trail::from_char(c))?;
        let gap = |y: i32| {
            (0..grid.width())
                .map(|x| Point::new(x, y))
                .find(|&p| grid.at(p) == Some(&Trail::Path))
        };
        let start = gap(0).ok_or(PuzzleError::MissingTrailEnd("top"))?;
        let end = gap(grid.height() - 1).ok_or(PuzzleError::MissingTrailEnd("bottom"))?;
        Ok(Self { grid, start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    fn is_open(&self, p: Point) -> bool {
        matches!(self.grid.at(p), Some(Trail::Path | Trail::Slope(_)))
    }

    /// Whether a hiker on `p` may step toward `d`.
    fn may_leave(&self, p: Point, d: Direction, slopes: bool) -> bool {
        match self.grid.at(p) {
            Some(&Trail::Slope(downhill)) if slopes => downhill == d,
            _ => true,
        }
    }

    fn open_neighbors(&self, p: Point) -> usize {
        p.neighbors_4().into_iter().filter(|&n| self.is_open(n)).count()
    }
}

/// Start, end and every junction, joined by corridor lengths.
#[derive(Debug, Clone)]
pub struct JunctionGraph {
    nodes: Vec<Point>,
    edges: Vec<Vec<(usize, u32)>>,
}

impl JunctionGraph {
    const START: usize = 0;
    const END: usize = 1;

    /// Compress `map`. With `slopes` set, corridors can only be followed
    /// downhill across slope cells.
    pub fn build(map: &TrailMap, slopes: bool) -> Self {
        let mut nodes = vec![map.start, map.end];
        nodes.extend(map.grid.positions(|&t| t != Trail::Forest).filter(|&p| {
            p != map.start && p != map.end && map.open_neighbors(p) >= 3
        }));
        let index: HashMap<Point, usize> =
            nodes.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        let mut edges = vec![Vec::new(); nodes.len()];
        for (i, &node) in nodes.iter().enumerate() {
            for d in Direction::ALL {
                if !map.may_leave(node, d, slopes) || !map.is_open(node.step(d)) {
                    continue;
                }
                if let Some(edge) = follow_corridor(map, &index, node, d, slopes) {
                    edges[i].push(edge);
                }
            }
        }

        log::debug!(
            "junction graph: {} nodes, {} edges (slopes: {slopes})",
            nodes.len(),
            edges.iter().map(Vec::len).sum::<usize>()
        );
        Self { nodes, edges }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length of the longest simple path from start to end, if any.
    pub fn longest_path(&self) -> Option<u32> {
        if self.nodes[Self::START] == self.nodes[Self::END] {
            return Some(0);
        }
        let mut best = None;
        let mut visited = vec![false; self.nodes.len()];
        visited[Self::START] = true;
        // (node, next edge to try, distance so far)
        let mut stack = vec![(Self::START, 0usize, 0u32)];

        while let Some(frame) = stack.last_mut() {
            let (node, cursor, dist) = *frame;
            if node == Self::END {
                best = best.max(Some(dist));
                visited[node] = false;
                stack.pop();
                continue;
            }
            match self.edges[node].get(cursor) {
                Some(&(next, len)) => {
                    frame.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0, dist + len));
                    }
                }
                None => {
                    visited[node] = false;
                    stack.pop();
                }
            }
        }
        best
    }
}

/// Walk from `node` toward `d` until the next graph node. `None` for dead
/// ends and slopes pointing back.
fn follow_corridor(
    map: &TrailMap,
    index: &HashMap<Point, usize>,
    node: Point,
    d: Direction,
    slopes: bool,
) -> Option<(usize, u32)> {
    let mut prev = node;
    let mut pos = node.step(d);
    let mut len = 1;
    loop {
        if let Some(&target) = index.get(&pos) {
            return Some((target, len));
        }
        let next = Direction::ALL
            .into_iter()
            .find(|&nd| pos.step(nd) != prev && map.is_open(pos.step(nd)))?;
        if !map.may_leave(pos, next, slopes) {
            return None;
        }
        prev = pos;
        pos = pos.step(next);
        len += 1;
    }
}

fn longest_hike(map: &TrailMap, slopes: bool) -> Result<u32, PuzzleError> {
    JunctionGraph::build(map, slopes).longest_path().ok_or(
        SearchError::NoPathFound {
            from: map.start,
            to: map.end,
        }
        .into(),
    )
}

pub struct Day23;

impl Solution for Day23 {
    const DAY: u8 = 23;
    const TITLE: &'static str = "A Long Walk";
    type Input = TrailMap;
    type Answer = u32;

    fn parse(text: &str) -> Result<TrailMap, PuzzleError> {
        TrailMap::parse(text)
    }

    fn part1(map: &TrailMap) -> Result<u32, PuzzleError> {
        longest_hike(map, true)
    }

    fn part2(map: &TrailMap) -> Result<u32, PuzzleError> {
        longest_hike(map, false)
    }
}
