//! Pipe Maze: trace the loop through `S`, then measure it.
//!
//! The enclosed count comes from the loop's corner polygon: with twice the
//! shoelace area `2A` and loop length `L`, Pick's theorem gives
//! `A - L/2 + 1` interior cells.

use gridwalk_core::{Direction, Grid, Point};

use crate::error::PuzzleError;
use crate::runner::Solution;

/// One cell of the pipe map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Ground,
    Start,
    /// A pipe joining two directions.
    Pipe(Direction, Direction),
}

impl Tile {
    fn from_char(c: char) -> Option<Self> {
        use Direction::*;
        Some(match c {
            '.' => Tile::Ground,
            'S' => Tile::Start,
            '|' => Tile::Pipe(North, South),
            '-' => Tile::Pipe(East, West),
            'L' => Tile::Pipe(North, East),
            'J' => Tile::Pipe(North, West),
            '7' => Tile::Pipe(South, West),
            'F' => Tile::Pipe(South, East),
            _ => return None,
        })
    }

    /// The exit taken by a walker entering while heading `heading`, if the
    /// pipe accepts it.
    fn exit(self, heading: Direction) -> Option<Direction> {
        let Tile::Pipe(a, b) = self else {
            return None;
        };
        let entry = heading.reverse();
        if entry == a {
            Some(b)
        } else if entry == b {
            Some(a)
        } else {
            None
        }
    }
}

/// The parsed maze with its start position.
#[derive(Debug, Clone)]
pub struct PipeMap {
    tiles: Grid<Tile>,
    start: Point,
}

impl PipeMap {
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let tiles = Grid::parse_with(text, |c, _| Tile::from_char(c))?;
        let start = tiles
            .find(|&t| t == Tile::Start)
            .ok_or(PuzzleError::MissingStart)?;
        Ok(Self { tiles, start })
    }

    /// Cells of the loop in walking order, starting at `S`.
    pub fn trace_loop(&self) -> Result<Vec<Point>, PuzzleError> {
        // Try west, east, north, south in turn.
        let candidates = [
            Direction::West,
            Direction::East,
            Direction::North,
            Direction::South,
        ];
        let mut heading = candidates
            .into_iter()
            .find(|&d| {
                self.tiles
                    .at(self.start.step(d))
                    .is_some_and(|t| t.exit(d).is_some())
            })
            .ok_or(PuzzleError::BrokenLoop(self.start))?;

        let mut path = vec![self.start];
        let mut pos = self.start.step(heading);
        loop {
            match self.tiles.at(pos) {
                Some(Tile::Start) => break,
                Some(&tile) => {
                    heading = tile.exit(heading).ok_or(PuzzleError::BrokenLoop(pos))?;
                }
                None => return Err(PuzzleError::BrokenLoop(pos)),
            }
            // A loop can never be longer than the map.
            if path.len() > self.tiles.len() {
                return Err(PuzzleError::BrokenLoop(pos));
            }
            path.push(pos);
            pos = pos.step(heading);
        }
        log::debug!("loop of {} cells through {}", path.len(), self.start);
        Ok(path)
    }
}

/// Number of cells strictly inside the closed loop `path`.
pub fn enclosed_cells(path: &[Point]) -> u64 {
    let n = path.len();
    let twice_area: i64 = (0..n)
        .map(|i| {
            let a = path[i];
            let b = path[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum::<i64>()
        .abs();
    ((twice_area - n as i64) / 2 + 1).max(0) as u64
}

pub struct Day10;

impl Solution for Day10 {
    const DAY: u8 = 10;
    const TITLE: &'static str = "Pipe Maze";
    type Input = PipeMap;
    type Answer = u64;

    fn parse(text: &str) -> Result<PipeMap, PuzzleError> {
        PipeMap::parse(text)
    }

    fn part1(map: &PipeMap) -> Result<u64, PuzzleError> {
        Ok(map.trace_loop()?.len() as u64 / 2)
    }

    fn part2(map: &PipeMap) -> Result<u64, PuzzleError> {
        Ok(enclosed_cells(&map.trace_loop()?))
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_core::ParseError;

    use super::*;
    use crate::runner::solve;

    const SQUARE: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    const NOISY: &str = "\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";

    const POCKETS: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    const LARGE: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    fn answers(text: &str) -> (u64, u64) {
        let map = Day10::parse(text).unwrap();
        (Day10::part1(&map).unwrap(), Day10::part2(&map).unwrap())
    }

    #[test]
    fn examples() {
        assert_eq!(answers(SQUARE), (8, 1));
        assert_eq!(answers(NOISY), (4, 1));
        assert_eq!(answers(POCKETS), (23, 4));
        assert_eq!(answers(LARGE), (70, 8));
    }

    #[test]
    fn loop_starts_at_s() {
        let map = PipeMap::parse(NOISY).unwrap();
        let path = map.trace_loop().unwrap();
        assert_eq!(path[0], Point::new(1, 1));
        assert_eq!(path.len(), 8);
    }

    #[test]
    fn missing_start() {
        assert_eq!(
            PipeMap::parse("F7\nLJ\n").unwrap_err(),
            PuzzleError::MissingStart
        );
    }

    #[test]
    fn dead_end_is_a_broken_loop() {
        let map = PipeMap::parse("S-7\n..|\n...\n").unwrap();
        assert_eq!(
            map.trace_loop(),
            Err(PuzzleError::BrokenLoop(Point::new(2, 2)))
        );
    }

    #[test]
    fn unknown_glyph() {
        assert!(matches!(
            PipeMap::parse("S-x\n"),
            Err(PuzzleError::Parse(ParseError::InvalidChar { ch: 'x', .. }))
        ));
    }

    #[test]
    fn report() {
        let report = solve::<Day10>(SQUARE).unwrap();
        assert_eq!(report.to_string(), "Day 10: Pipe Maze\nPart 1: 8\nPart 2: 1\n");
    }
}
