//! Parabolic Reflector Dish: tilting a platform of rolling rocks.

use std::collections::HashMap;

use gridwalk_core::{Direction, Grid, Point};

use crate::error::PuzzleError;
use crate::runner::Solution;

/// Spin cycles run in part 2.
pub const SPIN_CYCLES: usize = 1_000_000_000;

/// Tilt order of one spin cycle.
pub const SPIN: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rock {
    Empty,
    /// Rolls when the platform tilts.
    Round,
    /// Never moves.
    Cube,
}

impl Rock {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Rock::Empty),
            'O' => Some(Rock::Round),
            '#' => Some(Rock::Cube),
            _ => None,
        }
    }

    fn glyph(self) -> char {
        match self {
            Rock::Empty => '.',
            Rock::Round => 'O',
            Rock::Cube => '#',
        }
    }
}

/// Roll every round rock as far as it goes toward `toward`.
pub fn tilt(grid: &mut Grid<Rock>, toward: Direction) {
    let (w, h) = (grid.width(), grid.height());
    let (lanes, len) = if toward.is_horizontal() {
        (h, w)
    } else {
        (w, h)
    };

    for lane in 0..lanes {
        // The i-th cell of the lane, counted from the edge rocks roll to.
        let at = |i: i32| match toward {
            Direction::North => Point::new(lane, i),
            Direction::South => Point::new(lane, h - 1 - i),
            Direction::West => Point::new(i, lane),
            Direction::East => Point::new(w - 1 - i, lane),
        };
        let mut free = 0;
        for i in 0..len {
            match grid[at(i)] {
                Rock::Cube => free = i + 1,
                Rock::Round => {
                    if free != i {
                        grid.swap(at(free), at(i));
                    }
                    free += 1;
                }
                Rock::Empty => {}
            }
        }
    }
}

/// One spin cycle: tilt north, west, south, then east.
pub fn spin(grid: &mut Grid<Rock>) {
    for d in SPIN {
        tilt(grid, d);
    }
}

/// Sum over round rocks of their distance from the south edge, counting
/// the bottom row as 1.
pub fn north_load(grid: &Grid<Rock>) -> u64 {
    grid.positions(|&r| r == Rock::Round)
        .map(|p| (grid.height() - p.y) as u64)
        .sum()
}

/// North load after `cycles` spin cycles. Stops simulating once a
/// platform state repeats and reads the answer off the detected cycle.
pub fn load_after_spins(platform: &Grid<Rock>, cycles: usize) -> u64 {
    let mut grid = platform.clone();
    let mut seen: HashMap<Grid<Rock>, usize> = HashMap::from([(grid.clone(), 0)]);
    // loads[k] is the load after k cycles.
    let mut loads = vec![north_load(&grid)];

    for done in 1..=cycles {
        spin(&mut grid);
        if let Some(&first) = seen.get(&grid) {
            let period = done - first;
            log::debug!("spin state after {done} cycles repeats cycle {first} (period {period})");
            return loads[first + (cycles - first) % period];
        }
        seen.insert(grid.clone(), done);
        loads.push(north_load(&grid));
    }
    north_load(&grid)
}

/// Platform as text, one row per line.
pub fn render(grid: &Grid<Rock>) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for row in grid.rows() {
        out.extend(row.iter().map(|r| r.glyph()));
        out.push('\n');
    }
    out
}

pub struct Day14;

impl Solution for Day14 {
    const DAY: u8 = 14;
    const TITLE: &'static str = "Parabolic Reflector Dish";
    type Input = Grid<Rock>;
    type Answer = u64;

    fn parse(text: &str) -> Result<Grid<Rock>, PuzzleError> {
        Ok(Grid::parse_with(text, |c, _| Rock::from_char(c))?)
    }

    fn part1(platform: &Grid<Rock>) -> Result<u64, PuzzleError> {
        let mut grid = platform.clone();
        tilt(&mut grid, Direction::North);
        Ok(north_load(&grid))
    }

    fn part2(platform: &Grid<Rock>) -> Result<u64, PuzzleError> {
        Ok(load_after_spins(platform, SPIN_CYCLES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATFORM: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    const AFTER_ONE_SPIN: &str = "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
";

    fn platform() -> Grid<Rock> {
        Day14::parse(PLATFORM).unwrap()
    }

    #[test]
    fn example_parts() {
        let p = platform();
        assert_eq!(Day14::part1(&p), Ok(136));
        assert_eq!(Day14::part2(&p), Ok(64));
    }

    #[test]
    fn one_spin() {
        let mut grid = platform();
        spin(&mut grid);
        assert_eq!(render(&grid), AFTER_ONE_SPIN);
    }

    #[test]
    fn detected_cycle_matches_simulation() {
        let p = platform();
        for cycles in [0, 1, 5, 12, 30] {
            let mut grid = p.clone();
            for _ in 0..cycles {
                spin(&mut grid);
            }
            assert_eq!(load_after_spins(&p, cycles), north_load(&grid), "{cycles}");
        }
    }

    #[test]
    fn tilting_keeps_rock_counts() {
        let mut grid = platform();
        let round = grid.count(|&r| r == Rock::Round);
        let cubes: Vec<Point> = grid.positions(|&r| r == Rock::Cube).collect();
        for d in Direction::ALL {
            tilt(&mut grid, d);
            assert_eq!(grid.count(|&r| r == Rock::Round), round);
            assert_eq!(grid.positions(|&r| r == Rock::Cube).collect::<Vec<_>>(), cubes);
        }
    }

    #[test]
    fn tilt_is_idempotent() {
        let mut once = platform();
        tilt(&mut once, Direction::East);
        let mut twice = once.clone();
        tilt(&mut twice, Direction::East);
        assert_eq!(once, twice);
    }

    #[test]
    fn rocks_stop_at_cubes() {
        let mut grid = Day14::parse(".O#.O\n").unwrap();
        tilt(&mut grid, Direction::West);
        assert_eq!(render(&grid), "O.#O.\n");
        tilt(&mut grid, Direction::East);
        assert_eq!(render(&grid), ".O#.O\n");
    }
}
